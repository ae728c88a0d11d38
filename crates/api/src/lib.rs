//! Login stub service built on Axum.
//!
//! One route: `POST /api/v1/login` accepts an arbitrary JSON body, prints it
//! to a payload sink and answers with a fixed `{"status": "aaa"}` payload.

pub mod routes;
pub mod sink;
