//! Declarative REST client bundle.
//!
//! Endpoints are described as data ([`Api`]), grouped into named clients
//! ([`ApiClient`]) and registered in a [`Bundle`]. A call goes through
//! `bundle.get("auth")?.call("login", &params)` with a serde-serializable
//! params struct and a typed response. Each params field is routed into the
//! request body, the path template or the query string by its
//! [`Position`].

pub mod api;
pub mod auth;
pub mod bundle;
pub mod config;
pub mod error;

pub use api::{Api, Method, Params, Position};
pub use auth::{Auth, BasicAuth};
pub use bundle::{ApiClient, Bundle, RestClient};
pub use config::{Config, HttpConfig};
pub use error::Error;
