use axum::{body::Bytes, http::StatusCode, routing::post, Extension, Router};
use serde_json::{json, Value};

use crate::sink::PayloadSink;

/// `POST /api/v1/login`.
///
/// The body is read as raw bytes and parsed as JSON, so any `Content-Type`
/// header is accepted and no schema applies. A parse failure yields a plain
/// 400. The success response is the JSON-encoded string itself rather than a
/// `Json` responder, which leaves the content type at axum's plain-text
/// default.
async fn handler(
    Extension(sink): Extension<PayloadSink>,
    body: Bytes,
) -> Result<String, StatusCode> {
    let payload: Value = serde_json::from_slice(&body).map_err(|_| StatusCode::BAD_REQUEST)?;

    // The whole payload is printed unredacted, credentials included. The
    // original service behaved this way; kept for compatibility.
    sink.write_line(&payload.to_string());

    Ok(json!({ "status": "aaa" }).to_string())
}

pub fn router() -> Router {
    Router::new().route("/", post(handler))
}
