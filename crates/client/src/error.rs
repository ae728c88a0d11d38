use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown client {0}")]
    UnknownClient(String),
    #[error("unknown api {0}")]
    UnknownApi(String),
    #[error("client {0} already registered")]
    DuplicateClient(String),
    #[error("no server configured")]
    NoServer,
    #[error("missing path parameter {0}")]
    MissingPathParam(String),
    #[error("params must serialize to a JSON object")]
    InvalidParams,
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
