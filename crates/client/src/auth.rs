use reqwest::RequestBuilder;

use crate::error::Error;

/// Hook that decorates an outgoing request with credentials.
pub trait Auth: Send + Sync {
    fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder, Error>;
}

/// HTTP basic authentication.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub name: String,
    pub password: String,
}

impl Auth for BasicAuth {
    fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(request.basic_auth(&self.name, Some(&self.password)))
    }
}
