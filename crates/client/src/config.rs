use serde::Deserialize;

/// HTTP transport tuning. All durations are in seconds; zero leaves the
/// corresponding limit unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpConfig {
    /// Over-all request timeout, covering connection time, any redirects and
    /// reading the response body.
    pub timeout: u64,
    pub connect_timeout: u64,
    pub keep_alive: u64,
    pub user_agent: String,
}

/// Bundle-wide client settings. Individual clients may carry their own
/// `Config` which overrides this one wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Verify server certificates on https connections.
    pub verify_cert: bool,
    /// Candidate servers; calls go to the first entry.
    pub servers: Vec<String>,
    pub http: HttpConfig,
    /// Emit a `tracing` debug event for every request and response.
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verify_cert: true,
            servers: Vec::new(),
            http: HttpConfig::default(),
            trace: false,
        }
    }
}
