use reqwest::header::HeaderMap;
use std::time::Duration;

/// Configuration for the base URL a client is bound to.
///
/// The stored base URL of a constructed client is always the normalized
/// join of `base_url` and `endpoint`, with the scheme implied by
/// `use_https`.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub use_https: bool,
    pub base_url: String,
    pub endpoint: String,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            use_https: false,
            base_url: "http://127.0.0.1:3000".to_string(),
            endpoint: "".to_string(),
        }
    }
}

/// Construction-time options applied to the underlying transport,
/// excluding the base URL, which is always owned by the client.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub default_headers: HeaderMap,
    pub user_agent: Option<String>,
}

/// Per-call overrides passed through to the transport unchanged.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}
