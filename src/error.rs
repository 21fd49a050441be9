use thiserror::Error;

/// The error type for the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL does not carry the scheme implied by the configuration.
    #[error("Invalid base URL: {0}, expected scheme: {1}")]
    InvalidBaseUrl(String, String),
    /// Normalized URL was rejected by the URL parser.
    #[error("Cannot parse URL")]
    CannotParseUrl,
    /// Transport-level failure, surfaced unchanged.
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    /// Response with a non-success status code.
    #[error("HTTP response error, status: {0}, body: {1}")]
    HttpResponseError(u16, String),
    /// Request payload could not be serialized.
    #[error("Cannot serialize request payload")]
    CannotSerializePayload(#[from] serde_json::Error),
}
