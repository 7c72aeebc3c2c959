//! Error types for API requests.

use thiserror::Error;

/// Errors surfaced by the API client and its transport.
///
/// There is exactly one failure channel: a request either returns the
/// caller's declared response type or one of these. No retries happen
/// anywhere in this crate; a caller that needs reliability adds it outside.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS
    /// failure, aborted stream).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The request body could not be serialized.
    #[error("Request encoding failed: {0}")]
    RequestEncodeFailed(String),

    /// The response body could not be deserialized into the declared type.
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// The backend rejected the credentials (HTTP 401).
    #[error("Unauthorized")]
    Unauthorized,

    /// The backend returned any other non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text, verbatim
        message: String,
    },

    /// A required configuration value was absent.
    #[error("Missing {0} environment variable")]
    MissingBaseUrl(&'static str),
}
