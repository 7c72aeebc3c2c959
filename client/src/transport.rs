//! Request dispatch.

use crate::encode::RequestBody;
use crate::error::ApiError;
use reqwest::StatusCode;
use std::future::Future;
use tracing::Instrument;

pub use reqwest::Method;

/// Everything needed to issue one request.
#[derive(Debug)]
pub struct RequestParts {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, base URL already applied.
    pub url: String,
    /// Header name/value pairs, in application order.
    pub headers: Vec<(String, String)>,
    /// Request body; `None` for GET.
    pub body: Option<RequestBody>,
}

/// A parsed response from the transport.
///
/// Only successful responses come back this way; non-2xx statuses and
/// network failures surface as [`ApiError`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body parsed as JSON; `Null` when the body was empty.
    pub body: serde_json::Value,
}

/// Transport issuing assembled requests.
///
/// The `key` identifies the logical request (e.g. `"getItems"`) for
/// caching or deduplication purposes. The built-in [`HttpTransport`]
/// records it on the dispatch span and nothing more; a caching transport
/// can wrap any other transport and act on it.
pub trait Transport: Send + Sync {
    /// Dispatch one request and parse the response body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::RequestFailed`] when no response was produced
    /// - [`ApiError::Unauthorized`] on HTTP 401
    /// - [`ApiError::Api`] on any other non-success status
    /// - [`ApiError::ResponseParseFailed`] when the body is not JSON
    fn dispatch(
        &self,
        key: &str,
        parts: RequestParts,
    ) -> impl Future<Output = Result<TransportResponse, ApiError>> + Send;
}

/// Transport backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a fresh connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport over an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn dispatch(
        &self,
        key: &str,
        parts: RequestParts,
    ) -> impl Future<Output = Result<TransportResponse, ApiError>> + Send {
        let client = self.client.clone();
        let span = tracing::debug_span!(
            "api_request",
            key,
            method = %parts.method,
            url = %parts.url,
        );

        async move {
            let mut request = client.request(parts.method, &parts.url);
            for (name, value) in &parts.headers {
                request = request.header(name.as_str(), value.as_str());
            }
            request = match parts.body {
                None => request,
                Some(RequestBody::Json(value)) => request.json(&value),
                Some(RequestBody::Multipart(form)) => request.multipart(form),
            };

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED {
                return Err(ApiError::Unauthorized);
            }
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(ApiError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let text = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            let body = if text.is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_str(&text)
                    .map_err(|e| ApiError::ResponseParseFailed(e.to_string()))?
            };

            tracing::debug!(status = status.as_u16(), "response received");
            Ok(TransportResponse {
                status: status.as_u16(),
                body,
            })
        }
        .instrument(span)
    }
}
