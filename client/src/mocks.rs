//! Mock transport for testing.

use crate::encode::RequestBody;
use crate::error::ApiError;
use crate::transport::{RequestParts, Transport, TransportResponse};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

/// What a [`MockTransport`] remembers about one dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Request key passed to the transport.
    pub key: String,
    /// HTTP method, as text.
    pub method: String,
    /// Absolute URL.
    pub url: String,
    /// Headers in application order.
    pub headers: Vec<(String, String)>,
    /// Body summary; multipart payloads record only their kind.
    pub body: Option<RecordedBody>,
}

impl RecordedRequest {
    /// The last value of a header, case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Recorded request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedBody {
    /// JSON body, recorded verbatim.
    Json(serde_json::Value),
    /// Multipart form; the payload itself is opaque.
    Multipart,
}

/// Scriptable recording transport.
///
/// Responses are returned in the order they were enqueued; once the queue
/// is empty every dispatch resolves to `Null`. All dispatched requests are
/// recorded for assertions.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<TransportResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a transport that answers `Null` to everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a successful JSON response.
    pub fn push_json(&self, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(TransportResponse { status: 200, body }));
    }

    /// Enqueue a failure.
    pub fn push_error(&self, error: ApiError) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(error));
    }

    /// All requests dispatched so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent dispatched request.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Transport for MockTransport {
    fn dispatch(
        &self,
        key: &str,
        parts: RequestParts,
    ) -> impl Future<Output = Result<TransportResponse, ApiError>> + Send {
        let body = parts.body.map(|body| match body {
            RequestBody::Json(value) => RecordedBody::Json(value),
            RequestBody::Multipart(_) => RecordedBody::Multipart,
        });
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                key: key.to_owned(),
                method: parts.method.to_string(),
                url: parts.url,
                headers: parts.headers,
                body,
            });

        let response = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Ok(TransportResponse {
                    status: 200,
                    body: serde_json::Value::Null,
                })
            });

        async move { response }
    }
}
