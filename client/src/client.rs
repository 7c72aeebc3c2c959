//! API client: request assembly and dispatch.

use crate::config::{BaseUrls, ExecutionContext};
use crate::encode::{encode_query, QueryValue, RequestBody};
use crate::error::ApiError;
use crate::transport::{HttpTransport, Method, RequestParts, Transport};
use itemdeck_auth::AuthState;
use serde::de::DeserializeOwned;

/// Typed client for the itemdeck backend.
///
/// Each call assembles one request: GET parameters go into the URL query
/// string and the body stays empty; POST/PUT/DELETE parameters go into the
/// body and no query string is added. When the caller is authenticated at
/// dispatch time, `Authorization: Bearer <token>` is injected after all
/// caller headers, so it always wins on collision.
///
/// One instance is constructed at startup with an explicit execution
/// context and shared auth state, then passed to the resource façades.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: T,
    base_urls: BaseUrls,
    context: ExecutionContext,
    auth: AuthState,
}

impl ApiClient<HttpTransport> {
    /// Create a client over a fresh HTTP transport.
    #[must_use]
    pub fn new(base_urls: BaseUrls, context: ExecutionContext, auth: AuthState) -> Self {
        Self::with_transport(HttpTransport::new(), base_urls, context, auth)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over an explicit transport.
    #[must_use]
    pub fn with_transport(
        transport: T,
        base_urls: BaseUrls,
        context: ExecutionContext,
        auth: AuthState,
    ) -> Self {
        Self {
            transport,
            base_urls,
            context,
            auth,
        }
    }

    /// The auth state this client injects tokens from.
    #[must_use]
    pub const fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Issue a GET request. Parameters are serialized into the URL query;
    /// the body is empty.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the transport, plus
    /// [`ApiError::ResponseParseFailed`] when the response body does not
    /// deserialize as `R`.
    pub async fn get<R: DeserializeOwned>(
        &self,
        key: &str,
        path: &str,
        params: &[(&str, QueryValue)],
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let query = encode_query(params);
        let path = if query.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{query}")
        };
        self.dispatch(key, Method::GET, &path, None, headers).await
    }

    /// Issue a POST request with the given body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post<R: DeserializeOwned>(
        &self,
        key: &str,
        path: &str,
        body: RequestBody,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        self.dispatch(key, Method::POST, path, Some(body), headers)
            .await
    }

    /// Issue a PUT request with the given body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn put<R: DeserializeOwned>(
        &self,
        key: &str,
        path: &str,
        body: RequestBody,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        self.dispatch(key, Method::PUT, path, Some(body), headers)
            .await
    }

    /// Issue a DELETE request with the given body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete<R: DeserializeOwned>(
        &self,
        key: &str,
        path: &str,
        body: RequestBody,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        self.dispatch(key, Method::DELETE, path, Some(body), headers)
            .await
    }

    async fn dispatch<R: DeserializeOwned>(
        &self,
        key: &str,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let url = format!("{}{path}", self.base_urls.for_context(self.context));

        let mut header_pairs: Vec<(String, String)> = headers
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();

        // Bearer injection happens last and overwrites caller values.
        // token() yields the stored token only while authenticated.
        if let Some(token) = self.auth.token() {
            header_pairs.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
            header_pairs.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }

        let parts = RequestParts {
            method,
            url,
            headers: header_pairs,
            body,
        };
        let response = self.transport.dispatch(key, parts).await?;
        serde_json::from_value(response.body)
            .map_err(|e| ApiError::ResponseParseFailed(e.to_string()))
    }
}
