//! Login and logout against the backend token endpoint.

use crate::client::ApiClient;
use crate::encode::RequestBody;
use crate::error::ApiError;
use crate::transport::Transport;
use serde::Deserialize;

/// What `/token` returns on a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// The issued access token.
    pub access_token: String,
    /// Token type, `"bearer"`.
    pub token_type: String,
}

/// Session operations: the one place a multipart form body is used.
///
/// The backend speaks the OAuth2 password flow on `/token`: credentials go
/// as form fields, and the response carries the access token that every
/// subsequent request attaches as a bearer header.
#[derive(Debug)]
pub struct SessionApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SessionApi<'a, T> {
    /// Bind the façade to a client.
    #[must_use]
    pub const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and store it in the auth state.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client; bad credentials surface as
    /// [`ApiError::Unauthorized`]. Nothing is stored on failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = reqwest::multipart::Form::new()
            .text("username", username.to_owned())
            .text("password", password.to_owned());

        let response: TokenResponse = self
            .client
            .post("login", "/token", RequestBody::Multipart(form), &[])
            .await?;

        self.client.auth().login(&response.access_token);
        Ok(response)
    }

    /// Clear the stored token.
    pub fn logout(&self) {
        self.client.auth().logout();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::config::{BaseUrls, ExecutionContext};
    use crate::mocks::{MockTransport, RecordedBody};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use itemdeck_auth::{AuthState, MemoryCookieStore};
    use std::sync::Arc;

    fn valid_token() -> String {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let payload = serde_json::json!({"sub": "alice", "scopes": [], "exp": exp});
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(payload.to_string()),
        )
    }

    fn client() -> (ApiClient<MockTransport>, MockTransport) {
        let transport = MockTransport::new();
        let client = ApiClient::with_transport(
            transport.clone(),
            BaseUrls::new("http://api/v1", "http://api/v1"),
            ExecutionContext::Browser,
            AuthState::new(Arc::new(MemoryCookieStore::new())),
        );
        (client, transport)
    }

    #[tokio::test]
    async fn test_login_posts_form_and_stores_token() {
        let (client, transport) = client();
        let token = valid_token();
        transport.push_json(serde_json::json!({
            "access_token": token, "token_type": "bearer",
        }));

        let response = SessionApi::new(&client)
            .login("alice", "secret")
            .await
            .unwrap();

        assert_eq!(response.access_token, token);
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api/v1/token");
        assert_eq!(request.body, Some(RecordedBody::Multipart));
        assert!(client.auth().authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_stores_nothing() {
        let (client, transport) = client();
        transport.push_error(ApiError::Unauthorized);

        let result = SessionApi::new(&client).login("alice", "wrong").await;
        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
        assert!(!client.auth().authenticated());
        assert_eq!(client.auth().token(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let (client, transport) = client();
        let token = valid_token();
        transport.push_json(serde_json::json!({
            "access_token": token, "token_type": "bearer",
        }));

        let session = SessionApi::new(&client);
        session.login("alice", "secret").await.unwrap();
        session.logout();

        assert!(!client.auth().authenticated());
    }
}
