//! Derived authentication state.

use crate::store::CookieStore;
use crate::token::{decode_payload, TokenPayload};
use std::sync::Arc;

/// Name of the cookie holding the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "__access_token";

/// Authentication state derived from the stored access token.
///
/// Nothing is cached: every query re-reads the cookie and re-decodes the
/// token, so two consecutive queries separated only by time may disagree
/// as the token's expiry elapses. Decode failures are normalized to
/// "not authenticated / no claims", never surfaced as errors.
///
/// Construct one instance at startup and pass it wherever it is needed;
/// there is no global accessor.
#[derive(Clone)]
pub struct AuthState {
    store: Arc<dyn CookieStore>,
    cookie_name: String,
}

impl AuthState {
    /// Create auth state over a cookie store, using the default cookie name.
    #[must_use]
    pub fn new(store: Arc<dyn CookieStore>) -> Self {
        Self::with_cookie_name(store, ACCESS_TOKEN_COOKIE)
    }

    /// Create auth state with an explicit cookie name.
    #[must_use]
    pub fn with_cookie_name(store: Arc<dyn CookieStore>, cookie_name: impl Into<String>) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
        }
    }

    /// Whether a token is present, decodable, and not yet expired.
    ///
    /// Expiry is `exp` strictly greater than the current unix time in
    /// whole seconds. Any decode failure yields `false`.
    #[must_use]
    pub fn authenticated(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        self.payload().is_some_and(|payload| payload.exp > now)
    }

    /// Store a token, overwriting any previous one.
    ///
    /// The token is not validated here; a malformed token simply never
    /// authenticates.
    pub fn login(&self, token: &str) {
        tracing::debug!(cookie = %self.cookie_name, "storing access token");
        self.store.set(&self.cookie_name, Some(token));
    }

    /// Clear the stored token.
    pub fn logout(&self) {
        tracing::debug!(cookie = %self.cookie_name, "clearing access token");
        self.store.set(&self.cookie_name, None);
    }

    /// The stored token, only while [`authenticated`](Self::authenticated)
    /// holds. An expired token is indistinguishable from absence here.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        if self.authenticated() {
            self.store.get(&self.cookie_name)
        } else {
            None
        }
    }

    /// The `sub` claim, when the payload decodes and `sub` is non-empty.
    ///
    /// Does not check expiry.
    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.payload()
            .map(|payload| payload.sub)
            .filter(|sub| !sub.is_empty())
    }

    /// Whether every required scope is present in the token's scopes.
    ///
    /// An empty `required` set is trivially satisfied. An absent or
    /// undecodable token behaves as an empty scope set.
    #[must_use]
    pub fn has_permission(&self, required: &[&str]) -> bool {
        let scopes = self
            .payload()
            .map(|payload| payload.scopes)
            .unwrap_or_default();
        required
            .iter()
            .all(|required| scopes.iter().any(|scope| scope == required))
    }

    /// Decode the claims of the stored token, if any.
    #[must_use]
    pub fn payload(&self) -> Option<TokenPayload> {
        let token = self.store.get(&self.cookie_name)?;
        decode_payload(&token)
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("cookie_name", &self.cookie_name)
            .finish_non_exhaustive()
    }
}
