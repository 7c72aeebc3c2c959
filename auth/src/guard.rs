//! Pre-navigation authentication check.

use crate::state::AuthState;

/// Default path unauthenticated navigations are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a route guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed with the navigation.
    Allow,
    /// Redirect to the contained path instead.
    Redirect(String),
}

/// Route guard run once before each guarded navigation.
///
/// Stateless: it consults [`AuthState::authenticated`] at check time and
/// nothing else, so a token expiring between navigations is picked up on
/// the next check.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    /// Create a guard redirecting to [`LOGIN_PATH`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_login_path(LOGIN_PATH)
    }

    /// Create a guard redirecting to a custom login path.
    #[must_use]
    pub fn with_login_path(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    /// Check one navigation: allow when authenticated, otherwise redirect
    /// to the login path.
    #[must_use]
    pub fn check(&self, auth: &AuthState) -> NavigationDecision {
        if auth.authenticated() {
            NavigationDecision::Allow
        } else {
            tracing::debug!(redirect = %self.login_path, "unauthenticated navigation");
            NavigationDecision::Redirect(self.login_path.clone())
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}
