//! Base URL configuration and execution context.

use crate::error::ApiError;

/// Environment variable holding the browser-context base URL.
pub const CLIENT_BASE_URL_VAR: &str = "ITEMDECK_CLIENT_BASE_URL";

/// Environment variable holding the server-context base URL.
pub const SERVER_BASE_URL_VAR: &str = "ITEMDECK_SERVER_BASE_URL";

/// Where a request is being built.
///
/// Server-rendered apps reach the backend over a different address than
/// the browser does (e.g. an internal hostname vs. the public one). The
/// context is an explicit constructor parameter of the client, never
/// inferred from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Requests issued from the browser.
    Browser,
    /// Requests issued while rendering on the server.
    Server,
}

/// The two configured base URLs, immutable per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    /// Base URL used for browser-context requests.
    pub browser: String,
    /// Base URL used for server-context requests.
    pub server: String,
}

impl BaseUrls {
    /// Create base URLs from explicit strings.
    #[must_use]
    pub fn new(browser: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            browser: browser.into(),
            server: server.into(),
        }
    }

    /// Read both base URLs from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingBaseUrl`] naming whichever of
    /// [`CLIENT_BASE_URL_VAR`] / [`SERVER_BASE_URL_VAR`] is unset.
    pub fn from_env() -> Result<Self, ApiError> {
        let browser = std::env::var(CLIENT_BASE_URL_VAR)
            .map_err(|_| ApiError::MissingBaseUrl(CLIENT_BASE_URL_VAR))?;
        let server = std::env::var(SERVER_BASE_URL_VAR)
            .map_err(|_| ApiError::MissingBaseUrl(SERVER_BASE_URL_VAR))?;
        Ok(Self { browser, server })
    }

    /// The base URL for the given execution context.
    #[must_use]
    pub fn for_context(&self, context: ExecutionContext) -> &str {
        match context {
            ExecutionContext::Browser => &self.browser,
            ExecutionContext::Server => &self.server,
        }
    }
}
