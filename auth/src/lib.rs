//! # Itemdeck Auth
//!
//! Cookie-backed token authentication state for itemdeck clients.
//!
//! The backend issues a compact three-segment token (header, payload,
//! signature) on login. This crate stores that token in a single cookie,
//! decodes its payload without verifying the signature (the server is the
//! sole verifier), and derives authentication status, username, and
//! permission membership from it on every read.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use itemdeck_auth::{AuthState, MemoryCookieStore};
//!
//! let store = Arc::new(MemoryCookieStore::new());
//! let auth = AuthState::new(store);
//!
//! assert!(!auth.authenticated());
//! auth.login("header.payload.signature");
//! // Malformed tokens never authenticate, they just sit in the cookie.
//! assert!(!auth.authenticated());
//! auth.logout();
//! ```

pub mod guard;
pub mod state;
pub mod store;
pub mod token;

// Re-export main types for convenience
pub use guard::{NavigationDecision, RouteGuard, LOGIN_PATH};
pub use state::{AuthState, ACCESS_TOKEN_COOKIE};
pub use store::{CookieStore, MemoryCookieStore};
pub use token::{decode_header, decode_payload, decode_segment, TokenPayload};
