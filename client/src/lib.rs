//! # Itemdeck Client
//!
//! Typed HTTP client for the itemdeck backend: request assembly with
//! context-dependent base URLs, bearer-token injection from
//! [`itemdeck_auth::AuthState`], and thin per-resource façades.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use itemdeck_auth::{AuthState, MemoryCookieStore};
//! use itemdeck_client::{ApiClient, BaseUrls, ExecutionContext};
//! use itemdeck_client::resources::{ItemApi, SessionApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = AuthState::new(Arc::new(MemoryCookieStore::new()));
//!     let client = ApiClient::new(
//!         BaseUrls::from_env()?,
//!         ExecutionContext::Server,
//!         auth,
//!     );
//!
//!     SessionApi::new(&client).login("alice", "secret").await?;
//!     let items = ItemApi::new(&client).list().await?;
//!     println!("{items:?}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod resources;
pub mod transport;

#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use client::ApiClient;
pub use config::{BaseUrls, ExecutionContext};
pub use encode::{encode_query, QueryValue, RequestBody};
pub use error::ApiError;
pub use transport::{HttpTransport, Method, RequestParts, Transport, TransportResponse};
