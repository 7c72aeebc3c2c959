//! Cookie store abstraction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Cookie store.
///
/// This trait abstracts over wherever the access token cookie actually
/// lives: the browser cookie jar on the client, the request/response
/// cookie headers during server rendering, or plain memory in tests and
/// command-line tools.
///
/// # Implementation Notes
///
/// - A single named value, read-modified-written per call
/// - No expiry or path attributes beyond the host's defaults
/// - Last writer wins on concurrent updates
pub trait CookieStore: Send + Sync {
    /// Get the current value of the named cookie, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Set the named cookie. `None` clears it.
    fn set(&self, name: &str, value: Option<&str>);
}

/// In-memory cookie store.
///
/// The default store for tests, demos, and non-browser hosts. Browser and
/// SSR hosts provide their own [`CookieStore`] implementation over the real
/// cookie jar.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieStore {
    cookies: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCookieStore {
    /// Create a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: Option<&str>) {
        let mut cookies = self.cookies.lock().unwrap_or_else(PoisonError::into_inner);
        match value {
            Some(value) => {
                cookies.insert(name.to_owned(), value.to_owned());
            }
            None => {
                cookies.remove(name);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let store = MemoryCookieStore::new();
        assert_eq!(store.get("session"), None);

        store.set("session", Some("abc"));
        assert_eq!(store.get("session"), Some("abc".to_string()));
    }

    #[test]
    fn test_none_clears_value() {
        let store = MemoryCookieStore::new();
        store.set("session", Some("abc"));
        store.set("session", None);
        assert_eq!(store.get("session"), None);
    }

    #[test]
    fn test_last_writer_wins() {
        let store = MemoryCookieStore::new();
        store.set("session", Some("first"));
        store.set("session", Some("second"));
        assert_eq!(store.get("session"), Some("second".to_string()));
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryCookieStore::new();
        let other = store.clone();
        store.set("session", Some("abc"));
        assert_eq!(other.get("session"), Some("abc".to_string()));
    }
}
