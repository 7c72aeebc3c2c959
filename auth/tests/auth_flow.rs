//! Integration tests for the full login/guard/logout flow.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use itemdeck_auth::{AuthState, CookieStore, MemoryCookieStore, NavigationDecision, RouteGuard};
use std::sync::Arc;

fn make_token(sub: &str, scopes: &[&str], exp: i64) -> String {
    let payload = serde_json::json!({"sub": sub, "scopes": scopes, "exp": exp});
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload.to_string()),
    )
}

#[test]
fn login_guard_logout_roundtrip() {
    let store = Arc::new(MemoryCookieStore::new());
    let auth = AuthState::new(store);
    let guard = RouteGuard::new();

    // Fresh state: guarded navigation bounces to login.
    assert_eq!(
        guard.check(&auth),
        NavigationDecision::Redirect("/login".to_string())
    );

    let exp = chrono::Utc::now().timestamp() + 3600;
    let token = make_token("alice", &["items:read", "items:write"], exp);
    auth.login(&token);

    assert_eq!(guard.check(&auth), NavigationDecision::Allow);
    assert_eq!(auth.username(), Some("alice".to_string()));
    assert_eq!(auth.token(), Some(token));
    assert!(auth.has_permission(&["items:write", "items:read"]));
    assert!(!auth.has_permission(&["users:write"]));

    auth.logout();
    assert_eq!(auth.token(), None);
    assert!(!auth.authenticated());
    assert!(matches!(
        guard.check(&auth),
        NavigationDecision::Redirect(_)
    ));
}

#[test]
fn shared_state_observes_concurrent_login() {
    // Two AuthState handles over one store model two parts of the app
    // reading the same cookie; the last login wins for both.
    let store: Arc<dyn CookieStore> = Arc::new(MemoryCookieStore::new());
    let auth_a = AuthState::new(Arc::clone(&store));
    let auth_b = AuthState::new(store);

    let exp = chrono::Utc::now().timestamp() + 3600;
    auth_a.login(&make_token("alice", &[], exp));
    auth_b.login(&make_token("bob", &[], exp));

    assert_eq!(auth_a.username(), Some("bob".to_string()));
    assert_eq!(auth_b.username(), Some("bob".to_string()));
}

#[test]
fn expired_token_behaves_as_absent_everywhere_it_matters() {
    let auth = AuthState::new(Arc::new(MemoryCookieStore::new()));
    let exp = chrono::Utc::now().timestamp() - 1;
    auth.login(&make_token("alice", &["items:read"], exp));

    assert!(!auth.authenticated());
    assert_eq!(auth.token(), None);
    // Claims are still readable; only validity is gone.
    assert_eq!(auth.username(), Some("alice".to_string()));
    assert!(auth.has_permission(&["items:read"]));
    assert_eq!(
        RouteGuard::new().check(&auth),
        NavigationDecision::Redirect("/login".to_string())
    );
}
