//! Item browser demo binary
//!
//! Wires the cookie store, auth state, and API client together against a
//! live backend: log in, check the route guard, browse items.
//!
//! Expects `ITEMDECK_CLIENT_BASE_URL` / `ITEMDECK_SERVER_BASE_URL` plus
//! `ITEMDECK_USERNAME` / `ITEMDECK_PASSWORD` in the environment.

use itemdeck_auth::{AuthState, MemoryCookieStore, NavigationDecision, RouteGuard};
use itemdeck_client::resources::{ItemApi, SessionApi};
use itemdeck_client::{ApiClient, BaseUrls, ExecutionContext};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_browser=debug,itemdeck_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let username = std::env::var("ITEMDECK_USERNAME")?;
    let password = std::env::var("ITEMDECK_PASSWORD")?;

    let auth = AuthState::new(Arc::new(MemoryCookieStore::new()));
    let client = ApiClient::new(BaseUrls::from_env()?, ExecutionContext::Server, auth);
    let guard = RouteGuard::new();

    println!("=== Item Browser ===\n");

    match guard.check(client.auth()) {
        NavigationDecision::Redirect(path) => {
            println!("Not authenticated, guard redirects to {path}; logging in...");
        }
        NavigationDecision::Allow => println!("Already authenticated"),
    }

    let session = SessionApi::new(&client);
    session.login(&username, &password).await?;
    println!(
        "Logged in as {}",
        client.auth().username().unwrap_or_default()
    );
    println!(
        "Can write items: {}",
        client.auth().has_permission(&["items:write"])
    );

    let items = ItemApi::new(&client).list().await?;
    println!("\n{} item(s):", items.len());
    for item in &items {
        println!("  #{} {}: {}", item.id, item.title, item.content);
    }

    session.logout();
    println!("\nLogged out; guard now says: {:?}", guard.check(client.auth()));

    Ok(())
}
