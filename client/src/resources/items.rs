//! Item resource.

use crate::client::ApiClient;
use crate::encode::RequestBody;
use crate::error::ApiError;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};

/// An item as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Backend-assigned id.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Item body text.
    pub content: String,
}

/// Payload for creating an item; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCreate {
    /// Item title.
    pub title: String,
    /// Item body text.
    pub content: String,
}

/// `/items/` operations.
#[derive(Debug)]
pub struct ItemApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ItemApi<'a, T> {
    /// Bind the façade to a client.
    #[must_use]
    pub const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// List all items.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.client.get("getItems", "/items/", &[], &[]).await
    }

    /// Fetch one item by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn get(&self, id: i64) -> Result<Item, ApiError> {
        self.client
            .get("getItem", &format!("/items/{id}"), &[], &[])
            .await
    }

    /// Create an item.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn create(&self, item: &ItemCreate) -> Result<Item, ApiError> {
        self.client
            .post("createItem", "/items/", RequestBody::from_serialize(item)?, &[])
            .await
    }

    /// Update an item; `item.id` selects the target.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn update(&self, item: &Item) -> Result<Item, ApiError> {
        self.client
            .put(
                "updateItem",
                &format!("/items/{}", item.id),
                RequestBody::from_serialize(item)?,
                &[],
            )
            .await
    }

    /// Delete an item by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn delete(&self, id: i64) -> Result<serde_json::Value, ApiError> {
        self.client
            .delete(
                "deleteItem",
                &format!("/items/{id}"),
                RequestBody::default(),
                &[],
            )
            .await
    }
}
