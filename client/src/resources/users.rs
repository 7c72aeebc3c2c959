//! User resource.

use crate::client::ApiClient;
use crate::encode::RequestBody;
use crate::error::ApiError;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};

/// A role attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Backend-assigned id.
    pub id: i64,
    /// Role name.
    pub name: String,
}

/// A user as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Age in years.
    pub age: i64,
    /// Roles granted to the user.
    pub roles: Vec<Role>,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCreate {
    /// Login name.
    pub username: String,
    /// Plain-text password; hashed by the backend.
    pub password: String,
    /// Age in years.
    pub age: i64,
    /// Role ids to grant.
    pub role_ids: Vec<i64>,
}

/// Payload for updating a user; `id` selects the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    /// Id of the user to update.
    pub id: i64,
    /// New plain-text password.
    pub password: String,
    /// New age.
    pub age: i64,
    /// New role ids.
    pub role_ids: Vec<i64>,
}

/// `/users/` operations.
#[derive(Debug)]
pub struct UserApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> UserApi<'a, T> {
    /// Bind the façade to a client.
    #[must_use]
    pub const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("getUsers", "/users/", &[], &[]).await
    }

    /// Fetch one user by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        self.client
            .get("getUser", &format!("/users/{id}"), &[], &[])
            .await
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn create(&self, user: &UserCreate) -> Result<User, ApiError> {
        self.client
            .post("createUser", "/users/", RequestBody::from_serialize(user)?, &[])
            .await
    }

    /// Update a user; `user.id` selects the target.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn update(&self, user: &UserUpdate) -> Result<User, ApiError> {
        self.client
            .put(
                "updateUser",
                &format!("/users/{}", user.id),
                RequestBody::from_serialize(user)?,
                &[],
            )
            .await
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn delete(&self, id: i64) -> Result<serde_json::Value, ApiError> {
        self.client
            .delete(
                "deleteUser",
                &format!("/users/{id}"),
                RequestBody::default(),
                &[],
            )
            .await
    }
}
