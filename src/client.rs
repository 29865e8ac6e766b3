//! CRUD routines against the public demo API.
//!
//! These are illustrative and inert: nothing in the default tour calls
//! them (see `Settings::exercise_network`). They carry no retry, pooling,
//! or recovery logic; a transport failure propagates to the caller as a
//! [`WhirlwindError::Transport`](crate::error::WhirlwindError).

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// A user as the demo API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Payload for create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

pub struct UserClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// GET the full user listing.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users: Vec<User> = self.http.get(self.users_url()).send().await?.json().await?;
        info!(count = users.len(), "listed users");
        Ok(users)
    }

    /// POST a new user; the demo API echoes it back with an assigned id.
    pub async fn create_user(&self, user: &NewUser) -> Result<User> {
        let created: User = self
            .http
            .post(self.users_url())
            .json(user)
            .send()
            .await?
            .json()
            .await?;
        info!(id = created.id, "created user");
        Ok(created)
    }

    /// PUT a replacement for the user with the given id.
    pub async fn update_user(&self, id: u64, user: &NewUser) -> Result<User> {
        let updated: User = self
            .http
            .put(self.user_url(id))
            .json(user)
            .send()
            .await?
            .json()
            .await?;
        info!(id = updated.id, "updated user");
        Ok(updated)
    }

    /// DELETE the user with the given id. Confirms only on a 200 status;
    /// anything else yields `false`.
    pub async fn delete_user(&self, id: u64) -> Result<bool> {
        let status = self.http.delete(self.user_url(id)).send().await?.status();
        let deleted = status == StatusCode::OK;
        info!(id, deleted, "delete attempted");
        Ok(deleted)
    }
}

/// The confirmation line printed after a successful delete.
pub fn delete_confirmation(id: u64) -> String {
    format!("User with ID {id} deleted successfully.")
}
