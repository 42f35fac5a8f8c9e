// src/api/auth.rs

//! Account registration and session endpoints

use anyhow::{Context, Result};
use serde_json::json;

use super::models::User;
use super::ApiClient;

impl ApiClient {
    pub async fn register(&self, username: &str, password: &str, password2: &str) -> Result<()> {
        self.post(
            "/auth/register",
            Some(&json!({
                "username": username,
                "password": password,
                "password2": password2,
            })),
        )
        .await?;
        Ok(())
    }

    /// Log in. On success the server sets the session cookie, which lands
    /// in the client's jar and is replayed on subsequent requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.post(
            "/auth/login",
            Some(&json!({
                "username": username,
                "password": password,
            })),
        )
        .await?;
        Ok(())
    }

    /// Log out. The server clears the session cookie, emptying the jar.
    pub async fn logout(&self) -> Result<()> {
        self.post("/auth/logout", None).await?;
        Ok(())
    }

    /// The currently logged-in user.
    pub async fn me(&self) -> Result<User> {
        let data = self.get("/me").await?;
        serde_json::from_value(data).context("Unexpected response from /me")
    }
}
