// src/api/mod.rs

// Declare sub-modules for the API client
mod admin;
mod auth;
mod client;
mod matches;
pub mod models;
mod teams;

pub use client::{ApiClient, SESSION_COOKIE};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a JSON array response. The server serializes a nil slice as
/// `null`, which decodes to an empty list.
pub(crate) fn list<T: DeserializeOwned>(data: Value) -> Result<Vec<T>> {
    Ok(serde_json::from_value::<Option<Vec<T>>>(data)
        .context("Unexpected list in response")?
        .unwrap_or_default())
}
