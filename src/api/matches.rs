// src/api/matches.rs

//! Match listing, applications and player history

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde_json::json;

use super::models::{ApplicationStatus, Match, MatchStatus, User};
use super::{list, ApiClient};

impl ApiClient {
    /// Player rating table, best first.
    pub async fn rating(&self) -> Result<Vec<User>> {
        list(self.get("/rating").await?)
    }

    /// List matches, optionally filtered by status.
    pub async fn matches(&self, status: Option<MatchStatus>) -> Result<Vec<Match>> {
        let path = match status {
            Some(status) => format!("/matches?status={}", status),
            None => "/matches".to_string(),
        };
        list(self.get(&path).await?)
    }

    /// Apply to a match. Team matches require the id of a team the
    /// player is a member of; solo matches take no body at all.
    pub async fn apply_to_match(&self, match_id: i64, team_id: Option<i64>) -> Result<()> {
        let body = team_id.map(|id| json!({ "team_id": id }));
        self.post(&format!("/matches/{}/apply", match_id), body.as_ref())
            .await?;
        Ok(())
    }

    /// Status of the player's own applications, keyed by match id.
    pub async fn my_applications(&self) -> Result<HashMap<i64, ApplicationStatus>> {
        let data = self.get("/my/applications").await?;
        serde_json::from_value(data).context("Unexpected response from /my/applications")
    }

    /// Matches the player actually took part in.
    pub async fn history(&self) -> Result<Vec<Match>> {
        list(self.get("/history").await?)
    }
}
