// src/api/teams.rs

//! Team membership endpoints

use anyhow::{Context, Result};
use serde_json::{json, Value};

use super::models::Team;
use super::{list, ApiClient};

impl ApiClient {
    /// Create a team owned by the current user, returning its id.
    pub async fn create_team(&self, name: &str, is_open: bool) -> Result<i64> {
        let data = self
            .post(
                "/teams",
                Some(&json!({
                    "name": name,
                    "is_open": is_open,
                })),
            )
            .await?;
        data.get("team_id")
            .and_then(Value::as_i64)
            .context("Response is missing team_id")
    }

    /// Teams that accept new members.
    pub async fn open_teams(&self) -> Result<Vec<Team>> {
        list(self.get("/teams/open").await?)
    }

    /// Teams the current user belongs to.
    pub async fn my_teams(&self) -> Result<Vec<Team>> {
        list(self.get("/my/teams").await?)
    }

    pub async fn join_team(&self, team_id: i64) -> Result<()> {
        self.post(&format!("/teams/{}/join", team_id), None).await?;
        Ok(())
    }

    pub async fn leave_team(&self, team_id: i64) -> Result<()> {
        self.post(&format!("/teams/{}/leave", team_id), None)
            .await?;
        Ok(())
    }
}
