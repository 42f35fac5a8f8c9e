// src/api/admin.rs

//! Administrative endpoints. The server rejects all of these with 403
//! unless the session belongs to an admin account.

use anyhow::{Context, Result};
use serde_json::{json, Value};

use super::models::{
    Application, LogEntry, Match, MatchMode, MatchParticipants, MatchStatus, User, Winner,
};
use super::{list, ApiClient};

impl ApiClient {
    /// Recent action log entries, newest first.
    pub async fn admin_logs(&self) -> Result<Vec<LogEntry>> {
        list(self.get("/admin/logs").await?)
    }

    pub async fn admin_users(&self) -> Result<Vec<User>> {
        list(self.get("/admin/users").await?)
    }

    pub async fn admin_delete_user(&self, user_id: i64) -> Result<()> {
        self.delete(&format!("/admin/users/{}", user_id)).await?;
        Ok(())
    }

    pub async fn admin_set_points(&self, user_id: i64, points: i64) -> Result<()> {
        self.post(
            &format!("/admin/users/{}/points", user_id),
            Some(&json!({ "points": points })),
        )
        .await?;
        Ok(())
    }

    pub async fn admin_create_match(&self, title: &str, mode: MatchMode) -> Result<()> {
        self.post(
            "/admin/matches",
            Some(&json!({
                "title": title,
                "mode": mode,
            })),
        )
        .await?;
        Ok(())
    }

    pub async fn admin_update_match(
        &self,
        match_id: i64,
        title: &str,
        mode: MatchMode,
        status: MatchStatus,
    ) -> Result<()> {
        self.put(
            &format!("/admin/matches/{}", match_id),
            Some(&json!({
                "title": title,
                "mode": mode,
                "status": status,
            })),
        )
        .await?;
        Ok(())
    }

    pub async fn admin_delete_match(&self, match_id: i64) -> Result<()> {
        self.delete(&format!("/admin/matches/{}", match_id)).await?;
        Ok(())
    }

    /// List all matches, optionally filtered by status.
    pub async fn admin_matches(&self, status: Option<MatchStatus>) -> Result<Vec<Match>> {
        let path = match status {
            Some(status) => format!("/admin/matches?status={}", status),
            None => "/admin/matches".to_string(),
        };
        list(self.get(&path).await?)
    }

    /// Close a match without declaring a winner.
    pub async fn admin_close_match(&self, match_id: i64) -> Result<()> {
        self.post(&format!("/admin/matches/{}/close", match_id), None)
            .await?;
        Ok(())
    }

    pub async fn admin_applications(&self) -> Result<Vec<Application>> {
        list(self.get("/admin/applications").await?)
    }

    pub async fn admin_approve_application(&self, application_id: i64) -> Result<()> {
        self.post(&format!("/admin/applications/{}/approve", application_id), None)
            .await?;
        Ok(())
    }

    pub async fn admin_reject_application(&self, application_id: i64) -> Result<()> {
        self.post(&format!("/admin/applications/{}/reject", application_id), None)
            .await?;
        Ok(())
    }

    /// Users and teams registered as participants of a match.
    pub async fn admin_match_participants(&self, match_id: i64) -> Result<MatchParticipants> {
        let data = self
            .get(&format!("/admin/matches/{}/participants", match_id))
            .await?;
        serde_json::from_value(data).context("Unexpected participants response")
    }

    /// Finish a match with a manual winner. The winner must already be a
    /// participant; bonus points go to the user, or to every member of
    /// the winning team.
    pub async fn admin_set_winner(
        &self,
        match_id: i64,
        winner: Winner,
        bonus_points: i64,
    ) -> Result<()> {
        let body = match winner {
            Winner::User(id) => json!({
                "winner_user_id": id,
                "bonus_points": bonus_points,
            }),
            Winner::Team(id) => json!({
                "winner_team_id": id,
                "bonus_points": bonus_points,
            }),
        };
        self.post(&format!("/admin/matches/{}/winner", match_id), Some(&body))
            .await?;
        Ok(())
    }

    /// Plain-text report of a match: applications, participants, winner.
    pub async fn admin_match_report(&self, match_id: i64) -> Result<String> {
        let data = self
            .get(&format!("/admin/matches/{}/report", match_id))
            .await?;
        data.get("report")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .context("Response is missing report text")
    }
}
