// src/api/models.rs

//! Typed views of the JSON payloads exchanged with the server

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub points: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Solo,
    Team,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Solo => write!(f, "solo"),
            MatchMode::Team => write!(f, "team"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Open,
    Closed,
    Finished,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Open => write!(f, "open"),
            MatchStatus::Closed => write!(f, "closed"),
            MatchStatus::Finished => write!(f, "finished"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Match {
    pub id: i64,
    pub title: String,
    pub mode: MatchMode,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Application {
    pub id: i64,
    pub match_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub team_id: Option<i64>,
    pub status: ApplicationStatus,
}

/// One row of the admin action log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub created_at: String,
    pub actor: String,
    pub action: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamRoster {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<UserSummary>,
}

/// Participants of a match as reported by the admin endpoint. The server
/// serializes nil slices as `null`, so the lists tolerate that.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchParticipants {
    #[serde(rename = "match")]
    pub details: Match,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<UserSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<TeamRoster>,
}

/// Winner of a finished match: a single user for solo matches, a whole
/// team for team matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    User(i64),
    Team(i64),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
