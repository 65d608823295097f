// src/models/team.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a fixture is played between clubs or national teams
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamType {
    Clubs,
    Nations,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamType::Clubs => "CLUBS",
            TeamType::Nations => "NATIONS",
        }
    }
}

impl fmt::Display for TeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TeamType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "CLUBS" => Ok(TeamType::Clubs),
            "NATIONS" => Ok(TeamType::Nations),
            other => Err(format!("{} is not a supported team type", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stadium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
}

impl Team {
    /// Find one of the squad's players by id
    pub fn find_player(&self, player_id: &str) -> Option<&Player> {
        self.players
            .as_ref()
            .and_then(|players| players.iter().find(|p| p.id == player_id))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralPosition {
    GK,
    DF,
    MF,
    FW,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PlayerPosition {
    pub general: GeneralPosition,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: PlayerPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_injured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_suspended: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub may_be_injured: Option<bool>,
}

impl Player {
    /// A player flagged injured or suspended cannot feature
    pub fn is_unavailable(&self) -> bool {
        self.is_injured.unwrap_or(false) || self.is_suspended.unwrap_or(false)
    }
}
