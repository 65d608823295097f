// src/models/player_rating.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRating {
    pub fixture_id: Uuid,
    pub user_id: Uuid,
    pub player_id: String,
    pub player_name: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRatingRequest {
    pub player_id: String,
    pub rating: Option<i32>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRatingSummary {
    pub player_id: String,
    pub player_name: String,
    pub average_rating: f64,
    pub ratings_count: i64,
}
