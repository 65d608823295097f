// src/models/prediction.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use crate::models::team::Player;

/// 1/X/2 classification of a scoreline
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl PredictionOutcome {
    pub fn from_score(home_goals: u32, away_goals: u32) -> Self {
        match home_goals.cmp(&away_goals) {
            std::cmp::Ordering::Greater => PredictionOutcome::HomeWin,
            std::cmp::Ordering::Less => PredictionOutcome::AwayWin,
            std::cmp::Ordering::Equal => PredictionOutcome::Draw,
        }
    }

    /// Same outcome seen with home and away swapped
    pub fn mirrored(&self) -> Self {
        match self {
            PredictionOutcome::HomeWin => PredictionOutcome::AwayWin,
            PredictionOutcome::AwayWin => PredictionOutcome::HomeWin,
            PredictionOutcome::Draw => PredictionOutcome::Draw,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PredictionOutcome::HomeWin => "1",
            PredictionOutcome::Draw => "X",
            PredictionOutcome::AwayWin => "2",
        }
    }
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPoints {
    pub correct_result: u32,
    pub correct_outcome: u32,
    pub correct_goals_by_home_team: u32,
    pub correct_goals_by_away_team: u32,
    pub correct_goal_difference: u32,
    pub correct_goal_scorer: u32,
    pub odds_bonus: u32,
    pub total: u32,
}

impl PredictionPoints {
    /// Sum of every sub-score, excluding `total` itself
    pub fn sum(&self) -> u32 {
        self.correct_result
            + self.correct_outcome
            + self.correct_goals_by_home_team
            + self.correct_goals_by_away_team
            + self.correct_goal_difference
            + self.correct_goal_scorer
            + self.odds_bonus
    }

    pub fn with_total(mut self) -> Self {
        self.total = self.sum();
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub user_id: Uuid,
    pub fixture_id: Uuid,
    pub home_goals: u32,
    pub away_goals: u32,
    pub outcome: PredictionOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_scorer: Option<Player>,
    #[serde(default)]
    pub points: Option<PredictionPoints>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prediction {
    /// A fresh, unscored prediction; the outcome is derived from the goals
    pub fn new(
        user_id: Uuid,
        fixture_id: Uuid,
        home_goals: u32,
        away_goals: u32,
        goal_scorer: Option<Player>,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            fixture_id,
            home_goals,
            away_goals,
            outcome: PredictionOutcome::from_score(home_goals, away_goals),
            goal_scorer,
            points: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.home_goals as i64 - self.away_goals as i64
    }
}

#[derive(Debug, FromRow)]
pub struct PredictionRow {
    pub user_id: Uuid,
    pub fixture_id: Uuid,
    pub home_goals: i32,
    pub away_goals: i32,
    pub outcome: PredictionOutcome,
    pub goal_scorer: Option<Json<Player>>,
    pub points: Option<Json<PredictionPoints>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PredictionRow> for Prediction {
    fn from(row: PredictionRow) -> Self {
        Prediction {
            user_id: row.user_id,
            fixture_id: row.fixture_id,
            // the table constrains goals to be non-negative
            home_goals: row.home_goals.max(0) as u32,
            away_goals: row.away_goals.max(0) as u32,
            outcome: row.outcome,
            goal_scorer: row.goal_scorer.map(|p| p.0),
            points: row.points.map(|p| p.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Goals are optional here so that an empty entry is a validation error
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub home_goals: Option<i32>,
    pub away_goals: Option<i32>,
    #[serde(default)]
    pub goal_scorer: Option<Player>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PredictionWithUser {
    pub username: String,
    #[serde(flatten)]
    pub prediction: Prediction,
}

#[derive(Debug, FromRow)]
pub struct PredictionWithUserRow {
    pub username: String,
    #[sqlx(flatten)]
    pub prediction: PredictionRow,
}

impl From<PredictionWithUserRow> for PredictionWithUser {
    fn from(row: PredictionWithUserRow) -> Self {
        PredictionWithUser {
            username: row.username,
            prediction: row.prediction.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixturePredictionsResponse {
    pub fixture_id: Uuid,
    /// Other users' predictions are only revealed once the fixture is finished
    pub revealed: bool,
    pub predictions: Vec<PredictionWithUser>,
}
