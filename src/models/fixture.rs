// src/models/fixture.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::MatchResult;
use crate::models::prediction::PredictionOutcome;
use crate::models::team::{Team, TeamType};

/// Entry of a team's recent form. `None` pads histories shorter than five.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "-")]
    None,
}

impl From<MatchResult> for FixtureOutcome {
    fn from(result: MatchResult) -> Self {
        match result {
            MatchResult::Win => FixtureOutcome::Win,
            MatchResult::Draw => FixtureOutcome::Draw,
            MatchResult::Loss => FixtureOutcome::Loss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    pub home_team_goals: u32,
    pub away_team_goals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_scorers: Option<Vec<String>>,
}

impl FinalResult {
    pub fn outcome(&self) -> PredictionOutcome {
        PredictionOutcome::from_score(self.home_team_goals, self.away_team_goals)
    }

    pub fn goal_difference(&self) -> i64 {
        self.home_team_goals as i64 - self.away_team_goals as i64
    }

    /// Scorer names are compared trimmed and case-insensitively
    pub fn has_scorer(&self, name: &str) -> bool {
        let wanted = name.trim();
        self.goal_scorers
            .as_ref()
            .map(|scorers| scorers.iter().any(|s| s.trim().eq_ignore_ascii_case(wanted)))
            .unwrap_or(false)
    }

    /// Result from the given side's point of view
    pub fn result_for(&self, side: Side) -> MatchResult {
        match side {
            Side::Home => MatchResult::from_goals(self.home_team_goals, self.away_team_goals),
            Side::Away => MatchResult::from_goals(self.away_team_goals, self.home_team_goals),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LastFixture {
    pub opponent: String,
    pub home_team_goals: u32,
    pub away_team_goals: u32,
    pub was_home: bool,
    pub outcome: FixtureOutcome,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamPreviewStats {
    #[serde(default)]
    pub form: Vec<FixtureOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standing: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fixture: Option<LastFixture>,
    #[serde(default)]
    pub insights: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewStats {
    pub home_team: TeamPreviewStats,
    pub away_team: TeamPreviewStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl PreviewStats {
    pub fn side(&self, side: Side) -> &TeamPreviewStats {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }
}

/// Decimal odds as entered by an admin, kept as strings on the wire
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Odds {
    pub home_win: String,
    pub draw: String,
    pub away_win: String,
}

impl Odds {
    /// Parsed decimal odds for an outcome; `None` when unparseable or below 1.0
    pub fn for_outcome(&self, outcome: PredictionOutcome) -> Option<f64> {
        let raw = match outcome {
            PredictionOutcome::HomeWin => &self.home_win,
            PredictionOutcome::Draw => &self.draw,
            PredictionOutcome::AwayWin => &self.away_win,
        };
        parse_decimal_odds(raw)
    }
}

pub fn parse_decimal_odds(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    if value.is_finite() && value >= 1.0 {
        Some(value)
    } else {
        None
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateScore {
    pub home_team_goals: u32,
    pub away_team_goals: u32,
}

/// Whether preview stats are shown for a fixture, and if entered, what they are.
/// Switching stats off shelves an entered preview instead of discarding it.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureStats {
    Disabled { shelved: Option<Box<PreviewStats>> },
    Awaiting,
    Present(Box<PreviewStats>),
}

impl FixtureStats {
    pub fn disabled() -> Self {
        FixtureStats::Disabled { shelved: None }
    }

    pub fn from_parts(include_stats: bool, preview_stats: Option<PreviewStats>) -> Self {
        match (include_stats, preview_stats) {
            (false, shelved) => FixtureStats::Disabled { shelved: shelved.map(Box::new) },
            (true, None) => FixtureStats::Awaiting,
            (true, Some(stats)) => FixtureStats::Present(Box::new(stats)),
        }
    }

    /// The `includeStats` flag and the stored preview, shelved or not
    pub fn into_parts(self) -> (bool, Option<PreviewStats>) {
        match self {
            FixtureStats::Disabled { shelved } => (false, shelved.map(|stats| *stats)),
            FixtureStats::Awaiting => (true, None),
            FixtureStats::Present(stats) => (true, Some(*stats)),
        }
    }

    /// Toggle stats on or off, keeping whatever preview was entered
    pub fn with_enabled(self, enabled: bool) -> Self {
        let (_, preview) = self.into_parts();
        Self::from_parts(enabled, preview)
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, FixtureStats::Disabled { .. })
    }

    /// The preview shown to users; `None` while disabled or not yet entered
    pub fn preview(&self) -> Option<&PreviewStats> {
        match self {
            FixtureStats::Present(stats) => Some(stats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FixtureDocument", into = "FixtureDocument")]
pub struct Fixture {
    pub id: Uuid,
    pub game_week_id: Uuid,
    pub home_team: Team,
    pub away_team: Team,
    pub team_type: TeamType,
    pub kick_off_time: DateTime<Utc>,
    pub stadium: String,
    pub tournament: String,
    pub final_result: Option<FinalResult>,
    pub should_predict_goal_scorer: bool,
    pub stats: FixtureStats,
    pub odds: Option<Odds>,
    pub aggregate_score: Option<AggregateScore>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Fixture {
    /// A fixture with a final result is considered full-time
    pub fn is_finished(&self) -> bool {
        self.final_result.is_some()
    }

    pub fn has_kicked_off(&self, now: DateTime<Utc>) -> bool {
        now >= self.kick_off_time
    }

    /// Which side the named team plays on in this fixture
    pub fn side_of(&self, team_name: &str) -> Option<Side> {
        if self.home_team.name == team_name {
            Some(Side::Home)
        } else if self.away_team.name == team_name {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn opponent(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.away_team,
            Side::Away => &self.home_team,
        }
    }
}

/// Stored and wire shape of a fixture. Field names are the contract with
/// existing clients and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureDocument {
    pub id: Uuid,
    pub game_week_id: Uuid,
    pub home_team: Team,
    pub away_team: Team,
    pub team_type: TeamType,
    pub kick_off_time: DateTime<Utc>,
    pub stadium: String,
    pub tournament: String,
    #[serde(default)]
    pub final_result: Option<FinalResult>,
    #[serde(default)]
    pub should_predict_goal_scorer: bool,
    #[serde(default)]
    pub include_stats: bool,
    #[serde(default)]
    pub preview_stats: Option<PreviewStats>,
    #[serde(default)]
    pub odds: Option<Odds>,
    #[serde(default)]
    pub aggregate_score: Option<AggregateScore>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FixtureDocument> for Fixture {
    fn from(doc: FixtureDocument) -> Self {
        Fixture {
            id: doc.id,
            game_week_id: doc.game_week_id,
            home_team: doc.home_team,
            away_team: doc.away_team,
            team_type: doc.team_type,
            kick_off_time: doc.kick_off_time,
            stadium: doc.stadium,
            tournament: doc.tournament,
            final_result: doc.final_result,
            should_predict_goal_scorer: doc.should_predict_goal_scorer,
            stats: FixtureStats::from_parts(doc.include_stats, doc.preview_stats),
            odds: doc.odds,
            aggregate_score: doc.aggregate_score,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl From<Fixture> for FixtureDocument {
    fn from(fixture: Fixture) -> Self {
        let (include_stats, preview_stats) = fixture.stats.into_parts();
        FixtureDocument {
            id: fixture.id,
            game_week_id: fixture.game_week_id,
            home_team: fixture.home_team,
            away_team: fixture.away_team,
            team_type: fixture.team_type,
            kick_off_time: fixture.kick_off_time,
            stadium: fixture.stadium,
            tournament: fixture.tournament,
            final_result: fixture.final_result,
            should_predict_goal_scorer: fixture.should_predict_goal_scorer,
            include_stats,
            preview_stats,
            odds: fixture.odds,
            aggregate_score: fixture.aggregate_score,
            created_at: fixture.created_at,
            updated_at: fixture.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct FixtureRow {
    pub id: Uuid,
    pub game_week_id: Uuid,
    pub home_team: Json<Team>,
    pub away_team: Json<Team>,
    pub team_type: TeamType,
    pub kick_off_time: DateTime<Utc>,
    pub stadium: String,
    pub tournament: String,
    pub final_result: Option<Json<FinalResult>>,
    pub should_predict_goal_scorer: bool,
    pub include_stats: bool,
    pub preview_stats: Option<Json<PreviewStats>>,
    pub odds: Option<Json<Odds>>,
    pub aggregate_score: Option<Json<AggregateScore>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FixtureRow> for Fixture {
    fn from(row: FixtureRow) -> Self {
        Fixture {
            id: row.id,
            game_week_id: row.game_week_id,
            home_team: row.home_team.0,
            away_team: row.away_team.0,
            team_type: row.team_type,
            kick_off_time: row.kick_off_time,
            stadium: row.stadium,
            tournament: row.tournament,
            final_result: row.final_result.map(|r| r.0),
            should_predict_goal_scorer: row.should_predict_goal_scorer,
            stats: FixtureStats::from_parts(row.include_stats, row.preview_stats.map(|s| s.0)),
            odds: row.odds.map(|o| o.0),
            aggregate_score: row.aggregate_score.map(|a| a.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateFixtureRequest {
    /// Catalog key the two team names are looked up in
    pub catalog_league: String,
    pub home_team: String,
    pub away_team: String,
    pub team_type: TeamType,
    pub kick_off_time: DateTime<Utc>,
    #[serde(default)]
    pub stadium: Option<String>,
    pub tournament: String,
    #[serde(default)]
    pub should_predict_goal_scorer: bool,
    #[serde(default)]
    pub include_stats: bool,
    #[serde(default)]
    pub aggregate_score: Option<AggregateScore>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFixtureRequest {
    pub kick_off_time: Option<DateTime<Utc>>,
    pub stadium: Option<String>,
    pub tournament: Option<String>,
    pub should_predict_goal_scorer: Option<bool>,
    pub include_stats: Option<bool>,
    pub aggregate_score: Option<AggregateScore>,
}

/// Goals arrive as signed, optional numbers so that empty or negative
/// entries are rejected with a message instead of a decode failure.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FinalResultRequest {
    pub home_team_goals: Option<i32>,
    pub away_team_goals: Option<i32>,
    #[serde(default)]
    pub goal_scorers: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PreviewStatsRequest {
    pub home_team: TeamPreviewStats,
    pub away_team: TeamPreviewStats,
    #[serde(default)]
    pub analysis: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatsSuggestion {
    pub fixture_id: Uuid,
    pub previous_week_number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team: Option<TeamPreviewStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team: Option<TeamPreviewStats>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntryResponse {
    pub fixture: Fixture,
    pub predictions_scored: usize,
}
