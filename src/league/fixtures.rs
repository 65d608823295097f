use sqlx::postgres::PgQueryResult;
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::fixture::{Fixture, FixtureDocument, FixtureRow};

const FIXTURE_COLUMNS: &str = "id, game_week_id, home_team, away_team, team_type, kick_off_time, \
    stadium, tournament, final_result, should_predict_goal_scorer, include_stats, preview_stats, \
    odds, aggregate_score, created_at, updated_at";

/// Where a fixture sits: its league and game week
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct FixturePlacement {
    pub league_id: Uuid,
    pub game_week_id: Uuid,
    pub week_number: i32,
}

/// Service responsible for fixture documents
pub struct FixtureService {
    pool: PgPool,
}

impl FixtureService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, fixture: &Fixture) -> Result<Fixture, sqlx::Error> {
        let doc = FixtureDocument::from(fixture.clone());
        let query = format!(
            r#"
            INSERT INTO fixtures (
                id, game_week_id, home_team, away_team, team_type, kick_off_time,
                stadium, tournament, final_result, should_predict_goal_scorer,
                include_stats, preview_stats, odds, aggregate_score, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING {}
            "#,
            FIXTURE_COLUMNS
        );

        let row = sqlx::query_as::<_, FixtureRow>(&query)
            .bind(doc.id)
            .bind(doc.game_week_id)
            .bind(Json(&doc.home_team))
            .bind(Json(&doc.away_team))
            .bind(doc.team_type)
            .bind(doc.kick_off_time)
            .bind(&doc.stadium)
            .bind(&doc.tournament)
            .bind(doc.final_result.as_ref().map(Json))
            .bind(doc.should_predict_goal_scorer)
            .bind(doc.include_stats)
            .bind(doc.preview_stats.as_ref().map(Json))
            .bind(doc.odds.as_ref().map(Json))
            .bind(doc.aggregate_score.as_ref().map(Json))
            .bind(doc.created_at)
            .bind(doc.updated_at)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            "Created fixture {}: {} vs {} at {}",
            row.id, doc.home_team.name, doc.away_team.name, doc.kick_off_time
        );

        Ok(row.into())
    }

    /// Get a specific fixture by ID
    pub async fn get(&self, fixture_id: Uuid) -> Result<Option<Fixture>, sqlx::Error> {
        Self::fetch(&self.pool, fixture_id, false).await
    }

    /// Load a fixture, optionally locking its row for the running transaction
    pub async fn fetch<'e, E: PgExecutor<'e>>(
        executor: E,
        fixture_id: Uuid,
        for_update: bool,
    ) -> Result<Option<Fixture>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM fixtures WHERE id = $1{}",
            FIXTURE_COLUMNS,
            if for_update { " FOR UPDATE" } else { "" }
        );
        let row = sqlx::query_as::<_, FixtureRow>(&query)
            .bind(fixture_id)
            .fetch_optional(executor)
            .await?;
        Ok(row.map(Fixture::from))
    }

    /// Fixtures of a game week in kick-off order
    pub async fn list_for_game_week(&self, game_week_id: Uuid) -> Result<Vec<Fixture>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM fixtures WHERE game_week_id = $1 ORDER BY kick_off_time ASC, id ASC",
            FIXTURE_COLUMNS
        );
        let rows = sqlx::query_as::<_, FixtureRow>(&query)
            .bind(game_week_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Fixture::from).collect())
    }

    pub async fn placement(&self, fixture_id: Uuid) -> Result<Option<FixturePlacement>, sqlx::Error> {
        sqlx::query_as::<_, FixturePlacement>(
            r#"
            SELECT gw.league_id, gw.id AS game_week_id, gw.week_number
            FROM fixtures f
            JOIN game_weeks gw ON gw.id = f.game_week_id
            WHERE f.id = $1
            "#,
        )
        .bind(fixture_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Overwrite every mutable column of the document. Last write wins.
    pub async fn write<'e, E: PgExecutor<'e>>(
        executor: E,
        fixture: &Fixture,
    ) -> Result<Fixture, sqlx::Error> {
        let doc = FixtureDocument::from(fixture.clone());
        let query = format!(
            r#"
            UPDATE fixtures
            SET kick_off_time = $2,
                stadium = $3,
                tournament = $4,
                final_result = $5,
                should_predict_goal_scorer = $6,
                include_stats = $7,
                preview_stats = $8,
                odds = $9,
                aggregate_score = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            FIXTURE_COLUMNS
        );

        let row = sqlx::query_as::<_, FixtureRow>(&query)
            .bind(doc.id)
            .bind(doc.kick_off_time)
            .bind(&doc.stadium)
            .bind(&doc.tournament)
            .bind(doc.final_result.as_ref().map(Json))
            .bind(doc.should_predict_goal_scorer)
            .bind(doc.include_stats)
            .bind(doc.preview_stats.as_ref().map(Json))
            .bind(doc.odds.as_ref().map(Json))
            .bind(doc.aggregate_score.as_ref().map(Json))
            .fetch_one(executor)
            .await?;

        Ok(row.into())
    }

    /// Deleting a fixture cascades to its predictions and ratings
    pub async fn delete(&self, fixture_id: Uuid) -> Result<PgQueryResult, sqlx::Error> {
        sqlx::query("DELETE FROM fixtures WHERE id = $1")
            .bind(fixture_id)
            .execute(&self.pool)
            .await
    }
}
