use sqlx::postgres::PgQueryResult;
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::prediction::{
    Prediction, PredictionPoints, PredictionRow, PredictionWithUser, PredictionWithUserRow,
};

const PREDICTION_COLUMNS: &str = "p.user_id, p.fixture_id, p.home_goals, p.away_goals, p.outcome, \
    p.goal_scorer, p.points, p.created_at, p.updated_at";

/// Service responsible for stored predictions, one per user and fixture
pub struct PredictionService {
    pool: PgPool,
}

impl PredictionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or replace the user's prediction. Any earlier points are cleared.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        prediction: &Prediction,
    ) -> Result<Prediction, sqlx::Error> {
        let row = sqlx::query_as::<_, PredictionRow>(
            r#"
            INSERT INTO predictions (
                user_id, fixture_id, home_goals, away_goals, outcome, goal_scorer, points, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, NULL, NOW(), NOW())
            ON CONFLICT (user_id, fixture_id) DO UPDATE SET
                home_goals = EXCLUDED.home_goals,
                away_goals = EXCLUDED.away_goals,
                outcome = EXCLUDED.outcome,
                goal_scorer = EXCLUDED.goal_scorer,
                points = NULL,
                updated_at = NOW()
            RETURNING user_id, fixture_id, home_goals, away_goals, outcome, goal_scorer, points, created_at, updated_at
            "#,
        )
        .bind(prediction.user_id)
        .bind(prediction.fixture_id)
        .bind(prediction.home_goals as i32)
        .bind(prediction.away_goals as i32)
        .bind(prediction.outcome)
        .bind(prediction.goal_scorer.as_ref().map(Json))
        .fetch_one(executor)
        .await?;

        Ok(row.into())
    }

    pub async fn delete<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: Uuid,
        fixture_id: Uuid,
    ) -> Result<PgQueryResult, sqlx::Error> {
        sqlx::query("DELETE FROM predictions WHERE user_id = $1 AND fixture_id = $2")
            .bind(user_id)
            .bind(fixture_id)
            .execute(executor)
            .await
    }

    /// All predictions of a fixture with their authors
    pub async fn list_for_fixture(&self, fixture_id: Uuid) -> Result<Vec<PredictionWithUser>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT u.username, {}
            FROM predictions p
            JOIN users u ON u.id = p.user_id
            WHERE p.fixture_id = $1
            ORDER BY u.username ASC
            "#,
            PREDICTION_COLUMNS
        );
        let rows = sqlx::query_as::<_, PredictionWithUserRow>(&query)
            .bind(fixture_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(PredictionWithUser::from).collect())
    }

    /// One user's predictions for every fixture in a game week
    pub async fn list_for_user_in_game_week(
        &self,
        user_id: Uuid,
        game_week_id: Uuid,
    ) -> Result<Vec<Prediction>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {}
            FROM predictions p
            JOIN fixtures f ON f.id = p.fixture_id
            WHERE p.user_id = $1 AND f.game_week_id = $2
            ORDER BY f.kick_off_time ASC
            "#,
            PREDICTION_COLUMNS
        );
        let rows = sqlx::query_as::<_, PredictionRow>(&query)
            .bind(user_id)
            .bind(game_week_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Prediction::from).collect())
    }

    pub async fn fetch_for_fixture<'e, E: PgExecutor<'e>>(
        executor: E,
        fixture_id: Uuid,
    ) -> Result<Vec<Prediction>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM predictions p WHERE p.fixture_id = $1",
            PREDICTION_COLUMNS
        );
        let rows = sqlx::query_as::<_, PredictionRow>(&query)
            .bind(fixture_id)
            .fetch_all(executor)
            .await?;
        Ok(rows.into_iter().map(Prediction::from).collect())
    }

    /// Persist computed points; `None` resets a prediction to unscored
    pub async fn store_points<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: Uuid,
        fixture_id: Uuid,
        points: Option<&PredictionPoints>,
    ) -> Result<PgQueryResult, sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE predictions
            SET points = $3
            WHERE user_id = $1 AND fixture_id = $2
            "#,
        )
        .bind(user_id)
        .bind(fixture_id)
        .bind(points.map(Json))
        .execute(executor)
        .await
    }
}
