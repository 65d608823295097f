use sqlx::PgPool;
use uuid::Uuid;

use crate::models::league::GameWeek;

const GAME_WEEK_COLUMNS: &str = "id, league_id, week_number, name, created_at";

/// Service responsible for the rounds of a league
pub struct GameWeekService {
    pool: PgPool,
}

impl GameWeekService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        league_id: Uuid,
        week_number: i32,
        name: &str,
    ) -> Result<GameWeek, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO game_weeks (id, league_id, week_number, name, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING {}
            "#,
            GAME_WEEK_COLUMNS
        );
        let game_week = sqlx::query_as::<_, GameWeek>(&query)
            .bind(Uuid::new_v4())
            .bind(league_id)
            .bind(week_number)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!("Created game week {} of league {}", week_number, league_id);
        Ok(game_week)
    }

    pub async fn get(&self, game_week_id: Uuid) -> Result<Option<GameWeek>, sqlx::Error> {
        let query = format!("SELECT {} FROM game_weeks WHERE id = $1", GAME_WEEK_COLUMNS);
        sqlx::query_as::<_, GameWeek>(&query)
            .bind(game_week_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_for_league(&self, league_id: Uuid) -> Result<Vec<GameWeek>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM game_weeks WHERE league_id = $1 ORDER BY week_number ASC",
            GAME_WEEK_COLUMNS
        );
        sqlx::query_as::<_, GameWeek>(&query)
            .bind(league_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_number(
        &self,
        league_id: Uuid,
        week_number: i32,
    ) -> Result<Option<GameWeek>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM game_weeks WHERE league_id = $1 AND week_number = $2",
            GAME_WEEK_COLUMNS
        );
        sqlx::query_as::<_, GameWeek>(&query)
            .bind(league_id)
            .bind(week_number)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn count_for_league(&self, league_id: Uuid) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM game_weeks WHERE league_id = $1")
            .bind(league_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Highest week number in use, 0 for a league without rounds
    pub async fn latest_week_number(&self, league_id: Uuid) -> Result<i32, sqlx::Error> {
        let (latest,): (Option<i32>,) =
            sqlx::query_as("SELECT MAX(week_number) FROM game_weeks WHERE league_id = $1")
                .bind(league_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(latest.unwrap_or(0))
    }
}
