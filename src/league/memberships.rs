use sqlx::PgPool;
use uuid::Uuid;

use crate::models::league::{League, LeagueWithMembership};

/// Service responsible for leagues and who plays in them
pub struct MembershipService {
    pool: PgPool,
}

impl MembershipService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a league; its creator joins it straight away
    pub async fn create_league(&self, name: &str, created_by: Uuid) -> Result<League, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let league = sqlx::query_as::<_, League>(
            r#"
            INSERT INTO leagues (id, name, created_by, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, name, created_by, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(created_by)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO league_members (league_id, user_id, joined_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (league_id, user_id) DO NOTHING
            "#,
        )
        .bind(league.id)
        .bind(created_by)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!("Created league '{}' ({})", league.name, league.id);
        Ok(league)
    }

    pub async fn get_league(&self, league_id: Uuid) -> Result<Option<League>, sqlx::Error> {
        sqlx::query_as::<_, League>(
            "SELECT id, name, created_by, created_at FROM leagues WHERE id = $1",
        )
        .bind(league_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// All leagues, flagged with whether the user is a member
    pub async fn list_leagues(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LeagueWithMembership>, sqlx::Error> {
        sqlx::query_as::<_, LeagueWithMembership>(
            r#"
            SELECT
                l.id,
                l.name,
                l.created_by,
                l.created_at,
                COUNT(lm.user_id) AS member_count,
                COALESCE(BOOL_OR(lm.user_id = $1), FALSE) AS is_member
            FROM leagues l
            LEFT JOIN league_members lm ON lm.league_id = l.id
            GROUP BY l.id
            ORDER BY l.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    /// Returns false when the user was already a member
    pub async fn join(&self, league_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO league_members (league_id, user_id, joined_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (league_id, user_id) DO NOTHING
            "#,
        )
        .bind(league_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn is_member(&self, league_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let found: Option<(Uuid,)> = sqlx::query_as(
            "SELECT user_id FROM league_members WHERE league_id = $1 AND user_id = $2",
        )
        .bind(league_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found.is_some())
    }
}
