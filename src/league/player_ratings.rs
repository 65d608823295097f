use sqlx::PgPool;
use uuid::Uuid;

use crate::models::player_rating::{PlayerRating, PlayerRatingSummary};

/// Service responsible for user ratings of players after a fixture
pub struct PlayerRatingService {
    pool: PgPool,
}

impl PlayerRatingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One rating per user, fixture and player; rating again replaces it
    pub async fn upsert(
        &self,
        fixture_id: Uuid,
        user_id: Uuid,
        player_id: &str,
        player_name: &str,
        rating: i32,
    ) -> Result<PlayerRating, sqlx::Error> {
        sqlx::query_as::<_, PlayerRating>(
            r#"
            INSERT INTO player_ratings (fixture_id, user_id, player_id, player_name, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            ON CONFLICT (fixture_id, user_id, player_id) DO UPDATE SET
                rating = EXCLUDED.rating,
                player_name = EXCLUDED.player_name,
                updated_at = NOW()
            RETURNING fixture_id, user_id, player_id, player_name, rating, created_at, updated_at
            "#,
        )
        .bind(fixture_id)
        .bind(user_id)
        .bind(player_id)
        .bind(player_name)
        .bind(rating)
        .fetch_one(&self.pool)
        .await
    }

    /// Average rating per player, best rated first
    pub async fn summary_for_fixture(&self, fixture_id: Uuid) -> Result<Vec<PlayerRatingSummary>, sqlx::Error> {
        sqlx::query_as::<_, PlayerRatingSummary>(
            r#"
            SELECT
                player_id,
                MAX(player_name) AS player_name,
                AVG(rating)::DOUBLE PRECISION AS average_rating,
                COUNT(*)::BIGINT AS ratings_count
            FROM player_ratings
            WHERE fixture_id = $1
            GROUP BY player_id
            ORDER BY average_rating DESC, player_name ASC
            "#,
        )
        .bind(fixture_id)
        .fetch_all(&self.pool)
        .await
    }
}
