use sqlx::PgPool;
use uuid::Uuid;

use crate::models::league::{LeaderboardEntry, RankedEntry};

/// Service responsible for the prediction leaderboard of a league
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Points per member, summed over the scored predictions of the league's fixtures
    pub async fn get_leaderboard(&self, league_id: Uuid) -> Result<Vec<RankedEntry>, sqlx::Error> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT
                u.id AS user_id,
                u.username,
                COALESCE(SUM((p.points->>'total')::BIGINT), 0)::BIGINT AS total_points,
                COUNT(p.points)::BIGINT AS predictions_scored,
                COUNT(*) FILTER (WHERE (p.points->>'correctResult')::BIGINT > 0)::BIGINT AS exact_results
            FROM league_members lm
            JOIN users u ON u.id = lm.user_id
            LEFT JOIN game_weeks gw ON gw.league_id = lm.league_id
            LEFT JOIN fixtures f ON f.game_week_id = gw.id
            LEFT JOIN predictions p ON p.fixture_id = f.id AND p.user_id = lm.user_id
            WHERE lm.league_id = $1
            GROUP BY u.id, u.username
            "#,
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Computed leaderboard of league {} with {} members", league_id, entries.len());
        Ok(rank_entries(entries))
    }
}

/// Order by points, then exact results, then name. Equal points and exact
/// results share a position and the next position is skipped.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(b.exact_results.cmp(&a.exact_results))
            .then_with(|| a.username.cmp(&b.username))
    });

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let position = match ranked.last() {
            Some(prev)
                if prev.entry.total_points == entry.total_points
                    && prev.entry.exact_results == entry.exact_results =>
            {
                prev.position
            }
            _ => (index + 1) as u32,
        };
        ranked.push(RankedEntry { position, entry });
    }
    ranked
}
