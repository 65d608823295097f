//! Database query helpers that turn empty results into domain errors.
//!
//! ```ignore
//! let fixture = require_record(
//!     sqlx::query_as::<_, FixtureRow>("SELECT ... WHERE id = $1")
//!         .bind(fixture_id)
//!         .fetch_optional(&pool)
//!         .await,
//!     "Fixture",
//! )?;
//! ```

use sqlx::postgres::PgQueryResult;

use crate::error::LeagueError;

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    what: &str,
) -> Result<T, LeagueError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(LeagueError::not_found(what)),
        Err(e) => {
            tracing::error!("Database error while loading {}: {}", what, e);
            Err(LeagueError::Database(e))
        }
    }
}

/// An UPDATE or DELETE that touched no row means the target did not exist.
pub fn require_affected(
    result: Result<PgQueryResult, sqlx::Error>,
    what: &str,
) -> Result<u64, LeagueError> {
    match result {
        Ok(done) if done.rows_affected() == 0 => Err(LeagueError::not_found(what)),
        Ok(done) => Ok(done.rows_affected()),
        Err(e) => {
            tracing::error!("Database error while writing {}: {}", what, e);
            Err(LeagueError::Database(e))
        }
    }
}

/// Map a unique-constraint violation to a Conflict with the given message.
pub fn conflict_on_duplicate(e: sqlx::Error, message: &str) -> LeagueError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => LeagueError::Conflict(message.to_string()),
        _ => LeagueError::Database(e),
    }
}
