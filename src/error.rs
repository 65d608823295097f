use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::models::common::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Predictions for this fixture are locked since kick-off")]
    PredictionLocked,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not available: {0}")]
    Unavailable(String),

    #[error("Team catalog error: {0}")]
    Catalog(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl LeagueError {
    pub fn not_found(what: impl Into<String>) -> Self {
        LeagueError::NotFound(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        LeagueError::Validation(message.into())
    }
}

impl ResponseError for LeagueError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeagueError::NotFound(_) => StatusCode::NOT_FOUND,
            LeagueError::Validation(_) => StatusCode::BAD_REQUEST,
            LeagueError::Forbidden(_) | LeagueError::PredictionLocked => StatusCode::FORBIDDEN,
            LeagueError::Conflict(_) | LeagueError::Unavailable(_) => StatusCode::CONFLICT,
            LeagueError::Catalog(_) | LeagueError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage details stay in the logs
        let message = match self {
            LeagueError::Database(_) => "Database error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(message))
    }
}
