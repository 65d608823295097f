use actix_web::{HttpResponse, ResponseError};

use crate::error::LeagueError;

pub mod admin;
pub mod auth_handler;
pub mod backend_health_handler;
pub mod league;
pub mod registration_handler;

/// Log a failed league operation and render it in the API envelope
pub(crate) fn failure(action: &str, error: LeagueError) -> HttpResponse {
    match &error {
        LeagueError::Database(_) | LeagueError::Catalog(_) => {
            tracing::error!("Failed to {}: {}", action, error)
        }
        _ => tracing::info!("Could not {}: {}", action, error),
    }
    error.error_response()
}

pub(crate) fn invalid_caller() -> HttpResponse {
    tracing::error!("Invalid user ID in claims");
    HttpResponse::BadRequest().json(crate::models::common::ApiResponse::<()>::error("Invalid user ID"))
}
