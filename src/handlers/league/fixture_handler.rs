use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::failure;
use crate::league::league::LeagueService;
use crate::models::common::ApiResponse;

/// Fixtures of a game week in kick-off order
pub async fn list_game_week_fixtures(game_week_id: Uuid, pool: web::Data<PgPool>) -> HttpResponse {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_fixtures(game_week_id).await {
        Ok(fixtures) => HttpResponse::Ok().json(ApiResponse::success("Fixtures retrieved", fixtures)),
        Err(e) => failure("list fixtures", e),
    }
}

pub async fn get_fixture(fixture_id: Uuid, pool: web::Data<PgPool>) -> HttpResponse {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.get_fixture(fixture_id).await {
        Ok(fixture) => HttpResponse::Ok().json(ApiResponse::success("Fixture retrieved", fixture)),
        Err(e) => failure("get fixture", e),
    }
}
