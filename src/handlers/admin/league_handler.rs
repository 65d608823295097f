use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::{failure, invalid_caller};
use crate::league::league::LeagueService;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::league::{CreateGameWeekRequest, CreateLeagueRequest};

// POST /admin/leagues
#[tracing::instrument(
    name = "Create league",
    skip(request, pool, claims),
    fields(admin = %claims.username, name = %request.name)
)]
pub async fn create_league(
    request: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(admin_id) = claims.user_id() else {
        return invalid_caller();
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.create_league(request.into_inner(), admin_id).await {
        Ok(league) => HttpResponse::Created().json(ApiResponse::success("League created", league)),
        Err(e) => failure("create league", e),
    }
}

// POST /admin/leagues/{id}/game-weeks
#[tracing::instrument(name = "Create game week", skip(request, pool))]
pub async fn create_game_week(
    path: web::Path<Uuid>,
    request: web::Json<CreateGameWeekRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    let league_id = path.into_inner();
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.create_game_week(league_id, request.into_inner()).await {
        Ok(week) => HttpResponse::Created().json(ApiResponse::success("Game week created", week)),
        Err(e) => failure("create game week", e),
    }
}
