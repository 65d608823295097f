use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::failure;
use crate::league::catalog::CatalogHandle;
use crate::league::league::LeagueService;
use crate::league::scoring::ScoreCalculator;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::fixture::{
    CreateFixtureRequest, FinalResultRequest, Odds, PreviewStatsRequest, UpdateFixtureRequest,
};

// POST /admin/game-weeks/{id}/fixtures
#[tracing::instrument(
    name = "Create fixture",
    skip(request, pool, catalog),
    fields(home = %request.home_team, away = %request.away_team)
)]
pub async fn create_fixture(
    path: web::Path<Uuid>,
    request: web::Json<CreateFixtureRequest>,
    pool: web::Data<PgPool>,
    catalog: web::Data<CatalogHandle>,
) -> HttpResponse {
    let game_week_id = path.into_inner();
    let catalog = match catalog.get() {
        Ok(catalog) => catalog,
        Err(e) => return failure("load team catalog", e),
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.create_fixture(game_week_id, request.into_inner(), &catalog).await {
        Ok(fixture) => HttpResponse::Created().json(ApiResponse::success("Fixture created", fixture)),
        Err(e) => failure("create fixture", e),
    }
}

// PATCH /admin/fixtures/{id}
#[tracing::instrument(name = "Update fixture", skip(request, pool, calculator))]
pub async fn update_fixture(
    path: web::Path<Uuid>,
    request: web::Json<UpdateFixtureRequest>,
    pool: web::Data<PgPool>,
    calculator: web::Data<ScoreCalculator>,
) -> HttpResponse {
    let fixture_id = path.into_inner();
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.update_fixture(fixture_id, request.into_inner(), &calculator).await {
        Ok(fixture) => HttpResponse::Ok().json(ApiResponse::success("Fixture updated", fixture)),
        Err(e) => failure("update fixture", e),
    }
}

// DELETE /admin/fixtures/{id}
#[tracing::instrument(name = "Delete fixture", skip(pool))]
pub async fn delete_fixture(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> HttpResponse {
    let fixture_id = path.into_inner();
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.delete_fixture(fixture_id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Fixture deleted")),
        Err(e) => failure("delete fixture", e),
    }
}

// PUT /admin/fixtures/{id}/result
#[tracing::instrument(
    name = "Enter final result",
    skip(request, pool, calculator, claims),
    fields(admin = %claims.username)
)]
pub async fn enter_result(
    path: web::Path<Uuid>,
    request: web::Json<FinalResultRequest>,
    pool: web::Data<PgPool>,
    calculator: web::Data<ScoreCalculator>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let fixture_id = path.into_inner();
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.enter_result(fixture_id, request.into_inner(), &calculator).await {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success("Result saved and predictions scored", outcome)),
        Err(e) => failure("enter final result", e),
    }
}

// PUT /admin/fixtures/{id}/stats
#[tracing::instrument(name = "Update preview stats", skip(request, pool, calculator))]
pub async fn update_preview_stats(
    path: web::Path<Uuid>,
    request: web::Json<PreviewStatsRequest>,
    pool: web::Data<PgPool>,
    calculator: web::Data<ScoreCalculator>,
) -> HttpResponse {
    let fixture_id = path.into_inner();
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.update_preview_stats(fixture_id, request.into_inner(), &calculator).await {
        Ok(fixture) => HttpResponse::Ok().json(ApiResponse::success("Preview stats saved", fixture)),
        Err(e) => failure("update preview stats", e),
    }
}

// GET /admin/fixtures/{id}/stats/suggestion
#[tracing::instrument(name = "Suggest preview stats", skip(pool))]
pub async fn suggest_preview_stats(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> HttpResponse {
    let fixture_id = path.into_inner();
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.suggest_preview_stats(fixture_id).await {
        Ok(suggestion) => HttpResponse::Ok().json(ApiResponse::success("Stats suggested from previous game week", suggestion)),
        Err(e) => failure("suggest preview stats", e),
    }
}

// PUT /admin/fixtures/{id}/odds
#[tracing::instrument(name = "Update odds", skip(request, pool, calculator))]
pub async fn update_odds(
    path: web::Path<Uuid>,
    request: web::Json<Odds>,
    pool: web::Data<PgPool>,
    calculator: web::Data<ScoreCalculator>,
) -> HttpResponse {
    let fixture_id = path.into_inner();
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.update_odds(fixture_id, request.into_inner(), &calculator).await {
        Ok(fixture) => HttpResponse::Ok().json(ApiResponse::success("Odds saved", fixture)),
        Err(e) => failure("update odds", e),
    }
}
