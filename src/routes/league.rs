// src/routes/league.rs
use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::{
    catalog_handler, fixture_handler, league_handler, prediction_handler, rating_handler,
};
use crate::league::catalog::CatalogHandle;
use crate::middleware::auth::Claims;
use crate::models::league::PaginationQuery;
use crate::models::player_rating::PlayerRatingRequest;
use crate::models::prediction::PredictionRequest;

/// Catalog leagues teams can be picked from
#[get("/catalog")]
async fn list_catalog_leagues(catalog: web::Data<CatalogHandle>) -> HttpResponse {
    catalog_handler::list_catalog_leagues(catalog).await
}

#[get("/catalog/{league}")]
async fn get_catalog_teams(
    path: web::Path<String>,
    catalog: web::Data<CatalogHandle>,
) -> HttpResponse {
    catalog_handler::get_catalog_teams(path.into_inner(), catalog).await
}

#[get("/catalog/{league}/teams/{team_name}")]
async fn get_catalog_team(
    path: web::Path<(String, String)>,
    catalog: web::Data<CatalogHandle>,
) -> HttpResponse {
    let (league, team_name) = path.into_inner();
    catalog_handler::get_catalog_team(league, team_name, catalog).await
}

/// All leagues, with the caller's membership
#[get("/leagues")]
async fn list_leagues(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    league_handler::list_leagues(query, pool, claims).await
}

#[post("/leagues/{league_id}/join")]
async fn join_league(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    league_handler::join_league(path.into_inner(), pool, claims).await
}

#[get("/leagues/{league_id}/game-weeks")]
async fn list_game_weeks(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    league_handler::list_game_weeks(path.into_inner(), pool).await
}

#[get("/leagues/{league_id}/leaderboard")]
async fn get_leaderboard(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    league_handler::get_leaderboard(path.into_inner(), pool).await
}

#[get("/game-weeks/{game_week_id}/fixtures")]
async fn list_game_week_fixtures(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    fixture_handler::list_game_week_fixtures(path.into_inner(), pool).await
}

/// The caller's own predictions for a game week
#[get("/game-weeks/{game_week_id}/predictions/me")]
async fn get_my_game_week_predictions(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    prediction_handler::get_my_game_week_predictions(path.into_inner(), pool, claims).await
}

#[get("/fixtures/{fixture_id}")]
async fn get_fixture(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    fixture_handler::get_fixture(path.into_inner(), pool).await
}

/// Create or replace the caller's prediction until kick-off
#[put("/fixtures/{fixture_id}/prediction")]
async fn submit_prediction(
    path: web::Path<Uuid>,
    request: web::Json<PredictionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    prediction_handler::submit_prediction(path.into_inner(), request, pool, claims).await
}

#[delete("/fixtures/{fixture_id}/prediction")]
async fn withdraw_prediction(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    prediction_handler::withdraw_prediction(path.into_inner(), pool, claims).await
}

#[get("/fixtures/{fixture_id}/predictions")]
async fn get_fixture_predictions(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    prediction_handler::get_fixture_predictions(path.into_inner(), pool, claims).await
}

#[put("/fixtures/{fixture_id}/ratings")]
async fn rate_player(
    path: web::Path<Uuid>,
    request: web::Json<PlayerRatingRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    rating_handler::rate_player(path.into_inner(), request, pool, claims).await
}

#[get("/fixtures/{fixture_id}/ratings")]
async fn get_player_ratings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    rating_handler::get_player_ratings(path.into_inner(), pool).await
}
