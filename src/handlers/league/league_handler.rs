use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::{failure, invalid_caller};
use crate::league::league::LeagueService;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::league::PaginationQuery;

#[tracing::instrument(
    name = "List leagues",
    skip(query, pool, claims),
    fields(username = %claims.username, query = %query)
)]
pub async fn list_leagues(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_caller();
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_leagues(user_id, &query).await {
        Ok(leagues) => HttpResponse::Ok().json(ApiResponse::success("Leagues retrieved", leagues)),
        Err(e) => failure("list leagues", e),
    }
}

#[tracing::instrument(
    name = "Join league",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn join_league(
    league_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_caller();
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.join_league(league_id, user_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Joined league")),
        Ok(false) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Already a member")),
        Err(e) => failure("join league", e),
    }
}

pub async fn list_game_weeks(league_id: Uuid, pool: web::Data<PgPool>) -> HttpResponse {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_game_weeks(league_id).await {
        Ok(weeks) => HttpResponse::Ok().json(ApiResponse::success("Game weeks retrieved", weeks)),
        Err(e) => failure("list game weeks", e),
    }
}

#[tracing::instrument(name = "Get leaderboard", skip(pool))]
pub async fn get_leaderboard(league_id: Uuid, pool: web::Data<PgPool>) -> HttpResponse {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.leaderboard(league_id).await {
        Ok(leaderboard) => HttpResponse::Ok().json(ApiResponse::success("Leaderboard retrieved", leaderboard)),
        Err(e) => failure("compute leaderboard", e),
    }
}
