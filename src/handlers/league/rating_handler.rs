use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::{failure, invalid_caller};
use crate::league::league::LeagueService;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::player_rating::PlayerRatingRequest;

#[tracing::instrument(
    name = "Rate player",
    skip(request, pool, claims),
    fields(username = %claims.username, player_id = %request.player_id)
)]
pub async fn rate_player(
    fixture_id: Uuid,
    request: web::Json<PlayerRatingRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_caller();
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.rate_player(user_id, fixture_id, request.into_inner()).await {
        Ok(rating) => HttpResponse::Ok().json(ApiResponse::success("Rating saved", rating)),
        Err(e) => failure("rate player", e),
    }
}

pub async fn get_player_ratings(fixture_id: Uuid, pool: web::Data<PgPool>) -> HttpResponse {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.player_ratings(fixture_id).await {
        Ok(summary) => HttpResponse::Ok().json(ApiResponse::success("Ratings retrieved", summary)),
        Err(e) => failure("summarize ratings", e),
    }
}
