use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::{failure, invalid_caller};
use crate::league::league::LeagueService;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::prediction::PredictionRequest;

#[tracing::instrument(
    name = "Submit prediction",
    skip(request, pool, claims),
    fields(username = %claims.username)
)]
pub async fn submit_prediction(
    fixture_id: Uuid,
    request: web::Json<PredictionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_caller();
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.submit_prediction(user_id, fixture_id, request.into_inner()).await {
        Ok(prediction) => HttpResponse::Ok().json(ApiResponse::success("Prediction saved", prediction)),
        Err(e) => failure("save prediction", e),
    }
}

#[tracing::instrument(
    name = "Withdraw prediction",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn withdraw_prediction(
    fixture_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_caller();
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.withdraw_prediction(user_id, fixture_id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Prediction withdrawn")),
        Err(e) => failure("withdraw prediction", e),
    }
}

pub async fn get_fixture_predictions(
    fixture_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_caller();
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.fixture_predictions(user_id, fixture_id).await {
        Ok(predictions) => HttpResponse::Ok().json(ApiResponse::success("Predictions retrieved", predictions)),
        Err(e) => failure("list predictions", e),
    }
}

pub async fn get_my_game_week_predictions(
    game_week_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_caller();
    };
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.my_game_week_predictions(user_id, game_week_id).await {
        Ok(predictions) => HttpResponse::Ok().json(ApiResponse::success("Predictions retrieved", predictions)),
        Err(e) => failure("list own predictions", e),
    }
}
