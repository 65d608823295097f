//! Unauthenticated account endpoints: sign-up and token issuance.
use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::handlers::auth_handler::login_user;
use crate::handlers::registration_handler::register_user;
use crate::models::auth::LoginRequest;
use crate::models::user::RegistrationRequest;

#[post("/register_user")]
async fn register(
    registration: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    register_user(registration, pool).await
}

#[post("/login")]
async fn login(
    credentials: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    login_user(credentials, pool, jwt_settings).await
}
