use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::conflict_on_duplicate;
use crate::error::LeagueError;
use crate::handlers::failure;
use crate::models::common::ApiResponse;
use crate::models::user::{RegistrationRequest, UserProfile, UserRole, UserStatus};
use crate::utils::password::hash_password;

const MIN_PASSWORD_LENGTH: usize = 8;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form.email
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>
) -> HttpResponse {
    if let Err(e) = validate_registration(&user_form) {
        return failure("register user", e);
    }

    match insert_user(&user_form, &pool).await {
        Ok(profile) => HttpResponse::Created().json(ApiResponse::success("User registered", profile)),
        Err(e) => failure("register user", e),
    }
}

/// Usernames are 3 to 50 letters, digits, `_` or `-`
pub fn validate_registration(form: &RegistrationRequest) -> Result<(), LeagueError> {
    let username = form.username.trim();
    let valid_chars = username.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    if !(3..=50).contains(&username.chars().count()) || !valid_chars {
        return Err(LeagueError::validation(
            "Username must be 3 to 50 letters, digits, '_' or '-'",
        ));
    }

    let email = form.email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => return Err(LeagueError::validation("Email address is not valid")),
    }

    if form.password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(LeagueError::validation(format!(
            "Password must have at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

pub async fn insert_user(
    user_form: &RegistrationRequest,
    pool: &PgPool
) -> Result<UserProfile, LeagueError> {
    let password_hash = hash_password(user_form.password.expose_secret()).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        LeagueError::validation("Password could not be processed")
    })?;

    sqlx::query_as::<_, UserProfile>(
        r#"
        INSERT INTO users (id, username, password_hash, email, role, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        RETURNING id, username, email, role, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_form.username.trim())
    .bind(&password_hash)
    .bind(user_form.email.trim().to_lowercase())
    .bind(UserRole::User)
    .bind(UserStatus::Active)
    .fetch_one(pool)
    .await
    .map_err(|e| conflict_on_duplicate(e, "Username or email is already taken"))
}
