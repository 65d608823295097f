use reqwest::Client;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;
use secrecy::ExposeSecret;

use matchday_backend::run;
use matchday_backend::auth::jwt::generate_token;
use matchday_backend::config::jwt::JwtSettings;
use matchday_backend::config::settings::{get_config, get_jwt_settings, DatabaseSettings};
use matchday_backend::league::catalog::{CatalogHandle, TeamCatalog};
use matchday_backend::league::scoring::ScoreCalculator;
use matchday_backend::models::user::{UserCredentials, UserRole, UserStatus};
use matchday_backend::telemetry::{get_subscriber, init_subscriber};

use super::builders::sample_catalog_json;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub jwt_settings: JwtSettings,
}

impl TestApp {
    /// Bearer token for a made-up user; nothing is written to the database
    pub fn token_for(&self, role: UserRole, status: UserStatus) -> String {
        let user = UserCredentials {
            id: Uuid::new_v4(),
            username: format!("tester{}", &Uuid::new_v4().simple().to_string()[..8]),
            password_hash: String::new(),
            role,
            status,
        };
        generate_token(&user, &self.jwt_settings).expect("Failed to sign token")
    }
}

/// Serve the app on a random port. The pool connects lazily, so requests
/// that are rejected before any query run without a database.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_config().expect("Failed to read configuration.");
    let connection_pool = PgPoolOptions::new()
        .connect_lazy(configuration.database.connection_string().expose_secret())
        .expect("Failed to create Postgres connection pool");

    let catalog = TeamCatalog::from_json(sample_catalog_json()).expect("Invalid sample catalog");
    let server = run(
        listener,
        connection_pool.clone(),
        get_jwt_settings(&configuration),
        CatalogHandle::preloaded(catalog),
        ScoreCalculator::new(configuration.scoring.clone()),
        vec![],
    )
    .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
        jwt_settings: get_jwt_settings(&configuration),
    }
}

/// Serve the app against a freshly created and migrated database
pub async fn spawn_app_with_db() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database).await;

    let catalog = TeamCatalog::from_json(sample_catalog_json()).expect("Invalid sample catalog");
    let server = run(
        listener,
        connection_pool.clone(),
        get_jwt_settings(&configuration),
        CatalogHandle::preloaded(catalog),
        ScoreCalculator::new(configuration.scoring.clone()),
        vec![],
    )
    .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
        jwt_settings: get_jwt_settings(&configuration),
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Register a user through the API, optionally promote it, and log in.
/// Returns the username and bearer token.
pub async fn register_and_login(app: &TestApp, role: UserRole) -> (String, String) {
    let client = Client::new();
    let username = format!("player{}", &Uuid::new_v4().simple().to_string()[..10]);
    let password = "password123";

    let response = client
        .post(&format!("{}/register_user", app.address))
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": password
        }))
        .send()
        .await
        .expect("Failed to register user.");
    assert!(response.status().is_success(), "registration failed: {}", response.status());

    if role != UserRole::User {
        sqlx::query("UPDATE users SET role = $1 WHERE username = $2")
            .bind(role)
            .bind(&username)
            .execute(&app.db_pool)
            .await
            .expect("Failed to promote user");
    }

    let response = client
        .post(&format!("{}/login", app.address))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to log in.");
    assert!(response.status().is_success(), "login failed: {}", response.status());

    let body: serde_json::Value = response.json().await.expect("login body");
    let token = body["token"].as_str().expect("token").to_string();
    (username, token)
}
