use reqwest::{Client, StatusCode};
use serde_json::json;
use uuid::Uuid;

use matchday_backend::models::user::{UserRole, UserStatus};

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn league_routes_require_a_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/league/leagues", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_and_forged_tokens_are_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let url = format!("{}/league/fixtures/{}", &test_app.address, Uuid::new_v4());

    let response = client
        .get(&url)
        .header("Authorization", "Token abc")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = client
        .get(&url)
        .bearer_auth("not.a.jwt")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn banned_users_are_turned_away() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = test_app.token_for(UserRole::User, UserStatus::Banned);

    let response = client
        .get(&format!("{}/league/catalog", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn regular_users_cannot_reach_admin_routes() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = test_app.token_for(UserRole::User, UserStatus::Active);

    let response = client
        .put(&format!("{}/admin/fixtures/{}/result", &test_app.address, Uuid::new_v4()))
        .bearer_auth(&token)
        .json(&json!({ "homeTeamGoals": 1, "awayTeamGoals": 0 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admins_pass_the_guard_and_get_input_validated() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = test_app.token_for(UserRole::Admin, UserStatus::Active);

    let response = client
        .put(&format!("{}/admin/fixtures/{}/odds", &test_app.address, Uuid::new_v4()))
        .bearer_auth(&token)
        .json(&json!({ "homeWin": "1.90", "draw": "evens", "awayWin": "4.10" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap_or_default().contains("draw"));
}

#[tokio::test]
async fn negative_predictions_are_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = test_app.token_for(UserRole::User, UserStatus::Active);

    let response = client
        .put(&format!("{}/league/fixtures/{}/prediction", &test_app.address, Uuid::new_v4()))
        .bearer_auth(&token)
        .json(&json!({ "homeGoals": -1, "awayGoals": 2 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .put(&format!("{}/league/fixtures/{}/prediction", &test_app.address, Uuid::new_v4()))
        .bearer_auth(&token)
        .json(&json!({ "awayGoals": 2 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_is_served_to_signed_in_users() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = test_app.token_for(UserRole::User, UserStatus::Active);

    let response = client
        .get(&format!("{}/league/catalog/test-league/teams/valley%20rovers", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["data"]["name"], "Valley Rovers");
    assert_eq!(body["data"]["stadium"], "The Meadow");

    let response = client
        .get(&format!("{}/league/catalog", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["data"], serde_json::json!(["test-league", "test-nations"]));

    let response = client
        .get(&format!("{}/league/catalog/unknown-league", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
