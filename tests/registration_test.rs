use reqwest::{Client, StatusCode};
use serde_json::json;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn registration_rejects_invalid_forms() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let cases = [
        (json!({ "username": "ab", "email": "ab@example.com", "password": "password123" }), "short username"),
        (json!({ "username": "no spaces", "email": "ns@example.com", "password": "password123" }), "bad characters"),
        (json!({ "username": "keeper", "email": "keeper.example.com", "password": "password123" }), "bad email"),
        (json!({ "username": "keeper", "email": "keeper@example.com", "password": "short" }), "short password"),
    ];

    for (body, reason) in cases {
        let response = client
            .post(&format!("{}/register_user", &test_app.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", reason);
    }
}
