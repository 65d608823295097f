use reqwest::Client;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn health_reports_up_in_the_response_envelope() {
    let app = spawn_app().await;

    let response = Client::new()
        .get(&format!("{}/backend_health", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Backend is up");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn health_ignores_credentials() {
    let app = spawn_app().await;

    let response = Client::new()
        .get(&format!("{}/backend_health", &app.address))
        .bearer_auth("not-a-token")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
}
