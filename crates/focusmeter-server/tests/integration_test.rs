use focusmeter_core::config::ScoringWeights;
use focusmeter_core::scorer::FocusScorer;
use focusmeter_server::state::AppState;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let state = Arc::new(AppState::new(FocusScorer::new(ScoringWeights::default())));
    let app = focusmeter_server::app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 0)); // Random port
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_predict_flow() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/predict", url))
        .json(&json!({
            "typing_speed": 60,
            "idle_time": 0,
            "tab_switches": 0
        }))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["focus_score"], 81.0);
    assert_eq!(body["focus_label"], "Focused");
}

#[tokio::test]
async fn test_predict_defaults_missing_fields() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/predict", url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["focus_score"], 75.0);
    assert_eq!(body["focus_label"], "Losing Focus");
}

#[tokio::test]
async fn test_predict_coerces_numeric_strings() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/predict", url))
        .json(&json!({ "idle_time": "60" }))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["focus_score"], 10.0);
    assert_eq!(body["focus_label"], "Distracted");
}

#[tokio::test]
async fn test_predict_rejects_non_numeric() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/predict", url))
        .json(&json!({ "typing_speed": "very fast" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("typing_speed"));
}

#[tokio::test]
async fn test_predict_rejects_non_object_body() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/predict", url))
        .json(&json!([1, 2, 3]))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_health() {
    let url = spawn_server().await;

    let resp = reqwest::get(format!("{}/health", url)).await.unwrap();
    assert!(resp.status().is_success());

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "ML Service is running");
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let url = spawn_server().await;

    let resp = reqwest::get(&url).await.unwrap();
    assert!(resp.status().is_success());

    let body: Value = resp.json().await.unwrap();
    let endpoints: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert!(endpoints.contains(&"POST /predict"));
    assert!(endpoints.contains(&"GET /health"));
}
