use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "FocusMeter ML Service".to_string(),
        version: "0.2.0".to_string(),
        endpoints: vec![
            "POST /predict".to_string(),
            "GET /health".to_string(),
        ],
    })
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        version: "0.2.0".to_string(),
        message: "ML Service is running".to_string(),
    })
}
