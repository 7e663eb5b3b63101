use crate::model::HealthResponse;
use axum::Json;

pub const LIVENESS_MESSAGE: &str = "URL Shortener Service Healthcheck service is running";

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn liveness_handler() -> &'static str {
    LIVENESS_MESSAGE
}
