//! Service index and health probe.

use axum::Json;

use crate::models::HealthResponse;

/// Service name reported by the health probe.
const SERVICE_NAME: &str = "labdesk";

/// `GET /` — service metadata and endpoint map.
pub async fn index_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Labdesk API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/api/experiments": "Get all experiments",
            "/api/ocr/analyze": "Analyze experiment image with OCR",
            "/api/diagrams/generate": "Generate circuit diagrams",
            "/api/simulation/run": "Run experiment simulation",
            "/api/viva/questions": "Get viva questions",
            "/api/lab-record/verify": "Verify lab record"
        }
    }))
}

/// `GET /api/health` — liveness probe.
///
/// Deliberately does not touch the store: this reports that the process is
/// up, not that its dependencies are.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
