//! Diagram generation endpoint — demo stub.

use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppResult;

/// Request body for diagram generation.
#[derive(Debug, Deserialize)]
pub struct GenerateDiagramRequest {
    /// Experiment category; routing input once rendering exists.
    #[serde(rename = "type", default = "default_diagram_type")]
    pub diagram_type: String,
}

fn default_diagram_type() -> String {
    "electronics".into()
}

/// `POST /api/diagrams/generate` — generate a circuit/reaction diagram (demo).
pub async fn generate_handler(
    Json(body): Json<GenerateDiagramRequest>,
) -> AppResult<Json<serde_json::Value>> {
    debug!(diagram_type = %body.diagram_type, "diagram generation requested");

    Ok(Json(serde_json::json!({
        "diagram_url": "/static/diagrams/sample.png",
        "success": true
    })))
}
