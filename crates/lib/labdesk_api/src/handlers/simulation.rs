//! Simulation endpoint — demo stub.

use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppResult;

/// Request body for running a simulation.
#[derive(Debug, Deserialize)]
pub struct RunSimulationRequest {
    pub experiment_id: Option<String>,
}

/// `POST /api/simulation/run` — run an experiment simulation (demo).
pub async fn run_handler(
    Json(body): Json<RunSimulationRequest>,
) -> AppResult<Json<serde_json::Value>> {
    debug!(experiment_id = ?body.experiment_id, "simulation requested");

    Ok(Json(serde_json::json!({
        "simulation_url": "/simulations/rc-circuit",
        "success": true
    })))
}
