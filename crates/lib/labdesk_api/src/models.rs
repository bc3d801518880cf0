//! Response body types for the HTTP surface.

use serde::Serialize;

/// Error envelope returned for any failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// `GET /api/experiments` response.
///
/// `count` is always computed from `experiments` just before serialization,
/// so the two can never diverge.
#[derive(Debug, Serialize)]
pub struct ExperimentsResponse {
    pub experiments: Vec<serde_json::Value>,
    pub count: usize,
}
