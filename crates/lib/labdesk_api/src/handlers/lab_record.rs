//! Lab-record verification endpoint — demo stub.

use axum::Json;

use crate::error::AppResult;

/// `POST /api/lab-record/verify` — verify a lab record (demo).
pub async fn verify_handler(
    Json(_body): Json<serde_json::Value>,
) -> AppResult<Json<serde_json::Value>> {
    Ok(Json(serde_json::json!({
        "errors": [],
        "suggestions": ["Great work! All calculations are correct."],
        "score": 95,
        "success": true
    })))
}
