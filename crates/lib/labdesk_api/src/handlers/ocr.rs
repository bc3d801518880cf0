//! OCR analysis endpoint — demo stub.
//!
//! Accepts the upload and returns a fixed extraction payload; the OCR and
//! AI analysis passes are not built yet.

use axum::Json;
use axum::extract::Multipart;

use crate::error::{AppError, AppResult};

/// `POST /api/ocr/analyze` — analyze an uploaded lab-report image (demo).
pub async fn analyze_handler(mut multipart: Multipart) -> AppResult<Json<serde_json::Value>> {
    let mut uploaded = false;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() == Some("file") {
            // Drain the upload; the content is unused until OCR lands.
            field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(e.to_string()))?;
            uploaded = true;
        }
    }

    if !uploaded {
        return Err(AppError::Validation("No file uploaded".into()));
    }

    Ok(Json(serde_json::json!({
        "experiment_name": "RC Circuit Time Constant",
        "objective": "To study the charging and discharging characteristics",
        "apparatus": ["Resistor", "Capacitor", "Power Supply"],
        "theory": "When a capacitor charges through a resistor...",
        "success": true
    })))
}
