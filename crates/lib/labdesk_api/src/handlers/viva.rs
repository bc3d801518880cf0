//! Viva question endpoint — demo stub.

use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppResult;

/// Fixed question bank until AI generation lands.
const QUESTION_BANK: [&str; 5] = [
    "What is the time constant of an RC circuit?",
    "How does capacitor voltage vary during charging?",
    "What is the significance of the time constant?",
    "Derive the charging equation for RC circuit",
    "What happens to current at t=0 and t=infinity?",
];

/// Questions served at easy difficulty.
const EASY_QUESTION_COUNT: usize = 3;

/// Request body for viva question generation.
#[derive(Debug, Deserialize)]
pub struct VivaQuestionsRequest {
    pub experiment: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "medium".into()
}

/// `POST /api/viva/questions` — viva questions for an experiment (demo).
pub async fn questions_handler(
    Json(body): Json<VivaQuestionsRequest>,
) -> AppResult<Json<serde_json::Value>> {
    debug!(experiment = ?body.experiment, difficulty = %body.difficulty, "viva questions requested");

    let questions = if body.difficulty == "easy" {
        &QUESTION_BANK[..EASY_QUESTION_COUNT]
    } else {
        &QUESTION_BANK[..]
    };

    Ok(Json(serde_json::json!({
        "questions": questions,
        "success": true
    })))
}
