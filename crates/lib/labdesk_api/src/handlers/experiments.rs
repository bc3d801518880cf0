//! Experiment catalog endpoint.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::ExperimentsResponse;

/// Per-attempt timeout for the store query.
const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Retries after the first failed attempt.
const STORE_RETRIES: u32 = 2;

/// Pause between attempts.
const RETRY_PAUSE: Duration = Duration::from_millis(200);

/// `GET /api/experiments` — every experiment document, in store order.
///
/// Read-only and idempotent; the internal row id never appears in the
/// documents.
pub async fn list_experiments_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ExperimentsResponse>> {
    let experiments = fetch_with_retry(&state.pool).await?;
    let count = experiments.len();
    Ok(Json(ExperimentsResponse { experiments, count }))
}

/// Runs the store query with a per-attempt timeout and a bounded retry.
///
/// A hung store must not hold the handler indefinitely; after the last
/// attempt the failure is surfaced as-is.
async fn fetch_with_retry(pool: &sqlx::PgPool) -> Result<Vec<serde_json::Value>, AppError> {
    let mut attempt = 0;
    loop {
        let result = tokio::time::timeout(
            STORE_TIMEOUT,
            labdesk_core::experiments::list_experiments(pool),
        )
        .await;

        let err = match result {
            Ok(Ok(docs)) => return Ok(docs),
            Ok(Err(e)) => AppError::Storage(e.to_string()),
            Err(_) => AppError::Storage(format!(
                "experiment store query timed out after {STORE_TIMEOUT:?}"
            )),
        };

        if attempt >= STORE_RETRIES {
            return Err(err);
        }
        attempt += 1;
        warn!(attempt, "experiment store query failed, retrying: {err}");
        tokio::time::sleep(RETRY_PAUSE).await;
    }
}
