//! # labdesk_api
//!
//! HTTP API library for Labdesk.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{diagrams, experiments, lab_record, meta, ocr, simulation, viva};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool for the experiment store.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `labdesk_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    labdesk_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(meta::index_handler))
        .route("/api/health", get(meta::health_handler))
        .route("/api/experiments", get(experiments::list_experiments_handler))
        .route("/api/ocr/analyze", post(ocr::analyze_handler))
        .route("/api/diagrams/generate", post(diagrams::generate_handler))
        .route("/api/simulation/run", post(simulation::run_handler))
        .route("/api/viva/questions", post(viva::questions_handler))
        .route("/api/lab-record/verify", post(lab_record::verify_handler))
        .layer(cors)
        .with_state(state)
}
