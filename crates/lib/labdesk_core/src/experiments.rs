//! Experiment document persistence.
//!
//! Experiments are schema-less JSON documents, one JSONB column per row.
//! The surrogate row id is internal storage detail and is never selected,
//! so callers only ever see the document itself.

use sqlx::PgPool;

/// List every experiment document in insertion order.
pub async fn list_experiments(pool: &PgPool) -> Result<Vec<serde_json::Value>, sqlx::Error> {
    sqlx::query_scalar::<_, serde_json::Value>("SELECT doc FROM experiments ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Insert an experiment document.
///
/// The HTTP service exposes no write endpoint; this exists for out-of-band
/// seeding and tests.
pub async fn insert_experiment(
    pool: &PgPool,
    doc: &serde_json::Value,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO experiments (doc) VALUES ($1)")
        .bind(doc)
        .execute(pool)
        .await?;
    Ok(())
}
