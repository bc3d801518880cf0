//! Integration test — start ephemeral PG, build router, exercise the
//! experiment catalog end to end.
//!
//! Skips (with a note) when PostgreSQL is not installed on the host.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use labdesk_api::{AppState, config::ApiConfig};
use labdesk_core::db::{LocalDbError, LocalDbManager};
use tower::ServiceExt;

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("parse JSON")
}

#[tokio::test]
async fn catalog_round_trip_against_ephemeral_pg() {
    // Spin up an ephemeral PostgreSQL instance.
    let mut db = match LocalDbManager::ephemeral().await {
        Ok(db) => db,
        Err(LocalDbError::PgConfigNotFound) => {
            eprintln!("skipping: PostgreSQL not installed");
            return;
        }
        Err(e) => panic!("ephemeral database: {e}"),
    };
    db.setup().await.expect("db setup");
    db.start().await.expect("db start");

    let pool = sqlx::PgPool::connect(&db.connection_url())
        .await
        .expect("connect to ephemeral PG");

    labdesk_api::migrate(&pool).await.expect("migrations");

    let state = AppState {
        pool: pool.clone(),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            pg_connection_url: db.connection_url(),
        },
    };

    let app = labdesk_api::router(state);

    let list = || {
        Request::builder()
            .uri("/api/experiments")
            .body(Body::empty())
            .unwrap()
    };

    // Empty store: empty collection, count 0.
    let resp = app.clone().oneshot(list()).await.expect("request");
    assert_eq!(StatusCode::OK, resp.status());
    let json = body_json(resp).await;
    assert_eq!(json["experiments"], serde_json::json!([]));
    assert_eq!(json["count"], 0);

    // Seed two documents out of band.
    let rc = serde_json::json!({"name": "RC Circuit"});
    let ohm = serde_json::json!({"name": "Ohm's Law"});
    labdesk_core::experiments::insert_experiment(&pool, &rc)
        .await
        .expect("insert");
    labdesk_core::experiments::insert_experiment(&pool, &ohm)
        .await
        .expect("insert");

    // Both come back, in insertion order, with no internal id attached.
    let resp = app.clone().oneshot(list()).await.expect("request");
    assert_eq!(StatusCode::OK, resp.status());
    let json = body_json(resp).await;
    assert_eq!(json["experiments"], serde_json::json!([rc, ohm]));
    assert_eq!(json["count"], 2);

    let experiments = json["experiments"].as_array().expect("array");
    assert_eq!(experiments.len(), json["count"].as_u64().unwrap() as usize);
    for doc in experiments {
        let obj = doc.as_object().expect("document object");
        assert!(!obj.contains_key("id"), "internal id leaked: {doc}");
        assert!(!obj.contains_key("_id"), "internal id leaked: {doc}");
    }

    // Listing is idempotent: a second call sees the same state.
    let resp = app.clone().oneshot(list()).await.expect("request");
    let json = body_json(resp).await;
    assert_eq!(json["count"], 2);

    // Health stays static while the store is up, too.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("request");
    assert_eq!(StatusCode::OK, resp.status());
    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");

    pool.close().await;
    db.stop().await.expect("db stop");
}
