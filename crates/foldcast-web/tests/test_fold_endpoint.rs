//! End-to-end test of POST /api/fold against a stub folding backend.
//!
//! Run with: cargo test --package foldcast-web --test test_fold_endpoint

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use foldcast_web::router::build_router;
use foldcast_web::state::AppState;

const PDB_FIXTURE: &str = "\
HEADER    PREDICTED STRUCTURE
ATOM      1  N   MET A   1      11.104   6.134  -6.504  1.00 87.50           N
ATOM      2  CA  MET A   1      11.639   6.071  -5.147  1.00 92.30           C
TER       3      MET A   1
END";

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Stub ESM backend plus the relay server wired to it; returns the
/// relay's address.
async fn spawn_relay(backend: Router) -> SocketAddr {
    let backend_addr = spawn(backend).await;
    let state = AppState::with_endpoint(
        &format!("http://{backend_addr}/fold"),
        Duration::from_secs(5),
    )
    .unwrap();
    spawn(build_router(state)).await
}

#[tokio::test]
async fn test_fold_endpoint_returns_pdb_and_score() {
    let backend = Router::new().route("/fold", post(|| async { PDB_FIXTURE }));
    let relay = spawn_relay(backend).await;

    let response = reqwest::Client::new()
        .post(format!("http://{relay}/api/fold"))
        .json(&serde_json::json!({ "sequence": "MKTAYIAKQR" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["pdb"], PDB_FIXTURE);
    assert_eq!(body["plddt"], 89.9);
    assert_eq!(body["atom_count"], 2);
}

#[tokio::test]
async fn test_short_sequence_is_unprocessable() {
    let backend = Router::new().route("/fold", post(|| async { PDB_FIXTURE }));
    let relay = spawn_relay(backend).await;

    let response = reqwest::Client::new()
        .post(format!("http://{relay}/api/fold"))
        .json(&serde_json::json!({ "sequence": "MKT" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("too short"));
}

#[tokio::test]
async fn test_backend_failure_is_bad_gateway() {
    let backend = Router::new().route(
        "/fold",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let relay = spawn_relay(backend).await;

    let response = reqwest::Client::new()
        .post(format!("http://{relay}/api/fold"))
        .json(&serde_json::json!({ "sequence": "MKTAYIAKQR" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("HTTP 500"));
}

#[tokio::test]
async fn test_health_probe() {
    let backend = Router::new().route("/fold", post(|| async { PDB_FIXTURE }));
    let relay = spawn_relay(backend).await;

    let response = reqwest::Client::new()
        .get(format!("http://{relay}/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
