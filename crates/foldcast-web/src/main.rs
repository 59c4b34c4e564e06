//! Foldcast fold relay server.
//!
//! Run with: cargo run -p foldcast-web

use std::net::SocketAddr;
use std::time::Duration;

use foldcast_client::esmfold::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let endpoint =
        std::env::var("FOLDCAST_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let timeout = std::env::var("FOLDCAST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    let state = foldcast_web::state::AppState::with_endpoint(&endpoint, timeout)?;
    let app = foldcast_web::router::build_router(state);

    let bind = std::env::var("FOLDCAST_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    let addr: SocketAddr = bind.parse()?;
    info!("Fold relay listening on http://{}", addr);
    info!("Prediction backend: {}", endpoint);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
