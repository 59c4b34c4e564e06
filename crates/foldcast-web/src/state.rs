//! Shared application state for the fold relay server.

use std::sync::Arc;
use std::time::Duration;

use foldcast_client::esmfold::EsmFoldClient;
use foldcast_client::FoldPipeline;
use foldcast_common::FoldError;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub pipeline: FoldPipeline<EsmFoldClient>,
}

impl AppState {
    /// State backed by the public ESM Atlas endpoint.
    pub fn new() -> Result<Self, FoldError> {
        Ok(Self {
            pipeline: FoldPipeline::new()?,
        })
    }

    /// State against a custom endpoint, e.g. a stub backend in tests
    /// or a self-hosted folding service.
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self, FoldError> {
        let client = EsmFoldClient::with_endpoint(endpoint, timeout)?;
        Ok(Self {
            pipeline: FoldPipeline::with_backend(client),
        })
    }
}

pub type SharedState = Arc<AppState>;
