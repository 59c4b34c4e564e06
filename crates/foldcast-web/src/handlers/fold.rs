//! The one inbound operation: predict a structure from a sequence.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use foldcast_common::{FoldError, RelayError};

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct FoldParams {
    pub sequence: String,
}

/// POST /api/fold — run the full pipeline for one sequence.
///
/// On success the raw PDB artifact is returned verbatim alongside its
/// aggregate confidence; on failure the error kind's message is
/// returned so the client can display it and let the user resubmit.
pub async fn api_fold(
    State(state): State<SharedState>,
    Json(params): Json<FoldParams>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.pipeline.predict(&params.sequence).await {
        Ok(prediction) => Ok(Json(json!({
            "pdb": prediction.pdb,
            "plddt": prediction.plddt,
            "atom_count": prediction.atom_count,
        }))),
        Err(err) => {
            error!("fold pipeline failed: {err}");
            Err((error_status(&err), Json(json!({ "error": err.to_string() }))))
        }
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn error_status(err: &FoldError) -> StatusCode {
    match err {
        FoldError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FoldError::Relay(RelayError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
        FoldError::Relay(_) => StatusCode::BAD_GATEWAY,
    }
}
