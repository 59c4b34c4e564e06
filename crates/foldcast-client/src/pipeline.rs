//! Orchestrator for the fold pipeline: validate → relay → parse → aggregate.

use foldcast_common::{validate, FoldError};
use foldcast_structure::{mean_plddt, parse};
use serde::Serialize;
use tracing::info;

use crate::esmfold::{EsmFoldClient, FoldBackend};

/// Outcome of one pipeline invocation: the raw PDB artifact verbatim,
/// plus the aggregate confidence computed from it.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub pdb: String,
    pub plddt: f64,
    pub atom_count: usize,
}

/// Strict four-stage pipeline over a folding backend.
///
/// Stateless between invocations; concurrent calls share nothing but
/// the backend's connection pool, so no coordination is needed.
pub struct FoldPipeline<B = EsmFoldClient> {
    backend: B,
}

impl FoldPipeline<EsmFoldClient> {
    /// Pipeline against the public ESM Atlas endpoint.
    pub fn new() -> Result<Self, FoldError> {
        Ok(Self {
            backend: EsmFoldClient::new()?,
        })
    }
}

impl<B: FoldBackend> FoldPipeline<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Predict a structure for `sequence` and score it.
    ///
    /// Validation and relay failures are terminal and returned
    /// verbatim; per-line parse anomalies are recovered inside the
    /// parser and never abort the invocation.
    pub async fn predict(&self, sequence: &str) -> Result<Prediction, FoldError> {
        let sequence = validate(sequence)?;
        let doc = self.backend.fold(&sequence).await?;
        let records = parse(&doc);
        let plddt = mean_plddt(&records);
        info!(atom_count = records.len(), plddt, "fold pipeline complete");
        Ok(Prediction {
            pdb: doc.into_inner(),
            plddt,
            atom_count: records.len(),
        })
    }
}
