//! ESM Atlas folding relay client.
//!
//! Endpoint: https://api.esmatlas.com/foldSequence/v1/pdb/

use std::time::Duration;

use async_trait::async_trait;
use foldcast_common::{PdbDocument, RelayError, ValidSequence};
use reqwest::{header, Client, ClientBuilder};
use tracing::{debug, instrument};

/// The single prediction endpoint of the remote folding service.
pub const DEFAULT_ENDPOINT: &str = "https://api.esmatlas.com/foldSequence/v1/pdb/";

/// Whole-request deadline. Folding a longer sequence takes the
/// backend tens of seconds, so this is deliberately generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// A backend that folds a validated sequence into raw PDB text.
///
/// The seam lets the pipeline and the web layer run against a
/// scripted backend in tests.
#[async_trait]
pub trait FoldBackend: Send + Sync {
    async fn fold(&self, sequence: &ValidSequence) -> Result<PdbDocument, RelayError>;
}

/// HTTP client for the ESM Atlas `foldSequence` endpoint.
///
/// One outbound POST per [`FoldBackend::fold`] call: no retries, no
/// caching. The sequence travels as the entire request body, sent as
/// `application/x-www-form-urlencoded` (the backend expects the raw
/// string, not JSON).
#[derive(Debug, Clone)]
pub struct EsmFoldClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl EsmFoldClient {
    pub fn new() -> Result<Self, RelayError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Build a client against a non-default endpoint, e.g. a local
    /// stub server in tests or a self-hosted folding service.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Client(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FoldBackend for EsmFoldClient {
    #[instrument(skip(self, sequence), fields(sequence_len = sequence.len()))]
    async fn fold(&self, sequence: &ValidSequence) -> Result<PdbDocument, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(sequence.as_str().to_string())
            .send()
            .await
            .map_err(|e| classify_transport(&e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::BackendRejected(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport(&e, self.timeout))?;
        if body.trim().is_empty() {
            return Err(RelayError::EmptyResponse);
        }

        debug!(bytes = body.len(), "received PDB document");
        Ok(PdbDocument::new(body))
    }
}

/// Map a reqwest transport error onto the relay's failure taxonomy.
fn classify_transport(err: &reqwest::Error, timeout: Duration) -> RelayError {
    if err.is_timeout() {
        RelayError::Timeout(timeout.as_millis() as u64)
    } else {
        RelayError::Unreachable(err.to_string())
    }
}
