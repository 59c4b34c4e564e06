use thiserror::Error;

/// Why a candidate sequence was rejected before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("sequence too short: {len} characters (minimum is {min})")]
    TooShort { len: usize, min: usize },
}

/// Classified failures of the outbound call to the folding backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("failed to initialize HTTP client: {0}")]
    Client(String),

    #[error("folding backend unreachable: {0}")]
    Unreachable(String),

    #[error("folding request timed out after {0} ms")]
    Timeout(u64),

    #[error("folding backend rejected the request: HTTP {0}")]
    BackendRejected(u16),

    #[error("folding backend returned an empty response body")]
    EmptyResponse,
}

/// Top-level pipeline error. Validation and relay failures are both
/// terminal for an invocation and are surfaced to the caller verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FoldError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

pub type Result<T> = std::result::Result<T, FoldError>;
