//! foldcast-common — Shared types and errors used across all Foldcast crates.

pub mod document;
pub mod error;
pub mod sequence;

// Re-export commonly used types
pub use document::PdbDocument;
pub use error::{FoldError, RelayError, Result, ValidationError};
pub use sequence::{validate, ValidSequence, MIN_SEQUENCE_LEN};
