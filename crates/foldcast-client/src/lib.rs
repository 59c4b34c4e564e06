//! foldcast-client — outbound relay to the folding backend and the
//! pipeline orchestrator built on top of it.

pub mod esmfold;
pub mod pipeline;

pub use esmfold::{EsmFoldClient, FoldBackend};
pub use pipeline::{FoldPipeline, Prediction};
