//! foldcast-web — thin HTTP relay in front of the fold pipeline.

pub mod handlers;
pub mod router;
pub mod state;
