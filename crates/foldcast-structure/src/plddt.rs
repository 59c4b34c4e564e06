//! Aggregate confidence (plDDT) over parsed ATOM records.

use crate::pdb::AtomRecord;

/// Mean plDDT across `records`, rounded to 4 decimal places.
///
/// Returns 0.0 for an empty slice. Rounding is half-away-from-zero
/// (`f64::round` semantics). Order-independent, deterministic.
pub fn mean_plddt(records: &[AtomRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.confidence).sum();
    round4(sum / records.len() as f64)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
