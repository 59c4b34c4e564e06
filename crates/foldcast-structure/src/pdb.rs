//! Fixed-column parsing of PDB ATOM records.

use std::ops::Range;

use foldcast_common::PdbDocument;
use tracing::warn;

/// Byte range of the temperature-factor field (columns 61–66,
/// 1-indexed). Prediction backends repurpose it to carry per-atom
/// plDDT values.
const BFACTOR_FIELD: Range<usize> = 60..66;

/// One retained ATOM line, reduced to the field this pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomRecord {
    /// Confidence (plDDT) from the B-factor column, 0–100.
    pub confidence: f64,
}

/// Slice the B-factor field out of a single PDB line.
///
/// Returns `None` when the line is too short to contain the field.
fn bfactor_field(line: &str) -> Option<&str> {
    line.get(BFACTOR_FIELD).map(str::trim)
}

/// Parse a PDB document into its ATOM records.
///
/// Never fails: lines that do not begin with `ATOM` (headers,
/// `HETATM`, `TER`, remarks) are skipped, and ATOM lines whose
/// B-factor field is missing or not a finite number are dropped with
/// a warning. Record order follows input order. The document itself
/// is only borrowed and never altered.
pub fn parse(doc: &PdbDocument) -> Vec<AtomRecord> {
    let mut records = Vec::new();
    for line in doc.as_str().lines() {
        if !line.starts_with("ATOM") {
            continue;
        }
        match bfactor_field(line).and_then(|field| field.parse::<f64>().ok()) {
            Some(confidence) if confidence.is_finite() => {
                records.push(AtomRecord { confidence });
            }
            _ => warn!(line, "dropping ATOM record with unparseable B-factor field"),
        }
    }
    records
}
