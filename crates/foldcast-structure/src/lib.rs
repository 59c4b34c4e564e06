//! foldcast-structure — PDB ATOM record parsing and plDDT aggregation.
//!
//! Pure text-in, numbers-out: no I/O happens in this crate.

pub mod pdb;
pub mod plddt;

pub use pdb::{parse, AtomRecord};
pub use plddt::mean_plddt;
