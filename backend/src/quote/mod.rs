//! Quote snapshots (lead capture)
//!
//! A captured quote stores the submitted selections together with the
//! breakdown shown to the prospect, so sales can later prove what was quoted
//! and under which price list.

pub mod snapshot;

pub use snapshot::{compute_config_hash, validate_snapshot, QuoteSnapshot, SnapshotError};
