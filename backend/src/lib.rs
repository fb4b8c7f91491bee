//! Benefits Pricing Core - Rust Engine
//!
//! Deterministic quote engine for benefits-communication video packages.
//!
//! # Architecture
//!
//! - **core**: Integer money helpers and display formatting
//! - **models**: Domain types (selections, line items, breakdown)
//! - **pricing**: Price table, preset resolution, engine, timeline
//! - **roi**: Secondary ROI metrics derived from a quote
//! - **proposal**: Placeholder map and template filling for proposals
//! - **quote**: Captured quote snapshots and their verification
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole dollars)
//! 2. Same selections + same config always yield the same breakdown
//! 3. Every price comes from one `PricingConfig`
//! 4. FFI boundary is minimal and JSON-only

// Module declarations
pub mod core;
pub mod models;
pub mod pricing;
pub mod proposal;
pub mod quote;
pub mod roi;

// Re-exports for convenience
pub use crate::core::{format_currency, format_number, format_percent};
pub use models::{
    breakdown::{DiscountItem, LineItemCategory, PricingBreakdown, PricingLineItem},
    selections::{
        Preset, PricingSelections, SubscriptionPlan, UnknownOptionError, VideoType, WebsiteType,
    },
};
pub use pricing::{
    compute_pricing, estimate_timeline, resolve_preset, PriceTable, PricingConfig, PricingEngine,
    PricingError, TimelineWeeks,
};
pub use proposal::{fill_placeholders, placeholder_map, ProposalDetails};
pub use quote::{validate_snapshot, QuoteSnapshot, SnapshotError};
pub use roi::{compute_roi, compute_roi_with, RoiBenchmarks, RoiError, RoiMetrics};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn benefits_pricing_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::functions::compute_pricing_json, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::compute_roi_json, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::fill_proposal, m)?)?;
    Ok(())
}
