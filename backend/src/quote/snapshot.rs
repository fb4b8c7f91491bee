//! Quote Snapshot - Capture and Verify Issued Quotes
//!
//! Serializes the selections, breakdown and optional ROI metrics of a quote
//! alongside a fingerprint of the price table that produced it.
//!
//! # Critical Invariants
//!
//! - **Reproducibility**: re-pricing the stored selections under the same
//!   config reproduces the stored breakdown exactly
//! - **Totals**: stored totals are consistent with the stored line items
//! - **Reconciliation**: bundled microsite + bundle discount == list price
//! - **Config Matching**: a snapshot only verifies against the config it was
//!   priced with

use crate::models::{LineItemCategory, PricingBreakdown, PricingSelections, WebsiteType};
use crate::pricing::{PricingConfig, PricingEngine, PricingError};
use crate::roi::{compute_roi, RoiError, RoiMetrics};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while capturing or verifying a quote snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("ROI error: {0}")]
    Roi(#[from] RoiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config mismatch: snapshot priced with {expected}, current config is {actual}")]
    ConfigMismatch { expected: String, actual: String },

    #[error("Snapshot validation failed: {0}")]
    Validation(String),
}

/// Complete record of an issued quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Unique quote identifier (`quote_<uuid>`)
    pub quote_id: String,

    /// Selections as submitted (before preset resolution)
    pub selections: PricingSelections,

    pub breakdown: PricingBreakdown,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiMetrics>,

    /// SHA256 of the canonical pricing config JSON
    pub price_table_hash: String,
}

impl QuoteSnapshot {
    /// Price selections and capture the result
    ///
    /// # Example
    /// ```
    /// use benefits_pricing_core_rs::quote::{validate_snapshot, QuoteSnapshot};
    /// use benefits_pricing_core_rs::{PricingEngine, PricingSelections};
    ///
    /// let engine = PricingEngine::default();
    /// let snapshot = QuoteSnapshot::capture(&engine, &PricingSelections::default(), Some(250)).unwrap();
    ///
    /// assert!(snapshot.quote_id.starts_with("quote_"));
    /// assert!(snapshot.roi.is_some());
    /// assert!(validate_snapshot(&snapshot, engine.config()).is_ok());
    /// ```
    pub fn capture(
        engine: &PricingEngine,
        selections: &PricingSelections,
        employee_count: Option<i64>,
    ) -> Result<Self, SnapshotError> {
        let breakdown = engine.compute(selections)?;
        let roi = match employee_count {
            Some(count) => Some(compute_roi(&breakdown, count)?),
            None => None,
        };

        let snapshot = Self {
            quote_id: format!("quote_{}", uuid::Uuid::new_v4().simple()),
            selections: selections.clone(),
            breakdown,
            employee_count,
            roi,
            price_table_hash: compute_config_hash(engine.config())?,
        };
        log::info!(
            "Captured quote {} (due now {})",
            snapshot.quote_id,
            snapshot.breakdown.total_due_now
        );
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Config Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a config
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on field declaration order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SnapshotError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical_value = canonicalize(serde_json::to_value(config)?);
    let json = serde_json::to_string(&canonical_value)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a stored quote against the current config
///
/// Checks, in order:
/// 1. Price table fingerprint matches
/// 2. Stored totals are internally consistent
/// 3. Bundled microsite discount reconciles to the list price
/// 4. Re-pricing the selections reproduces the stored breakdown
pub fn validate_snapshot(snapshot: &QuoteSnapshot, config: &PricingConfig) -> Result<(), SnapshotError> {
    let actual = compute_config_hash(config)?;
    if actual != snapshot.price_table_hash {
        return Err(SnapshotError::ConfigMismatch {
            expected: snapshot.price_table_hash.clone(),
            actual,
        });
    }

    snapshot
        .breakdown
        .check_totals()
        .map_err(SnapshotError::Validation)?;

    let engine = PricingEngine::new(config.clone())?;
    let resolved = crate::pricing::resolve_preset(&snapshot.selections);
    if resolved.website_type == WebsiteType::Bundled {
        let standalone = config.prices.microsite.standalone;
        let discount = snapshot.breakdown.discount_total();
        let reconciles = snapshot
            .breakdown
            .line_items
            .iter()
            .find(|item| item.category == LineItemCategory::Microsite)
            .is_some_and(|item| item.amount.checked_add(discount) == Some(standalone));
        if !reconciles {
            return Err(SnapshotError::Validation(format!(
                "bundled microsite does not reconcile: discount {} against list price {}",
                discount, standalone
            )));
        }
    }

    let recomputed = engine.compute(&snapshot.selections)?;
    if recomputed != snapshot.breakdown {
        return Err(SnapshotError::Validation(format!(
            "stored breakdown differs from re-priced quote (stored due now {}, re-priced {})",
            snapshot.breakdown.total_due_now, recomputed.total_due_now
        )));
    }

    Ok(())
}
