//! PyO3 functions for the pricing engine
//!
//! Every function takes and returns JSON strings using the same camelCase
//! schema as the calculator UI.
//!
//! # Example (from Python)
//!
//! ```python
//! from benefits_pricing_core_rs import compute_pricing_json
//! import json
//!
//! quote = json.loads(compute_pricing_json(json.dumps({"preset": "better"})))
//! print(quote["totalDueNow"])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::models::PricingBreakdown;
use crate::pricing::{PricingConfig, PricingEngine};
use crate::proposal::{fill_placeholders, placeholder_map, ProposalDetails};
use crate::roi::compute_roi;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

fn engine_from(config_json: Option<&str>) -> PyResult<PricingEngine> {
    let config = match config_json {
        Some(json) => PricingConfig::from_json_str(json).map_err(value_error)?,
        None => PricingConfig::default(),
    };
    PricingEngine::new(config).map_err(value_error)
}

/// Price a selections JSON object, returning the breakdown as JSON
///
/// Raises ValueError on unknown options, invalid config or overflow.
#[pyfunction]
#[pyo3(signature = (selections_json, config_json=None))]
pub fn compute_pricing_json(selections_json: &str, config_json: Option<&str>) -> PyResult<String> {
    let engine = engine_from(config_json)?;
    let breakdown = engine.compute_json(selections_json).map_err(value_error)?;
    serde_json::to_string(&breakdown).map_err(value_error)
}

/// Derive ROI metrics from a breakdown JSON object
#[pyfunction]
pub fn compute_roi_json(breakdown_json: &str, employee_count: i64) -> PyResult<String> {
    let breakdown: PricingBreakdown = serde_json::from_str(breakdown_json).map_err(value_error)?;
    let metrics = compute_roi(&breakdown, employee_count).map_err(value_error)?;
    serde_json::to_string(&metrics).map_err(value_error)
}

/// Price selections and fill a proposal template's placeholders
#[pyfunction]
#[pyo3(signature = (template, selections_json, details_json=None, xml_escape=true))]
pub fn fill_proposal(
    template: &str,
    selections_json: &str,
    details_json: Option<&str>,
    xml_escape: bool,
) -> PyResult<String> {
    let details: ProposalDetails = match details_json {
        Some(json) => serde_json::from_str(json).map_err(value_error)?,
        None => ProposalDetails::default(),
    };
    let breakdown = PricingEngine::default()
        .compute_json(selections_json)
        .map_err(value_error)?;
    let map = placeholder_map(&breakdown, &details);
    Ok(fill_placeholders(template, &map, xml_escape))
}
