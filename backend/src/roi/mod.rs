//! ROI Calculator
//!
//! Derives secondary business metrics from a priced quote and the buyer's
//! employee count. All industry constants live in [`RoiBenchmarks`].
//!
//! ```text
//! cost per employee  = total due now / employees
//! HR hours saved/mo  = employees × hours saved per employee
//! annual savings     = HR hours saved × 12 × HR hourly rate
//! break-even months  = ceil(total due now / (annual savings / 12))
//! ```

use crate::models::PricingBreakdown;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while deriving ROI metrics
#[derive(Debug, Error, PartialEq)]
pub enum RoiError {
    #[error("Employee count must be positive, got {0}")]
    InvalidEmployeeCount(i64),

    #[error("Invalid ROI benchmark {field}: {value}")]
    InvalidBenchmark { field: &'static str, value: f64 },

    #[error("ROI computation produced a non-finite {0}")]
    NonFinite(&'static str),

    #[error("Failed to load ROI benchmarks: {0}")]
    Load(String),
}

/// Industry benchmark table for benefits-video ROI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoiBenchmarks {
    /// Percent increase in employee engagement
    pub engagement_increase_percent: u32,
    /// Percent increase in benefits enrollment
    pub enrollment_increase_percent: u32,
    /// HR hours saved per employee per month
    pub hr_hours_saved_per_employee: f64,
    /// Loaded HR cost per hour (whole dollars)
    pub hr_hourly_rate: f64,
}

impl Default for RoiBenchmarks {
    fn default() -> Self {
        Self {
            engagement_increase_percent: 65,
            enrollment_increase_percent: 40,
            hr_hours_saved_per_employee: 0.5,
            hr_hourly_rate: 35.0,
        }
    }
}

impl RoiBenchmarks {
    pub fn validate(&self) -> Result<(), RoiError> {
        for (field, value) in [
            ("hr_hours_saved_per_employee", self.hr_hours_saved_per_employee),
            ("hr_hourly_rate", self.hr_hourly_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RoiError::InvalidBenchmark { field, value });
            }
        }
        Ok(())
    }

    pub fn from_json_str(contents: &str) -> Result<Self, RoiError> {
        let benchmarks: RoiBenchmarks =
            serde_json::from_str(contents).map_err(|e| RoiError::Load(e.to_string()))?;
        benchmarks.validate()?;
        Ok(benchmarks)
    }

    pub fn load(path: &Path) -> Result<Self, RoiError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RoiError::Load(format!("{}: {}", path.display(), e)))?;
        let benchmarks = Self::from_json_str(&contents)?;
        log::debug!("Loaded ROI benchmarks from {}", path.display());
        Ok(benchmarks)
    }
}

/// Derived ROI metrics for one quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiMetrics {
    pub employee_engagement_increase: u32,
    pub enrollment_rate_increase: u32,
    /// HR hours saved per month across the organization
    pub hr_time_saved_hours: f64,
    pub cost_per_employee: f64,
    /// Whole dollars, rounded
    pub annual_savings: i64,
    /// 0 when nothing is due now
    pub break_even_months: i64,
    /// Rounded `annual savings / total due now × 100`; absent when nothing is due
    pub annual_roi_percent: Option<i64>,
}

fn finite(value: f64, what: &'static str) -> Result<f64, RoiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RoiError::NonFinite(what))
    }
}

/// Compute ROI metrics against the default benchmarks
pub fn compute_roi(breakdown: &PricingBreakdown, employee_count: i64) -> Result<RoiMetrics, RoiError> {
    compute_roi_with(breakdown, employee_count, &RoiBenchmarks::default())
}

/// Compute ROI metrics against an explicit benchmark table
///
/// # Errors
///
/// - `InvalidEmployeeCount` if `employee_count <= 0`
/// - `InvalidBenchmark` if a rate is zero, negative or not finite
/// - `NonFinite` if any intermediate value overflows to infinity
///
/// # Example
///
/// ```rust
/// use benefits_pricing_core_rs::roi::compute_roi;
/// use benefits_pricing_core_rs::{compute_pricing, PricingSelections};
///
/// let quote = compute_pricing(&PricingSelections::default()).unwrap(); // $1,598
/// let roi = compute_roi(&quote, 500).unwrap();
///
/// assert_eq!(roi.hr_time_saved_hours, 250.0);
/// assert_eq!(roi.annual_savings, 105_000);
/// assert_eq!(roi.break_even_months, 1);
/// assert!(compute_roi(&quote, 0).is_err());
/// ```
pub fn compute_roi_with(
    breakdown: &PricingBreakdown,
    employee_count: i64,
    benchmarks: &RoiBenchmarks,
) -> Result<RoiMetrics, RoiError> {
    if employee_count <= 0 {
        return Err(RoiError::InvalidEmployeeCount(employee_count));
    }
    benchmarks.validate()?;

    let employees = employee_count as f64;
    let due_now = breakdown.total_due_now as f64;

    let cost_per_employee = finite(due_now / employees, "cost per employee")?;
    let hr_time_saved_hours = finite(
        employees * benchmarks.hr_hours_saved_per_employee,
        "HR time saved",
    )?;
    let annual_savings = finite(
        hr_time_saved_hours * 12.0 * benchmarks.hr_hourly_rate,
        "annual savings",
    )?;
    let monthly_savings = annual_savings / 12.0;

    let break_even_months = if breakdown.total_due_now <= 0 {
        0
    } else {
        finite((due_now / monthly_savings).ceil(), "break-even months")? as i64
    };

    let annual_roi_percent = if breakdown.total_due_now <= 0 {
        None
    } else {
        Some(finite((annual_savings / due_now * 100.0).round(), "annual ROI")? as i64)
    };

    Ok(RoiMetrics {
        employee_engagement_increase: benchmarks.engagement_increase_percent,
        enrollment_rate_increase: benchmarks.enrollment_increase_percent,
        hr_time_saved_hours,
        cost_per_employee,
        annual_savings: annual_savings.round() as i64,
        break_even_months,
        annual_roi_percent,
    })
}
