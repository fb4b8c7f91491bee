//! Delivery timeline estimation
//!
//! Features are produced in parallel, so the baseline is the longest
//! per-feature schedule. Translation work happens after the English final
//! and extends the schedule instead of overlapping it.

use crate::models::{PricingSelections, WebsiteType};
use crate::pricing::config::TimelineWeeks;

/// Estimated weeks before rush compression
///
/// Expects selections that have already been preset-resolved and clamped.
pub fn baseline_weeks(selections: &PricingSelections, table: &TimelineWeeks) -> u32 {
    let mut weeks = 0;

    if selections.video_minutes > 0 {
        weeks = weeks.max(table.video(selections.video_type));
    }
    if selections.oe_teaser_video {
        weeks = weeks.max(table.teaser);
    }
    if selections.website_type != WebsiteType::None {
        weeks = weeks.max(table.website(selections.website_type));
    }
    if selections.diy_powerpoint {
        weeks = weeks.max(table.diy);
    }

    if selections.alt_language_minutes > 0 {
        weeks = weeks.saturating_add(table.alt_language_extra);
    }
    if selections.ppt_alt_language {
        weeks = weeks.saturating_add(table.ppt_alt_language_extra);
    }

    weeks
}

/// Compress a schedule for rush delivery: `max(min, ceil(weeks × pct))`
///
/// Validated tables keep every entry within [`MAX_TIMELINE_WEEKS`]; the
/// arithmetic saturates for tables that skipped validation.
///
/// [`MAX_TIMELINE_WEEKS`]: crate::pricing::config::MAX_TIMELINE_WEEKS
pub fn rush_weeks(weeks: u32, table: &TimelineWeeks) -> u32 {
    let scaled = weeks.saturating_mul(table.rush_percent).div_ceil(100);
    scaled.max(table.rush_minimum_weeks)
}

/// Render the customer-facing timeline string
///
/// # Example
/// ```
/// use benefits_pricing_core_rs::pricing::{estimate_timeline, TimelineWeeks};
/// use benefits_pricing_core_rs::PricingSelections;
///
/// let table = TimelineWeeks::default();
/// let sel = PricingSelections::default(); // 2 min standard video
/// assert_eq!(estimate_timeline(&sel, &table), "3-4 weeks");
/// assert_eq!(estimate_timeline(&sel.with_rush(), &table), "3 weeks (Rush delivery)");
/// ```
pub fn estimate_timeline(selections: &PricingSelections, table: &TimelineWeeks) -> String {
    let weeks = baseline_weeks(selections, table);
    if selections.rush {
        format!("{} weeks (Rush delivery)", rush_weeks(weeks, table))
    } else {
        format!("{}-{} weeks", weeks, weeks.saturating_add(1))
    }
}
