//! Proposal placeholder filling
//!
//! Proposal templates carry `[[TOKEN]]` placeholders. This module builds the
//! token → value map from a priced quote and substitutes it into template
//! text (typically the `word/document.xml` part of a proposal package).
//!
//! Line items fill up to [`MAX_LINE_ITEM_SLOTS`] numbered slots
//! (`[[LI1_LABEL]]`, `[[LI1_AMOUNT]]`, ...). Unused slots are blanked.

use crate::core::money::format_currency;
use crate::models::PricingBreakdown;
use serde::{Deserialize, Serialize};

/// Number of line item rows a proposal template provides
pub const MAX_LINE_ITEM_SLOTS: usize = 10;

/// Client-facing details that are not derived from pricing
///
/// Missing values leave their own token in place so the document can still
/// be completed by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDetails {
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub date: Option<String>,
    pub valid_through: Option<String>,
    pub package: Option<String>,
    pub subscription: Option<String>,
}

/// Ordered placeholder map
pub type PlaceholderMap = Vec<(String, String)>;

fn detail(token: &str, value: &Option<String>) -> (String, String) {
    let value = value.clone().unwrap_or_else(|| token.to_string());
    (token.to_string(), value)
}

/// Build the placeholder map for a quote
///
/// # Example
/// ```
/// use benefits_pricing_core_rs::proposal::{placeholder_map, ProposalDetails};
/// use benefits_pricing_core_rs::{compute_pricing, PricingSelections};
///
/// let quote = compute_pricing(&PricingSelections::default()).unwrap();
/// let map = placeholder_map(&quote, &ProposalDetails::default());
///
/// let subtotal = map.iter().find(|(k, _)| k == "[[SUBTOTAL]]").unwrap();
/// assert_eq!(subtotal.1, "$1,598");
/// ```
pub fn placeholder_map(breakdown: &PricingBreakdown, details: &ProposalDetails) -> PlaceholderMap {
    let mut map = vec![
        detail("[[CLIENT_NAME]]", &details.client_name),
        detail("[[PROJECT_NAME]]", &details.project_name),
        detail("[[DATE]]", &details.date),
        detail("[[VALID_THROUGH]]", &details.valid_through),
        detail("[[PACKAGE]]", &details.package),
        detail("[[SUBSCRIPTION]]", &details.subscription),
        ("[[SUBTOTAL]]".to_string(), format_currency(breakdown.subtotal)),
        ("[[RUSH]]".to_string(), format_currency(breakdown.rush_surcharge)),
        (
            "[[SUBSCRIPTION_TOTAL]]".to_string(),
            format_currency(breakdown.subscription_total),
        ),
        (
            "[[TOTAL_DUE_NOW]]".to_string(),
            format_currency(breakdown.total_due_now),
        ),
        (
            "[[TOTAL_ALL_IN]]".to_string(),
            format_currency(breakdown.total_all_in),
        ),
        ("[[TIMELINE]]".to_string(), breakdown.estimated_timeline.clone()),
        ("[[PAYMENT_TERMS]]".to_string(), breakdown.payment_terms.clone()),
    ];

    if breakdown.line_items.len() > MAX_LINE_ITEM_SLOTS {
        log::warn!(
            "Quote has {} line items; proposal template shows only the first {}",
            breakdown.line_items.len(),
            MAX_LINE_ITEM_SLOTS
        );
    }

    for slot in 1..=MAX_LINE_ITEM_SLOTS {
        let (label, amount) = match breakdown.line_items.get(slot - 1) {
            Some(item) => (item.label.clone(), format_currency(item.amount)),
            None => (String::new(), String::new()),
        };
        map.push((format!("[[LI{}_LABEL]]", slot), label));
        map.push((format!("[[LI{}_AMOUNT]]", slot), amount));
    }

    map
}

/// Escape a value for inclusion in XML character data
pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Substitute every placeholder in `template`
///
/// Tokens are replaced in map order. Every token is closed by `]]`, so
/// `[[LI1_LABEL]]` never matches inside `[[LI10_LABEL]]`.
pub fn fill_placeholders(template: &str, map: &PlaceholderMap, xml_escape: bool) -> String {
    map.iter().fold(template.to_string(), |text, (token, value)| {
        if xml_escape {
            text.replace(token.as_str(), &escape_xml(value))
        } else {
            text.replace(token.as_str(), value)
        }
    })
}
