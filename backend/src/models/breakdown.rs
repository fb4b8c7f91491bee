//! Price breakdown model
//!
//! The engine's output value object: itemized line items, informational
//! discounts, and the derived totals.
//!
//! CRITICAL: All money values are i64 whole dollars

use serde::{Deserialize, Serialize};

/// Line item category
///
/// Drives rush-surcharge eligibility: only `Video` and `License` spend is
/// expedited. Website build and recurring fees are never surcharged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemCategory {
    Video,
    Microsite,
    License,
    Subscription,
    Addon,
}

impl LineItemCategory {
    /// Whether rush pricing applies to items in this category
    pub fn is_rush_eligible(&self) -> bool {
        matches!(self, LineItemCategory::Video | LineItemCategory::License)
    }
}

/// One priced feature
///
/// `amount` is the pre-rush, pre-discount contribution of the feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingLineItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: i64,
    pub category: LineItemCategory,
}

impl PricingLineItem {
    pub fn new(label: impl Into<String>, amount: i64, category: LineItemCategory) -> Self {
        Self {
            label: label.into(),
            description: None,
            amount,
            category,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Savings shown against a list price
///
/// Display-only: the discounted line item already carries the reduced
/// amount, so discounts are never subtracted from the subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: i64,
}

/// Complete quote for one set of selections
///
/// Built fresh on every engine call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    /// Priced features in display order
    pub line_items: Vec<PricingLineItem>,

    /// Informational savings (not subtracted from any total)
    pub discount_items: Vec<DiscountItem>,

    /// Sum of all line item amounts
    pub subtotal: i64,

    /// Rush surcharge on video and license spend
    pub rush_surcharge: i64,

    /// Monthly subscription rate × months
    pub subscription_total: i64,

    /// subtotal + rush surcharge
    pub total_due_now: i64,

    /// total due now + subscription total
    pub total_all_in: i64,

    pub monthly_subscription_cost: i64,

    pub estimated_timeline: String,

    pub payment_terms: String,
}

fn saturating_total(amounts: impl Iterator<Item = i64>) -> i64 {
    amounts.fold(0, i64::saturating_add)
}

fn checked_total(mut amounts: impl Iterator<Item = i64>) -> Option<i64> {
    amounts.try_fold(0i64, i64::checked_add)
}

impl PricingBreakdown {
    /// Sum of line items whose category is rush eligible
    ///
    /// Saturates at `i64::MAX`.
    pub fn rush_eligible_total(&self) -> i64 {
        saturating_total(
            self.line_items
                .iter()
                .filter(|item| item.category.is_rush_eligible())
                .map(|item| item.amount),
        )
    }

    /// Sum of line items in one category, saturating at `i64::MAX`
    pub fn category_total(&self, category: LineItemCategory) -> i64 {
        saturating_total(
            self.line_items
                .iter()
                .filter(|item| item.category == category)
                .map(|item| item.amount),
        )
    }

    /// Total savings displayed to the customer, saturating at `i64::MAX`
    pub fn discount_total(&self) -> i64 {
        saturating_total(self.discount_items.iter().map(|d| d.amount))
    }

    /// Check the derived totals against the line items
    ///
    /// Safe on deserialized input: overflowing sums are reported as
    /// inconsistencies. Returns a description of the first one found.
    pub fn check_totals(&self) -> Result<(), String> {
        if let Some(item) = self.line_items.iter().find(|item| item.amount < 0) {
            return Err(format!("line item '{}' has negative amount", item.label));
        }
        if let Some(discount) = self.discount_items.iter().find(|d| d.amount < 0) {
            return Err(format!("discount '{}' has negative amount", discount.label));
        }

        let line_total = checked_total(self.line_items.iter().map(|item| item.amount))
            .ok_or_else(|| "line item sum overflows".to_string())?;
        if line_total != self.subtotal {
            return Err(format!(
                "subtotal {} does not match line item sum {}",
                self.subtotal, line_total
            ));
        }
        if self.subtotal.checked_add(self.rush_surcharge) != Some(self.total_due_now) {
            return Err(format!(
                "total due now {} != subtotal {} + rush {}",
                self.total_due_now, self.subtotal, self.rush_surcharge
            ));
        }
        if self.total_due_now.checked_add(self.subscription_total) != Some(self.total_all_in) {
            return Err(format!(
                "total all-in {} != total due now {} + subscription {}",
                self.total_all_in, self.total_due_now, self.subscription_total
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(items: Vec<PricingLineItem>, rush: i64, subscription: i64) -> PricingBreakdown {
        let subtotal = items.iter().map(|i| i.amount).sum();
        PricingBreakdown {
            line_items: items,
            discount_items: vec![],
            subtotal,
            rush_surcharge: rush,
            subscription_total: subscription,
            total_due_now: subtotal + rush,
            total_all_in: subtotal + rush + subscription,
            monthly_subscription_cost: 0,
            estimated_timeline: String::new(),
            payment_terms: String::new(),
        }
    }

    #[test]
    fn test_rush_eligibility_by_category() {
        assert!(LineItemCategory::Video.is_rush_eligible());
        assert!(LineItemCategory::License.is_rush_eligible());
        assert!(!LineItemCategory::Microsite.is_rush_eligible());
        assert!(!LineItemCategory::Subscription.is_rush_eligible());
        assert!(!LineItemCategory::Addon.is_rush_eligible());
    }

    #[test]
    fn test_rush_eligible_total_ignores_label_wording() {
        let b = breakdown(
            vec![
                PricingLineItem::new("Microsite that mentions Video", 4999, LineItemCategory::Microsite),
                PricingLineItem::new("Anything", 1000, LineItemCategory::Video),
                PricingLineItem::new("License", 2500, LineItemCategory::License),
            ],
            0,
            0,
        );
        assert_eq!(b.rush_eligible_total(), 3500);
        assert_eq!(b.category_total(LineItemCategory::Microsite), 4999);
    }

    #[test]
    fn test_check_totals_detects_mismatch() {
        let mut b = breakdown(
            vec![PricingLineItem::new("Video", 1598, LineItemCategory::Video)],
            799,
            0,
        );
        assert!(b.check_totals().is_ok());

        b.total_due_now += 1;
        assert!(b.check_totals().is_err());
    }

    #[test]
    fn test_check_totals_reports_overflow() {
        let mut b = breakdown(
            vec![
                PricingLineItem::new("Video", 1598, LineItemCategory::Video),
                PricingLineItem::new("License", 2500, LineItemCategory::License),
            ],
            0,
            0,
        );
        b.line_items[0].amount = i64::MAX;

        assert_eq!(b.check_totals(), Err("line item sum overflows".to_string()));
        assert_eq!(b.rush_eligible_total(), i64::MAX);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&LineItemCategory::Microsite).unwrap();
        assert_eq!(json, "\"microsite\"");
    }

    #[test]
    fn test_line_item_omits_missing_description() {
        let item = PricingLineItem::new("Teaser", 650, LineItemCategory::Video);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["amount"], 650);
    }
}
