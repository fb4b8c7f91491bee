//! Proposal Placeholder Tests
//!
//! Token map contents, line item slots and template substitution.

use benefits_pricing_core_rs::proposal::MAX_LINE_ITEM_SLOTS;
use benefits_pricing_core_rs::{
    compute_pricing, fill_placeholders, placeholder_map, LineItemCategory, Preset,
    PricingBreakdown, PricingLineItem, PricingSelections, ProposalDetails,
};

fn value<'a>(map: &'a [(String, String)], token: &str) -> &'a str {
    map.iter()
        .find(|(k, _)| k == token)
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("missing token {}", token))
}

fn details() -> ProposalDetails {
    ProposalDetails {
        client_name: Some("Acme Manufacturing".to_string()),
        project_name: Some("2027 Open Enrollment".to_string()),
        date: Some("October 18, 2026".to_string()),
        valid_through: Some("November 17, 2026".to_string()),
        package: Some("BETTER".to_string()),
        subscription: None,
    }
}

#[test]
fn test_totals_tokens() {
    let quote = compute_pricing(&PricingSelections::default().with_rush()).unwrap();
    let map = placeholder_map(&quote, &details());

    assert_eq!(value(&map, "[[SUBTOTAL]]"), "$1,598");
    assert_eq!(value(&map, "[[RUSH]]"), "$799");
    assert_eq!(value(&map, "[[TOTAL_DUE_NOW]]"), "$2,397");
    assert_eq!(value(&map, "[[SUBSCRIPTION_TOTAL]]"), "$0");
    assert_eq!(value(&map, "[[TOTAL_ALL_IN]]"), "$2,397");
    assert_eq!(value(&map, "[[TIMELINE]]"), "3 weeks (Rush delivery)");
    assert_eq!(value(&map, "[[PAYMENT_TERMS]]"), quote.payment_terms);
}

#[test]
fn test_detail_tokens() {
    let quote = compute_pricing(&PricingSelections::default()).unwrap();
    let map = placeholder_map(&quote, &details());

    assert_eq!(value(&map, "[[CLIENT_NAME]]"), "Acme Manufacturing");
    assert_eq!(value(&map, "[[PACKAGE]]"), "BETTER");
    // Missing details keep their token for manual completion
    assert_eq!(value(&map, "[[SUBSCRIPTION]]"), "[[SUBSCRIPTION]]");
}

#[test]
fn test_line_item_slots() {
    let quote = compute_pricing(&PricingSelections::default().with_preset(Preset::Better)).unwrap();
    let map = placeholder_map(&quote, &ProposalDetails::default());

    assert_eq!(value(&map, "[[LI1_LABEL]]"), "Standard Video (2 min)");
    assert_eq!(value(&map, "[[LI1_AMOUNT]]"), "$1,598");
    assert_eq!(value(&map, "[[LI2_LABEL]]"), "Benefits Break Microsite (bundled)");
    assert_eq!(value(&map, "[[LI2_AMOUNT]]"), "$3,999");
    assert_eq!(value(&map, "[[LI3_LABEL]]"), "");
    assert_eq!(value(&map, "[[LI10_AMOUNT]]"), "");
    assert_eq!(map.len(), 13 + 2 * MAX_LINE_ITEM_SLOTS);
}

#[test]
fn test_extra_line_items_are_dropped() {
    let line_items: Vec<_> = (1..=12)
        .map(|n| PricingLineItem::new(format!("Item {}", n), n * 100, LineItemCategory::Addon))
        .collect();
    let subtotal = line_items.iter().map(|item| item.amount).sum();
    let quote = PricingBreakdown {
        line_items,
        discount_items: vec![],
        subtotal,
        rush_surcharge: 0,
        subscription_total: 0,
        total_due_now: subtotal,
        total_all_in: subtotal,
        monthly_subscription_cost: 0,
        estimated_timeline: "1-2 weeks".to_string(),
        payment_terms: String::new(),
    };
    let map = placeholder_map(&quote, &ProposalDetails::default());

    assert_eq!(value(&map, "[[LI10_LABEL]]"), "Item 10");
    assert!(!map.iter().any(|(k, _)| k == "[[LI11_LABEL]]"));
}

#[test]
fn test_fill_document_xml() {
    let quote = compute_pricing(&PricingSelections::default().with_preset(Preset::Better)).unwrap();
    let mut details = details();
    details.client_name = Some("Smith & Jones <LLC>".to_string());
    let map = placeholder_map(&quote, &details);

    let template = "<w:t>[[CLIENT_NAME]]</w:t><w:t>[[LI1_LABEL]]|[[LI10_LABEL]]</w:t><w:t>[[TOTAL_DUE_NOW]]</w:t>";
    let filled = fill_placeholders(template, &map, true);

    assert_eq!(
        filled,
        "<w:t>Smith &amp; Jones &lt;LLC&gt;</w:t><w:t>Standard Video (2 min)|</w:t><w:t>$5,597</w:t>"
    );
}

#[test]
fn test_fill_plain_text_leaves_unknown_tokens() {
    let quote = compute_pricing(&PricingSelections::default()).unwrap();
    let map = placeholder_map(&quote, &details());

    let filled = fill_placeholders("Dear [[CLIENT_NAME]], see [[APPENDIX]].", &map, false);
    assert_eq!(filled, "Dear Acme Manufacturing, see [[APPENDIX]].");
}
