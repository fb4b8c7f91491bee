//! Package Preset Tests
//!
//! Presets overwrite the feature fields before pricing. Rush, subscription
//! and update choices survive resolution, and the caller's value is never
//! modified.

use benefits_pricing_core_rs::{
    compute_pricing, resolve_preset, LineItemCategory, Preset, PricingSelections,
    SubscriptionPlan, VideoType, WebsiteType,
};

fn labels(sel: &PricingSelections) -> Vec<String> {
    compute_pricing(sel)
        .unwrap()
        .line_items
        .into_iter()
        .map(|item| item.label)
        .collect()
}

#[test]
fn test_good_package() {
    let sel = PricingSelections::empty()
        .with_website(WebsiteType::CustomPortal)
        .with_teaser()
        .with_preset(Preset::Good);
    let quote = compute_pricing(&sel).unwrap();

    assert_eq!(labels(&sel), vec!["Standard Video (2 min)"]);
    assert_eq!(quote.total_due_now, 1598);
}

#[test]
fn test_better_package() {
    let sel = PricingSelections::default().with_preset(Preset::Better);
    let quote = compute_pricing(&sel).unwrap();

    assert_eq!(
        labels(&sel),
        vec!["Standard Video (2 min)", "Benefits Break Microsite (bundled)"]
    );
    assert_eq!(quote.subtotal, 5597);
    assert_eq!(quote.discount_total(), 1000);
    assert_eq!(quote.estimated_timeline, "4-5 weeks");
}

#[test]
fn test_best_package() {
    let sel = PricingSelections::default().with_preset(Preset::Best);
    let quote = compute_pricing(&sel).unwrap();

    assert_eq!(
        labels(&sel),
        vec![
            "Standard Video (2 min)",
            "Open Enrollment Teaser Video (1 min)",
            "Alternative Language Video",
            "DIY PowerPoint License (AI VO)",
            "Benefits Break Microsite (bundled)",
        ]
    );
    assert_eq!(quote.subtotal, 1598 + 650 + 500 + 2500 + 3999);
    assert_eq!(quote.estimated_timeline, "5-6 weeks");
}

#[test]
fn test_best_package_with_rush() {
    let sel = PricingSelections::default()
        .with_preset(Preset::Best)
        .with_rush();
    let quote = compute_pricing(&sel).unwrap();

    // video + teaser + DIY license; alt-language and microsite are not surcharged
    assert_eq!(quote.rush_surcharge, (1598 + 650 + 2500) / 2);
    assert_eq!(quote.category_total(LineItemCategory::Microsite), 3999);
}

#[test]
fn test_preset_keeps_subscription() {
    let sel = PricingSelections::default()
        .with_subscription(SubscriptionPlan::Growth, 6)
        .with_preset(Preset::Better);
    let quote = compute_pricing(&sel).unwrap();

    assert_eq!(quote.subscription_total, 14994);
    assert_eq!(quote.total_all_in, 5597 + 14994);
}

#[test]
fn test_preset_raises_short_video_to_minimum() {
    let sel = PricingSelections::empty()
        .with_video(VideoType::FullCustom, 1)
        .with_preset(Preset::Good);
    let resolved = resolve_preset(&sel);

    assert_eq!(resolved.video_type, VideoType::Standard);
    assert_eq!(resolved.video_minutes, 2);
}

#[test]
fn test_custom_preset_prices_like_no_preset() {
    let sel = PricingSelections::default()
        .with_website(WebsiteType::Standalone)
        .with_diy_license(true);
    assert_eq!(
        compute_pricing(&sel.clone().with_preset(Preset::Custom)).unwrap(),
        compute_pricing(&sel).unwrap()
    );
}

#[test]
fn test_pricing_does_not_modify_caller_selections() {
    let sel = PricingSelections::empty().with_preset(Preset::Best);
    let before = sel.clone();
    compute_pricing(&sel).unwrap();
    assert_eq!(sel, before);
}

#[test]
fn test_preset_from_json() {
    let sel: PricingSelections = serde_json::from_str(r#"{"preset": "better"}"#).unwrap();
    assert_eq!(sel.preset, Some(Preset::Better));
    assert!(serde_json::from_str::<PricingSelections>(r#"{"preset": "premium"}"#).is_err());
}
