//! Package presets
//!
//! A non-custom preset fully determines the video, teaser, website, DIY
//! license and alternate-language fields. Rush, subscription and
//! video-update choices are left as the caller submitted them.
//!
//! Resolution is a pure transform: the caller's selections are borrowed and
//! a new value is returned. Applying it twice yields the same result as
//! applying it once.

use crate::models::{Preset, PricingSelections, VideoType, WebsiteType};

/// Minimum video minutes every package includes
pub const PRESET_MIN_VIDEO_MINUTES: i64 = 2;

/// Minimum alternate-language minutes in the BEST package
pub const PRESET_MIN_ALT_LANGUAGE_MINUTES: i64 = 2;

struct PresetRow {
    teaser: bool,
    website: WebsiteType,
    diy: bool,
    alt_language: bool,
}

fn preset_row(preset: Preset) -> Option<PresetRow> {
    match preset {
        Preset::Good => Some(PresetRow {
            teaser: false,
            website: WebsiteType::None,
            diy: false,
            alt_language: false,
        }),
        Preset::Better => Some(PresetRow {
            teaser: false,
            website: WebsiteType::Bundled,
            diy: false,
            alt_language: false,
        }),
        Preset::Best => Some(PresetRow {
            teaser: true,
            website: WebsiteType::Bundled,
            diy: true,
            alt_language: true,
        }),
        Preset::Custom => None,
    }
}

/// Apply the selections' preset, if any
///
/// # Example
/// ```
/// use benefits_pricing_core_rs::pricing::resolve_preset;
/// use benefits_pricing_core_rs::{Preset, PricingSelections, WebsiteType};
///
/// let submitted = PricingSelections::default().with_preset(Preset::Better);
/// let resolved = resolve_preset(&submitted);
///
/// assert_eq!(resolved.website_type, WebsiteType::Bundled);
/// assert_eq!(submitted.website_type, WebsiteType::None); // caller's value untouched
/// ```
pub fn resolve_preset(selections: &PricingSelections) -> PricingSelections {
    let Some(row) = selections.preset.and_then(preset_row) else {
        return selections.clone();
    };

    let alt_language_minutes = if row.alt_language {
        selections
            .alt_language_minutes
            .max(PRESET_MIN_ALT_LANGUAGE_MINUTES)
    } else {
        0
    };

    PricingSelections {
        video_type: VideoType::Standard,
        video_minutes: selections.video_minutes.max(PRESET_MIN_VIDEO_MINUTES),
        oe_teaser_video: row.teaser,
        alt_language_minutes,
        diy_powerpoint: row.diy,
        diy_human_voice: false,
        ppt_alt_language: false,
        ppt_alt_language_human_voice: false,
        website_type: row.website,
        ..selections.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriptionPlan;

    #[test]
    fn test_no_preset_is_identity() {
        let sel = PricingSelections::default()
            .with_teaser()
            .with_website(WebsiteType::FullBenefits);
        assert_eq!(resolve_preset(&sel), sel);
    }

    #[test]
    fn test_custom_preset_is_identity() {
        let sel = PricingSelections::default()
            .with_diy_license(true)
            .with_preset(Preset::Custom);
        assert_eq!(resolve_preset(&sel), sel);
    }

    #[test]
    fn test_best_overrides_feature_fields() {
        let sel = PricingSelections::default()
            .with_video(VideoType::FullAnimation, 0)
            .with_ppt_alt_language(true)
            .with_preset(Preset::Best);
        let resolved = resolve_preset(&sel);

        assert_eq!(resolved.video_type, VideoType::Standard);
        assert_eq!(resolved.video_minutes, 2);
        assert!(resolved.oe_teaser_video);
        assert!(resolved.diy_powerpoint);
        assert!(!resolved.diy_human_voice);
        assert!(!resolved.ppt_alt_language);
        assert_eq!(resolved.alt_language_minutes, 2);
        assert_eq!(resolved.website_type, WebsiteType::Bundled);
    }

    #[test]
    fn test_preset_keeps_longer_requested_durations() {
        let sel = PricingSelections::default()
            .with_video(VideoType::Standard, 5)
            .with_alt_language_minutes(4)
            .with_preset(Preset::Best);
        let resolved = resolve_preset(&sel);
        assert_eq!(resolved.video_minutes, 5);
        assert_eq!(resolved.alt_language_minutes, 4);
    }

    #[test]
    fn test_preset_leaves_rush_subscription_and_updates() {
        let sel = PricingSelections::default()
            .with_rush()
            .with_subscription(SubscriptionPlan::Growth, 6)
            .with_video_updates(true)
            .with_preset(Preset::Good);
        let resolved = resolve_preset(&sel);
        assert!(resolved.rush);
        assert_eq!(resolved.subscription_plan, SubscriptionPlan::Growth);
        assert_eq!(resolved.subscription_months, 6);
        assert!(resolved.video_updates_with_voice);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        for preset in Preset::ALL {
            let sel = PricingSelections::default()
                .with_video(VideoType::SemiCustom, -4)
                .with_alt_language_minutes(1)
                .with_preset(*preset);
            let once = resolve_preset(&sel);
            assert_eq!(resolve_preset(&once), once);
        }
    }
}
