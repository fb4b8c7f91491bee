//! Pricing configuration
//!
//! The single authoritative table of unit prices, surcharge percentages,
//! subscription rates and delivery-time baselines. Every amount the engine
//! emits is sourced from here; no call site carries its own price literal.
//!
//! Override files are JSON. Omitted sections and fields keep their defaults,
//! so an override only needs to name what changes:
//!
//! ```json
//! { "prices": { "rush_surcharge_percent": 40 } }
//! ```

use crate::models::{SubscriptionPlan, VideoType, WebsiteType};
use crate::pricing::PricingError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default payment terms quoted on every breakdown
pub const DEFAULT_PAYMENT_TERMS: &str =
    "50% to start, 50% at V2 approval (Net 30 with PO for approved enterprises)";

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub prices: PriceTable,
    pub timeline: TimelineWeeks,
    pub payment_terms: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            timeline: TimelineWeeks::default(),
            payment_terms: DEFAULT_PAYMENT_TERMS.to_string(),
        }
    }
}

/// Primary video rates (whole dollars)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoRates {
    pub standard_per_minute: i64,
    pub semi_custom_per_minute: i64,
    pub full_custom_per_minute: i64,
    /// Flat rate, independent of duration
    pub full_animation_flat: i64,
}

impl Default for VideoRates {
    fn default() -> Self {
        Self {
            standard_per_minute: 799,
            semi_custom_per_minute: 999,
            full_custom_per_minute: 1199,
            full_animation_flat: 5000,
        }
    }
}

/// Add-on rates (whole dollars)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AddonRates {
    pub oe_teaser: i64,
    pub alt_language_per_minute: i64,
    pub diy_powerpoint: i64,
    /// Surcharge on top of `diy_powerpoint`
    pub diy_human_voice: i64,
    pub ppt_alt_language: i64,
    /// Surcharge on top of `ppt_alt_language`
    pub ppt_alt_language_human_voice: i64,
    pub video_updates_basic: i64,
    pub video_updates_with_voice: i64,
}

impl Default for AddonRates {
    fn default() -> Self {
        Self {
            oe_teaser: 650,
            alt_language_per_minute: 250,
            diy_powerpoint: 2500,
            diy_human_voice: 1000,
            ppt_alt_language: 3000,
            ppt_alt_language_human_voice: 1000,
            video_updates_basic: 750,
            video_updates_with_voice: 1049,
        }
    }
}

/// Benefits Break microsite sold as a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MicrositeRates {
    /// List price
    pub standalone: i64,
    /// Price when purchased alongside a video
    pub bundled: i64,
}

impl Default for MicrositeRates {
    fn default() -> Self {
        Self {
            standalone: 4999,
            bundled: 3999,
        }
    }
}

/// (initial build, annual hosting) pair for a tiered website
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierPrice {
    pub initial: i64,
    pub annual: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebsiteTierRates {
    pub benefits_break: TierPrice,
    pub full_benefits: TierPrice,
    pub custom_portal: TierPrice,
}

impl Default for WebsiteTierRates {
    fn default() -> Self {
        Self {
            benefits_break: TierPrice {
                initial: 4999,
                annual: 2499,
            },
            full_benefits: TierPrice {
                initial: 24999,
                annual: 12499,
            },
            custom_portal: TierPrice {
                initial: 44999,
                annual: 24999,
            },
        }
    }
}

/// Monthly subscription rates and included minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubscriptionRates {
    pub essential_monthly: i64,
    pub growth_monthly: i64,
    pub enterprise_monthly: i64,
    pub essential_minutes: u32,
    pub growth_minutes: u32,
    pub enterprise_minutes: u32,
}

impl Default for SubscriptionRates {
    fn default() -> Self {
        Self {
            essential_monthly: 999,
            growth_monthly: 2499,
            enterprise_monthly: 4999,
            essential_minutes: 1,
            growth_minutes: 3,
            enterprise_minutes: 6,
        }
    }
}

/// Every unit price the engine uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriceTable {
    pub video: VideoRates,
    pub addons: AddonRates,
    pub microsite: MicrositeRates,
    pub website: WebsiteTierRates,
    pub subscription: SubscriptionRates,
    /// Surcharge on video and license spend for rush delivery
    pub rush_surcharge_percent: u32,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            video: VideoRates::default(),
            addons: AddonRates::default(),
            microsite: MicrositeRates::default(),
            website: WebsiteTierRates::default(),
            subscription: SubscriptionRates::default(),
            rush_surcharge_percent: 50,
        }
    }
}

impl PriceTable {
    /// Per-minute rate, or the flat rate for flat-rate tiers
    pub fn video_rate(&self, video_type: VideoType) -> i64 {
        match video_type {
            VideoType::Standard => self.video.standard_per_minute,
            VideoType::SemiCustom => self.video.semi_custom_per_minute,
            VideoType::FullCustom => self.video.full_custom_per_minute,
            VideoType::FullAnimation => self.video.full_animation_flat,
        }
    }

    /// Initial/annual pair for tiered websites, `None` otherwise
    pub fn website_tier(&self, website_type: WebsiteType) -> Option<TierPrice> {
        match website_type {
            WebsiteType::BenefitsBreak => Some(self.website.benefits_break),
            WebsiteType::FullBenefits => Some(self.website.full_benefits),
            WebsiteType::CustomPortal => Some(self.website.custom_portal),
            WebsiteType::None | WebsiteType::Standalone | WebsiteType::Bundled => None,
        }
    }

    pub fn subscription_monthly(&self, plan: SubscriptionPlan) -> i64 {
        match plan {
            SubscriptionPlan::None => 0,
            SubscriptionPlan::Essential => self.subscription.essential_monthly,
            SubscriptionPlan::Growth => self.subscription.growth_monthly,
            SubscriptionPlan::Enterprise => self.subscription.enterprise_monthly,
        }
    }

    /// Video minutes included per month in a plan
    pub fn subscription_minutes(&self, plan: SubscriptionPlan) -> u32 {
        match plan {
            SubscriptionPlan::None => 0,
            SubscriptionPlan::Essential => self.subscription.essential_minutes,
            SubscriptionPlan::Growth => self.subscription.growth_minutes,
            SubscriptionPlan::Enterprise => self.subscription.enterprise_minutes,
        }
    }

    fn named_amounts(&self) -> Vec<(&'static str, i64)> {
        vec![
            ("video.standard_per_minute", self.video.standard_per_minute),
            ("video.semi_custom_per_minute", self.video.semi_custom_per_minute),
            ("video.full_custom_per_minute", self.video.full_custom_per_minute),
            ("video.full_animation_flat", self.video.full_animation_flat),
            ("addons.oe_teaser", self.addons.oe_teaser),
            ("addons.alt_language_per_minute", self.addons.alt_language_per_minute),
            ("addons.diy_powerpoint", self.addons.diy_powerpoint),
            ("addons.diy_human_voice", self.addons.diy_human_voice),
            ("addons.ppt_alt_language", self.addons.ppt_alt_language),
            (
                "addons.ppt_alt_language_human_voice",
                self.addons.ppt_alt_language_human_voice,
            ),
            ("addons.video_updates_basic", self.addons.video_updates_basic),
            ("addons.video_updates_with_voice", self.addons.video_updates_with_voice),
            ("microsite.standalone", self.microsite.standalone),
            ("microsite.bundled", self.microsite.bundled),
            ("website.benefits_break.initial", self.website.benefits_break.initial),
            ("website.benefits_break.annual", self.website.benefits_break.annual),
            ("website.full_benefits.initial", self.website.full_benefits.initial),
            ("website.full_benefits.annual", self.website.full_benefits.annual),
            ("website.custom_portal.initial", self.website.custom_portal.initial),
            ("website.custom_portal.annual", self.website.custom_portal.annual),
            ("subscription.essential_monthly", self.subscription.essential_monthly),
            ("subscription.growth_monthly", self.subscription.growth_monthly),
            ("subscription.enterprise_monthly", self.subscription.enterprise_monthly),
        ]
    }

    /// Reject tables that could produce negative or unreconcilable quotes
    pub fn validate(&self) -> Result<(), PricingError> {
        if let Some((name, amount)) = self.named_amounts().into_iter().find(|(_, a)| *a < 0) {
            return Err(PricingError::InvalidConfig(format!(
                "price {} must be non-negative, got {}",
                name, amount
            )));
        }
        if self.microsite.bundled > self.microsite.standalone {
            return Err(PricingError::InvalidConfig(format!(
                "bundled microsite price {} exceeds standalone price {}",
                self.microsite.bundled, self.microsite.standalone
            )));
        }
        if self.rush_surcharge_percent > 100 {
            return Err(PricingError::InvalidConfig(format!(
                "rush_surcharge_percent must be at most 100, got {}",
                self.rush_surcharge_percent
            )));
        }
        Ok(())
    }
}

/// Upper bound for every week count in a [`TimelineWeeks`] table (ten years)
pub const MAX_TIMELINE_WEEKS: u32 = 520;

/// Baseline delivery weeks per feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineWeeks {
    pub standard: u32,
    pub semi_custom: u32,
    pub full_custom: u32,
    pub full_animation: u32,
    pub teaser: u32,
    /// Benefits Break microsite in any of its forms
    pub microsite: u32,
    pub full_benefits: u32,
    pub custom_portal: u32,
    pub diy: u32,
    /// Added on top of the baseline when alternate-language minutes are ordered
    pub alt_language_extra: u32,
    /// Added on top of the baseline for a translated PowerPoint
    pub ppt_alt_language_extra: u32,
    /// Rush delivery scales the schedule to this percentage (rounded up)
    pub rush_percent: u32,
    /// Rush delivery never quotes fewer weeks than this
    pub rush_minimum_weeks: u32,
}

impl Default for TimelineWeeks {
    fn default() -> Self {
        Self {
            standard: 3,
            semi_custom: 4,
            full_custom: 5,
            full_animation: 6,
            teaser: 3,
            microsite: 4,
            full_benefits: 8,
            custom_portal: 12,
            diy: 2,
            alt_language_extra: 1,
            ppt_alt_language_extra: 1,
            rush_percent: 70,
            rush_minimum_weeks: 2,
        }
    }
}

impl TimelineWeeks {
    pub fn video(&self, video_type: VideoType) -> u32 {
        match video_type {
            VideoType::Standard => self.standard,
            VideoType::SemiCustom => self.semi_custom,
            VideoType::FullCustom => self.full_custom,
            VideoType::FullAnimation => self.full_animation,
        }
    }

    pub fn website(&self, website_type: WebsiteType) -> u32 {
        match website_type {
            WebsiteType::None => 0,
            WebsiteType::Standalone | WebsiteType::Bundled | WebsiteType::BenefitsBreak => {
                self.microsite
            }
            WebsiteType::FullBenefits => self.full_benefits,
            WebsiteType::CustomPortal => self.custom_portal,
        }
    }

    fn named_weeks(&self) -> [(&'static str, u32); 12] {
        [
            ("timeline.standard", self.standard),
            ("timeline.semi_custom", self.semi_custom),
            ("timeline.full_custom", self.full_custom),
            ("timeline.full_animation", self.full_animation),
            ("timeline.teaser", self.teaser),
            ("timeline.microsite", self.microsite),
            ("timeline.full_benefits", self.full_benefits),
            ("timeline.custom_portal", self.custom_portal),
            ("timeline.diy", self.diy),
            ("timeline.alt_language_extra", self.alt_language_extra),
            ("timeline.ppt_alt_language_extra", self.ppt_alt_language_extra),
            ("timeline.rush_minimum_weeks", self.rush_minimum_weeks),
        ]
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if let Some((name, weeks)) = self
            .named_weeks()
            .into_iter()
            .find(|(_, w)| *w > MAX_TIMELINE_WEEKS)
        {
            return Err(PricingError::InvalidConfig(format!(
                "{} must be at most {} weeks, got {}",
                name, MAX_TIMELINE_WEEKS, weeks
            )));
        }
        if self.rush_percent == 0 || self.rush_percent > 100 {
            return Err(PricingError::InvalidConfig(format!(
                "timeline.rush_percent must be within 1..=100, got {}",
                self.rush_percent
            )));
        }
        Ok(())
    }
}

impl PricingConfig {
    /// Parse and validate a JSON override
    pub fn from_json_str(contents: &str) -> Result<Self, PricingError> {
        let config: PricingConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON override file
    pub fn load(path: &Path) -> Result<Self, PricingError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PricingError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        log::debug!("Loaded pricing config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        self.prices.validate()?;
        self.timeline.validate()
    }

    /// Payment terms to print, falling back to the house default
    pub fn payment_terms(&self) -> &str {
        if self.payment_terms.trim().is_empty() {
            DEFAULT_PAYMENT_TERMS
        } else {
            &self.payment_terms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_flat_rate_lookup() {
        let prices = PriceTable::default();
        assert_eq!(prices.video_rate(VideoType::FullAnimation), 5000);
        assert_eq!(prices.video_rate(VideoType::Standard), 799);
    }

    #[test]
    fn test_website_tier_only_for_tiered_types() {
        let prices = PriceTable::default();
        assert!(prices.website_tier(WebsiteType::Bundled).is_none());
        assert!(prices.website_tier(WebsiteType::None).is_none());
        assert_eq!(
            prices.website_tier(WebsiteType::CustomPortal),
            Some(TierPrice {
                initial: 44999,
                annual: 24999
            })
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut prices = PriceTable::default();
        prices.addons.oe_teaser = -1;
        let err = prices.validate().unwrap_err();
        assert!(err.to_string().contains("addons.oe_teaser"));
    }

    #[test]
    fn test_bundled_above_standalone_rejected() {
        let mut prices = PriceTable::default();
        prices.microsite.bundled = prices.microsite.standalone + 1;
        assert!(prices.validate().is_err());
    }

    #[test]
    fn test_empty_payment_terms_fall_back_to_default() {
        let config = PricingConfig {
            payment_terms: "  ".to_string(),
            ..PricingConfig::default()
        };
        assert_eq!(config.payment_terms(), DEFAULT_PAYMENT_TERMS);
    }
}
