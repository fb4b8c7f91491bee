//! Quote selections
//!
//! The structured record a calculator UI (or a JSON caller) submits to the
//! pricing engine. Each field maps to one priced feature:
//! - Primary video (type + minutes)
//! - Add-ons (teaser, alternate language, DIY license, PPT translation, updates)
//! - Website / microsite tier
//! - Recurring subscription plan and duration
//! - Rush delivery flag
//! - Optional package preset that overwrites the feature fields
//!
//! Quantities are `i64` so negative input can be observed and clamped to zero
//! instead of producing negative prices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string did not name any known option for a selections field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {field} '{value}' (expected one of: {})", .expected.trim_end())]
pub struct UnknownOptionError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

macro_rules! string_options {
    ($ty:ident, $field:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Wire name of this option
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(UnknownOptionError {
                        field: $field,
                        value: other.to_string(),
                        expected: concat!($($name, " "),+),
                    }),
                }
            }
        }

        impl TryFrom<String> for $ty {
            type Error = UnknownOptionError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

/// Primary video production tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum VideoType {
    /// Branded with logo and colors, stock footage (per minute)
    Standard,
    /// Branded animations and transitions (per minute)
    SemiCustom,
    /// Fully customized production (per minute)
    FullCustom,
    /// Complete animated production (flat rate)
    FullAnimation,
}

string_options!(VideoType, "videoType", {
    Standard => "standard",
    SemiCustom => "semi-custom",
    FullCustom => "full-custom",
    FullAnimation => "full-animation",
});

impl VideoType {
    /// Human-readable product name used in line item labels
    pub fn label(&self) -> &'static str {
        match self {
            VideoType::Standard => "Standard Video",
            VideoType::SemiCustom => "Semi-Custom Video",
            VideoType::FullCustom => "Full Custom Video",
            VideoType::FullAnimation => "Full Animation Video",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VideoType::Standard => "Branded with logo and colors, stock footage",
            VideoType::SemiCustom => "Branded animations and transitions",
            VideoType::FullCustom => "Fully customized production",
            VideoType::FullAnimation => "Complete animated video production",
        }
    }

    /// Whether this tier is priced at a flat rate regardless of minutes
    pub fn is_flat_rate(&self) -> bool {
        matches!(self, VideoType::FullAnimation)
    }
}

/// Website / microsite product
///
/// `Standalone` and `Bundled` are the Benefits Break microsite sold as a
/// single line item (bundled carries a discount against the standalone list
/// price). The remaining tiers are billed as an initial build plus an
/// annual hosting fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum WebsiteType {
    None,
    Standalone,
    Bundled,
    BenefitsBreak,
    FullBenefits,
    CustomPortal,
}

string_options!(WebsiteType, "websiteType", {
    None => "none",
    Standalone => "standalone",
    Bundled => "bundled",
    BenefitsBreak => "benefits-break",
    FullBenefits => "full-benefits",
    CustomPortal => "custom-portal",
});

impl WebsiteType {
    pub fn label(&self) -> &'static str {
        match self {
            WebsiteType::None => "No Website",
            WebsiteType::Standalone | WebsiteType::Bundled | WebsiteType::BenefitsBreak => {
                "Benefits Break Microsite"
            }
            WebsiteType::FullBenefits => "Full Benefits Website",
            WebsiteType::CustomPortal => "Custom Benefits Portal",
        }
    }
}

/// Recurring content subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum SubscriptionPlan {
    None,
    Essential,
    Growth,
    Enterprise,
}

string_options!(SubscriptionPlan, "subscriptionPlan", {
    None => "none",
    Essential => "essential",
    Growth => "growth",
    Enterprise => "enterprise",
});

impl SubscriptionPlan {
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionPlan::None => "One-Time Project",
            SubscriptionPlan::Essential => "Essential",
            SubscriptionPlan::Growth => "Growth",
            SubscriptionPlan::Enterprise => "Enterprise",
        }
    }
}

/// Package preset
///
/// `Custom` leaves the selections exactly as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Preset {
    Good,
    Better,
    Best,
    Custom,
}

string_options!(Preset, "preset", {
    Good => "good",
    Better => "better",
    Best => "best",
    Custom => "custom",
});

impl Preset {
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Good => "GOOD",
            Preset::Better => "BETTER",
            Preset::Best => "BEST",
            Preset::Custom => "CUSTOM",
        }
    }
}

/// Complete set of quote selections
///
/// Missing JSON fields take their defaults, unknown fields are rejected.
///
/// # Example
/// ```
/// use benefits_pricing_core_rs::{PricingSelections, VideoType};
///
/// let sel: PricingSelections =
///     serde_json::from_str(r#"{"videoType": "semi-custom", "videoMinutes": 3}"#).unwrap();
/// assert_eq!(sel.video_type, VideoType::SemiCustom);
/// assert_eq!(sel.video_minutes, 3);
/// assert!(!sel.rush);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PricingSelections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,

    pub video_type: VideoType,

    /// Minutes of primary video (0 disables the video line item)
    pub video_minutes: i64,

    #[serde(alias = "teaser")]
    pub oe_teaser_video: bool,

    pub alt_language_minutes: i64,

    #[serde(alias = "diyLicense")]
    pub diy_powerpoint: bool,

    pub diy_human_voice: bool,

    pub ppt_alt_language: bool,

    pub ppt_alt_language_human_voice: bool,

    pub video_updates: bool,

    pub video_updates_with_voice: bool,

    /// Expedited delivery; surcharges video and license spend only
    pub rush: bool,

    #[serde(alias = "microsite")]
    pub website_type: WebsiteType,

    pub subscription_plan: SubscriptionPlan,

    pub subscription_months: i64,
}

impl Default for PricingSelections {
    fn default() -> Self {
        Self {
            preset: None,
            video_type: VideoType::Standard,
            video_minutes: 2,
            oe_teaser_video: false,
            alt_language_minutes: 0,
            diy_powerpoint: false,
            diy_human_voice: false,
            ppt_alt_language: false,
            ppt_alt_language_human_voice: false,
            video_updates: false,
            video_updates_with_voice: false,
            rush: false,
            website_type: WebsiteType::None,
            subscription_plan: SubscriptionPlan::None,
            subscription_months: 0,
        }
    }
}

impl PricingSelections {
    /// Selections with every feature switched off, including the primary video
    pub fn empty() -> Self {
        Self {
            video_minutes: 0,
            ..Self::default()
        }
    }

    /// Set the primary video tier and duration
    pub fn with_video(mut self, video_type: VideoType, minutes: i64) -> Self {
        self.video_type = video_type;
        self.video_minutes = minutes;
        self
    }

    pub fn with_teaser(mut self) -> Self {
        self.oe_teaser_video = true;
        self
    }

    pub fn with_alt_language_minutes(mut self, minutes: i64) -> Self {
        self.alt_language_minutes = minutes;
        self
    }

    /// Add the DIY PowerPoint license, optionally with human voice-over
    pub fn with_diy_license(mut self, human_voice: bool) -> Self {
        self.diy_powerpoint = true;
        self.diy_human_voice = human_voice;
        self
    }

    pub fn with_ppt_alt_language(mut self, human_voice: bool) -> Self {
        self.ppt_alt_language = true;
        self.ppt_alt_language_human_voice = human_voice;
        self
    }

    pub fn with_video_updates(mut self, with_voice: bool) -> Self {
        self.video_updates = true;
        self.video_updates_with_voice = with_voice;
        self
    }

    pub fn with_website(mut self, website_type: WebsiteType) -> Self {
        self.website_type = website_type;
        self
    }

    pub fn with_subscription(mut self, plan: SubscriptionPlan, months: i64) -> Self {
        self.subscription_plan = plan;
        self.subscription_months = months;
        self
    }

    pub fn with_rush(mut self) -> Self {
        self.rush = true;
        self
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Copy with every negative quantity clamped to zero
    pub fn clamped(&self) -> Self {
        Self {
            video_minutes: self.video_minutes.max(0),
            alt_language_minutes: self.alt_language_minutes.max(0),
            subscription_months: self.subscription_months.max(0),
            ..self.clone()
        }
    }
}
