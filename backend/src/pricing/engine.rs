//! Pricing Engine
//!
//! Maps a set of quote selections to an itemized, auditable breakdown.
//!
//! # Computation Order
//!
//! ```text
//! 1. Resolve preset (pure transform, exactly once)
//! 2. Clamp negative quantities to zero
//! 3. Build line items in display order:
//!    video → teaser → alt-language → DIY → PPT alt-language → updates → website
//! 4. Subtotal = Σ line items (discounts are display-only)
//! 5. Rush surcharge = round(pct × Σ video/license items)
//! 6. Subscription total = monthly rate × months
//! 7. Totals, timeline, payment terms
//! ```
//!
//! # Critical Invariants
//!
//! - **Non-negativity**: no amount in the breakdown is ever negative
//! - **Reconciliation**: bundled microsite + its discount == standalone price
//! - **No double discount**: discount items are never subtracted from totals
//! - **Rush scoping**: only `video` and `license` categories are surcharged
//! - **Totals**: due now = subtotal + rush; all-in = due now + subscription

use crate::core::money::{format_currency, percent_of};
use crate::models::{
    DiscountItem, LineItemCategory, PricingBreakdown, PricingLineItem, PricingSelections,
    UnknownOptionError, WebsiteType,
};
use crate::pricing::config::PricingConfig;
use crate::pricing::preset::resolve_preset;
use crate::pricing::timeline::estimate_timeline;
use thiserror::Error;

/// Errors raised while pricing a quote
///
/// Every error is caller-visible; a failed quote never yields a partial
/// breakdown.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error(transparent)]
    UnknownOption(#[from] UnknownOptionError),

    #[error("Amount overflow while pricing {field}")]
    AmountOverflow { field: &'static str },

    #[error("Invalid pricing config: {0}")]
    InvalidConfig(String),

    #[error("Invalid JSON input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("Failed to read pricing config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn checked(value: Option<i64>, field: &'static str) -> Result<i64, PricingError> {
    value.ok_or(PricingError::AmountOverflow { field })
}

/// Pricing engine bound to one price table
///
/// # Example
/// ```
/// use benefits_pricing_core_rs::{PricingEngine, PricingSelections, VideoType};
///
/// let engine = PricingEngine::default();
/// let sel = PricingSelections::empty().with_video(VideoType::Standard, 2);
/// let quote = engine.compute(&sel).unwrap();
///
/// assert_eq!(quote.subtotal, 1598);
/// assert_eq!(quote.total_due_now, 1598);
/// assert_eq!(quote.rush_surcharge, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create an engine from a validated configuration
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price a JSON selections object
    pub fn compute_json(&self, selections_json: &str) -> Result<PricingBreakdown, PricingError> {
        let selections: PricingSelections = serde_json::from_str(selections_json)?;
        self.compute(&selections)
    }

    /// Price one set of selections
    ///
    /// The caller's selections are only read; presets are resolved on a copy.
    pub fn compute(&self, selections: &PricingSelections) -> Result<PricingBreakdown, PricingError> {
        let sel = resolve_preset(selections).clamped();
        if let Some(preset) = selections.preset {
            log::debug!("Resolved preset {} before pricing", preset);
        }

        let mut line_items = Vec::new();
        let mut discount_items = Vec::new();

        self.push_video_items(&sel, &mut line_items)?;
        self.push_addon_items(&sel, &mut line_items)?;
        self.push_website_items(&sel, &mut line_items, &mut discount_items);

        let subtotal = checked(
            line_items
                .iter()
                .try_fold(0i64, |acc, item| acc.checked_add(item.amount)),
            "subtotal",
        )?;

        let prices = &self.config.prices;
        let rush_surcharge = if sel.rush {
            let eligible = checked(
                line_items
                    .iter()
                    .filter(|item| item.category.is_rush_eligible())
                    .try_fold(0i64, |acc, item| acc.checked_add(item.amount)),
                "rush surcharge",
            )?;
            checked(
                percent_of(eligible, prices.rush_surcharge_percent),
                "rush surcharge",
            )?
        } else {
            0
        };

        let monthly_subscription_cost = prices.subscription_monthly(sel.subscription_plan);
        let subscription_total = checked(
            monthly_subscription_cost.checked_mul(sel.subscription_months),
            "subscription total",
        )?;

        let total_due_now = checked(subtotal.checked_add(rush_surcharge), "total due now")?;
        let total_all_in = checked(
            total_due_now.checked_add(subscription_total),
            "total all-in",
        )?;

        log::debug!(
            "Priced {} line items: subtotal={} rush={} subscription={} due_now={}",
            line_items.len(),
            subtotal,
            rush_surcharge,
            subscription_total,
            total_due_now
        );

        Ok(PricingBreakdown {
            line_items,
            discount_items,
            subtotal,
            rush_surcharge,
            subscription_total,
            total_due_now,
            total_all_in,
            monthly_subscription_cost,
            estimated_timeline: estimate_timeline(&sel, &self.config.timeline),
            payment_terms: self.config.payment_terms().to_string(),
        })
    }

    fn push_video_items(
        &self,
        sel: &PricingSelections,
        items: &mut Vec<PricingLineItem>,
    ) -> Result<(), PricingError> {
        let prices = &self.config.prices;

        if sel.video_minutes > 0 {
            let rate = prices.video_rate(sel.video_type);
            let (amount, description) = if sel.video_type.is_flat_rate() {
                (rate, sel.video_type.description().to_string())
            } else {
                (
                    checked(rate.checked_mul(sel.video_minutes), "video production")?,
                    format!(
                        "{} min × {}/min - {}",
                        sel.video_minutes,
                        format_currency(rate),
                        sel.video_type.description()
                    ),
                )
            };
            items.push(
                PricingLineItem::new(
                    format!("{} ({} min)", sel.video_type.label(), sel.video_minutes),
                    amount,
                    LineItemCategory::Video,
                )
                .with_description(format!("{} + tax", description)),
            );
        }

        if sel.oe_teaser_video {
            items.push(
                PricingLineItem::new(
                    "Open Enrollment Teaser Video (1 min)",
                    prices.addons.oe_teaser,
                    LineItemCategory::Video,
                )
                .with_description("Short promotional video for OE campaigns + tax"),
            );
        }

        if sel.alt_language_minutes > 0 {
            let rate = prices.addons.alt_language_per_minute;
            items.push(
                PricingLineItem::new(
                    "Alternative Language Video",
                    checked(
                        rate.checked_mul(sel.alt_language_minutes),
                        "alternative language video",
                    )?,
                    LineItemCategory::Addon,
                )
                .with_description(format!(
                    "{} min × {}/min (after English final) + tax",
                    sel.alt_language_minutes,
                    format_currency(rate)
                )),
            );
        }

        Ok(())
    }

    fn push_addon_items(
        &self,
        sel: &PricingSelections,
        items: &mut Vec<PricingLineItem>,
    ) -> Result<(), PricingError> {
        let addons = &self.config.prices.addons;

        if sel.diy_powerpoint {
            let voice = if sel.diy_human_voice { addons.diy_human_voice } else { 0 };
            items.push(
                PricingLineItem::new(
                    format!("DIY PowerPoint License ({})", voice_label(sel.diy_human_voice)),
                    checked(addons.diy_powerpoint.checked_add(voice), "DIY license")?,
                    LineItemCategory::License,
                )
                .with_description("Transform presentations to professional videos + tax"),
            );
        }

        // Permitted without the DIY license; see DESIGN.md.
        if sel.ppt_alt_language {
            let voice = if sel.ppt_alt_language_human_voice {
                addons.ppt_alt_language_human_voice
            } else {
                0
            };
            items.push(
                PricingLineItem::new(
                    format!(
                        "PPT Alternative Language ({})",
                        voice_label(sel.ppt_alt_language_human_voice)
                    ),
                    checked(
                        addons.ppt_alt_language.checked_add(voice),
                        "PPT alternative language",
                    )?,
                    LineItemCategory::License,
                )
                .with_description("Translated PowerPoint video version + tax"),
            );
        }

        if sel.video_updates {
            let (amount, kind) = if sel.video_updates_with_voice {
                (addons.video_updates_with_voice, "with VO changes")
            } else {
                (addons.video_updates_basic, "no VO changes")
            };
            items.push(
                PricingLineItem::new(
                    format!("Video Updates ({})", kind),
                    amount,
                    LineItemCategory::Addon,
                )
                .with_description("Modifications to existing video content + tax"),
            );
        }

        Ok(())
    }

    fn push_website_items(
        &self,
        sel: &PricingSelections,
        items: &mut Vec<PricingLineItem>,
        discounts: &mut Vec<DiscountItem>,
    ) {
        let prices = &self.config.prices;
        let label = sel.website_type.label();

        match sel.website_type {
            WebsiteType::None => {}
            WebsiteType::Standalone => {
                items.push(
                    PricingLineItem::new(
                        format!("{} (standalone)", label),
                        prices.microsite.standalone,
                        LineItemCategory::Microsite,
                    )
                    .with_description("Companion benefits microsite + tax"),
                );
            }
            WebsiteType::Bundled => {
                items.push(
                    PricingLineItem::new(
                        format!("{} (bundled)", label),
                        prices.microsite.bundled,
                        LineItemCategory::Microsite,
                    )
                    .with_description("Companion benefits microsite, bundled with video + tax"),
                );
                discounts.push(DiscountItem {
                    label: "Bundle savings vs. standalone microsite".to_string(),
                    description: Some(format!(
                        "Standalone list price {}",
                        format_currency(prices.microsite.standalone)
                    )),
                    amount: prices.microsite.standalone - prices.microsite.bundled,
                });
            }
            WebsiteType::BenefitsBreak | WebsiteType::FullBenefits | WebsiteType::CustomPortal => {
                if let Some(tier) = prices.website_tier(sel.website_type) {
                    items.push(
                        PricingLineItem::new(
                            format!("{} (Initial)", label),
                            tier.initial,
                            LineItemCategory::Microsite,
                        )
                        .with_description("Custom website development and setup + tax"),
                    );
                    items.push(
                        PricingLineItem::new(
                            format!("{} (Annual)", label),
                            tier.annual,
                            LineItemCategory::Subscription,
                        )
                        .with_description("Hosting, maintenance, and updates + tax"),
                    );
                }
            }
        }
    }
}

fn voice_label(human_voice: bool) -> &'static str {
    if human_voice {
        "Human VO"
    } else {
        "AI VO"
    }
}

/// Price selections against the default price table
pub fn compute_pricing(selections: &PricingSelections) -> Result<PricingBreakdown, PricingError> {
    PricingEngine::default().compute(selections)
}
