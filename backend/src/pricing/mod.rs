//! Pricing Module
//!
//! The quote computation core:
//! - Authoritative price/timeline configuration
//! - Package preset resolution
//! - Line item construction, rush surcharge and totals
//! - Delivery timeline estimation
//!
//! # Example
//!
//! ```rust
//! use benefits_pricing_core_rs::pricing::compute_pricing;
//! use benefits_pricing_core_rs::{PricingSelections, WebsiteType};
//!
//! let sel = PricingSelections::empty().with_website(WebsiteType::Bundled);
//! let quote = compute_pricing(&sel).unwrap();
//!
//! assert_eq!(quote.line_items[0].amount, 3999);
//! assert_eq!(quote.discount_items[0].amount, 1000);
//! assert_eq!(quote.subtotal, 3999); // savings are shown, not subtracted again
//! ```

pub mod config;
pub mod engine;
pub mod preset;
pub mod timeline;

// Re-export public API
pub use config::{
    AddonRates, MicrositeRates, PriceTable, PricingConfig, SubscriptionRates, TierPrice,
    TimelineWeeks, VideoRates, WebsiteTierRates, DEFAULT_PAYMENT_TERMS, MAX_TIMELINE_WEEKS,
};
pub use engine::{compute_pricing, PricingEngine, PricingError};
pub use preset::resolve_preset;
pub use timeline::{baseline_weeks, estimate_timeline, rush_weeks};
