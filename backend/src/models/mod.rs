//! Domain models for the pricing engine

pub mod breakdown;
pub mod selections;

// Re-exports
pub use breakdown::{DiscountItem, LineItemCategory, PricingBreakdown, PricingLineItem};
pub use selections::{
    Preset, PricingSelections, SubscriptionPlan, UnknownOptionError, VideoType, WebsiteType,
};
