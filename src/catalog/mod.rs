//! Pricing catalog
//!
//! Read-only reference data describing everything the engine can price:
//! avatar plans, standalone voice agents, hosting options, the fixed
//! exchange rate, and the fixed miscellaneous monthly overhead.

pub mod currency;
pub mod loader;
pub mod types;

pub use currency::CurrencyConverter;
pub use loader::default_catalog;
pub use types::{AvatarPlan, Catalog, HostingOption, PricingModel, VoiceAgent};
