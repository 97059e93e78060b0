//! # plancost-rs
//!
//! Monthly operating-cost estimation for a service assembled from three
//! independently priced components: an avatar rendering/API plan, an
//! optional voice-agent plan, and a hosting plan.
//!
//! The engine enumerates the combinatorial space of plan choices and
//! account multiplicities (including synthetic same-provider "combo"
//! aggregates), prices every candidate against the requested load, drops
//! combinations that cannot physically serve the required concurrency, and
//! returns the rest ranked best-first.
//!
//! ## Quick start
//!
//! ```rust
//! use plancost_rs::{default_catalog, rank_combinations, BudgetInput};
//!
//! let input = BudgetInput {
//!     monthly_budget_inr: 100_000.0,
//!     api_allocation_percent: 60.0,
//!     hosting_allocation_percent: 40.0,
//!     users: 50,
//!     concurrent_sessions: 10,
//!     minutes_per_month: 3500.0,
//!     use_voice_agent: true,
//! };
//!
//! let ranked = rank_combinations(default_catalog(), &input);
//! if let Some(best) = ranked.first() {
//!     println!("{}: {:.2} INR/month", best.id, best.total_cost_inr);
//! }
//! ```
//!
//! The computation is pure and synchronous: no I/O, no shared state, and
//! identical inputs always produce identical, order-stable output. The
//! catalog is injected explicitly, so tests run against synthetic data.

#![warn(clippy::all)]

pub mod catalog;
pub mod core;
pub mod utils;

// Re-export main types
pub use catalog::{
    default_catalog, AvatarPlan, Catalog, CurrencyConverter, HostingOption, PricingModel,
    VoiceAgent,
};
pub use core::engine::{rank_combinations, BudgetInput, Combination, CostBreakdown};
pub use utils::error::{PlancostError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
