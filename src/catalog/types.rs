//! Type definitions for the pricing catalog
//!
//! The catalog is the engine's configuration: three ordered lists of priced
//! components plus the currency conversion rate and fixed monthly overhead.
//! It is an immutable value passed explicitly into the engine entry point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::CurrencyConverter;

/// A rentable avatar rendering/API plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarPlan {
    /// Stable identifier (combos use `"a+b"` concatenation)
    pub id: String,
    /// Display name
    pub name: String,
    /// Provider name (combos may only aggregate within one provider)
    pub provider: String,
    /// Tier label (e.g. "Pro", "Scale")
    pub tier: String,
    /// Base monthly price (USD)
    pub monthly_price_usd: f64,
    /// Minutes included at the base price
    pub included_minutes: f64,
    /// Per-minute charge beyond the included minutes (USD)
    pub overage_per_minute_usd: f64,
    /// Maximum simultaneous sessions; `None` means unlimited/custom
    pub concurrency: Option<u32>,
    /// Maximum single-session length in minutes, if the plan caps it
    pub max_session_minutes: Option<f64>,
    /// Whether the plan ships its own voice capability
    pub has_inbuilt_voice: bool,
    /// True for synthetic two-account aggregates built by the engine
    #[serde(default)]
    pub composite: bool,
}

/// Pricing model for a voice agent
///
/// Each model carries only the rate fields it actually uses. The catalog tag
/// values match the conventional names: `tokens`, `per-minute`,
/// `per-minute-per-concurrency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "pricing_model", rename_all = "kebab-case")]
pub enum PricingModel {
    /// Billed on token throughput
    Tokens {
        /// Tokens consumed per minute of conversation (default 1000)
        #[serde(default)]
        tokens_per_minute: Option<f64>,
        /// Price per million tokens (USD)
        price_per_million_tokens_usd: f64,
    },
    /// Billed per minute with an optional monthly floor
    PerMinute {
        /// Rate per minute (USD)
        rate_per_minute_usd: f64,
        /// Monthly minimum/base charge per account (USD)
        #[serde(default)]
        monthly_minimum_usd: Option<f64>,
    },
    /// Billed per minute, scaled by simultaneous sessions
    PerMinutePerConcurrency {
        /// Rate per minute per concurrent session (USD)
        rate_per_minute_usd: f64,
    },
}

/// A standalone voice-agent plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceAgent {
    /// Stable identifier (combos use `"a+b"` concatenation)
    pub id: String,
    /// Display name
    pub name: String,
    /// Provider family; per-minute agents of one family may be aggregated
    pub family: String,
    /// Pricing model and its rate fields
    #[serde(flatten)]
    pub pricing: PricingModel,
    /// Maximum simultaneous sessions; `None` means unlimited
    pub concurrency: Option<u32>,
    /// True for synthetic two-account aggregates built by the engine
    #[serde(default)]
    pub composite: bool,
}

/// A hosting plan for the service itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostingOption {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Fixed base monthly cost (INR)
    pub base_monthly_inr: f64,
    /// Monthly cost per registered user (INR)
    pub per_user_inr: f64,
    /// Cost per served call (INR)
    pub per_call_inr: f64,
}

/// The full pricing catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Avatar rendering/API plans
    pub avatar_plans: Vec<AvatarPlan>,
    /// Standalone voice agents
    pub voice_agents: Vec<VoiceAgent>,
    /// Hosting plans
    pub hosting_options: Vec<HostingOption>,
    /// Currency conversion rate
    pub converter: CurrencyConverter,
    /// Fixed miscellaneous monthly charge added to every combination (INR)
    pub misc_monthly_inr: f64,
    /// When the catalog data was last revised
    pub updated_at: DateTime<Utc>,
}
