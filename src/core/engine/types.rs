//! Engine input and output types

use serde::{Deserialize, Serialize};

use crate::catalog::{AvatarPlan, HostingOption, VoiceAgent};

/// Caller-supplied load and budget parameters, immutable for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInput {
    /// Total monthly budget (INR)
    pub monthly_budget_inr: f64,
    /// Share of the budget allocated to API spend (avatar + voice), percent
    pub api_allocation_percent: f64,
    /// Share of the budget allocated to hosting, percent
    pub hosting_allocation_percent: f64,
    /// Registered users
    pub users: u32,
    /// Required simultaneous sessions
    pub concurrent_sessions: u32,
    /// Requested conversation minutes per month
    pub minutes_per_month: f64,
    /// true = avatar + separate voice agent, false = avatar inbuilt voice
    pub use_voice_agent: bool,
}

impl BudgetInput {
    /// INR ceiling for API spend (avatar + voice)
    pub fn api_budget_inr(&self) -> f64 {
        self.monthly_budget_inr * self.api_allocation_percent / 100.0
    }

    /// INR ceiling for hosting spend
    pub fn hosting_budget_inr(&self) -> f64 {
        self.monthly_budget_inr * self.hosting_allocation_percent / 100.0
    }
}

/// Itemized cost breakdown for one combination, in both currencies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Avatar cost, INR
    pub avatar_cost_inr: f64,
    /// Avatar cost, USD (base + overage)
    pub avatar_cost_usd: f64,
    /// Avatar base subscription cost, USD
    pub avatar_base_cost_usd: f64,
    /// Minutes beyond the plan's included allowance
    pub avatar_additional_minutes: f64,
    /// Overage charge for those minutes, USD
    pub avatar_additional_cost_usd: f64,
    /// Voice cost, INR (zero without a voice agent)
    pub voice_cost_inr: f64,
    /// Voice cost, USD
    pub voice_cost_usd: f64,
    /// Voice monthly base/minimum charge, USD (per-minute model only)
    pub voice_base_cost_usd: Option<f64>,
    /// Voice variable per-minute charge, USD (per-minute models only)
    pub voice_per_minute_cost_usd: Option<f64>,
    /// Total tokens consumed (token model only)
    pub voice_total_tokens: Option<f64>,
    /// Hosting cost, INR
    pub hosting_cost_inr: f64,
    /// Hosting base charge, INR
    pub hosting_base_cost_inr: f64,
    /// Hosting per-user charge, INR
    pub hosting_users_cost_inr: f64,
    /// Hosting per-call charge, INR
    pub hosting_calls_cost_inr: f64,
    /// Fixed miscellaneous monthly charge, INR
    pub misc_cost_inr: f64,
    /// Grand total, INR
    pub total_cost_inr: f64,
    /// Grand total, USD
    pub total_cost_usd: f64,
}

/// One evaluated candidate: a priced (avatar, voice, hosting) choice
///
/// Created fresh per run and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combination {
    /// Composite identifier: `{avatar}x{n}-{voice|inbuilt}x{n}-{hosting}`
    pub id: String,
    /// Chosen avatar plan (possibly a synthetic composite)
    pub avatar_plan: AvatarPlan,
    /// Avatar accounts purchased
    pub avatar_accounts: u32,
    /// Chosen voice agent, if a separate one is used
    pub voice_agent: Option<VoiceAgent>,
    /// Voice accounts purchased
    pub voice_accounts: u32,
    /// Chosen hosting plan
    pub hosting_option: HostingOption,
    /// Itemized costs
    pub breakdown: CostBreakdown,
    /// Grand total, INR (mirror of `breakdown.total_cost_inr`)
    pub total_cost_inr: f64,
    /// Whether total and both category sub-costs fit their ceilings
    pub fits_budget: bool,
    /// Desirability score, higher is better
    pub score: f64,
    /// Advisory notes (capacity, session length, budget overruns)
    pub warnings: Vec<String>,
}
