//! Cost Evaluator
//!
//! Prices one (avatar selection, optional voice selection, hosting plan)
//! candidate against the requested load and produces the itemized
//! breakdown, the budget-fit flag, the advisory warnings, and the score.

use crate::catalog::{AvatarPlan, Catalog, HostingOption, PricingModel, VoiceAgent};
use crate::core::engine::scorer::score_combination;
use crate::core::engine::types::{BudgetInput, Combination, CostBreakdown};
use crate::utils::format::format_inr;

/// Average call length assumed when estimating hosting per-call volume
const AVG_CALL_MINUTES: f64 = 10.0;

/// Tokens per conversation minute assumed when a token-priced agent does
/// not declare its own throughput
const DEFAULT_TOKENS_PER_MINUTE: f64 = 1000.0;

/// Account multiplier for cost and capacity scaling
///
/// A composite selection already carries aggregated terms, so it scales by
/// one regardless of the accounts behind it. A zero account count is
/// treated as one to keep divisions finite.
pub(crate) fn account_factor(composite: bool, accounts: u32) -> u32 {
    if composite {
        1
    } else {
        accounts.max(1)
    }
}

/// Effective concurrency capacity of a selection, `None` = unlimited
pub(crate) fn scaled_capacity(
    concurrency: Option<u32>,
    composite: bool,
    accounts: u32,
) -> Option<u32> {
    concurrency.map(|c| c * account_factor(composite, accounts))
}

struct AvatarCost {
    base_usd: f64,
    additional_minutes: f64,
    additional_usd: f64,
    total_usd: f64,
}

fn avatar_cost(plan: &AvatarPlan, accounts: u32, input: &BudgetInput) -> AvatarCost {
    let factor = account_factor(plan.composite, accounts) as f64;
    let base_usd = plan.monthly_price_usd * factor;
    let included_minutes = plan.included_minutes * factor;
    let additional_minutes = (input.minutes_per_month - included_minutes).max(0.0);
    let additional_usd = additional_minutes * plan.overage_per_minute_usd;

    AvatarCost {
        base_usd,
        additional_minutes,
        additional_usd,
        total_usd: base_usd + additional_usd,
    }
}

struct VoiceCost {
    total_usd: f64,
    base_usd: Option<f64>,
    per_minute_usd: Option<f64>,
    total_tokens: Option<f64>,
}

impl VoiceCost {
    fn zero() -> Self {
        Self {
            total_usd: 0.0,
            base_usd: None,
            per_minute_usd: None,
            total_tokens: None,
        }
    }
}

/// Voice cost, dispatched on the agent's pricing model
fn voice_cost(agent: &VoiceAgent, accounts: u32, input: &BudgetInput) -> VoiceCost {
    let factor = account_factor(agent.composite, accounts) as f64;

    match &agent.pricing {
        PricingModel::Tokens {
            tokens_per_minute,
            price_per_million_tokens_usd,
        } => {
            let total_tokens =
                input.minutes_per_month * tokens_per_minute.unwrap_or(DEFAULT_TOKENS_PER_MINUTE);
            let total_usd = (total_tokens / 1_000_000.0) * price_per_million_tokens_usd;
            VoiceCost {
                total_usd,
                base_usd: None,
                per_minute_usd: None,
                total_tokens: Some(total_tokens),
            }
        }
        PricingModel::PerMinute {
            rate_per_minute_usd,
            monthly_minimum_usd,
        } => {
            let minimum_usd = monthly_minimum_usd.unwrap_or(0.0);
            if agent.composite {
                // Aggregated floor applies once against the pooled usage
                let variable_usd = rate_per_minute_usd * input.minutes_per_month;
                VoiceCost {
                    total_usd: minimum_usd.max(variable_usd),
                    base_usd: Some(minimum_usd),
                    per_minute_usd: Some(variable_usd),
                    total_tokens: None,
                }
            } else {
                // Minutes split evenly; the floor applies per account, so
                // accounts cannot share slack
                let per_account_minutes = input.minutes_per_month / factor;
                let per_account_usd = minimum_usd.max(rate_per_minute_usd * per_account_minutes);
                VoiceCost {
                    total_usd: per_account_usd * factor,
                    base_usd: Some(minimum_usd * factor),
                    per_minute_usd: Some(rate_per_minute_usd * input.minutes_per_month),
                    total_tokens: None,
                }
            }
        }
        PricingModel::PerMinutePerConcurrency { rate_per_minute_usd } => {
            // Scales with simultaneous sessions, not accounts
            let total_usd = rate_per_minute_usd
                * input.minutes_per_month
                * input.concurrent_sessions as f64;
            VoiceCost {
                total_usd,
                base_usd: None,
                per_minute_usd: Some(total_usd),
                total_tokens: None,
            }
        }
    }
}

struct HostingCost {
    base_inr: f64,
    users_inr: f64,
    calls_inr: f64,
    total_inr: f64,
}

fn hosting_cost(hosting: &HostingOption, input: &BudgetInput) -> HostingCost {
    let base_inr = hosting.base_monthly_inr;
    let users_inr = input.users as f64 * hosting.per_user_inr;
    let estimated_calls = input.minutes_per_month / AVG_CALL_MINUTES;
    let calls_inr = estimated_calls * hosting.per_call_inr;

    HostingCost {
        base_inr,
        users_inr,
        calls_inr,
        total_inr: base_inr + users_inr + calls_inr,
    }
}

fn collect_warnings(
    avatar_plan: &AvatarPlan,
    avatar_accounts: u32,
    voice_agent: Option<&VoiceAgent>,
    voice_accounts: u32,
    input: &BudgetInput,
    api_cost_inr: f64,
    hosting_cost_inr: f64,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(limit) = scaled_capacity(
        avatar_plan.concurrency,
        avatar_plan.composite,
        avatar_accounts,
    ) {
        if input.concurrent_sessions > limit {
            warnings.push(format!(
                "Concurrent sessions ({}) exceed avatar plan limit with {} account(s) ({})",
                input.concurrent_sessions, avatar_accounts, limit
            ));
        }
    }

    if let Some(agent) = voice_agent {
        if let Some(limit) = scaled_capacity(agent.concurrency, agent.composite, voice_accounts) {
            if input.concurrent_sessions > limit {
                warnings.push(format!(
                    "Concurrent sessions ({}) exceed voice agent limit with {} account(s) ({})",
                    input.concurrent_sessions, voice_accounts, limit
                ));
            }
        }
    }

    // Zero users means no per-user session estimate, so no warning
    if let Some(max_session) = avatar_plan.max_session_minutes {
        if input.users > 0 && input.minutes_per_month / input.users as f64 > max_session {
            warnings.push(format!(
                "Average session length may exceed plan limit ({} min)",
                max_session
            ));
        }
    }

    if api_cost_inr > input.api_budget_inr() {
        warnings.push(format!(
            "API cost ({}) exceeds allocated budget ({})",
            format_inr(api_cost_inr),
            format_inr(input.api_budget_inr())
        ));
    }
    if hosting_cost_inr > input.hosting_budget_inr() {
        warnings.push(format!(
            "Hosting cost ({}) exceeds allocated budget ({})",
            format_inr(hosting_cost_inr),
            format_inr(input.hosting_budget_inr())
        ));
    }

    warnings
}

/// Price one candidate and assemble the full [`Combination`]
pub fn evaluate_combination(
    catalog: &Catalog,
    avatar_plan: &AvatarPlan,
    avatar_accounts: u32,
    voice_agent: Option<&VoiceAgent>,
    voice_accounts: u32,
    hosting_option: &HostingOption,
    input: &BudgetInput,
) -> Combination {
    let converter = &catalog.converter;

    let avatar = avatar_cost(avatar_plan, avatar_accounts, input);
    let avatar_cost_inr = converter.to_inr(avatar.total_usd);

    let voice = match voice_agent {
        Some(agent) => voice_cost(agent, voice_accounts, input),
        None => VoiceCost::zero(),
    };
    let voice_cost_inr = converter.to_inr(voice.total_usd);

    let hosting = hosting_cost(hosting_option, input);

    let total_cost_inr =
        avatar_cost_inr + voice_cost_inr + hosting.total_inr + catalog.misc_monthly_inr;
    let api_cost_inr = avatar_cost_inr + voice_cost_inr;

    let fits_budget = total_cost_inr <= input.monthly_budget_inr
        && api_cost_inr <= input.api_budget_inr()
        && hosting.total_inr <= input.hosting_budget_inr();

    let warnings = collect_warnings(
        avatar_plan,
        avatar_accounts,
        voice_agent,
        voice_accounts,
        input,
        api_cost_inr,
        hosting.total_inr,
    );

    let breakdown = CostBreakdown {
        avatar_cost_inr,
        avatar_cost_usd: avatar.total_usd,
        avatar_base_cost_usd: avatar.base_usd,
        avatar_additional_minutes: avatar.additional_minutes,
        avatar_additional_cost_usd: avatar.additional_usd,
        voice_cost_inr,
        voice_cost_usd: voice.total_usd,
        voice_base_cost_usd: voice.base_usd,
        voice_per_minute_cost_usd: voice.per_minute_usd,
        voice_total_tokens: voice.total_tokens,
        hosting_cost_inr: hosting.total_inr,
        hosting_base_cost_inr: hosting.base_inr,
        hosting_users_cost_inr: hosting.users_inr,
        hosting_calls_cost_inr: hosting.calls_inr,
        misc_cost_inr: catalog.misc_monthly_inr,
        total_cost_inr,
        total_cost_usd: converter.to_usd(total_cost_inr),
    };

    let score = score_combination(
        avatar_plan,
        avatar_accounts,
        voice_agent,
        voice_accounts,
        input,
        total_cost_inr,
        fits_budget,
    );

    let voice_id = voice_agent.map_or("inbuilt", |a| a.id.as_str());
    let id = format!(
        "{}x{}-{}x{}-{}",
        avatar_plan.id, avatar_accounts, voice_id, voice_accounts, hosting_option.id
    );

    Combination {
        id,
        avatar_plan: avatar_plan.clone(),
        avatar_accounts,
        voice_agent: voice_agent.cloned(),
        voice_accounts,
        hosting_option: hosting_option.clone(),
        breakdown,
        total_cost_inr,
        fits_budget,
        score,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn base_input() -> BudgetInput {
        BudgetInput {
            monthly_budget_inr: 100_000.0,
            api_allocation_percent: 60.0,
            hosting_allocation_percent: 40.0,
            users: 50,
            concurrent_sessions: 2,
            minutes_per_month: 1000.0,
            use_voice_agent: true,
        }
    }

    fn plan(id: &str) -> AvatarPlan {
        default_catalog()
            .avatar_plans
            .iter()
            .find(|p| p.id == id)
            .unwrap()
            .clone()
    }

    fn agent(id: &str) -> VoiceAgent {
        default_catalog()
            .voice_agents
            .iter()
            .find(|a| a.id == id)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_avatar_overage() {
        // heygen-pro: $99, 100 included minutes, $0.99/min overage
        let cost = avatar_cost(&plan("heygen-pro"), 1, &base_input());
        assert_eq!(cost.base_usd, 99.0);
        assert_eq!(cost.additional_minutes, 900.0);
        assert!((cost.additional_usd - 891.0).abs() < 1e-9);
        assert!((cost.total_usd - 990.0).abs() < 1e-9);
    }

    #[test]
    fn test_avatar_within_allowance_has_no_overage() {
        let mut input = base_input();
        input.minutes_per_month = 80.0;
        let cost = avatar_cost(&plan("heygen-pro"), 1, &input);
        assert_eq!(cost.additional_minutes, 0.0);
        assert_eq!(cost.total_usd, 99.0);
    }

    #[test]
    fn test_avatar_multi_account_scales_base_and_allowance() {
        let mut input = base_input();
        input.minutes_per_month = 150.0;
        let cost = avatar_cost(&plan("heygen-pro"), 2, &input);
        // Two accounts: 198 USD base, 200 included minutes, no overage
        assert_eq!(cost.base_usd, 198.0);
        assert_eq!(cost.additional_minutes, 0.0);
    }

    #[test]
    fn test_composite_avatar_scales_by_one() {
        let mut combo = plan("heygen-pro");
        combo.composite = true;
        combo.monthly_price_usd = 429.0; // already aggregated
        combo.included_minutes = 500.0;
        let cost = avatar_cost(&combo, 2, &base_input());
        assert_eq!(cost.base_usd, 429.0);
        assert_eq!(cost.additional_minutes, 500.0);
    }

    #[test]
    fn test_voice_per_minute_floor_applies() {
        // rate 0.06, minimum 70, 1000 minutes, one account: max(70, 60) = 70
        let mut input = base_input();
        input.minutes_per_month = 1000.0;
        let cost = voice_cost(&agent("hume-startup"), 1, &input);
        assert!((cost.total_usd - 70.0).abs() < 1e-9);
        assert_eq!(cost.base_usd, Some(70.0));
        assert_eq!(cost.per_minute_usd, Some(60.0));
    }

    #[test]
    fn test_voice_per_minute_variable_dominates_floor() {
        let mut input = base_input();
        input.minutes_per_month = 2000.0;
        let cost = voice_cost(&agent("hume-startup"), 1, &input);
        // 0.06 * 2000 = 120 > 70
        assert!((cost.total_usd - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_voice_per_minute_floor_is_per_account() {
        // Two non-composite accounts split 2000 minutes: each account pays
        // max(70, 0.06 * 1000) = 70, totalling 140 even though the pooled
        // variable cost is only 120.
        let mut input = base_input();
        input.minutes_per_month = 2000.0;
        let cost = voice_cost(&agent("hume-startup"), 2, &input);
        assert!((cost.total_usd - 140.0).abs() < 1e-9);
        assert_eq!(cost.base_usd, Some(140.0));
    }

    #[test]
    fn test_voice_composite_floor_applies_once() {
        let mut combo = agent("hume-startup");
        combo.composite = true;
        combo.pricing = PricingModel::PerMinute {
            rate_per_minute_usd: 0.06,
            monthly_minimum_usd: Some(140.0),
        };
        let mut input = base_input();
        input.minutes_per_month = 3000.0;
        let cost = voice_cost(&combo, 2, &input);
        // max(140, 0.06 * 3000 = 180) = 180, pooled rather than split
        assert!((cost.total_usd - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_voice_tokens_default_throughput() {
        let mut input = base_input();
        input.minutes_per_month = 1000.0;
        let cost = voice_cost(&agent("openai-realtime"), 1, &input);
        // 1000 min * 1000 tok/min = 1M tokens at $20/M
        assert_eq!(cost.total_tokens, Some(1_000_000.0));
        assert!((cost.total_usd - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_voice_per_concurrency_scales_with_sessions() {
        let mut input = base_input();
        input.minutes_per_month = 100.0;
        input.concurrent_sessions = 4;
        let cost = voice_cost(&agent("grok-voice"), 1, &input);
        // 0.05 * 100 * 4
        assert!((cost.total_usd - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_hosting_cost_formula() {
        let catalog = default_catalog();
        let mut input = base_input();
        input.minutes_per_month = 3500.0;
        input.users = 50;
        let hosting = &catalog.hosting_options[1]; // 2500 base, 10/user, 2/call
        let cost = hosting_cost(hosting, &input);
        assert_eq!(cost.base_inr, 2500.0);
        assert_eq!(cost.users_inr, 500.0);
        assert_eq!(cost.calls_inr, 700.0); // 350 calls * 2
        assert_eq!(cost.total_inr, 3700.0);
    }

    #[test]
    fn test_breakdown_total_is_component_sum() {
        let catalog = default_catalog();
        let combination = evaluate_combination(
            catalog,
            &plan("heygen-pro"),
            1,
            Some(&agent("hume-startup")),
            1,
            &catalog.hosting_options[0],
            &base_input(),
        );
        let b = &combination.breakdown;
        let sum = b.avatar_cost_inr + b.voice_cost_inr + b.hosting_cost_inr + b.misc_cost_inr;
        assert!((b.total_cost_inr - sum).abs() < 1e-9);
        assert_eq!(combination.total_cost_inr, b.total_cost_inr);
    }

    #[test]
    fn test_fits_budget_requires_all_three_ceilings() {
        let catalog = default_catalog();
        // API-heavy input: total fits but the API share does not
        let mut input = base_input();
        input.monthly_budget_inr = 120_000.0;
        input.api_allocation_percent = 10.0;
        input.hosting_allocation_percent = 90.0;
        input.minutes_per_month = 1000.0;

        let combination = evaluate_combination(
            catalog,
            &plan("heygen-pro"),
            1,
            None,
            1,
            &catalog.hosting_options[0],
            &input,
        );
        // 990 USD avatar = 87,120 INR > 12,000 INR API share
        assert!(combination.total_cost_inr <= input.monthly_budget_inr);
        assert!(!combination.fits_budget);
        assert!(combination
            .warnings
            .iter()
            .any(|w| w.contains("API cost")));
    }

    #[test]
    fn test_concurrency_warnings() {
        let catalog = default_catalog();
        let mut input = base_input();
        input.concurrent_sessions = 50;
        let combination = evaluate_combination(
            catalog,
            &plan("heygen-pro"), // capacity 3
            1,
            Some(&agent("hume-startup")), // capacity 10
            1,
            &catalog.hosting_options[0],
            &input,
        );
        assert!(combination
            .warnings
            .iter()
            .any(|w| w.contains("avatar plan limit")));
        assert!(combination
            .warnings
            .iter()
            .any(|w| w.contains("voice agent limit")));
    }

    #[test]
    fn test_session_length_warning_guarded_for_zero_users() {
        let catalog = default_catalog();
        let mut input = base_input();
        input.users = 0;
        input.minutes_per_month = 100_000.0;
        let combination = evaluate_combination(
            catalog,
            &plan("heygen-pro"), // max session 30 min
            1,
            None,
            1,
            &catalog.hosting_options[0],
            &input,
        );
        assert!(!combination
            .warnings
            .iter()
            .any(|w| w.contains("session length")));
    }

    #[test]
    fn test_session_length_warning_fires() {
        let catalog = default_catalog();
        let mut input = base_input();
        input.users = 10;
        input.minutes_per_month = 400.0; // 40 min/user > 30 min cap
        let combination = evaluate_combination(
            catalog,
            &plan("heygen-pro"),
            1,
            None,
            1,
            &catalog.hosting_options[0],
            &input,
        );
        assert!(combination
            .warnings
            .iter()
            .any(|w| w.contains("session length")));
    }

    #[test]
    fn test_combination_id_shape() {
        let catalog = default_catalog();
        let combination = evaluate_combination(
            catalog,
            &plan("heygen-pro"),
            1,
            None,
            1,
            &catalog.hosting_options[0],
            &base_input(),
        );
        assert_eq!(combination.id, "heygen-prox1-inbuiltx1-vps-basic");
    }
}
