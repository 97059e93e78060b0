//! Scorer & Ranker
//!
//! Assigns each combination an additive desirability score and sorts the
//! final list best-first. Feasible combinations get a +1000 offset, so at
//! any realistic cost spread they always outrank infeasible ones.

use std::cmp::Ordering;

use crate::catalog::{AvatarPlan, VoiceAgent};
use crate::core::engine::evaluator::scaled_capacity;
use crate::core::engine::types::{BudgetInput, Combination};

const FITS_BUDGET_BONUS: f64 = 1000.0;
const CONCURRENCY_BONUS: f64 = 100.0;
const VOICE_BONUS: f64 = 50.0;
const COST_PENALTY_DIVISOR: f64 = 100.0;
const EXTRA_ACCOUNT_PENALTY: f64 = 25.0;

/// True when a capacity is unlimited or covers the requested sessions
fn capacity_sufficient(capacity: Option<u32>, required: u32) -> bool {
    capacity.map_or(true, |limit| required <= limit)
}

/// Compute the desirability score for one evaluated candidate
#[allow(clippy::too_many_arguments)]
pub fn score_combination(
    avatar_plan: &AvatarPlan,
    avatar_accounts: u32,
    voice_agent: Option<&VoiceAgent>,
    voice_accounts: u32,
    input: &BudgetInput,
    total_cost_inr: f64,
    fits_budget: bool,
) -> f64 {
    let mut score = 0.0;

    if fits_budget {
        score += FITS_BUDGET_BONUS;
    }

    // Lower cost = higher score
    score -= total_cost_inr / COST_PENALTY_DIVISOR;

    let avatar_capacity = scaled_capacity(
        avatar_plan.concurrency,
        avatar_plan.composite,
        avatar_accounts,
    );
    if capacity_sufficient(avatar_capacity, input.concurrent_sessions) {
        score += CONCURRENCY_BONUS;
    }

    if let Some(agent) = voice_agent {
        let voice_capacity = scaled_capacity(agent.concurrency, agent.composite, voice_accounts);
        if capacity_sufficient(voice_capacity, input.concurrent_sessions) {
            score += CONCURRENCY_BONUS;
        }
    }

    if voice_agent.is_some() || avatar_plan.has_inbuilt_voice {
        score += VOICE_BONUS;
    }

    // Running several accounts is operational overhead
    if avatar_accounts > 1 {
        score -= EXTRA_ACCOUNT_PENALTY * (avatar_accounts - 1) as f64;
    }
    if voice_accounts > 1 {
        score -= EXTRA_ACCOUNT_PENALTY * (voice_accounts - 1) as f64;
    }

    score
}

/// Sort combinations best-first
///
/// The sort is stable, so equally scored candidates keep their evaluation
/// order and repeated runs produce identical output.
pub fn rank(combinations: &mut [Combination]) {
    combinations.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn input_with_sessions(concurrent_sessions: u32) -> BudgetInput {
        BudgetInput {
            monthly_budget_inr: 100_000.0,
            api_allocation_percent: 60.0,
            hosting_allocation_percent: 40.0,
            users: 50,
            concurrent_sessions,
            minutes_per_month: 1000.0,
            use_voice_agent: true,
        }
    }

    fn heygen_pro() -> AvatarPlan {
        default_catalog().avatar_plans[0].clone() // concurrency 3, inbuilt voice
    }

    #[test]
    fn test_fits_budget_offset() {
        let input = input_with_sessions(2);
        let plan = heygen_pro();
        let fitting = score_combination(&plan, 1, None, 1, &input, 10_000.0, true);
        let breaching = score_combination(&plan, 1, None, 1, &input, 10_000.0, false);
        assert_eq!(fitting - breaching, 1000.0);
    }

    #[test]
    fn test_cost_penalty_is_monotonic() {
        let input = input_with_sessions(2);
        let plan = heygen_pro();
        let cheap = score_combination(&plan, 1, None, 1, &input, 5_000.0, true);
        let pricey = score_combination(&plan, 1, None, 1, &input, 20_000.0, true);
        assert!(cheap > pricey);
        assert!((cheap - pricey - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_avatar_concurrency_loses_bonus() {
        let plan = heygen_pro(); // capacity 3
        let ok = score_combination(&plan, 1, None, 1, &input_with_sessions(3), 0.0, false);
        let short = score_combination(&plan, 1, None, 1, &input_with_sessions(4), 0.0, false);
        assert_eq!(ok - short, 100.0);
    }

    #[test]
    fn test_unlimited_avatar_concurrency_gets_bonus() {
        let mut plan = heygen_pro();
        plan.concurrency = None;
        let score = score_combination(&plan, 1, None, 1, &input_with_sessions(10_000), 0.0, false);
        // unlimited capacity bonus + inbuilt voice bonus
        assert_eq!(score, 150.0);
    }

    #[test]
    fn test_voice_bonus_for_inbuilt_and_agent() {
        let input = input_with_sessions(2);
        let agent = default_catalog().voice_agents[1].clone(); // hume-startup, cap 10
        let mut mute_plan = heygen_pro();
        mute_plan.has_inbuilt_voice = false;
        mute_plan.concurrency = None;

        let with_agent = score_combination(&mute_plan, 1, Some(&agent), 1, &input, 0.0, false);
        let without = score_combination(&mute_plan, 1, None, 1, &input, 0.0, false);
        // +50 voice present, +100 voice concurrency sufficient
        assert_eq!(with_agent - without, 150.0);
    }

    #[test]
    fn test_multi_account_penalty() {
        let input = input_with_sessions(2);
        let plan = heygen_pro();
        let single = score_combination(&plan, 1, None, 1, &input, 0.0, false);
        let double = score_combination(&plan, 2, None, 1, &input, 0.0, false);
        assert_eq!(single - double, 25.0);
    }

    #[test]
    fn test_rank_is_descending() {
        let catalog = default_catalog();
        let input = input_with_sessions(2);
        let mut combinations: Vec<Combination> = catalog
            .hosting_options
            .iter()
            .map(|hosting| {
                crate::core::engine::evaluator::evaluate_combination(
                    catalog,
                    &catalog.avatar_plans[0],
                    1,
                    None,
                    1,
                    hosting,
                    &input,
                )
            })
            .collect();
        rank(&mut combinations);
        for pair in combinations.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
