//! Validity Filter
//!
//! Hard gate over evaluated combinations. Unlike the advisory warnings and
//! the budget-fit flag, failing any check here removes the candidate from
//! the output entirely: it physically cannot serve the requested load.

use crate::core::engine::evaluator::scaled_capacity;
use crate::core::engine::types::{BudgetInput, Combination};

/// Whether a combination can structurally serve the requested load
///
/// Excludes on: avatar capacity below the required concurrency, voice
/// capacity below the required concurrency, or no voice path at all
/// (no separate agent requested and no inbuilt voice on the plan).
/// Undefined capacity never excludes. Budget fit is not considered.
pub fn is_viable(combination: &Combination, input: &BudgetInput) -> bool {
    let avatar = &combination.avatar_plan;
    if let Some(capacity) =
        scaled_capacity(avatar.concurrency, avatar.composite, combination.avatar_accounts)
    {
        if input.concurrent_sessions > capacity {
            return false;
        }
    }

    if let Some(agent) = &combination.voice_agent {
        if let Some(capacity) =
            scaled_capacity(agent.concurrency, agent.composite, combination.voice_accounts)
        {
            if input.concurrent_sessions > capacity {
                return false;
            }
        }
    }

    if !input.use_voice_agent && !avatar.has_inbuilt_voice {
        return false;
    }

    true
}
