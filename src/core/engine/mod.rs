//! Combination engine
//!
//! Single-shot, synchronous pipeline: the builder enumerates candidate
//! plan selections, the evaluator prices every (avatar, voice, hosting)
//! cross product, the filter drops structurally impossible candidates,
//! and the scorer ranks what remains. Pure over its inputs: the same
//! catalog and budget always produce the same ordered output.

pub mod builder;
pub mod evaluator;
pub mod filter;
pub mod scorer;
pub mod types;

pub use builder::{avatar_selections, voice_selections, AvatarSelection, VoiceSelection};
pub use evaluator::evaluate_combination;
pub use filter::is_viable;
pub use scorer::{rank, score_combination};
pub use types::{BudgetInput, Combination, CostBreakdown};

use tracing::debug;

use crate::catalog::Catalog;

/// Evaluate the full candidate space and return viable combinations ranked
/// best-first
pub fn rank_combinations(catalog: &Catalog, input: &BudgetInput) -> Vec<Combination> {
    let avatars = avatar_selections(catalog);
    let voices = voice_selections(catalog);

    let mut combinations = Vec::new();
    for avatar in &avatars {
        for hosting in &catalog.hosting_options {
            if input.use_voice_agent {
                for voice in &voices {
                    combinations.push(evaluate_combination(
                        catalog,
                        &avatar.plan,
                        avatar.accounts,
                        Some(&voice.agent),
                        voice.accounts,
                        hosting,
                        input,
                    ));
                }
            } else {
                combinations.push(evaluate_combination(
                    catalog,
                    &avatar.plan,
                    avatar.accounts,
                    None,
                    1,
                    hosting,
                    input,
                ));
            }
        }
    }

    let evaluated = combinations.len();
    combinations.retain(|c| is_viable(c, input));
    rank(&mut combinations);

    debug!(
        evaluated,
        viable = combinations.len(),
        "Ranked combinations"
    );
    combinations
}
