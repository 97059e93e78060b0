//! Combination Builder
//!
//! Enumerates the candidate space of (plan, account-count) selections for
//! avatars and voice agents. Besides single-account selections it emits
//! synthetic two-account "combo" plans that aggregate two same-provider
//! entries into one logical unit. Combos are marked with an explicit
//! `composite` flag at construction time; the `"a+b"` id is display only.

use tracing::debug;

use crate::catalog::{AvatarPlan, Catalog, PricingModel, VoiceAgent};

/// An avatar plan choice with its account multiplicity
#[derive(Debug, Clone)]
pub struct AvatarSelection {
    pub plan: AvatarPlan,
    pub accounts: u32,
}

/// A voice agent choice with its account multiplicity
#[derive(Debug, Clone)]
pub struct VoiceSelection {
    pub agent: VoiceAgent,
    pub accounts: u32,
}

/// Enumerate avatar candidates: every positively-priced plan as a single
/// account, plus a two-account combo for every unordered same-provider pair
/// (self-pairing allowed)
pub fn avatar_selections(catalog: &Catalog) -> Vec<AvatarSelection> {
    let eligible: Vec<&AvatarPlan> = catalog
        .avatar_plans
        .iter()
        .filter(|p| p.monthly_price_usd > 0.0)
        .collect();

    let mut selections = Vec::new();
    for plan in &eligible {
        selections.push(AvatarSelection {
            plan: (*plan).clone(),
            accounts: 1,
        });
    }

    for i in 0..eligible.len() {
        for j in i..eligible.len() {
            let (a, b) = (eligible[i], eligible[j]);
            if a.provider != b.provider {
                continue;
            }
            selections.push(AvatarSelection {
                plan: aggregate_avatar_pair(a, b),
                accounts: 2,
            });
        }
    }

    debug!(candidates = selections.len(), "Built avatar selections");
    selections
}

/// Enumerate voice candidates: every agent as a single account, plus a
/// two-account combo for every unordered same-family pair of per-minute
/// agents (self-pairing allowed). Token and per-minute-per-concurrency
/// agents never aggregate.
pub fn voice_selections(catalog: &Catalog) -> Vec<VoiceSelection> {
    let agents = &catalog.voice_agents;

    let mut selections = Vec::new();
    for agent in agents {
        selections.push(VoiceSelection {
            agent: agent.clone(),
            accounts: 1,
        });
    }

    for i in 0..agents.len() {
        for j in i..agents.len() {
            let (a, b) = (&agents[i], &agents[j]);
            if a.family != b.family {
                continue;
            }
            let (Some(terms_a), Some(terms_b)) = (per_minute_terms(a), per_minute_terms(b)) else {
                continue;
            };
            selections.push(VoiceSelection {
                agent: aggregate_per_minute_pair(a, b, terms_a, terms_b),
                accounts: 2,
            });
        }
    }

    debug!(candidates = selections.len(), "Built voice selections");
    selections
}

/// Rate and monthly floor of a per-minute agent, or `None` for other models
fn per_minute_terms(agent: &VoiceAgent) -> Option<(f64, f64)> {
    match agent.pricing {
        PricingModel::PerMinute {
            rate_per_minute_usd,
            monthly_minimum_usd,
        } => Some((rate_per_minute_usd, monthly_minimum_usd.unwrap_or(0.0))),
        _ => None,
    }
}

/// Aggregate two same-provider avatar plans into one two-account unit
///
/// Price and included minutes sum; the overage rate takes the better of the
/// pair; capacity sums unless either side is unlimited; the session cap is
/// the larger defined value unless either side is uncapped; inbuilt voice
/// survives only if both constituents have it.
fn aggregate_avatar_pair(a: &AvatarPlan, b: &AvatarPlan) -> AvatarPlan {
    let concurrency = match (a.concurrency, b.concurrency) {
        (Some(x), Some(y)) => Some(x + y),
        _ => None,
    };
    let max_session_minutes = match (a.max_session_minutes, b.max_session_minutes) {
        (Some(x), Some(y)) => Some(x.max(y)),
        _ => None,
    };

    AvatarPlan {
        id: format!("{}+{}", a.id, b.id),
        name: format!(
            "{} combo: {} + {}",
            a.provider.to_uppercase(),
            a.name,
            b.name
        ),
        provider: a.provider.clone(),
        tier: "Combo".to_string(),
        monthly_price_usd: a.monthly_price_usd + b.monthly_price_usd,
        included_minutes: a.included_minutes + b.included_minutes,
        overage_per_minute_usd: a.overage_per_minute_usd.min(b.overage_per_minute_usd),
        concurrency,
        max_session_minutes,
        has_inbuilt_voice: a.has_inbuilt_voice && b.has_inbuilt_voice,
        composite: true,
    }
}

/// Aggregate two same-family per-minute voice agents into one two-account
/// unit: best rate of the pair, summed monthly floors, summed capacity
/// unless either side is unlimited
fn aggregate_per_minute_pair(
    a: &VoiceAgent,
    b: &VoiceAgent,
    (rate_a, min_a): (f64, f64),
    (rate_b, min_b): (f64, f64),
) -> VoiceAgent {
    let concurrency = match (a.concurrency, b.concurrency) {
        (Some(x), Some(y)) => Some(x + y),
        _ => None,
    };

    VoiceAgent {
        id: format!("{}+{}", a.id, b.id),
        name: format!("{} combo: {} + {}", a.family, a.name, b.name),
        family: a.family.clone(),
        pricing: PricingModel::PerMinute {
            rate_per_minute_usd: rate_a.min(rate_b),
            monthly_minimum_usd: Some(min_a + min_b),
        },
        concurrency,
        composite: true,
    }
}
