//! Catalog loading
//!
//! Catalogs are plain YAML files. A built-in default catalog keeps the
//! binary usable without any configuration.

use std::path::Path;

use chrono::Utc;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::catalog::currency::CurrencyConverter;
use crate::catalog::types::{AvatarPlan, Catalog, HostingOption, PricingModel, VoiceAgent};
use crate::utils::error::{PlancostError, Result};

impl Catalog {
    /// Load a catalog from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Catalog> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PlancostError::Io)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a catalog from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Catalog> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validate()?;

        debug!(
            avatar_plans = catalog.avatar_plans.len(),
            voice_agents = catalog.voice_agents.len(),
            hosting_options = catalog.hosting_options.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Reject catalogs with negative rates or a non-positive exchange rate
    ///
    /// Empty lists are fine: an empty catalog yields an empty result list.
    pub fn validate(&self) -> Result<()> {
        for plan in &self.avatar_plans {
            if plan.monthly_price_usd < 0.0
                || plan.included_minutes < 0.0
                || plan.overage_per_minute_usd < 0.0
            {
                return Err(PlancostError::catalog(format!(
                    "avatar plan '{}' has a negative rate field",
                    plan.id
                )));
            }
        }
        for agent in &self.voice_agents {
            let negative = match &agent.pricing {
                PricingModel::Tokens {
                    tokens_per_minute,
                    price_per_million_tokens_usd,
                } => {
                    *price_per_million_tokens_usd < 0.0
                        || tokens_per_minute.is_some_and(|t| t < 0.0)
                }
                PricingModel::PerMinute {
                    rate_per_minute_usd,
                    monthly_minimum_usd,
                } => *rate_per_minute_usd < 0.0 || monthly_minimum_usd.is_some_and(|m| m < 0.0),
                PricingModel::PerMinutePerConcurrency { rate_per_minute_usd } => {
                    *rate_per_minute_usd < 0.0
                }
            };
            if negative {
                return Err(PlancostError::catalog(format!(
                    "voice agent '{}' has a negative rate field",
                    agent.id
                )));
            }
        }
        for hosting in &self.hosting_options {
            if hosting.base_monthly_inr < 0.0
                || hosting.per_user_inr < 0.0
                || hosting.per_call_inr < 0.0
            {
                return Err(PlancostError::catalog(format!(
                    "hosting option '{}' has a negative rate field",
                    hosting.id
                )));
            }
        }
        if self.converter.inr_per_usd <= 0.0 {
            return Err(PlancostError::catalog(
                "exchange rate inr_per_usd must be positive",
            ));
        }
        if self.misc_monthly_inr < 0.0 {
            return Err(PlancostError::catalog(
                "misc_monthly_inr must be non-negative",
            ));
        }
        Ok(())
    }
}

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    avatar_plans: vec![
        AvatarPlan {
            id: "heygen-pro".to_string(),
            name: "HeyGen Pro".to_string(),
            provider: "heygen".to_string(),
            tier: "Pro".to_string(),
            monthly_price_usd: 99.0,
            included_minutes: 100.0,
            overage_per_minute_usd: 0.99,
            concurrency: Some(3),
            max_session_minutes: Some(30.0),
            has_inbuilt_voice: true,
            composite: false,
        },
        AvatarPlan {
            id: "heygen-scale".to_string(),
            name: "HeyGen Scale".to_string(),
            provider: "heygen".to_string(),
            tier: "Scale".to_string(),
            monthly_price_usd: 330.0,
            included_minutes: 400.0,
            overage_per_minute_usd: 0.79,
            concurrency: Some(6),
            max_session_minutes: Some(60.0),
            has_inbuilt_voice: true,
            composite: false,
        },
        AvatarPlan {
            id: "akool-pro".to_string(),
            name: "Akool Pro".to_string(),
            provider: "akool".to_string(),
            tier: "Pro".to_string(),
            monthly_price_usd: 89.0,
            included_minutes: 120.0,
            overage_per_minute_usd: 0.80,
            concurrency: Some(2),
            max_session_minutes: Some(20.0),
            has_inbuilt_voice: false,
            composite: false,
        },
        AvatarPlan {
            id: "akool-business".to_string(),
            name: "Akool Business".to_string(),
            provider: "akool".to_string(),
            tier: "Business".to_string(),
            monthly_price_usd: 500.0,
            included_minutes: 750.0,
            overage_per_minute_usd: 0.65,
            concurrency: None,
            max_session_minutes: None,
            has_inbuilt_voice: true,
            composite: false,
        },
    ],
    voice_agents: vec![
        VoiceAgent {
            id: "hume-creator".to_string(),
            name: "Hume Creator".to_string(),
            family: "hume".to_string(),
            pricing: PricingModel::PerMinute {
                rate_per_minute_usd: 0.08,
                monthly_minimum_usd: Some(50.0),
            },
            concurrency: Some(5),
            composite: false,
        },
        VoiceAgent {
            id: "hume-startup".to_string(),
            name: "Hume Startup".to_string(),
            family: "hume".to_string(),
            pricing: PricingModel::PerMinute {
                rate_per_minute_usd: 0.06,
                monthly_minimum_usd: Some(70.0),
            },
            concurrency: Some(10),
            composite: false,
        },
        VoiceAgent {
            id: "openai-realtime".to_string(),
            name: "OpenAI Realtime".to_string(),
            family: "openai".to_string(),
            pricing: PricingModel::Tokens {
                tokens_per_minute: None,
                price_per_million_tokens_usd: 20.0,
            },
            concurrency: None,
            composite: false,
        },
        VoiceAgent {
            id: "grok-voice".to_string(),
            name: "Grok Voice".to_string(),
            family: "grok".to_string(),
            pricing: PricingModel::PerMinutePerConcurrency {
                rate_per_minute_usd: 0.05,
            },
            concurrency: Some(20),
            composite: false,
        },
    ],
    hosting_options: vec![
        HostingOption {
            id: "vps-basic".to_string(),
            name: "Basic VPS".to_string(),
            base_monthly_inr: 800.0,
            per_user_inr: 5.0,
            per_call_inr: 0.5,
        },
        HostingOption {
            id: "cloud-managed".to_string(),
            name: "Managed Cloud".to_string(),
            base_monthly_inr: 2500.0,
            per_user_inr: 10.0,
            per_call_inr: 2.0,
        },
    ],
    converter: CurrencyConverter { inr_per_usd: 88.0 },
    misc_monthly_inr: 2000.0,
    updated_at: Utc::now(),
});

/// The built-in catalog used when no catalog file is supplied
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}
