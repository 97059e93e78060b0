//! Fixed-rate currency conversion
//!
//! The engine computes API costs in USD (the reference currency of the
//! upstream price sheets) and reports everything in INR for display. The
//! rate is part of the catalog, not a process-wide constant.

use serde::{Deserialize, Serialize};

/// Conversion between the reference currency (USD) and the local display
/// currency (INR)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurrencyConverter {
    /// INR per one USD
    pub inr_per_usd: f64,
}

impl CurrencyConverter {
    /// Convert a USD amount to INR
    pub fn to_inr(&self, usd: f64) -> f64 {
        usd * self.inr_per_usd
    }

    /// Convert an INR amount to USD
    pub fn to_usd(&self, inr: f64) -> f64 {
        if self.inr_per_usd > 0.0 {
            inr / self.inr_per_usd
        } else {
            0.0
        }
    }
}
