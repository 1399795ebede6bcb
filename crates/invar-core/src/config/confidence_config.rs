//! Confidence estimation configuration.

use serde::{Deserialize, Serialize};

/// Default minimum number of samples before a score counts as conclusive.
pub const DEFAULT_MIN_SAMPLES: u64 = 5;

/// Configuration for the confidence estimator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Minimum samples before a score can be conclusive. Default: 5.
    pub min_samples: Option<u64>,
    /// Score at or above which a conclusive invariant is justified. Default: 0.80.
    pub justified_threshold: Option<f64>,
    /// Scoring model: `"beta"` or `"ramp"`. Default: `"beta"`.
    pub model: Option<String>,
    /// Chance that an unrelated pair satisfies a relation on one sample,
    /// used by the beta model. Default: 0.5.
    pub chance_rate: Option<f64>,
}

impl ConfidenceConfig {
    /// Returns the effective minimum sample floor, defaulting to 5.
    pub fn effective_min_samples(&self) -> u64 {
        self.min_samples.unwrap_or(DEFAULT_MIN_SAMPLES)
    }

    /// Returns the effective justification threshold, defaulting to 0.80.
    pub fn effective_justified_threshold(&self) -> f64 {
        self.justified_threshold.unwrap_or(0.80)
    }

    /// Returns the effective model name, defaulting to `"beta"`.
    pub fn effective_model(&self) -> &str {
        self.model.as_deref().unwrap_or("beta")
    }

    /// Returns the effective chance rate, defaulting to 0.5.
    pub fn effective_chance_rate(&self) -> f64 {
        self.chance_rate.unwrap_or(0.5)
    }
}
