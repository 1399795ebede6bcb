//! Sample-floor and threshold handling on top of a `ConfidenceModel`.

use std::fmt;

use invar_core::config::ConfidenceConfig;

use super::beta::BetaPosterior;
use super::ramp::SaturatingRamp;
use super::types::{clamp_score, ConfidenceScore, ConfidenceTier};

/// Maps a sample count to a score in [0, 1). Implementations must be
/// non-decreasing in `samples`.
pub trait ConfidenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn score(&self, samples: u64) -> f64;
}

/// Turns sample counts into `ConfidenceScore`s.
///
/// Below `min_samples` the tier is always `Insufficient` and the value is
/// held under `justified_threshold`, so a thinly observed invariant never
/// looks conclusive.
#[derive(Debug)]
pub struct ConfidenceEstimator {
    model: Box<dyn ConfidenceModel>,
    min_samples: u64,
    justified_threshold: f64,
}

impl ConfidenceEstimator {
    pub fn new(model: Box<dyn ConfidenceModel>, min_samples: u64, justified_threshold: f64) -> Self {
        Self {
            model,
            min_samples,
            justified_threshold,
        }
    }

    /// Build from config. Unknown model names fall back to the beta model;
    /// `InvarConfig::validate` rejects them before this point.
    pub fn from_config(config: &ConfidenceConfig) -> Self {
        let min_samples = config.effective_min_samples();
        let model: Box<dyn ConfidenceModel> = match config.effective_model() {
            "ramp" => Box::new(SaturatingRamp::new(min_samples)),
            _ => Box::new(BetaPosterior::new(config.effective_chance_rate())),
        };
        tracing::debug!(
            model = model.name(),
            min_samples,
            justified_threshold = config.effective_justified_threshold(),
            "confidence estimator configured"
        );
        Self::new(model, min_samples, config.effective_justified_threshold())
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    pub fn min_samples(&self) -> u64 {
        self.min_samples
    }

    pub fn justified_threshold(&self) -> f64 {
        self.justified_threshold
    }

    pub fn estimate(&self, samples: u64) -> ConfidenceScore {
        let raw = clamp_score(self.model.score(samples));

        if samples < self.min_samples {
            return ConfidenceScore {
                value: raw.min(self.provisional_cap()),
                samples,
                tier: ConfidenceTier::Insufficient,
            };
        }

        let tier = if raw >= self.justified_threshold {
            ConfidenceTier::Justified
        } else {
            ConfidenceTier::Tentative
        };
        ConfidenceScore {
            value: raw,
            samples,
            tier,
        }
    }

    /// Largest value reported below the sample floor.
    fn provisional_cap(&self) -> f64 {
        (self.justified_threshold - f64::EPSILON).max(0.0)
    }
}

impl Default for ConfidenceEstimator {
    fn default() -> Self {
        Self::from_config(&ConfidenceConfig::default())
    }
}
