//! Beta posterior over the rate at which a relation holds.
//!
//! Prior: Beta(1, 1). After `n` samples that were all consistent the
//! posterior is Beta(1 + n, 1). The score is the posterior probability
//! that the holding rate exceeds `chance_rate`, the rate at which an
//! unrelated pair of sequences would satisfy the relation anyway.

use statrs::distribution::{Beta, ContinuousCDF};

use super::estimator::ConfidenceModel;
use super::types::clamp_score;

/// Above this alpha the posterior mass beyond any sane chance rate is
/// indistinguishable from 1.
const SATURATION_ALPHA: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaPosterior {
    chance_rate: f64,
}

impl BetaPosterior {
    /// `chance_rate` must lie strictly inside (0, 1); config validation
    /// guarantees this for configured models. Out-of-range values fall
    /// back to 0.5.
    pub fn new(chance_rate: f64) -> Self {
        let chance_rate = if chance_rate > 0.0 && chance_rate < 1.0 {
            chance_rate
        } else {
            0.5
        };
        Self { chance_rate }
    }

    pub fn chance_rate(&self) -> f64 {
        self.chance_rate
    }

    /// Posterior parameters (alpha, beta) after `samples` consistent samples.
    pub fn posterior_params(samples: u64) -> (f64, f64) {
        (1.0 + samples as f64, 1.0)
    }
}

impl Default for BetaPosterior {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ConfidenceModel for BetaPosterior {
    fn name(&self) -> &'static str {
        "beta"
    }

    fn score(&self, samples: u64) -> f64 {
        let (alpha, beta_param) = Self::posterior_params(samples);
        if alpha > SATURATION_ALPHA {
            return clamp_score(1.0 - self.chance_rate.powf(alpha));
        }
        match Beta::new(alpha, beta_param) {
            Ok(dist) => {
                let below = dist.cdf(self.chance_rate);
                if below.is_finite() {
                    clamp_score(1.0 - below)
                } else {
                    0.0
                }
            }
            Err(_) => 0.0,
        }
    }
}
