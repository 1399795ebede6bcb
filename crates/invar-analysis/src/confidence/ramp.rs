//! Closed-form saturating ramp `n / (n + k)`.

use super::estimator::ConfidenceModel;
use super::types::clamp_score;

/// Reaches 0.5 at `half_point` samples and approaches 1 from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaturatingRamp {
    half_point: u64,
}

impl SaturatingRamp {
    /// A `half_point` of zero is treated as one.
    pub fn new(half_point: u64) -> Self {
        Self {
            half_point: half_point.max(1),
        }
    }

    pub fn half_point(&self) -> u64 {
        self.half_point
    }
}

impl ConfidenceModel for SaturatingRamp {
    fn name(&self) -> &'static str {
        "ramp"
    }

    fn score(&self, samples: u64) -> f64 {
        let n = samples as f64;
        clamp_score(n / (n + self.half_point as f64))
    }
}
