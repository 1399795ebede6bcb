//! Core types for confidence scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest score any model may report. Scores never reach 1.0.
pub const MAX_SCORE: f64 = 1.0 - f64::EPSILON;

/// Confidence in one invariant instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScore {
    /// Score in [0, 1).
    pub value: f64,
    /// Sample count the score was computed from.
    pub samples: u64,
    pub tier: ConfidenceTier,
}

impl ConfidenceScore {
    pub fn is_justified(&self) -> bool {
        self.tier == ConfidenceTier::Justified
    }
}

/// Graduated confidence tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceTier {
    /// Fewer samples than the configured floor. Never conclusive.
    Insufficient,
    /// Enough samples, score below the justification threshold.
    Tentative,
    /// Enough samples, score at or above the justification threshold.
    Justified,
}

impl ConfidenceTier {
    /// Tier name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insufficient => "insufficient",
            Self::Tentative => "tentative",
            Self::Justified => "justified",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clamp a raw model output into [0, MAX_SCORE]. NaN maps to 0.
pub(crate) fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, MAX_SCORE)
}
