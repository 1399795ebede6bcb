//! Confidence estimation from accumulated sample counts.
//!
//! A `ConfidenceModel` maps a sample count to a score in [0, 1); the
//! `ConfidenceEstimator` wraps a model with the minimum-sample floor and
//! the justification threshold from `ConfidenceConfig`.

pub mod beta;
pub mod estimator;
pub mod ramp;
pub mod types;

pub use beta::BetaPosterior;
pub use estimator::{ConfidenceEstimator, ConfidenceModel};
pub use ramp::SaturatingRamp;
pub use types::{ConfidenceScore, ConfidenceTier, MAX_SCORE};
