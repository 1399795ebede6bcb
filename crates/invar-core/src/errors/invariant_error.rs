//! Invariant evaluation and reload errors.
//!
//! Every variant except `UnknownRelation` is a programmer-error contract
//! violation: the caller broke a precondition and the pipeline must not
//! retry or paper over it.

use super::error_code::{self, InvarErrorCode};

/// Errors raised by binary invariant evaluation, construction and reload.
#[derive(Debug, thiserror::Error)]
pub enum InvariantError {
    #[error("Evaluation requested on falsified invariant {relation}")]
    EvaluatedFalsified { relation: String },

    #[error("Change indicator {value} outside [0, 4)")]
    InvalidChangeIndicator { value: u8 },

    #[error("Malformed slot permutation {permutation:?}: expected a permutation of [0, 1]")]
    MalformedPermutation { permutation: Vec<usize> },

    #[error("Slot {index} out of range for program point {ppt} with {len} variables")]
    InvalidSlots { ppt: String, index: usize, len: usize },

    #[error("No relation registered under kind '{0}'")]
    UnknownRelation(String),
}

impl InvariantError {
    /// True for errors that signal a broken caller contract.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::UnknownRelation(_))
    }
}

impl InvarErrorCode for InvariantError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EvaluatedFalsified { .. }
            | Self::InvalidChangeIndicator { .. }
            | Self::MalformedPermutation { .. } => error_code::CONTRACT_VIOLATION,
            Self::InvalidSlots { .. } => error_code::INVALID_SLOTS,
            Self::UnknownRelation(_) => error_code::UNKNOWN_RELATION,
        }
    }
}
