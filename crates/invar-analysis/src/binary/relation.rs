//! The relation strategy trait implemented by every concrete two-sequence
//! invariant.

use serde::Serialize;
use std::fmt;

/// Identity of a concrete relation. Two instances with the same kind and
/// orientation state the same formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RelationKind(&'static str);

impl RelationKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Outcome of evaluating one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InvariantStatus {
    /// The observation agrees with the hypothesis.
    Consistent,
    /// The observation contradicts the hypothesis. The caller falsifies.
    Falsified,
    /// Nothing new to evaluate (operands unchanged since last observation).
    NoChange,
}

impl InvariantStatus {
    pub fn is_falsified(self) -> bool {
        matches!(self, Self::Falsified)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::Falsified => "falsified",
            Self::NoChange => "no_change",
        }
    }
}

impl fmt::Display for InvariantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a relation wants to be repaired when its slots come back swapped
/// after a reload.
#[derive(Debug)]
pub enum SwapRepair {
    /// Toggle the instance's orientation.
    Flip,
    /// Leave everything as is.
    Keep,
    /// Substitute this relation (typically the converse) and keep the
    /// orientation.
    Replace(Box<dyn SequenceRelation>),
}

/// A concrete relation between two scalar sequences.
///
/// Implementations see operands as `(v1, v2)` already ordered by the
/// instance's orientation and must never reason about raw slot order.
/// Only `check_modified` is required.
///
/// `check_*` paths test an observation without touching relation state;
/// `add_*` paths test it and may update state.
pub trait SequenceRelation: Send + Sync + fmt::Debug {
    fn kind(&self) -> RelationKind;

    /// Symmetric relations need one instance per pair and ignore swaps.
    fn is_symmetric(&self) -> bool {
        false
    }

    /// Evaluate an observation where at least one operand changed.
    fn check_modified(&self, v1: &[i64], v2: &[i64], count: u32) -> InvariantStatus;

    /// Evaluate an observation where neither operand changed.
    fn check_unmodified(&self, _v1: &[i64], _v2: &[i64], _count: u32) -> InvariantStatus {
        InvariantStatus::NoChange
    }

    fn add_modified(&mut self, v1: &[i64], v2: &[i64], count: u32) -> InvariantStatus {
        self.check_modified(v1, v2, count)
    }

    fn add_unmodified(&mut self, _v1: &[i64], _v2: &[i64], _count: u32) -> InvariantStatus {
        InvariantStatus::NoChange
    }

    /// Repair to apply when a reload swapped the two slots.
    fn resurrect_swapped(&self) -> SwapRepair {
        if self.is_symmetric() {
            SwapRepair::Keep
        } else {
            SwapRepair::Flip
        }
    }

    /// Extra repair when a reload kept the slot order. Rarely needed.
    fn resurrect_unswapped(&mut self) {}

    /// Human-readable formula over the first and second operand names.
    fn format_formula(&self, v1: &str, v2: &str) -> String {
        format!("{}({}, {})", self.kind(), v1, v2)
    }
}
