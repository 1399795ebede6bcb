//! Lexicographic ordering between sequences, as a converse pair.
//!
//! Instead of relying on orientation, a swapped reload replaces `<` with
//! `>` (and back), so the stated formula keeps the operands in slot order.

use crate::binary::{InvariantStatus, RelationKind, SequenceRelation, SwapRepair};

/// `v1 < v2` lexicographically.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexLessThan;

/// `v1 > v2` lexicographically.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexGreaterThan;

impl LexLessThan {
    pub const KIND: RelationKind = RelationKind::new("lex_less_than");
}

impl LexGreaterThan {
    pub const KIND: RelationKind = RelationKind::new("lex_greater_than");
}

fn status(holds: bool) -> InvariantStatus {
    if holds {
        InvariantStatus::Consistent
    } else {
        InvariantStatus::Falsified
    }
}

impl SequenceRelation for LexLessThan {
    fn kind(&self) -> RelationKind {
        Self::KIND
    }

    fn check_modified(&self, v1: &[i64], v2: &[i64], _count: u32) -> InvariantStatus {
        status(v1 < v2)
    }

    fn resurrect_swapped(&self) -> SwapRepair {
        SwapRepair::Replace(Box::new(LexGreaterThan))
    }

    fn format_formula(&self, v1: &str, v2: &str) -> String {
        format!("{} < {} (lexically)", v1, v2)
    }
}

impl SequenceRelation for LexGreaterThan {
    fn kind(&self) -> RelationKind {
        Self::KIND
    }

    fn check_modified(&self, v1: &[i64], v2: &[i64], _count: u32) -> InvariantStatus {
        status(v1 > v2)
    }

    fn resurrect_swapped(&self) -> SwapRepair {
        SwapRepair::Replace(Box::new(LexLessThan))
    }

    fn format_formula(&self, v1: &str, v2: &str) -> String {
        format!("{} > {} (lexically)", v1, v2)
    }
}
