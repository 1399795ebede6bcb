//! Contiguous subsequence relation.

use crate::binary::{InvariantStatus, RelationKind, SequenceRelation};

/// `v1` occurs as a contiguous run inside `v2`.
///
/// Not symmetric, so every pair gets a forward and a swapped instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubSequence;

impl SubSequence {
    pub const KIND: RelationKind = RelationKind::new("sub_sequence");
}

fn is_subarray(needle: &[i64], haystack: &[i64]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

impl SequenceRelation for SubSequence {
    fn kind(&self) -> RelationKind {
        Self::KIND
    }

    fn check_modified(&self, v1: &[i64], v2: &[i64], _count: u32) -> InvariantStatus {
        if is_subarray(v1, v2) {
            InvariantStatus::Consistent
        } else {
            InvariantStatus::Falsified
        }
    }

    fn format_formula(&self, v1: &str, v2: &str) -> String {
        format!("{} is a subsequence of {}", v1, v2)
    }
}
