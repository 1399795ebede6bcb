//! Element-wise sequence equality.

use crate::binary::{InvariantStatus, RelationKind, SequenceRelation};

/// `v1 == v2`, element by element. Symmetric.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqEqual;

impl SeqEqual {
    pub const KIND: RelationKind = RelationKind::new("seq_equal");
}

impl SequenceRelation for SeqEqual {
    fn kind(&self) -> RelationKind {
        Self::KIND
    }

    fn is_symmetric(&self) -> bool {
        true
    }

    fn check_modified(&self, v1: &[i64], v2: &[i64], _count: u32) -> InvariantStatus {
        if v1 == v2 {
            InvariantStatus::Consistent
        } else {
            InvariantStatus::Falsified
        }
    }

    fn format_formula(&self, v1: &str, v2: &str) -> String {
        format!("{} == {}", v1, v2)
    }
}
