//! Formula identity and diagnostic rendering.

use invar_core::types::FxHashSet;

use super::invariant::BinaryInvariant;
use super::orientation::Orientation;
use super::relation::RelationKind;
use crate::slots::ProgramPoint;

/// Structural identity of an instance: which relation, in which
/// orientation. Accumulated evidence is not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormulaKey {
    pub kind: RelationKind,
    pub orientation: Orientation,
}

impl BinaryInvariant {
    pub fn formula_key(&self) -> FormulaKey {
        FormulaKey {
            kind: self.kind(),
            orientation: self.orientation,
        }
    }

    /// True when both instances state the same formula: same relation kind
    /// and same orientation. Sample counts and relation state are ignored.
    pub fn is_same_formula(&self, other: &BinaryInvariant) -> bool {
        self.formula_key() == other.formula_key()
    }

    /// Debug representation: relation kind, operand names in orientation
    /// order, and the orientation flag. Not an identity.
    pub fn repr(&self, ppt: &ProgramPoint) -> String {
        let (v1, v2) = self.operand_names(ppt);
        format!("{} ({}, {}) [{}]", self.kind(), v1, v2, self.orientation)
    }

    /// Human-readable formula, e.g. `a[] is a subsequence of b[]`.
    pub fn format(&self, ppt: &ProgramPoint) -> String {
        let (v1, v2) = self.operand_names(ppt);
        self.relation.format_formula(v1, v2)
    }

    fn operand_names<'a>(&self, ppt: &'a ProgramPoint) -> (&'a str, &'a str) {
        let v1 = self.var1(ppt).map_or("<unbound>", |v| ppt.var_name(v));
        let v2 = self.var2(ppt).map_or("<unbound>", |v| ppt.var_name(v));
        (v1, v2)
    }
}

/// Keep the first instance of each formula, preserving input order.
pub fn dedup_same_formula(instances: Vec<BinaryInvariant>) -> Vec<BinaryInvariant> {
    let mut seen = FxHashSet::default();
    instances
        .into_iter()
        .filter(|inv| seen.insert(inv.formula_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::{SeqEqual, SubSequence};
    use crate::slots::{BaseType, RepType, VarIndex};

    fn ppt() -> ProgramPoint {
        let mut ppt = ProgramPoint::new("Queue.drain:::EXIT");
        ppt.add_var("this.items", RepType::sequence(BaseType::Int));
        ppt.add_var("return", RepType::sequence(BaseType::Int));
        ppt
    }

    const SLOTS: [VarIndex; 2] = [VarIndex(0), VarIndex(1)];

    fn sub(o: Orientation) -> BinaryInvariant {
        BinaryInvariant::new(Box::new(SubSequence), SLOTS, o)
    }

    #[test]
    fn test_same_formula_requires_kind_and_orientation() {
        let a = sub(Orientation::Forward);
        let b = sub(Orientation::Forward);
        let c = sub(Orientation::Swapped);
        let d = BinaryInvariant::new(Box::new(SeqEqual), SLOTS, Orientation::Forward);
        assert!(a.is_same_formula(&b));
        assert!(!a.is_same_formula(&c));
        assert!(!a.is_same_formula(&d));
    }

    #[test]
    fn test_same_formula_ignores_samples() {
        let mut a = sub(Orientation::Forward);
        let b = sub(Orientation::Forward);
        a.add(&[1], &[1, 2], 3, 40).unwrap();
        assert_ne!(a.sample_count(), b.sample_count());
        assert!(a.is_same_formula(&b));
    }

    #[test]
    fn test_repr_follows_orientation() {
        let ppt = ppt();
        assert_eq!(
            sub(Orientation::Forward).repr(&ppt),
            "sub_sequence (this.items, return) [swap=false]"
        );
        assert_eq!(
            sub(Orientation::Swapped).repr(&ppt),
            "sub_sequence (return, this.items) [swap=true]"
        );
    }

    #[test]
    fn test_format_uses_relation_text() {
        let ppt = ppt();
        assert_eq!(
            sub(Orientation::Swapped).format(&ppt),
            "return is a subsequence of this.items"
        );
    }

    #[test]
    fn test_dedup_keeps_first_of_each_formula() {
        let mut first = sub(Orientation::Forward);
        first.add(&[1], &[1], 1, 9).unwrap();
        let instances = vec![
            first,
            sub(Orientation::Swapped),
            sub(Orientation::Forward),
            BinaryInvariant::new(Box::new(SeqEqual), SLOTS, Orientation::Forward),
        ];
        let kept = dedup_same_formula(instances);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].sample_count(), 9);
        assert!(kept[1].orientation_is_swapped());
        assert_eq!(kept[2].kind(), SeqEqual::KIND);
    }
}
