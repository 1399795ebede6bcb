//! Operand orientation and slot type validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::slots::VarInfo;

/// Whether an instance's first/second operands follow or reverse the raw
/// slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// First operand is slot 0, second is slot 1.
    #[default]
    Forward,
    /// First operand is slot 1, second is slot 0.
    Swapped,
}

impl Orientation {
    pub fn is_swapped(self) -> bool {
        matches!(self, Self::Swapped)
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Swapped,
            Self::Swapped => Self::Forward,
        }
    }

    /// Both orientations, forward first.
    pub fn both() -> [Orientation; 2] {
        [Self::Forward, Self::Swapped]
    }

    /// Reorder a raw `(slot 0, slot 1)` pair into `(first, second)`.
    #[inline]
    pub fn order<T>(self, a: T, b: T) -> (T, T) {
        match self {
            Self::Forward => (a, b),
            Self::Swapped => (b, a),
        }
    }

    /// The first operand of a raw pair.
    #[inline]
    pub fn first<T>(self, pair: [T; 2]) -> T {
        let [a, b] = pair;
        self.order(a, b).0
    }

    /// The second operand of a raw pair.
    #[inline]
    pub fn second<T>(self, pair: [T; 2]) -> T {
        let [a, b] = pair;
        self.order(a, b).1
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swap={}", self.is_swapped())
    }
}

/// Whether `vars` is a valid operand list for a two-sequence invariant:
/// exactly two variables, both sequences of scalars.
///
/// The answer does not depend on the order of `vars`.
pub fn valid_types(vars: &[&VarInfo]) -> bool {
    match vars {
        [a, b] => a.is_scalar_sequence() && b.is_scalar_sequence(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::{BaseType, ProgramPoint, RepType, VarIndex};

    fn shapes() -> ProgramPoint {
        let mut ppt = ProgramPoint::new("Shapes:::EXIT");
        ppt.add_var("ints", RepType::sequence(BaseType::Int));
        ppt.add_var("flags", RepType::sequence(BaseType::Boolean));
        ppt.add_var("chars", RepType::sequence(BaseType::Char));
        ppt.add_var("refs", RepType::sequence(BaseType::Hashcode));
        ppt.add_var("reals", RepType::sequence(BaseType::Double));
        ppt.add_var("names", RepType::sequence(BaseType::String));
        ppt.add_var("count", RepType::scalar(BaseType::Int));
        ppt.add_var(
            "grid",
            RepType {
                base: BaseType::Int,
                dimensions: 2,
            },
        );
        ppt
    }

    #[test]
    fn test_forward_keeps_order() {
        assert_eq!(Orientation::Forward.order('x', 'y'), ('x', 'y'));
        assert_eq!(Orientation::Forward.first(['x', 'y']), 'x');
        assert_eq!(Orientation::Forward.second(['x', 'y']), 'y');
    }

    #[test]
    fn test_swapped_reverses_order() {
        assert_eq!(Orientation::Swapped.order('x', 'y'), ('y', 'x'));
        assert_eq!(Orientation::Swapped.first(['x', 'y']), 'y');
        assert_eq!(Orientation::Swapped.second(['x', 'y']), 'x');
    }

    #[test]
    fn test_flip_is_involution() {
        for o in Orientation::both() {
            assert_ne!(o.flipped(), o);
            assert_eq!(o.flipped().flipped(), o);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Orientation::Forward.to_string(), "swap=false");
        assert_eq!(Orientation::Swapped.to_string(), "swap=true");
    }

    #[test]
    fn test_valid_types_accepts_every_scalar_base() {
        let ppt = shapes();
        let ints = ppt.var(VarIndex(0)).unwrap();
        for i in 0..4 {
            let other = ppt.var(VarIndex(i)).unwrap();
            assert!(valid_types(&[ints, other]), "{}", other.rep_type);
            assert!(valid_types(&[other, ints]), "{}", other.rep_type);
        }
    }

    #[test]
    fn test_valid_types_rejects_bad_shapes() {
        let ppt = shapes();
        let ints = ppt.var(VarIndex(0)).unwrap();
        // double[], String[], scalar int, int[][]
        for i in 4..8 {
            let other = ppt.var(VarIndex(i)).unwrap();
            assert!(!valid_types(&[ints, other]), "{}", other.rep_type);
            assert!(!valid_types(&[other, ints]), "{}", other.rep_type);
        }
    }

    #[test]
    fn test_valid_types_requires_exactly_two() {
        let ppt = shapes();
        let ints = ppt.var(VarIndex(0)).unwrap();
        let flags = ppt.var(VarIndex(1)).unwrap();
        assert!(!valid_types(&[]));
        assert!(!valid_types(&[ints]));
        assert!(!valid_types(&[ints, flags, ints]));
    }

    #[test]
    fn test_valid_types_ignores_order() {
        let ppt = shapes();
        let vars: Vec<_> = ppt.vars().iter().collect();
        for a in &vars {
            for b in &vars {
                assert_eq!(valid_types(&[*a, *b]), valid_types(&[*b, *a]));
            }
        }
    }
}
