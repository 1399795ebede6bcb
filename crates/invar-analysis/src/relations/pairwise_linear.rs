//! Element-wise linear relation `v2[i] = a * v1[i] + b`.
//!
//! Integer coefficients only. The coefficients are learned from the
//! observations passed to `add`; `check` tests against what has been
//! learned so far without storing anything.

use crate::binary::{InvariantStatus, RelationKind, SequenceRelation};

/// What the relation has learned about the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinearFit {
    /// No element pairs seen yet.
    #[default]
    Empty,
    /// Only pairs with a single `x` seen so far.
    OnePoint { x: i64, y: i64 },
    /// Coefficients fixed.
    Line { a: i64, b: i64 },
}

impl LinearFit {
    /// Extend the fit with one `(x, y)` pair. `None` means the pair cannot
    /// lie on any integer line consistent with the fit.
    fn extend(self, x: i64, y: i64) -> Option<Self> {
        match self {
            Self::Empty => Some(Self::OnePoint { x, y }),
            Self::OnePoint { x: x0, y: y0 } => {
                if x == x0 {
                    return (y == y0).then_some(self);
                }
                let dy = i128::from(y) - i128::from(y0);
                let dx = i128::from(x) - i128::from(x0);
                if dy % dx != 0 {
                    return None;
                }
                let a = i64::try_from(dy / dx).ok()?;
                let b = i128::from(y0) - i128::from(a) * i128::from(x0);
                Some(Self::Line {
                    a,
                    b: i64::try_from(b).ok()?,
                })
            }
            Self::Line { a, b } => {
                let predicted = i128::from(a) * i128::from(x) + i128::from(b);
                (predicted == i128::from(y)).then_some(self)
            }
        }
    }
}

/// `v2[i] = a * v1[i] + b` for every index, with equal lengths.
#[derive(Debug, Clone, Default)]
pub struct PairwiseLinear {
    fit: LinearFit,
}

impl PairwiseLinear {
    pub const KIND: RelationKind = RelationKind::new("pairwise_linear");

    pub fn fit(&self) -> LinearFit {
        self.fit
    }

    fn fit_with(&self, v1: &[i64], v2: &[i64]) -> Option<LinearFit> {
        if v1.len() != v2.len() {
            return None;
        }
        v1.iter()
            .zip(v2)
            .try_fold(self.fit, |fit, (&x, &y)| fit.extend(x, y))
    }
}

impl SequenceRelation for PairwiseLinear {
    fn kind(&self) -> RelationKind {
        Self::KIND
    }

    fn check_modified(&self, v1: &[i64], v2: &[i64], _count: u32) -> InvariantStatus {
        match self.fit_with(v1, v2) {
            Some(_) => InvariantStatus::Consistent,
            None => InvariantStatus::Falsified,
        }
    }

    fn add_modified(&mut self, v1: &[i64], v2: &[i64], _count: u32) -> InvariantStatus {
        match self.fit_with(v1, v2) {
            Some(fit) => {
                self.fit = fit;
                InvariantStatus::Consistent
            }
            None => InvariantStatus::Falsified,
        }
    }

    fn format_formula(&self, v1: &str, v2: &str) -> String {
        match self.fit {
            LinearFit::Line { a, b } => format!("{} == {} * {} + {} (elementwise)", v2, a, v1, b),
            _ => format!("{} == ? * {} + ? (elementwise)", v2, v1),
        }
    }
}
