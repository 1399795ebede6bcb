//! Two-sequence binary invariants.
//!
//! Non-symmetric relations get two instances per variable pair, one per
//! orientation. Relations only ever see their operands through the
//! orientation, so the same relation code serves both argument orders.
//! Reload repair and formula identity live alongside.

pub mod change;
pub mod dispatch;
pub mod identity;
pub mod invariant;
pub mod orientation;
pub mod relation;
pub mod resurrect;

pub use change::ChangeIndicator;
pub use identity::{dedup_same_formula, FormulaKey};
pub use invariant::BinaryInvariant;
pub use orientation::{valid_types, Orientation};
pub use relation::{InvariantStatus, RelationKind, SequenceRelation, SwapRepair};
pub use resurrect::{InvariantSnapshot, RelationRegistry, Reloaded};
