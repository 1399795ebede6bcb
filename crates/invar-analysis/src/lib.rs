//! invar-analysis: the two-sequence invariant core.
//!
//! Binary invariants over sequence-valued variables, written once against a
//! first/second operand view and evaluated in both argument orders through
//! an orientation flag. Covers evidence dispatch, post-reload repair,
//! formula identity and confidence estimation.

pub mod binary;
pub mod confidence;
pub mod factory;
pub mod relations;
pub mod slots;

pub use binary::{
    BinaryInvariant, ChangeIndicator, InvariantSnapshot, InvariantStatus, Orientation,
    RelationKind, RelationRegistry, Reloaded, SequenceRelation, SwapRepair,
};
pub use confidence::{ConfidenceEstimator, ConfidenceScore, ConfidenceTier};
pub use factory::InvariantFactory;
pub use slots::{BaseType, ProgramPoint, RepType, VarIndex, VarInfo};
