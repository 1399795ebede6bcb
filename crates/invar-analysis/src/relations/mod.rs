//! Concrete two-sequence relations.
//!
//! A small set: one symmetric relation, one plain
//! non-symmetric relation, a converse pair, and one stateful relation.

pub mod lex_compare;
pub mod pairwise_linear;
pub mod seq_equal;
pub mod sub_sequence;

pub use lex_compare::{LexGreaterThan, LexLessThan};
pub use pairwise_linear::PairwiseLinear;
pub use seq_equal::SeqEqual;
pub use sub_sequence::SubSequence;

use crate::binary::RelationRegistry;

/// Register constructors for every relation in this module.
pub fn register_builtins(registry: &mut RelationRegistry) {
    registry.register(SeqEqual::KIND, || Box::new(SeqEqual));
    registry.register(SubSequence::KIND, || Box::new(SubSequence));
    registry.register(LexLessThan::KIND, || Box::new(LexLessThan));
    registry.register(LexGreaterThan::KIND, || Box::new(LexGreaterThan));
    registry.register(PairwiseLinear::KIND, || Box::new(PairwiseLinear::default()));
}
