//! InvariantEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling invariant lifecycle events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. The trait requires `Send + Sync`
/// because instances are evaluated on a multi-threaded scheduler.
pub trait InvariantEventHandler: Send + Sync {
    // ---- Evidence ----
    fn on_evidence_contradicted(&self, _event: &EvidenceContradictedEvent) {}

    // ---- Reload ----
    fn on_orientation_flipped(&self, _event: &OrientationFlippedEvent) {}
    fn on_relation_replaced(&self, _event: &RelationReplacedEvent) {}

    // ---- Lifecycle ----
    fn on_instance_falsified(&self, _event: &InstanceFalsifiedEvent) {}
}
