//! Event payload types.

/// Payload for `on_evidence_contradicted`.
#[derive(Debug, Clone)]
pub struct EvidenceContradictedEvent {
    pub relation: String,
    pub swapped: bool,
    /// `true` when raised by `add`, `false` when raised by `check`.
    pub from_add: bool,
    pub count: u32,
}

/// Payload for `on_orientation_flipped`.
#[derive(Debug, Clone)]
pub struct OrientationFlippedEvent {
    pub relation: String,
    /// Orientation after the flip.
    pub swapped: bool,
}

/// Payload for `on_relation_replaced`.
#[derive(Debug, Clone)]
pub struct RelationReplacedEvent {
    pub old_relation: String,
    pub new_relation: String,
}

/// Payload for `on_instance_falsified`.
#[derive(Debug, Clone)]
pub struct InstanceFalsifiedEvent {
    pub relation: String,
    pub swapped: bool,
    pub sample_count: u64,
}
