//! Reload repair for persisted instances.
//!
//! When persisted state is reloaded, the two slots of a variable pair may
//! come back renumbered in the opposite order. The persistence layer hands
//! over an `InvariantSnapshot` whose slots are already in the new order,
//! plus the permutation that maps the old order onto it. `Reloaded` holds
//! the instance until `fixup_after_reload` has run exactly once; it has no
//! evaluation methods, so a half-repaired instance can never be evaluated.

use std::sync::Arc;

use invar_core::errors::InvariantError;
use invar_core::events::types::{OrientationFlippedEvent, RelationReplacedEvent};
use invar_core::events::EventDispatcher;
use invar_core::types::FxHashMap;
use serde::{Deserialize, Serialize};

use super::invariant::BinaryInvariant;
use super::orientation::Orientation;
use super::relation::{RelationKind, SequenceRelation, SwapRepair};
use crate::slots::VarIndex;

/// Persisted form of a `BinaryInvariant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantSnapshot {
    /// `RelationKind` name, resolved through a `RelationRegistry`.
    pub relation: String,
    pub orientation: Orientation,
    pub slots: [VarIndex; 2],
    pub falsified: bool,
    pub sample_count: u64,
}

impl BinaryInvariant {
    pub fn snapshot(&self) -> InvariantSnapshot {
        InvariantSnapshot {
            relation: self.kind().name().to_string(),
            orientation: self.orientation,
            slots: self.slots,
            falsified: self.falsified,
            sample_count: self.sample_count,
        }
    }
}

/// Constructor for a fresh relation of one kind.
pub type RelationFactory = fn() -> Box<dyn SequenceRelation>;

/// Maps persisted relation kind names back to relation constructors.
#[derive(Debug, Default, Clone)]
pub struct RelationRegistry {
    factories: FxHashMap<&'static str, RelationFactory>,
}

impl RelationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every relation shipped in `crate::relations`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::relations::register_builtins(&mut registry);
        registry
    }

    /// Register a constructor. A later registration for the same kind wins.
    pub fn register(&mut self, kind: RelationKind, factory: RelationFactory) {
        self.factories.insert(kind.name(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn SequenceRelation>, InvariantError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| InvariantError::UnknownRelation(name.to_string()))
    }
}

/// A reconstructed instance awaiting its one-shot slot fix-up.
#[derive(Debug)]
pub struct Reloaded {
    inner: BinaryInvariant,
}

impl Reloaded {
    pub fn from_snapshot(
        snapshot: InvariantSnapshot,
        registry: &RelationRegistry,
    ) -> Result<Self, InvariantError> {
        let relation = registry.create(&snapshot.relation)?;
        let mut inner = BinaryInvariant::new(relation, snapshot.slots, snapshot.orientation);
        inner.falsified = snapshot.falsified;
        inner.sample_count = snapshot.sample_count;
        Ok(Self { inner })
    }

    pub fn with_events(mut self, events: Arc<EventDispatcher>) -> Self {
        self.inner.events = Some(events);
        self
    }

    /// Repair orientation for the new slot numbering and release the
    /// instance for evaluation.
    ///
    /// `permutation` must be `[0, 1]` (order kept) or `[1, 0]` (slots
    /// swapped); anything else is a contract violation.
    pub fn fixup_after_reload(self, permutation: &[usize]) -> Result<BinaryInvariant, InvariantError> {
        let mut inv = self.inner;
        let swapped = match permutation {
            [0, 1] => false,
            [1, 0] => true,
            _ => {
                let err = InvariantError::MalformedPermutation {
                    permutation: permutation.to_vec(),
                };
                tracing::error!(relation = %inv.kind(), error = %err, "reload contract violated");
                return Err(err);
            }
        };

        if swapped {
            resurrect_swapped(&mut inv);
        } else {
            inv.relation.resurrect_unswapped();
        }

        tracing::debug!(
            relation = %inv.kind(),
            orientation = %inv.orientation,
            permutation = ?permutation,
            "reload fix-up complete"
        );
        Ok(inv)
    }
}

fn resurrect_swapped(inv: &mut BinaryInvariant) {
    match inv.relation.resurrect_swapped() {
        SwapRepair::Flip => {
            inv.orientation = inv.orientation.flipped();
            if let Some(events) = &inv.events {
                events.emit_orientation_flipped(&OrientationFlippedEvent {
                    relation: inv.kind().to_string(),
                    swapped: inv.orientation.is_swapped(),
                });
            }
        }
        SwapRepair::Keep => {}
        SwapRepair::Replace(converse) => {
            let old = inv.kind();
            inv.relation = converse;
            tracing::debug!(old = %old, new = %inv.kind(), "relation replaced by converse");
            if let Some(events) = &inv.events {
                events.emit_relation_replaced(&RelationReplacedEvent {
                    old_relation: old.to_string(),
                    new_relation: inv.kind().to_string(),
                });
            }
        }
    }
}
