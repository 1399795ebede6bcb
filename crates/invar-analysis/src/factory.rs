//! Pipeline-facing construction and reload of binary invariants.
//!
//! Ties configuration, the event dispatcher and the relation registry
//! together so callers never assemble instances by hand.

use std::sync::Arc;

use invar_core::config::InvarConfig;
use invar_core::errors::InvariantError;
use invar_core::events::EventDispatcher;

use crate::binary::{valid_types, BinaryInvariant, InvariantSnapshot, RelationRegistry, Reloaded, SequenceRelation};
use crate::confidence::ConfidenceEstimator;
use crate::slots::{ProgramPoint, VarIndex};

#[derive(Debug)]
pub struct InvariantFactory {
    registry: RelationRegistry,
    estimator: ConfidenceEstimator,
    events: Arc<EventDispatcher>,
    emit_events: bool,
}

impl InvariantFactory {
    /// Factory with the built-in relations registered.
    pub fn new(config: &InvarConfig, events: Arc<EventDispatcher>) -> Self {
        Self {
            registry: RelationRegistry::with_builtins(),
            estimator: ConfidenceEstimator::from_config(&config.confidence),
            events,
            emit_events: config.dispatch.effective_emit_events(),
        }
    }

    /// Replace the relation registry, e.g. to add custom relations.
    pub fn with_registry(mut self, registry: RelationRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &RelationRegistry {
        &self.registry
    }

    pub fn estimator(&self) -> &ConfidenceEstimator {
        &self.estimator
    }

    pub fn events(&self) -> &Arc<EventDispatcher> {
        &self.events
    }

    /// Instances of one relation over the variable pair at `slots`.
    ///
    /// Returns an empty vec when the pair is not two scalar sequences.
    /// A symmetric relation yields one instance, any other relation one
    /// per orientation.
    pub fn instantiate<F>(
        &self,
        ppt: &ProgramPoint,
        slots: [VarIndex; 2],
        make: F,
    ) -> Result<Vec<BinaryInvariant>, InvariantError>
    where
        F: Fn() -> Box<dyn SequenceRelation>,
    {
        let mut vars = Vec::with_capacity(2);
        for slot in slots {
            let Some(var) = ppt.var(slot) else {
                let err = InvariantError::InvalidSlots {
                    ppt: ppt.name().to_string(),
                    index: slot.0,
                    len: ppt.vars().len(),
                };
                tracing::error!(error = %err, "instantiation contract violated");
                return Err(err);
            };
            vars.push(var);
        }

        if !valid_types(&vars) {
            tracing::debug!(
                ppt = ppt.name(),
                var1 = ppt.var_name(vars[0]),
                var2 = ppt.var_name(vars[1]),
                "skipping pair: not two scalar sequences"
            );
            return Ok(Vec::new());
        }

        let instances: Vec<_> = BinaryInvariant::for_both_orientations(slots, make)
            .into_iter()
            .map(|inv| self.attach(inv))
            .collect();

        if let Some(first) = instances.first() {
            tracing::debug!(
                ppt = ppt.name(),
                relation = %first.kind(),
                instances = instances.len(),
                "instantiated"
            );
        }
        Ok(instances)
    }

    /// Rebuild a persisted instance under a new slot numbering.
    pub fn reload(
        &self,
        snapshot: InvariantSnapshot,
        permutation: &[usize],
    ) -> Result<BinaryInvariant, InvariantError> {
        let mut reloaded = Reloaded::from_snapshot(snapshot, &self.registry)?;
        if self.emit_events {
            reloaded = reloaded.with_events(Arc::clone(&self.events));
        }
        reloaded.fixup_after_reload(permutation)
    }

    fn attach(&self, inv: BinaryInvariant) -> BinaryInvariant {
        if self.emit_events {
            inv.with_events(Arc::clone(&self.events))
        } else {
            inv
        }
    }
}
