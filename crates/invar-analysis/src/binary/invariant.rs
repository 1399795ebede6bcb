//! A single two-sequence invariant instance.

use std::sync::Arc;

use invar_core::errors::InvariantError;
use invar_core::events::types::InstanceFalsifiedEvent;
use invar_core::events::EventDispatcher;

use super::orientation::Orientation;
use super::relation::{RelationKind, SequenceRelation};
use crate::confidence::{ConfidenceEstimator, ConfidenceScore};
use crate::slots::{ProgramPoint, VarIndex, VarInfo};

/// One hypothesis about a pair of sequence variables at a program point.
///
/// The instance holds slot indices into a `ProgramPoint` it does not own,
/// a relation strategy, and an orientation fixed at construction. Only the
/// reload fix-up may change the orientation afterwards.
///
/// Lifecycle is Active → Falsified. The pipeline flips it with `falsify`
/// after seeing a `Falsified` status; evaluation is rejected from then on.
#[derive(Debug)]
pub struct BinaryInvariant {
    pub(crate) relation: Box<dyn SequenceRelation>,
    pub(crate) orientation: Orientation,
    pub(crate) slots: [VarIndex; 2],
    pub(crate) falsified: bool,
    pub(crate) sample_count: u64,
    pub(crate) events: Option<Arc<EventDispatcher>>,
}

impl BinaryInvariant {
    /// Build an active instance.
    ///
    /// Callers check `valid_types` on the two slots first; nothing here
    /// re-validates shapes.
    pub fn new(
        relation: Box<dyn SequenceRelation>,
        slots: [VarIndex; 2],
        orientation: Orientation,
    ) -> Self {
        Self {
            relation,
            orientation,
            slots,
            falsified: false,
            sample_count: 0,
            events: None,
        }
    }

    /// Instances needed to cover both argument orders of a relation: one
    /// for a symmetric relation, a forward and a swapped one otherwise.
    pub fn for_both_orientations<F>(slots: [VarIndex; 2], make: F) -> Vec<Self>
    where
        F: Fn() -> Box<dyn SequenceRelation>,
    {
        let forward = Self::new(make(), slots, Orientation::Forward);
        if forward.relation.is_symmetric() {
            return vec![forward];
        }
        let swapped = Self::new(make(), slots, Orientation::Swapped);
        vec![forward, swapped]
    }

    /// Attach an event dispatcher for contradiction and lifecycle events.
    pub fn with_events(mut self, events: Arc<EventDispatcher>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn relation(&self) -> &dyn SequenceRelation {
        self.relation.as_ref()
    }

    pub fn kind(&self) -> RelationKind {
        self.relation.kind()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn orientation_is_swapped(&self) -> bool {
        self.orientation.is_swapped()
    }

    /// Raw slot indices, in program point order.
    pub fn slots(&self) -> [VarIndex; 2] {
        self.slots
    }

    /// The first operand. This is the only way relation-level code should
    /// reach a variable.
    pub fn var1<'a>(&self, ppt: &'a ProgramPoint) -> Option<&'a VarInfo> {
        ppt.var(self.orientation.first(self.slots))
    }

    /// The second operand.
    pub fn var2<'a>(&self, ppt: &'a ProgramPoint) -> Option<&'a VarInfo> {
        ppt.var(self.orientation.second(self.slots))
    }

    /// The first operand of an explicit slot list, used before the
    /// instance is bound to slots.
    pub fn var1_of<'a>(&self, vars: [&'a VarInfo; 2]) -> &'a VarInfo {
        self.orientation.first(vars)
    }

    /// The second operand of an explicit slot list.
    pub fn var2_of<'a>(&self, vars: [&'a VarInfo; 2]) -> &'a VarInfo {
        self.orientation.second(vars)
    }

    pub fn is_falsified(&self) -> bool {
        self.falsified
    }

    /// Mark the instance falsified. Terminal; repeated calls are no-ops.
    pub fn falsify(&mut self) {
        if self.falsified {
            return;
        }
        self.falsified = true;
        tracing::debug!(
            relation = %self.kind(),
            orientation = %self.orientation,
            sample_count = self.sample_count,
            "invariant falsified"
        );
        if let Some(events) = &self.events {
            events.emit_instance_falsified(&InstanceFalsifiedEvent {
                relation: self.kind().to_string(),
                swapped: self.orientation.is_swapped(),
                sample_count: self.sample_count,
            });
        }
    }

    /// Samples that have contributed evidence through `add`.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Confidence in this invariant given its accumulated samples.
    pub fn confidence(&self, estimator: &ConfidenceEstimator) -> ConfidenceScore {
        estimator.estimate(self.sample_count)
    }

    /// Confidence from the samples recorded at the whole program point,
    /// for pipelines that count observations per point rather than per
    /// instance.
    pub fn confidence_at(&self, ppt: &ProgramPoint, estimator: &ConfidenceEstimator) -> ConfidenceScore {
        estimator.estimate(ppt.num_samples())
    }

    /// Reject evaluation of a falsified instance.
    pub(crate) fn ensure_active(&self) -> Result<(), InvariantError> {
        if self.falsified {
            return Err(InvariantError::EvaluatedFalsified {
                relation: self.kind().to_string(),
            });
        }
        Ok(())
    }
}
