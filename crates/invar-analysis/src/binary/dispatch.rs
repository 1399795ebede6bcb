//! Evidence dispatch: reorder raw operands by orientation and route each
//! observation to the relation's modified or unmodified path.
//!
//! Missing-value tests belong to the caller and happen before dispatch.

use invar_core::errors::InvariantError;
use invar_core::events::types::EvidenceContradictedEvent;

use super::change::ChangeIndicator;
use super::invariant::BinaryInvariant;
use super::relation::InvariantStatus;

/// Which relation path handled an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchPath {
    CheckModified,
    CheckUnmodified,
    AddModified,
    AddUnmodified,
}

impl DispatchPath {
    fn name(self) -> &'static str {
        match self {
            Self::CheckModified => "check_modified",
            Self::CheckUnmodified => "check_unmodified",
            Self::AddModified => "add_modified",
            Self::AddUnmodified => "add_unmodified",
        }
    }

    fn is_add(self) -> bool {
        matches!(self, Self::AddModified | Self::AddUnmodified)
    }
}

impl BinaryInvariant {
    /// Test one observation without updating relation state.
    ///
    /// `value_a` and `value_b` are in raw slot order; `change_indicator`
    /// says which of them changed since the last observation.
    pub fn check(
        &self,
        value_a: &[i64],
        value_b: &[i64],
        change_indicator: u8,
        count: u32,
    ) -> Result<InvariantStatus, InvariantError> {
        let change = self.precondition(change_indicator)?;
        let (v1, v2) = self.orientation.order(value_a, value_b);

        let (path, status) = if change.any_changed() {
            (DispatchPath::CheckModified, self.relation.check_modified(v1, v2, count))
        } else {
            (DispatchPath::CheckUnmodified, self.relation.check_unmodified(v1, v2, count))
        };

        self.report(path, status, change, count);
        Ok(status)
    }

    /// Test one observation and let the relation update its state.
    ///
    /// Every accepted call adds `count` to the sample count, whatever the
    /// returned status.
    pub fn add(
        &mut self,
        value_a: &[i64],
        value_b: &[i64],
        change_indicator: u8,
        count: u32,
    ) -> Result<InvariantStatus, InvariantError> {
        let change = self.precondition(change_indicator)?;
        let (v1, v2) = self.orientation.order(value_a, value_b);

        let (path, status) = if change.any_changed() {
            (DispatchPath::AddModified, self.relation.add_modified(v1, v2, count))
        } else {
            (DispatchPath::AddUnmodified, self.relation.add_unmodified(v1, v2, count))
        };

        self.sample_count = self.sample_count.saturating_add(u64::from(count));
        self.report(path, status, change, count);
        Ok(status)
    }

    fn precondition(&self, change_indicator: u8) -> Result<ChangeIndicator, InvariantError> {
        let checked = self
            .ensure_active()
            .and_then(|()| ChangeIndicator::new(change_indicator));
        if let Err(ref e) = checked {
            tracing::error!(
                relation = %self.kind(),
                orientation = %self.orientation,
                change_indicator,
                error = %e,
                "evaluation contract violated"
            );
        }
        checked
    }

    fn report(&self, path: DispatchPath, status: InvariantStatus, change: ChangeIndicator, count: u32) {
        tracing::trace!(
            relation = %self.kind(),
            orientation = %self.orientation,
            dispatch_path = path.name(),
            change_indicator = change.raw(),
            status = %status,
            "observation dispatched"
        );

        if !status.is_falsified() {
            return;
        }
        tracing::debug!(
            relation = %self.kind(),
            orientation = %self.orientation,
            dispatch_path = path.name(),
            "evidence contradicts invariant"
        );
        if let Some(events) = &self.events {
            events.emit_evidence_contradicted(&EvidenceContradictedEvent {
                relation: self.kind().to_string(),
                swapped: self.orientation.is_swapped(),
                from_add: path.is_add(),
                count,
            });
        }
    }
}
