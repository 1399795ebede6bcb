//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::InvariantEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn InvariantEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn InvariantEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not prevent subsequent
    /// handlers from receiving the event.
    fn emit<F: Fn(&dyn InvariantEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!(event = event_name, "event handler panicked");
            }
        }
    }

    // ---- Evidence ----
    pub fn emit_evidence_contradicted(&self, event: &EvidenceContradictedEvent) {
        self.emit("evidence_contradicted", |h| h.on_evidence_contradicted(event));
    }

    // ---- Reload ----
    pub fn emit_orientation_flipped(&self, event: &OrientationFlippedEvent) {
        self.emit("orientation_flipped", |h| h.on_orientation_flipped(event));
    }

    pub fn emit_relation_replaced(&self, event: &RelationReplacedEvent) {
        self.emit("relation_replaced", |h| h.on_relation_replaced(event));
    }

    // ---- Lifecycle ----
    pub fn emit_instance_falsified(&self, event: &InstanceFalsifiedEvent) {
        self.emit("instance_falsified", |h| h.on_instance_falsified(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
