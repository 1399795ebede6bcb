//! Evidence dispatch configuration.

use serde::{Deserialize, Serialize};

/// Configuration for evidence dispatch and reload.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DispatchConfig {
    /// Attach the event dispatcher to new instances. Default: true.
    pub emit_events: Option<bool>,
}

impl DispatchConfig {
    pub fn effective_emit_events(&self) -> bool {
        self.emit_events.unwrap_or(true)
    }
}
