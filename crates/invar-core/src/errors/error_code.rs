//! InvarErrorCode trait for stable, machine-readable error codes.

/// Trait for attaching a stable code to every Invar error.
/// Every error enum implements this so that the invariant-management
/// pipeline can classify failures without matching on message text.
pub trait InvarErrorCode {
    /// Returns the error code string (e.g., "CONTRACT_VIOLATION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONTRACT_VIOLATION: &str = "CONTRACT_VIOLATION";
pub const INVALID_SLOTS: &str = "INVALID_SLOTS";
pub const UNKNOWN_RELATION: &str = "UNKNOWN_RELATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
