//! Error handling for Invar.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod invariant_error;

pub use config_error::ConfigError;
pub use error_code::InvarErrorCode;
pub use invariant_error::InvariantError;
