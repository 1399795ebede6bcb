//! Configuration system for Invar.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod confidence_config;
pub mod dispatch_config;
pub mod invar_config;

pub use confidence_config::ConfidenceConfig;
pub use dispatch_config::DispatchConfig;
pub use invar_config::{CliOverrides, InvarConfig};
