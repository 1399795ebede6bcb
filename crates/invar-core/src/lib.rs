//! invar-core: shared infrastructure for the Invar invariant-inference engine.
//!
//! Errors, layered configuration, tracing setup, the event system and the
//! interned identifier types used by `invar-analysis`.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
