//! Variable slot model for program points.
//!
//! A program point owns its variables; invariants refer to them by
//! `VarIndex` and borrow the point read-only when they need names or types.

pub mod ppt;
pub mod types;

pub use ppt::{ProgramPoint, VarIndex, VarInfo};
pub use types::{BaseType, RepType};
