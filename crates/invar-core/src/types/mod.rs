//! Data structures and string interning for Invar.
//! FxHashMap, lasso-based interning, Spur-based ID types.

pub mod collections;
pub mod identifiers;
pub mod interning;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{PptName, VarName};
pub use interning::NameInterner;
