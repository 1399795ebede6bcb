//! String interning for variable and program point names.
//!
//! Many invariant instances refer to the same handful of variable names,
//! so names are stored once in a `lasso::ThreadedRodeo` and shared by ID.

use lasso::ThreadedRodeo;

use super::identifiers::{PptName, VarName};

/// Thread-safe interner for program point and variable names.
#[derive(Debug, Default)]
pub struct NameInterner {
    inner: ThreadedRodeo,
}

impl NameInterner {
    /// Create a new empty interner.
    pub fn new() -> Self {
        Self {
            inner: ThreadedRodeo::default(),
        }
    }

    /// Intern a variable name.
    pub fn intern_var(&self, name: &str) -> VarName {
        VarName(self.inner.get_or_intern(name))
    }

    /// Intern a program point name.
    pub fn intern_ppt(&self, name: &str) -> PptName {
        PptName(self.inner.get_or_intern(name))
    }

    /// Resolve a variable name back to its string.
    pub fn var_name(&self, name: VarName) -> &str {
        self.inner.resolve(&name.0)
    }

    /// Resolve a program point name back to its string.
    pub fn ppt_name(&self, name: PptName) -> &str {
        self.inner.resolve(&name.0)
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
