//! Program points and their variable slots.

use std::sync::atomic::{AtomicU64, Ordering};

use invar_core::types::{NameInterner, PptName, VarName};
use serde::{Deserialize, Serialize};

use super::types::RepType;

/// Index of a variable inside its program point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarIndex(pub usize);

/// A variable observed at a program point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInfo {
    pub name: VarName,
    pub rep_type: RepType,
    pub index: VarIndex,
}

impl VarInfo {
    /// True for a sequence whose elements are scalar.
    pub fn is_scalar_sequence(&self) -> bool {
        self.rep_type.is_array() && self.rep_type.base_is_scalar()
    }
}

/// An observation site: its ordered variables, their interned names and the
/// number of samples recorded so far.
///
/// Invariants never own a `ProgramPoint`; they hold `VarIndex` values and
/// borrow the point when they need to resolve them.
#[derive(Debug)]
pub struct ProgramPoint {
    name: PptName,
    vars: Vec<VarInfo>,
    names: NameInterner,
    num_samples: AtomicU64,
}

impl ProgramPoint {
    pub fn new(name: &str) -> Self {
        let names = NameInterner::new();
        let name = names.intern_ppt(name);
        Self {
            name,
            vars: Vec::new(),
            names,
            num_samples: AtomicU64::new(0),
        }
    }

    /// Append a variable and return its slot index.
    pub fn add_var(&mut self, name: &str, rep_type: RepType) -> VarIndex {
        let index = VarIndex(self.vars.len());
        let name = self.names.intern_var(name);
        self.vars.push(VarInfo {
            name,
            rep_type,
            index,
        });
        index
    }

    pub fn name(&self) -> &str {
        self.names.ppt_name(self.name)
    }

    pub fn var(&self, index: VarIndex) -> Option<&VarInfo> {
        self.vars.get(index.0)
    }

    pub fn vars(&self) -> &[VarInfo] {
        &self.vars
    }

    pub fn var_name(&self, var: &VarInfo) -> &str {
        self.names.var_name(var.name)
    }

    /// Record `count` more samples at this point.
    pub fn record_samples(&self, count: u64) {
        self.num_samples.fetch_add(count, Ordering::Relaxed);
    }

    pub fn num_samples(&self) -> u64 {
        self.num_samples.load(Ordering::Relaxed)
    }
}
