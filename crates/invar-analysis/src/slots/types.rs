//! Representation types of observed variables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base (element) type of a variable's recorded representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Int,
    Boolean,
    Char,
    /// Object identity recorded as an integer hashcode.
    Hashcode,
    Double,
    String,
}

impl BaseType {
    /// Integral bases are scalar; floating point and strings are not.
    pub fn is_scalar(self) -> bool {
        matches!(self, Self::Int | Self::Boolean | Self::Char | Self::Hashcode)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Hashcode => "hashcode",
            Self::Double => "double",
            Self::String => "string",
        }
    }
}

/// Recorded representation: a base type plus array dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepType {
    pub base: BaseType,
    pub dimensions: u8,
}

impl RepType {
    pub const fn scalar(base: BaseType) -> Self {
        Self {
            base,
            dimensions: 0,
        }
    }

    pub const fn sequence(base: BaseType) -> Self {
        Self {
            base,
            dimensions: 1,
        }
    }

    /// True for one-dimensional (sequence) representations.
    pub fn is_array(&self) -> bool {
        self.dimensions == 1
    }

    /// True when the element type is scalar.
    pub fn base_is_scalar(&self) -> bool {
        self.base.is_scalar()
    }
}

impl fmt::Display for RepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.name())?;
        for _ in 0..self.dimensions {
            f.write_str("[]")?;
        }
        Ok(())
    }
}
