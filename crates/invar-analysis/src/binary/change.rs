//! Per-observation change indicator.

use invar_core::errors::InvariantError;

/// Which raw slots changed since the previous observation.
///
/// Bit 0 is slot 0, bit 1 is slot 1. Zero means neither changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeIndicator(u8);

impl ChangeIndicator {
    pub const UNCHANGED: Self = Self(0);
    pub const BOTH_CHANGED: Self = Self(3);

    /// Validate a raw indicator; anything outside `[0, 4)` is a caller bug.
    pub fn new(value: u8) -> Result<Self, InvariantError> {
        if value < 4 {
            Ok(Self(value))
        } else {
            Err(InvariantError::InvalidChangeIndicator { value })
        }
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn first_changed(self) -> bool {
        self.0 & 0b01 != 0
    }

    pub fn second_changed(self) -> bool {
        self.0 & 0b10 != 0
    }

    pub fn any_changed(self) -> bool {
        self.0 != 0
    }
}

impl TryFrom<u8> for ChangeIndicator {
    type Error = InvariantError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
