//! Register References.
//!
//! This module provides the `Reg` type naming one of the general-purpose
//! register slots. It provides:
//! 1. **Validation:** A `Reg` can only hold an index inside the register file.
//! 2. **Naming:** Parsing from and formatting to the `r<N>` assembly spelling.
//!
//! The absent/no-op slot is not a `Reg`; operands that name no register are
//! carried as `Option<Reg>::None` and resolved through the absent-slot rule.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::common::constants::NUM_REGS;

/// A general-purpose register slot, `r0` through `r8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reg(u8);

/// Error returned when a token does not name a register slot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{0}` is not a register (expected r0..r8)")]
pub struct InvalidRegister(pub String);

impl Reg {
    /// Register `r0`, reset to 1.
    pub const R0: Self = Self(0);

    /// Creates a register reference from a slot index.
    ///
    /// Returns `None` when `idx` is outside `0..NUM_REGS`.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < NUM_REGS {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// Returns the slot index of this register.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over every general-purpose register in slot order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_REGS as u8).map(Self)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl FromStr for Reg {
    type Err = InvalidRegister;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('r')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<usize>().ok())
            .and_then(Self::new)
            .ok_or_else(|| InvalidRegister(s.to_string()))
    }
}
