//! General-Purpose Register File.
//!
//! This module implements the register file for the pipeline. It performs the following:
//! 1. **Storage:** Maintains nine signed registers (`r0`-`r8`).
//! 2. **Invariant Enforcement:** The absent slot always reads a fixed constant and
//!    silently discards writes.
//! 3. **Debugging:** Renders the complete register state as a table.

use std::fmt;

use crate::common::Reg;
use crate::common::constants::{ABSENT_REGISTER_VALUE, NUM_REGS, R0_RESET_VALUE};

/// General-Purpose Register file.
///
/// Operands are addressed as `Option<Reg>`; `None` is the absent/no-op slot.
/// `r0` resets to 1 (the always-true condition slot), all others to 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i64; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file in its reset state.
    pub const fn new() -> Self {
        let mut regs = [0; NUM_REGS];
        regs[Reg::R0.index()] = R0_RESET_VALUE;
        Self { regs }
    }

    /// Reads a register slot.
    ///
    /// The absent slot always returns [`ABSENT_REGISTER_VALUE`].
    pub const fn read(&self, slot: Option<Reg>) -> i64 {
        match slot {
            Some(reg) => self.regs[reg.index()],
            None => ABSENT_REGISTER_VALUE,
        }
    }

    /// Writes a register slot.
    ///
    /// Writes to the absent slot are silently ignored.
    pub const fn write(&mut self, slot: Option<Reg>, val: i64) {
        if let Some(reg) = slot {
            self.regs[reg.index()] = val;
        }
    }

    /// Returns a snapshot of every general-purpose register in slot order.
    pub const fn snapshot(&self) -> [i64; NUM_REGS] {
        self.regs
    }

    /// Iterates over `(register, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Reg, i64)> + '_ {
        Reg::all().map(|r| (r, self.regs[r.index()]))
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    /// Renders the registers three to a row, e.g. `[ r0 =    1 ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registers:")?;
        for (reg, val) in self.iter() {
            write!(f, "[{:>3} = {:>4} ]", reg.to_string(), val)?;
            if reg.index() % 3 == 2 {
                writeln!(f)?;
            } else {
                write!(f, "\t")?;
            }
        }
        Ok(())
    }
}
