//! Global Simulator Constants.
//!
//! This module defines the sizing and reset constants used across the simulator. It includes:
//! 1. **Register Constants:** Slot count and reset values for the register file.
//! 2. **Memory Constants:** Size of the byte-addressable data memory.
//! 3. **Simulation Constants:** Default cycle budget for a run.

/// Number of general-purpose register slots (`r0`..`r8`).
pub const NUM_REGS: usize = 9;

/// Reset value of `r0`, the always-true condition slot.
pub const R0_RESET_VALUE: i64 = 1;

/// Value returned when reading the absent register slot.
///
/// Writes to the absent slot are discarded, so this never changes.
pub const ABSENT_REGISTER_VALUE: i64 = 0;

/// Size of the data memory in bytes.
pub const DATA_MEMORY_SIZE: usize = 32;

/// Default upper bound on simulated cycles before a run is abandoned.
pub const DEFAULT_MAX_CYCLES: u64 = 10_000;
