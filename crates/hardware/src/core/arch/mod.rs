//! Architectural state.
//!
//! This module contains the programmer-visible state of the machine:
//! 1. **GPRs:** The nine-slot register file with its absent slot.
//! 2. **Instruction Memory:** The append-only program store.
//! 3. **Data Memory:** The 32-byte data array.

/// Data memory implementation.
pub mod dmem;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Instruction store implementation.
pub mod imem;

pub use dmem::DataMemory;
pub use gpr::RegisterFile;
pub use imem::InstructionStore;
