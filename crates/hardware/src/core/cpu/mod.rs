//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! architectural state that pipeline stages borrow during a cycle:
//! 1. **Registers:** The general-purpose register file.
//! 2. **Memories:** The instruction store and the data memory.
//! 3. **Statistics:** Counters updated by the stages and the engine.
//!
//! Latches are deliberately not part of the `Cpu`; they belong to the
//! pipeline, so no latch ever holds a reference into architectural state.

use crate::core::arch::{DataMemory, InstructionStore, RegisterFile};
use crate::isa::Instruction;
use crate::stats::SimStats;

/// Architectural state of the simulated processor.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program memory, read by Fetch.
    pub imem: InstructionStore,
    /// Data memory, reserved for the Memory stage.
    pub dmem: DataMemory,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its reset state with the given program loaded.
    pub fn new(program: impl IntoIterator<Item = Instruction>) -> Self {
        Self {
            regs: RegisterFile::new(),
            imem: program.into_iter().collect(),
            dmem: DataMemory::new(),
            stats: SimStats::default(),
        }
    }
}
