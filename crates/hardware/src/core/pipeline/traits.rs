//! Pipeline Stage Interface.
//!
//! This module defines the common contract for pipeline components. It provides:
//! 1. **Stage and Phase Identity:** `StageId` and `Phase` name where a signal came from.
//! 2. **Stage Context:** The borrowed view of CPU state, latches, and trace sink a
//!    stage receives for one cycle.
//! 3. **Pipeline Stage Interface:** The three-phase `prepare`/`execute`/`finalize`
//!    protocol, plus a provided `tick` that runs them in order.

use std::fmt;

use crate::common::{Reg, StageSignal};
use crate::config::UnknownOpcodePolicy;
use crate::core::Cpu;
use crate::core::pipeline::latches::{LatchId, Latches};
use crate::trace::TraceSink;

/// Identifies one of the five pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Instruction fetch.
    Fetch,
    /// Instruction decode and operand read.
    Decode,
    /// Arithmetic and halt detection.
    Execute,
    /// Data memory access (not implemented).
    Memory,
    /// Register writeback.
    Writeback,
}

impl StageId {
    /// Every stage in program order.
    pub const ALL: [Self; 5] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::Memory,
        Self::Writeback,
    ];

    /// Conventional short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::Memory => "MEM",
            Self::Writeback => "WB",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the three phases a stage runs per cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Read the upstream latch into stage-local state.
    Prepare,
    /// Compute and touch architectural state.
    Execute,
    /// Publish stage-local state to the downstream latch.
    Finalize,
}

impl Phase {
    /// Phases in execution order.
    pub const ALL: [Self; 3] = [Self::Prepare, Self::Execute, Self::Finalize];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prepare => "prepare",
            Self::Execute => "execute",
            Self::Finalize => "finalize",
        })
    }
}

/// Everything a stage may touch during one cycle.
///
/// Register and latch accesses made through the helper methods are reported
/// to the trace sink.
pub struct StageContext<'a> {
    /// Architectural state.
    pub cpu: &'a mut Cpu,
    /// The latch chain.
    pub latches: &'a mut Latches,
    /// Observer for diagnostic events.
    pub sink: &'a mut dyn TraceSink,
    /// Current cycle number, starting at 1.
    pub cycle: u64,
    /// How Execute treats opcodes it does not recognise.
    pub unknown_opcode: UnknownOpcodePolicy,
}

impl fmt::Debug for StageContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageContext")
            .field("cycle", &self.cycle)
            .field("latches", &self.latches)
            .field("unknown_opcode", &self.unknown_opcode)
            .finish_non_exhaustive()
    }
}

impl StageContext<'_> {
    /// Reads a register and reports the access.
    pub fn read_reg(&mut self, slot: Option<Reg>) -> i64 {
        let val = self.cpu.regs.read(slot);
        self.sink.register_read(self.cycle, slot, val);
        val
    }

    /// Writes a register and reports the access.
    pub fn write_reg(&mut self, slot: Option<Reg>, val: i64) {
        self.cpu.regs.write(slot, val);
        self.sink.register_write(self.cycle, slot, val);
    }

    /// Reports a read of `latch`, with the cycle it was last written.
    pub fn observe_latch_read(&mut self, latch: LatchId) {
        let written_at = self.latches.written_at(latch);
        self.sink.latch_read(self.cycle, latch, written_at);
    }

    /// Reports a write of `latch` in the current cycle.
    pub fn observe_latch_write(&mut self, latch: LatchId) {
        self.sink.latch_write(self.cycle, latch);
    }
}

/// Represents a stage in the instruction pipeline.
///
/// Each phase may raise a [`StageSignal`]; a signal skips the remaining
/// phases of that stage for the current cycle and is triaged by the engine.
pub trait PipelineStage {
    /// Which stage this is.
    fn id(&self) -> StageId;

    /// Reads the upstream latch into stage-local state.
    fn prepare(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal>;

    /// Performs the stage's work on its local state.
    fn execute(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal>;

    /// Publishes the local state to the downstream latch.
    fn finalize(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal>;

    /// Executes one cycle of the stage: all three phases in order.
    fn tick(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        let id = self.id();
        for phase in Phase::ALL {
            ctx.sink.stage_phase(ctx.cycle, id, phase);
            match phase {
                Phase::Prepare => self.prepare(ctx)?,
                Phase::Execute => self.execute(ctx)?,
                Phase::Finalize => self.finalize(ctx)?,
            }
        }
        Ok(())
    }
}
