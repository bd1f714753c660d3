//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits `val_dest` to the destination register (writes to the absent
//! slot are discarded by the register file), updates retirement statistics,
//! and publishes the retired entry to the terminal latch.

use crate::common::StageSignal;
use crate::core::pipeline::latches::{LatchId, RetiredEntry};
use crate::core::pipeline::traits::{PipelineStage, StageContext, StageId};
use crate::isa::Opcode;

/// The writeback stage and its working state for the current cycle.
#[derive(Clone, Debug, Default)]
pub struct WritebackStage {
    entry: Option<RetiredEntry>,
}

impl WritebackStage {
    /// Creates a writeback stage with no instruction in flight.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipelineStage for WritebackStage {
    fn id(&self) -> StageId {
        StageId::Writeback
    }

    fn prepare(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        ctx.observe_latch_read(LatchId::ExMem);
        self.entry = ctx.latches.ex_mem.read().cloned();
        Ok(())
    }

    fn execute(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        let Some((dest, val, op)) = self
            .entry
            .as_ref()
            .map(|e| (e.dest, e.val_dest, &e.opcode))
        else {
            return Ok(());
        };

        let stats = &mut ctx.cpu.stats;
        stats.instructions_retired += 1;
        match op {
            Opcode::Add | Opcode::Sub | Opcode::Mult => stats.inst_alu += 1,
            Opcode::Noop => stats.inst_noop += 1,
            Opcode::Other(_) => stats.inst_unknown += 1,
            Opcode::Trap => {}
        }

        ctx.write_reg(dest, val);
        Ok(())
    }

    fn finalize(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        ctx.latches.retired.write(ctx.cycle, self.entry.take());
        ctx.observe_latch_write(LatchId::Retired);
        Ok(())
    }
}
