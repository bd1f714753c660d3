//! Instruction Decode (ID) Stage.
//!
//! Reads the three register names from IF/ID and resolves each through the
//! register file, including the destination, whose current value travels
//! with the instruction. The absent slot resolves to its fixed constant.

use crate::common::StageSignal;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry, LatchId};
use crate::core::pipeline::traits::{PipelineStage, StageContext, StageId};

/// The decode stage and its working state for the current cycle.
#[derive(Clone, Debug, Default)]
pub struct DecodeStage {
    input: Option<IfIdEntry>,
    output: Option<IdExEntry>,
}

impl DecodeStage {
    /// Creates a decode stage with no instruction in flight.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipelineStage for DecodeStage {
    fn id(&self) -> StageId {
        StageId::Decode
    }

    fn prepare(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        ctx.observe_latch_read(LatchId::IfId);
        self.input = ctx.latches.if_id.read().cloned();
        Ok(())
    }

    fn execute(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        self.output = self.input.take().map(|e| {
            let val_a = ctx.read_reg(e.src_a);
            let val_b = ctx.read_reg(e.src_b);
            let val_dest = ctx.read_reg(e.dest);
            IdExEntry {
                pc: e.pc,
                opcode: e.opcode,
                dest: e.dest,
                src_a: e.src_a,
                src_b: e.src_b,
                val_a,
                val_b,
                val_dest,
            }
        });
        Ok(())
    }

    fn finalize(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        ctx.latches.id_ex.write(ctx.cycle, self.output.take());
        ctx.observe_latch_write(LatchId::IdEx);
        Ok(())
    }
}
