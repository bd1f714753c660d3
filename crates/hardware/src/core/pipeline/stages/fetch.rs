//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the pipeline. It performs:
//! 1. **PC Read:** Takes the next program counter from the PC latch.
//! 2. **Instruction Retrieval:** Loads the instruction at that PC from the store,
//!    raising `Exhausted` once the PC runs past the end of the program.
//! 3. **PC Advance:** Increments the PC latch by one instruction.
//! 4. **Latch Write:** Publishes the instruction's fields to IF/ID.

use crate::common::StageSignal;
use crate::core::pipeline::latches::{IfIdEntry, LatchId, PcEntry};
use crate::core::pipeline::traits::{PipelineStage, StageContext, StageId};
use crate::isa::Instruction;

/// The fetch stage and its working state for the current cycle.
#[derive(Clone, Debug, Default)]
pub struct FetchStage {
    pc: usize,
    fetched: Option<Instruction>,
}

impl FetchStage {
    /// Creates a fetch stage with no instruction in flight.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipelineStage for FetchStage {
    fn id(&self) -> StageId {
        StageId::Fetch
    }

    fn prepare(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        ctx.observe_latch_read(LatchId::Pc);
        self.pc = ctx.latches.next_pc();
        self.fetched = None;
        let inst = ctx.cpu.imem.fetch(self.pc)?;
        self.fetched = Some(inst.clone());
        Ok(())
    }

    fn execute(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        ctx.latches
            .pc
            .write(ctx.cycle, Some(PcEntry { pc: self.pc + 1 }));
        ctx.observe_latch_write(LatchId::Pc);
        Ok(())
    }

    fn finalize(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        let entry = self.fetched.take().map(|inst| IfIdEntry {
            pc: self.pc,
            opcode: inst.opcode().clone(),
            dest: inst.dest(),
            src_a: inst.src_a(),
            src_b: inst.src_b(),
        });
        if entry.is_some() {
            ctx.cpu.stats.instructions_fetched += 1;
        }
        ctx.latches.if_id.write(ctx.cycle, entry);
        ctx.observe_latch_write(LatchId::IfId);
        Ok(())
    }
}
