//! Execute (EX) Stage.
//!
//! This module implements the arithmetic stage of the pipeline. It performs:
//! 1. **ALU Operations:** `add`, `sub`, and `mult` on the decoded operand values,
//!    with two's-complement wrap-around on overflow.
//! 2. **Halt Detection:** `trap` raises `Halt`, which ends the run.
//! 3. **Pass-through:** `noop` and unrecognised opcodes leave the entry unchanged,
//!    unless the configuration asks for unrecognised opcodes to be rejected.

use crate::common::StageSignal;
use crate::config::UnknownOpcodePolicy;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, LatchId};
use crate::core::pipeline::traits::{PipelineStage, StageContext, StageId};
use crate::isa::Opcode;

/// The execute stage and its working state for the current cycle.
#[derive(Clone, Debug, Default)]
pub struct ExecuteStage {
    entry: Option<IdExEntry>,
}

impl ExecuteStage {
    /// Creates an execute stage with no instruction in flight.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Computes the result of an arithmetic opcode, or `None` if it is not one.
pub fn alu(opcode: &Opcode, a: i64, b: i64) -> Option<i64> {
    match opcode {
        Opcode::Add => Some(a.wrapping_add(b)),
        Opcode::Sub => Some(a.wrapping_sub(b)),
        Opcode::Mult => Some(a.wrapping_mul(b)),
        _ => None,
    }
}

impl PipelineStage for ExecuteStage {
    fn id(&self) -> StageId {
        StageId::Execute
    }

    fn prepare(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        ctx.observe_latch_read(LatchId::IdEx);
        self.entry = ctx.latches.id_ex.read().cloned();
        Ok(())
    }

    fn execute(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(());
        };

        if let Some(result) = alu(&entry.opcode, entry.val_a, entry.val_b) {
            entry.val_dest = result;
            return Ok(());
        }

        match &entry.opcode {
            Opcode::Trap => Err(StageSignal::Halt { pc: entry.pc }),
            Opcode::Other(name) if ctx.unknown_opcode == UnknownOpcodePolicy::Reject => {
                Err(StageSignal::UnknownOpcode {
                    pc: entry.pc,
                    opcode: name.clone(),
                })
            }
            Opcode::Other(name) => {
                tracing::debug!(pc = entry.pc, opcode = %name, "passing unknown opcode through");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn finalize(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        let out: Option<ExMemEntry> = self.entry.take();
        ctx.latches.ex_mem.write(ctx.cycle, out);
        ctx.observe_latch_write(LatchId::ExMem);
        Ok(())
    }
}
