//! Memory Access (MEM) Stage.
//!
//! The instruction set has no loads or stores, so this stage performs no work.
//! When the engine is configured to schedule it, every phase reports
//! `Unimplemented`; the engine logs the report and moves on. Writeback reads
//! EX/MEM directly whether or not this stage is scheduled.

use crate::common::StageSignal;
use crate::core::pipeline::traits::{Phase, PipelineStage, StageContext, StageId};

/// Placeholder memory stage.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStage;

impl MemoryStage {
    const fn unimplemented(phase: Phase) -> Result<(), StageSignal> {
        Err(StageSignal::Unimplemented {
            stage: StageId::Memory,
            phase,
        })
    }
}

impl PipelineStage for MemoryStage {
    fn id(&self) -> StageId {
        StageId::Memory
    }

    fn prepare(&mut self, _ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        Self::unimplemented(Phase::Prepare)
    }

    fn execute(&mut self, _ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        Self::unimplemented(Phase::Execute)
    }

    fn finalize(&mut self, _ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        Self::unimplemented(Phase::Finalize)
    }
}
