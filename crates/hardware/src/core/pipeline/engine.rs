//! Pipeline scheduler.
//!
//! This module owns the stage list and the latch chain and advances them one
//! cycle at a time:
//! 1. **Reverse Order:** Stages tick from Writeback back to Fetch, so every stage
//!    reads its upstream latch before the producer overwrites it in the same cycle.
//! 2. **Signal Triage:** `Halt` stops the cycle immediately; `Exhausted` and
//!    `Unimplemented` skip the rest of the raising stage's turn; `UnknownOpcode`
//!    aborts the run.
//! 3. **Optional Memory Stage:** The MEM stage is only scheduled when configured.

use crate::common::{SimError, StageSignal};
use crate::config::{PipelineConfig, UnknownOpcodePolicy};
use crate::core::Cpu;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::stages::Stage;
use crate::core::pipeline::traits::{PipelineStage, StageContext, StageId};
use crate::trace::TraceSink;

/// Result of a single pipeline cycle that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The cycle completed; more cycles are needed.
    Continue {
        /// Fetch found no instruction at the PC this cycle.
        fetch_exhausted: bool,
    },
    /// Execute retired the halting instruction.
    Halted {
        /// Program counter of the halting instruction.
        pc: usize,
    },
}

/// The five-stage pipeline: stages in program order plus their latches.
#[derive(Clone, Debug)]
pub struct Pipeline {
    stages: Vec<Stage>,
    latches: Latches,
    unknown_opcode: UnknownOpcodePolicy,
}

impl Pipeline {
    /// Builds the stage list described by `config`.
    pub fn new(config: &PipelineConfig) -> Self {
        let stages = StageId::ALL
            .into_iter()
            .filter(|&id| id != StageId::Memory || config.schedule_memory_stage)
            .map(Stage::new)
            .collect();
        Self {
            stages,
            latches: Latches::new(),
            unknown_opcode: config.unknown_opcode,
        }
    }

    /// Stage identifiers in the order they tick within a cycle.
    pub fn schedule(&self) -> impl Iterator<Item = StageId> + '_ {
        self.stages.iter().rev().map(PipelineStage::id)
    }

    /// The current latch contents.
    pub const fn latches(&self) -> &Latches {
        &self.latches
    }

    /// Runs one cycle of every scheduled stage in reverse order.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownOpcode`] when an unrecognised opcode reaches
    /// Execute under [`UnknownOpcodePolicy::Reject`].
    pub fn tick(
        &mut self,
        cpu: &mut Cpu,
        cycle: u64,
        sink: &mut dyn TraceSink,
    ) -> Result<CycleOutcome, SimError> {
        sink.cycle_begin(cycle);
        let mut fetch_exhausted = false;

        for stage in self.stages.iter_mut().rev() {
            let id = stage.id();
            let result = {
                let mut ctx = StageContext {
                    cpu: &mut *cpu,
                    latches: &mut self.latches,
                    sink: &mut *sink,
                    cycle,
                    unknown_opcode: self.unknown_opcode,
                };
                stage.tick(&mut ctx)
            };

            let Err(signal) = result else {
                continue;
            };
            sink.signal(cycle, id, &signal);

            match signal {
                StageSignal::Halt { pc } => {
                    tracing::info!(cycle, pc, "halt reached execute");
                    return Ok(CycleOutcome::Halted { pc });
                }
                StageSignal::Exhausted { pc } => {
                    tracing::debug!(cycle, pc, "fetch exhausted");
                    cpu.stats.exhausted_skips += 1;
                    fetch_exhausted = true;
                }
                StageSignal::Unimplemented { stage, phase } => {
                    tracing::warn!(cycle, %stage, %phase, "stage phase not implemented");
                    cpu.stats.unimplemented_reports += 1;
                }
                StageSignal::UnknownOpcode { pc, opcode } => {
                    tracing::error!(cycle, pc, %opcode, "rejecting unknown opcode");
                    return Err(SimError::UnknownOpcode { pc, opcode });
                }
            }
        }

        Ok(CycleOutcome::Continue { fetch_exhausted })
    }
}
