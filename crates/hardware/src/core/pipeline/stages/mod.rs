//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. It includes:
//! 1. **Fetch:** Retrieves instructions from the store based on the PC.
//! 2. **Decode:** Resolves register names to values.
//! 3. **Execute:** Performs ALU operations and detects the halt.
//! 4. **Memory:** Reserved; reports every phase as unimplemented.
//! 5. **Writeback:** Commits results to the register file.
//!
//! [`Stage`] dispatches over the five so the engine can hold them in one list.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

pub use decode::DecodeStage;
pub use execute::ExecuteStage;
pub use fetch::FetchStage;
pub use memory::MemoryStage;
pub use writeback::WritebackStage;

use crate::common::StageSignal;
use crate::core::pipeline::traits::{PipelineStage, StageContext, StageId};

/// Enum dispatch over the concrete stages.
#[derive(Clone, Debug)]
pub enum Stage {
    /// IF stage.
    Fetch(FetchStage),
    /// ID stage.
    Decode(DecodeStage),
    /// EX stage.
    Execute(ExecuteStage),
    /// MEM stage.
    Memory(MemoryStage),
    /// WB stage.
    Writeback(WritebackStage),
}

impl Stage {
    /// Creates a fresh stage of the given kind.
    pub fn new(id: StageId) -> Self {
        match id {
            StageId::Fetch => Self::Fetch(FetchStage::new()),
            StageId::Decode => Self::Decode(DecodeStage::new()),
            StageId::Execute => Self::Execute(ExecuteStage::new()),
            StageId::Memory => Self::Memory(MemoryStage),
            StageId::Writeback => Self::Writeback(WritebackStage::new()),
        }
    }

    fn inner(&mut self) -> &mut dyn PipelineStage {
        match self {
            Self::Fetch(s) => s,
            Self::Decode(s) => s,
            Self::Execute(s) => s,
            Self::Memory(s) => s,
            Self::Writeback(s) => s,
        }
    }
}

impl PipelineStage for Stage {
    fn id(&self) -> StageId {
        match self {
            Self::Fetch(_) => StageId::Fetch,
            Self::Decode(_) => StageId::Decode,
            Self::Execute(_) => StageId::Execute,
            Self::Memory(_) => StageId::Memory,
            Self::Writeback(_) => StageId::Writeback,
        }
    }

    fn prepare(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        self.inner().prepare(ctx)
    }

    fn execute(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        self.inner().execute(ctx)
    }

    fn finalize(&mut self, ctx: &mut StageContext<'_>) -> Result<(), StageSignal> {
        self.inner().finalize(ctx)
    }
}
