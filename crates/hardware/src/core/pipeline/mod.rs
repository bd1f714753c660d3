//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Latches:** Single-buffered registers between consecutive stages.
//! 2. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback.
//! 3. **Traits:** The three-phase stage protocol and the per-cycle stage context.
//! 4. **Engine:** Reverse-order scheduling and signal triage.

/// Pipeline scheduler and signal triage.
pub mod engine;

/// Inter-stage pipeline latches (PC, IF/ID, ID/EX, EX/MEM, WB/OUT).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline stage components.
pub mod traits;

pub use engine::{CycleOutcome, Pipeline};
pub use latches::{LatchId, Latches};
pub use traits::{Phase, PipelineStage, StageId};
