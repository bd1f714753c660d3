//! Common utilities and types used throughout the simulator.
//!
//! This module provides the register reference type, the error and signal
//! enums raised at stage and run boundaries, and sizing constants shared by
//! the architectural state and the pipeline.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and stage signal definitions.
pub mod error;

/// Register references (`r0`..`r8`).
pub mod reg;

pub use error::{LoadError, MemoryError, SimError, StageSignal};
pub use reg::Reg;
