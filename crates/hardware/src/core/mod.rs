//! Core processor implementation.
//!
//! This module contains the architectural state, the `Cpu` container that
//! bundles it, and the five-stage instruction pipeline that operates on it.

/// Architecture-specific components (register file, instruction store, data memory).
pub mod arch;

/// CPU state container.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, engine).
pub mod pipeline;

pub use self::cpu::Cpu;
