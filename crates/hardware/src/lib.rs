//! Latch-pipeline simulator library.
//!
//! This crate models a small instruction set running on an idealized five-stage
//! in-order pipeline with single-buffered inter-stage latches:
//! 1. **ISA:** Opcodes (`add`, `sub`, `mult`, `trap`, `noop`) and immutable instruction records.
//! 2. **Architectural state:** Register file, instruction store, and a 32-byte data memory.
//! 3. **Pipeline:** Fetch, Decode, Execute, Memory and Writeback stages, the latch chain
//!    between them, and the reverse-order cycle engine.
//! 4. **Simulation:** Program loading, run control, configuration, tracing, and statistics.
//!
//! # Example
//!
//! ```
//! use latchpipe_core::sim::loader;
//! use latchpipe_core::Simulator;
//!
//! let program = loader::parse_program("add r1 r0 r0\ntrap\n").unwrap();
//! let outcome = Simulator::initialize(program).run().unwrap();
//! assert_eq!(outcome.registers.read(Some("r1".parse().unwrap())), 2);
//! ```

/// Common types and constants (register references, errors, sizes).
pub mod common;
/// Simulator configuration (defaults and serde-deserializable sections).
pub mod config;
/// CPU core (architectural state and the instruction pipeline).
pub mod core;
/// Instruction set (opcodes, instruction records, disassembly).
pub mod isa;
/// Program loader and the top-level simulator.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Diagnostic trace sinks observing cycles, stages, latches, and register traffic.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state bundle owned by the simulator.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::initialize`.
pub use crate::sim::simulator::{RunOutcome, Simulator};
