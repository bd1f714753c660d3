//! Stage Signals and Error Definitions.
//!
//! This module defines the conditions raised inside the simulator. It provides:
//! 1. **Stage Signals:** Halt, Exhausted, Unimplemented, and UnknownOpcode raised by a
//!    stage phase and triaged by the pipeline engine.
//! 2. **Memory Errors:** Out-of-range data memory accesses.
//! 3. **Run Errors:** Conditions that end a run without a halt.
//! 4. **Load Errors:** Failures while turning program text into instructions.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::pipeline::traits::{Phase, StageId};

/// Condition raised by a pipeline stage phase.
///
/// These are not a uniform failure type: the engine treats each variant
/// differently. `Halt` ends the run successfully, `Exhausted` and
/// `Unimplemented` only skip the remainder of the raising stage's turn, and
/// `UnknownOpcode` (raised only when rejection is configured) aborts the run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StageSignal {
    /// The halting opcode reached the Execute stage.
    #[error("halt at pc {pc}")]
    Halt {
        /// Program counter of the halting instruction.
        pc: usize,
    },

    /// Fetch ran past the last instruction in the store.
    #[error("no instruction at pc {pc}")]
    Exhausted {
        /// Program counter that had no instruction.
        pc: usize,
    },

    /// A stage was invoked for a phase it deliberately leaves unimplemented.
    #[error("stage {stage} has not implemented '{phase}'")]
    Unimplemented {
        /// Stage that was invoked.
        stage: StageId,
        /// Phase that was requested.
        phase: Phase,
    },

    /// Execute saw an opcode it does not recognise and rejection is enabled.
    #[error("unknown opcode `{opcode}` at pc {pc}")]
    UnknownOpcode {
        /// Program counter of the offending instruction.
        pc: usize,
        /// Opcode mnemonic as written in the program.
        opcode: String,
    },
}

/// Data memory access error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The byte index lies outside the memory array.
    #[error("data memory index {index} out of bounds (size {len})")]
    OutOfBounds {
        /// Requested byte index.
        index: usize,
        /// Size of the memory in bytes.
        len: usize,
    },
}

/// Failure that ends a simulation run without a halt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The run cannot, or did not within its budget, retire a halting instruction.
    #[error("no halting instruction reached after {cycles} cycles")]
    NoHaltReached {
        /// Number of cycles simulated before giving up.
        cycles: u64,
    },

    /// An unrecognised opcode reached Execute under the reject policy.
    #[error("unknown opcode `{opcode}` at pc {pc}")]
    UnknownOpcode {
        /// Program counter of the offending instruction.
        pc: usize,
        /// Opcode mnemonic as written in the program.
        opcode: String,
    },

    /// A data memory access fell outside the array.
    ///
    /// Reserved for the Memory stage. No current opcode touches data memory,
    /// so the pipeline never raises it today.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// Failure while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line does not have the `opcode [dest src_a src_b]` shape.
    #[error("line {line}: expected `opcode` or `opcode dest src_a src_b`, found `{text}`")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// Offending line, trimmed.
        text: String,
    },

    /// An operand token is not a register name.
    #[error("line {line}: {source}")]
    UnknownRegister {
        /// One-based line number.
        line: usize,
        /// Parse failure for the operand.
        #[source]
        source: crate::common::reg::InvalidRegister,
    },
}
