//! Instruction Set Architecture (ISA) Definitions.
//!
//! The instruction set is deliberately tiny: three-register arithmetic
//! (`add`, `sub`, `mult`), the halting `trap`, and `noop`. Any other mnemonic is
//! carried through the pipeline untouched.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Immutable instruction records.
pub mod instruction;

/// Opcode tags and their mnemonic / numeric encodings.
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::Opcode;
