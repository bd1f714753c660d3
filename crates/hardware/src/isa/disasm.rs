//! Instruction Disassembler.
//!
//! Renders an instruction back into its assembly spelling for debug tracing,
//! logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use latchpipe_core::isa::{disasm::disassemble, Instruction, Opcode};
//!
//! let add = Instruction::rrr(
//!     Opcode::Add,
//!     "r1".parse().unwrap(),
//!     "r0".parse().unwrap(),
//!     "r0".parse().unwrap(),
//! );
//! assert_eq!(disassemble(&add), "add r1, r0, r0");
//! assert_eq!(disassemble(&Instruction::bare(Opcode::Trap)), "trap");
//! ```

use crate::common::Reg;
use crate::isa::instruction::Instruction;

/// Placeholder printed for an absent operand.
const ABSENT: &str = "-";

/// Returns the operand spelling, or `-` when absent.
#[inline]
fn operand(reg: Option<Reg>) -> String {
    reg.map_or_else(|| ABSENT.to_string(), |r| r.to_string())
}

/// Disassembles an instruction into a human-readable string.
///
/// Instructions whose operands are all absent print as the bare mnemonic.
pub fn disassemble(inst: &Instruction) -> String {
    let mnemonic = inst.opcode().mnemonic();
    if inst.dest().is_none() && inst.src_a().is_none() && inst.src_b().is_none() {
        return mnemonic.to_string();
    }
    format!(
        "{} {}, {}, {}",
        mnemonic,
        operand(inst.dest()),
        operand(inst.src_a()),
        operand(inst.src_b())
    )
}
