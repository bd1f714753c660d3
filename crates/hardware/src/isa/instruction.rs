//! Instruction records.
//!
//! An [`Instruction`] is created once at program-load time and never mutated.
//! Operand order follows the assembly text: destination first, then the two
//! sources. Any operand may be absent.

use std::fmt;

use crate::common::Reg;
use crate::isa::opcode::Opcode;

/// A single program instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    dest: Option<Reg>,
    src_a: Option<Reg>,
    src_b: Option<Reg>,
}

impl Instruction {
    /// Creates an instruction from its opcode and operand references.
    pub const fn new(
        opcode: Opcode,
        dest: Option<Reg>,
        src_a: Option<Reg>,
        src_b: Option<Reg>,
    ) -> Self {
        Self {
            opcode,
            dest,
            src_a,
            src_b,
        }
    }

    /// Creates a three-register instruction.
    pub const fn rrr(opcode: Opcode, dest: Reg, src_a: Reg, src_b: Reg) -> Self {
        Self::new(opcode, Some(dest), Some(src_a), Some(src_b))
    }

    /// Creates an instruction with all operands absent.
    pub const fn bare(opcode: Opcode) -> Self {
        Self::new(opcode, None, None, None)
    }

    /// Opcode tag.
    pub const fn opcode(&self) -> &Opcode {
        &self.opcode
    }

    /// Destination register, if any.
    pub const fn dest(&self) -> Option<Reg> {
        self.dest
    }

    /// First source register, if any.
    pub const fn src_a(&self) -> Option<Reg> {
        self.src_a
    }

    /// Second source register, if any.
    pub const fn src_b(&self) -> Option<Reg> {
        self.src_b
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::isa::disasm::disassemble(self))
    }
}
