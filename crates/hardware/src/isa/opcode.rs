//! Opcode tags.
//!
//! Defines the opcode set understood by the Execute stage together with the
//! numeric encoding table of the instruction set. Mnemonics outside the table
//! are preserved verbatim in [`Opcode::Other`] so the pipeline can pass them
//! through.

use std::fmt;

/// No-operation encoding.
pub const NOOP: u8 = 0x00;
/// Addition encoding.
pub const ADD: u8 = 0x01;
/// Subtraction encoding.
pub const SUB: u8 = 0x02;
/// Multiplication encoding.
pub const MULT: u8 = 0x04;
/// Halting trap encoding.
pub const TRAP: u8 = 0x08;

/// Operation tag of an instruction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `dest = src_a + src_b`.
    Add,
    /// `dest = src_a - src_b`.
    Sub,
    /// `dest = src_a * src_b`.
    Mult,
    /// Halts the run when it reaches Execute.
    Trap,
    /// Does nothing.
    Noop,
    /// Unrecognised mnemonic, kept as written.
    Other(String),
}

impl Opcode {
    /// Maps a mnemonic to its opcode. Matching is exact (lowercase).
    pub fn from_mnemonic(token: &str) -> Self {
        match token {
            "add" => Self::Add,
            "sub" => Self::Sub,
            "mult" => Self::Mult,
            "trap" => Self::Trap,
            "noop" => Self::Noop,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the assembly mnemonic.
    pub fn mnemonic(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mult => "mult",
            Self::Trap => "trap",
            Self::Noop => "noop",
            Self::Other(s) => s,
        }
    }

    /// Returns the numeric encoding, or `None` for unrecognised opcodes.
    pub const fn encoding(&self) -> Option<u8> {
        match self {
            Self::Add => Some(ADD),
            Self::Sub => Some(SUB),
            Self::Mult => Some(MULT),
            Self::Trap => Some(TRAP),
            Self::Noop => Some(NOOP),
            Self::Other(_) => None,
        }
    }

    /// Returns `true` for the opcode that stops the run.
    #[inline]
    pub const fn is_halt(&self) -> bool {
        matches!(self, Self::Trap)
    }
}

impl From<&str> for Opcode {
    fn from(token: &str) -> Self {
        Self::from_mnemonic(token)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
