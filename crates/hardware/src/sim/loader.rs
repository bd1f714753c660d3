//! Program Loader.
//!
//! This module turns a textual assembly listing into instructions. It performs:
//! 1. **Tokenizing:** Each line is split on whitespace and commas, so both
//!    `add r1 r0 r0` and `add r1, r0, r0` are accepted.
//! 2. **Operand Order:** Three operands are read as `dest src_a src_b`.
//! 3. **Bare Opcodes:** A line with a single token (`trap`, `noop`) has every
//!    operand set to the absent slot.
//! 4. **Comments:** Text after `#` or `;` is ignored, as are blank lines.
//!
//! Opcodes are not validated here; unknown mnemonics load as `Opcode::Other`.

use std::fs;
use std::path::Path;

use crate::common::{LoadError, Reg};
use crate::core::arch::InstructionStore;
use crate::isa::{Instruction, Opcode};

/// Parses one line; returns `None` for blank and comment-only lines.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] for a wrong operand count and
/// [`LoadError::UnknownRegister`] for a bad register name.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Instruction>, LoadError> {
    let code = line
        .split(['#', ';'])
        .next()
        .unwrap_or_default()
        .trim();
    if code.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = code
        .split([' ', '\t', ','])
        .filter(|t| !t.is_empty())
        .collect();

    let reg = |tok: &str| {
        tok.parse::<Reg>()
            .map_err(|source| LoadError::UnknownRegister {
                line: line_no,
                source,
            })
    };

    match tokens[..] {
        [op] => Ok(Some(Instruction::bare(Opcode::from_mnemonic(op)))),
        [op, dest, a, b] => Ok(Some(Instruction::rrr(
            Opcode::from_mnemonic(op),
            reg(dest)?,
            reg(a)?,
            reg(b)?,
        ))),
        _ => Err(LoadError::Malformed {
            line: line_no,
            text: code.to_owned(),
        }),
    }
}

/// Parses a complete listing.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered; line numbers are one-based.
pub fn parse_program(text: &str) -> Result<Vec<Instruction>, LoadError> {
    let mut program = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(inst) = parse_line(idx + 1, line)? {
            program.push(inst);
        }
    }
    tracing::debug!(instructions = program.len(), "program parsed");
    Ok(program)
}

/// Parses a listing and appends it to an existing store.
///
/// Returns the number of instructions appended.
///
/// # Errors
///
/// See [`parse_program`]. Nothing is appended if any line fails.
pub fn load_into(store: &mut InstructionStore, text: &str) -> Result<usize, LoadError> {
    let program = parse_program(text)?;
    let count = program.len();
    store.extend(program);
    Ok(count)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise see
/// [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<Instruction>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loading program");
    parse_program(&text)
}
