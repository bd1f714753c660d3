//! Instruction Store.
//!
//! Holds the program as an ordered, append-only sequence of instructions
//! indexed by program counter. The store is filled at load time and only
//! read while the pipeline runs.

use crate::common::StageSignal;
use crate::isa::Instruction;

/// Ordered program memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionStore {
    instructions: Vec<Instruction>,
}

impl InstructionStore {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Appends an instruction after the last one.
    pub fn append(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    /// Returns the instruction at `pc`.
    ///
    /// # Errors
    ///
    /// [`StageSignal::Exhausted`] when `pc` is past the last instruction.
    pub fn fetch(&self, pc: usize) -> Result<&Instruction, StageSignal> {
        self.instructions
            .get(pc)
            .ok_or(StageSignal::Exhausted { pc })
    }

    /// Number of loaded instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` when no instruction has been loaded.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns `true` if any loaded instruction carries the halting opcode.
    pub fn contains_halt(&self) -> bool {
        self.instructions.iter().any(|i| i.opcode().is_halt())
    }

    /// Loaded instructions in program order.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl FromIterator<Instruction> for InstructionStore {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Instruction> for InstructionStore {
    fn extend<T: IntoIterator<Item = Instruction>>(&mut self, iter: T) {
        self.instructions.extend(iter);
    }
}
