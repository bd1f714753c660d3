//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the decoupling registers carried between the five stages:
//! PC → Fetch → IF/ID → Decode → ID/EX → Execute → EX/MEM → (Memory) → Writeback → WB/OUT.
//!
//! 1. **Single Buffering:** Each latch holds exactly one value. A stage that reads a
//!    latch must do so before the upstream stage overwrites it in the same cycle,
//!    which the engine guarantees by ticking stages in reverse order.
//! 2. **Growing Field Set:** IF/ID carries the raw instruction fields; ID/EX and every
//!    later latch additionally carry the three operand values.
//! 3. **Bubbles:** A latch starts empty (`None`) and stays empty until its producer
//!    first finalizes an instruction; an empty latch propagates downstream as a bubble.
//! 4. **Write Stamps:** Every latch remembers the cycle of its last write so observers
//!    can check that a reader never sees a value produced in its own cycle.

use std::fmt;

use crate::common::Reg;
use crate::isa::Opcode;

/// A single-buffered latch holding one entry (or a bubble).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latch<T> {
    value: Option<T>,
    written_at: Option<u64>,
}

impl<T> Latch<T> {
    /// Creates an empty latch that has never been written.
    pub const fn empty() -> Self {
        Self {
            value: None,
            written_at: None,
        }
    }

    /// Creates a latch holding `value` before the first cycle.
    pub const fn preset(value: T) -> Self {
        Self {
            value: Some(value),
            written_at: None,
        }
    }

    /// Current entry, or `None` for a bubble.
    pub const fn read(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Overwrites the latch during `cycle`.
    pub fn write(&mut self, cycle: u64, value: Option<T>) {
        self.value = value;
        self.written_at = Some(cycle);
    }

    /// Cycle of the most recent write, or `None` if never written.
    pub const fn written_at(&self) -> Option<u64> {
        self.written_at
    }

    /// Returns `true` if the latch holds a bubble.
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Entry of the latch feeding Fetch: the next program counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcEntry {
    /// Index of the next instruction to fetch.
    pub pc: usize,
}

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
///
/// Contains the raw fields of the fetched instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: usize,
    /// Opcode tag.
    pub opcode: Opcode,
    /// Destination register name.
    pub dest: Option<Reg>,
    /// First source register name.
    pub src_a: Option<Reg>,
    /// Second source register name.
    pub src_b: Option<Reg>,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Carries the IF/ID fields plus the three values resolved through the
/// register file. Execute overwrites `val_dest` with its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: usize,
    /// Opcode tag.
    pub opcode: Opcode,
    /// Destination register name.
    pub dest: Option<Reg>,
    /// First source register name.
    pub src_a: Option<Reg>,
    /// Second source register name.
    pub src_b: Option<Reg>,
    /// Value of `src_a` when decoded.
    pub val_a: i64,
    /// Value of `src_b` when decoded.
    pub val_b: i64,
    /// Value of `dest` when decoded; the result once executed.
    pub val_dest: i64,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory/Writeback stage).
pub type ExMemEntry = IdExEntry;

/// Entry in the terminal latch written by Writeback.
///
/// Nothing reads it during a run; it exposes the last retired instruction.
pub type RetiredEntry = IdExEntry;

/// Identifies one latch in the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatchId {
    /// Program counter latch feeding Fetch.
    Pc,
    /// Fetch to Decode.
    IfId,
    /// Decode to Execute.
    IdEx,
    /// Execute to Writeback.
    ExMem,
    /// Output of Writeback.
    Retired,
}

impl LatchId {
    /// Every latch in pipeline order.
    pub const ALL: [Self; 5] = [Self::Pc, Self::IfId, Self::IdEx, Self::ExMem, Self::Retired];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::IfId => "IF/ID",
            Self::IdEx => "ID/EX",
            Self::ExMem => "EX/MEM",
            Self::Retired => "WB/OUT",
        }
    }
}

impl fmt::Display for LatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The chain of latches owned by the pipeline.
///
/// The Memory stage has no latch of its own: it does no work in the current
/// instruction set, so Writeback consumes EX/MEM directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latches {
    /// Program counter; read and advanced by Fetch.
    pub pc: Latch<PcEntry>,
    /// Fetch to Decode.
    pub if_id: Latch<IfIdEntry>,
    /// Decode to Execute.
    pub id_ex: Latch<IdExEntry>,
    /// Execute to Writeback.
    pub ex_mem: Latch<ExMemEntry>,
    /// Output of Writeback.
    pub retired: Latch<RetiredEntry>,
}

impl Latches {
    /// Creates the chain at reset: PC 0 and bubbles everywhere else.
    pub const fn new() -> Self {
        Self {
            pc: Latch::preset(PcEntry { pc: 0 }),
            if_id: Latch::empty(),
            id_ex: Latch::empty(),
            ex_mem: Latch::empty(),
            retired: Latch::empty(),
        }
    }

    /// Cycle in which the given latch was last written.
    pub const fn written_at(&self, id: LatchId) -> Option<u64> {
        match id {
            LatchId::Pc => self.pc.written_at(),
            LatchId::IfId => self.if_id.written_at(),
            LatchId::IdEx => self.id_ex.written_at(),
            LatchId::ExMem => self.ex_mem.written_at(),
            LatchId::Retired => self.retired.written_at(),
        }
    }

    /// Program counter Fetch will use next.
    pub fn next_pc(&self) -> usize {
        self.pc.read().map_or(0, |e| e.pc)
    }
}

impl Default for Latches {
    fn default() -> Self {
        Self::new()
    }
}
