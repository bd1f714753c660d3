//! Data Memory.
//!
//! A fixed-size, zero-initialized, byte-addressable array. Every access is
//! bounds-checked; an out-of-range index is reported as
//! [`MemoryError::OutOfBounds`], which converts into the fatal
//! [`SimError::Memory`](crate::common::SimError::Memory).
//!
//! No opcode in the current instruction set touches data memory. It is the
//! dependency reserved for the Memory stage.

use std::fmt;

use crate::common::MemoryError;
use crate::common::constants::DATA_MEMORY_SIZE;

/// Number of bytes printed per row by the `Display` dump.
const BYTES_PER_ROW: usize = 8;

/// Byte-addressable data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    bytes: [u8; DATA_MEMORY_SIZE],
}

impl DataMemory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            bytes: [0; DATA_MEMORY_SIZE],
        }
    }

    /// Size of the memory in bytes.
    pub const fn len(&self) -> usize {
        DATA_MEMORY_SIZE
    }

    /// Always `false`; the memory has a fixed non-zero size.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads one byte.
    pub fn read_byte(&self, index: usize) -> Result<u8, MemoryError> {
        self.bytes
            .get(index)
            .copied()
            .ok_or(MemoryError::OutOfBounds {
                index,
                len: DATA_MEMORY_SIZE,
            })
    }

    /// Writes one byte.
    pub fn write_byte(&mut self, index: usize, val: u8) -> Result<(), MemoryError> {
        let slot = self.bytes.get_mut(index).ok_or(MemoryError::OutOfBounds {
            index,
            len: DATA_MEMORY_SIZE,
        })?;
        *slot = val;
        Ok(())
    }

    /// Returns the full byte array.
    pub const fn as_bytes(&self) -> &[u8; DATA_MEMORY_SIZE] {
        &self.bytes
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DataMemory {
    /// Renders the memory as hex bytes, eight to a row, e.g. `[ 0x00 ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Memory:")?;
        for (i, byte) in self.bytes.iter().enumerate() {
            write!(f, "[ {byte:#04x} ] ")?;
            if i % BYTES_PER_ROW == BYTES_PER_ROW - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
