//! # General-Purpose Register Tests
//!
//! Reset values, the absent slot, and the table dump.

use crate::common::builder::r;
use latchpipe_core::common::constants::{ABSENT_REGISTER_VALUE, NUM_REGS};
use latchpipe_core::core::arch::RegisterFile;
use pretty_assertions::assert_eq;

#[test]
fn test_reset_state() {
    let gpr = RegisterFile::new();
    assert_eq!(gpr.read(Some(r(0))), 1);
    for i in 1..NUM_REGS {
        assert_eq!(gpr.read(Some(r(i))), 0);
    }
}

#[test]
fn test_absent_slot_reads_constant() {
    let gpr = RegisterFile::new();
    assert_eq!(gpr.read(None), ABSENT_REGISTER_VALUE);
}

#[test]
fn test_absent_slot_ignores_writes() {
    let mut gpr = RegisterFile::new();
    gpr.write(None, 0x7777);
    assert_eq!(gpr.read(None), ABSENT_REGISTER_VALUE);
    assert_eq!(gpr, RegisterFile::new());
}

#[test]
fn test_r0_is_writable() {
    let mut gpr = RegisterFile::new();
    gpr.write(Some(r(0)), -5);
    assert_eq!(gpr.read(Some(r(0))), -5);
}

#[test]
fn test_write_all_registers() {
    let mut gpr = RegisterFile::new();
    for i in 0..NUM_REGS {
        gpr.write(Some(r(i)), (i as i64) * 100 - 300);
    }
    let expected: Vec<i64> = (0..NUM_REGS).map(|i| (i as i64) * 100 - 300).collect();
    assert_eq!(gpr.snapshot().to_vec(), expected);
}

#[test]
fn test_dump_layout() {
    let mut gpr = RegisterFile::new();
    gpr.write(Some(r(4)), -12);
    let expected = "Registers:\n\
        [ r0 =    1 ]\t[ r1 =    0 ]\t[ r2 =    0 ]\n\
        [ r3 =    0 ]\t[ r4 =  -12 ]\t[ r5 =    0 ]\n\
        [ r6 =    0 ]\t[ r7 =    0 ]\t[ r8 =    0 ]\n";
    assert_eq!(gpr.to_string(), expected);
}
