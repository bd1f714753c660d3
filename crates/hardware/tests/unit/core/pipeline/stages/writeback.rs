//! Writeback Stage Unit Tests.

use crate::common::builder::{IdExBuilder, r};
use crate::common::harness::StageBench;
use latchpipe_core::core::arch::RegisterFile;
use latchpipe_core::core::pipeline::stages::WritebackStage;
use latchpipe_core::isa::Opcode;

#[test]
fn test_writes_val_dest_to_dest() {
    let mut bench = StageBench::empty();
    let entry = IdExBuilder::new(Opcode::Add).dest(r(6), 42).build();
    bench.latches.ex_mem.write(0, Some(entry.clone()));

    bench.tick(&mut WritebackStage::new()).unwrap();

    assert_eq!(bench.cpu.regs.read(Some(r(6))), 42);
    assert_eq!(bench.latches.retired.read(), Some(&entry));
    assert_eq!(bench.cpu.stats.instructions_retired, 1);
    assert_eq!(bench.cpu.stats.inst_alu, 1);
}

#[test]
fn test_absent_dest_discards_write() {
    let mut bench = StageBench::empty();
    let mut entry = IdExBuilder::new(Opcode::Noop).build();
    entry.val_dest = 1234;
    bench.latches.ex_mem.write(0, Some(entry));

    bench.tick(&mut WritebackStage::new()).unwrap();

    assert_eq!(bench.cpu.regs, RegisterFile::new());
    assert_eq!(bench.cpu.stats.inst_noop, 1);
}

#[test]
fn test_pass_through_rewrites_original_value() {
    let mut bench = StageBench::empty();
    bench.cpu.regs.write(Some(r(2)), 8);
    let entry = IdExBuilder::new(Opcode::Other("load".into()))
        .dest(r(2), 5)
        .build();
    bench.latches.ex_mem.write(0, Some(entry));

    bench.tick(&mut WritebackStage::new()).unwrap();

    assert_eq!(bench.cpu.regs.read(Some(r(2))), 5);
    assert_eq!(bench.cpu.stats.inst_unknown, 1);
}

#[test]
fn test_bubble_changes_nothing() {
    let mut bench = StageBench::empty();
    bench.tick(&mut WritebackStage::new()).unwrap();
    assert_eq!(bench.cpu.regs, RegisterFile::new());
    assert_eq!(bench.cpu.stats.instructions_retired, 0);
    assert!(bench.latches.retired.is_empty());
}
