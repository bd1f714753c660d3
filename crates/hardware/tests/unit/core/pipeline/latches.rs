//! # Latch Tests

use crate::common::builder::IfIdBuilder;
use latchpipe_core::core::pipeline::latches::{Latch, LatchId, Latches, PcEntry};
use latchpipe_core::isa::Opcode;

#[test]
fn test_reset_chain() {
    let latches = Latches::new();
    assert_eq!(latches.pc.read(), Some(&PcEntry { pc: 0 }));
    assert!(latches.if_id.is_empty());
    assert!(latches.id_ex.is_empty());
    assert!(latches.ex_mem.is_empty());
    assert!(latches.retired.is_empty());
    for id in LatchId::ALL {
        assert_eq!(latches.written_at(id), None, "{id} must start unwritten");
    }
}

#[test]
fn test_single_buffer_overwrites() {
    let mut latch = Latch::empty();
    latch.write(1, Some(IfIdBuilder::new(Opcode::Add).pc(0).build()));
    latch.write(2, Some(IfIdBuilder::new(Opcode::Sub).pc(1).build()));
    assert_eq!(latch.read().map(|e| e.pc), Some(1));
    assert_eq!(latch.written_at(), Some(2));
}

#[test]
fn test_writing_a_bubble_empties_the_latch() {
    let mut latch = Latch::preset(PcEntry { pc: 3 });
    latch.write(4, None);
    assert!(latch.is_empty());
    assert_eq!(latch.written_at(), Some(4));
}

#[test]
fn test_latch_names() {
    let names: Vec<String> = LatchId::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["PC", "IF/ID", "ID/EX", "EX/MEM", "WB/OUT"]);
}
