//! # Program Loader Tests

use crate::common::builder::r;
use latchpipe_core::common::LoadError;
use latchpipe_core::core::arch::InstructionStore;
use latchpipe_core::isa::{Instruction, Opcode};
use latchpipe_core::sim::loader::{load_into, load_program, parse_line, parse_program};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;

#[rstest]
#[case("add r1 r0 r0")]
#[case("add r1, r0, r0")]
#[case("  add\tr1,r0 ,r0  ")]
#[case("add r1 r0 r0 # doubles r0")]
fn test_separators(#[case] line: &str) {
    let inst = parse_line(1, line).unwrap().unwrap();
    assert_eq!(inst, Instruction::rrr(Opcode::Add, r(1), r(0), r(0)));
}

#[test]
fn test_operand_order_is_dest_first() {
    let inst = parse_line(1, "sub r3 r5 r7").unwrap().unwrap();
    assert_eq!(inst.dest(), Some(r(3)));
    assert_eq!(inst.src_a(), Some(r(5)));
    assert_eq!(inst.src_b(), Some(r(7)));
}

#[rstest]
#[case("trap", Opcode::Trap)]
#[case("noop", Opcode::Noop)]
#[case("halt", Opcode::Other("halt".into()))]
fn test_bare_opcode(#[case] line: &str, #[case] op: Opcode) {
    assert_eq!(parse_line(1, line).unwrap(), Some(Instruction::bare(op)));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("# comment")]
#[case("; comment")]
fn test_skipped_lines(#[case] line: &str) {
    assert_eq!(parse_line(1, line).unwrap(), None);
}

#[rstest]
#[case("add r1")]
#[case("add r1 r2")]
#[case("add r1 r2 r3 r4")]
fn test_malformed(#[case] line: &str) {
    match parse_line(4, line) {
        Err(LoadError::Malformed { line: 4, text }) => assert_eq!(text, line),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_unknown_register() {
    match parse_line(2, "add r9 r0 r0") {
        Err(LoadError::UnknownRegister { line: 2, source }) => assert_eq!(source.0, "r9"),
        other => panic!("expected UnknownRegister, got {other:?}"),
    }
}

#[test]
fn test_program_line_numbers_count_blank_lines() {
    let err = parse_program("add r1 r0 r0\n\nadd r2\n").unwrap_err();
    assert!(matches!(err, LoadError::Malformed { line: 3, .. }));
}

#[test]
fn test_parse_program() {
    let program = parse_program("# demo\nadd r1 r0 r0\nmult r2, r1, r1\n\ntrap\n").unwrap();
    assert_eq!(
        program,
        [
            Instruction::rrr(Opcode::Add, r(1), r(0), r(0)),
            Instruction::rrr(Opcode::Mult, r(2), r(1), r(1)),
            Instruction::bare(Opcode::Trap),
        ]
    );
}

#[test]
fn test_load_into_appends() {
    let mut store = InstructionStore::new();
    assert_eq!(load_into(&mut store, "noop\n").unwrap(), 1);
    assert_eq!(load_into(&mut store, "add r1 r0 r0\ntrap").unwrap(), 2);
    assert_eq!(store.len(), 3);
    assert_eq!(store.fetch(2).unwrap().opcode(), &Opcode::Trap);
}

#[test]
fn test_load_into_is_all_or_nothing() {
    let mut store = InstructionStore::new();
    assert!(load_into(&mut store, "noop\nbogus r1\n").is_err());
    assert!(store.is_empty());
}

#[test]
fn test_load_program_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "add r1 r0 r0").unwrap();
    writeln!(file, "trap").unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(program.len(), 2);
}

#[test]
fn test_load_program_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.asm");
    match load_program(&path) {
        Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}
