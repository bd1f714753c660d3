//! # Register Name Tests
//!
//! Parsing and formatting of `r<N>` names, and the validity range.

use latchpipe_core::common::Reg;
use latchpipe_core::common::constants::NUM_REGS;
use rstest::rstest;

#[rstest]
#[case("r0", 0)]
#[case("r1", 1)]
#[case("r8", 8)]
fn test_parse_valid(#[case] name: &str, #[case] idx: usize) {
    let reg: Reg = name.parse().unwrap();
    assert_eq!(reg.index(), idx);
    assert_eq!(reg.to_string(), name);
}

#[rstest]
#[case("r9")]
#[case("r10")]
#[case("x1")]
#[case("1")]
#[case("r")]
#[case("r01x")]
fn test_parse_invalid(#[case] name: &str) {
    let err = name.parse::<Reg>().unwrap_err();
    assert_eq!(err.0, name);
}

#[test]
fn test_new_bounds() {
    assert!(Reg::new(NUM_REGS - 1).is_some());
    assert!(Reg::new(NUM_REGS).is_none());
}

#[test]
fn test_all_covers_every_slot_in_order() {
    let indices: Vec<usize> = Reg::all().map(Reg::index).collect();
    assert_eq!(indices, (0..NUM_REGS).collect::<Vec<_>>());
}
