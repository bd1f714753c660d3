//! # Statistics Tests

use latchpipe_core::stats::SimStats;

#[test]
fn test_ratios_undefined_before_activity() {
    let stats = SimStats::default();
    assert_eq!(stats.ipc(), None);
    assert_eq!(stats.cpi(), None);
}

#[test]
fn test_ratios() {
    let mut stats = SimStats::default();
    stats.cycles = 8;
    stats.instructions_retired = 2;
    assert_eq!(stats.ipc(), Some(0.25));
    assert_eq!(stats.cpi(), Some(4.0));
}

#[test]
fn test_print_does_not_panic() {
    SimStats::default().print();
}
