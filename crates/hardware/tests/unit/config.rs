//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and file loading.

use latchpipe_core::common::constants::DEFAULT_MAX_CYCLES;
use latchpipe_core::config::*;
use std::io::Write;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace);
    assert!(!config.general.print_stats);
    assert_eq!(config.pipeline.max_cycles, DEFAULT_MAX_CYCLES);
    assert!(!config.pipeline.schedule_memory_stage);
    assert_eq!(config.pipeline.unknown_opcode, UnknownOpcodePolicy::Ignore);
    assert!(config.pipeline.stop_when_unreachable);
}

#[test]
fn test_empty_json_matches_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.pipeline.max_cycles, DEFAULT_MAX_CYCLES);
    assert!(config.pipeline.stop_when_unreachable);
    assert_eq!(config.pipeline.unknown_opcode, UnknownOpcodePolicy::Ignore);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "pipeline": { "schedule_memory_stage": true } }"#).unwrap();
    assert!(config.pipeline.schedule_memory_stage);
    assert_eq!(config.pipeline.max_cycles, DEFAULT_MAX_CYCLES);
    assert!(config.pipeline.stop_when_unreachable);
}

#[test]
fn test_full_config() {
    let json = r#"{
        "general": { "trace": true, "print_stats": true },
        "pipeline": {
            "max_cycles": 500,
            "schedule_memory_stage": true,
            "unknown_opcode": "Reject",
            "stop_when_unreachable": false
        }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.general.trace);
    assert!(config.general.print_stats);
    assert_eq!(config.pipeline.max_cycles, 500);
    assert!(config.pipeline.schedule_memory_stage);
    assert_eq!(config.pipeline.unknown_opcode, UnknownOpcodePolicy::Reject);
    assert!(!config.pipeline.stop_when_unreachable);
}

#[test]
fn test_invalid_policy_rejected() {
    assert!(Config::from_json(r#"{ "pipeline": { "unknown_opcode": "Explode" } }"#).is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "pipeline": {{ "max_cycles": 7 }} }}"#).unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.pipeline.max_cycles, 7);
}

#[test]
fn test_from_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("none.json");
    assert!(matches!(Config::from_file(&missing), Err(ConfigError::Io { .. })));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();
    assert!(matches!(Config::from_file(&bad), Err(ConfigError::Parse(_))));
}
