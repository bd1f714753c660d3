//! Pipeline Engine Tests.
//!
//! Verifies the scheduler:
//!   1. Stages tick in reverse program order, with MEM only when configured
//!   2. No stage ever reads a latch value written in the same cycle
//!   3. Signals are triaged: halt stops the cycle, exhaustion and
//!      unimplemented phases are absorbed, rejected opcodes abort

use crate::common::builder::ProgramBuilder;
use latchpipe_core::common::{SimError, StageSignal};
use latchpipe_core::config::{PipelineConfig, UnknownOpcodePolicy};
use latchpipe_core::core::Cpu;
use latchpipe_core::core::pipeline::traits::{Phase, StageId};
use latchpipe_core::core::pipeline::{CycleOutcome, Pipeline};
use latchpipe_core::isa::{Instruction, Opcode};
use latchpipe_core::trace::{RecordingSink, TraceEvent};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn with_memory_stage() -> PipelineConfig {
    PipelineConfig {
        schedule_memory_stage: true,
        ..PipelineConfig::default()
    }
}

#[test]
fn test_schedule_is_reverse_order() {
    let pipeline = Pipeline::new(&PipelineConfig::default());
    let order: Vec<StageId> = pipeline.schedule().collect();
    assert_eq!(
        order,
        [StageId::Writeback, StageId::Execute, StageId::Decode, StageId::Fetch]
    );

    let pipeline = Pipeline::new(&with_memory_stage());
    let order: Vec<StageId> = pipeline.schedule().collect();
    assert_eq!(
        order,
        [
            StageId::Writeback,
            StageId::Memory,
            StageId::Execute,
            StageId::Decode,
            StageId::Fetch
        ]
    );
}

#[test]
fn test_first_cycle_fetches_only() {
    let mut cpu = Cpu::new(ProgramBuilder::new().add(1, 0, 0).trap().build());
    let mut pipeline = Pipeline::new(&PipelineConfig::default());
    let mut sink = RecordingSink::new();

    let outcome = pipeline.tick(&mut cpu, 1, &mut sink).unwrap();

    assert_eq!(outcome, CycleOutcome::Continue { fetch_exhausted: false });
    assert_eq!(sink.stage_order(1), pipeline.schedule().collect::<Vec<_>>());
    assert!(pipeline.latches().if_id.read().is_some());
    assert!(pipeline.latches().id_ex.is_empty());
    assert!(pipeline.latches().ex_mem.is_empty());
    assert_eq!(cpu.stats.instructions_retired, 0);
}

#[test]
fn test_halt_stops_the_cycle() {
    let mut cpu = Cpu::new(ProgramBuilder::new().trap().noop().build());
    let mut pipeline = Pipeline::new(&PipelineConfig::default());
    let mut sink = RecordingSink::new();

    for cycle in 1..=2 {
        let outcome = pipeline.tick(&mut cpu, cycle, &mut sink).unwrap();
        assert_eq!(outcome, CycleOutcome::Continue { fetch_exhausted: false });
    }
    let outcome = pipeline.tick(&mut cpu, 3, &mut sink).unwrap();

    assert_eq!(outcome, CycleOutcome::Halted { pc: 0 });
    // Decode and Fetch never ran in the halting cycle.
    assert_eq!(sink.stage_order(3), [StageId::Writeback, StageId::Execute]);
    assert_eq!(cpu.stats.instructions_fetched, 2);
}

#[test]
fn test_exhaustion_is_absorbed() {
    let mut cpu = Cpu::new(ProgramBuilder::new().add(1, 0, 0).build());
    let mut pipeline = Pipeline::new(&PipelineConfig::default());
    let mut sink = RecordingSink::new();

    let _ = pipeline.tick(&mut cpu, 1, &mut sink).unwrap();
    let outcome = pipeline.tick(&mut cpu, 2, &mut sink).unwrap();

    assert_eq!(outcome, CycleOutcome::Continue { fetch_exhausted: true });
    assert_eq!(cpu.stats.exhausted_skips, 1);
    // Decode still consumed the stale IF/ID entry.
    assert_eq!(pipeline.latches().id_ex.read().map(|e| e.val_a), Some(1));
    let signals: Vec<_> = sink.signals().collect();
    assert_eq!(signals, [(StageId::Fetch, &StageSignal::Exhausted { pc: 1 })]);
}

#[test]
fn test_memory_stage_reports_and_writeback_still_runs() {
    let mut cpu = Cpu::new(ProgramBuilder::new().add(1, 0, 0).trap().build());
    let mut pipeline = Pipeline::new(&with_memory_stage());
    let mut sink = RecordingSink::new();

    for cycle in 1..=4 {
        let _ = pipeline.tick(&mut cpu, cycle, &mut sink).unwrap();
    }

    assert_eq!(cpu.stats.unimplemented_reports, 4);
    assert_eq!(cpu.regs.read("r1".parse().ok()), 2);
    let mem_phases: Vec<Phase> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            TraceEvent::StagePhase {
                stage: StageId::Memory,
                phase,
                ..
            } => Some(*phase),
            _ => None,
        })
        .collect();
    assert!(mem_phases.iter().all(|&p| p == Phase::Prepare));
}

#[test]
fn test_reject_policy_aborts() {
    let program = vec![
        Instruction::bare(Opcode::from("load")),
        Instruction::bare(Opcode::Trap),
    ];
    let mut cpu = Cpu::new(program);
    let config = PipelineConfig {
        unknown_opcode: UnknownOpcodePolicy::Reject,
        ..PipelineConfig::default()
    };
    let mut pipeline = Pipeline::new(&config);
    let mut sink = RecordingSink::new();

    let _ = pipeline.tick(&mut cpu, 1, &mut sink).unwrap();
    let _ = pipeline.tick(&mut cpu, 2, &mut sink).unwrap();
    let err = pipeline.tick(&mut cpu, 3, &mut sink).unwrap_err();

    assert_eq!(
        err,
        SimError::UnknownOpcode {
            pc: 0,
            opcode: "load".into()
        }
    );
}

fn arb_instruction() -> impl Strategy<Value = Instruction> {
    let reg = (0usize..9).prop_map(|i| latchpipe_core::common::Reg::new(i).unwrap());
    prop_oneof![
        (
            prop_oneof![Just(Opcode::Add), Just(Opcode::Sub), Just(Opcode::Mult)],
            reg.clone(),
            reg.clone(),
            reg
        )
            .prop_map(|(op, d, a, b)| Instruction::rrr(op, d, a, b)),
        Just(Instruction::bare(Opcode::Noop)),
    ]
}

proptest! {
    #[test]
    fn prop_no_same_cycle_latch_reads(
        body in prop::collection::vec(arb_instruction(), 0..12),
        memory_stage: bool,
    ) {
        let mut program = body;
        program.push(Instruction::bare(Opcode::Trap));
        let mut cpu = Cpu::new(program);
        let config = PipelineConfig {
            schedule_memory_stage: memory_stage,
            ..PipelineConfig::default()
        };
        let mut pipeline = Pipeline::new(&config);
        let mut sink = RecordingSink::new();

        let mut cycle = 0;
        loop {
            cycle += 1;
            prop_assert!(cycle < 64);
            if let CycleOutcome::Halted { .. } = pipeline.tick(&mut cpu, cycle, &mut sink).unwrap() {
                break;
            }
        }

        for event in &sink.events {
            if let TraceEvent::LatchRead { cycle, latch, written_at: Some(w) } = *event {
                prop_assert!(w < cycle, "{latch} read in cycle {cycle} was written in cycle {w}");
            }
        }
    }
}
