//! Diagnostic trace sinks.
//!
//! The pipeline reports what it does to a [`TraceSink`]: the start of each
//! cycle, every stage phase, every latch and register access, and every
//! signal raised by a stage. The sink never influences the simulation.
//!
//! Three sinks are provided:
//! 1. [`NullSink`] discards everything (the default).
//! 2. [`LogSink`] forwards events to `tracing` at `TRACE` level.
//! 3. [`RecordingSink`] keeps events in memory for inspection.

use crate::common::{Reg, StageSignal};
use crate::core::pipeline::latches::LatchId;
use crate::core::pipeline::traits::{Phase, StageId};

/// Observer for pipeline activity.
///
/// Every method has an empty default, so implementors only override the
/// events they care about.
pub trait TraceSink {
    /// A new cycle is starting.
    fn cycle_begin(&mut self, _cycle: u64) {}

    /// A stage is about to run one of its phases.
    fn stage_phase(&mut self, _cycle: u64, _stage: StageId, _phase: Phase) {}

    /// A stage read `latch`, last written in cycle `written_at`.
    fn latch_read(&mut self, _cycle: u64, _latch: LatchId, _written_at: Option<u64>) {}

    /// A stage overwrote `latch`.
    fn latch_write(&mut self, _cycle: u64, _latch: LatchId) {}

    /// A register slot was read.
    fn register_read(&mut self, _cycle: u64, _reg: Option<Reg>, _value: i64) {}

    /// A register slot was written.
    fn register_write(&mut self, _cycle: u64, _reg: Option<Reg>, _value: i64) {}

    /// A stage raised a signal.
    fn signal(&mut self, _cycle: u64, _stage: StageId, _signal: &StageSignal) {}
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn cycle_begin(&mut self, cycle: u64) {
        (**self).cycle_begin(cycle);
    }

    fn stage_phase(&mut self, cycle: u64, stage: StageId, phase: Phase) {
        (**self).stage_phase(cycle, stage, phase);
    }

    fn latch_read(&mut self, cycle: u64, latch: LatchId, written_at: Option<u64>) {
        (**self).latch_read(cycle, latch, written_at);
    }

    fn latch_write(&mut self, cycle: u64, latch: LatchId) {
        (**self).latch_write(cycle, latch);
    }

    fn register_read(&mut self, cycle: u64, reg: Option<Reg>, value: i64) {
        (**self).register_read(cycle, reg, value);
    }

    fn register_write(&mut self, cycle: u64, reg: Option<Reg>, value: i64) {
        (**self).register_write(cycle, reg, value);
    }

    fn signal(&mut self, cycle: u64, stage: StageId, signal: &StageSignal) {
        (**self).signal(cycle, stage, signal);
    }
}

/// Sink that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {}

/// Sink that emits every event as a `tracing` event at `TRACE` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

fn slot_name(reg: Option<Reg>) -> String {
    reg.map_or_else(|| "-".to_owned(), |r| r.to_string())
}

impl TraceSink for LogSink {
    fn cycle_begin(&mut self, cycle: u64) {
        tracing::trace!(target: "latchpipe::cycle", cycle, "cycle");
    }

    fn stage_phase(&mut self, cycle: u64, stage: StageId, phase: Phase) {
        tracing::trace!(target: "latchpipe::stage", cycle, %stage, %phase);
    }

    fn latch_read(&mut self, cycle: u64, latch: LatchId, written_at: Option<u64>) {
        tracing::trace!(target: "latchpipe::latch", cycle, %latch, ?written_at, "read");
    }

    fn latch_write(&mut self, cycle: u64, latch: LatchId) {
        tracing::trace!(target: "latchpipe::latch", cycle, %latch, "write");
    }

    fn register_read(&mut self, cycle: u64, reg: Option<Reg>, value: i64) {
        tracing::trace!(target: "latchpipe::reg", cycle, reg = %slot_name(reg), value, "read");
    }

    fn register_write(&mut self, cycle: u64, reg: Option<Reg>, value: i64) {
        tracing::trace!(target: "latchpipe::reg", cycle, reg = %slot_name(reg), value, "write");
    }

    fn signal(&mut self, cycle: u64, stage: StageId, signal: &StageSignal) {
        tracing::trace!(target: "latchpipe::signal", cycle, %stage, %signal);
    }
}

/// One recorded pipeline event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// See [`TraceSink::cycle_begin`].
    CycleBegin {
        /// Cycle number.
        cycle: u64,
    },
    /// See [`TraceSink::stage_phase`].
    StagePhase {
        /// Cycle number.
        cycle: u64,
        /// Stage running.
        stage: StageId,
        /// Phase about to run.
        phase: Phase,
    },
    /// See [`TraceSink::latch_read`].
    LatchRead {
        /// Cycle number.
        cycle: u64,
        /// Latch read.
        latch: LatchId,
        /// Cycle of its last write.
        written_at: Option<u64>,
    },
    /// See [`TraceSink::latch_write`].
    LatchWrite {
        /// Cycle number.
        cycle: u64,
        /// Latch written.
        latch: LatchId,
    },
    /// See [`TraceSink::register_read`].
    RegisterRead {
        /// Cycle number.
        cycle: u64,
        /// Slot read.
        reg: Option<Reg>,
        /// Value returned.
        value: i64,
    },
    /// See [`TraceSink::register_write`].
    RegisterWrite {
        /// Cycle number.
        cycle: u64,
        /// Slot written.
        reg: Option<Reg>,
        /// Value stored.
        value: i64,
    },
    /// See [`TraceSink::signal`].
    Signal {
        /// Cycle number.
        cycle: u64,
        /// Stage that raised it.
        stage: StageId,
        /// The signal.
        signal: StageSignal,
    },
}

/// Sink that stores every event in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Recorded events, oldest first.
    pub events: Vec<TraceEvent>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals recorded so far, with the stage that raised each.
    pub fn signals(&self) -> impl Iterator<Item = (StageId, &StageSignal)> + '_ {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Signal { stage, signal, .. } => Some((*stage, signal)),
            _ => None,
        })
    }

    /// Stages in the order their prepare phase ran during `cycle`.
    pub fn stage_order(&self, cycle: u64) -> Vec<StageId> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                TraceEvent::StagePhase {
                    cycle: c,
                    stage,
                    phase: Phase::Prepare,
                } if c == cycle => Some(stage),
                _ => None,
            })
            .collect()
    }
}

impl TraceSink for RecordingSink {
    fn cycle_begin(&mut self, cycle: u64) {
        self.events.push(TraceEvent::CycleBegin { cycle });
    }

    fn stage_phase(&mut self, cycle: u64, stage: StageId, phase: Phase) {
        self.events.push(TraceEvent::StagePhase {
            cycle,
            stage,
            phase,
        });
    }

    fn latch_read(&mut self, cycle: u64, latch: LatchId, written_at: Option<u64>) {
        self.events.push(TraceEvent::LatchRead {
            cycle,
            latch,
            written_at,
        });
    }

    fn latch_write(&mut self, cycle: u64, latch: LatchId) {
        self.events.push(TraceEvent::LatchWrite { cycle, latch });
    }

    fn register_read(&mut self, cycle: u64, reg: Option<Reg>, value: i64) {
        self.events
            .push(TraceEvent::RegisterRead { cycle, reg, value });
    }

    fn register_write(&mut self, cycle: u64, reg: Option<Reg>, value: i64) {
        self.events
            .push(TraceEvent::RegisterWrite { cycle, reg, value });
    }

    fn signal(&mut self, cycle: u64, stage: StageId, signal: &StageSignal) {
        self.events.push(TraceEvent::Signal {
            cycle,
            stage,
            signal: signal.clone(),
        });
    }
}
