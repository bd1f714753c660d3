//! Simulator: owns both the CPU and the pipeline side-by-side.
//!
//! Stages borrow the CPU and the latch chain separately for each cycle, so
//! neither structure holds a reference into the other.

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::{DataMemory, RegisterFile};
use crate::core::pipeline::latches::{Latches, RetiredEntry};
use crate::core::pipeline::{CycleOutcome, Pipeline};
use crate::isa::Instruction;
use crate::stats::SimStats;
use crate::trace::{NullSink, TraceSink};

/// State of the simulator after a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The halting instruction has not reached Execute yet.
    Running,
    /// The run is over.
    Halted {
        /// Program counter of the halting instruction.
        pc: usize,
    },
}

/// Final state of a run that reached its halting instruction.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Register file after the last cycle.
    pub registers: RegisterFile,
    /// Data memory after the last cycle.
    pub memory: DataMemory,
    /// Cycles simulated, including the halting one.
    pub cycles: u64,
    /// Program counter of the halting instruction.
    pub halt_pc: usize,
    /// Last instruction to leave Writeback, if any.
    pub last_retired: Option<RetiredEntry>,
    /// Counters collected during the run.
    pub stats: SimStats,
}

/// Top-level simulator: CPU architectural state + pipeline.
#[derive(Debug)]
pub struct Simulator<S: TraceSink = NullSink> {
    /// CPU architectural state (registers, memories, stats).
    pub cpu: Cpu,
    /// Pipeline implementation (stages + latches).
    pub pipeline: Pipeline,
    config: Config,
    sink: S,
    cycle: u64,
    halt_reachable: bool,
    halted_at: Option<usize>,
}

impl Simulator<NullSink> {
    /// Loads `program` into a fresh machine with the default configuration.
    ///
    /// Registers start at reset (`r0` = 1, all others 0), data memory is
    /// zeroed, and every latch is empty.
    pub fn initialize(program: impl IntoIterator<Item = Instruction>) -> Self {
        Self::with_config(program, &Config::default())
    }

    /// Loads `program` with an explicit configuration.
    pub fn with_config(program: impl IntoIterator<Item = Instruction>, config: &Config) -> Self {
        Self::with_sink(program, config, NullSink)
    }
}

impl<S: TraceSink> Simulator<S> {
    /// Loads `program` with an explicit configuration and trace sink.
    pub fn with_sink(
        program: impl IntoIterator<Item = Instruction>,
        config: &Config,
        sink: S,
    ) -> Self {
        let cpu = Cpu::new(program);
        let halt_reachable = cpu.imem.contains_halt();
        tracing::debug!(
            instructions = cpu.imem.len(),
            halt_reachable,
            "simulator initialized"
        );
        Self {
            cpu,
            pipeline: Pipeline::new(&config.pipeline),
            config: config.clone(),
            sink,
            cycle: 0,
            halt_reachable,
            halted_at: None,
        }
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// Once halted, further calls do nothing and report the halt again.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NoHaltReached`] when the cycle budget is spent, or
    /// when Fetch runs dry and the program contains no `trap` (unless
    /// `stop_when_unreachable` is disabled), and [`SimError::UnknownOpcode`]
    /// under the reject policy.
    pub fn tick(&mut self) -> Result<Status, SimError> {
        if let Some(pc) = self.halted_at {
            return Ok(Status::Halted { pc });
        }
        if self.cycle >= self.config.pipeline.max_cycles {
            tracing::warn!(cycles = self.cycle, "cycle budget exhausted");
            return Err(SimError::NoHaltReached { cycles: self.cycle });
        }

        self.cycle += 1;
        self.cpu.stats.cycles = self.cycle;
        tracing::debug!(cycle = self.cycle, "begin cycle");

        match self.pipeline.tick(&mut self.cpu, self.cycle, &mut self.sink)? {
            CycleOutcome::Halted { pc } => {
                self.halted_at = Some(pc);
                Ok(Status::Halted { pc })
            }
            CycleOutcome::Continue { fetch_exhausted } => {
                if fetch_exhausted
                    && !self.halt_reachable
                    && self.config.pipeline.stop_when_unreachable
                {
                    tracing::warn!(cycles = self.cycle, "program ended without a trap");
                    return Err(SimError::NoHaltReached { cycles: self.cycle });
                }
                Ok(Status::Running)
            }
        }
    }

    /// Ticks until the halting instruction reaches Execute.
    ///
    /// Returns the program counter of the halting instruction.
    ///
    /// # Errors
    ///
    /// See [`Simulator::tick`].
    pub fn run_until_halt(&mut self) -> Result<usize, SimError> {
        loop {
            if let Status::Halted { pc } = self.tick()? {
                tracing::info!(cycles = self.cycle, pc, "simulation halted");
                return Ok(pc);
            }
        }
    }

    /// Runs to completion and returns the final machine state.
    ///
    /// # Errors
    ///
    /// See [`Simulator::tick`].
    pub fn run(mut self) -> Result<RunOutcome, SimError> {
        let halt_pc = self.run_until_halt()?;
        Ok(self.into_outcome(halt_pc))
    }

    fn into_outcome(self, halt_pc: usize) -> RunOutcome {
        RunOutcome {
            registers: self.cpu.regs,
            memory: self.cpu.dmem,
            cycles: self.cycle,
            halt_pc,
            last_retired: self.pipeline.latches().retired.read().cloned(),
            stats: self.cpu.stats,
        }
    }

    /// Number of cycles simulated so far.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Returns `true` once the halting instruction has reached Execute.
    pub const fn is_halted(&self) -> bool {
        self.halted_at.is_some()
    }

    /// The current latch contents.
    pub const fn latches(&self) -> &Latches {
        self.pipeline.latches()
    }

    /// The configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The trace sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the simulator and returns its trace sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
