//! Simulation driver and program loading.
//!
//! Provides the [`Simulator`] that ticks the pipeline, a text loader that
//! turns assembly listings into instructions, and the two free-standing entry
//! points [`initialize`] and [`run`].

pub mod loader;

pub mod simulator;

pub use simulator::{RunOutcome, Simulator, Status};

use crate::common::SimError;
use crate::isa::Instruction;

/// Builds a simulator in its reset state with `instructions` loaded.
pub fn initialize(instructions: impl IntoIterator<Item = Instruction>) -> Simulator {
    Simulator::initialize(instructions)
}

/// Runs `simulator` until the halting instruction reaches Execute.
///
/// # Errors
///
/// See [`Simulator::tick`].
pub fn run(simulator: Simulator) -> Result<RunOutcome, SimError> {
    simulator.run()
}
