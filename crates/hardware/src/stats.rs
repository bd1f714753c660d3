//! Simulation statistics collection and reporting.
//!
//! This module tracks performance and diagnostic counters for a run. It provides:
//! 1. **Cycle and IPC:** Total cycles, fetched and retired instructions, and derived CPI/IPC.
//! 2. **Instruction mix:** Retired arithmetic, no-op, and pass-through counts.
//! 3. **Signals:** How often Fetch ran dry and how often an unimplemented stage was invoked.

use std::time::Instant;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Instructions handed from Fetch to Decode.
    pub instructions_fetched: u64,
    /// Instructions that completed Writeback.
    pub instructions_retired: u64,

    /// Retired `add`/`sub`/`mult` instructions.
    pub inst_alu: u64,
    /// Retired `noop` instructions.
    pub inst_noop: u64,
    /// Retired instructions whose opcode Execute passed through unchanged.
    pub inst_unknown: u64,

    /// Cycles in which Fetch reported the program exhausted.
    pub exhausted_skips: u64,
    /// Unimplemented stage phases reported to the diagnostic sink.
    pub unimplemented_reports: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_fetched: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_noop: 0,
            inst_unknown: 0,
            exhausted_skips: 0,
            unimplemented_reports: 0,
        }
    }
}

impl SimStats {
    /// Cycles per retired instruction, or `None` before anything retires.
    pub fn cpi(&self) -> Option<f64> {
        (self.instructions_retired > 0)
            .then(|| self.cycles as f64 / self.instructions_retired as f64)
    }

    /// Retired instructions per cycle, or `None` before the first cycle.
    pub fn ipc(&self) -> Option<f64> {
        (self.cycles > 0).then(|| self.instructions_retired as f64 / self.cycles as f64)
    }

    /// Prints the statistics summary to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        println!("\n==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts_fetched        {}", self.instructions_fetched);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", self.ipc().unwrap_or(0.0));
        println!("sim_cpi                  {:.4}", self.cpi().unwrap_or(0.0));
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {}", self.inst_alu);
        println!("  op.noop                {}", self.inst_noop);
        println!("  op.unknown             {}", self.inst_unknown);
        println!("----------------------------------------------------------");
        println!("SIGNALS");
        println!("  fetch.exhausted        {}", self.exhausted_skips);
        println!("  stage.unimplemented    {}", self.unimplemented_reports);
        println!("==========================================================");
    }
}
