//! Latch pipeline simulator CLI.
//!
//! This binary provides a single entry point for running programs. It performs:
//! 1. **Run:** Load an assembly listing, simulate it to its `trap`, and dump the
//!    final registers and data memory.
//! 2. **Disasm:** Print the parsed listing with its opcode encodings.
//!
//! Logging goes to stderr through `tracing-subscriber`; `RUST_LOG` overrides the
//! level chosen by `--trace`.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use latchpipe_core::Simulator;
use latchpipe_core::common::SimError;
use latchpipe_core::config::Config;
use latchpipe_core::sim::RunOutcome;
use latchpipe_core::sim::loader;
use latchpipe_core::trace::LogSink;

#[derive(Parser, Debug)]
#[command(
    name = "latchpipe",
    author,
    version,
    about = "Five-stage latch pipeline simulator",
    long_about = "Simulate a program through Fetch, Decode, Execute, Memory and Writeback.\n\nExamples:\n  latchpipe run program.asm\n  latchpipe run demo.asm --trace --stats\n  latchpipe run demo.asm --config pipeline.json\n  latchpipe disasm demo.asm"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until its `trap` reaches Execute.
    Run {
        /// Assembly listing to execute.
        #[arg(default_value = "program.asm")]
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every stage phase, latch access, and register access.
        #[arg(long)]
        trace: bool,

        /// Print the statistics summary after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Print a listing as the simulator parses it.
    Disasm {
        /// Assembly listing to print.
        #[arg(default_value = "program.asm")]
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            stats,
        } => cmd_run(&program, config.as_deref(), trace, stats),
        Commands::Disasm { program } => {
            init_logging(false);
            cmd_disasm(&program);
        }
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the flag.
fn init_logging(trace: bool) {
    let default_level = if trace { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(trace)
        .init();
}

/// Loads the configuration and program, runs to halt, and dumps the final state.
///
/// Exits with code 1 on any load or simulation error.
fn cmd_run(program: &Path, config_path: Option<&Path>, trace: bool, stats: bool) {
    let mut config = match config_path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("[!] {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.general.trace |= trace;
    config.general.print_stats |= stats;
    init_logging(config.general.trace);
    tracing::debug!(?config, "configuration loaded");

    let instructions = loader::load_program(program).unwrap_or_else(|e| {
        eprintln!("[!] {e}");
        process::exit(1);
    });

    println!("[*] Program: {} ({} instructions)", program.display(), instructions.len());
    println!(
        "  Max cycles: {}  MEM stage: {}  Unknown opcodes: {:?}",
        config.pipeline.max_cycles,
        if config.pipeline.schedule_memory_stage { "scheduled" } else { "skipped" },
        config.pipeline.unknown_opcode
    );
    println!();

    let result = if config.general.trace {
        Simulator::with_sink(instructions, &config, LogSink).run()
    } else {
        Simulator::with_config(instructions, &config).run()
    };
    report(result, config.general.print_stats);
}

/// Prints the outcome of a run and exits with the matching status.
fn report(result: Result<RunOutcome, SimError>, print_stats: bool) {
    match result {
        Ok(outcome) => {
            println!(
                "[*] Halted at pc {} after {} cycles\n",
                outcome.halt_pc, outcome.cycles
            );
            println!("{}", outcome.registers);
            println!("{}", outcome.memory);
            if print_stats {
                outcome.stats.print();
            }
        }
        Err(e) => {
            eprintln!("\n[!] {e}");
            process::exit(1);
        }
    }
}

/// Prints each parsed instruction with its index and encoding.
fn cmd_disasm(program: &Path) {
    let instructions = loader::load_program(program).unwrap_or_else(|e| {
        eprintln!("[!] {e}");
        process::exit(1);
    });

    for (pc, inst) in instructions.iter().enumerate() {
        let encoding = inst
            .opcode()
            .encoding()
            .map_or_else(|| "--".to_owned(), |b| format!("{b:02x}"));
        println!("{pc:4}  {encoding}  {inst}");
    }
}
