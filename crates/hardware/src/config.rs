//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (cycle budget, scheduling flags).
//! 2. **Structures:** Hierarchical config for general and pipeline settings.
//! 3. **Enums:** The policy for opcodes Execute does not recognise.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with
//! `Config::default()`. Every field is optional in JSON.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the simulator.
mod defaults {
    /// Upper bound on simulated cycles before a run is abandoned.
    pub const MAX_CYCLES: u64 = crate::common::constants::DEFAULT_MAX_CYCLES;

    /// Whether a run stops as soon as Fetch is exhausted and no `trap`
    /// exists anywhere in the program.
    pub const STOP_WHEN_UNREACHABLE: bool = true;
}

/// How Execute treats an opcode outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum UnknownOpcodePolicy {
    /// Pass the entry through unchanged, as a no-op (default).
    #[default]
    Ignore,
    /// Abort the run with an error.
    Reject,
}

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use latchpipe_core::config::{Config, UnknownOpcodePolicy};
///
/// let json = r#"{
///     "general": { "trace": true },
///     "pipeline": { "max_cycles": 64, "unknown_opcode": "Reject" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.pipeline.max_cycles, 64);
/// assert_eq!(config.pipeline.unknown_opcode, UnknownOpcodePolicy::Reject);
/// assert!(!config.pipeline.schedule_memory_stage);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline scheduling settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&text)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Forward every pipeline event to the log at `TRACE` level.
    #[serde(default)]
    pub trace: bool,

    /// Print the statistics summary after the run.
    #[serde(default)]
    pub print_stats: bool,
}

/// Pipeline scheduling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Cycle budget; exceeding it ends the run with an error.
    #[serde(default = "PipelineConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Schedule the Memory stage between Execute and Writeback.
    #[serde(default)]
    pub schedule_memory_stage: bool,

    /// Treatment of unrecognised opcodes.
    #[serde(default)]
    pub unknown_opcode: UnknownOpcodePolicy,

    /// Stop as soon as Fetch is exhausted if the program has no `trap`.
    #[serde(default = "PipelineConfig::default_stop_when_unreachable")]
    pub stop_when_unreachable: bool,
}

impl PipelineConfig {
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    fn default_stop_when_unreachable() -> bool {
        defaults::STOP_WHEN_UNREACHABLE
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_cycles: defaults::MAX_CYCLES,
            schedule_memory_stage: false,
            unknown_opcode: UnknownOpcodePolicy::default(),
            stop_when_unreachable: defaults::STOP_WHEN_UNREACHABLE,
        }
    }
}
