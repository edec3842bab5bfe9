//! CLI parse: clap types for machine-model. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Machine Model CLI - replay controller object model deltas
#[derive(Parser)]
#[command(name = "machine-model")]
#[command(about = "Replay and check machine controller object model deltas")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply newline-delimited delta documents to a fresh model and print the result
    Replay {
        /// File with one JSON delta per line
        file: PathBuf,
        /// Stop at the first delta that fails to apply
        #[arg(long)]
        strict: bool,
        /// What to print once all deltas are applied
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputMode,
    },
    /// Apply every delta and report failures without printing the tree
    Check {
        /// File with one JSON delta per line
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Final tree as pretty JSON
    Model,
    /// Derived projections as a table
    Summary,
}
