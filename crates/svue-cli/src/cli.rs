//! CLI argument definitions for the `svue` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "svue",
    version,
    about = "StudentVUE gradebook snapshot tools",
    long_about = "Decode saved StudentVUE gradebook snapshots and report what \
                  changed between two captures: course additions, drops, \
                  period switches, assignment edits, and grade movement."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two snapshot files and print the changes.
    Diff(DiffArgs),

    /// Print a per-course overview of one snapshot's current term.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct DiffArgs {
    /// The earlier snapshot (gradebook XML).
    #[arg(value_name = "OLDER")]
    pub older: PathBuf,

    /// The later snapshot (gradebook XML).
    #[arg(value_name = "NEWER")]
    pub newer: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: FormatArg,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Snapshot file (gradebook XML).
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable digest.
    Text,
    /// Machine-readable JSON.
    Json,
}
