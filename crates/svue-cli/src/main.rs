//! StudentVUE gradebook snapshot CLI.

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use svue_cli::{digest, logging};
use svue_decode::decode_gradebook;
use svue_diff::{DiffError, reconcile};
use svue_model::Gradebook;
use tracing::debug;

mod cli;

use crate::cli::{Cli, Command, DiffArgs, FormatArg, ShowArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity.tracing_level_filter());

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Command::Diff(args) => run_diff(args),
        Command::Show(args) => run_show(args),
    }
}

fn run_diff(args: &DiffArgs) -> anyhow::Result<i32> {
    let older = load_snapshot(&args.older)?;
    let newer = load_snapshot(&args.newer)?;

    match reconcile(&older, &newer) {
        Ok(changeset) => {
            match args.format {
                FormatArg::Text => print!("{}", digest::render_text(&changeset)),
                FormatArg::Json => {
                    let json = serde_json::to_string_pretty(&changeset)
                        .context("serializing changeset")?;
                    println!("{json}");
                }
            }
            Ok(0)
        }
        // A semester mismatch is an expected condition (stale snapshot from
        // last term), distinguished from real failures by its own exit code.
        Err(error @ DiffError::SemesterMismatch { .. }) => {
            eprintln!("error: {error}");
            Ok(2)
        }
    }
}

fn run_show(args: &ShowArgs) -> anyhow::Result<i32> {
    let gradebook = load_snapshot(&args.snapshot)?;
    print!("{}", digest::render_snapshot(&gradebook));
    Ok(0)
}

fn load_snapshot(path: &Path) -> anyhow::Result<Gradebook> {
    let xml = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let gradebook = decode_gradebook(&xml)
        .with_context(|| format!("decoding snapshot {}", path.display()))?;
    debug!(
        path = %path.display(),
        courses = gradebook.courses.len(),
        "snapshot decoded"
    );
    Ok(gradebook)
}
