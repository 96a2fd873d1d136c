//! Batch front end for the exam line simulator.
//!
//! Reads a script (a count line followed by that many `READY` / `PASSED` /
//! `EXTRA` commands), runs the simulation, and prints the dismissed
//! participants to stdout, one identifier per line, in dismissal order.
//! All I/O happens here: the script is read in full before the run, and
//! output is written only after the run succeeded.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use exam_line_core::Simulation;

#[derive(Debug, Parser)]
#[command(name = "exam-line", version, about = "Simulate an exam waiting line script")]
struct Cli {
    /// Script file to simulate; reads stdin when absent or given as '-'.
    input: Option<PathBuf>,

    /// Write the event log as JSON to this file after the run.
    #[arg(long, value_name = "PATH")]
    events: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries only the dismissal order, so logs go to stderr.
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let script = read_script(cli.input.as_deref())?;

    let report = Simulation::run_script(&script).context("simulation failed")?;
    tracing::debug!(
        commands = report.commands_processed,
        dismissed = report.dismissed.len(),
        "run complete"
    );

    let mut stdout = io::stdout().lock();
    for id in report.dismissed.identifiers() {
        writeln!(stdout, "{}", id)?;
    }

    if let Some(path) = &cli.events {
        write_event_log(&report, path)?;
    }

    Ok(())
}

/// Read the whole script before anything is simulated.
fn read_script(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read script from {}", path.display())),
        _ => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("failed to read script from stdin")?;
            Ok(script)
        }
    }
}

fn write_event_log(report: &exam_line_core::SimulationReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report.events.events())
        .context("failed to serialize event log")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write event log to {}", path.display()))?;
    tracing::debug!(events = report.events.len(), path = %path.display(), "event log written");
    Ok(())
}
