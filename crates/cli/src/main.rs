//! sprintplan CLI - select an optimal set of releases for a sprint.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

use sprintplan_core::{select, SprintConfig};
use sprintplan_io::{read_releases, write_solution};

#[derive(Parser)]
#[command(name = "sprintplan")]
#[command(about = "Select an optimal set of releases for a sprint", long_about = None)]
struct Cli {
    /// Path to the releases file
    #[arg(long = "file", default_value = "data/releases.txt")]
    input: PathBuf,

    /// Path to save the solution file
    #[arg(long, default_value = "data/solution.txt")]
    output: PathBuf,

    /// Sprint duration in working days
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    sprint_duration_days: u32,

    /// Allow postponement of releases within sprint limits
    #[arg(long)]
    allow_postponement: bool,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .init();

    info!(
        "Arguments for program to start: sprint duration {} days, allow postponement {}, source file {}, output file {}",
        cli.sprint_duration_days,
        cli.allow_postponement,
        cli.input.display(),
        cli.output.display(),
    );

    run(&cli)
}

/// Composition root: read the releases, select, write the solution.
fn run(cli: &Cli) -> Result<()> {
    let releases = read_releases(&cli.input)
        .with_context(|| format!("failed to read releases from {}", cli.input.display()))?;

    let config = SprintConfig {
        duration_days: cli.sprint_duration_days,
        allow_postponement: cli.allow_postponement,
    };
    let schedule = select(&releases, &config);

    write_solution(&schedule, &cli.output)
        .with_context(|| format!("failed to write solution to {}", cli.output.display()))?;
    Ok(())
}
