//! Quill CLI
//!
//! Replay text field interaction scenarios and print the resulting markup.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod replay;
mod report;
mod scenario;

use scenario::Scenario;

#[derive(Parser)]
#[command(name = "quill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Quill text field tooling", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario and print the final state
    Replay {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that scenario files parse
    Check {
        /// Scenario files
        #[arg(required = true)]
        scenarios: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Replay { scenario, json } => cmd_replay(&scenario, json),
        Commands::Check { scenarios } => cmd_check(&scenarios),
    }
}

fn cmd_replay(path: &Path, json: bool) -> Result<()> {
    let scenario = Scenario::load(path)?;
    let name = scenario.display_name(path);
    info!("Replaying {} ({} steps)", name, scenario.steps.len());

    let report = replay::replay(&scenario, &name)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn cmd_check(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        let scenario = Scenario::load(path)?;
        println!("{}: ok ({} steps)", path.display(), scenario.steps.len());
    }
    Ok(())
}
