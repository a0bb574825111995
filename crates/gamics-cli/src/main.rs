//! Gamics Contact Page Replay
//!
//! Plays a scripted visitor session against the contact page without a
//! browser and prints the resulting page state.
//!
//! ## Usage
//!
//! ```bash
//! # Replay against the stock contact page
//! gamics-replay session.json
//!
//! # Custom timings, JSON snapshot on stdout
//! gamics-replay session.json --config fast.json --format json
//!
//! # Log every dispatched event
//! gamics-replay session.json --verbose
//! ```
//!
//! A script is JSON:
//!
//! ```json
//! {
//!   "steps": [
//!     { "action": "type", "selector": "[name=name]", "text": "Ana" },
//!     { "action": "submit" },
//!     { "action": "wait", "ms": 1200 },
//!     { "action": "expect_notification", "severity": "success" }
//!   ]
//! }
//! ```

mod report;
mod script;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gamics_core::session::Session;
use gamics_core::ContactConfig;

use crate::script::Script;

/// Gamics contact page - headless interaction replay
#[derive(Parser, Debug)]
#[command(name = "gamics-replay")]
#[command(version = "0.1.0")]
#[command(about = "Replay a scripted visitor session against the Gamics contact page")]
struct Args {
    /// Script file (JSON)
    script: PathBuf,

    /// Config file (JSON); missing keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for the final page state
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ContactConfig::default(),
    };
    let script = Script::load(&args.script)?;
    tracing::info!(steps = script.steps.len(), "Replaying {}", args.script.display());

    let mut session = Session::new(script.page(), config);
    for (index, step) in script.steps.iter().enumerate() {
        step.run(&mut session)
            .with_context(|| format!("Step {} ({}) failed", index + 1, step.name()))?;
    }

    let snapshot = session.page().snapshot();
    match args.format {
        Format::Text => print!("{}", report::render(&snapshot)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to encode snapshot")?
        ),
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<ContactConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse config {}", path.display()))
}
