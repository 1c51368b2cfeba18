//! moodboard - replay editor input scripts headlessly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moodboard::script::Script;
use moodboard::settings::Settings;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "moodboard")]
#[command(about = "Headless mood-board editor")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON input script and print the resulting board
    Replay {
        script: PathBuf,

        /// Also export the surface as PNG into this directory
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("moodboard=debug")
        } else {
            EnvFilter::new("moodboard=info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };

    match cli.command {
        Command::Replay { script, export } => replay(script, export, settings),
    }
}

fn replay(path: PathBuf, export: Option<PathBuf>, settings: Settings) -> Result<()> {
    let script = Script::load(&path)?;
    let base_dir = path.parent().map(PathBuf::from).unwrap_or_default();
    info!(steps = script.steps.len(), script = %path.display(), "replaying script");

    let mut replay = script.run(settings, &base_dir);
    for failure in &replay.failures {
        warn!(step = failure.index, "{}", failure.message);
    }

    if let Some(dir) = export {
        let saved = replay
            .editor
            .export_to_file(&dir)
            .with_context(|| format!("Failed to export into {}", dir.display()))?;
        info!(path = %saved.display(), "exported");
    }

    let state = replay.editor.board().snapshot();
    println!("{}", serde_json::to_string_pretty(&state)?);

    if !replay.failures.is_empty() {
        anyhow::bail!("{} of {} steps failed", replay.failures.len(), script.steps.len());
    }
    Ok(())
}
