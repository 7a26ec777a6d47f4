//! transcript-export - CLI for exporting Claude Code transcripts

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use transcript_export::ExportConfig;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = load_config(&cli)?;

    match &cli.command {
        Command::Export(args) => commands::export::run(&cli, args, &config),
        Command::Formats { json } => commands::formats::run(*json),
        Command::Info { file, json } => commands::info::run(file, *json),
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flags
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_config(cli: &Cli) -> Result<ExportConfig> {
    match &cli.config {
        Some(path) => ExportConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ExportConfig::default()),
    }
}
