//! CLI argument definitions

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use transcript_export::{ExportFormat, Theme};

/// Export Claude Code transcripts
#[derive(Parser, Debug)]
#[command(name = "transcript-export")]
#[command(author = "Claude Code SDK")]
#[command(version)]
#[command(about = "Export Claude Code transcripts to HTML, Markdown, text or JSON")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON config file with export defaults
    #[arg(long, global = true, env = "TRANSCRIPT_EXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a transcript file as a document
    Export(ExportArgs),

    /// List supported export formats
    Formats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show session metadata and block counts for a transcript
    Info {
        /// Transcript JSONL file
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Transcript JSONL file
    pub file: PathBuf,

    /// Output format (html, md, json, txt)
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// HTML theme (dark, light, minimal)
    #[arg(long, env = "TRANSCRIPT_EXPORT_THEME")]
    pub theme: Option<Theme>,

    /// Keep only narrative text; drop thinking and tool activity
    #[arg(long)]
    pub strip_tools: bool,

    /// Output file or directory; `-` writes to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Session title to use instead of the first user message
    #[arg(long)]
    pub title: Option<String>,

    /// Project path to use instead of the recorded working directory
    #[arg(long)]
    pub project: Option<String>,
}
