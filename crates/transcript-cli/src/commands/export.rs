//! Export command - render a transcript file to a document

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use transcript_core::{infer_session, parse_file, Session};
use transcript_export::{export_filename, ExportConfig, ExportContext};

use crate::cli::{Cli, ExportArgs};
use crate::output::colors;

/// Where the generated document goes
#[derive(Debug, PartialEq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

/// `-` means stdout; a directory (given, configured, or the current one)
/// receives the derived filename; anything else is used as-is.
fn resolve_destination(output: Option<&Path>, output_dir: Option<&Path>, filename: &str) -> Destination {
    match output {
        Some(path) if path == Path::new("-") => Destination::Stdout,
        Some(path) if path.is_dir() => Destination::File(path.join(filename)),
        Some(path) => Destination::File(path.to_path_buf()),
        None => Destination::File(output_dir.unwrap_or(Path::new(".")).join(filename)),
    }
}

pub fn run(cli: &Cli, args: &ExportArgs, config: &ExportConfig) -> Result<()> {
    let messages = parse_file(&args.file)
        .with_context(|| format!("Failed to load transcript {}", args.file.display()))?;

    let mut session = infer_session(&args.file, &messages);
    if let Some(title) = &args.title {
        session.display = title.clone();
    }
    if let Some(project) = &args.project {
        session = Session::new(session.id, session.display, project.as_str(), session.timestamp);
    }

    let format = args.format.unwrap_or(config.format);
    let theme = args.theme.unwrap_or(config.theme);
    let strip_tools = args.strip_tools || config.strip_tools;
    let exporter = format.exporter();

    let ctx = ExportContext::new(&session, &messages)
        .with_theme(theme)
        .with_strip_tools(strip_tools);
    let document = exporter.generate(&ctx);

    info!(
        file = %args.file.display(),
        format = %format,
        messages = messages.len(),
        bytes = document.len(),
        "exported transcript"
    );

    let filename = export_filename(&session.display, exporter.file_extension());
    match resolve_destination(args.output.as_deref(), config.output_dir.as_deref(), &filename) {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
        Destination::File(path) => {
            std::fs::write(&path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !cli.quiet {
                eprintln!(
                    "{}",
                    colors::success(&format!(
                        "Wrote {} ({}, {})",
                        path.display(),
                        exporter.content_type(),
                        colors::format_size(document.len() as u64)
                    ))
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_is_stdout() {
        assert_eq!(
            resolve_destination(Some(Path::new("-")), None, "claude-x.md"),
            Destination::Stdout
        );
    }

    #[test]
    fn test_directory_gets_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_destination(Some(dir.path()), None, "claude-x.md"),
            Destination::File(dir.path().join("claude-x.md"))
        );
    }

    #[test]
    fn test_explicit_file_used_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.html");
        assert_eq!(
            resolve_destination(Some(target.as_path()), None, "claude-x.html"),
            Destination::File(target.clone())
        );
    }

    #[test]
    fn test_configured_dir_when_no_output() {
        assert_eq!(
            resolve_destination(None, Some(Path::new("/exports")), "claude-x.txt"),
            Destination::File(PathBuf::from("/exports/claude-x.txt"))
        );
        assert_eq!(
            resolve_destination(None, None, "claude-x.txt"),
            Destination::File(PathBuf::from("./claude-x.txt"))
        );
    }
}
