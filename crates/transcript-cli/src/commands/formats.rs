//! Formats command - list export formats

use anyhow::Result;
use transcript_export::{ExportFormat, Theme};

use crate::output::colors;

pub fn run(json: bool) -> Result<()> {
    if json {
        let formats: Vec<_> = ExportFormat::all()
            .iter()
            .map(|format| {
                let exporter = format.exporter();
                serde_json::json!({
                    "id": format.id(),
                    "content_type": exporter.content_type(),
                    "extension": exporter.file_extension(),
                })
            })
            .collect();
        let themes: Vec<_> = Theme::all().iter().map(Theme::name).collect();
        let output = serde_json::json!({ "formats": formats, "themes": themes });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", colors::header("Formats"));
    println!();
    for format in ExportFormat::all() {
        let exporter = format.exporter();
        println!(
            "  {:<6} {} {}",
            colors::value(format.id()),
            colors::label(exporter.content_type()),
            colors::label(&format!(".{}", exporter.file_extension()))
        );
    }

    println!();
    println!("{}", colors::header("Themes (html)"));
    println!();
    for theme in Theme::all() {
        let marker = if *theme == Theme::default() { " (default)" } else { "" };
        println!("  {}{}", colors::value(theme.name()), colors::label(marker));
    }

    Ok(())
}
