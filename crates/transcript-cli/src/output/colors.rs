//! ANSI color helpers for terminal output

use colored::Colorize;
use transcript_core::LineType;

/// Colored line type indicator
pub fn colored_type(line_type: LineType) -> String {
    match line_type {
        LineType::User => "user".cyan().to_string(),
        LineType::Assistant => "assistant".green().to_string(),
        LineType::Summary => "summary".magenta().to_string(),
        other => other.to_string().white().dimmed().to_string(),
    }
}

/// Colored model name
pub fn colored_model(model: &str) -> String {
    if model.contains("opus") {
        model.magenta().to_string()
    } else if model.contains("sonnet") {
        model.blue().to_string()
    } else if model.contains("haiku") {
        model.green().to_string()
    } else {
        model.white().to_string()
    }
}

pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

pub fn label(text: &str) -> String {
    text.white().dimmed().to_string()
}

pub fn value(text: &str) -> String {
    text.white().to_string()
}

pub fn success(text: &str) -> String {
    format!("{} {}", "✓".green(), text)
}

/// Format size in human-readable form
pub fn format_size(bytes: u64) -> String {
    let bytes = bytes as f64;
    if bytes < 1024.0 {
        format!("{:.0} B", bytes)
    } else if bytes < 1024.0 * 1024.0 {
        format!("{:.1} KB", bytes / 1024.0)
    } else {
        format!("{:.1} MB", bytes / (1024.0 * 1024.0))
    }
}

/// Format count with comma separators
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
