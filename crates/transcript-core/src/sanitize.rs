//! Removal of injected control markers from free text
//!
//! Claude Code writes slash-command echoes, local command output and system
//! reminders into the transcript alongside what the user actually typed.
//! None of it is meant for a human reader, so every free-text surface goes
//! through [`sanitize`] before it is rendered.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker patterns, applied in order
static MARKER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"<command-name>[^<]*</command-name>",
        r"<command-message>[^<]*</command-message>",
        r"<command-args>[^<]*</command-args>",
        r"<local-command-stdout>[^<]*</local-command-stdout>",
        r"(?s)<system-reminder>.*?</system-reminder>",
        r"(?s)\A\s*Caveat:.*?unless the user explicitly asks you to\.",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("marker pattern is valid"))
    .collect()
});

fn strip_once(text: &str) -> String {
    let mut result = text.to_string();
    for pattern in MARKER_PATTERNS.iter() {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, "").into_owned();
        }
    }
    result.trim().to_string()
}

/// Strip control markers and surrounding whitespace from `text`.
///
/// Runs until nothing more is removed, so `sanitize(sanitize(s)) == sanitize(s)`
/// even when a removal splices the halves of another marker together.
pub fn sanitize(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Escape `& < > " '` for inclusion in HTML text or attribute values.
///
/// Only ever applied after [`sanitize`], so the marker patterns see raw
/// angle brackets.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
