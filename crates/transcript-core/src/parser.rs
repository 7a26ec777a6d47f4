//! JSONL parsing utilities for transcript files

use crate::error::ParseError;
use crate::sanitize::sanitize;
use crate::types::{ContentBlock, ConversationMessage, LineType, MessageContent, Session};
use chrono::DateTime;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Longest session title derived from the first user message
const MAX_DISPLAY_CHARS: usize = 80;

/// Title used when nothing in the transcript names the session
pub const UNTITLED_SESSION: &str = "Untitled session";

/// Parse a single JSONL line into a ConversationMessage
pub fn parse_line(raw: &str) -> Option<ConversationMessage> {
    serde_json::from_str(raw).ok()
}

/// Parse transcript JSONL content into the messages an export needs.
///
/// User and assistant lines are kept in file order, summary lines are moved
/// to the front, everything else is dropped. Lines sharing a `uuid` are
/// de-duplicated (first occurrence wins). Malformed lines are skipped.
pub fn parse_str(content: &str) -> Vec<ConversationMessage> {
    let mut summaries = Vec::new();
    let mut turns = Vec::new();
    let mut seen = HashSet::new();

    for (index, raw) in content.lines().enumerate() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let Some(message) = parse_line(raw) else {
            warn!(line = index + 1, "skipping malformed transcript line");
            continue;
        };

        if let Some(uuid) = &message.uuid {
            if !seen.insert(uuid.clone()) {
                debug!(line = index + 1, uuid = %uuid, "skipping duplicate message");
                continue;
            }
        }

        match message.kind {
            LineType::User | LineType::Assistant => turns.push(message),
            LineType::Summary => summaries.push(message),
            _ => {}
        }
    }

    summaries.extend(turns);
    summaries
}

/// Parse a JSONL transcript file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<ConversationMessage>, ParseError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let messages = parse_str(&content);
    debug!(path = %path.display(), messages = messages.len(), "parsed transcript");
    Ok(messages)
}

/// Convert an ISO timestamp to epoch milliseconds
pub fn timestamp_millis(timestamp: &str) -> Option<f64> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.timestamp_millis() as f64)
}

/// First line of the first user message that still has text after sanitizing
fn first_user_text(messages: &[ConversationMessage]) -> Option<String> {
    messages
        .iter()
        .filter(|m| m.kind == LineType::User)
        .filter_map(|m| m.content())
        .flat_map(|content| match content {
            MessageContent::Text(s) => vec![s.as_str()],
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|b| match b {
                    ContentBlock::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
        })
        .map(sanitize)
        .find(|text| !text.is_empty())
        .map(|text| {
            let first = text.lines().next().unwrap_or("").trim();
            first.chars().take(MAX_DISPLAY_CHARS).collect()
        })
}

/// Derive session metadata for a transcript loaded from `path`.
///
/// The id is the file stem, the project is the first recorded `cwd` (falling
/// back to the parent directory name), the title is the first user message
/// line or the first summary, and the timestamp is the first parseable message
/// time.
pub fn infer_session(path: &Path, messages: &[ConversationMessage]) -> Session {
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let project = messages
        .iter()
        .find_map(|m| m.cwd.clone())
        .or_else(|| {
            path.parent()
                .and_then(|p| p.file_name())
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_default();

    let display = first_user_text(messages)
        .or_else(|| messages.iter().find_map(|m| m.summary.clone()))
        .unwrap_or_else(|| UNTITLED_SESSION.to_string());

    let timestamp = messages
        .iter()
        .filter_map(|m| m.timestamp.as_deref())
        .find_map(timestamp_millis)
        .unwrap_or(0.0);

    Session::new(id, display, project, timestamp)
}
