//! The content-block walk shared by every document exporter
//!
//! [`walk`] owns the rules that must agree across formats: strip-tools
//! filtering, sanitization, truncation and tool-name resolution for results.
//! Exporters implement [`BlockSink`] and only decide the markup.

use std::collections::HashMap;

use serde_json::Value;
use tracing::trace;
use transcript_core::{result_content_text, sanitize, visible_blocks, ContentBlock, MessageContent};

use crate::tool_result::ToolResultView;

/// Longest thinking body shown before truncation
pub const THINKING_LIMIT: usize = 5000;

/// Longest tool result shown before truncation
pub const RESULT_LIMIT: usize = 2000;

/// Appended to truncated content
pub const ELLIPSIS: &str = "...";

/// First `limit` chars of `text` plus [`ELLIPSIS`], or `text` itself when it fits
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Per-format rendering of the four visible block kinds
pub trait BlockSink {
    /// Sanitized, non-empty prose
    fn text(&mut self, text: &str);

    /// Thinking body, already truncated
    fn thinking(&mut self, thinking: &str);

    fn tool_use(&mut self, name: &str, input: &Value);

    fn tool_result(&mut self, result: &ToolResultView);
}

/// Feed `blocks` to `sink` in order. Returns how many blocks produced output.
///
/// Result tool names come from `tool_use` blocks seen earlier in the same
/// slice; a result whose id was never seen gets an empty name.
pub fn walk<S: BlockSink + ?Sized>(blocks: &[ContentBlock], strip_tools: bool, sink: &mut S) -> usize {
    let mut tool_names: HashMap<&str, &str> = HashMap::new();
    let mut emitted = 0;

    for block in visible_blocks(blocks, strip_tools) {
        match block {
            ContentBlock::Text { text, .. } => {
                let clean = sanitize(text);
                if clean.is_empty() {
                    continue;
                }
                sink.text(&clean);
            }
            ContentBlock::Thinking { thinking, .. } => {
                if thinking.trim().is_empty() {
                    continue;
                }
                sink.thinking(&truncate_chars(thinking, THINKING_LIMIT));
            }
            ContentBlock::ToolUse { id, name, input, .. } => {
                tool_names.insert(id.as_str(), name.as_str());
                sink.tool_use(name, input);
            }
            ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error,
                ..
            } => {
                let tool_name = tool_names.get(tool_use_id.as_str()).copied().unwrap_or("");
                let clean = sanitize(&result_content_text(content));
                let is_error = is_error.unwrap_or(false);
                sink.tool_result(&ToolResultView::new(tool_name, &clean, is_error));
            }
            ContentBlock::Unknown(_) => {
                trace!("skipping unknown content block");
                continue;
            }
        }
        emitted += 1;
    }

    emitted
}

/// Walk a message body. String content behaves like a single text block.
pub fn walk_content<S: BlockSink + ?Sized>(content: &MessageContent, strip_tools: bool, sink: &mut S) -> usize {
    match content {
        MessageContent::Text(text) => {
            let clean = sanitize(text);
            if clean.is_empty() {
                return 0;
            }
            sink.text(&clean);
            1
        }
        MessageContent::Blocks(blocks) => walk(blocks, strip_tools, sink),
    }
}
