//! Block filtering utilities

use crate::types::{ContentBlock, ConversationMessage, MessageContent};

/// Keep only `text` blocks; string content is returned unchanged
pub fn text_blocks_only(content: &MessageContent) -> MessageContent {
    match content {
        MessageContent::Text(s) => MessageContent::Text(s.clone()),
        MessageContent::Blocks(blocks) => MessageContent::Blocks(
            blocks.iter().filter(|b| b.is_text()).cloned().collect(),
        ),
    }
}

/// Copy of `message` with every non-text block removed from its content.
///
/// Lines without a message body (summaries, snapshots) come back unchanged.
pub fn strip_tool_blocks(message: &ConversationMessage) -> ConversationMessage {
    let mut stripped = message.clone();
    if let Some(body) = stripped.message.as_mut() {
        body.content = text_blocks_only(&body.content);
    }
    stripped
}

/// Blocks that survive strip-tools mode
pub fn visible_blocks(blocks: &[ContentBlock], strip_tools: bool) -> impl Iterator<Item = &ContentBlock> {
    blocks.iter().filter(move |b| !strip_tools || b.is_text())
}

/// Per-kind block counts for a set of messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockCounts {
    pub text: usize,
    pub thinking: usize,
    pub tool_use: usize,
    pub tool_result: usize,
    pub unknown: usize,
}

impl BlockCounts {
    pub fn total(&self) -> usize {
        self.text + self.thinking + self.tool_use + self.tool_result + self.unknown
    }
}

/// Count content blocks by kind across all messages
pub fn count_blocks(messages: &[ConversationMessage]) -> BlockCounts {
    let mut counts = BlockCounts::default();
    for block in messages
        .iter()
        .filter_map(|m| m.content())
        .flat_map(|c| c.blocks())
    {
        match block {
            ContentBlock::Text { .. } => counts.text += 1,
            ContentBlock::Thinking { .. } => counts.thinking += 1,
            ContentBlock::ToolUse { .. } => counts.tool_use += 1,
            ContentBlock::ToolResult { .. } => counts.tool_result += 1,
            ContentBlock::Unknown(_) => counts.unknown += 1,
        }
    }
    counts
}
