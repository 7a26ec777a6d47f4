//! Core type definitions for transcript data

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token usage statistics for a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_input_tokens: Option<u64>,
    /// Usage fields not modelled here (`service_tier`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenUsage {
    /// Total tokens used (input + output + cache)
    pub fn total(&self) -> u64 {
        self.input_tokens
            + self.output_tokens
            + self.cache_creation_input_tokens.unwrap_or(0)
            + self.cache_read_input_tokens.unwrap_or(0)
    }
}

/// Content block types that can appear in messages
///
/// Every variant keeps the fields it does not model in `extra`, and block
/// kinds the renderers do not understand are kept verbatim, so a block
/// re-serializes to the JSON it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Thinking {
        #[serde(default)]
        thinking: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        signature: Option<String>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    ToolUse {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: Value,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    ToolResult {
        #[serde(default)]
        tool_use_id: String,
        #[serde(default, skip_serializing_if = "Value::is_null")]
        content: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    /// Any other block (images, documents, ...) as raw JSON
    #[serde(untagged)]
    Unknown(Value),
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text {
            text: text.into(),
            extra: Map::new(),
        }
    }

    pub fn thinking(thinking: impl Into<String>) -> Self {
        ContentBlock::Thinking {
            thinking: thinking.into(),
            signature: None,
            extra: Map::new(),
        }
    }

    pub fn tool_use(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        ContentBlock::ToolUse {
            id: id.into(),
            name: name.into(),
            input,
            extra: Map::new(),
        }
    }

    pub fn tool_result(tool_use_id: impl Into<String>, content: Value, is_error: bool) -> Self {
        ContentBlock::ToolResult {
            tool_use_id: tool_use_id.into(),
            content,
            is_error: is_error.then_some(true),
            extra: Map::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ContentBlock::Text { .. })
    }

    /// Block kind as it appears in the `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::Thinking { .. } => "thinking",
            ContentBlock::ToolUse { .. } => "tool_use",
            ContentBlock::ToolResult { .. } => "tool_result",
            ContentBlock::Unknown(_) => "unknown",
        }
    }
}

/// Flatten a tool_result `content` value into display text.
///
/// Strings pass through; anything else is pretty-printed JSON. A missing
/// value yields an empty string.
pub fn result_content_text(content: &Value) -> String {
    match content {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

/// Message structure within a transcript line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: MessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// `id`, `stop_reason` and the rest of the API message envelope
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TranscriptMessage {
    pub fn new(role: impl Into<String>, content: MessageContent) -> Self {
        Self {
            role: role.into(),
            content,
            model: None,
            usage: None,
            extra: Map::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Message content can be a string or array of content blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

impl MessageContent {
    /// Extract text content from message
    pub fn as_text(&self) -> String {
        match self {
            MessageContent::Text(s) => s.clone(),
            MessageContent::Blocks(blocks) => {
                let mut parts = Vec::new();
                for block in blocks {
                    if let ContentBlock::Text { text, .. } = block {
                        parts.push(text.clone());
                    }
                }
                parts.join("\n")
            }
        }
    }

    /// Content blocks, empty for plain string content
    pub fn blocks(&self) -> &[ContentBlock] {
        match self {
            MessageContent::Text(_) => &[],
            MessageContent::Blocks(blocks) => blocks,
        }
    }
}

/// Line type in a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    User,
    Assistant,
    System,
    Summary,
    Progress,
    #[serde(rename = "file-history-snapshot")]
    FileHistorySnapshot,
    #[serde(other)]
    Unknown,
}

impl LineType {
    /// User and assistant turns are the only lines rendered as message bodies
    pub fn is_turn(&self) -> bool {
        matches!(self, LineType::User | LineType::Assistant)
    }

    /// Heading label used by the text and markdown exports
    pub fn role_label(&self) -> &'static str {
        match self {
            LineType::User => "User",
            LineType::Summary => "Summary",
            _ => "Assistant",
        }
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineType::User => write!(f, "user"),
            LineType::Assistant => write!(f, "assistant"),
            LineType::System => write!(f, "system"),
            LineType::Summary => write!(f, "summary"),
            LineType::Progress => write!(f, "progress"),
            LineType::FileHistorySnapshot => write!(f, "file-history-snapshot"),
            LineType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single line from a session transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    #[serde(rename = "type")]
    pub kind: LineType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(rename = "parentUuid", default, skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<String>,
    #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// ISO timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Working directory the session ran in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<TranscriptMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Fields this crate does not model, kept for lossless re-serialization
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConversationMessage {
    fn with_kind(kind: LineType) -> Self {
        Self {
            kind,
            uuid: None,
            parent_uuid: None,
            session_id: None,
            timestamp: None,
            cwd: None,
            message: None,
            summary: None,
            extra: Map::new(),
        }
    }

    /// A user turn with the given content
    pub fn user(content: MessageContent) -> Self {
        Self {
            message: Some(TranscriptMessage::new("user", content)),
            ..Self::with_kind(LineType::User)
        }
    }

    /// An assistant turn with the given content
    pub fn assistant(content: MessageContent) -> Self {
        Self {
            message: Some(TranscriptMessage::new("assistant", content)),
            ..Self::with_kind(LineType::Assistant)
        }
    }

    /// A compaction summary line
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::with_kind(LineType::Summary)
        }
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        if let Some(message) = self.message.as_mut() {
            message.model = Some(model.into());
        }
        self
    }

    /// Message content if this line carries a message body
    pub fn content(&self) -> Option<&MessageContent> {
        self.message.as_ref().map(|m| &m.content)
    }

    /// Model used (for assistant messages)
    pub fn model(&self) -> Option<&str> {
        self.message.as_ref().and_then(|m| m.model.as_deref())
    }
}

/// Metadata describing a transcript as a whole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub display: String,
    pub project: String,
    pub project_name: String,
    /// Epoch milliseconds
    pub timestamp: f64,
}

impl Session {
    /// Build session metadata, deriving `project_name` from the project path
    pub fn new(
        id: impl Into<String>,
        display: impl Into<String>,
        project: impl Into<String>,
        timestamp: f64,
    ) -> Self {
        let project = project.into();
        Self {
            id: id.into(),
            display: display.into(),
            project_name: project_name(&project),
            project,
            timestamp,
        }
    }
}

/// Last non-empty segment of a project path
pub fn project_name(project: &str) -> String {
    project
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .last()
        .unwrap_or(project)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_block_kind_is_tolerated() {
        let raw = json!([
            {"type": "text", "text": "look"},
            {"type": "image", "source": {"data": "..."}}
        ]);
        let content: MessageContent = serde_json::from_value(raw).unwrap();
        let blocks = content.blocks();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].is_text());
        assert_eq!(
            blocks[1],
            ContentBlock::Unknown(json!({"type": "image", "source": {"data": "..."}}))
        );
    }

    #[test]
    fn test_blocks_keep_unmodelled_fields() {
        let raw = json!([
            {"type": "text", "text": "see", "citations": [{"cited_text": "x"}]},
            {"type": "tool_use", "id": "t1", "name": "Read", "input": {}, "caller": {"type": "direct"}},
            {"type": "tool_result", "tool_use_id": "t1", "content": "ok", "is_error": false},
            {"type": "document", "source": {"type": "base64", "data": "JVBER"}}
        ]);
        let content: MessageContent = serde_json::from_value(raw.clone()).unwrap();
        let kinds: Vec<_> = content.blocks().iter().map(ContentBlock::kind).collect();
        assert_eq!(kinds, vec!["text", "tool_use", "tool_result", "unknown"]);
        assert_eq!(serde_json::to_value(&content).unwrap(), raw);
    }

    #[test]
    fn test_tool_result_defaults() {
        let block: ContentBlock =
            serde_json::from_value(json!({"type": "tool_result", "tool_use_id": "t1"})).unwrap();
        match block {
            ContentBlock::ToolResult { content, is_error, .. } => {
                assert!(content.is_null());
                assert_eq!(is_error, None);
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_result_content_text() {
        assert_eq!(result_content_text(&json!("plain")), "plain");
        assert_eq!(result_content_text(&Value::Null), "");
        let nested = result_content_text(&json!([{"type": "text", "text": "hi"}]));
        assert!(nested.starts_with('['));
        assert!(nested.contains("\"text\": \"hi\""));
    }

    #[test]
    fn test_message_keeps_unmodelled_fields() {
        let raw = json!({
            "type": "user",
            "uuid": "u1",
            "gitBranch": "main",
            "message": {"role": "user", "content": "hello"}
        });
        let msg: ConversationMessage = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(msg.kind, LineType::User);
        assert_eq!(msg.extra.get("gitBranch"), Some(&json!("main")));
        assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
    }

    #[test]
    fn test_session_project_name() {
        let session = Session::new("s1", "Fix it", "/home/me/code/app/", 0.0);
        assert_eq!(session.project_name, "app");
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["projectName"], json!("app"));
    }

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
            cache_creation_input_tokens: Some(2),
            cache_read_input_tokens: None,
            ..Default::default()
        };
        assert_eq!(usage.total(), 17);
    }
}
