//! JSON export: the raw messages, optionally stripped down to text

use serde::Serialize;
use tracing::{debug, warn};
use transcript_core::{strip_tool_blocks, ConversationMessage};

use crate::context::{ExportContext, Exporter};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionSummary<'a> {
    id: &'a str,
    display: &'a str,
    project: &'a str,
    project_name: &'a str,
    timestamp: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    exported_at: String,
    session: SessionSummary<'a>,
    messages: Vec<ConversationMessage>,
}

/// Lossless export; no sanitization or truncation
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn generate(&self, ctx: &ExportContext<'_>) -> String {
        let session = ctx.session;
        let messages: Vec<ConversationMessage> = if ctx.strip_tools {
            ctx.messages.iter().map(strip_tool_blocks).collect()
        } else {
            ctx.messages.to_vec()
        };

        let document = JsonDocument {
            exported_at: ctx.exported_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            session: SessionSummary {
                id: &session.id,
                display: &session.display,
                project: &session.project,
                project_name: &session.project_name,
                timestamp: session.timestamp,
            },
            messages,
        };

        debug!(
            format = "json",
            messages = document.messages.len(),
            strip_tools = ctx.strip_tools,
            "generated export"
        );

        serde_json::to_string_pretty(&document).unwrap_or_else(|err| {
            warn!(error = %err, "failed to serialize export");
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::fixtures::{mixed_turn, session};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use transcript_core::{MessageContent, Session};

    fn render(session: &Session, messages: &[ConversationMessage], strip_tools: bool) -> Value {
        let exported_at = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let ctx = ExportContext::new(session, messages)
            .with_strip_tools(strip_tools)
            .with_exported_at(exported_at);
        serde_json::from_str(&JsonExporter.generate(&ctx)).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let doc = render(&session(), &[mixed_turn()], false);
        assert_eq!(doc["exportedAt"], json!("2024-02-01T12:00:00.000Z"));
        assert_eq!(
            doc["session"],
            json!({
                "id": "sess-1",
                "display": "List files",
                "project": "/home/me/app",
                "projectName": "app",
                "timestamp": 1_704_067_200_000.0
            })
        );
        let blocks = doc["messages"][0]["message"]["content"].as_array().unwrap();
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[2]["input"], json!({"command": "ls -la"}));
    }

    #[test]
    fn test_no_sanitization() {
        let raw = "<system-reminder>kept</system-reminder> hi";
        let messages = vec![ConversationMessage::user(MessageContent::Text(raw.into()))];
        let doc = render(&session(), &messages, true);
        assert_eq!(doc["messages"][0]["message"]["content"], json!(raw));
    }

    #[test]
    fn test_strip_tools_keeps_only_text_blocks() {
        let messages = vec![
            ConversationMessage::summary("Earlier work"),
            mixed_turn(),
        ];
        let doc = render(&session(), &messages, true);
        assert_eq!(doc["messages"][0]["summary"], json!("Earlier work"));
        let blocks = doc["messages"][1]["message"]["content"].as_array().unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b["type"] == json!("text")));
    }

    #[test]
    fn test_messages_round_trip_unchanged() {
        let raw = json!({
            "type": "assistant",
            "uuid": "a1",
            "sessionId": "sess-1",
            "timestamp": "2024-01-01T00:00:05Z",
            "requestId": "req_1",
            "message": {
                "id": "msg_01",
                "type": "message",
                "role": "assistant",
                "model": "claude-sonnet-4",
                "content": [
                    {"type": "text", "text": "see image", "citations": [{"cited_text": "x"}]},
                    {"type": "image", "source": {"type": "base64", "media_type": "image/png", "data": "iVBOR"}},
                    {"type": "tool_use", "id": "t1", "name": "Bash", "input": {"command": "ls"}},
                    {"type": "tool_result", "tool_use_id": "t1", "content": "ok", "is_error": false}
                ],
                "stop_reason": "end_turn",
                "stop_sequence": null,
                "usage": {
                    "input_tokens": 1,
                    "output_tokens": 2,
                    "cache_read_input_tokens": 0,
                    "service_tier": "standard"
                }
            }
        });
        let messages = vec![serde_json::from_value::<ConversationMessage>(raw.clone()).unwrap()];

        let doc = render(&session(), &messages, false);
        assert_eq!(doc["messages"][0], raw);

        let stripped = render(&session(), &messages, true);
        let mut expected = raw.clone();
        expected["message"]["content"] = json!([
            {"type": "text", "text": "see image", "citations": [{"cited_text": "x"}]}
        ]);
        assert_eq!(stripped["messages"][0], expected);
    }

    #[test]
    fn test_pretty_printed() {
        let session = session();
        let ctx = ExportContext::new(&session, &[]);
        let text = JsonExporter.generate(&ctx);
        assert!(text.starts_with("{\n  \"exportedAt\": "));
    }
}
