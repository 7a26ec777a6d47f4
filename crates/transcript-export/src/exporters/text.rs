//! Plain-text export

use serde_json::Value;
use tracing::{debug, trace};
use transcript_core::LineType;

use crate::blocks::{walk_content, BlockSink};
use crate::context::{ExportContext, Exporter};
use crate::dates::{format_epoch_millis, format_iso};
use crate::tool_input::{tool_input_view, ToolInputView};
use crate::tool_result::ToolResultView;

const RULE_WIDTH: usize = 60;

fn tool_input_text(view: &ToolInputView<'_>) -> String {
    match view {
        ToolInputView::Command(command) => command.to_string(),
        ToolInputView::Edit { file_path, diff } if diff.is_empty() => file_path.to_string(),
        ToolInputView::Edit { file_path, diff } => format!("{}\n{}", file_path, diff.hunks()),
        ToolInputView::FilePath(path) => path.to_string(),
        ToolInputView::Search { pattern, path } => match path {
            Some(path) => format!("pattern: {} in {}", pattern, path),
            None => format!("pattern: {}", pattern),
        },
        ToolInputView::Json(json) => json.clone(),
    }
}

#[derive(Default)]
struct TextMessage {
    parts: Vec<String>,
}

impl BlockSink for TextMessage {
    fn text(&mut self, text: &str) {
        self.parts.push(text.to_string());
    }

    fn thinking(&mut self, thinking: &str) {
        self.parts.push(format!("[Thinking]\n{}\n[/Thinking]", thinking));
    }

    fn tool_use(&mut self, name: &str, input: &Value) {
        let mut part = format!("[Tool: {}]", name);
        if let Some(view) = tool_input_view(name, input) {
            part.push('\n');
            part.push_str(&tool_input_text(&view));
        }
        self.parts.push(part);
    }

    fn tool_result(&mut self, result: &ToolResultView) {
        let mut part = format!("[{}]", result.label());
        if let Some(summary) = result.summary {
            part.push_str(&format!(" {}", summary));
        }
        if !result.body.is_empty() {
            part.push('\n');
            part.push_str(&result.body);
        }
        self.parts.push(part);
    }
}

/// Plain-text transcript with bracketed tool sections
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl Exporter for TextExporter {
    fn content_type(&self) -> &'static str {
        "text/plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn generate(&self, ctx: &ExportContext<'_>) -> String {
        let session = ctx.session;
        let mut lines = vec![
            format!("Session: {}", session.display),
            format!("Project: {} ({})", session.project_name, session.project),
            format!("Date: {}", format_epoch_millis(session.timestamp)),
            format!("ID: {}", session.id),
            String::new(),
            "=".repeat(RULE_WIDTH),
            String::new(),
        ];
        let mut rendered = 0;

        for message in ctx.messages {
            if message.kind == LineType::Summary {
                if let Some(summary) = message.summary.as_deref().filter(|s| !s.is_empty()) {
                    lines.push("=== Summary ===".to_string());
                    lines.push(summary.to_string());
                    lines.push(String::new());
                }
                continue;
            }
            if !message.kind.is_turn() {
                continue;
            }
            let Some(content) = message.content() else {
                continue;
            };

            let mut sink = TextMessage::default();
            let emitted = walk_content(content, ctx.strip_tools, &mut sink);
            trace!(uuid = ?message.uuid, kind = %message.kind, emitted, "rendered message");
            if emitted == 0 {
                continue;
            }

            let mut header = format!("=== {}", message.kind.role_label());
            if let Some(model) = message.model() {
                header.push_str(&format!(" ({})", model));
            }
            if let Some(ts) = &message.timestamp {
                header.push_str(&format!(" {}", format_iso(ts)));
            }
            header.push_str(" ===");

            lines.push(header);
            lines.push(sink.parts.join("\n\n"));
            lines.push(String::new());
            rendered += 1;
        }

        debug!(
            format = "txt",
            messages = rendered,
            strip_tools = ctx.strip_tools,
            "generated export"
        );
        lines.join("\n")
    }
}
