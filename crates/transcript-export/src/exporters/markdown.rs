//! Markdown export

use serde_json::Value;
use tracing::{debug, trace};
use transcript_core::LineType;

use crate::blocks::{walk_content, BlockSink};
use crate::context::{ExportContext, Exporter};
use crate::dates::{format_epoch_millis, format_iso};
use crate::tool_input::{tool_input_view, ToolInputView};
use crate::tool_result::ToolResultView;

/// Fenced code block whose fence outlasts any backtick run in `body`
fn fenced(lang: &str, body: &str) -> String {
    let longest_run = body
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run.max(2) + 1);
    format!("{fence}{lang}\n{body}\n{fence}")
}

/// Inline code span, padded when the text itself holds backticks
fn inline_code(text: &str) -> String {
    if text.contains('`') {
        format!("`` {} ``", text)
    } else {
        format!("`{}`", text)
    }
}

fn details(summary: &str, body: &str) -> String {
    if body.is_empty() {
        format!("<details>\n<summary>{}</summary>\n\n</details>", summary)
    } else {
        format!("<details>\n<summary>{}</summary>\n\n{}\n\n</details>", summary, body)
    }
}

fn tool_input_markdown(view: &ToolInputView<'_>) -> String {
    match view {
        ToolInputView::Command(command) => fenced("bash", command),
        ToolInputView::Edit { file_path, diff } if diff.is_empty() => format!("**{}**", file_path),
        ToolInputView::Edit { file_path, diff } => {
            format!("**{}**\n{}", file_path, fenced("diff", &diff.hunks()))
        }
        ToolInputView::FilePath(path) => format!("**{}**", path),
        ToolInputView::Search { pattern, path } => match path {
            Some(path) => format!("Pattern: {} in {}", inline_code(pattern), inline_code(path)),
            None => format!("Pattern: {}", inline_code(pattern)),
        },
        ToolInputView::Json(json) => fenced("json", json),
    }
}

#[derive(Default)]
struct MarkdownMessage {
    parts: Vec<String>,
}

impl BlockSink for MarkdownMessage {
    fn text(&mut self, text: &str) {
        self.parts.push(text.to_string());
    }

    fn thinking(&mut self, thinking: &str) {
        self.parts.push(details("Thinking", thinking));
    }

    fn tool_use(&mut self, name: &str, input: &Value) {
        let body = tool_input_view(name, input)
            .map(|view| tool_input_markdown(&view))
            .unwrap_or_default();
        self.parts.push(details(&format!("Tool: {}", name), &body));
    }

    fn tool_result(&mut self, result: &ToolResultView) {
        let summary = match result.summary {
            Some(s) => format!("{} · {}", result.label(), s),
            None => result.label().to_string(),
        };
        let body = match result.file_list() {
            Some(files) => files
                .iter()
                .map(|f| format!("- {}", inline_code(f)))
                .collect::<Vec<_>>()
                .join("\n"),
            None => fenced("", &result.body),
        };
        self.parts.push(details(&summary, &body));
    }
}

/// Markdown document with `<details>` sections for tool activity
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn content_type(&self) -> &'static str {
        "text/markdown"
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn generate(&self, ctx: &ExportContext<'_>) -> String {
        let session = ctx.session;
        let mut lines = vec![
            format!("# {}", session.display),
            String::new(),
            format!("**Project:** {} (`{}`)", session.project_name, session.project),
            format!("**Date:** {}", format_epoch_millis(session.timestamp)),
            format!("**Session ID:** `{}`", session.id),
            String::new(),
            "---".to_string(),
            String::new(),
        ];
        let mut rendered = 0;

        for message in ctx.messages {
            if message.kind == LineType::Summary {
                if let Some(summary) = message.summary.as_deref().filter(|s| !s.is_empty()) {
                    lines.push(format!("> **Summary:** {}", summary));
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

            let mut sink = MarkdownMessage::default();
            let emitted = walk_content(content, ctx.strip_tools, &mut sink);
            trace!(uuid = ?message.uuid, kind = %message.kind, emitted, "rendered message");
            if emitted == 0 {
                continue;
            }

            let model = message
                .model()
                .map(|m| format!(" *({})*", m))
                .unwrap_or_default();
            lines.push(format!("## {}{}", message.kind.role_label(), model));
            if let Some(ts) = &message.timestamp {
                lines.push(format!("*{}*", format_iso(ts)));
            }
            lines.push(String::new());
            lines.push(sink.parts.join("\n\n"));
            lines.push(String::new());
            rendered += 1;
        }

        debug!(
            format = "md",
            messages = rendered,
            strip_tools = ctx.strip_tools,
            "generated export"
        );
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::fixtures::{glob_conversation, mixed_turn, session, text_only};
    use serde_json::json;
    use transcript_core::{ContentBlock, ConversationMessage, MessageContent};

    fn render(messages: &[ConversationMessage], strip_tools: bool) -> String {
        let session = session();
        let ctx = ExportContext::new(&session, messages).with_strip_tools(strip_tools);
        MarkdownExporter.generate(&ctx)
    }

    #[test]
    fn test_header() {
        let md = render(&[], false);
        assert!(md.starts_with(
            "# List files\n\n**Project:** app (`/home/me/app`)\n**Date:** 2024-01-01 00:00:00 UTC\n**Session ID:** `sess-1`\n\n---\n"
        ));
    }

    #[test]
    fn test_glob_conversation() {
        let md = render(&glob_conversation(), false);
        assert!(md.contains("## User\n\nList files\n"));
        assert!(md.contains("<summary>Tool: Glob</summary>\n\nPattern: `*.ts`\n\n</details>"));
        assert!(md.contains("<summary>Result · 2 files</summary>\n\n- `a.ts`\n- `b.ts`\n\n</details>"));
    }

    #[test]
    fn test_model_timestamp_and_blocks() {
        let md = render(&[mixed_turn()], false);
        assert!(md.contains("## Assistant *(claude-sonnet)*\n*2024-01-01 00:00:05 UTC*\n"));
        assert!(md.contains("<details>\n<summary>Thinking</summary>\n\nLet me look\n\n</details>"));
        assert!(md.contains("```bash\nls -la\n```"));
        assert!(md.contains("<summary>Result · 3 lines</summary>\n\n```\na\nb\nc\n```"));
    }

    #[test]
    fn test_edit_renders_hunks() {
        let messages = vec![ConversationMessage::assistant(MessageContent::Blocks(vec![
            ContentBlock::tool_use(
                "t1",
                "Edit",
                json!({"file_path": "src/a.rs", "old_string": "old\n", "new_string": "new\n"}),
            ),
        ]))];
        let md = render(&messages, false);
        assert!(md.contains("**src/a.rs**\n```diff\n@@"));
        assert!(md.contains("-old\n+new\n```"));
        assert!(!md.contains("+++"));
    }

    #[test]
    fn test_fallback_json_and_search_path() {
        let messages = vec![ConversationMessage::assistant(MessageContent::Blocks(vec![
            ContentBlock::tool_use("t1", "WebFetch", json!({"url": "https://example.com"})),
            ContentBlock::tool_use("t2", "Grep", json!({"pattern": "todo", "path": "src"})),
        ]))];
        let md = render(&messages, false);
        assert!(md.contains("```json\n{\n  \"url\": \"https://example.com\"\n}\n```"));
        assert!(md.contains("Pattern: `todo` in `src`"));
    }

    #[test]
    fn test_fence_outlasts_backticks_in_result() {
        let messages = vec![ConversationMessage::assistant(MessageContent::Blocks(vec![
            ContentBlock::tool_result("t1", json!("```rust\nfn main() {}\n```"), false),
        ]))];
        let md = render(&messages, false);
        assert!(md.contains("````\n```rust\nfn main() {}\n```\n````"));
    }

    #[test]
    fn test_summary_and_empty_messages() {
        let messages = vec![
            ConversationMessage::summary("Earlier work"),
            ConversationMessage::user(MessageContent::Text(
                "<command-name>/clear</command-name>".into(),
            )),
        ];
        let md = render(&messages, true);
        assert!(md.contains("> **Summary:** Earlier work\n"));
        assert!(!md.contains("## User"));
    }

    #[test]
    fn test_empty_summary_skipped() {
        let md = render(&[ConversationMessage::summary("")], false);
        assert!(!md.contains("**Summary:**"));
    }

    #[test]
    fn test_strip_tools_matches_prefiltered() {
        let full = vec![mixed_turn()];
        let prefiltered: Vec<_> = full.iter().map(text_only).collect();
        let stripped = render(&full, true);
        assert_eq!(stripped, render(&prefiltered, false));
        assert!(!stripped.contains("<details>"));
        assert!(stripped.contains("Running **ls** now\n\nThree entries."));
    }

    #[test]
    fn test_fenced() {
        assert_eq!(fenced("", "plain"), "```\nplain\n```");
        assert_eq!(fenced("txt", "a `b` c"), "```txt\na `b` c\n```");
    }
}
