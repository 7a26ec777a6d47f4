//! Standalone HTML document export

use pulldown_cmark::{html, Event, Options, Parser};
use serde_json::Value;
use tracing::{debug, trace};
use transcript_core::{escape_html, DiffLineKind, LineType, UnifiedDiff};

use super::turns;
use crate::blocks::{walk_content, BlockSink};
use crate::context::{ExportContext, Exporter};
use crate::dates::format_epoch_millis;
use crate::icons::{ToolCategory, BULB, CHECK, CROSS};
use crate::tool_input::{tool_input_view, tool_preview, ToolInputView};
use crate::tool_result::ToolResultView;

const TOGGLE_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
  var collapseBtn = document.getElementById('toggle-collapse');
  var expandBtn = document.getElementById('toggle-expand');
  var toolEls = document.querySelectorAll('[data-tool]');

  function setCollapsed(collapsed) {
    toolEls.forEach(function(el) { el.classList.toggle('hidden', collapsed); });
    collapseBtn.classList.toggle('active', collapsed);
    expandBtn.classList.toggle('active', !collapsed);
  }

  collapseBtn.addEventListener('click', function() { setCollapsed(true); });
  expandBtn.addEventListener('click', function() { setCollapsed(false); });
});
"#;

const CONTROLS: &str = r#"<div class="controls">
<button id="toggle-expand" class="active">Show All</button>
<button id="toggle-collapse">Hide Tools</button>
</div>"#;

/// Markdown → HTML. Raw HTML in the source is escaped, never passed through.
fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn diff_html(diff: &UnifiedDiff) -> String {
    diff.hunk_lines()
        .map(|(kind, line)| {
            let line = escape_html(line);
            match kind {
                DiffLineKind::Addition => format!(r#"<span class="diff-add">{}</span>"#, line),
                DiffLineKind::Deletion => format!(r#"<span class="diff-del">{}</span>"#, line),
                DiffLineKind::HunkHeader => format!(r#"<span class="diff-hunk">{}</span>"#, line),
                DiffLineKind::Context => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn tool_input_html(view: &ToolInputView<'_>) -> String {
    match view {
        ToolInputView::Command(command) => {
            format!(r#"<pre class="code-block"><code>{}</code></pre>"#, escape_html(command))
        }
        ToolInputView::Edit { file_path, diff } => format!(
            r#"<div class="file-path">{}</div><pre class="diff-block"><code>{}</code></pre>"#,
            escape_html(file_path),
            diff_html(diff)
        ),
        ToolInputView::FilePath(path) => {
            format!(r#"<div class="file-path">{}</div>"#, escape_html(path))
        }
        ToolInputView::Search { pattern, path } => {
            let mut out = format!(
                r#"<span class="tool-meta">Pattern: <code>{}</code></span>"#,
                escape_html(pattern)
            );
            if let Some(path) = path {
                out.push_str(&format!(
                    r#" <span class="tool-meta">in <code>{}</code></span>"#,
                    escape_html(path)
                ));
            }
            out
        }
        ToolInputView::Json(json) => {
            format!(r#"<pre class="code-block"><code>{}</code></pre>"#, escape_html(json))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Text,
    Tool,
}

/// Collects one message's blocks into runs: consecutive text blocks share a
/// bubble, consecutive tool blocks share a toggleable container.
struct HtmlMessage {
    role: LineType,
    runs: Vec<(RunKind, Vec<String>)>,
}

impl HtmlMessage {
    fn new(role: LineType) -> Self {
        Self { role, runs: Vec::new() }
    }

    fn push(&mut self, kind: RunKind, fragment: String) {
        match self.runs.last_mut() {
            Some((last, parts)) if *last == kind => parts.push(fragment),
            _ => self.runs.push((kind, vec![fragment])),
        }
    }

    fn finish(self) -> String {
        let side = if self.role == LineType::User { "user" } else { "assistant" };
        self.runs
            .into_iter()
            .map(|(kind, parts)| match kind {
                RunKind::Text => format!(
                    r#"<div class="msg-{}"><div class="bubble">{}</div></div>"#,
                    side,
                    parts.join("\n")
                ),
                RunKind::Tool => format!(
                    r#"<div class="tool-only-msg" data-tool="1">{}</div>"#,
                    parts.join("\n")
                ),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl BlockSink for HtmlMessage {
    fn text(&mut self, text: &str) {
        let fragment = if self.role == LineType::User {
            format!(r#"<div class="user-text">{}</div>"#, escape_html(text))
        } else {
            format!(r#"<div class="msg-text">{}</div>"#, markdown_to_html(text))
        };
        self.push(RunKind::Text, fragment);
    }

    fn thinking(&mut self, thinking: &str) {
        self.push(
            RunKind::Tool,
            format!(
                r#"<details class="thinking-block"><summary>{} Thinking</summary><pre>{}</pre></details>"#,
                BULB,
                escape_html(thinking)
            ),
        );
    }

    fn tool_use(&mut self, name: &str, input: &Value) {
        let label = if name.is_empty() { "tool" } else { name };
        let preview = tool_preview(name, input)
            .map(|p| format!(r#" <span class="tool-preview">{}</span>"#, escape_html(&p)))
            .unwrap_or_default();
        let body = tool_input_view(name, input)
            .map(|view| tool_input_html(&view))
            .unwrap_or_default();

        self.push(
            RunKind::Tool,
            format!(
                r#"<details class="tool-block"><summary>{} <span class="tool-name">{}</span>{}</summary><div class="tool-content">{}</div></details>"#,
                ToolCategory::for_tool(name).icon(),
                escape_html(label),
                preview,
                body
            ),
        );
    }

    fn tool_result(&mut self, result: &ToolResultView) {
        let (icon, class) = if result.is_error {
            (CROSS, "result-error")
        } else {
            (CHECK, "result-success")
        };
        let summary = result
            .summary
            .map(|s| format!(r#" <span class="result-summary">· {}</span>"#, s))
            .unwrap_or_default();
        let body = match result.file_list() {
            Some(files) => format!(
                r#"<ul class="file-list">{}</ul>"#,
                files
                    .iter()
                    .map(|f| format!("<li>{}</li>", escape_html(f)))
                    .collect::<String>()
            ),
            None => format!("<pre>{}</pre>", escape_html(&result.body)),
        };

        self.push(
            RunKind::Tool,
            format!(
                r#"<details class="result-block {}"><summary>{} {}{}</summary>{}</details>"#,
                class,
                icon,
                result.label(),
                summary,
                body
            ),
        );
    }
}

/// Themed, self-contained HTML page with collapsible tool sections
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExporter;

impl Exporter for HtmlExporter {
    fn content_type(&self) -> &'static str {
        "text/html"
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn generate(&self, ctx: &ExportContext<'_>) -> String {
        let theme = ctx.theme_or_default();
        let session = ctx.session;

        let messages: Vec<String> = turns(ctx.messages)
            .filter_map(|(message, content)| {
                let mut sink = HtmlMessage::new(message.kind);
                let emitted = walk_content(content, ctx.strip_tools, &mut sink);
                trace!(uuid = ?message.uuid, kind = %message.kind, emitted, "rendered message");
                (emitted > 0).then(|| sink.finish())
            })
            .collect();

        debug!(
            format = "html",
            theme = %theme,
            messages = messages.len(),
            strip_tools = ctx.strip_tools,
            "generated export"
        );

        let (controls, script) = if ctx.strip_tools {
            (String::new(), String::new())
        } else {
            (format!("{}\n", CONTROLS), format!("<script>{}</script>\n", TOGGLE_SCRIPT))
        };
        let display = escape_html(&session.display);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{display} - Claude Conversation</title>
{fonts}
<style>
{css}</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>{display}</h1>
<div class="header-meta">
<span>{project}</span>
<span>{date}</span>
<span>{id}</span>
</div>
</div>
{controls}<div class="messages">
{messages}
</div>
</div>
{script}</body>
</html>
"#,
            display = display,
            fonts = theme.font_links(),
            css = theme.css(),
            project = escape_html(&session.project_name),
            date = format_epoch_millis(session.timestamp),
            id = escape_html(&session.id),
            controls = controls,
            messages = messages.join("\n"),
            script = script,
        )
    }
}
