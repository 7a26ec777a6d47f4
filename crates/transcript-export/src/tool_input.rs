//! Tool-input formatting rules shared by the HTML, Markdown and text exports
//!
//! Tool inputs are open JSON maps with no schema. Each rule names the tools it
//! applies to and pulls the fields it needs; the first rule that matches wins
//! and anything unmatched (or missing a required field) falls back to the raw
//! JSON. Exporters only decide the markup for each [`ToolInputView`].

use serde_json::{Map, Value};
use transcript_core::{diff, UnifiedDiff};

/// Format-neutral rendering of a tool call's input
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInputView<'a> {
    /// Shell command, shown verbatim in a code block
    Command(&'a str),
    /// File edit, shown as the path plus a unified diff
    Edit { file_path: &'a str, diff: UnifiedDiff },
    /// Read/write target
    FilePath(&'a str),
    /// Grep/glob pattern with an optional search root
    Search { pattern: &'a str, path: Option<&'a str> },
    /// Fallback: the whole input, pretty-printed
    Json(String),
}

type ViewBuilder = for<'a> fn(&'a Map<String, Value>) -> Option<ToolInputView<'a>>;

struct ToolInputRule {
    tools: &'static [&'static str],
    build: ViewBuilder,
}

static TOOL_INPUT_RULES: &[ToolInputRule] = &[
    ToolInputRule {
        tools: &["bash"],
        build: command_view,
    },
    ToolInputRule {
        tools: &["edit"],
        build: edit_view,
    },
    ToolInputRule {
        tools: &["read", "write"],
        build: file_path_view,
    },
    ToolInputRule {
        tools: &["grep", "glob"],
        build: search_view,
    },
];

/// String field, possibly empty
fn str_field<'a>(input: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    input.get(key).and_then(Value::as_str)
}

/// String field that must also be non-empty
fn required_field<'a>(input: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    str_field(input, key).filter(|s| !s.is_empty())
}

fn command_view(input: &Map<String, Value>) -> Option<ToolInputView<'_>> {
    required_field(input, "command").map(ToolInputView::Command)
}

fn edit_view(input: &Map<String, Value>) -> Option<ToolInputView<'_>> {
    let file_path = required_field(input, "file_path")?;
    let old_string = str_field(input, "old_string")?;
    let new_string = str_field(input, "new_string").unwrap_or("");
    Some(ToolInputView::Edit {
        file_path,
        diff: diff(file_path, old_string, new_string),
    })
}

fn file_path_view(input: &Map<String, Value>) -> Option<ToolInputView<'_>> {
    required_field(input, "file_path").map(ToolInputView::FilePath)
}

fn search_view(input: &Map<String, Value>) -> Option<ToolInputView<'_>> {
    let pattern = required_field(input, "pattern")?;
    Some(ToolInputView::Search {
        pattern,
        path: required_field(input, "path"),
    })
}

/// Pick the view for a tool call.
///
/// Returns `None` when `input` is not a non-empty object; there is nothing to
/// show in that case.
pub fn tool_input_view<'a>(tool_name: &str, input: &'a Value) -> Option<ToolInputView<'a>> {
    let map = input.as_object().filter(|m| !m.is_empty())?;
    let name = tool_name.to_lowercase();

    let matched = TOOL_INPUT_RULES
        .iter()
        .filter(|rule| rule.tools.contains(&name.as_str()))
        .find_map(|rule| (rule.build)(map));

    Some(matched.unwrap_or_else(|| {
        ToolInputView::Json(serde_json::to_string_pretty(input).unwrap_or_default())
    }))
}

/// Short hint shown next to the tool name in collapsed sections
pub fn tool_preview(tool_name: &str, input: &Value) -> Option<String> {
    const MAX_COMMAND_CHARS: usize = 50;

    let map = input.as_object()?;
    match tool_name.to_lowercase().as_str() {
        "read" | "edit" | "write" => required_field(map, "file_path").map(|path| {
            let parts: Vec<&str> = path.split('/').collect();
            parts[parts.len().saturating_sub(2)..].join("/")
        }),
        "bash" => required_field(map, "command").map(|cmd| {
            if cmd.chars().count() > MAX_COMMAND_CHARS {
                let head: String = cmd.chars().take(MAX_COMMAND_CHARS).collect();
                format!("{}...", head)
            } else {
                cmd.to_string()
            }
        }),
        "grep" => required_field(map, "pattern").map(|p| format!("\"{}\"", p)),
        "glob" => required_field(map, "pattern").map(str::to_string),
        "task" => required_field(map, "description").map(str::to_string),
        _ => None,
    }
}
