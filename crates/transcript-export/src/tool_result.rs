//! Tool-result views, keyed on the name of the tool that produced them

use std::fmt;

use crate::blocks::{truncate_chars, RESULT_LIMIT};

/// One-line description of a tool's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSummary {
    Lines(usize),
    NoOutput,
    Files(usize),
    Matches(usize),
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultSummary::Lines(n) => write!(f, "{}", plural(*n, "line", "lines")),
            ResultSummary::NoOutput => write!(f, "no output"),
            ResultSummary::Files(n) => write!(f, "{}", plural(*n, "file", "files")),
            ResultSummary::Matches(n) => write!(f, "{}", plural(*n, "match", "matches")),
        }
    }
}

fn non_blank_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Format-neutral rendering of a tool result
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResultView {
    /// Name of the originating tool, empty when it could not be resolved
    pub tool_name: String,
    pub is_error: bool,
    /// Sanitized content, truncated for display
    pub body: String,
    pub summary: Option<ResultSummary>,
    /// Glob hits, one entry per file; `None` for every other tool
    pub files: Option<Vec<String>>,
}

impl ToolResultView {
    /// Build the view from already-sanitized content. Summaries count the full
    /// content; only `body` is truncated.
    pub fn new(tool_name: &str, content: &str, is_error: bool) -> Self {
        let body = truncate_chars(content, RESULT_LIMIT);
        let mut files = None;

        let summary = match tool_name.to_lowercase().as_str() {
            "bash" if content.is_empty() => Some(ResultSummary::NoOutput),
            "bash" | "read" => Some(ResultSummary::Lines(content.lines().count())),
            "glob" => {
                files = Some(non_blank_lines(&body).map(str::to_string).collect());
                Some(ResultSummary::Files(non_blank_lines(content).count()))
            }
            "grep" => Some(ResultSummary::Matches(non_blank_lines(content).count())),
            _ => None,
        };

        Self {
            tool_name: tool_name.to_string(),
            is_error,
            body,
            summary,
            files,
        }
    }

    /// "Error" or "Result"
    pub fn label(&self) -> &'static str {
        if self.is_error {
            "Error"
        } else {
            "Result"
        }
    }

    /// Files to list instead of the raw body (glob results that found something)
    pub fn file_list(&self) -> Option<&[String]> {
        self.files.as_deref().filter(|files| !files.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_counts_lines() {
        let view = ToolResultView::new("Bash", "a\nb\nc", false);
        assert_eq!(view.summary, Some(ResultSummary::Lines(3)));
        assert_eq!(view.summary.unwrap().to_string(), "3 lines");
        assert_eq!(view.label(), "Result");
    }

    #[test]
    fn test_bash_without_output() {
        let view = ToolResultView::new("bash", "", false);
        assert_eq!(view.summary.unwrap().to_string(), "no output");
    }

    #[test]
    fn test_glob_lists_files() {
        let view = ToolResultView::new("Glob", "a.ts\n\nb.ts\n", false);
        assert_eq!(view.summary, Some(ResultSummary::Files(2)));
        assert_eq!(
            view.file_list(),
            Some(&["a.ts".to_string(), "b.ts".to_string()][..])
        );
    }

    #[test]
    fn test_grep_counts_matches() {
        let view = ToolResultView::new("Grep", "src/a.rs:1:fn a\nsrc/b.rs:4:fn b", false);
        assert_eq!(view.summary.unwrap().to_string(), "2 matches");
        assert_eq!(ResultSummary::Matches(1).to_string(), "1 match");
    }

    #[test]
    fn test_unresolved_tool_has_no_summary() {
        let view = ToolResultView::new("", "whatever", true);
        assert_eq!(view.summary, None);
        assert_eq!(view.file_list(), None);
        assert_eq!(view.label(), "Error");
    }

    #[test]
    fn test_summary_uses_full_content() {
        let content = "line\n".repeat(1000);
        let view = ToolResultView::new("Read", &content, false);
        assert_eq!(view.summary, Some(ResultSummary::Lines(1000)));
        assert!(view.body.ends_with("..."));
        assert_eq!(view.body.chars().count(), RESULT_LIMIT + 3);
    }
}
