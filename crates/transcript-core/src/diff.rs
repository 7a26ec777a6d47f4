//! Unified diffs for file-edit tool calls

use similar::TextDiff;

/// Lines of context around each change
pub const CONTEXT_LINES: usize = 3;

/// Classification of a single unified-diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// `@@ -a,b +c,d @@`
    HunkHeader,
    /// `+line` (but not the `+++` file header)
    Addition,
    /// `-line` (but not the `---` file header)
    Deletion,
    Context,
}

impl DiffLineKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with("@@") {
            DiffLineKind::HunkHeader
        } else if line.starts_with('+') && !line.starts_with("+++") {
            DiffLineKind::Addition
        } else if line.starts_with('-') && !line.starts_with("---") {
            DiffLineKind::Deletion
        } else {
            DiffLineKind::Context
        }
    }
}

/// Unified diff text for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedDiff {
    text: String,
}

impl UnifiedDiff {
    /// Full diff text, including the `---`/`+++` file header
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Every line with its classification
    pub fn lines(&self) -> impl Iterator<Item = (DiffLineKind, &str)> {
        self.text.lines().map(|line| (DiffLineKind::classify(line), line))
    }

    /// Lines from the first hunk header on; the file header is dropped
    pub fn hunk_lines(&self) -> impl Iterator<Item = (DiffLineKind, &str)> {
        self.lines()
            .skip_while(|(kind, _)| *kind != DiffLineKind::HunkHeader)
    }

    /// Hunk lines joined back into text
    pub fn hunks(&self) -> String {
        self.hunk_lines()
            .map(|(_, line)| line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// (added, removed) line counts, derived from the classified lines
    pub fn stats(&self) -> (usize, usize) {
        self.lines().fold((0, 0), |(added, removed), (kind, _)| match kind {
            DiffLineKind::Addition => (added + 1, removed),
            DiffLineKind::Deletion => (added, removed + 1),
            _ => (added, removed),
        })
    }
}

/// Unified diff of `before` → `after`, labelled with `path` on both sides.
///
/// No timestamps are written; identical inputs produce an empty diff.
pub fn diff(path: &str, before: &str, after: &str) -> UnifiedDiff {
    let text_diff = TextDiff::from_lines(before, after);
    let text = text_diff
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .missing_newline_hint(false)
        .header(path, path)
        .to_string();
    UnifiedDiff { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_produce_empty_diff() {
        let d = diff("a.rs", "same\n", "same\n");
        assert!(d.is_empty());
        assert_eq!(d.stats(), (0, 0));
    }

    #[test]
    fn test_header_and_hunk() {
        let d = diff("src/lib.rs", "fn a() {}\n", "fn b() {}\n");
        let text = d.as_str();
        assert!(text.starts_with("--- src/lib.rs\n+++ src/lib.rs\n"));
        assert!(text.lines().nth(2).unwrap().starts_with("@@ -1"));
        assert!(text.contains("-fn a() {}"));
        assert!(text.contains("+fn b() {}"));
    }

    #[test]
    fn test_hunks_skip_file_header() {
        let d = diff("x", "one\ntwo\n", "one\nthree\n");
        let hunks = d.hunks();
        assert!(hunks.starts_with("@@"));
        assert!(!hunks.contains("+++"));
        assert!(!hunks.contains("---"));
    }

    #[test]
    fn test_stats_match_line_changes() {
        let before = "a\nb\nc\nd\n";
        let after = "a\nB\nc\nd\ne\nf\n";
        let d = diff("f.txt", before, after);
        // b -> B is one removal and one addition; e and f are additions
        assert_eq!(d.stats(), (3, 1));
    }

    #[test]
    fn test_context_is_limited() {
        let before: String = (1..=20).map(|i| format!("line {}\n", i)).collect();
        let after = before.replace("line 10\n", "line ten\n");
        let d = diff("f.txt", &before, &after);
        let context = d
            .hunk_lines()
            .filter(|(kind, _)| *kind == DiffLineKind::Context)
            .count();
        assert_eq!(context, CONTEXT_LINES * 2);
        assert!(!d.as_str().contains("line 1\n"));
    }

    #[test]
    fn test_missing_new_side_counts_removals() {
        let d = diff("f.txt", "x\ny", "");
        assert_eq!(d.stats(), (0, 2));
    }

    #[test]
    fn test_classify() {
        assert_eq!(DiffLineKind::classify("@@ -1 +1 @@"), DiffLineKind::HunkHeader);
        assert_eq!(DiffLineKind::classify("+added"), DiffLineKind::Addition);
        assert_eq!(DiffLineKind::classify("+++ b/x"), DiffLineKind::Context);
        assert_eq!(DiffLineKind::classify("-gone"), DiffLineKind::Deletion);
        assert_eq!(DiffLineKind::classify("--- a/x"), DiffLineKind::Context);
        assert_eq!(DiffLineKind::classify(" same"), DiffLineKind::Context);
    }
}
