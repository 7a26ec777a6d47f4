//! Download filenames derived from the session title

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_STEM_CHARS: usize = 60;
const DEFAULT_STEM: &str = "conversation";

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\-_ ]").expect("unsafe-char regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Filesystem-safe stem for `display`.
///
/// Drops everything but ASCII alphanumerics, space, `-` and `_`, turns each
/// whitespace run into a single `-`, keeps the first 60 chars without a
/// leading or trailing `-`, and falls back to `conversation` when nothing is
/// left.
pub fn safe_filename_stem(display: &str) -> String {
    let kept = UNSAFE_CHARS.replace_all(display, "");
    let joined = WHITESPACE.replace_all(kept.trim(), "-");
    let stem: String = joined.chars().take(MAX_STEM_CHARS).collect();
    let stem = stem.trim_matches('-');
    if stem.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        stem.to_string()
    }
}

/// `claude-<stem>.<extension>`
pub fn export_filename(display: &str, extension: &str) -> String {
    format!("claude-{}.{}", safe_filename_stem(display), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_stem() {
        assert_eq!(safe_filename_stem("Fix bug #42: crash!!"), "Fix-bug-42-crash");
        assert_eq!(safe_filename_stem("snake_case and-dash"), "snake_case-and-dash");
    }

    #[test]
    fn test_stem_truncated() {
        let stem = safe_filename_stem(&"tokens ".repeat(30));
        assert_eq!(stem.chars().count(), MAX_STEM_CHARS);
        assert!(stem.starts_with("tokens-tokens"));
        assert!(stem.ends_with("-toke"));

        let cut_at_hyphen = safe_filename_stem(&"word ".repeat(30));
        assert_eq!(cut_at_hyphen, ["word"; 12].join("-"));
        assert!(!cut_at_hyphen.ends_with('-'));
    }

    #[test]
    fn test_empty_stem_defaults() {
        assert_eq!(safe_filename_stem(""), "conversation");
        assert_eq!(safe_filename_stem("!!! ???"), "conversation");
        assert_eq!(safe_filename_stem("- - -"), "conversation");
        assert_eq!(safe_filename_stem("日本語"), "conversation");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("List files", "md"), "claude-List-files.md");
    }
}
