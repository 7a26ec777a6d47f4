//! HTML themes: one structural stylesheet, three palettes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;

/// Color theme for the HTML export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Minimal,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light, Theme::Minimal]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Minimal => "minimal",
        }
    }

    fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
            Theme::Minimal => &MINIMAL,
        }
    }

    /// Complete stylesheet for this theme
    pub fn css(&self) -> String {
        let palette = self.palette();
        let mut css = palette.root_rules();
        css.push_str(BASE_CSS);
        css.push_str(&format!(".tool-name {{ color: {}; }}\n", palette.tool_name));
        if let Some(extra) = palette.layout {
            css.push_str(extra);
        }
        css
    }

    /// `<link>` tags for the web font the theme uses
    pub fn font_links(&self) -> &'static str {
        match self {
            Theme::Minimal => {
                r#"<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&display=swap" rel="stylesheet">"#
            }
            Theme::Dark | Theme::Light => {
                r#"<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="https://fonts.googleapis.com/css2?family=Geist+Mono:wght@400;500;600&display=swap" rel="stylesheet">"#
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "minimal" => Ok(Theme::Minimal),
            _ => Err(ExportError::UnknownTheme(s.to_string())),
        }
    }
}

/// CSS custom-property values substituted into [`BASE_CSS`]
struct Palette {
    vars: &'static [(&'static str, &'static str)],
    tool_name: &'static str,
    layout: Option<&'static str>,
}

impl Palette {
    fn root_rules(&self) -> String {
        let mut rules = String::from(":root {\n");
        for (name, value) in self.vars {
            rules.push_str(&format!("  --{}: {};\n", name, value));
        }
        rules.push_str("}\n");
        rules
    }
}

const DARK: Palette = Palette {
    vars: &[
        ("bg", "#09090b"),
        ("surface", "#18181b"),
        ("border", "#27272a"),
        ("text", "#e4e4e7"),
        ("text-muted", "#71717a"),
        ("user-bg", "rgba(79, 70, 229, 0.8)"),
        ("user-text", "#e0e7ff"),
        ("assistant-bg", "rgba(14, 116, 144, 0.5)"),
        ("assistant-text", "#e4e4e7"),
        ("thinking-bg", "rgba(245, 158, 11, 0.1)"),
        ("thinking-border", "rgba(245, 158, 11, 0.2)"),
        ("thinking-text", "#fbbf24"),
        ("tool-bg", "rgba(100, 116, 139, 0.1)"),
        ("tool-border", "rgba(100, 116, 139, 0.2)"),
        ("tool-text", "#cbd5e1"),
        ("result-success-bg", "rgba(20, 184, 166, 0.1)"),
        ("result-success-border", "rgba(20, 184, 166, 0.2)"),
        ("result-success-text", "#5eead4"),
        ("result-error-bg", "rgba(244, 63, 94, 0.1)"),
        ("result-error-border", "rgba(244, 63, 94, 0.2)"),
        ("result-error-text", "#fda4af"),
        ("diff-add", "#22c55e"),
        ("diff-del", "#ef4444"),
        ("diff-hunk", "#8b5cf6"),
        ("code-bg", "#0c0c0f"),
        ("font", "'Geist Mono', ui-monospace, SFMono-Regular, 'SF Mono', Menlo, Consolas, monospace"),
        ("font-size", "13px"),
        ("line-height", "1.6"),
        ("width", "768px"),
    ],
    tool_name: "#e2e8f0",
    layout: None,
};

const LIGHT: Palette = Palette {
    vars: &[
        ("bg", "#ffffff"),
        ("surface", "#f4f4f5"),
        ("border", "#e4e4e7"),
        ("text", "#18181b"),
        ("text-muted", "#71717a"),
        ("user-bg", "#dbeafe"),
        ("user-text", "#1e3a5f"),
        ("assistant-bg", "#f4f4f5"),
        ("assistant-text", "#18181b"),
        ("thinking-bg", "rgba(245, 158, 11, 0.08)"),
        ("thinking-border", "rgba(245, 158, 11, 0.2)"),
        ("thinking-text", "#b45309"),
        ("tool-bg", "rgba(100, 116, 139, 0.08)"),
        ("tool-border", "rgba(100, 116, 139, 0.2)"),
        ("tool-text", "#475569"),
        ("result-success-bg", "rgba(20, 184, 166, 0.08)"),
        ("result-success-border", "rgba(20, 184, 166, 0.2)"),
        ("result-success-text", "#0f766e"),
        ("result-error-bg", "rgba(244, 63, 94, 0.08)"),
        ("result-error-border", "rgba(244, 63, 94, 0.2)"),
        ("result-error-text", "#be123c"),
        ("diff-add", "#16a34a"),
        ("diff-del", "#dc2626"),
        ("diff-hunk", "#7c3aed"),
        ("code-bg", "#f4f4f5"),
        ("font", "'Geist Mono', ui-monospace, SFMono-Regular, 'SF Mono', Menlo, Consolas, monospace"),
        ("font-size", "13px"),
        ("line-height", "1.6"),
        ("width", "768px"),
    ],
    tool_name: "#334155",
    layout: None,
};

const MINIMAL: Palette = Palette {
    vars: &[
        ("bg", "#ffffff"),
        ("surface", "#ffffff"),
        ("border", "#e4e4e7"),
        ("text", "#18181b"),
        ("text-muted", "#71717a"),
        ("user-bg", "transparent"),
        ("user-text", "#18181b"),
        ("assistant-bg", "transparent"),
        ("assistant-text", "#18181b"),
        ("thinking-bg", "transparent"),
        ("thinking-border", "#e4e4e7"),
        ("thinking-text", "#92400e"),
        ("tool-bg", "transparent"),
        ("tool-border", "#e4e4e7"),
        ("tool-text", "#475569"),
        ("result-success-bg", "transparent"),
        ("result-success-border", "#e4e4e7"),
        ("result-success-text", "#0f766e"),
        ("result-error-bg", "transparent"),
        ("result-error-border", "#e4e4e7"),
        ("result-error-text", "#be123c"),
        ("diff-add", "#16a34a"),
        ("diff-del", "#dc2626"),
        ("diff-hunk", "#7c3aed"),
        ("code-bg", "#fafafa"),
        ("font", "'Inter', system-ui, -apple-system, sans-serif"),
        ("font-size", "15px"),
        ("line-height", "1.7"),
        ("width", "680px"),
    ],
    tool_name: "#334155",
    layout: Some(
        r#".msg-user .bubble, .msg-assistant .bubble { border-radius: 0; padding: 0; max-width: 100%; }
.msg-assistant .bubble { border-left: 3px solid #d4d4d8; padding-left: 16px; }
.msg-user { justify-content: flex-start; }
.msg-user .bubble { font-weight: 500; }
.msg-text pre { border: 1px solid var(--border); }
"#,
    ),
};

/// Structural rules shared by every theme
const BASE_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body { background: var(--bg); color: var(--text); font-family: var(--font); font-size: var(--font-size); line-height: var(--line-height); }
.container { max-width: var(--width); margin: 0 auto; padding: 24px 16px; }
.header { border-bottom: 1px solid var(--border); padding-bottom: 16px; margin-bottom: 24px; }
.header h1 { font-size: 16px; font-weight: 600; margin-bottom: 8px; }
.header-meta { font-size: 11px; color: var(--text-muted); }
.header-meta span { margin-right: 16px; }
.controls { display: flex; gap: 8px; margin-bottom: 16px; }
.controls button { padding: 6px 12px; font-size: 11px; background: var(--surface); color: var(--text-muted); border: 1px solid var(--border); border-radius: 6px; cursor: pointer; font-family: inherit; }
.controls button:hover { background: var(--border); }
.controls button.active { color: var(--text); border-color: var(--text-muted); }
.messages { display: flex; flex-direction: column; gap: 8px; }
.msg-user { display: flex; justify-content: flex-end; }
.msg-user .bubble { background: var(--user-bg); color: var(--user-text); border-radius: 16px 16px 4px 16px; padding: 10px 14px; max-width: 85%; }
.msg-assistant .bubble { background: var(--assistant-bg); color: var(--assistant-text); border-radius: 16px 16px 16px 4px; padding: 10px 14px; max-width: 85%; }
.user-text { white-space: pre-wrap; }
.msg-text { word-wrap: break-word; overflow-wrap: break-word; }
.msg-text p { margin: 0.4em 0; }
.msg-text pre { background: var(--code-bg); border-radius: 8px; padding: 12px; overflow-x: auto; margin: 8px 0; }
.msg-text code { font-family: inherit; font-size: 12px; }
.msg-text p code { background: var(--code-bg); padding: 1px 5px; border-radius: 3px; }
details { margin: 4px 0; }
details summary { cursor: pointer; display: inline-flex; align-items: center; gap: 6px; padding: 4px 10px; border-radius: 8px; font-size: 11px; font-weight: 500; user-select: none; }
details summary::-webkit-details-marker { display: none; }
details summary::marker { content: ''; }
details summary::after { content: '\25B6'; font-size: 8px; opacity: 0.4; margin-left: 4px; }
details[open] summary::after { content: '\25BC'; }
.thinking-block summary { background: var(--thinking-bg); border: 1px solid var(--thinking-border); color: var(--thinking-text); }
.thinking-block pre, .result-block pre { font-size: 12px; background: var(--surface); border: 1px solid var(--border); border-radius: 8px; padding: 12px; margin-top: 8px; white-space: pre-wrap; max-height: 320px; overflow-y: auto; }
.thinking-block pre { color: var(--text-muted); }
.result-block pre { word-break: break-all; }
.tool-block summary { background: var(--tool-bg); border: 1px solid var(--tool-border); color: var(--tool-text); }
.tool-preview { color: var(--text-muted); font-weight: 400; max-width: 240px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.tool-content { margin-top: 8px; padding-left: 4px; }
.result-success summary { background: var(--result-success-bg); border: 1px solid var(--result-success-border); color: var(--result-success-text); }
.result-error summary { background: var(--result-error-bg); border: 1px solid var(--result-error-border); color: var(--result-error-text); }
.result-summary { opacity: 0.6; font-weight: 400; }
.file-list { list-style: none; font-size: 12px; background: var(--surface); border: 1px solid var(--border); border-radius: 8px; padding: 8px 12px; margin-top: 8px; max-height: 320px; overflow-y: auto; }
.file-list li { padding: 2px 0; word-break: break-all; }
.code-block, .diff-block { background: var(--code-bg); border-radius: 8px; padding: 12px; overflow-x: auto; font-size: 12px; }
.code-block code, .diff-block code { font-family: inherit; }
.diff-add { color: var(--diff-add); }
.diff-del { color: var(--diff-del); }
.diff-hunk { color: var(--diff-hunk); }
.file-path { font-size: 11px; color: var(--text-muted); margin-bottom: 4px; }
.tool-meta { font-size: 11px; color: var(--text-muted); }
.tool-meta code { background: var(--code-bg); padding: 1px 4px; border-radius: 3px; }
.tool-only-msg { padding: 2px 0; }
.hidden { display: none !important; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("minimal".parse::<Theme>().unwrap(), Theme::Minimal);
        assert!(matches!("solarized".parse::<Theme>(), Err(ExportError::UnknownTheme(_))));
    }

    #[test]
    fn test_themes_share_structure() {
        for theme in Theme::all() {
            let css = theme.css();
            assert!(css.starts_with(":root {"));
            assert!(css.contains(".tool-block summary"));
            assert!(css.contains(".hidden { display: none !important; }"));
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert!(Theme::Dark.css().contains("--bg: #09090b;"));
        assert!(Theme::Light.css().contains("--bg: #ffffff;"));
        assert!(Theme::Minimal.css().contains("border-left: 3px solid"));
        assert!(!Theme::Dark.css().contains("border-left: 3px solid"));
    }

    #[test]
    fn test_palettes_define_same_variables() {
        let names = |p: &Palette| p.vars.iter().map(|(n, _)| *n).collect::<Vec<_>>();
        assert_eq!(names(&DARK), names(&LIGHT));
        assert_eq!(names(&DARK), names(&MINIMAL));
    }
}
