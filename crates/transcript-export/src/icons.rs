//! Inline SVG icons for the HTML export

/// Icon family a tool is shown with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    Terminal,
    Search,
    Edit,
    File,
    Folder,
    Wrench,
}

impl ToolCategory {
    /// Case-insensitive lookup; unknown tools get the wrench
    pub fn for_tool(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "bash" => ToolCategory::Terminal,
            "grep" | "glob" => ToolCategory::Search,
            "edit" => ToolCategory::Edit,
            "read" | "write" => ToolCategory::File,
            "task" => ToolCategory::Folder,
            _ => ToolCategory::Wrench,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolCategory::Terminal => TERMINAL,
            ToolCategory::Search => SEARCH,
            ToolCategory::Edit => PENCIL,
            ToolCategory::File => FILE,
            ToolCategory::Folder => FOLDER,
            ToolCategory::Wrench => WRENCH,
        }
    }
}

macro_rules! svg {
    ($body:literal) => {
        concat!(
            r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

pub const TERMINAL: &str = svg!(r#"<polyline points="4 17 10 11 4 5"/><line x1="12" y1="19" x2="20" y2="19"/>"#);
pub const SEARCH: &str = svg!(r#"<circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#);
pub const PENCIL: &str = svg!(r#"<path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/>"#);
pub const FILE: &str = svg!(r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#);
pub const FOLDER: &str = svg!(r#"<path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>"#);
pub const WRENCH: &str = svg!(r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>"#);
pub const BULB: &str = svg!(r#"<path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/><path d="M9 18h6"/><path d="M10 22h4"/>"#);
pub const CHECK: &str = svg!(r#"<path d="M20 6 9 17l-5-5"/>"#);
pub const CROSS: &str = svg!(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#);
