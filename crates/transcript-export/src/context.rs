//! Export request and the exporter contract

use chrono::{DateTime, Utc};
use transcript_core::{ConversationMessage, Session};

use crate::theme::Theme;

/// Everything an exporter reads. Built per request, never mutated.
#[derive(Debug, Clone)]
pub struct ExportContext<'a> {
    pub messages: &'a [ConversationMessage],
    pub session: &'a Session,
    /// Only the HTML exporter looks at this
    pub theme: Option<Theme>,
    /// Drop every non-text block before rendering
    pub strip_tools: bool,
    /// Stamped into JSON output
    pub exported_at: DateTime<Utc>,
}

impl<'a> ExportContext<'a> {
    pub fn new(session: &'a Session, messages: &'a [ConversationMessage]) -> Self {
        Self {
            messages,
            session,
            theme: None,
            strip_tools: false,
            exported_at: Utc::now(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_strip_tools(mut self, strip_tools: bool) -> Self {
        self.strip_tools = strip_tools;
        self
    }

    pub fn with_exported_at(mut self, exported_at: DateTime<Utc>) -> Self {
        self.exported_at = exported_at;
        self
    }

    /// Theme to render with, dark unless one was chosen
    pub fn theme_or_default(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

/// A document renderer for one output format
pub trait Exporter: Send + Sync {
    /// MIME type of the generated document
    fn content_type(&self) -> &'static str;

    /// Extension (without dot) for the download filename
    fn file_extension(&self) -> &'static str;

    /// Render the complete document
    fn generate(&self, ctx: &ExportContext<'_>) -> String;
}
