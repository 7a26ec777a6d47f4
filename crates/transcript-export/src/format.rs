//! Output format identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::context::Exporter;
use crate::error::ExportError;
use crate::exporters::{HtmlExporter, JsonExporter, MarkdownExporter, TextExporter};

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Html,
    Md,
    Json,
    Txt,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::Html,
            ExportFormat::Md,
            ExportFormat::Json,
            ExportFormat::Txt,
        ]
    }

    /// Identifier accepted on the command line
    pub fn id(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Md => "md",
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
        }
    }

    /// The exporter for this format
    pub fn exporter(&self) -> &'static dyn Exporter {
        match self {
            ExportFormat::Html => &HtmlExporter,
            ExportFormat::Md => &MarkdownExporter,
            ExportFormat::Json => &JsonExporter,
            ExportFormat::Txt => &TextExporter,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(ExportFormat::Html),
            "md" => Ok(ExportFormat::Md),
            "json" => Ok(ExportFormat::Json),
            "txt" => Ok(ExportFormat::Txt),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}
