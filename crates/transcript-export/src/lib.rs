//! transcript-export - Document exporters for Claude Code transcripts
//!
//! Renders a session and its messages into HTML, Markdown, plain text or
//! JSON. Every document format goes through the same block walk
//! ([`blocks::walk`]) so truncation, sanitization and tool formatting agree
//! across formats; each exporter only supplies markup.

pub mod blocks;
pub mod config;
pub mod context;
pub mod dates;
pub mod error;
pub mod exporters;
pub mod filename;
pub mod format;
pub mod icons;
pub mod theme;
pub mod tool_input;
pub mod tool_result;

pub use blocks::{truncate_chars, walk, walk_content, BlockSink, RESULT_LIMIT, THINKING_LIMIT};
pub use config::ExportConfig;
pub use context::{ExportContext, Exporter};
pub use error::ExportError;
pub use exporters::{HtmlExporter, JsonExporter, MarkdownExporter, TextExporter};
pub use filename::{export_filename, safe_filename_stem};
pub use format::ExportFormat;
pub use theme::Theme;
pub use tool_input::{tool_input_view, ToolInputView};
pub use tool_result::{ResultSummary, ToolResultView};
