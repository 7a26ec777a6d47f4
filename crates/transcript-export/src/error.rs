//! Error types for the export boundary

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before an exporter runs. Rendering itself never fails.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported format: {0}. Use html, md, json, or txt.")]
    UnknownFormat(String),

    #[error("Unknown theme: {0}. Use dark, light, or minimal.")]
    UnknownTheme(String),

    #[error("Failed to read config from {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
