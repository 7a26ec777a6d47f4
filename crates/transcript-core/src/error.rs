//! Error types for transcript loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a transcript from disk
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Transcript not found at {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
