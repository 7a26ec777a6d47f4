//! transcript-core - Core types and text processing for transcript export
//!
//! This crate provides the types for representing Claude Code session
//! transcripts, a JSONL loader, and the text passes shared by every export
//! format: marker sanitization, unified diffs and block filtering.

pub mod diff;
pub mod error;
pub mod filter;
pub mod parser;
pub mod sanitize;
pub mod types;

pub use diff::*;
pub use error::*;
pub use filter::*;
pub use parser::*;
pub use sanitize::*;
pub use types::*;
