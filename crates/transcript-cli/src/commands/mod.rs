//! CLI command implementations

pub mod export;
pub mod formats;
pub mod info;
