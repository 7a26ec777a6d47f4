//! Optional JSON config file with export defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::format::ExportFormat;
use crate::theme::Theme;

/// Defaults applied when the command line leaves a setting out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub theme: Theme,
    pub strip_tools: bool,
    /// Directory exports are written to when no output path is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl ExportConfig {
    /// Read a config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ExportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ExportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.format, ExportFormat::Html);
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.strip_tools);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"format": "md", "strip_tools": true}}"#).unwrap();
        let config = ExportConfig::load(file.path()).unwrap();
        assert_eq!(config.format, ExportFormat::Md);
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.strip_tools);
    }

    #[test]
    fn test_load_errors() {
        let missing = ExportConfig::load(Path::new("/no/such/config.json")).unwrap_err();
        assert!(matches!(missing, ExportError::ConfigRead { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"theme": "neon"}}"#).unwrap();
        let invalid = ExportConfig::load(file.path()).unwrap_err();
        assert!(matches!(invalid, ExportError::ConfigParse { .. }));
    }
}
