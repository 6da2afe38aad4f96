//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// When validation errors become visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Every error shows as soon as it exists, including on a blank new row
    #[default]
    Always,
    /// Errors show once their field is touched, or after a submit attempt
    Touched,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Error visibility mode
    pub validation_mode: Option<ValidationMode>,
    /// Append accepted submissions as JSON lines to this file
    pub submission_log: Option<PathBuf>,
    /// Quit after the first accepted submission
    pub exit_on_submit: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "bills", "bills-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: TuiConfig = serde_json::from_str(&content)?;
            tracing::debug!("loaded config from {}", path.display());
            return Ok(config);
        }

        Ok(Self::default())
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode.unwrap_or_default()
    }

    pub fn exit_on_submit(&self) -> bool {
        self.exit_on_submit.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.validation_mode.is_none());
        assert!(config.submission_log.is_none());
        assert!(config.exit_on_submit.is_none());
        assert_eq!(config.validation_mode(), ValidationMode::Always);
        assert!(!config.exit_on_submit());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            validation_mode: Some(ValidationMode::Touched),
            submission_log: Some(PathBuf::from("/tmp/bills.jsonl")),
            exit_on_submit: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"touched\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.validation_mode, Some(ValidationMode::Touched));
        assert_eq!(
            parsed.submission_log,
            Some(PathBuf::from("/tmp/bills.jsonl"))
        );
        assert_eq!(parsed.exit_on_submit, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.validation_mode.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"validation_mode": "always", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.validation_mode, Some(ValidationMode::Always));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let json = r#"{"validation_mode": "on_blur"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.validation_mode.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"validation_mode": "touched", "exit_on_submit": true}"#).unwrap();
        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config.validation_mode(), ValidationMode::Touched);
        assert!(config.exit_on_submit());
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
    }
}
