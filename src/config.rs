//! Configuration handling for the intake form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SUBMISSIONS_ENDPOINT: &str = "/api/submissions";
pub const DEFAULT_HEALTH_ENDPOINT: &str = "/health";

/// User configuration for the intake form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Base URL of the intake backend
    pub api_base_url: Option<String>,
    /// Path of the submissions endpoint
    pub submissions_endpoint: Option<String>,
    /// Path of the health endpoint
    pub health_endpoint: Option<String>,
    /// Ping the backend on startup to show its status
    pub check_health_on_startup: Option<bool>,
}

impl IntakeConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "keylight", "keylight-intake")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("intake.log"))
    }

    /// Load configuration from the platform config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, using defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: IntakeConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn submissions_endpoint(&self) -> &str {
        self.submissions_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_SUBMISSIONS_ENDPOINT)
    }

    pub fn health_endpoint(&self) -> &str {
        self.health_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_HEALTH_ENDPOINT)
    }

    pub fn check_health_on_startup(&self) -> bool {
        self.check_health_on_startup.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IntakeConfig::default();
        assert!(config.api_base_url.is_none());
        assert_eq!(config.api_base_url(), "http://localhost:3000");
        assert_eq!(config.submissions_endpoint(), "/api/submissions");
        assert_eq!(config.health_endpoint(), "/health");
        assert!(config.check_health_on_startup());
    }

    #[test]
    fn test_serialization() {
        let config = IntakeConfig {
            api_base_url: Some("https://intake.keylight.example".to_string()),
            submissions_endpoint: Some("/v2/leads".to_string()),
            health_endpoint: None,
            check_health_on_startup: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: IntakeConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_base_url(), "https://intake.keylight.example");
        assert_eq!(parsed.submissions_endpoint(), "/v2/leads");
        assert_eq!(parsed.health_endpoint(), "/health");
        assert!(!parsed.check_health_on_startup());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: IntakeConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_base_url": "http://10.0.0.2:3000", "theme": "dark"}"#;
        let parsed: IntakeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_base_url(), "http://10.0.0.2:3000");
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = std::env::temp_dir().join(format!("keylight-missing-{}.json", uuid::Uuid::new_v4()));
        let config = IntakeConfig::load_from(&path).unwrap();
        assert!(config.api_base_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("keylight-config-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{"api_base_url": "http://intake.local"}"#).unwrap();
        let config = IntakeConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().api_base_url(), "http://intake.local");
    }

    #[test]
    fn test_load_from_malformed_file_is_error() {
        let path = std::env::temp_dir().join(format!("keylight-bad-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, "{not json").unwrap();
        let result = IntakeConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_paths_do_not_panic() {
        let _config = IntakeConfig::config_path();
        let _log = IntakeConfig::log_path();
    }
}
