use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analysis::MatchMode;

/// Default request body cap: 10 MB covers typical audio clips and images.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration, stored as JSON at `~/.analysis-service/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub schema_version: u32,
    pub host: String,
    pub port: u16,

    // Speech-to-text collaborator
    pub stt_server_url: String,
    pub stt_model: String,

    // Image pipeline output
    pub image_output_dir: Option<PathBuf>,

    // Request limits
    pub max_upload_bytes: usize,

    // Emotion keyword matching ("substring" keeps compatibility;
    // "token" requires whole-word matches)
    pub emotion_match_mode: MatchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: 1,
            host: "127.0.0.1".to_string(),
            port: 3000,
            stt_server_url: "http://127.0.0.1:8080".to_string(),
            stt_model: "whisper-1".to_string(),
            image_output_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            emotion_match_mode: MatchMode::Substring,
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".analysis-service"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default path or return default
    pub fn load_or_default() -> Self {
        match Self::config_path().and_then(|p| Self::load_from(&p)) {
            Ok(config) => config,
            Err(e) => {
                debug!("Failed to load config, using default: {}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file, falling back to defaults when the
    /// file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content =
                std::fs::read_to_string(path).context("Failed to read config file")?;
            serde_json::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the directory processed images are written to
    pub fn resolved_image_dir(&self) -> Result<PathBuf> {
        match &self.image_output_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("images")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.port, 3000);
        assert_eq!(config.emotion_match_mode, MatchMode::Substring);
        assert!(config.max_upload_bytes > 1024 * 1024);
    }

    #[test]
    fn test_load_from_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config.port, Config::default().port);
    }

    #[test]
    fn test_load_from_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.port = 4001;
        config.emotion_match_mode = MatchMode::Token;
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.port, 4001);
        assert_eq!(loaded.emotion_match_mode, MatchMode::Token);
    }

    #[test]
    fn test_load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_explicit_image_dir_wins() {
        let mut config = Config::default();
        config.image_output_dir = Some(PathBuf::from("/tmp/imgs"));
        assert_eq!(config.resolved_image_dir().unwrap(), PathBuf::from("/tmp/imgs"));
    }
}
