//! Application configuration
//!
//! Loaded from `.manuscript-desk.toml` in the current directory, then from
//! the home directory. Missing keys take defaults; a broken file is logged
//! and ignored.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_FILE: &str = ".manuscript-desk.toml";

/// Environment variable overriding `server_url`
pub const SERVER_URL_ENV: &str = "MANUSCRIPT_SERVER_URL";

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the manuscript server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Overall request timeout; unset leaves the transport default in place
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Message shown by the loading indicator when a caller gives none
    #[serde(default = "default_loading_message")]
    pub loading_message: String,

    /// Where HTML exports are written (defaults to the data directory)
    #[serde(default)]
    pub export_dir: Option<String>,
}

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_toast_duration_ms() -> u64 {
    4000
}

fn default_loading_message() -> String {
    "Processing...".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: None,
            toast_duration_ms: default_toast_duration_ms(),
            loading_message: default_loading_message(),
            export_dir: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    /// `MANUSCRIPT_SERVER_URL` wins over the file.
    pub fn load() -> Self {
        let mut config = Self::load_from_candidates(&candidate_paths());
        config.override_server_url(std::env::var(SERVER_URL_ENV).ok());
        config
    }

    /// Parse the first readable candidate file
    pub fn load_from_candidates(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            let Ok(content) = std::fs::read_to_string(path) else {
                continue;
            };
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {:#}", path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }

    /// Replace the server URL when an override is present and non-empty
    pub fn override_server_url(&mut self, server_url: Option<String>) {
        if let Some(url) = server_url.filter(|url| !url.trim().is_empty()) {
            log::info!("Server URL overridden: {}", url);
            self.server_url = url;
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Export directory, falling back to the platform data directory
    pub fn export_dir(&self) -> Result<PathBuf> {
        match &self.export_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => crate::paths::default_export_dir(),
        }
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_FILE));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_url, "http://127.0.0.1:5000");
        assert_eq!(config.toast_duration(), Duration::from_millis(4000));
        assert_eq!(config.loading_message, "Processing...");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = AppConfig::from_toml(
            r#"
            server_url = "https://drafts.example.com"
            request_timeout_secs = 120
        "#,
        )
        .unwrap();
        assert_eq!(config.server_url, "https://drafts.example.com");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(120)));
        // Other fields should use defaults
        assert_eq!(config.toast_duration_ms, 4000);
    }

    #[test]
    fn test_first_readable_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("present.toml");
        let mut file = std::fs::File::create(&present).unwrap();
        writeln!(file, "toast_duration_ms = 1500").unwrap();

        let config = AppConfig::load_from_candidates(&[missing, present]);
        assert_eq!(config.toast_duration_ms, 1500);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "server_url = [").unwrap();

        let config = AppConfig::load_from_candidates(&[broken]);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_server_url_override() {
        let mut config = AppConfig::default();
        config.override_server_url(Some("  ".into()));
        assert_eq!(config.server_url, "http://127.0.0.1:5000");
        config.override_server_url(Some("http://10.0.0.2:8000".into()));
        assert_eq!(config.server_url, "http://10.0.0.2:8000");
    }
}
