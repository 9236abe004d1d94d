//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/manuscript-desk/`, `~/.cache/manuscript-desk/`, `~/.local/share/manuscript-desk/`
//! - macOS: `~/Library/Application Support/manuscript-desk/`, `~/Library/Caches/manuscript-desk/`
//! - Windows: `%APPDATA%\manuscript-desk\`, `%LOCALAPPDATA%\manuscript-desk\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "manuscript-desk";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory (log files)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application data directory
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted preferences file
pub fn preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("preferences.toml"))
}

/// Default directory for HTML exports
pub fn default_export_dir() -> Result<PathBuf> {
    Ok(data_dir()?.join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_preferences_path() {
        let path = preferences_path().unwrap();
        assert!(path.ends_with("preferences.toml"));
    }

    #[test]
    fn test_export_dir_is_under_data_dir() {
        let exports = default_export_dir().unwrap();
        assert!(exports.ends_with("exports"));
        assert!(exports.starts_with(data_dir().unwrap()));
    }
}
