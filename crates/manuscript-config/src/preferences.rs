//! Persisted user preferences
//!
//! Only the colour theme is stored today. The value is kept as a plain
//! string so that a hand-edited or stale file never prevents startup:
//! anything other than `"light"` reads back as dark.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::paths;

/// Colour theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a stored value; unknown values fall back to dark
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("light") {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage for the theme preference
pub trait PreferenceStore: Send + Sync {
    /// Stored theme, or dark when nothing usable is stored
    fn load_theme(&self) -> ThemeMode;

    fn save_theme(&self, mode: ThemeMode) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Preferences kept in a TOML file
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.config/manuscript-desk/preferences.toml`
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(paths::preferences_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<PreferencesFile> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences file: {:?}", self.path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {:?}", self.path))
    }

    fn write(&self, file: &PreferencesFile) -> Result<()> {
        let content = toml::to_string_pretty(file).context("Failed to serialize preferences")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences file: {:?}", self.path))?;

        log::info!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> ThemeMode {
        if !self.path.exists() {
            return ThemeMode::default();
        }

        match self.read() {
            Ok(file) => file
                .theme
                .as_deref()
                .map(ThemeMode::parse)
                .unwrap_or_default(),
            Err(e) => {
                log::warn!("{:#}", e);
                ThemeMode::default()
            }
        }
    }

    fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        let mut file = if self.path.exists() {
            self.read().unwrap_or_default()
        } else {
            PreferencesFile::default()
        };
        file.theme = Some(mode.as_str().to_string());
        self.write(&file)
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    theme: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw value, as if it had been written earlier
    pub fn with_raw_theme(value: &str) -> Self {
        Self {
            theme: Mutex::new(Some(value.to_string())),
        }
    }

    pub fn raw_theme(&self) -> Option<String> {
        self.theme.lock().ok().and_then(|theme| theme.clone())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> ThemeMode {
        self.raw_theme()
            .as_deref()
            .map(ThemeMode::parse)
            .unwrap_or_default()
    }

    fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        let mut theme = self
            .theme
            .lock()
            .map_err(|_| anyhow::anyhow!("Preference store lock poisoned"))?;
        *theme = Some(mode.as_str().to_string());
        Ok(())
    }
}
