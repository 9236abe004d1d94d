//! Configuration and file management for manuscript-desk
//!
//! This crate provides:
//! - Platform directories for config, cache and data files
//! - Application configuration (AppConfig)
//! - The persisted theme preference

pub mod app_config;
pub mod paths;
pub mod preferences;

pub use app_config::{AppConfig, SERVER_URL_ENV};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeMode};
