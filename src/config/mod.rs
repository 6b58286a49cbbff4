//! Configuration module for SearchDeck
//!
//! Handles loading settings from YAML files, `.env` files and environment variables.

mod settings;

pub use settings::*;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Environment variable pointing at an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "SEARCHDECK_SETTINGS_PATH";

/// Load settings from the first settings file found, or use defaults.
///
/// Environment overrides are applied on top in every case, and the result
/// is validated before it is returned.
pub fn load() -> Result<Settings> {
    let settings = read()?;
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn read() -> Result<Settings> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        info!("Loading settings from: {}", path.display());
        let mut settings = Settings::from_file(&path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        settings.merge_env();
        return Ok(settings);
    }

    for path in default_paths() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)
                .with_context(|| format!("failed to read settings from {}", path.display()))?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Candidate settings file locations, most specific first
fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/searchdeck/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("searchdeck/settings.yml"));
    }
    paths
}
