// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[toasts]` - Toast overlay placement
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_HERALD_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
pub(crate) const CONFIG_DIR_ENV: &str = "ICED_HERALD_CONFIG_DIR";
const APP_DIR: &str = "IcedHerald";

/// Corner of the window where the toast overlay stacks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    pub theme_mode: ThemeMode,
}

/// Toast overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct ToastConfig {
    /// Corner where active toasts are stacked.
    pub position: ToastPosition,
}

/// Persisted user preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub toasts: ToastConfig,
}

/// Resolves the settings file path.
///
/// The `ICED_HERALD_CONFIG_DIR` environment variable takes precedence over
/// the platform config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }

    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Loads the configuration, falling back to defaults.
///
/// Returns the config plus an optional warning suitable for surfacing to
/// the user as a toast. A missing file is the normal first-run case and
/// produces no warning; an unreadable or unparsable file does.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("Settings could not be loaded; using defaults".to_string()),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the resolved settings path.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_path() else {
        return Err(crate::error::Error::Config(
            "no configuration directory available".to_string(),
        ));
    };
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_temp_config_dir;
    use tempfile::tempdir;

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            toasts: ToastConfig {
                position: ToastPosition::TopLeft,
            },
        };

        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn sections_use_kebab_case_keys() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        save_to_path(&Config::default(), &path).expect("save");
        let contents = std::fs::read_to_string(&path).expect("read");
        assert!(contents.contains("theme-mode"));
        assert!(contents.contains("bottom-right"));
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        with_temp_config_dir(|_| {
            let (config, warning) = load();
            assert_eq!(config, Config::default());
            assert!(warning.is_none());
        });
    }

    #[test]
    fn invalid_file_loads_defaults_with_warning() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join(CONFIG_FILE), "this is { not toml").expect("write");

            let (config, warning) = load();
            assert_eq!(config, Config::default());
            assert!(warning.is_some());
        });
    }

    #[test]
    fn env_var_overrides_config_path() {
        with_temp_config_dir(|dir| {
            let path = config_path().expect("config path");
            assert!(path.starts_with(dir));
            assert!(path.ends_with(CONFIG_FILE));
        });
    }

    #[test]
    fn save_writes_through_resolved_path() {
        with_temp_config_dir(|dir| {
            let config = Config {
                general: GeneralConfig {
                    theme_mode: ThemeMode::Dark,
                },
                ..Config::default()
            };
            save(&config).expect("save");

            let loaded = load_from_path(&dir.join(CONFIG_FILE)).expect("load");
            assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        });
    }

    #[test]
    fn unknown_position_label_is_rejected() {
        let parsed: std::result::Result<Config, _> =
            toml::from_str("[toasts]\nposition = \"center\"\n");
        assert!(parsed.is_err());
    }
}
