//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use mealdeck_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "mealdeck";

/// Platform config directory for mealdeck (`~/.config/mealdeck` on Linux)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load settings from `<config_dir>/config.toml`
///
/// A missing file yields defaults. An unreadable or invalid file is logged and
/// also yields defaults; a broken config never prevents startup.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the config directory with a commented default config.toml
///
/// Existing files are left untouched.
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", config_dir, e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# mealdeck configuration

[source]
# TheMealDB-compatible API base URL
base_url = "https://www.themealdb.com/api/json/v1/1"
# Per-request timeout in seconds (0 = wait indefinitely)
request_timeout_secs = 15

[dashboard]
# Random recipes fetched per refresh
batch_size = 8

[ui]
# Event poll interval in milliseconds
tick_rate_ms = 50
show_key_hints = true
"#;
        std::fs::write(&config_path, default_content)?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[source]
base_url = "http://localhost:9000/api"
request_timeout_secs = 3

[dashboard]
batch_size = 12
"#;
        std::fs::write(temp.path().join(CONFIG_FILENAME), config).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.source.base_url, "http://localhost:9000/api");
        assert_eq!(settings.source.request_timeout_secs, 3);
        assert_eq!(settings.dashboard.batch_size, 12);
        assert!(settings.ui.show_key_hints);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "[dashboard\nbatch_size = ").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_writes_loadable_defaults() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("mealdeck");
        init_config_dir(&dir).unwrap();

        assert!(dir.join(CONFIG_FILENAME).exists());
        assert_eq!(load_settings(&dir), Settings::default());
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILENAME),
            "[dashboard]\nbatch_size = 2\n",
        )
        .unwrap();

        init_config_dir(temp.path()).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.dashboard.batch_size, 2);
    }

    #[test]
    fn test_default_config_dir_is_namespaced() {
        assert!(default_config_dir().ends_with(APP_DIR));
    }
}
