//! Settings loader/writer for `config.toml`

use super::types::Settings;
use std::path::{Path, PathBuf};
use vibe_core::logging::APP_DIR_NAME;
use vibe_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";

/// Default location: `<config_dir>/vibe-workbench/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILENAME)
}

/// Default storage directory: `<data_local_dir>/vibe-workbench`
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Load settings from `config_path`
///
/// A missing or malformed file is not fatal: the problem is logged and
/// defaults are used.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
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

/// Save settings, replacing the file atomically (temp file + rename)
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<()> {
    ensure_parent_dir(config_path)?;

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    let temp_path = config_path.with_extension("toml.tmp");
    std::fs::write(&temp_path, full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved settings to {:?}", config_path);
    Ok(())
}

/// Write a commented default config if none exists yet
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }
    ensure_parent_dir(config_path)?;
    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
        }
    }
    Ok(())
}

fn generate_config_header() -> String {
    "# Vibe Workbench Configuration\n\
     # Every section is optional; missing values use defaults.\n\n"
        .to_string()
}

fn generate_default_config() -> String {
    r#"# Vibe Workbench Configuration
# Every section is optional; missing values use defaults.

[ui]
theme = "dark"              # "dark" | "light"
sidebar_collapsed = false

[editor]
auto_save = false           # Save after every keystroke
tab_size = 2
font_size = 14
word_wrap = true

[assistant]
response_delay_ms = 2000    # Simulated reply latency

[terminal]
max_lines = 1000

[workspace]
project_name = "my-vibe-project"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vibe_core::Theme;

    #[test]
    fn test_load_settings_missing_file_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_malformed_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ntheme = ").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.ui.theme = Theme::Light;
        settings.editor.auto_save = true;
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path);
        assert_eq!(loaded.ui.theme, Theme::Light);
        assert!(loaded.editor.auto_save);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_init_config_file_parses_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(init_config_file(&path).unwrap());
        assert!(!init_config_file(&path).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
