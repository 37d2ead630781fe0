//! Configuration types for Vibe Workbench
//!
//! Every section is optional in `config.toml`; missing fields fall back to
//! the defaults below.

use serde::{Deserialize, Serialize};
use vibe_core::mock_data::DEFAULT_PROJECT_NAME;
use vibe_core::Theme;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub editor: EditorSettings,

    #[serde(default)]
    pub assistant: AssistantSettings,

    #[serde(default)]
    pub terminal: TerminalSettings,

    #[serde(default)]
    pub workspace: WorkspaceSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme applied at startup
    #[serde(default)]
    pub theme: Theme,

    /// Start with the sidebar collapsed to icons
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sidebar_collapsed: false,
        }
    }
}

/// Editor settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Save the buffer after every edit
    #[serde(default)]
    pub auto_save: bool,

    #[serde(default = "default_tab_size")]
    pub tab_size: u8,

    /// Informational only; terminals have their own font size
    #[serde(default = "default_font_size")]
    pub font_size: u8,

    #[serde(default = "default_true")]
    pub word_wrap: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            auto_save: false,
            tab_size: default_tab_size(),
            font_size: default_font_size(),
            word_wrap: true,
        }
    }
}

/// Scripted assistant settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssistantSettings {
    /// Simulated latency before a reply is delivered
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

/// Terminal pane settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TerminalSettings {
    /// Oldest lines are dropped beyond this count
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
        }
    }
}

/// Workspace settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkspaceSettings {
    /// Root name of the explorer tree when opened from the sidebar
    #[serde(default = "default_project_name")]
    pub project_name: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
        }
    }
}

fn default_tab_size() -> u8 {
    2
}

fn default_font_size() -> u8 {
    14
}

fn default_true() -> bool {
    true
}

fn default_response_delay_ms() -> u64 {
    2000
}

fn default_max_lines() -> usize {
    1000
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.theme, Theme::Dark);
        assert_eq!(settings.assistant.response_delay_ms, 2000);
        assert_eq!(settings.terminal.max_lines, 1000);
        assert_eq!(settings.editor.tab_size, 2);
        assert!(settings.editor.word_wrap);
        assert!(!settings.editor.auto_save);
        assert_eq!(settings.workspace.project_name, "my-vibe-project");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            theme = "light"

            [assistant]
            response_delay_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(settings.ui.theme, Theme::Light);
        assert!(!settings.ui.sidebar_collapsed);
        assert_eq!(settings.assistant.response_delay_ms, 10);
        assert_eq!(settings.editor, EditorSettings::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
