//! Shared domain types: session user, theme, navigation, projects

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Light/dark flag applied to the whole UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Top-level view selected from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Recent projects list with quick actions
    #[default]
    Projects,
    /// Explorer + editor + terminal + assistant panel shell
    Workspace,
    /// Preferences, AI key, editor and account tabs
    Settings,
}

impl View {
    pub const ALL: [View; 3] = [View::Projects, View::Workspace, View::Settings];

    pub fn label(self) -> &'static str {
        match self {
            View::Projects => "Projects",
            View::Workspace => "Explorer",
            View::Settings => "Settings",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            View::Projects => "Your Projects",
            View::Workspace => "File Explorer",
            View::Settings => "Settings",
        }
    }
}

/// Tab shown in the bottom panel of the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BottomTab {
    #[default]
    Terminal,
    Assistant,
}

impl BottomTab {
    pub fn label(self) -> &'static str {
        match self {
            BottomTab::Terminal => "Terminal",
            BottomTab::Assistant => "AI Assistant",
        }
    }

    pub fn other(self) -> Self {
        match self {
            BottomTab::Terminal => BottomTab::Assistant,
            BottomTab::Assistant => BottomTab::Terminal,
        }
    }
}

/// The signed-in user record, persisted as JSON under the `user` key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl User {
    /// Initials shown in the header avatar
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

/// Activity state of a recent project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Idle,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Idle => "idle",
        }
    }
}

/// An entry in the recent-projects list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub last_modified: String,
    pub status: ProjectStatus,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_user_serializes_api_key_as_camel_case() {
        let user = User {
            id: "1".into(),
            email: "a@b.com".into(),
            name: "a".into(),
            api_key: Some("sk-123".into()),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"apiKey\":\"sk-123\""));
    }

    #[test]
    fn test_user_without_api_key_omits_field() {
        let user = User {
            id: "1".into(),
            email: "a@b.com".into(),
            name: "a".into(),
            api_key: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("apiKey"));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_initials() {
        let mut user = User {
            id: "1".into(),
            email: "ada@example.com".into(),
            name: "ada lovelace".into(),
            api_key: None,
        };
        assert_eq!(user.initials(), "AL");
        user.name = String::new();
        assert_eq!(user.initials(), "U");
    }

    #[test]
    fn test_bottom_tab_other() {
        assert_eq!(BottomTab::Terminal.other(), BottomTab::Assistant);
        assert_eq!(BottomTab::Assistant.other(), BottomTab::Terminal);
    }
}
