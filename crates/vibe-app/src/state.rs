//! Application state (Model in TEA pattern)
//!
//! [`AppState`] is the single context object for a run: settings, theme,
//! navigation, the auth session and, while someone is signed in, the
//! workspace with its panes.

use std::path::PathBuf;

use vibe_core::prelude::*;
use vibe_core::{AppPhase, Theme, View};

use crate::auth::{AuthFormState, AuthSession};
use crate::config::Settings;
use crate::notification::{Notification, Notifications};
use crate::projects::ProjectsState;
use crate::settings_panel::SettingsPanelState;
use crate::storage::KeyValueStore;
use crate::workspace::WorkspaceState;

#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    /// Where settings changes are written back; `None` keeps them in memory
    pub config_path: Option<PathBuf>,
    pub theme: Theme,
    pub view: View,
    pub sidebar_collapsed: bool,

    pub auth: AuthSession,
    pub auth_form: AuthFormState,

    /// Present exactly while a user is signed in
    pub workspace: Option<WorkspaceState>,
    pub projects: ProjectsState,
    pub settings_panel: SettingsPanelState,
    pub notifications: Notifications,
}

impl AppState {
    /// Build the context, restoring any persisted session from `store`
    pub fn new(settings: Settings, store: Box<dyn KeyValueStore>) -> Self {
        let auth = AuthSession::rehydrate(store);
        let mut state = Self {
            phase: AppPhase::Running,
            theme: settings.ui.theme,
            sidebar_collapsed: settings.ui.sidebar_collapsed,
            settings,
            config_path: None,
            view: View::Projects,
            auth,
            auth_form: AuthFormState::default(),
            workspace: None,
            projects: ProjectsState::default(),
            settings_panel: SettingsPanelState::default(),
            notifications: Notifications::default(),
        };
        if state.auth.is_authenticated() {
            state.open_workspace(None);
        }
        state
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Create the workspace for the configured project (or `project_name`)
    pub fn open_workspace(&mut self, project_name: Option<&str>) {
        let name = project_name.unwrap_or(&self.settings.workspace.project_name);
        info!("Opening workspace for {}", name);
        self.workspace = Some(WorkspaceState::new(name, &self.settings));
    }

    /// Tear down everything tied to the signed-in user
    pub fn close_workspace(&mut self) {
        if self.workspace.take().is_some() {
            debug!("Workspace torn down");
        }
        self.view = View::Projects;
        self.settings_panel = SettingsPanelState::default();
        self.projects = ProjectsState::default();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Surface a recoverable error as a toast
    pub fn notify_error(&mut self, error: &Error) {
        if !error.is_user_error() {
            warn!("{}", error);
        }
        let notification = match error {
            Error::Validation { title, detail } => Notification::error(title, detail),
            other => Notification::error("Something went wrong", other.to_string()),
        };
        self.notify(notification);
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_new_unauthenticated_has_no_workspace() {
        let state = AppState::new(Settings::default(), Box::new(MemoryStore::new()));
        assert!(!state.is_authenticated());
        assert!(state.workspace.is_none());
        assert_eq!(state.view, View::Projects);
        assert!(state.theme.is_dark());
    }

    #[test]
    fn test_new_authenticated_opens_workspace() {
        let mut store = MemoryStore::new();
        store
            .set(
                crate::auth::USER_STORAGE_KEY,
                r#"{"id":"1","email":"a@b.com","name":"a"}"#,
            )
            .unwrap();
        let state = AppState::new(Settings::default(), Box::new(store));
        assert!(state.is_authenticated());
        let ws = state.workspace.as_ref().unwrap();
        assert_eq!(ws.explorer.project_name(), "my-vibe-project");
    }

    #[test]
    fn test_theme_follows_settings() {
        let mut settings = Settings::default();
        settings.ui.theme = Theme::Light;
        settings.ui.sidebar_collapsed = true;
        let state = AppState::new(settings, Box::new(MemoryStore::new()));
        assert_eq!(state.theme, Theme::Light);
        assert!(state.sidebar_collapsed);
    }

    #[test]
    fn test_notify_error_uses_validation_title() {
        let mut state = AppState::new(Settings::default(), Box::new(MemoryStore::new()));
        state.notify_error(&Error::validation("Weak Password", "too short"));
        let latest = state.notifications.latest().unwrap();
        assert_eq!(latest.title, "Weak Password");
        assert_eq!(latest.body, "too short");
    }
}
