//! Main update function - handles state transitions (TEA pattern)
//!
//! Session handlers live in `session`, pane handlers in `workspace`.

use vibe_core::prelude::*;
use vibe_core::View;

use crate::message::{InputEdit, Message};
use crate::settings_panel::GeneralItem;
use crate::state::AppState;

use super::{keys::handle_key, session, workspace, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.notifications.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session
        // ─────────────────────────────────────────────────────────
        Message::AuthInput(edit) => session::handle_auth_input(state, edit),
        Message::AuthFocusNext => {
            state.auth_form.focus_next();
            UpdateResult::none()
        }
        Message::AuthFocusPrev => {
            state.auth_form.focus_prev();
            UpdateResult::none()
        }
        Message::AuthToggleShowPassword => {
            state.auth_form.show_password = !state.auth_form.show_password;
            UpdateResult::none()
        }
        Message::AuthSwitchTab => {
            state.auth_form.switch_tab();
            UpdateResult::none()
        }
        Message::AuthSubmit => session::handle_auth_submit(state),
        Message::Login { email, password } => session::handle_login(state, &email, &password),
        Message::Signup {
            email,
            password,
            name,
        } => session::handle_signup(state, &email, &password, &name),
        Message::Logout => session::handle_logout(state),
        Message::UpdateApiKey(key) => session::handle_update_api_key(state, &key),

        // ─────────────────────────────────────────────────────────
        // Shell
        // ─────────────────────────────────────────────────────────
        Message::ShowView(view) => {
            if !state.is_authenticated() {
                return UpdateResult::none();
            }
            if view == View::Workspace && state.workspace.is_none() {
                state.open_workspace(None);
            }
            state.view = view;
            UpdateResult::none()
        }

        Message::ToggleSidebar => {
            state.sidebar_collapsed = !state.sidebar_collapsed;
            state.settings.ui.sidebar_collapsed = state.sidebar_collapsed;
            persist_settings(state)
        }

        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            state.settings.ui.theme = state.theme;
            info!("Theme set to {}", state.theme);
            persist_settings(state)
        }

        Message::ToggleAutoSave => {
            state.settings.editor.auto_save = !state.settings.editor.auto_save;
            persist_settings(state)
        }

        Message::DismissNotifications => {
            state.notifications.dismiss_all();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Projects view
        // ─────────────────────────────────────────────────────────
        Message::ProjectsUp => {
            state.projects.move_up();
            UpdateResult::none()
        }
        Message::ProjectsDown => {
            state.projects.move_down();
            UpdateResult::none()
        }
        Message::OpenProject(index) => {
            let Some(name) = state.projects.projects.get(index).map(|p| p.name.clone()) else {
                return UpdateResult::none();
            };
            if !state.is_authenticated() {
                return UpdateResult::none();
            }
            state.projects.selected = index;
            state.open_workspace(Some(&name));
            state.view = View::Workspace;
            // The old workspace's assistant may still have a reply in flight
            UpdateResult::action(UpdateAction::CancelPendingTasks)
        }

        // ─────────────────────────────────────────────────────────
        // Settings view
        // ─────────────────────────────────────────────────────────
        Message::SettingsNextTab => {
            state.settings_panel.next_tab();
            UpdateResult::none()
        }
        Message::SettingsPrevTab => {
            state.settings_panel.prev_tab();
            UpdateResult::none()
        }
        Message::SettingsSelectNext => {
            state.settings_panel.select_next();
            UpdateResult::none()
        }
        Message::SettingsSelectPrev => {
            state.settings_panel.select_prev();
            UpdateResult::none()
        }
        Message::SettingsToggleSelected => match state.settings_panel.selected_item() {
            GeneralItem::DarkMode => UpdateResult::message(Message::ToggleTheme),
            GeneralItem::AutoSave => UpdateResult::message(Message::ToggleAutoSave),
        },
        Message::ApiKeyEditStart => {
            state.settings_panel.editing_api_key = true;
            UpdateResult::none()
        }
        Message::ApiKeyInput(edit) => {
            match edit {
                InputEdit::Char(c) => state.settings_panel.api_key_input.push(c),
                InputEdit::Backspace => {
                    state.settings_panel.api_key_input.pop();
                }
            }
            UpdateResult::none()
        }
        Message::ApiKeyEditCancel => {
            state.settings_panel.editing_api_key = false;
            state.settings_panel.api_key_input.clear();
            UpdateResult::none()
        }
        Message::ApiKeySubmit => session::handle_api_key_submit(state),

        // ─────────────────────────────────────────────────────────
        // Panel shell
        // ─────────────────────────────────────────────────────────
        Message::ToggleBottomPanel => workspace::mutate(state, |ws| ws.toggle_bottom_panel()),
        Message::ShowBottomTab(tab) => workspace::mutate(state, |ws| ws.show_bottom_tab(tab)),
        Message::CycleFocus => workspace::mutate(state, |ws| ws.cycle_focus()),
        Message::CycleFocusBack => workspace::mutate(state, |ws| ws.cycle_focus_back()),
        Message::ResizeExplorer(delta) => workspace::mutate(state, |ws| ws.resize_explorer(delta)),
        Message::ResizeEditor(delta) => workspace::mutate(state, |ws| ws.resize_editor(delta)),

        // ─────────────────────────────────────────────────────────
        // Explorer
        // ─────────────────────────────────────────────────────────
        Message::ToggleFolder(path) => {
            workspace::mutate(state, |ws| ws.explorer.toggle_folder(&path))
        }
        Message::ActivateNode(path) => workspace::mutate(state, |ws| ws.explorer.activate(&path)),
        Message::ExplorerUp => workspace::mutate(state, |ws| ws.explorer.move_up()),
        Message::ExplorerDown => workspace::mutate(state, |ws| ws.explorer.move_down()),
        Message::ExplorerActivate => workspace::mutate(state, |ws| ws.explorer.activate_cursor()),
        Message::ExplorerCollapse => workspace::mutate(state, |ws| ws.explorer.collapse_cursor()),
        Message::SearchStart => workspace::mutate(state, |ws| ws.explorer.search_focused = true),
        Message::SearchInput(edit) => workspace::mutate(state, |ws| match edit {
            InputEdit::Char(c) => ws.explorer.search_insert(c),
            InputEdit::Backspace => ws.explorer.search_backspace(),
        }),
        Message::SearchExit { clear } => workspace::mutate(state, |ws| {
            if clear {
                ws.explorer.search_clear();
            } else {
                ws.explorer.search_focused = false;
            }
        }),

        // ─────────────────────────────────────────────────────────
        // Editor
        // ─────────────────────────────────────────────────────────
        Message::ActivateTab(id) => workspace::mutate(state, |ws| ws.editor.activate(id)),
        Message::NextTab => workspace::mutate(state, |ws| ws.editor.next_tab()),
        Message::PrevTab => workspace::mutate(state, |ws| ws.editor.prev_tab()),
        Message::CloseTab(id) => workspace::mutate(state, |ws| ws.editor.close(id)),
        Message::EditTab { id, text } => workspace::handle_edit_tab(state, id, text),
        Message::SaveTab(id) => workspace::handle_save_tab(state, id),
        Message::EditorKey(op) => workspace::handle_editor_key(state, op),

        // ─────────────────────────────────────────────────────────
        // Terminal
        // ─────────────────────────────────────────────────────────
        Message::TerminalInput(edit) => workspace::handle_terminal_input(state, edit),
        Message::TerminalSubmit => workspace::mutate(state, |ws| ws.terminal.submit()),
        Message::TerminalHistoryUp => workspace::mutate(state, |ws| ws.terminal.history_up()),
        Message::TerminalHistoryDown => workspace::mutate(state, |ws| ws.terminal.history_down()),
        Message::TerminalClear => workspace::mutate(state, |ws| ws.terminal.clear()),

        // ─────────────────────────────────────────────────────────
        // Assistant
        // ─────────────────────────────────────────────────────────
        Message::AssistantInput(edit) => workspace::handle_assistant_input(state, edit),
        Message::AssistantSubmit => workspace::handle_assistant_submit(state),
        Message::AssistantReplyReady { request_id, reply } => {
            workspace::handle_assistant_reply(state, request_id, reply)
        }
        Message::AssistantSelectPrev => {
            workspace::mutate(state, |ws| ws.assistant.select_prev_pending())
        }
        Message::AssistantSelectNext => {
            workspace::mutate(state, |ws| ws.assistant.select_next_pending())
        }
        Message::AcceptChanges(id) => workspace::handle_accept_changes(state, id),
        Message::RejectChanges(id) => workspace::handle_reject_changes(state, id),
    }
}

/// Ask the event loop to write settings back, when a config path is known
fn persist_settings(state: &AppState) -> UpdateResult {
    match &state.config_path {
        Some(path) => UpdateResult::action(UpdateAction::PersistSettings {
            path: path.clone(),
            settings: Box::new(state.settings.clone()),
        }),
        None => UpdateResult::none(),
    }
}
