//! Key event handlers for each screen and pane

use vibe_core::{BottomTab, View};

use crate::input_key::InputKey;
use crate::message::{EditorOp, InputEdit, Message};
use crate::settings_panel::SettingsTab;
use crate::state::AppState;
use crate::workspace::{Pane, WorkspaceState};

const EXPLORER_RESIZE_STEP: i16 = 2;
const EDITOR_RESIZE_STEP: i16 = 5;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if !state.is_authenticated() {
        return handle_key_auth(state, key);
    }

    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.view {
        View::Projects => handle_key_projects(state, key),
        View::Settings => handle_key_settings(state, key),
        View::Workspace => match &state.workspace {
            Some(ws) => handle_key_workspace(ws, key),
            None => None,
        },
    }
}

/// Function and Ctrl chords available on every signed-in screen
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::F(1) => Some(Message::ShowView(View::Projects)),
        InputKey::F(2) => Some(Message::ShowView(View::Workspace)),
        InputKey::F(3) => Some(Message::ShowView(View::Settings)),
        InputKey::F(10) => Some(Message::Logout),
        InputKey::CharCtrl('q') => Some(Message::Quit),
        InputKey::CharCtrl('b') => Some(Message::ToggleSidebar),
        InputKey::CharCtrl('t') => Some(Message::ToggleTheme),
        _ => None,
    }
}

/// Text entry shared by every single-line input
fn input_edit(key: InputKey) -> Option<InputEdit> {
    match key {
        InputKey::Char(c) => Some(InputEdit::Char(c)),
        InputKey::Backspace => Some(InputEdit::Backspace),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────
// Auth screen
// ─────────────────────────────────────────────────────────

fn handle_key_auth(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::AuthFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::AuthFocusPrev),
        InputKey::Left | InputKey::Right => Some(Message::AuthSwitchTab),
        InputKey::Enter if state.auth_form.is_last_field() => Some(Message::AuthSubmit),
        InputKey::Enter => Some(Message::AuthFocusNext),
        InputKey::CharCtrl('p') => Some(Message::AuthToggleShowPassword),
        InputKey::Esc => Some(Message::DismissNotifications),
        other => input_edit(other).map(Message::AuthInput),
    }
}

// ─────────────────────────────────────────────────────────
// Projects view
// ─────────────────────────────────────────────────────────

fn handle_key_projects(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ProjectsUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ProjectsDown),
        InputKey::Enter => Some(Message::OpenProject(state.projects.selected)),
        InputKey::Esc => Some(Message::DismissNotifications),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────
// Settings view
// ─────────────────────────────────────────────────────────

fn handle_key_settings(state: &AppState, key: InputKey) -> Option<Message> {
    let panel = &state.settings_panel;

    if panel.editing_api_key {
        return match key {
            InputKey::Enter => Some(Message::ApiKeySubmit),
            InputKey::Esc => Some(Message::ApiKeyEditCancel),
            other => input_edit(other).map(Message::ApiKeyInput),
        };
    }

    match key {
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::SettingsNextTab),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => {
            Some(Message::SettingsPrevTab)
        }
        InputKey::Esc => Some(Message::DismissNotifications),
        _ => match panel.tab {
            SettingsTab::General => match key {
                InputKey::Up | InputKey::Char('k') => Some(Message::SettingsSelectPrev),
                InputKey::Down | InputKey::Char('j') => Some(Message::SettingsSelectNext),
                InputKey::Enter | InputKey::Char(' ') => Some(Message::SettingsToggleSelected),
                _ => None,
            },
            SettingsTab::Ai => match key {
                InputKey::Enter | InputKey::Char('e') => Some(Message::ApiKeyEditStart),
                _ => None,
            },
            SettingsTab::Editor | SettingsTab::Account => None,
        },
    }
}

// ─────────────────────────────────────────────────────────
// Workspace view
// ─────────────────────────────────────────────────────────

fn handle_key_workspace(ws: &WorkspaceState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => return Some(Message::CycleFocus),
        InputKey::BackTab => return Some(Message::CycleFocusBack),
        InputKey::CharCtrl('j') => return Some(Message::ToggleBottomPanel),
        InputKey::CharAlt('t') => return Some(Message::ShowBottomTab(BottomTab::Terminal)),
        InputKey::CharAlt('a') => return Some(Message::ShowBottomTab(BottomTab::Assistant)),
        InputKey::CharAlt('h') => return Some(Message::ResizeExplorer(-EXPLORER_RESIZE_STEP)),
        InputKey::CharAlt('l') => return Some(Message::ResizeExplorer(EXPLORER_RESIZE_STEP)),
        InputKey::CharAlt('k') => return Some(Message::ResizeEditor(-EDITOR_RESIZE_STEP)),
        InputKey::CharAlt('j') => return Some(Message::ResizeEditor(EDITOR_RESIZE_STEP)),
        _ => {}
    }

    match ws.focus {
        Pane::Explorer => handle_key_explorer(ws, key),
        Pane::Editor => handle_key_editor(ws, key),
        Pane::Bottom => match ws.bottom_tab {
            BottomTab::Terminal => handle_key_terminal(key),
            BottomTab::Assistant => handle_key_assistant(ws, key),
        },
    }
}

fn handle_key_explorer(ws: &WorkspaceState, key: InputKey) -> Option<Message> {
    if ws.explorer.search_focused {
        return match key {
            InputKey::Esc => Some(Message::SearchExit { clear: true }),
            InputKey::Enter => Some(Message::SearchExit { clear: false }),
            other => input_edit(other).map(Message::SearchInput),
        };
    }

    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ExplorerUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ExplorerDown),
        InputKey::Enter | InputKey::Right | InputKey::Char('l') | InputKey::Char(' ') => {
            Some(Message::ExplorerActivate)
        }
        InputKey::Left | InputKey::Char('h') => Some(Message::ExplorerCollapse),
        InputKey::Char('/') => Some(Message::SearchStart),
        InputKey::Esc => Some(Message::DismissNotifications),
        _ => None,
    }
}

fn handle_key_editor(ws: &WorkspaceState, key: InputKey) -> Option<Message> {
    let active = ws.editor.active;
    let op = match key {
        InputKey::CharCtrl('s') => return active.map(Message::SaveTab),
        InputKey::CharCtrl('w') => return active.map(Message::CloseTab),
        InputKey::PageDown => return Some(Message::NextTab),
        InputKey::PageUp => return Some(Message::PrevTab),
        InputKey::Esc => return Some(Message::DismissNotifications),
        InputKey::Char(c) => EditorOp::Insert(c),
        InputKey::Enter => EditorOp::Newline,
        InputKey::Backspace => EditorOp::Backspace,
        InputKey::Delete => EditorOp::Delete,
        InputKey::Left => EditorOp::Left,
        InputKey::Right => EditorOp::Right,
        InputKey::Up => EditorOp::Up,
        InputKey::Down => EditorOp::Down,
        InputKey::Home => EditorOp::Home,
        InputKey::End => EditorOp::End,
        _ => return None,
    };
    active.map(|_| Message::EditorKey(op))
}

fn handle_key_terminal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::TerminalSubmit),
        InputKey::Up => Some(Message::TerminalHistoryUp),
        InputKey::Down => Some(Message::TerminalHistoryDown),
        InputKey::CharCtrl('l') => Some(Message::TerminalClear),
        InputKey::Esc => Some(Message::DismissNotifications),
        other => input_edit(other).map(Message::TerminalInput),
    }
}

fn handle_key_assistant(ws: &WorkspaceState, key: InputKey) -> Option<Message> {
    let selected = ws.assistant.selected;
    match key {
        InputKey::Enter => Some(Message::AssistantSubmit),
        InputKey::Up => Some(Message::AssistantSelectPrev),
        InputKey::Down => Some(Message::AssistantSelectNext),
        InputKey::CharCtrl('y') => selected.map(Message::AcceptChanges),
        InputKey::CharCtrl('n') => selected.map(Message::RejectChanges),
        InputKey::Esc => Some(Message::DismissNotifications),
        other => input_edit(other).map(Message::AssistantInput),
    }
}
