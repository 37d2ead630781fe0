//! Workspace handlers: explorer, editor, terminal, assistant

use std::time::Duration;

use vibe_core::prelude::*;
use vibe_core::{MessageId, TabId};

use crate::assistant::{respond, AssistantReply};
use crate::message::{EditorOp, InputEdit};
use crate::state::AppState;
use crate::workspace::WorkspaceState;

use super::{UpdateAction, UpdateResult};

/// Run `f` against the workspace; messages arriving without one are dropped
fn with_workspace<F>(state: &mut AppState, f: F) -> UpdateResult
where
    F: FnOnce(&mut WorkspaceState) -> UpdateResult,
{
    match state.workspace.as_mut() {
        Some(ws) => f(ws),
        None => {
            trace!("No workspace; message ignored");
            UpdateResult::none()
        }
    }
}

/// Apply a workspace mutation that needs no follow-up
pub fn mutate<F>(state: &mut AppState, f: F) -> UpdateResult
where
    F: FnOnce(&mut WorkspaceState),
{
    with_workspace(state, |ws| {
        f(ws);
        UpdateResult::none()
    })
}

// ─────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────

pub fn handle_edit_tab(state: &mut AppState, id: TabId, text: String) -> UpdateResult {
    let auto_save = state.settings.editor.auto_save;
    mutate(state, |ws| {
        ws.editor.edit(id, text);
        if auto_save {
            ws.editor.save(id);
        }
    })
}

pub fn handle_save_tab(state: &mut AppState, id: TabId) -> UpdateResult {
    mutate(state, |ws| {
        ws.editor.save(id);
    })
}

pub fn handle_editor_key(state: &mut AppState, op: EditorOp) -> UpdateResult {
    let auto_save = state.settings.editor.auto_save;
    mutate(state, |ws| {
        let editor = &mut ws.editor;
        let edits = matches!(
            op,
            EditorOp::Insert(_) | EditorOp::Newline | EditorOp::Backspace | EditorOp::Delete
        );
        match op {
            EditorOp::Insert(c) => editor.insert_char(c),
            EditorOp::Newline => editor.insert_newline(),
            EditorOp::Backspace => editor.backspace(),
            EditorOp::Delete => editor.delete(),
            EditorOp::Left => editor.move_left(),
            EditorOp::Right => editor.move_right(),
            EditorOp::Up => editor.move_up(),
            EditorOp::Down => editor.move_down(),
            EditorOp::Home => editor.move_home(),
            EditorOp::End => editor.move_end(),
        }
        if edits && auto_save {
            if let Some(id) = editor.active {
                editor.save(id);
            }
        }
    })
}

// ─────────────────────────────────────────────────────────
// Terminal
// ─────────────────────────────────────────────────────────

pub fn handle_terminal_input(state: &mut AppState, edit: InputEdit) -> UpdateResult {
    mutate(state, |ws| match edit {
        InputEdit::Char(c) => ws.terminal.insert_char(c),
        InputEdit::Backspace => ws.terminal.backspace(),
    })
}

// ─────────────────────────────────────────────────────────
// Assistant
// ─────────────────────────────────────────────────────────

pub fn handle_assistant_input(state: &mut AppState, edit: InputEdit) -> UpdateResult {
    mutate(state, |ws| match edit {
        InputEdit::Char(c) => ws.assistant.insert_char(c),
        InputEdit::Backspace => ws.assistant.backspace(),
    })
}

/// Submit the prompt and schedule the canned reply
pub fn handle_assistant_submit(state: &mut AppState) -> UpdateResult {
    let delay = Duration::from_millis(state.settings.assistant.response_delay_ms);
    with_workspace(state, |ws| {
        let Some(pending) = ws.assistant.submit() else {
            return UpdateResult::none();
        };
        let reply = respond(&pending.prompt);
        UpdateResult::action(UpdateAction::ScheduleAssistantReply {
            request_id: pending.request_id,
            reply,
            delay,
        })
    })
}

pub fn handle_assistant_reply(
    state: &mut AppState,
    request_id: u64,
    reply: AssistantReply,
) -> UpdateResult {
    mutate(state, |ws| {
        ws.assistant.deliver(request_id, reply);
    })
}

pub fn handle_accept_changes(state: &mut AppState, id: MessageId) -> UpdateResult {
    mutate(state, |ws| {
        if let Some(changes) = ws.assistant.accept(id) {
            debug!("Accepted {} change(s) from {:?}", changes.len(), id);
        }
    })
}

pub fn handle_reject_changes(state: &mut AppState, id: MessageId) -> UpdateResult {
    mutate(state, |ws| {
        if ws.assistant.reject(id) {
            debug!("Rejected changes from {:?}", id);
        }
    })
}
