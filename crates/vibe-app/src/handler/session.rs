//! Session handlers: auth form, login/signup/logout, API key

use vibe_core::prelude::*;

use crate::auth::AuthTab;
use crate::message::{InputEdit, Message};
use crate::notification::Notification;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_auth_input(state: &mut AppState, edit: InputEdit) -> UpdateResult {
    match edit {
        InputEdit::Char(c) => state.auth_form.insert_char(c),
        InputEdit::Backspace => state.auth_form.backspace(),
    }
    UpdateResult::none()
}

/// Validate the visible tab and turn it into a Login/Signup message
pub fn handle_auth_submit(state: &mut AppState) -> UpdateResult {
    let form = &state.auth_form;
    let (validation, message) = match form.tab {
        AuthTab::Login => (
            form.validate_login(),
            Message::Login {
                email: form.login_email.trim().to_string(),
                password: form.login_password.clone(),
            },
        ),
        AuthTab::Signup => (
            form.validate_signup(),
            Message::Signup {
                email: form.signup_email.trim().to_string(),
                password: form.signup_password.clone(),
                name: form.signup_name.trim().to_string(),
            },
        ),
    };

    match validation {
        Ok(()) => UpdateResult::message(message),
        Err(e) => {
            debug!("Auth form rejected: {}", e);
            state.notify_error(&e);
            UpdateResult::none()
        }
    }
}

pub fn handle_login(state: &mut AppState, email: &str, password: &str) -> UpdateResult {
    match state.auth.login(email, password) {
        Ok(_) => {
            state.notify(Notification::success(
                "Welcome back!",
                "Successfully logged in to VibeCode IDE.",
            ));
            signed_in(state);
        }
        Err(e) => state.notify_error(&e),
    }
    UpdateResult::none()
}

pub fn handle_signup(state: &mut AppState, email: &str, password: &str, name: &str) -> UpdateResult {
    match state.auth.signup(email, password, name) {
        Ok(_) => {
            state.notify(Notification::success(
                "Account Created!",
                "Welcome to VibeCode IDE. Let's start building!",
            ));
            signed_in(state);
        }
        Err(e) => state.notify_error(&e),
    }
    UpdateResult::none()
}

fn signed_in(state: &mut AppState) {
    state.auth_form.reset();
    state.view = vibe_core::View::Projects;
    state.open_workspace(None);
}

/// Sign out: clear storage, drop the workspace, cancel pending timers
pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    if let Err(e) = state.auth.logout() {
        state.notify_error(&e);
    }
    state.close_workspace();
    UpdateResult::action(UpdateAction::CancelPendingTasks)
}

pub fn handle_update_api_key(state: &mut AppState, key: &str) -> UpdateResult {
    if !state.is_authenticated() {
        return UpdateResult::none();
    }
    match state.auth.update_api_key(key) {
        Ok(()) => state.notify(Notification::success(
            "API Key saved",
            "Your API key has been updated successfully.",
        )),
        Err(e) => state.notify_error(&e),
    }
    UpdateResult::none()
}

pub fn handle_api_key_submit(state: &mut AppState) -> UpdateResult {
    match state.settings_panel.take_api_key() {
        Some(key) => UpdateResult::message(Message::UpdateApiKey(key)),
        None => UpdateResult::none(),
    }
}
