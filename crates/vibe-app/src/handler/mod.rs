//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping per screen and pane
//! - `session`: Login, signup, logout and API key handlers
//! - `workspace`: Explorer, editor, terminal and assistant handlers

pub(crate) mod keys;
pub(crate) mod session;
pub(crate) mod update;
pub(crate) mod workspace;


use std::path::PathBuf;
use std::time::Duration;

use crate::assistant::AssistantReply;
use crate::config::Settings;
use crate::message::Message;

pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Deliver `reply` as [`Message::AssistantReplyReady`] after `delay`
    ScheduleAssistantReply {
        request_id: u64,
        reply: AssistantReply,
        delay: Duration,
    },

    /// Abort every outstanding delayed task (sign-out)
    CancelPendingTasks,

    /// Write settings back to the config file
    PersistSettings {
        path: PathBuf,
        settings: Box<Settings>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
