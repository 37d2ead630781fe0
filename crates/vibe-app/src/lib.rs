//! vibe-app - Application state and orchestration for Vibe Workbench
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events,
//! [`handler::update`] the transition function. Each pane of the workspace
//! is a plain state machine (`explorer`, `editor`, `terminal`, `assistant`)
//! that can be tested without rendering.
//!
//! Side effects are limited to the delayed assistant reply, settings
//! write-back and the session record in [`storage`].

pub mod actions;
pub mod assistant;
pub mod auth;
pub mod config;
pub mod editor;
pub mod explorer;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notification;
pub mod process;
pub mod projects;
pub mod settings_panel;
pub mod signals;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod terminal;
pub mod workspace;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tasks::{DelayedTask, TaskRegistry};
pub use workspace::{Pane, WorkspaceState};
