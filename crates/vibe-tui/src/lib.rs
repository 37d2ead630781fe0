//! vibe-tui - Terminal UI for Vibe Workbench
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! layout, theme, widgets and the event loop that drives a
//! [`vibe_app::AppState`].

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
