//! # vibe-core - Core Domain Types
//!
//! Foundation crate for Vibe Workbench. Provides domain types, error handling,
//! logging setup, and the static mock data the workspace is populated with.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, toml).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`User`], [`Theme`], [`View`], [`BottomTab`], [`Project`] (`types`)
//! - [`ChatMessage`], [`ProposedChange`], [`ReviewStatus`] (`chat`)
//! - [`EditorTab`], [`TabId`] (`buffer`)
//! - [`TerminalLine`], [`LineKind`] (`terminal`)
//! - [`FileNode`], [`NodeKind`] (`tree`)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum; `Validation` is the one shown to users verbatim
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use vibe_core::prelude::*;
//! ```

pub mod buffer;
pub mod chat;
pub mod error;
pub mod logging;
pub mod mock_data;
pub mod terminal;
pub mod tree;
pub mod types;

/// Prelude for common imports used throughout all Vibe Workbench crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use buffer::{language_for_path, EditorTab, TabId};
pub use chat::{ChangeAction, ChatMessage, ChatRole, MessageId, ProposedChange, ReviewStatus};
pub use error::{Error, Result, ResultExt};
pub use terminal::{LineKind, TerminalLine};
pub use tree::{FileIcon, FileNode, NodeKind};
pub use types::{AppPhase, BottomTab, Project, ProjectStatus, Theme, User, View};
