//! Configuration file parsing for Vibe Workbench
//!
//! Supports `<config_dir>/vibe-workbench/config.toml` (or a path given on
//! the command line) with `[ui]`, `[editor]`, `[assistant]`, `[terminal]`
//! and `[workspace]` sections.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, default_data_dir, init_config_file, load_settings, save_settings,
};
pub use types::*;
