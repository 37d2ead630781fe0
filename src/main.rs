//! Vibe Workbench - a terminal coding workspace with a scripted assistant
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use vibe_app::config::{default_config_path, default_data_dir, init_config_file, load_settings};
use vibe_app::{AppState, FileStore};
use vibe_core::prelude::*;

/// Vibe Workbench - a terminal coding workspace with a scripted assistant
#[derive(Parser, Debug)]
#[command(name = "vibe")]
#[command(about = "A terminal coding workspace with a scripted assistant", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding storage.json and logs
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(default_config_path);

    if args.init_config {
        if init_config_file(&config_path)? {
            println!("Wrote default config to {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file, since the TUI owns stdout
    let log_dir = args.data_dir.as_ref().map(|dir| dir.join("logs"));
    let log_file = vibe_core::logging::init(log_dir.as_deref())?;

    info!("═══════════════════════════════════════════════════════");
    info!("Vibe Workbench starting");
    info!("Config: {}", config_path.display());
    info!("Log file: {}", log_file.display());
    info!("═══════════════════════════════════════════════════════");

    let settings = load_settings(&config_path);
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let store = FileStore::in_dir(&data_dir);
    debug!("Session storage at {}", store.path().display());

    let state = AppState::new(settings, Box::new(store)).with_config_path(config_path);
    let result = vibe_tui::run(state).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}
