//! Logging configuration using tracing
//!
//! The TUI owns stdout, so every log line goes to a daily-rolling file.

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Application directory name under the platform data/config dirs
pub const APP_DIR_NAME: &str = "vibe-workbench";

const LOG_FILE_NAME: &str = "vibe.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/vibe-workbench/logs/` unless
/// `log_dir` overrides it. Log level is controlled by the `VIBE_LOG`
/// environment variable. Returns the path of today's log file.
///
/// # Examples
/// ```bash
/// VIBE_LOG=debug vibe
/// VIBE_LOG=vibe_app=trace vibe
/// ```
pub fn init(log_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => get_log_directory(),
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("VIBE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("vibe=info,vibe_app=info,vibe_tui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    Ok(current_log_file(&log_dir))
}

/// Get the default log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR_NAME).join("logs")
}

/// Path of today's file in `log_dir`
///
/// The daily appender suffixes the base name with the UTC date.
pub fn current_log_file(log_dir: &Path) -> PathBuf {
    let date = chrono::Utc::now().format("%Y-%m-%d");
    log_dir.join(format!("{}.{}", LOG_FILE_NAME, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_ends_with_app_dir() {
        let dir = get_log_directory();
        assert!(dir.ends_with(Path::new(APP_DIR_NAME).join("logs")));
    }

    #[test]
    fn test_current_log_file_carries_utc_date() {
        let dir = Path::new("/tmp/vibe-logs");
        let file = current_log_file(dir);
        let expected = format!("vibe.log.{}", chrono::Utc::now().format("%Y-%m-%d"));

        assert_eq!(file.parent(), Some(dir));
        assert_eq!(file.file_name().and_then(|f| f.to_str()), Some(expected.as_str()));
    }
}
