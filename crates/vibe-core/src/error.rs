//! Error type shared by every Vibe Workbench crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Infrastructure
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Terminal setup, signal installation
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The session store could not be read or written
    #[error("Storage error: {message}")]
    Storage { message: String },

    // ─────────────────────────────────────────────────────────────
    // User-facing
    // ─────────────────────────────────────────────────────────────
    /// A form was rejected; shown to the user as a toast
    #[error("{title}: {detail}")]
    Validation { title: String, detail: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn validation(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation {
            title: title.into(),
            detail: detail.into(),
        }
    }

    /// Whether the user caused this and can fix it by editing input
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

/// Log-and-convert helper for fallible calls
pub trait ResultExt<T> {
    /// Convert the error, logging it with `context` at error level
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::storage("disk full").to_string(),
            "Storage error: disk full"
        );
        assert_eq!(
            Error::validation("Password Mismatch", "Passwords do not match.").to_string(),
            "Password Mismatch: Passwords do not match."
        );
    }

    #[test]
    fn test_from_io_and_json() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(Error::from(io), Error::Io(_)));

        let json = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(Error::from(json), Error::Json(_)));
    }

    #[test]
    fn test_user_errors() {
        assert!(Error::validation("Missing Information", "x").is_user_error());
        assert!(!Error::storage("x").is_user_error());
        assert!(!Error::config("bad toml").is_user_error());
    }

    #[test]
    fn test_context_keeps_the_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("writing storage").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
