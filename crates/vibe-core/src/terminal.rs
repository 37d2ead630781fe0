//! Terminal output line types

use chrono::{DateTime, Local};

/// How a terminal line is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of the submitted command (`$ cmd`)
    Command,
    Output,
    Error,
}

/// One entry in the append-only terminal log
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalLine {
    pub id: u64,
    pub kind: LineKind,
    /// May span multiple lines
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl TerminalLine {
    pub fn new(id: u64, kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}
