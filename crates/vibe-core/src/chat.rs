//! Assistant transcript types

use chrono::{DateTime, Local};

/// Monotonic chat message identifier (creation order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn label(self) -> &'static str {
        match self {
            ChatRole::User => "You",
            ChatRole::Assistant => "AI Assistant",
        }
    }
}

/// Kind of edit a proposed change would make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Create,
    Modify,
    Delete,
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeAction::Create => write!(f, "create"),
            ChangeAction::Modify => write!(f, "modify"),
            ChangeAction::Delete => write!(f, "delete"),
        }
    }
}

/// A file change suggested by the assistant. Accepting it only logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedChange {
    pub path: String,
    pub action: ChangeAction,
    pub description: String,
    pub code: Option<String>,
}

/// Review state of a message carrying proposed changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A single entry in the assistant transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
    pub changes: Vec<ProposedChange>,
    pub status: Option<ReviewStatus>,
}

impl ChatMessage {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.status == Some(ReviewStatus::Pending)
    }
}
