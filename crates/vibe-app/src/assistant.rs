//! Scripted assistant: keyword dispatch and transcript state
//!
//! [`respond`] is pure. The reply latency is applied by the event loop via
//! [`crate::handler::UpdateAction::ScheduleAssistantReply`], so nothing in
//! this module waits.

use chrono::Local;
use vibe_core::prelude::*;
use vibe_core::{ChangeAction, ChatMessage, ChatRole, MessageId, ProposedChange, ReviewStatus};

pub const GREETING: &str = "Hello! I'm your AI coding assistant. I can help you write code, \
debug issues, create files, and modify your codebase. What would you like me to help you with?";

const NEW_COMPONENT_SOURCE: &str = r#"import React from 'react';

interface NewComponentProps {
  title?: string;
}

export const NewComponent: React.FC<NewComponentProps> = ({ title = 'Hello World' }) => {
  return (
    <div className="p-4">
      <h2 className="text-xl font-semibold">{title}</h2>
      <p>This is a new component created by AI!</p>
    </div>
  );
};

export default NewComponent;"#;

/// Canned reply picked by [`respond`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub content: String,
    pub changes: Vec<ProposedChange>,
}

impl AssistantReply {
    /// Replies proposing changes start out pending review
    pub fn initial_status(&self) -> Option<ReviewStatus> {
        (!self.changes.is_empty()).then_some(ReviewStatus::Pending)
    }
}

/// Pick a reply by ordered substring match over the lowercased input
pub fn respond(input: &str) -> AssistantReply {
    let query = input.to_lowercase();
    let has = |word: &str| query.contains(word);

    if has("create") && (has("component") || has("file")) {
        AssistantReply {
            content: "I'll help you create a new component. Based on your request, \
                      I'm suggesting the following changes:"
                .to_string(),
            changes: vec![ProposedChange {
                path: "src/components/NewComponent.tsx".to_string(),
                action: ChangeAction::Create,
                description: "Create a new React functional component with TypeScript".to_string(),
                code: Some(NEW_COMPONENT_SOURCE.to_string()),
            }],
        }
    } else if has("fix") || has("error") || has("bug") {
        AssistantReply {
            content: "I'll help you fix the issues in your code. Here are the suggested changes:"
                .to_string(),
            changes: vec![ProposedChange {
                path: "src/App.tsx".to_string(),
                action: ChangeAction::Modify,
                description: "Fix TypeScript errors and improve component structure".to_string(),
                code: Some(
                    "// Fixed version with proper TypeScript types and error handling".to_string(),
                ),
            }],
        }
    } else if has("style") || has("css") || has("design") {
        AssistantReply {
            content: "I'll help you improve the styling. Let me suggest some CSS improvements:"
                .to_string(),
            changes: vec![ProposedChange {
                path: "src/index.css".to_string(),
                action: ChangeAction::Modify,
                description: "Add modern styling with improved colors and typography".to_string(),
                code: None,
            }],
        }
    } else {
        AssistantReply {
            content: help_menu(input),
            changes: Vec::new(),
        }
    }
}

fn help_menu(query: &str) -> String {
    format!(
        "I understand you want help with: \"{query}\". I can assist you with:

• Creating new components and files
• Fixing bugs and errors in your code
• Improving code structure and performance
• Adding styling and UI improvements
• Setting up new features
• Code refactoring and optimization

Please be more specific about what you'd like me to help you with, and I'll provide detailed code suggestions!"
    )
}

/// Whether a reply is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistantStatus {
    #[default]
    Idle,
    /// Input is locked until `request_id` is delivered
    Awaiting { request_id: u64 },
}

/// A submitted prompt waiting for its reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPrompt {
    pub request_id: u64,
    pub prompt: String,
}

#[derive(Debug, Clone)]
pub struct AssistantState {
    pub messages: Vec<ChatMessage>,
    pub status: AssistantStatus,
    pub input: String,
    /// Message targeted by accept/reject keys
    pub selected: Option<MessageId>,
    next_id: u64,
    next_request: u64,
}

impl AssistantState {
    pub fn new() -> Self {
        let mut state = Self {
            messages: Vec::new(),
            status: AssistantStatus::Idle,
            input: String::new(),
            selected: None,
            next_id: 1,
            next_request: 1,
        };
        state.push(ChatRole::Assistant, GREETING.to_string(), Vec::new(), None);
        state
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.status, AssistantStatus::Awaiting { .. })
    }

    /// Send the current input
    ///
    /// Returns `None` (and changes nothing) when the input is blank or a
    /// reply is already awaited.
    pub fn submit(&mut self) -> Option<PendingPrompt> {
        if self.input.trim().is_empty() || self.is_awaiting() {
            return None;
        }
        let prompt = std::mem::take(&mut self.input);
        self.push(ChatRole::User, prompt.clone(), Vec::new(), None);

        let request_id = self.next_request;
        self.next_request += 1;
        self.status = AssistantStatus::Awaiting { request_id };
        debug!("Assistant request {} submitted", request_id);
        Some(PendingPrompt { request_id, prompt })
    }

    /// Append a reply if it answers the awaited request
    ///
    /// Returns whether the reply was accepted.
    pub fn deliver(&mut self, request_id: u64, reply: AssistantReply) -> bool {
        if self.status != (AssistantStatus::Awaiting { request_id }) {
            debug!("Dropping stale assistant reply {}", request_id);
            return false;
        }
        let status = reply.initial_status();
        let id = self.push(ChatRole::Assistant, reply.content, reply.changes, status);
        if status.is_some() {
            self.selected = Some(id);
        }
        self.status = AssistantStatus::Idle;
        true
    }

    /// Accept a pending suggestion, returning the changes that would apply
    pub fn accept(&mut self, id: MessageId) -> Option<Vec<ProposedChange>> {
        let message = self.pending_mut(id)?;
        message.status = Some(ReviewStatus::Accepted);
        for change in &message.changes {
            info!("Applied {} to {}", change.action, change.path);
        }
        Some(message.changes.clone())
    }

    /// Reject a pending suggestion; returns whether anything changed
    pub fn reject(&mut self, id: MessageId) -> bool {
        match self.pending_mut(id) {
            Some(message) => {
                message.status = Some(ReviewStatus::Rejected);
                true
            }
            None => false,
        }
    }

    fn pending_mut(&mut self, id: MessageId) -> Option<&mut ChatMessage> {
        self.messages
            .iter_mut()
            .find(|m| m.id == id)
            .filter(|m| m.is_pending())
    }

    pub fn select_prev_pending(&mut self) {
        let ids = self.reviewable_ids();
        self.selected = match self.selected.and_then(|s| ids.iter().position(|id| *id == s)) {
            Some(pos) => Some(ids[pos.saturating_sub(1)]),
            None => ids.last().copied(),
        };
    }

    pub fn select_next_pending(&mut self) {
        let ids = self.reviewable_ids();
        self.selected = match self.selected.and_then(|s| ids.iter().position(|id| *id == s)) {
            Some(pos) => ids.get(pos + 1).or(ids.last()).copied(),
            None => ids.last().copied(),
        };
    }

    /// Messages that carry changes, in transcript order
    fn reviewable_ids(&self) -> Vec<MessageId> {
        self.messages
            .iter()
            .filter(|m| m.has_changes())
            .map(|m| m.id)
            .collect()
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.is_awaiting() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_awaiting() {
            self.input.pop();
        }
    }

    fn push(
        &mut self,
        role: ChatRole,
        content: String,
        changes: Vec<ProposedChange>,
        status: Option<ReviewStatus>,
    ) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            timestamp: Local::now(),
            changes,
            status,
        });
        id
    }
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: &mut AssistantState, text: &str) -> PendingPrompt {
        state.input = text.to_string();
        state.submit().unwrap()
    }

    #[test]
    fn test_respond_create_component() {
        let reply = respond("create a new component");
        assert_eq!(reply.changes.len(), 1);
        assert_eq!(reply.changes[0].action, ChangeAction::Create);
        assert!(reply.changes[0].code.is_some());
    }

    #[test]
    fn test_respond_fix_bug() {
        let reply = respond("please fix this bug");
        assert_eq!(reply.changes.len(), 1);
        assert_eq!(reply.changes[0].action, ChangeAction::Modify);
        assert_eq!(reply.changes[0].path, "src/App.tsx");
    }

    #[test]
    fn test_respond_style_has_no_code() {
        let reply = respond("Make the CSS nicer");
        assert_eq!(reply.changes[0].path, "src/index.css");
        assert_eq!(reply.changes[0].code, None);
    }

    #[test]
    fn test_respond_generic_echoes_input() {
        let reply = respond("hello");
        assert!(reply.changes.is_empty());
        assert!(reply
            .content
            .starts_with("I understand you want help with: \"hello\"."));
        assert_eq!(reply.initial_status(), None);
    }

    #[test]
    fn test_respond_order_create_before_fix() {
        // "create" + "file" wins over "error"
        let reply = respond("create a file for error handling");
        assert_eq!(reply.changes[0].action, ChangeAction::Create);
        // "create" alone is not enough
        let reply = respond("create a bug");
        assert_eq!(reply.changes[0].action, ChangeAction::Modify);
    }

    #[test]
    fn test_starts_with_greeting() {
        let state = AssistantState::new();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, ChatRole::Assistant);
        assert_eq!(state.messages[0].content, GREETING);
    }

    #[test]
    fn test_submit_locks_until_delivered() {
        let mut state = AssistantState::new();
        let pending = submit(&mut state, "hello");
        assert!(state.is_awaiting());
        assert!(state.input.is_empty());

        state.input = "again".into();
        assert_eq!(state.submit(), None);
        state.insert_char('x');
        assert_eq!(state.input, "again");

        assert!(state.deliver(pending.request_id, respond(&pending.prompt)));
        assert!(!state.is_awaiting());
        assert_eq!(state.messages.len(), 3);
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut state = AssistantState::new();
        state.input = "   ".into();
        assert_eq!(state.submit(), None);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_stale_reply_dropped() {
        let mut state = AssistantState::new();
        let pending = submit(&mut state, "hello");
        assert!(!state.deliver(pending.request_id + 1, respond("x")));
        assert!(state.is_awaiting());
    }

    #[test]
    fn test_message_ids_monotonic() {
        let mut state = AssistantState::new();
        let p = submit(&mut state, "fix it");
        state.deliver(p.request_id, respond(&p.prompt));
        let ids: Vec<MessageId> = state.messages.iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_accept_and_reject_only_pending() {
        let mut state = AssistantState::new();
        let p = submit(&mut state, "fix the error");
        state.deliver(p.request_id, respond(&p.prompt));
        let id = state.selected.unwrap();

        let applied = state.accept(id).unwrap();
        assert_eq!(applied.len(), 1);
        assert_eq!(
            state.messages.last().unwrap().status,
            Some(ReviewStatus::Accepted)
        );
        assert!(!state.reject(id));
        assert!(state.accept(id).is_none());

        let greeting = state.messages[0].id;
        assert!(state.accept(greeting).is_none());
    }

    #[test]
    fn test_select_pending_navigation() {
        let mut state = AssistantState::new();
        for prompt in ["fix a", "hello", "style b"] {
            let p = submit(&mut state, prompt);
            state.deliver(p.request_id, respond(&p.prompt));
        }
        let reviewable: Vec<MessageId> = state
            .messages
            .iter()
            .filter(|m| m.has_changes())
            .map(|m| m.id)
            .collect();
        assert_eq!(state.selected, Some(reviewable[1]));

        state.select_prev_pending();
        assert_eq!(state.selected, Some(reviewable[0]));
        state.select_prev_pending();
        assert_eq!(state.selected, Some(reviewable[0]));
        state.select_next_pending();
        state.select_next_pending();
        assert_eq!(state.selected, Some(reviewable[1]));
    }
}
