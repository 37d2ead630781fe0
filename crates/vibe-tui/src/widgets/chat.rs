//! AI Assistant tab: transcript, proposed changes with review state, input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_app::assistant::AssistantState;
use vibe_core::{ChangeAction, ChatMessage, ChatRole, ProposedChange, ReviewStatus};

use super::{truncate, wrap_text};
use crate::theme::{icons, styles, Palette};

pub struct ChatView<'a> {
    assistant: &'a AssistantState,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> ChatView<'a> {
    pub fn new(assistant: &'a AssistantState, focused: bool, palette: &'a Palette) -> Self {
        Self {
            assistant,
            focused,
            palette,
        }
    }

    fn message_lines(&self, message: &ChatMessage, width: usize, out: &mut Vec<Line<'static>>) {
        let p = self.palette;
        let selected = self.assistant.selected == Some(message.id);
        let role_style = match message.role {
            ChatRole::User => styles::accent_bold(p),
            ChatRole::Assistant => styles::status_blue(p).add_modifier(Modifier::BOLD),
        };
        let mut header = vec![
            Span::styled(message.role.label().to_string(), role_style),
            Span::styled(
                format!("  {}", message.timestamp.format("%H:%M")),
                styles::text_muted(p),
            ),
        ];
        if selected && message.has_changes() {
            header.push(Span::styled("  ◆", styles::accent(p)));
        }
        out.push(Line::from(header));

        for row in wrap_text(&message.content, width.saturating_sub(2)) {
            out.push(Line::from(Span::styled(
                format!("  {}", row),
                styles::text_primary(p),
            )));
        }

        if message.has_changes() {
            out.push(Line::from(Span::styled(
                "  Proposed Changes:",
                styles::text_secondary(p),
            )));
            for change in &message.changes {
                out.push(self.change_line(change, width));
            }
            out.push(self.review_line(message.status, selected));
        }
        out.push(Line::default());
    }

    fn change_line(&self, change: &ProposedChange, width: usize) -> Line<'static> {
        let p = self.palette;
        let (sign, style) = match change.action {
            ChangeAction::Create => ("+", styles::status_green(p)),
            ChangeAction::Modify => ("~", styles::status_yellow(p)),
            ChangeAction::Delete => ("-", styles::status_red(p)),
        };
        let head = format!("    {} {} {} ", sign, change.action, change.path);
        let rest = width.saturating_sub(head.chars().count());
        Line::from(vec![
            Span::styled(head, style),
            Span::styled(truncate(&change.description, rest), styles::text_muted(p)),
        ])
    }

    fn review_line(&self, status: Option<ReviewStatus>, selected: bool) -> Line<'static> {
        let p = self.palette;
        match status {
            Some(ReviewStatus::Accepted) => Line::from(Span::styled(
                format!("    {} Changes Applied", icons::SUCCESS),
                styles::status_green(p),
            )),
            Some(ReviewStatus::Rejected) => Line::from(Span::styled(
                format!("    {} Changes Rejected", icons::FAILURE),
                styles::status_red(p),
            )),
            Some(ReviewStatus::Pending) if selected => Line::from(vec![
                Span::raw("    "),
                Span::styled("^Y", styles::keybinding(p)),
                Span::styled(" Accept  ", styles::status_green(p)),
                Span::styled("^N", styles::keybinding(p)),
                Span::styled(" Reject", styles::status_red(p)),
            ]),
            Some(ReviewStatus::Pending) => Line::from(Span::styled(
                "    Pending review (↑/↓ to select)",
                styles::text_muted(p),
            )),
            None => Line::default(),
        }
    }

    fn input_line(&self) -> Line<'static> {
        let p = self.palette;
        let input = &self.assistant.input;
        let mut spans = vec![Span::styled("> ", styles::accent(p))];
        if input.is_empty() && !self.assistant.is_awaiting() {
            spans.push(Span::styled(
                "Ask AI to help with your code...",
                styles::text_muted(p),
            ));
        } else {
            spans.push(Span::styled(input.clone(), styles::text_primary(p)));
        }
        if self.focused && !self.assistant.is_awaiting() {
            spans.push(Span::styled(
                " ",
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = self.palette;
        let width = area.width as usize;

        let mut lines: Vec<Line> = Vec::new();
        for message in &self.assistant.messages {
            self.message_lines(message, width, &mut lines);
        }
        if self.assistant.is_awaiting() {
            lines.push(Line::from(Span::styled(
                format!("{} AI is thinking...", icons::INFO),
                styles::text_secondary(p).add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(self.input_line());

        let skip = lines.len().saturating_sub(area.height as usize);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
        Paragraph::new(visible).render(area, buf);
    }
}
