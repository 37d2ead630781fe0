//! Terminal tab: scrollback of echoed commands and a prompt line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_app::terminal::TerminalState;
use vibe_core::LineKind;

use super::wrap_text;
use crate::theme::{icons, styles, Palette};

pub struct TerminalView<'a> {
    terminal: &'a TerminalState,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> TerminalView<'a> {
    pub fn new(terminal: &'a TerminalState, focused: bool, palette: &'a Palette) -> Self {
        Self {
            terminal,
            focused,
            palette,
        }
    }

    fn line_style(&self, kind: LineKind) -> Style {
        let p = self.palette;
        match kind {
            LineKind::Command => styles::accent(p),
            LineKind::Output => styles::text_primary(p),
            LineKind::Error => styles::status_red(p),
        }
    }

    fn prompt(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![
            Span::styled(format!("{} ", icons::PROMPT), styles::status_green(p)),
            Span::styled(self.terminal.input.clone(), styles::text_primary(p)),
        ];
        if self.focused {
            spans.push(Span::styled(
                " ",
                styles::text_primary(p).add_modifier(Modifier::REVERSED),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;
        let mut lines: Vec<Line> = Vec::new();
        for entry in &self.terminal.lines {
            let style = self.line_style(entry.kind);
            for row in wrap_text(&entry.text, width) {
                lines.push(Line::from(Span::styled(row, style)));
            }
        }
        lines.push(self.prompt());

        // Bottom-anchored: the prompt stays on the last row
        let skip = lines.len().saturating_sub(area.height as usize);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
        Paragraph::new(visible).render(area, buf);
    }
}
