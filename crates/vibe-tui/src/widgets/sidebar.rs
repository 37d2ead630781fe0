//! Navigation sidebar: one entry per view, collapsible to initials

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_core::View;

use crate::theme::{styles, Palette};

pub struct Sidebar<'a> {
    active: View,
    collapsed: bool,
    palette: &'a Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: View, collapsed: bool, palette: &'a Palette) -> Self {
        Self {
            active,
            collapsed,
            palette,
        }
    }

    fn entry(&self, index: usize, view: View) -> Line<'static> {
        let p = self.palette;
        let style = if view == self.active {
            styles::focused_selected(p)
        } else {
            styles::text_secondary(p)
        };

        if self.collapsed {
            let initial = view.label().chars().next().unwrap_or(' ');
            return Line::from(Span::styled(format!(" {} ", initial), style));
        }

        Line::from(vec![
            Span::styled(format!("F{} ", index + 1), styles::keybinding(p)),
            Span::styled(format!(" {:<10}", view.label()), style),
        ])
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        if !self.collapsed {
            lines.push(Line::from(Span::styled("VibeCode", styles::accent_bold(p))));
            lines.push(Line::default());
        }
        for (i, view) in View::ALL.iter().enumerate() {
            lines.push(self.entry(i, *view));
        }

        Paragraph::new(lines).render(inner, buf);

        // Footer: what the active entry is, and how to fold the bar
        if !self.collapsed && inner.height >= 8 {
            let footer = Rect {
                y: inner.y + inner.height - 2,
                height: 2,
                ..inner
            };
            Paragraph::new(vec![
                Line::from(Span::styled(self.active.tooltip(), styles::text_muted(p))),
                Line::from(vec![
                    Span::styled("^B ", styles::keybinding(p)),
                    Span::styled("collapse", styles::text_muted(p)),
                ]),
            ])
            .render(footer, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_expanded_sidebar_lists_views() {
        let mut term = TestTerminal::with_size(18, 12);
        let area = term.area();
        term.render_widget(Sidebar::new(View::Projects, false, &DARK), area);

        assert!(term.buffer_contains("Projects"));
        assert!(term.buffer_contains("Explorer"));
        assert!(term.buffer_contains("Settings"));
        assert!(term.buffer_contains("Your Projects"));
    }

    #[test]
    fn test_collapsed_sidebar_shows_initials_only() {
        let mut term = TestTerminal::with_size(5, 12);
        let area = term.area();
        term.render_widget(Sidebar::new(View::Workspace, true, &DARK), area);

        assert!(term.buffer_contains("E"));
        assert!(!term.buffer_contains("Explorer"));
    }
}
