//! Bottom panel chrome: the Terminal / AI Assistant tab header and the
//! hint row shown while the panel is hidden

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_core::BottomTab;

use crate::theme::{styles, Palette};

pub struct BottomTabs<'a> {
    active: BottomTab,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> BottomTabs<'a> {
    pub fn new(active: BottomTab, focused: bool, palette: &'a Palette) -> Self {
        Self {
            active,
            focused,
            palette,
        }
    }
}

impl Widget for BottomTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let tab = |tab: BottomTab, key: &'static str| {
            let style = if tab == self.active && self.focused {
                styles::focused_selected(p)
            } else if tab == self.active {
                styles::accent_bold(p)
            } else {
                styles::text_secondary(p)
            };
            vec![
                Span::styled(format!(" {} ", tab.label()), style),
                Span::styled(key, styles::text_muted(p)),
                Span::raw("  "),
            ]
        };

        let mut spans = tab(BottomTab::Terminal, "M-t");
        spans.extend(tab(BottomTab::Assistant, "M-a"));
        Paragraph::new(Line::from(spans)).render(area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("^J", styles::keybinding(p)),
            Span::styled(" hide ", styles::text_muted(p)),
        ]))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}

/// One-row hint that brings the hidden panel back
pub struct ShowPanelHint<'a> {
    palette: &'a Palette,
}

impl<'a> ShowPanelHint<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for ShowPanelHint<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Paragraph::new(Line::from(vec![
            Span::styled("^J", styles::keybinding(p)),
            Span::styled(" Show Panel ", styles::text_secondary(p)),
        ]))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}
