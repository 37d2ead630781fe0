//! Toast notification card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use vibe_app::notification::{Notification, Severity};

use super::truncate;
use crate::theme::{icons, styles, Palette};

pub struct Toast<'a> {
    notification: &'a Notification,
    palette: &'a Palette,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification, palette: &'a Palette) -> Self {
        Self {
            notification,
            palette,
        }
    }

    fn accent(&self) -> (Style, &'static str) {
        let p = self.palette;
        match self.notification.severity {
            Severity::Info => (styles::status_blue(p), icons::INFO),
            Severity::Success => (styles::status_green(p), icons::SUCCESS),
            Severity::Error => (styles::status_red(p), icons::FAILURE),
        }
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (style, icon) = self.accent();

        Clear.render(area, buf);
        let block = styles::glass_block(p, false).border_style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width.saturating_sub(2) as usize;
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", icon), style),
                Span::styled(truncate(&self.notification.title, width), styles::title(p)),
            ]),
            Line::from(Span::styled(
                format!("  {}", truncate(&self.notification.body, width)),
                styles::text_secondary(p),
            )),
        ])
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_toast_renders_title_and_body() {
        let n = Notification::error("Password Mismatch", "Passwords do not match.");
        let mut term = TestTerminal::with_size(44, 4);
        let area = term.area();
        term.render_widget(Toast::new(&n, &DARK), area);

        assert!(term.buffer_contains("Password Mismatch"));
        assert!(term.buffer_contains("Passwords do not match."));
    }
}
