//! Header bar: workspace badge, theme toggle, signed-in user, sign-out key

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_core::{Theme, User, View};

use crate::theme::{styles, Palette};

pub struct Header<'a> {
    view: View,
    theme: Theme,
    project: Option<&'a str>,
    user: Option<&'a User>,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(view: View, theme: Theme, palette: &'a Palette) -> Self {
        Self {
            view,
            theme,
            project: None,
            user: None,
            palette,
        }
    }

    pub fn project(mut self, project: Option<&'a str>) -> Self {
        self.project = project;
        self
    }

    pub fn user(mut self, user: Option<&'a User>) -> Self {
        self.user = user;
        self
    }

    fn left(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![Span::styled(
            format!(" {} ", self.view.tooltip()),
            styles::title(p),
        )];
        if let Some(project) = self.project {
            spans.push(Span::styled(
                format!("[{}]", project),
                styles::focused_selected(p),
            ));
        }
        Line::from(spans)
    }

    fn right(&self) -> Line<'static> {
        let p = self.palette;
        let theme_icon = if self.theme.is_dark() { "☾" } else { "☀" };
        let mut spans = vec![
            Span::styled(format!("{} {} ", theme_icon, self.theme), styles::accent(p)),
            Span::styled("^T", styles::keybinding(p)),
            Span::raw("  "),
        ];
        if let Some(user) = self.user {
            spans.push(Span::styled(
                format!("[{}] ", user.initials()),
                styles::accent_bold(p),
            ));
            spans.push(Span::styled(user.name.clone(), styles::text_primary(p)));
            spans.push(Span::styled(
                format!(" <{}>", user.email),
                styles::text_muted(p),
            ));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("F10", styles::keybinding(p)));
        spans.push(Span::styled(" Sign out ", styles::text_secondary(p)));
        Line::from(spans)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect { height: 1, ..inner };
        // Right side first so a narrow header keeps the title readable
        Paragraph::new(self.right())
            .alignment(Alignment::Right)
            .render(row, buf);
        let left = self.left();
        let left_width = (left.width() as u16).min(row.width);
        Paragraph::new(left).render(Rect { width: left_width, ..row }, buf);
    }
}
