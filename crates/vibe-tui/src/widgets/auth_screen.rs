//! Sign-in / sign-up card shown while no one is authenticated

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use vibe_app::auth::{AuthField, AuthFormState, AuthTab};

use crate::layout::centered_rect;
use crate::theme::{styles, Palette};

const CARD_WIDTH: u16 = 52;

pub struct AuthScreen<'a> {
    form: &'a AuthFormState,
    palette: &'a Palette,
}

impl<'a> AuthScreen<'a> {
    pub fn new(form: &'a AuthFormState, palette: &'a Palette) -> Self {
        Self { form, palette }
    }

    fn tab_line(&self) -> Line<'static> {
        let p = self.palette;
        let tab = |label: &'static str, active: bool| {
            if active {
                Span::styled(format!(" {} ", label), styles::focused_selected(p))
            } else {
                Span::styled(format!(" {} ", label), styles::text_secondary(p))
            }
        };
        Line::from(vec![
            tab("Login", self.form.tab == AuthTab::Login),
            Span::raw("  "),
            tab("Sign Up", self.form.tab == AuthTab::Signup),
        ])
    }

    fn field_lines(&self, field: AuthField, focused: bool) -> [Line<'static>; 2] {
        let p = self.palette;
        let raw = self.form.value(field);
        let shown = if field.is_secret() && !self.form.show_password {
            "•".repeat(raw.chars().count())
        } else {
            raw.to_string()
        };

        let label_style = if focused {
            styles::accent_bold(p)
        } else {
            styles::text_secondary(p)
        };
        let marker = if focused { "▌" } else { " " };
        let mut value = vec![
            Span::styled(marker, styles::accent(p)),
            Span::styled(shown, styles::text_primary(p)),
        ];
        if focused {
            value.push(Span::styled(
                " ",
                styles::text_primary(p).add_modifier(Modifier::REVERSED),
            ));
        }

        [
            Line::from(Span::styled(field.label(), label_style)),
            Line::from(value),
        ]
    }
}

impl Widget for AuthScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let fields = self.form.fields();
        let focused = self.form.focused_field();

        let mut lines = vec![
            Line::from(Span::styled("VibeCode IDE", styles::accent_bold(p))),
            Line::from(Span::styled(
                "Code with AI, ship with vibes",
                styles::text_muted(p),
            )),
            Line::default(),
            self.tab_line(),
            Line::default(),
        ];
        for field in fields {
            lines.extend(self.field_lines(*field, *field == focused));
        }
        lines.push(Line::default());

        let submit = match self.form.tab {
            AuthTab::Login => "Sign In",
            AuthTab::Signup => "Create Account",
        };
        lines.push(Line::from(vec![
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled(format!(" {}  ", submit), styles::text_secondary(p)),
            Span::styled("←/→", styles::keybinding(p)),
            Span::styled(" switch  ", styles::text_secondary(p)),
            Span::styled("^P", styles::keybinding(p)),
            Span::styled(
                if self.form.show_password {
                    " hide"
                } else {
                    " show"
                },
                styles::text_secondary(p),
            ),
        ]));

        let height = lines.len() as u16 + 2;
        let card = centered_rect(CARD_WIDTH, height, area);
        Clear.render(card, buf);
        let block = styles::glass_block(p, true);
        let inner = block.inner(card);
        block.render(card, buf);

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_login_tab_masks_password() {
        let form = AuthFormState {
            login_email: "a@b.com".into(),
            login_password: "secret".into(),
            ..Default::default()
        };
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(AuthScreen::new(&form, &DARK), area);

        assert!(term.buffer_contains("VibeCode IDE"));
        assert!(term.buffer_contains("Email Address"));
        assert!(term.buffer_contains("a@b.com"));
        assert!(term.buffer_contains("••••••"));
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_show_password_reveals_value() {
        let form = AuthFormState {
            login_password: "secret".into(),
            show_password: true,
            ..Default::default()
        };
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(AuthScreen::new(&form, &DARK), area);

        assert!(term.buffer_contains("secret"));
    }

    #[test]
    fn test_signup_tab_lists_all_fields() {
        let form = AuthFormState {
            tab: AuthTab::Signup,
            ..Default::default()
        };
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(AuthScreen::new(&form, &DARK), area);

        assert!(term.buffer_contains("Full Name"));
        assert!(term.buffer_contains("Confirm Password"));
        assert!(term.buffer_contains("Create Account"));
    }
}
