//! Settings view: General, AI Configuration, Editor and Account tabs

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_app::config::Settings;
use vibe_app::settings_panel::{mask_secret, GeneralItem, SettingsPanelState, SettingsTab, SUPPORTED_MODELS};
use vibe_core::{Theme, User};

use crate::theme::{styles, Palette};

pub struct SettingsView<'a> {
    panel: &'a SettingsPanelState,
    settings: &'a Settings,
    theme: Theme,
    user: Option<&'a User>,
    palette: &'a Palette,
}

impl<'a> SettingsView<'a> {
    pub fn new(
        panel: &'a SettingsPanelState,
        settings: &'a Settings,
        theme: Theme,
        palette: &'a Palette,
    ) -> Self {
        Self {
            panel,
            settings,
            theme,
            user: None,
            palette,
        }
    }

    pub fn user(mut self, user: Option<&'a User>) -> Self {
        self.user = user;
        self
    }

    fn tab_bar(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for tab in SettingsTab::ALL {
            let style = if tab == self.panel.tab {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", tab.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn toggle(&self, on: bool) -> Span<'static> {
        let p = self.palette;
        if on {
            Span::styled("[ on  ]", styles::status_green(p))
        } else {
            Span::styled("[ off ]", styles::text_muted(p))
        }
    }

    fn general(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();
        for (i, item) in GeneralItem::ALL.iter().enumerate() {
            let on = match item {
                GeneralItem::DarkMode => self.theme.is_dark(),
                GeneralItem::AutoSave => self.settings.editor.auto_save,
            };
            let label_style = if i == self.panel.selected {
                styles::focused_selected(p)
            } else {
                styles::text_primary(p)
            };
            lines.push(Line::from(vec![
                self.toggle(on),
                Span::raw(" "),
                Span::styled(format!(" {} ", item.label()), label_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("         {}", item.description()),
                styles::text_muted(p),
            )));
            lines.push(Line::default());
        }
        lines.push(hint(p, &[("↑/↓", "select"), ("Enter", "toggle")]));
        lines
    }

    fn ai(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = vec![Line::from(Span::styled("OpenAI API Key", styles::title(p)))];

        if self.panel.editing_api_key {
            lines.push(Line::from(vec![
                Span::styled("> ", styles::accent(p)),
                Span::styled(mask_secret(&self.panel.api_key_input), styles::text_primary(p)),
                Span::styled(
                    " ",
                    styles::text_primary(p).add_modifier(Modifier::REVERSED),
                ),
            ]));
            lines.push(hint(p, &[("Enter", "save"), ("Esc", "cancel")]));
        } else {
            let current = self
                .user
                .and_then(|u| u.api_key.as_deref())
                .filter(|k| !k.is_empty());
            lines.push(match current {
                Some(key) => Line::from(Span::styled(
                    format!("  {}", mask_secret(key)),
                    styles::text_primary(p),
                )),
                None => Line::from(Span::styled("  Not set", styles::text_muted(p))),
            });
            lines.push(hint(p, &[("Enter", "edit key")]));
        }
        lines.push(Line::from(Span::styled(
            "Your API key is stored locally and never shared.",
            styles::text_muted(p),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Supported Models", styles::title(p))));
        for model in SUPPORTED_MODELS {
            lines.push(Line::from(Span::styled(
                format!("  • {}", model),
                styles::text_secondary(p),
            )));
        }
        lines
    }

    fn editor(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let editor = &self.settings.editor;
        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<12}", label), styles::text_secondary(p)),
                Span::styled(value, styles::text_primary(p)),
            ])
        };
        vec![
            row("Tab Size", format!("{} spaces", editor.tab_size)),
            row("Font Size", format!("{}px", editor.font_size)),
            row(
                "Word Wrap",
                if editor.word_wrap { "on" } else { "off" }.to_string(),
            ),
            Line::default(),
            Line::from(Span::styled(
                "Edit config.toml to change these values.",
                styles::text_muted(p),
            )),
        ]
    }

    fn account(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        match self.user {
            Some(user) => vec![
                Line::from(vec![
                    Span::styled(format!("{:<8}", "Name"), styles::text_secondary(p)),
                    Span::styled(user.name.clone(), styles::text_primary(p)),
                ]),
                Line::from(vec![
                    Span::styled(format!("{:<8}", "Email"), styles::text_secondary(p)),
                    Span::styled(user.email.clone(), styles::text_primary(p)),
                ]),
                Line::default(),
                hint(p, &[("F10", "sign out")]),
            ],
            None => vec![Line::from(Span::styled(
                "Not signed in",
                styles::text_muted(p),
            ))],
        }
    }
}

fn hint(p: &Palette, pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, action) in pairs {
        spans.push(Span::styled(key.to_string(), styles::keybinding(p)));
        spans.push(Span::styled(format!(" {}  ", action), styles::text_muted(p)));
    }
    Line::from(spans)
}

impl Widget for SettingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, true).title(" Settings ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let [tabs, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(self.tab_bar()).render(tabs, buf);
        let lines = match self.panel.tab {
            SettingsTab::General => self.general(),
            SettingsTab::Ai => self.ai(),
            SettingsTab::Editor => self.editor(),
            SettingsTab::Account => self.account(),
        };
        Paragraph::new(lines).render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    fn user() -> User {
        User {
            id: "1".into(),
            email: "ada@example.com".into(),
            name: "Ada".into(),
            api_key: Some("sk-secret".into()),
        }
    }

    fn render(panel: &SettingsPanelState, user: Option<&User>) -> TestTerminal {
        let settings = Settings::default();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(
            SettingsView::new(panel, &settings, Theme::Dark, &DARK).user(user),
            area,
        );
        term
    }

    #[test]
    fn test_general_tab_shows_toggles() {
        let term = render(&SettingsPanelState::default(), None);

        assert!(term.buffer_contains("AI Configuration"));
        assert!(term.buffer_contains("Dark Mode"));
        assert!(term.buffer_contains("Auto Save"));
        assert!(term.buffer_contains("[ on  ]"));
        assert!(term.buffer_contains("[ off ]"));
    }

    #[test]
    fn test_ai_tab_masks_saved_key() {
        let panel = SettingsPanelState {
            tab: SettingsTab::Ai,
            ..Default::default()
        };
        let u = user();
        let term = render(&panel, Some(&u));

        assert!(term.buffer_contains("sk-••••••"));
        assert!(!term.buffer_contains("sk-secret"));
        assert!(term.buffer_contains("GPT-4 (Recommended)"));
    }

    #[test]
    fn test_editor_tab_shows_values() {
        let panel = SettingsPanelState {
            tab: SettingsTab::Editor,
            ..Default::default()
        };
        let term = render(&panel, None);

        assert!(term.buffer_contains("2 spaces"));
        assert!(term.buffer_contains("14px"));
    }

    #[test]
    fn test_account_tab_shows_user() {
        let panel = SettingsPanelState {
            tab: SettingsTab::Account,
            ..Default::default()
        };
        let u = user();
        let term = render(&panel, Some(&u));

        assert!(term.buffer_contains("ada@example.com"));
    }
}
