//! Projects view: quick-action cards and the recent-projects list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_app::projects::{ProjectsState, QUICK_ACTIONS};
use vibe_core::{Project, ProjectStatus};

use super::truncate;
use crate::theme::{styles, Palette};

pub struct ProjectsView<'a> {
    projects: &'a ProjectsState,
    user_name: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> ProjectsView<'a> {
    pub fn new(projects: &'a ProjectsState, palette: &'a Palette) -> Self {
        Self {
            projects,
            user_name: None,
            palette,
        }
    }

    pub fn user_name(mut self, name: Option<&'a str>) -> Self {
        self.user_name = name;
        self
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for ((title, description), card) in QUICK_ACTIONS.iter().zip(cards.iter()) {
            let block = styles::glass_block(p, false);
            let inner = block.inner(*card);
            block.render(*card, buf);
            let width = inner.width as usize;
            Paragraph::new(vec![
                Line::from(Span::styled(truncate(title, width), styles::title(p))),
                Line::from(Span::styled(
                    truncate(description, width),
                    styles::text_muted(p),
                )),
            ])
            .render(inner, buf);
        }
    }

    fn project_line(&self, project: &Project, selected: bool, width: usize) -> Line<'static> {
        let p = self.palette;
        let status_style = match project.status {
            ProjectStatus::Active => styles::status_green(p),
            ProjectStatus::Idle => styles::text_muted(p),
        };
        let name_style = if selected {
            styles::focused_selected(p)
        } else {
            styles::text_primary(p)
        };
        let pointer = if selected { "› " } else { "  " };
        let name_width = width.saturating_sub(40).max(12);

        Line::from(vec![
            Span::styled(pointer, styles::accent(p)),
            Span::styled(
                format!("{:<w$}", truncate(&project.name, name_width), w = name_width),
                name_style,
            ),
            Span::styled(format!("  {:<12}", project.kind), styles::text_secondary(p)),
            Span::styled(format!(" {:<14}", project.last_modified), styles::text_muted(p)),
            Span::styled(format!(" ● {}", project.status.label()), status_style),
        ])
    }
}

impl Widget for ProjectsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [title, actions, list] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .areas(area);

        let greeting = match self.user_name {
            Some(name) => format!(" Welcome back, {}!", name),
            None => " Welcome back!".to_string(),
        };
        Paragraph::new(vec![
            Line::from(Span::styled(greeting, styles::title(p))),
            Line::from(Span::styled(
                " Continue working on your projects or start something new",
                styles::text_muted(p),
            )),
        ])
        .render(title, buf);

        self.render_actions(actions, buf);

        let block = styles::glass_block(p, true).title(" Recent Projects ");
        let inner = block.inner(list);
        block.render(list, buf);

        let width = inner.width as usize;
        let mut lines: Vec<Line> = self
            .projects
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| self.project_line(project, i == self.projects.selected, width))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" ↑/↓", styles::keybinding(p)),
            Span::styled(" select  ", styles::text_muted(p)),
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled(" open", styles::text_muted(p)),
        ]));
        Paragraph::new(lines).render(inner, buf);
    }
}
