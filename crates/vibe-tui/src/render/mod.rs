//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use vibe_app::{AppState, Pane, WorkspaceState};
use vibe_core::{BottomTab, View};

use crate::layout;
use crate::theme::{palette, styles, Palette};
use crate::widgets;

/// Render the complete UI for the current state
///
/// This is a pure rendering function; it never mutates `state`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let p = palette::for_theme(state.theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(p.base_bg).fg(p.text_primary)),
        area,
    );

    if !state.is_authenticated() {
        frame.render_widget(widgets::AuthScreen::new(&state.auth_form, p), area);
        render_toasts(frame, state, p);
        return;
    }

    let areas = layout::create(area, state.sidebar_collapsed);
    let user = state.auth.user();

    frame.render_widget(
        widgets::Sidebar::new(state.view, state.sidebar_collapsed, p),
        areas.sidebar,
    );

    let project = match state.view {
        View::Workspace => state.workspace.as_ref().map(|ws| ws.explorer.project_name()),
        _ => None,
    };
    frame.render_widget(
        widgets::Header::new(state.view, state.theme, p)
            .project(project)
            .user(user),
        areas.header,
    );

    match state.view {
        View::Projects => frame.render_widget(
            widgets::ProjectsView::new(&state.projects, p).user_name(user.map(|u| u.name.as_str())),
            areas.main,
        ),
        View::Settings => frame.render_widget(
            widgets::SettingsView::new(&state.settings_panel, &state.settings, state.theme, p)
                .user(user),
            areas.main,
        ),
        View::Workspace => {
            if let Some(ws) = &state.workspace {
                render_workspace(frame, ws, state.settings.editor.tab_size, areas.main, p);
            }
        }
    }

    render_toasts(frame, state, p);
}

fn render_workspace(frame: &mut Frame, ws: &WorkspaceState, tab_size: u8, area: Rect, p: &Palette) {
    let areas = layout::workspace(
        area,
        ws.explorer_width,
        ws.editor_height,
        ws.bottom_panel_open,
    );

    frame.render_widget(
        widgets::FileTree::new(&ws.explorer, ws.focus == Pane::Explorer, p),
        areas.explorer,
    );
    frame.render_widget(
        widgets::EditorView::new(&ws.editor, ws.focus == Pane::Editor, p).tab_size(tab_size),
        areas.editor,
    );

    if let Some(bottom) = areas.bottom {
        let focused = ws.focus == Pane::Bottom;
        let block = styles::glass_block(p, focused);
        let inner = block.inner(bottom);
        frame.render_widget(block, bottom);
        if inner.height < 2 {
            return;
        }

        let header = Rect { height: 1, ..inner };
        let body = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        frame.render_widget(widgets::BottomTabs::new(ws.bottom_tab, focused, p), header);
        match ws.bottom_tab {
            BottomTab::Terminal => frame.render_widget(
                widgets::TerminalView::new(&ws.terminal, focused, p),
                body,
            ),
            BottomTab::Assistant => frame.render_widget(
                widgets::ChatView::new(&ws.assistant, focused, p),
                body,
            ),
        }
    }

    if let Some(hint) = areas.hint {
        frame.render_widget(widgets::ShowPanelHint::new(p), hint);
    }
}

fn render_toasts(frame: &mut Frame, state: &AppState, p: &Palette) {
    let toasts: Vec<_> = state.notifications.iter().collect();
    let slots = layout::toast_slots(frame.area(), toasts.len());
    // Keep the newest toasts when the screen is short
    let start = toasts.len() - slots.len();
    for (notification, slot) in toasts[start..].iter().zip(slots) {
        frame.render_widget(widgets::Toast::new(notification, p), slot);
    }
}
