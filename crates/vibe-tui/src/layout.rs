//! Screen layout definitions for the TUI
//!
//! The signed-in shell is a sidebar on the left and a header above the
//! active view. The workspace view splits further into explorer, editor
//! and the optional bottom panel.

use ratatui::layout::{Constraint, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 18;
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;
pub const HEADER_HEIGHT: u16 = 3;

/// Toast column width, clamped to the screen
pub const TOAST_WIDTH: u16 = 44;
pub const TOAST_HEIGHT: u16 = 4;

/// Screen areas for the signed-in shell
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub header: Rect,
    /// Area for the active view
    pub main: Rect,
}

pub fn create(area: Rect, sidebar_collapsed: bool) -> ScreenAreas {
    let sidebar_width = if sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    let [sidebar, right] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(10)]).areas(area);
    let [header, main] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).areas(right);

    ScreenAreas {
        sidebar,
        header,
        main,
    }
}

/// Pane areas inside the workspace view
#[derive(Debug, Clone, Copy)]
pub struct WorkspaceAreas {
    pub explorer: Rect,
    pub editor: Rect,
    /// `None` while the bottom panel is hidden
    pub bottom: Option<Rect>,
    /// One-row "show panel" hint shown in place of a hidden panel
    pub hint: Option<Rect>,
}

/// Split the workspace by percentage: explorer | (editor / bottom)
pub fn workspace(
    area: Rect,
    explorer_percent: u16,
    editor_percent: u16,
    bottom_open: bool,
) -> WorkspaceAreas {
    let explorer_percent = explorer_percent.min(100);
    let [explorer, main] = Layout::horizontal([
        Constraint::Percentage(explorer_percent),
        Constraint::Percentage(100 - explorer_percent),
    ])
    .areas(area);

    if bottom_open {
        let editor_percent = editor_percent.min(100);
        let [editor, bottom] = Layout::vertical([
            Constraint::Percentage(editor_percent),
            Constraint::Percentage(100 - editor_percent),
        ])
        .areas(main);
        WorkspaceAreas {
            explorer,
            editor,
            bottom: Some(bottom),
            hint: None,
        }
    } else {
        let [editor, hint] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(main);
        WorkspaceAreas {
            explorer,
            editor,
            bottom: None,
            hint: Some(hint),
        }
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Stacked toast slots in the bottom-right corner, newest last
pub fn toast_slots(area: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let mut slots = Vec::with_capacity(count);
    let mut bottom = area.y + area.height;
    for _ in 0..count {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        bottom -= TOAST_HEIGHT;
        slots.push(Rect::new(x, bottom, width, TOAST_HEIGHT));
    }
    slots.reverse();
    slots
}
