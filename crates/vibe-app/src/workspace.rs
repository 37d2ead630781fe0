//! Panel shell: explorer | (editor / bottom panel)
//!
//! Owns the per-pane component states. Lives only while a user is signed
//! in; nothing here is persisted.

use vibe_core::BottomTab;

use crate::assistant::AssistantState;
use crate::config::Settings;
use crate::editor::EditorState;
use crate::explorer::ExplorerState;
use crate::terminal::TerminalState;

pub const EXPLORER_WIDTH_DEFAULT: u16 = 20;
pub const EXPLORER_WIDTH_MIN: u16 = 15;
pub const EXPLORER_WIDTH_MAX: u16 = 30;

pub const EDITOR_HEIGHT_DEFAULT: u16 = 70;
pub const EDITOR_HEIGHT_MIN: u16 = 10;
/// Keeps the bottom panel at 20% or more
pub const EDITOR_HEIGHT_MAX: u16 = 80;

/// Pane holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    Explorer,
    #[default]
    Editor,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct WorkspaceState {
    pub explorer: ExplorerState,
    pub editor: EditorState,
    pub terminal: TerminalState,
    pub assistant: AssistantState,

    pub bottom_panel_open: bool,
    pub bottom_tab: BottomTab,
    pub focus: Pane,
    /// Percent of the content width
    pub explorer_width: u16,
    /// Percent of the main area height
    pub editor_height: u16,
}

impl WorkspaceState {
    pub fn new(project_name: &str, settings: &Settings) -> Self {
        Self {
            explorer: ExplorerState::new(project_name),
            editor: EditorState::default(),
            terminal: TerminalState::new(settings.terminal.max_lines),
            assistant: AssistantState::new(),
            bottom_panel_open: true,
            bottom_tab: BottomTab::Terminal,
            focus: Pane::Editor,
            explorer_width: EXPLORER_WIDTH_DEFAULT,
            editor_height: EDITOR_HEIGHT_DEFAULT,
        }
    }

    pub fn toggle_bottom_panel(&mut self) {
        self.bottom_panel_open = !self.bottom_panel_open;
        if !self.bottom_panel_open && self.focus == Pane::Bottom {
            self.focus = Pane::Editor;
        }
    }

    /// Switch the bottom tab, opening the panel if hidden, and focus it
    pub fn show_bottom_tab(&mut self, tab: BottomTab) {
        self.bottom_panel_open = true;
        self.bottom_tab = tab;
        self.focus = Pane::Bottom;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Explorer => Pane::Editor,
            Pane::Editor if self.bottom_panel_open => Pane::Bottom,
            Pane::Editor | Pane::Bottom => Pane::Explorer,
        };
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            Pane::Explorer if self.bottom_panel_open => Pane::Bottom,
            Pane::Explorer | Pane::Bottom => Pane::Editor,
            Pane::Editor => Pane::Explorer,
        };
    }

    pub fn resize_explorer(&mut self, delta: i16) {
        self.explorer_width = clamp_percent(
            self.explorer_width,
            delta,
            EXPLORER_WIDTH_MIN,
            EXPLORER_WIDTH_MAX,
        );
    }

    pub fn resize_editor(&mut self, delta: i16) {
        self.editor_height =
            clamp_percent(self.editor_height, delta, EDITOR_HEIGHT_MIN, EDITOR_HEIGHT_MAX);
    }

    /// True when the bottom panel is visible and focused on `tab`
    pub fn is_bottom_focused(&self, tab: BottomTab) -> bool {
        self.bottom_panel_open && self.focus == Pane::Bottom && self.bottom_tab == tab
    }
}

fn clamp_percent(current: u16, delta: i16, min: u16, max: u16) -> u16 {
    let next = current as i32 + delta as i32;
    next.clamp(min as i32, max as i32) as u16
}
