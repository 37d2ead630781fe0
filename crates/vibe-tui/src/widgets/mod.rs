//! Widget components for the TUI

mod auth_screen;
mod bottom_panel;
mod chat;
mod editor;
mod file_tree;
mod header;
mod projects;
mod settings_view;
mod sidebar;
mod terminal_view;
mod toast;

pub use auth_screen::AuthScreen;
pub use bottom_panel::{BottomTabs, ShowPanelHint};
pub use chat::ChatView;
pub use editor::EditorView;
pub use file_tree::FileTree;
pub use header::Header;
pub use projects::ProjectsView;
pub use settings_view::SettingsView;
pub use sidebar::Sidebar;
pub use terminal_view::TerminalView;
pub use toast::Toast;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max` display columns, marking the cut with `…`
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap by display width. Words longer than a line are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.lines() {
        let mut line = String::new();
        let mut used = 0;
        // Nothing placed on this row yet; runs of spaces survive otherwise
        let mut fresh = true;
        for word in raw.split(' ') {
            let w = word.width();
            let sep = usize::from(!fresh);
            if used + sep + w <= width {
                if !fresh {
                    line.push(' ');
                }
                line.push_str(word);
                used += sep + w;
                fresh = false;
                continue;
            }
            if !fresh {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            fresh = false;
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if used + cw > width {
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                line.push(c);
                used += cw;
            }
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("App.tsx", 10), "App.tsx");
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("components", 6), "compo…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("hello there general kenobi", 12);
        assert_eq!(lines, vec!["hello there", "general", "kenobi"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_indentation() {
        let lines = wrap_text("  help     - Show", 40);
        assert_eq!(lines, vec!["  help     - Show"]);
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        let lines = wrap_text("one\n\ntwo", 10);
        assert_eq!(lines, vec!["one", "", "two"]);
    }
}
