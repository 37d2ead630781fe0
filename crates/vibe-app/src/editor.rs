//! Tabbed buffer view state
//!
//! An ordered list of open tabs plus the active tab id. Saving only clears
//! the dirty flag and logs; nothing is written to disk.

use vibe_core::mock_data::WELCOME_APP_SOURCE;
use vibe_core::prelude::*;
use vibe_core::{EditorTab, TabId};

#[derive(Debug, Clone)]
pub struct EditorState {
    pub tabs: Vec<EditorTab>,
    pub active: Option<TabId>,
    next_id: u64,
}

impl EditorState {
    /// No tabs open
    pub fn empty() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Open a tab, make it active and return its id
    pub fn open(&mut self, name: &str, path: &str, content: impl Into<String>) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        self.tabs.push(EditorTab::new(id, name, path, content.into()));
        self.active = Some(id);
        debug!("Opened tab {:?} for {}", id, path);
        id
    }

    /// Remove a tab. When it was active, the first remaining tab becomes
    /// active (or none, if the list is now empty).
    pub fn close(&mut self, id: TabId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.tabs.remove(index);
        if self.active == Some(id) {
            self.active = self.tabs.first().map(|tab| tab.id);
        }
    }

    /// Replace a tab's content; always marks it dirty
    pub fn edit(&mut self, id: TabId, text: impl Into<String>) {
        if let Some(tab) = self.tab_mut(id) {
            tab.content = text.into();
            tab.dirty = true;
            let len = tab.content.chars().count();
            tab.cursor = tab.cursor.min(len);
        }
    }

    /// Clear the dirty flag and return the path that would have been written
    pub fn save(&mut self, id: TabId) -> Option<String> {
        let tab = self.tab_mut(id)?;
        tab.dirty = false;
        info!("Saving file: {}", tab.path);
        Some(tab.path.clone())
    }

    pub fn activate(&mut self, id: TabId) {
        if self.index_of(id).is_some() {
            self.active = Some(id);
        }
    }

    pub fn next_tab(&mut self) {
        self.step(1);
    }

    pub fn prev_tab(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let Some(index) = self.active.and_then(|id| self.index_of(id)) else {
            return;
        };
        let len = self.tabs.len() as isize;
        let next = (index as isize + delta).rem_euclid(len) as usize;
        self.active = Some(self.tabs[next].id);
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab(&self, id: TabId) -> Option<&EditorTab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    fn tab_mut(&mut self, id: TabId) -> Option<&mut EditorTab> {
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn active_tab(&self) -> Option<&EditorTab> {
        self.active.and_then(|id| self.tab(id))
    }

    pub fn has_unsaved(&self) -> bool {
        self.tabs.iter().any(|tab| tab.dirty)
    }

    // ─────────────────────────────────────────────────────────────────
    // Keystroke editing of the active buffer
    // ─────────────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, c: char) {
        self.splice_active(|content, cursor| {
            let at = byte_offset(content, cursor);
            content.insert(at, c);
            cursor + 1
        });
    }

    pub fn insert_str(&mut self, text: &str) {
        let added = text.chars().count();
        self.splice_active(|content, cursor| {
            let at = byte_offset(content, cursor);
            content.insert_str(at, text);
            cursor + added
        });
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        let Some(tab) = self.active_tab() else {
            return;
        };
        if tab.cursor == 0 {
            return;
        }
        self.splice_active(|content, cursor| {
            let at = byte_offset(content, cursor - 1);
            content.remove(at);
            cursor - 1
        });
    }

    pub fn delete(&mut self) {
        let Some(tab) = self.active_tab() else {
            return;
        };
        if tab.cursor >= tab.content.chars().count() {
            return;
        }
        self.splice_active(|content, cursor| {
            let at = byte_offset(content, cursor);
            content.remove(at);
            cursor
        });
    }

    /// Apply a content mutation to the active tab through [`Self::edit`]
    fn splice_active<F>(&mut self, f: F)
    where
        F: FnOnce(&mut String, usize) -> usize,
    {
        let Some(tab) = self.active_tab() else {
            return;
        };
        let id = tab.id;
        let mut content = tab.content.clone();
        let cursor = f(&mut content, tab.cursor);
        self.edit(id, content);
        if let Some(tab) = self.tab_mut(id) {
            tab.cursor = cursor;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.cursor = tab.cursor.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            let len = tab.content.chars().count();
            tab.cursor = (tab.cursor + 1).min(len);
        }
    }

    pub fn move_home(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            let (line, _) = tab.cursor_line_col();
            tab.cursor = line_start(&tab.content, line);
        }
    }

    pub fn move_end(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            let (line, _) = tab.cursor_line_col();
            tab.cursor = line_start(&tab.content, line) + line_len(&tab.content, line);
        }
    }

    pub fn move_up(&mut self) {
        self.move_vertical(-1);
    }

    pub fn move_down(&mut self) {
        self.move_vertical(1);
    }

    fn move_vertical(&mut self, delta: isize) {
        let Some(tab) = self.active_tab_mut() else {
            return;
        };
        let (line, col) = tab.cursor_line_col();
        let target = line as isize + delta;
        if target < 0 || target as usize >= tab.line_count() {
            return;
        }
        let target = target as usize;
        tab.cursor = line_start(&tab.content, target) + col.min(line_len(&tab.content, target));
    }

    fn active_tab_mut(&mut self) -> Option<&mut EditorTab> {
        let id = self.active?;
        self.tab_mut(id)
    }
}

impl Default for EditorState {
    /// One `App.tsx` tab, as a fresh workspace shows
    fn default() -> Self {
        let mut editor = Self::empty();
        editor.open("App.tsx", "/src/App.tsx", WELCOME_APP_SOURCE);
        editor
    }
}

fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Char offset of the first char of `line`
fn line_start(s: &str, line: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, ch) in s.chars().enumerate() {
        if ch == '\n' {
            seen += 1;
            if seen == line {
                return i + 1;
            }
        }
    }
    s.chars().count()
}

fn line_len(s: &str, line: usize) -> usize {
    s.split('\n')
        .nth(line)
        .map(|l| l.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tabs() -> (EditorState, [TabId; 3]) {
        let mut editor = EditorState::empty();
        let a = editor.open("a.ts", "/a.ts", "a");
        let b = editor.open("b.ts", "/b.ts", "b");
        let c = editor.open("c.ts", "/c.ts", "c");
        (editor, [a, b, c])
    }

    #[test]
    fn test_default_has_app_tsx() {
        let editor = EditorState::default();
        let tab = editor.active_tab().unwrap();
        assert_eq!(tab.name, "App.tsx");
        assert_eq!(tab.language, "typescript");
        assert!(!tab.dirty);
    }

    #[test]
    fn test_open_allocates_unique_ids() {
        let (editor, [a, b, c]) = three_tabs();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(editor.active, Some(c));
    }

    #[test]
    fn test_close_active_activates_first_remaining() {
        let (mut editor, [a, b, c]) = three_tabs();
        editor.activate(b);
        editor.close(b);
        assert_eq!(editor.active, Some(a));

        editor.activate(c);
        editor.close(c);
        assert_eq!(editor.active, Some(a));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let (mut editor, [a, _, c]) = three_tabs();
        editor.close(a);
        assert_eq!(editor.active, Some(c));
    }

    #[test]
    fn test_close_last_tab_empties() {
        let mut editor = EditorState::default();
        let id = editor.active.unwrap();
        editor.close(id);
        assert!(editor.is_empty());
        assert_eq!(editor.active, None);
        assert!(editor.active_tab().is_none());
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let (mut editor, _) = three_tabs();
        editor.close(TabId(99));
        assert_eq!(editor.tabs.len(), 3);
    }

    #[test]
    fn test_edit_always_dirty_save_always_clean() {
        let mut editor = EditorState::default();
        let id = editor.active.unwrap();

        editor.edit(id, "x");
        assert!(editor.tab(id).unwrap().dirty);
        editor.edit(id, "x");
        assert!(editor.tab(id).unwrap().dirty);

        assert_eq!(editor.save(id).as_deref(), Some("/src/App.tsx"));
        assert!(!editor.tab(id).unwrap().dirty);
        editor.save(id);
        assert!(!editor.tab(id).unwrap().dirty);
    }

    #[test]
    fn test_next_prev_wrap() {
        let (mut editor, [a, _, c]) = three_tabs();
        editor.next_tab();
        assert_eq!(editor.active, Some(a));
        editor.prev_tab();
        assert_eq!(editor.active, Some(c));
    }

    #[test]
    fn test_keystrokes_edit_active_buffer() {
        let mut editor = EditorState::empty();
        let id = editor.open("n.md", "/n.md", "");
        editor.insert_char('h');
        editor.insert_char('i');
        editor.insert_newline();
        editor.insert_str("yo");
        assert_eq!(editor.tab(id).unwrap().content, "hi\nyo");
        assert!(editor.tab(id).unwrap().dirty);

        editor.move_up();
        assert_eq!(editor.tab(id).unwrap().cursor, 2);
        editor.backspace();
        assert_eq!(editor.tab(id).unwrap().content, "h\nyo");
        editor.move_home();
        editor.delete();
        assert_eq!(editor.tab(id).unwrap().content, "\nyo");
    }

    #[test]
    fn test_cursor_moves_clamp_to_line() {
        let mut editor = EditorState::empty();
        let id = editor.open("n.md", "/n.md", "long line\nab");
        editor.move_end();
        assert_eq!(editor.tab(id).unwrap().cursor, 9);
        editor.move_down();
        assert_eq!(editor.tab(id).unwrap().cursor_line_col(), (1, 2));
        editor.move_down();
        assert_eq!(editor.tab(id).unwrap().cursor_line_col(), (1, 2));
    }

    #[test]
    fn test_multibyte_insert() {
        let mut editor = EditorState::empty();
        let id = editor.open("u.txt", "/u.txt", "é");
        editor.move_right();
        editor.insert_char('x');
        assert_eq!(editor.tab(id).unwrap().content, "éx");
    }
}
