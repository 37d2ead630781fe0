//! Editor tab/buffer types

/// Identifier of an open editor tab, unique within the open-tab list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(pub u64);

/// One open file in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTab {
    pub id: TabId,
    /// Display name shown in the tab bar
    pub name: String,
    pub path: String,
    /// Full text of the buffer
    pub content: String,
    /// Set on any edit, cleared on save
    pub dirty: bool,
    /// Static language tag, derived from the path's extension
    pub language: String,
    /// Cursor position as a char offset into `content`
    pub cursor: usize,
}

impl EditorTab {
    pub fn new(id: TabId, name: impl Into<String>, path: impl Into<String>, content: String) -> Self {
        let path = path.into();
        let language = language_for_path(&path).to_string();
        Self {
            id,
            name: name.into(),
            path,
            content,
            dirty: false,
            language,
            cursor: 0,
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// (line, column) of the cursor, both zero-based, in chars
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for ch in self.content.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

/// Map a file path to the language tag shown in the editor
pub fn language_for_path(path: &str) -> &'static str {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext {
        "ts" | "tsx" => "typescript",
        "js" | "jsx" => "javascript",
        "css" => "css",
        "html" => "html",
        "json" => "json",
        "md" => "markdown",
        "rs" => "rust",
        "toml" => "toml",
        _ => "plaintext",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_for_path() {
        assert_eq!(language_for_path("/src/App.tsx"), "typescript");
        assert_eq!(language_for_path("/src/index.css"), "css");
        assert_eq!(language_for_path("/README.md"), "markdown");
        assert_eq!(language_for_path("/LICENSE"), "plaintext");
    }

    #[test]
    fn test_new_tab_is_clean() {
        let tab = EditorTab::new(TabId(1), "App.tsx", "/src/App.tsx", "a\nb".into());
        assert!(!tab.dirty);
        assert_eq!(tab.language, "typescript");
        assert_eq!(tab.line_count(), 2);
    }

    #[test]
    fn test_cursor_line_col() {
        let mut tab = EditorTab::new(TabId(1), "a.txt", "/a.txt", "ab\ncde".into());
        tab.cursor = 0;
        assert_eq!(tab.cursor_line_col(), (0, 0));
        tab.cursor = 2;
        assert_eq!(tab.cursor_line_col(), (0, 2));
        tab.cursor = 4;
        assert_eq!(tab.cursor_line_col(), (1, 1));
    }
}
