//! File explorer state: static tree, expanded folders, selection
//!
//! The tree never touches the filesystem. Activating a file only records it
//! as selected; opening it in the editor is not wired up.

use std::collections::BTreeSet;

use vibe_core::mock_data;
use vibe_core::prelude::*;
use vibe_core::FileNode;

#[derive(Debug, Clone)]
pub struct ExplorerState {
    pub tree: FileNode,
    /// Folder paths currently expanded; always a subset of the tree's folders
    pub expanded: BTreeSet<String>,
    pub selected: Option<String>,
    /// Index into [`ExplorerState::visible_nodes`]
    pub cursor: usize,
    /// Captured but not used for filtering
    pub search_query: String,
    pub search_focused: bool,
}

impl ExplorerState {
    pub fn new(project_name: &str) -> Self {
        Self {
            tree: mock_data::project_tree(project_name),
            expanded: BTreeSet::new(),
            selected: None,
            cursor: 0,
            search_query: String::new(),
            search_focused: false,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.tree.name
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Flip a folder's membership in the expanded set
    ///
    /// Files and paths outside the tree are ignored.
    pub fn toggle_folder(&mut self, path: &str) {
        match self.tree.find(path) {
            Some(node) if node.is_folder() => {
                if !self.expanded.remove(path) {
                    self.expanded.insert(path.to_string());
                }
            }
            _ => {
                trace!("toggle_folder ignored for {:?}", path);
            }
        }
        self.clamp_cursor();
    }

    /// Folder: toggle. File: mark selected.
    pub fn activate(&mut self, path: &str) {
        let Some(node) = self.tree.find(path) else {
            return;
        };
        if node.is_folder() {
            self.toggle_folder(path);
        } else {
            info!("Opening file: {}", path);
            self.selected = Some(path.to_string());
        }
    }

    /// Rows to display: `(depth, node)` for the root's children and the
    /// contents of every expanded folder, depth-first
    pub fn visible_nodes(&self) -> Vec<(usize, &FileNode)> {
        let mut rows = Vec::new();
        for child in &self.tree.children {
            self.collect_visible(child, 0, &mut rows);
        }
        rows
    }

    fn collect_visible<'a>(
        &'a self,
        node: &'a FileNode,
        depth: usize,
        rows: &mut Vec<(usize, &'a FileNode)>,
    ) {
        rows.push((depth, node));
        if node.is_folder() && self.expanded.contains(&node.path) {
            for child in &node.children {
                self.collect_visible(child, depth + 1, rows);
            }
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.visible_nodes().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Path under the keyboard cursor
    pub fn cursor_path(&self) -> Option<String> {
        self.visible_nodes()
            .get(self.cursor)
            .map(|(_, node)| node.path.clone())
    }

    pub fn activate_cursor(&mut self) {
        if let Some(path) = self.cursor_path() {
            self.activate(&path);
        }
    }

    /// Collapse the folder under the cursor, or jump to its parent folder
    pub fn collapse_cursor(&mut self) {
        let Some(path) = self.cursor_path() else {
            return;
        };
        if self.expanded.contains(&path) {
            self.toggle_folder(&path);
            return;
        }
        let rows = self.visible_nodes();
        let depth = rows[self.cursor].0;
        if depth == 0 {
            return;
        }
        if let Some(parent) = rows[..self.cursor].iter().rposition(|(d, _)| *d < depth) {
            self.cursor = parent;
        }
    }

    pub fn search_insert(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn search_backspace(&mut self) {
        self.search_query.pop();
    }

    pub fn search_clear(&mut self) {
        self.search_query.clear();
        self.search_focused = false;
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_nodes().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new(mock_data::DEFAULT_PROJECT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_expanded_starts_empty() {
        let explorer = ExplorerState::default();
        assert!(explorer.expanded.is_empty());
        let names: Vec<&str> = explorer
            .visible_nodes()
            .iter()
            .map(|(_, n)| n.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["src", "public", "package.json", "README.md", "tsconfig.json"]
        );
    }

    #[test]
    fn test_toggle_parity_matches_expanded_set() {
        let mut explorer = ExplorerState::default();
        let clicks = [
            "/src",
            "/public",
            "/src/components",
            "/src",
            "/src/pages",
            "/public",
            "/src",
            "/src/components",
            "/src/components",
        ];
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for path in clicks {
            explorer.toggle_folder(path);
            *counts.entry(path).or_default() += 1;
        }
        let odd: BTreeSet<String> = counts
            .into_iter()
            .filter(|(_, n)| n % 2 == 1)
            .map(|(p, _)| p.to_string())
            .collect();
        assert_eq!(explorer.expanded, odd);
    }

    #[test]
    fn test_toggle_file_or_unknown_is_noop() {
        let mut explorer = ExplorerState::default();
        explorer.toggle_folder("/src/App.tsx");
        explorer.toggle_folder("/nope");
        assert!(explorer.expanded.is_empty());
    }

    #[test]
    fn test_activate_file_selects_without_expanding() {
        let mut explorer = ExplorerState::default();
        explorer.activate("/README.md");
        assert_eq!(explorer.selected.as_deref(), Some("/README.md"));
        assert!(explorer.expanded.is_empty());
    }

    #[test]
    fn test_expanded_folder_shows_children_indented() {
        let mut explorer = ExplorerState::default();
        explorer.activate("/src");
        let rows = explorer.visible_nodes();
        assert_eq!(rows[1].0, 1);
        assert_eq!(rows[1].1.path, "/src/components");
    }

    #[test]
    fn test_cursor_navigation_and_collapse_to_parent() {
        let mut explorer = ExplorerState::default();
        explorer.activate_cursor(); // expand /src
        explorer.move_down();
        explorer.move_down();
        assert_eq!(explorer.cursor_path().as_deref(), Some("/src/pages"));
        explorer.collapse_cursor();
        assert_eq!(explorer.cursor_path().as_deref(), Some("/src"));
        explorer.collapse_cursor();
        assert!(!explorer.is_expanded("/src"));
    }

    #[test]
    fn test_cursor_clamped_after_collapse() {
        let mut explorer = ExplorerState::default();
        explorer.toggle_folder("/public");
        for _ in 0..20 {
            explorer.move_down();
        }
        let last = explorer.visible_nodes().len() - 1;
        assert_eq!(explorer.cursor, last);
        explorer.toggle_folder("/public");
        assert!(explorer.cursor < explorer.visible_nodes().len());
    }

    #[test]
    fn test_search_captures_text_only() {
        let mut explorer = ExplorerState::default();
        let before = explorer.visible_nodes().len();
        explorer.search_insert('a');
        explorer.search_insert('p');
        explorer.search_backspace();
        assert_eq!(explorer.search_query, "a");
        assert_eq!(explorer.visible_nodes().len(), before);
    }
}
