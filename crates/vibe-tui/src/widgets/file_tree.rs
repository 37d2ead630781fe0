//! Explorer pane: search box over the project tree

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_app::explorer::ExplorerState;
use vibe_core::FileNode;

use super::truncate;
use crate::theme::{icons, styles, Palette};

pub struct FileTree<'a> {
    explorer: &'a ExplorerState,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> FileTree<'a> {
    pub fn new(explorer: &'a ExplorerState, focused: bool, palette: &'a Palette) -> Self {
        Self {
            explorer,
            focused,
            palette,
        }
    }

    fn search_line(&self) -> Line<'static> {
        let p = self.palette;
        let query = &self.explorer.search_query;
        let mut spans = vec![Span::styled("/ ", styles::keybinding(p))];
        if query.is_empty() && !self.explorer.search_focused {
            spans.push(Span::styled("Search files...", styles::text_muted(p)));
        } else {
            spans.push(Span::styled(query.clone(), styles::text_primary(p)));
        }
        if self.explorer.search_focused {
            spans.push(Span::styled(
                " ",
                styles::text_primary(p).add_modifier(Modifier::REVERSED),
            ));
        }
        Line::from(spans)
    }

    fn node_line(&self, depth: usize, node: &FileNode, at_cursor: bool, width: usize) -> Line<'static> {
        let p = self.palette;
        let indent = "  ".repeat(depth);
        let glyph = if node.is_folder() {
            if self.explorer.is_expanded(&node.path) {
                icons::FOLDER_OPEN
            } else {
                icons::FOLDER_CLOSED
            }
        } else {
            icons::file_icon(node.icon())
        };

        let is_open_file = self.explorer.selected.as_deref() == Some(node.path.as_str());
        let style = if at_cursor && self.focused {
            styles::focused_selected(p)
        } else if at_cursor {
            styles::unfocused_selected(p)
        } else if is_open_file {
            styles::accent(p)
        } else if node.is_folder() {
            styles::text_primary(p)
        } else {
            styles::text_secondary(p)
        };

        let label = format!("{}{} {}", indent, glyph, node.name);
        Line::from(Span::styled(
            format!("{:<w$}", truncate(&label, width), w = width),
            style,
        ))
    }
}

impl Widget for FileTree<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let title = format!(" {} ", self.explorer.project_name());
        let block = styles::glass_block(p, self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let rows = self.explorer.visible_nodes();
        let body_height = inner.height.saturating_sub(1) as usize;
        // Keep the cursor row on screen
        let offset = (self.explorer.cursor + 1).saturating_sub(body_height);

        let mut lines = vec![self.search_line()];
        lines.extend(
            rows.iter()
                .enumerate()
                .skip(offset)
                .take(body_height)
                .map(|(i, (depth, node))| {
                    self.node_line(*depth, node, i == self.explorer.cursor, width)
                }),
        );
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    fn render(explorer: &ExplorerState) -> TestTerminal {
        let mut term = TestTerminal::with_size(30, 16);
        let area = term.area();
        term.render_widget(FileTree::new(explorer, true, &DARK), area);
        term
    }

    #[test]
    fn test_collapsed_tree_shows_top_level_only() {
        let explorer = ExplorerState::new("demo");
        let term = render(&explorer);

        assert!(term.buffer_contains("demo"));
        assert!(term.buffer_contains("src"));
        assert!(term.buffer_contains("package.json"));
        assert!(!term.buffer_contains("App.tsx"));
        assert!(term.buffer_contains("Search files..."));
    }

    #[test]
    fn test_expanded_folder_shows_children() {
        let mut explorer = ExplorerState::new("demo");
        explorer.toggle_folder("/src");
        let term = render(&explorer);

        assert!(term.buffer_contains("App.tsx"));
        assert!(term.buffer_contains(icons::FOLDER_OPEN));
    }

    #[test]
    fn test_search_query_is_echoed() {
        let mut explorer = ExplorerState::new("demo");
        explorer.search_focused = true;
        explorer.search_insert('a');
        explorer.search_insert('p');
        let term = render(&explorer);

        assert!(term.buffer_contains("/ ap"));
        assert!(!term.buffer_contains("Search files..."));
    }
}
