//! Editor pane: tab strip, line-numbered buffer, status line

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibe_app::editor::EditorState;
use unicode_width::UnicodeWidthChar;
use vibe_core::EditorTab;

use super::truncate;
use crate::theme::{icons, styles, Palette};

const TAB_NAME_WIDTH: usize = 18;

pub struct EditorView<'a> {
    editor: &'a EditorState,
    focused: bool,
    tab_size: usize,
    palette: &'a Palette,
}

impl<'a> EditorView<'a> {
    pub fn new(editor: &'a EditorState, focused: bool, palette: &'a Palette) -> Self {
        Self {
            editor,
            focused,
            tab_size: 2,
            palette,
        }
    }

    pub fn tab_size(mut self, tab_size: u8) -> Self {
        self.tab_size = usize::from(tab_size.max(1));
        self
    }

    fn tab_strip(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for tab in &self.editor.tabs {
            let active = self.editor.active == Some(tab.id);
            let style = if active {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            let marker = if tab.dirty { icons::DIRTY } else { icons::CLOSE };
            spans.push(Span::styled(
                format!(" {} {} ", truncate(&tab.name, TAB_NAME_WIDTH), marker),
                style,
            ));
            spans.push(Span::styled("│", styles::text_muted(p)));
        }
        Line::from(spans)
    }

    fn render_buffer(&self, tab: &EditorTab, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (cursor_line, cursor_col) = tab.cursor_line_col();
        let line_count = tab.line_count();
        let gutter = line_count.to_string().len().max(3);
        let text_width = (area.width as usize).saturating_sub(gutter + 2);
        let height = area.height as usize;

        let row_offset = (cursor_line + 1).saturating_sub(height);

        let mut lines = Vec::with_capacity(height);
        for (n, raw) in tab.content.split('\n').enumerate().skip(row_offset).take(height) {
            let expanded = expand_tabs(raw, self.tab_size);
            let on_cursor_line = n == cursor_line;
            let number_style = if on_cursor_line {
                styles::accent(p)
            } else {
                styles::text_muted(p)
            };

            let cursor_x = on_cursor_line.then(|| display_col(raw, cursor_col, self.tab_size));
            let col_offset = match cursor_x {
                Some(x) => {
                    let cursor_width = raw
                        .chars()
                        .nth(cursor_col)
                        .and_then(|c| c.width())
                        .unwrap_or(1)
                        .max(1);
                    (x + cursor_width).saturating_sub(text_width)
                }
                None => 0,
            };
            let cells = visible_cells(&expanded, col_offset, text_width);

            let mut spans = vec![
                Span::styled(format!("{:>gutter$} ", n + 1), number_style),
                Span::raw(" "),
            ];
            match cursor_x.filter(|_| self.focused) {
                Some(x) => {
                    let x = x.saturating_sub(col_offset);
                    let mut before = String::new();
                    let mut at = String::new();
                    let mut after = String::new();
                    for (col, glyph) in &cells {
                        match col.cmp(&x) {
                            std::cmp::Ordering::Less => before.push_str(glyph),
                            std::cmp::Ordering::Equal => at.push_str(glyph),
                            std::cmp::Ordering::Greater => after.push_str(glyph),
                        }
                    }
                    if at.is_empty() {
                        at.push(' ');
                    }
                    spans.push(Span::styled(before, styles::text_primary(p)));
                    spans.push(Span::styled(
                        at,
                        styles::text_primary(p).add_modifier(Modifier::REVERSED),
                    ));
                    spans.push(Span::styled(after, styles::text_primary(p)));
                }
                None => {
                    let visible: String = cells.into_iter().map(|(_, glyph)| glyph).collect();
                    spans.push(Span::styled(visible, styles::text_primary(p)));
                }
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn status_line(&self, tab: &EditorTab) -> Line<'static> {
        let p = self.palette;
        let (line, col) = tab.cursor_line_col();
        let state = if tab.dirty {
            Span::styled("Unsaved ", styles::status_yellow(p))
        } else {
            Span::styled("Saved ", styles::status_green(p))
        };
        Line::from(vec![
            Span::styled(format!("{}  ", tab.path), styles::text_muted(p)),
            Span::styled(format!("{}  ", tab.language), styles::accent(p)),
            Span::styled(format!("Ln {}, Col {}  ", line + 1, col + 1), styles::text_secondary(p)),
            state,
        ])
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let top = area.y + area.height / 3;
        let area = Rect {
            y: top,
            height: area.height.saturating_sub(top - area.y),
            ..area
        };
        Paragraph::new(vec![
            Line::from(Span::styled("No file open", styles::title(p))),
            Line::from(Span::styled(
                "Select a file from the explorer to start editing",
                styles::text_muted(p),
            )),
        ])
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let Some(tab) = self.editor.active_tab() else {
            self.render_empty(inner, buf);
            return;
        };

        let [strip, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.tab_strip()).render(strip, buf);
        self.render_buffer(tab, body, buf);
        Paragraph::new(self.status_line(tab))
            .alignment(Alignment::Right)
            .render(status, buf);
    }
}

fn expand_tabs(line: &str, tab_size: usize) -> String {
    line.replace('\t', &" ".repeat(tab_size))
}

/// Screen column of char index `col` once tabs are expanded
fn display_col(line: &str, col: usize, tab_size: usize) -> usize {
    line.chars()
        .take(col)
        .map(|c| if c == '\t' { tab_size } else { c.width().unwrap_or(0) })
        .sum()
}

/// Glyphs starting inside `[offset, offset + width)` with their column
/// relative to `offset`. Zero-width chars ride along with the glyph before
/// them. A wide glyph cut by the left edge leaves blank padding; one cut by
/// the right edge is dropped.
fn visible_cells(line: &str, offset: usize, width: usize) -> Vec<(usize, String)> {
    let mut cells: Vec<(usize, String)> = Vec::new();
    let mut col = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if w == 0 {
            if let Some((_, glyph)) = cells.last_mut() {
                glyph.push(c);
            }
            continue;
        }
        if col >= offset && col + w <= offset + width {
            cells.push((col - offset, c.to_string()));
        } else if col < offset && col + w > offset {
            cells.push((0, " ".repeat(col + w - offset)));
        }
        col += w;
        if col >= offset + width {
            break;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    fn render(editor: &EditorState) -> TestTerminal {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(EditorView::new(editor, true, &DARK), area);
        term
    }

    #[test]
    fn test_default_tab_renders_source_with_line_numbers() {
        let editor = EditorState::default();
        let term = render(&editor);

        assert!(term.buffer_contains("App.tsx"));
        assert!(term.buffer_contains("  1  import React from 'react';"));
        assert!(term.buffer_contains("typescript"));
        assert!(term.buffer_contains("Ln 1, Col 1"));
        assert!(term.buffer_contains("Saved"));
    }

    #[test]
    fn test_dirty_tab_is_marked() {
        let mut editor = EditorState::default();
        editor.insert_char('x');
        let term = render(&editor);

        assert!(term.buffer_contains(icons::DIRTY));
        assert!(term.buffer_contains("Unsaved"));
    }

    #[test]
    fn test_empty_state_when_no_tabs() {
        let editor = EditorState::empty();
        let term = render(&editor);

        assert!(term.buffer_contains("No file open"));
    }

    #[test]
    fn test_display_col_counts_wide_chars_twice() {
        assert_eq!(display_col("日本x", 2, 2), 4);
        assert_eq!(display_col("ab", 1, 2), 1);
    }

    #[test]
    fn test_visible_cells_place_wide_glyphs_by_column() {
        let expected: Vec<(usize, String)> =
            vec![(0, "a".into()), (1, "日".into()), (3, "b".into())];
        assert_eq!(visible_cells("a日b", 0, 10), expected);
    }

    #[test]
    fn test_visible_cells_pad_glyph_cut_by_the_offset() {
        let expected: Vec<(usize, String)> = vec![(0, " ".into()), (1, "本".into())];
        assert_eq!(visible_cells("日本語", 1, 4), expected);
    }

    #[test]
    fn test_cursor_highlights_glyph_after_wide_chars() {
        let mut editor = EditorState::empty();
        editor.open("wide.md", "wide.md", "日本z");
        editor.move_right();
        editor.move_right();
        let term = render(&editor);

        let buf = term.terminal.backend().buffer();
        let area = buf.area;
        let (x, y) = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .find(|&(x, y)| buf[(x, y)].symbol() == "z")
            .expect("cursor glyph rendered");
        assert!(buf[(x, y)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(x - 2, y)].symbol(), "本");
        assert!(!buf[(x - 2, y)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_display_col_expands_tabs() {
        assert_eq!(display_col("\tab", 2, 4), 5);
        assert_eq!(expand_tabs("\tx", 2), "  x");
    }
}
