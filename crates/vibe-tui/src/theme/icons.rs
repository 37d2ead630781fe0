//! Glyphs shared by the widgets. Plain Unicode, no Nerd Font required.

use vibe_core::FileIcon;

pub const FOLDER_OPEN: &str = "▾";
pub const FOLDER_CLOSED: &str = "▸";
pub const DIRTY: &str = "●";
pub const CLOSE: &str = "×";
pub const SUCCESS: &str = "✓";
pub const FAILURE: &str = "✗";
pub const INFO: &str = "ℹ";
pub const PROMPT: &str = "$";

pub fn file_icon(icon: FileIcon) -> &'static str {
    match icon {
        FileIcon::Code => "</>",
        FileIcon::Image => "img",
        FileIcon::Text => "txt",
    }
}
