//! Color palettes keyed by [`Theme`].
//!
//! Named ANSI colors only, so both palettes follow the user's terminal
//! color scheme.

use ratatui::style::Color;
use vibe_core::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // Background layers
    pub base_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // Borders
    pub border_dim: Color,
    pub border_active: Color,

    // Accent
    pub accent: Color,
    /// Foreground on an accent background
    pub contrast_fg: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Status
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
    pub status_blue: Color,
}

pub const DARK: Palette = Palette {
    base_bg: Color::Black,
    card_bg: Color::Black,
    popup_bg: Color::DarkGray,
    border_dim: Color::DarkGray,
    border_active: Color::Cyan,
    accent: Color::Cyan,
    contrast_fg: Color::Black,
    text_primary: Color::White,
    text_secondary: Color::Gray,
    text_muted: Color::DarkGray,
    status_green: Color::Green,
    status_red: Color::Red,
    status_yellow: Color::Yellow,
    status_blue: Color::Blue,
};

pub const LIGHT: Palette = Palette {
    base_bg: Color::White,
    card_bg: Color::White,
    popup_bg: Color::Gray,
    border_dim: Color::Gray,
    border_active: Color::Blue,
    accent: Color::Blue,
    contrast_fg: Color::White,
    text_primary: Color::Black,
    text_secondary: Color::DarkGray,
    text_muted: Color::Gray,
    status_green: Color::Green,
    status_red: Color::Red,
    status_yellow: Color::Magenta,
    status_blue: Color::Blue,
};

pub fn for_theme(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
