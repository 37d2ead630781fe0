//! Theme: palettes for light and dark mode, style builders, glyphs

pub mod icons;
pub mod palette;
pub mod styles;

pub use palette::Palette;
