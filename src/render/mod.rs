//! Drawing: the frame description and the surfaces that display it

pub mod renderer;
pub mod scene;

pub use renderer::TerminalRenderer;
pub use scene::Scene;

use anyhow::Result;

/// Solid fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    White,
}

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => ratatui::style::Color::Black,
            Color::Red => ratatui::style::Color::Red,
            Color::Green => ratatui::style::Color::Green,
            Color::White => ratatui::style::Color::White,
        }
    }
}

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A line of text drawn on top of the play field
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub text: String,
    /// Character size in pixels; surfaces without fonts may ignore it
    pub size: u32,
    pub color: Color,
    /// Top-left corner in window pixels
    pub x: u32,
    pub y: u32,
}

/// A drawing surface: clear, draw, then present once per frame
pub trait RenderTarget {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: PixelRect, color: Color);

    fn draw_text(&mut self, overlay: &TextOverlay);

    /// Show everything drawn since the last clear
    fn present(&mut self) -> Result<()>;
}
