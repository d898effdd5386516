use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Terminal,
};
use std::io::{stderr, Stderr};

use super::{Color, PixelRect, RenderTarget, TextOverlay};
use crate::game::GameConfig;

/// Terminal columns used to draw one grid cell, so cells look square
const CELL_WIDTH: u16 = 2;
const FILLED: &str = "██";
const EMPTY: &str = "  ";

/// Rasterises pixel draw calls back onto grid cells and draws them with
/// ratatui, one terminal row per grid row.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    grid_size: u32,
    cols: usize,
    rows: usize,
    background: Color,
    cells: Vec<Option<Color>>,
    overlay: Option<TextOverlay>,
}

impl TerminalRenderer<CrosstermBackend<Stderr>> {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn enter(config: &GameConfig) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        Ok(Self::new(terminal, config))
    }

    /// Hand the terminal back in the state we found it
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, config: &GameConfig) -> Self {
        let cols = config.cols() as usize;
        let rows = config.rows() as usize;

        Self {
            terminal,
            grid_size: config.grid_size,
            cols,
            rows,
            background: Color::Black,
            cells: vec![None; cols * rows],
            overlay: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn grid_lines(&self) -> Vec<Line<'static>> {
        let background = Style::default().bg(self.background.into());

        self.cells
            .chunks(self.cols)
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(color) => Span::styled(FILLED, background.fg((*color).into())),
                        None => Span::styled(EMPTY, background),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Screen rectangle of the bordered play field
    fn field_area(&self) -> Rect {
        Rect::new(
            0,
            0,
            (self.cols as u16).saturating_mul(CELL_WIDTH).saturating_add(2),
            (self.rows as u16).saturating_add(2),
        )
    }

    /// Screen rectangle of an overlay, inside the field border
    fn overlay_area(&self, overlay: &TextOverlay) -> Rect {
        let col = (overlay.x / self.grid_size) as u16;
        let row = (overlay.y / self.grid_size) as u16;
        Rect::new(
            1 + col * CELL_WIDTH,
            1 + row,
            overlay.text.chars().count() as u16,
            1,
        )
    }
}

impl<B: Backend> RenderTarget for TerminalRenderer<B> {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.overlay = None;
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let grid = self.grid_size;
        let x0 = (rect.x / grid) as usize;
        let y0 = (rect.y / grid) as usize;
        let x1 = ((rect.x + rect.width).div_ceil(grid) as usize).min(self.cols);
        let y1 = ((rect.y + rect.height).div_ceil(grid) as usize).min(self.rows);

        for y in y0..y1 {
            for x in x0..x1 {
                self.cells[y * self.cols + x] = Some(color);
            }
        }
    }

    fn draw_text(&mut self, overlay: &TextOverlay) {
        self.overlay = Some(overlay.clone());
    }

    fn present(&mut self) -> Result<()> {
        let grid = Paragraph::new(self.grid_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White.into()))
                .title(" Snake "),
        );
        let field = self.field_area();

        let overlay = self.overlay.as_ref().map(|overlay| {
            let text = Paragraph::new(Line::from(Span::styled(
                overlay.text.clone(),
                Style::default()
                    .fg(overlay.color.into())
                    .bg(self.background.into())
                    .add_modifier(Modifier::BOLD),
            )));
            (text, self.overlay_area(overlay))
        });

        self.terminal
            .draw(|frame| {
                let screen = frame.area();
                frame.render_widget(grid, field.intersection(screen));

                if let Some((text, area)) = overlay {
                    let area = area.intersection(screen);
                    frame.render_widget(Clear, area);
                    frame.render_widget(text, area);
                }
            })
            .context("Failed to draw frame")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn renderer(config: &GameConfig) -> TerminalRenderer<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        TerminalRenderer::new(terminal, config)
    }

    fn symbol_at(renderer: &TerminalRenderer<TestBackend>, x: u16, y: u16) -> String {
        let buffer = renderer.terminal().backend().buffer();
        let index = y as usize * buffer.area.width as usize + x as usize;
        buffer.content[index].symbol().to_string()
    }

    fn cell(x: u32, y: u32) -> PixelRect {
        PixelRect {
            x: x * 20,
            y: y * 20,
            width: 20,
            height: 20,
        }
    }

    #[test]
    fn test_fill_rect_maps_to_grid_cell() {
        let mut renderer = renderer(&GameConfig::default());
        renderer.clear(Color::Black);
        renderer.fill_rect(cell(3, 2), Color::Green);

        assert_eq!(renderer.cells[2 * 40 + 3], Some(Color::Green));
        assert_eq!(renderer.cells.iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_fill_rect_clipped_to_grid() {
        let mut renderer = renderer(&GameConfig::default());
        renderer.clear(Color::Black);
        renderer.fill_rect(
            PixelRect {
                x: 780,
                y: 580,
                width: 100,
                height: 100,
            },
            Color::Red,
        );

        assert_eq!(renderer.cells[29 * 40 + 39], Some(Color::Red));
        assert_eq!(renderer.cells.iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_clear_drops_cells_and_overlay() {
        let mut renderer = renderer(&GameConfig::default());
        renderer.fill_rect(cell(0, 0), Color::Green);
        renderer.draw_text(&TextOverlay {
            text: "hi".to_string(),
            size: 10,
            color: Color::Red,
            x: 0,
            y: 0,
        });

        renderer.clear(Color::Black);

        assert!(renderer.cells.iter().all(Option::is_none));
        assert!(renderer.overlay.is_none());
    }

    #[test]
    fn test_present_draws_cells_and_overlay() {
        let mut renderer = renderer(&GameConfig::default());
        renderer.clear(Color::Black);
        renderer.fill_rect(cell(0, 0), Color::Green);
        renderer.draw_text(&TextOverlay {
            text: "Game Over".to_string(),
            size: 40,
            color: Color::Red,
            x: 200,
            y: 300,
        });
        renderer.present().unwrap();

        // Border at column 0, first cell occupies columns 1 and 2
        assert_eq!(symbol_at(&renderer, 1, 1), "█");
        assert_eq!(symbol_at(&renderer, 2, 1), "█");
        assert_eq!(symbol_at(&renderer, 3, 1), " ");

        // Overlay starts at grid column 10, row 15
        assert_eq!(symbol_at(&renderer, 21, 16), "G");
        assert_eq!(symbol_at(&renderer, 22, 16), "a");
    }
}
