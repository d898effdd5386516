use anyhow::Result;

use super::{Color, PixelRect, RenderTarget, TextOverlay};
use crate::game::{GameConfig, Position, SimulationState};
use crate::input::RESTART_KEY;

const BACKGROUND: Color = Color::Black;
const FOOD_COLOR: Color = Color::Red;
const SNAKE_COLOR: Color = Color::Green;

const GAME_OVER_SIZE: u32 = 40;

fn game_over_text() -> String {
    format!("Game Over! Press {} to Restart", RESTART_KEY.to_ascii_uppercase())
}

/// Turns a [`SimulationState`] into draw calls on a [`RenderTarget`]
pub struct Scene {
    grid_size: u32,
    game_over: TextOverlay,
}

impl Scene {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid_size: config.grid_size,
            game_over: TextOverlay {
                text: game_over_text(),
                size: GAME_OVER_SIZE,
                color: Color::Red,
                x: config.window_width / 4,
                y: config.window_height / 2,
            },
        }
    }

    /// Pixel rectangle covered by a grid cell
    pub fn cell_rect(&self, pos: Position) -> PixelRect {
        PixelRect {
            x: pos.x as u32 * self.grid_size,
            y: pos.y as u32 * self.grid_size,
            width: self.grid_size,
            height: self.grid_size,
        }
    }

    /// Draw a full frame and present it
    pub fn draw<T>(&self, state: &SimulationState, target: &mut T) -> Result<()>
    where
        T: RenderTarget + ?Sized,
    {
        target.clear(BACKGROUND);

        target.fill_rect(self.cell_rect(state.food()), FOOD_COLOR);

        for segment in state.snake().segments() {
            target.fill_rect(self.cell_rect(*segment), SNAKE_COLOR);
        }

        if state.is_game_over() {
            target.draw_text(&self.game_over);
        }

        target.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Color),
        Rect(PixelRect, Color),
        Text(String),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl RenderTarget for Recorder {
        fn clear(&mut self, color: Color) {
            self.calls.push(Call::Clear(color));
        }

        fn fill_rect(&mut self, rect: PixelRect, color: Color) {
            self.calls.push(Call::Rect(rect, color));
        }

        fn draw_text(&mut self, overlay: &TextOverlay) {
            self.calls.push(Call::Text(overlay.text.clone()));
        }

        fn present(&mut self) -> Result<()> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    fn rect(x: u32, y: u32) -> PixelRect {
        PixelRect {
            x,
            y,
            width: 20,
            height: 20,
        }
    }

    #[test]
    fn test_cell_rect_scales_by_grid_size() {
        let scene = Scene::new(&GameConfig::default());
        assert_eq!(scene.cell_rect(Position::new(0, 0)), rect(0, 0));
        assert_eq!(scene.cell_rect(Position::new(39, 29)), rect(780, 580));
    }

    #[test]
    fn test_frame_order_while_alive() {
        let config = GameConfig::default();
        let scene = Scene::new(&config);
        let mut state = SimulationState::with_seed(config, 3);
        let body = vec![Position::new(5, 5), Position::new(4, 5)];
        assert!(state.place_snake(body, Direction::Right));
        assert!(state.place_food(Position::new(10, 2)));

        let mut recorder = Recorder::default();
        scene.draw(&state, &mut recorder).unwrap();

        assert_eq!(
            recorder.calls,
            vec![
                Call::Clear(Color::Black),
                Call::Rect(rect(200, 40), Color::Red),
                Call::Rect(rect(100, 100), Color::Green),
                Call::Rect(rect(80, 100), Color::Green),
                Call::Present,
            ]
        );
    }

    #[test]
    fn test_overlay_only_when_game_over() {
        let config = GameConfig::default();
        let scene = Scene::new(&config);
        let mut state = SimulationState::with_seed(config, 3);
        assert!(state.place_snake(vec![Position::new(0, 0)], Direction::Right));
        assert!(state.set_heading(Direction::Up));
        state.tick();
        assert!(state.is_game_over());

        let mut recorder = Recorder::default();
        scene.draw(&state, &mut recorder).unwrap();

        assert_eq!(
            recorder.calls[recorder.calls.len() - 2],
            Call::Text("Game Over! Press R to Restart".to_string())
        );
        assert_eq!(recorder.calls.last(), Some(&Call::Present));
    }

    #[test]
    fn test_overlay_position() {
        let scene = Scene::new(&GameConfig::default());
        assert_eq!(scene.game_over.x, 200);
        assert_eq!(scene.game_over.y, 300);
        assert_eq!(scene.game_over.size, 40);
        assert_eq!(scene.game_over.color, Color::Red);
    }

    #[test]
    fn test_overlay_names_the_restart_binding() {
        use crate::input::{map_key, GameKey, KeyAction};
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let text = game_over_text();
        let named = text
            .strip_prefix("Game Over! Press ")
            .and_then(|rest| rest.chars().next())
            .unwrap();

        let key = KeyEvent::new(KeyCode::Char(named), KeyModifiers::SHIFT);
        assert_eq!(map_key(key), KeyAction::Press(GameKey::Restart));
    }
}
