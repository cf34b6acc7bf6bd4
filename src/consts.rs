//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Input poll timeout at the start of a game.  This is the main factor in
/// how fast the snake moves.
pub(crate) const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// The tick interval never drops below this
pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// How much the tick interval shrinks at each speed-up
pub(crate) const TICK_INTERVAL_STEP: Duration = Duration::from_millis(10);

/// The game speeds up every time the score reaches a multiple of this
pub(crate) const SPEEDUP_SCORE: u32 = 50;

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_POINTS: u32 = 10;

/// Fixed pause after each frame is drawn, on top of the input poll
pub(crate) const FRAME_PAUSE: Duration = Duration::from_millis(50);

/// Number of segments in a freshly-reset snake
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 3;

/// Random placements tried before food placement falls back to scanning
/// every cell
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 1000;

/// The smallest terminal the game will start in
pub(crate) const MIN_TERMINAL_SIZE: Size = Size {
    width: 20,
    height: 10,
};

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '█';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '▓';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

pub(crate) const BORDER_TOP_LEFT: char = '┌';
pub(crate) const BORDER_TOP_RIGHT: char = '┐';
pub(crate) const BORDER_BOTTOM_LEFT: char = '└';
pub(crate) const BORDER_BOTTOM_RIGHT: char = '┘';
pub(crate) const BORDER_HORIZONTAL: char = '─';
pub(crate) const BORDER_VERTICAL: char = '│';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the score label on the top border
pub(crate) const SCORE_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the lines of the game-over message
pub(crate) const GAME_OVER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
