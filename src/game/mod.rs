mod board;
mod direction;
mod food;
mod render;
mod snake;
pub(crate) use self::board::Board;
pub(crate) use self::direction::Direction;
use self::snake::Snake;
use crate::consts;
use crate::options::Options;
use rand::Rng;
use ratatui::layout::Position;
use std::time::Duration;

/// The complete state of one game of snake
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    options: Options,
    board: Board,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    tick: Duration,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(board: Board) -> Self {
        Game::new_with_rng(board, Options::default(), rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(board: Board, options: Options, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            options,
            board,
            snake: Snake::new(board.center(), consts::INITIAL_SNAKE_LENGTH),
            food: None,
            score: 0,
            tick: options.initial_tick,
            state: GameState::Running,
        };
        game.reset(board);
        game
    }

    /// Start a new game on `board`
    pub(crate) fn reset(&mut self, board: Board) {
        self.board = board;
        self.snake = Snake::new(board.center(), consts::INITIAL_SNAKE_LENGTH);
        self.score = 0;
        self.tick = self.options.initial_tick;
        self.state = GameState::Running;
        self.place_food();
        tracing::info!(
            width = board.width,
            height = board.height,
            "new game started"
        );
    }

    /// Move the snake forwards one cell, checking for collisions and food.
    /// Does nothing once the game is over.
    pub(crate) fn step(&mut self) {
        if self.game_over() {
            return;
        }
        let board = self.board;
        let Some(head) = self
            .snake
            .direction()
            .advance(self.snake.head())
            .filter(|&p| board.contains(p))
        else {
            tracing::debug!("snake hit the wall");
            self.end(GameState::Dead);
            return;
        };
        if self.snake.contains(head) {
            tracing::debug!(x = head.x, y = head.y, "snake hit itself");
            self.end(GameState::Dead);
            return;
        }
        let ate = self.food == Some(head);
        self.snake.advance(head, ate);
        if ate {
            self.score = self.score.saturating_add(self.options.food_points);
            tracing::debug!(score = self.score, "food eaten");
            let tick = self.options.next_tick(self.tick, self.score);
            if tick != self.tick {
                tracing::debug!(tick = ?tick, "speeding up");
                self.tick = tick;
            }
            self.place_food();
        }
    }

    fn place_food(&mut self) {
        self.food = food::generate_food(&mut self.rng, self.board, &self.snake.occupied());
        if self.food.is_none() {
            tracing::debug!("no room left for food");
            self.end(GameState::Exhausted);
        }
    }
}

impl<R> Game<R> {
    /// Point the snake in `direction`.  Requests to reverse straight back
    /// into the snake's body are ignored.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if !self.snake.turn(direction) {
            tracing::trace!(?direction, "ignoring reversal");
        }
    }

    pub(crate) fn board(&self) -> Board {
        self.board
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// How long to wait for input on each pass through the game loop
    pub(crate) fn tick_interval(&self) -> Duration {
        self.tick
    }

    pub(crate) fn game_over(&self) -> bool {
        self.state != GameState::Running
    }

    fn end(&mut self, state: GameState) {
        self.state = state;
        tracing::info!(
            score = self.score,
            length = self.snake_len(),
            "game over"
        );
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    /// The snake ran into a wall or itself.
    Dead,
    /// The snake has filled the board and there are no more spaces to place
    /// food in.
    Exhausted,
}
