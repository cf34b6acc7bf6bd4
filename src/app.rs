use crate::consts;
use crate::game::{Board, Game};
use crate::intent::Intent;
use crate::surface::Surface;
use rand::Rng;
use std::io::{self, ErrorKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;

/// The game loop: poll for a key, update the game, redraw, pause, repeat.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,

    /// Raised from outside the loop when the process receives SIGINT
    interrupted: Arc<AtomicBool>,
}

impl App {
    pub(crate) fn new(board: Board, interrupted: Arc<AtomicBool>) -> App {
        App {
            game: Game::new(board),
            interrupted,
        }
    }
}

impl<R: Rng> App<R> {
    /// Run the game on `surface` until the player quits
    pub(crate) fn run(mut self, surface: &mut Surface) -> io::Result<Outcome> {
        loop {
            let key = match surface.poll_key(self.game.tick_interval()) {
                Ok(key) => key,
                Err(e) if e.kind() == ErrorKind::Interrupted => None,
                Err(e) => return Err(e),
            };
            let intent = key.and_then(|ev| Intent::from_key_event(ev, self.game.game_over()));
            if let Some(outcome) = self.tick(intent) {
                return Ok(outcome);
            }
            surface.present(&self.game)?;
            sleep(consts::FRAME_PAUSE);
        }
    }

    /// Act on the player's input for this pass through the loop and advance
    /// the game by one step.  Returns `Some` if the loop should end.
    fn tick(&mut self, intent: Option<Intent>) -> Option<Outcome> {
        if self.interrupted.load(Ordering::SeqCst) {
            tracing::info!(score = self.game.score(), "received interrupt signal");
            return Some(Outcome::Interrupted);
        }
        if let Some(outcome) = self.handle_intent(intent) {
            return Some(outcome);
        }
        self.game.step();
        None
    }

    fn handle_intent(&mut self, intent: Option<Intent>) -> Option<Outcome> {
        match intent {
            Some(Intent::Quit) => {
                tracing::info!(score = self.game.score(), "player quit");
                return Some(Outcome::Quit);
            }
            Some(Intent::Interrupt) => {
                tracing::info!(score = self.game.score(), "interrupted");
                return Some(Outcome::Interrupted);
            }
            Some(Intent::Restart) => self.game.reset(self.game.board()),
            Some(Intent::SetDirection(d)) => self.game.set_direction(d),
            None => (),
        }
        None
    }
}

/// How the game loop ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Quit,
    Interrupted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crate::options::Options;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        App {
            game: Game::new_with_rng(
                Board::new(20, 20),
                Options::default(),
                ChaCha12Rng::seed_from_u64(RNG_SEED),
            ),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Steer the snake straight into the top wall
    fn crash(app: &mut App<ChaCha12Rng>) {
        assert_eq!(app.tick(Some(Intent::SetDirection(Direction::Up))), None);
        while !app.game.game_over() {
            assert_eq!(app.tick(None), None);
        }
    }

    #[rstest]
    #[case(Intent::Quit, Outcome::Quit)]
    #[case(Intent::Interrupt, Outcome::Interrupted)]
    fn quit_while_playing(#[case] intent: Intent, #[case] outcome: Outcome) {
        let mut app = new_app();
        assert_eq!(app.tick(Some(intent)), Some(outcome));
    }

    #[test]
    fn interrupt_signal_ends_loop() {
        let mut app = new_app();
        let flag = Arc::clone(&app.interrupted);
        assert_eq!(app.tick(None), None);
        flag.store(true, Ordering::SeqCst);
        let before = app.game.clone();
        assert_eq!(
            app.tick(Some(Intent::SetDirection(Direction::Up))),
            Some(Outcome::Interrupted)
        );
        assert_eq!(app.game, before, "game advanced after interrupt");
    }

    #[test]
    fn interrupt_signal_after_game_over() {
        let mut app = new_app();
        crash(&mut app);
        app.interrupted.store(true, Ordering::SeqCst);
        assert_eq!(app.tick(None), Some(Outcome::Interrupted));
    }

    #[test]
    fn quit_after_game_over() {
        let mut app = new_app();
        crash(&mut app);
        assert_eq!(app.tick(Some(Intent::Quit)), Some(Outcome::Quit));
    }

    #[test]
    fn restart_after_game_over() {
        let mut app = new_app();
        crash(&mut app);
        let before = app.game.clone();
        assert_eq!(app.tick(None), None);
        assert_eq!(app.game, before, "game changed after game over");
        assert_eq!(app.handle_intent(Some(Intent::Restart)), None);
        assert!(!app.game.game_over());
        assert_eq!(app.game.snake_len(), 3);
        assert_eq!(app.game.score(), 0);
        assert_eq!(app.game.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn idle_tick_advances_game() {
        let mut app = new_app();
        let before = app.game.clone();
        assert_eq!(app.tick(None), None);
        assert_ne!(app.game, before);
    }
}
