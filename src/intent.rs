use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player wants to happen, as derived from a single key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Intent {
    /// End the program
    Quit,

    /// Ctrl-C.  Ends the program like `Quit`, but is reported as an
    /// interruption.
    Interrupt,

    /// Start a new game.  Only produced once the current game is over.
    Restart,

    /// Turn the snake
    SetDirection(Direction),
}

impl Intent {
    /// Map a key press to an `Intent`.  Keys with no meaning in the current
    /// state map to `None`.
    pub(crate) fn from_key_event(ev: KeyEvent, game_over: bool) -> Option<Intent> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Intent::Interrupt);
        } else if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('q' | 'Q') => Some(Intent::Quit),
            KeyCode::Char('r' | 'R') => game_over.then_some(Intent::Restart),
            KeyCode::Char('w' | 'W') | KeyCode::Up => Some(Intent::SetDirection(Direction::Up)),
            KeyCode::Char('s' | 'S') | KeyCode::Down => Some(Intent::SetDirection(Direction::Down)),
            KeyCode::Char('a' | 'A') | KeyCode::Left => Some(Intent::SetDirection(Direction::Left)),
            KeyCode::Char('d' | 'D') | KeyCode::Right => {
                Some(Intent::SetDirection(Direction::Right))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('q'), false, Some(Intent::Quit))]
    #[case(KeyCode::Char('Q'), false, Some(Intent::Quit))]
    #[case(KeyCode::Char('q'), true, Some(Intent::Quit))]
    #[case(KeyCode::Char('r'), false, None)]
    #[case(KeyCode::Char('R'), false, None)]
    #[case(KeyCode::Char('r'), true, Some(Intent::Restart))]
    #[case(KeyCode::Char('R'), true, Some(Intent::Restart))]
    #[case(KeyCode::Up, false, Some(Intent::SetDirection(Direction::Up)))]
    #[case(KeyCode::Char('w'), false, Some(Intent::SetDirection(Direction::Up)))]
    #[case(KeyCode::Down, false, Some(Intent::SetDirection(Direction::Down)))]
    #[case(KeyCode::Char('S'), false, Some(Intent::SetDirection(Direction::Down)))]
    #[case(KeyCode::Left, false, Some(Intent::SetDirection(Direction::Left)))]
    #[case(KeyCode::Char('a'), false, Some(Intent::SetDirection(Direction::Left)))]
    #[case(KeyCode::Right, false, Some(Intent::SetDirection(Direction::Right)))]
    #[case(KeyCode::Char('d'), true, Some(Intent::SetDirection(Direction::Right)))]
    #[case(KeyCode::Char('x'), false, None)]
    #[case(KeyCode::Enter, true, None)]
    #[case(KeyCode::Esc, false, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] game_over: bool,
        #[case] intent: Option<Intent>,
    ) {
        assert_eq!(Intent::from_key_event(code.into(), game_over), intent);
    }

    #[test]
    fn shifted_letters() {
        let ev = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(Intent::from_key_event(ev, false), Some(Intent::Quit));
    }

    #[test]
    fn ctrl_c() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Intent::from_key_event(ev, false), Some(Intent::Interrupt));
        assert_eq!(Intent::from_key_event(ev, true), Some(Intent::Interrupt));
    }

    #[rstest]
    #[case(KeyModifiers::CONTROL, KeyCode::Char('q'))]
    #[case(KeyModifiers::ALT, KeyCode::Char('w'))]
    #[case(KeyModifiers::CONTROL, KeyCode::Up)]
    fn other_modifiers_ignored(#[case] modifiers: KeyModifiers, #[case] code: KeyCode) {
        let ev = KeyEvent::new(code, modifiers);
        assert_eq!(Intent::from_key_event(ev, true), None);
    }
}
