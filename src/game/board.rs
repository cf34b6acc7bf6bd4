use ratatui::layout::{Position, Rect, Size};

/// Dimensions of the playable interior of the board.
///
/// Positions on the board are in screen coordinates relative to the top-left
/// corner of the border, so the interior spans columns `1..=width` and rows
/// `1..=height`; row and column 0 (as well as `height + 1` and `width + 1`)
/// are the border.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Board {
    pub(crate) fn new(width: u16, height: u16) -> Board {
        Board { width, height }
    }

    /// Return the largest board whose border fits on a screen of the given
    /// size
    pub(crate) fn for_screen(size: Size) -> Board {
        Board::new(size.width.saturating_sub(2), size.height.saturating_sub(2))
    }

    /// Return the size of the board including its border
    pub(crate) fn screen_size(self) -> Size {
        Size {
            width: self.width.saturating_add(2),
            height: self.height.saturating_add(2),
        }
    }

    /// Is `pos` inside the interior?
    pub(crate) fn contains(self, pos: Position) -> bool {
        (1..=self.width).contains(&pos.x) && (1..=self.height).contains(&pos.y)
    }

    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Return the region in which food may be placed: every interior cell
    /// except those in the last row and last column.
    pub(crate) fn food_area(self) -> Rect {
        Rect::new(
            1,
            1,
            self.width.saturating_sub(1),
            self.height.saturating_sub(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(1, 1), true)]
    #[case(Position::new(20, 10), true)]
    #[case(Position::new(0, 5), false)]
    #[case(Position::new(5, 0), false)]
    #[case(Position::new(21, 5), false)]
    #[case(Position::new(5, 11), false)]
    fn test_contains(#[case] pos: Position, #[case] inside: bool) {
        assert_eq!(Board::new(20, 10).contains(pos), inside);
    }

    #[test]
    fn screen_round_trip() {
        let board = Board::for_screen(Size::new(80, 24));
        assert_eq!(board, Board::new(78, 22));
        assert_eq!(board.screen_size(), Size::new(80, 24));
    }

    #[test]
    fn tiny_screen() {
        assert_eq!(Board::for_screen(Size::new(1, 0)), Board::new(0, 0));
        assert!(Board::new(0, 0).food_area().is_empty());
    }

    #[test]
    fn food_area() {
        assert_eq!(Board::new(20, 10).food_area(), Rect::new(1, 1, 19, 9));
    }

    #[test]
    fn center() {
        assert_eq!(Board::new(20, 20).center(), Position::new(10, 10));
        assert_eq!(Board::new(7, 5).center(), Position::new(3, 2));
    }
}
