use super::board::Board;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use std::collections::HashSet;

/// Pick a random cell of `board`'s food area that is not in `occupied`.
///
/// Cells are sampled uniformly at random; if
/// [`MAX_FOOD_ATTEMPTS`][consts::MAX_FOOD_ATTEMPTS] samples all land on
/// occupied cells, a free cell is chosen from a scan of the whole area
/// instead.  Returns `None` if there are no free cells.
pub(super) fn generate_food<R: Rng>(
    rng: &mut R,
    board: Board,
    occupied: &HashSet<Position>,
) -> Option<Position> {
    let area = board.food_area();
    if area.is_empty() {
        return None;
    }
    for _ in 0..consts::MAX_FOOD_ATTEMPTS {
        let y = rng.random_range(area.top()..area.bottom());
        let x = rng.random_range(area.left()..area.right());
        let pos = Position::new(x, y);
        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }
    tracing::debug!("random food placement failed; scanning for a free cell");
    area.positions()
        .filter(|p| !occupied.contains(p))
        .choose(rng)
}
