use rand::Rng;

use crate::core::{Board, PlayerMark};

/// Place `ai` on a uniformly random empty cell.
///
/// The caller must not invoke this on a full board; check with
/// [`evaluate`](super::evaluate) first.
pub fn random_move(board: &Board, ai: PlayerMark, rng: &mut impl Rng) -> Board {
    let moves = board.empty_cells();
    assert!(!moves.is_empty(), "no legal moves left on the board");
    let idx = rng.gen_range(0..moves.len());
    board.with_mark(moves[idx], ai)
}
