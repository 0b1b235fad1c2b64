//! The move-selection engine.
//!
//! Three strategies of increasing strength, one outcome evaluator they all
//! share, and a selector that maps a difficulty onto a strategy. Every
//! function here is a pure board-snapshot-in, board-snapshot-out computation;
//! the only state a caller supplies is its RNG.

use rand::Rng;

use crate::core::{Board, CellId, Difficulty, Outcome, PlayerMark};

mod blocking;
mod minimax;
mod random;

pub use blocking::blocking_move;
pub use minimax::minimax_move;
pub use random::random_move;

/// The 8 ways to win: 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Decide whether the game is over, and how.
///
/// This is the single source of truth for terminal-state detection; all move
/// generators consult it so the difficulty levels agree on what a win is.
pub fn evaluate(board: &Board) -> Outcome {
    for [a, b, c] in WIN_LINES {
        if let Some(mark) = board.cell(CellId(a)) {
            if board.cell(CellId(b)) == Some(mark) && board.cell(CellId(c)) == Some(mark) {
                return Outcome::Won(mark);
            }
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Dispatch to the strategy the difficulty selects. Pure routing, no state.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    player: PlayerMark,
    ai: PlayerMark,
    rng: &mut impl Rng,
) -> Board {
    match difficulty {
        Difficulty::Easy => random_move(board, ai, rng),
        Difficulty::Normal => blocking_move(board, player, ai, rng),
        Difficulty::Hard => minimax_move(board, ai, player, rng),
    }
}
