use log::debug;

use crate::core::{Board, Outcome, Player, PlayerMark};
use crate::engine::evaluate;

/// Alternate two players until the evaluator reports a terminal outcome.
///
/// The host decides who moves first; the loop never calls a player once the
/// game is over, so the players may assume a non-full board.
pub fn run_game(
    mut naughts: Box<dyn Player>,
    mut crosses: Box<dyn Player>,
    first: PlayerMark,
) -> Outcome {
    let mut board = Board::default();
    let mut current = first;
    while evaluate(&board) == Outcome::InProgress {
        board = match current {
            PlayerMark::Naught => naughts.play(&board),
            PlayerMark::Cross => crosses.play(&board),
        };
        debug!("player {} moved:\n{}", current, board);
        current = current.other();
    }
    let outcome = evaluate(&board);
    debug!("game over with {:?}", outcome);
    outcome
}
