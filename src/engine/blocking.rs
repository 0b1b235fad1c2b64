use rand::Rng;

use crate::core::{Board, Outcome, PlayerMark};
use crate::engine::{evaluate, random_move};

/// The one-ply-lookahead strategy: take an immediate win, else deny the
/// opponent theirs, else play at random.
///
/// Within each tier the first qualifying cell in index order is taken, so the
/// strategy is deterministic until the random fallback. It never looks two
/// plies ahead and a fork beats it.
pub fn blocking_move(
    board: &Board,
    player: PlayerMark,
    ai: PlayerMark,
    rng: &mut impl Rng,
) -> Board {
    let candidates = board.empty_cells();

    // our own winning move outranks any block
    for &cell in &candidates {
        if evaluate(&board.with_mark(cell, ai)) == Outcome::Won(ai) {
            return board.with_mark(cell, ai);
        }
    }

    for &cell in &candidates {
        if evaluate(&board.with_mark(cell, player)) == Outcome::Won(player) {
            return board.with_mark(cell, ai);
        }
    }

    random_move(board, ai, rng)
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::core::CellId;

    #[test]
    fn blocks_an_open_row() {
        let mut rng = StdRng::seed_from_u64(0);
        let b = Board::from_str("xx       ").unwrap();
        let after = blocking_move(&b, PlayerMark::Cross, PlayerMark::Naught, &mut rng);
        assert_eq!(after.cell(CellId(2)), Some(PlayerMark::Naught));
    }

    #[test]
    fn takes_win_over_block() {
        // Naughts lead the top row, crosses the middle row. Completing our
        // own line beats denying theirs.
        let mut rng = StdRng::seed_from_u64(0);
        let b = Board::from_str("oo xx    ").unwrap();
        let after = blocking_move(&b, PlayerMark::Cross, PlayerMark::Naught, &mut rng);
        assert_eq!(after.cell(CellId(2)), Some(PlayerMark::Naught));
        assert_eq!(after.cell(CellId(5)), None);
    }

    #[test]
    fn first_cell_in_index_order_breaks_ties() {
        // A fork: crosses win at 2 (top row) or 6 (left column). The block
        // must land on the lower index.
        let mut rng = StdRng::seed_from_u64(0);
        let b = Board::from_str("xx x     ").unwrap();
        let after = blocking_move(&b, PlayerMark::Cross, PlayerMark::Naught, &mut rng);
        assert_eq!(after.cell(CellId(2)), Some(PlayerMark::Naught));
    }

    #[test]
    fn falls_back_to_a_legal_move() {
        let mut rng = StdRng::seed_from_u64(0);
        let b = Board::from_str("x        ").unwrap();
        let after = blocking_move(&b, PlayerMark::Cross, PlayerMark::Naught, &mut rng);
        assert_eq!(after.n_moves_made(), 2);
    }

    #[test]
    fn is_deterministic_outside_the_fallback() {
        let b = Board::from_str("xx  o    ").unwrap();
        let mut rng1 = StdRng::seed_from_u64(1);
        let mut rng2 = StdRng::seed_from_u64(2);
        let a1 = blocking_move(&b, PlayerMark::Cross, PlayerMark::Naught, &mut rng1);
        let a2 = blocking_move(&b, PlayerMark::Cross, PlayerMark::Naught, &mut rng2);
        assert_eq!(a1, a2);
    }
}
