use rand::Rng;

use crate::core::{Board, CellId, Outcome, PlayerMark};
use crate::engine::{evaluate, random_move};

/// A candidate cell and its score, carried up through the recursion.
#[derive(Debug, Clone, Copy)]
struct SearchResult {
    index: Option<CellId>,
    score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self { index: None, score }
    }
}

/// The full-search strategy. Never loses, and converts every forced win.
///
/// An untouched board is played at random: by symmetry the search would
/// always pick the same opening, which is both exploitable and a waste of the
/// deepest search the game ever sees. From any other position the move is
/// deterministic.
pub fn minimax_move(
    board: &Board,
    ai: PlayerMark,
    player: PlayerMark,
    rng: &mut impl Rng,
) -> Board {
    if board.is_untouched() {
        return random_move(board, ai, rng);
    }
    let best = minimax(board, true, ai, player, 0);
    let index = best
        .index
        .expect("a non-terminal board has at least one candidate");
    board.with_mark(index, ai)
}

/// Score a position by exhaustive adversarial search.
///
/// Terminal scores are depth-adjusted: a win counts `10 - depth` and a loss
/// `depth - 10`, so the search prefers the quickest win and drags out an
/// unavoidable loss. Draws are 0. Among equal scores the first candidate in
/// index order is kept.
fn minimax(
    board: &Board,
    maximizing: bool,
    ai: PlayerMark,
    player: PlayerMark,
    depth: i32,
) -> SearchResult {
    match evaluate(board) {
        Outcome::Won(mark) if mark == ai => return SearchResult::leaf(10 - depth),
        Outcome::Won(_) => return SearchResult::leaf(depth - 10),
        Outcome::Draw => return SearchResult::leaf(0),
        Outcome::InProgress => {}
    }
    let candidates = board.empty_cells();
    if maximizing {
        // An immediate win always scores best at this depth, so skip the
        // recursion. The returned score is exactly what recursing would give.
        for &cell in &candidates {
            if evaluate(&board.with_mark(cell, ai)) == Outcome::Won(ai) {
                return SearchResult {
                    index: Some(cell),
                    score: 10 - (depth + 1),
                };
            }
        }
        let mut best = SearchResult::leaf(i32::MIN);
        for &cell in &candidates {
            let child = board.with_mark(cell, ai);
            let result = minimax(&child, false, ai, player, depth + 1);
            if result.score > best.score {
                best = SearchResult {
                    index: Some(cell),
                    score: result.score,
                };
            }
        }
        best
    } else {
        let mut best = SearchResult::leaf(i32::MAX);
        for &cell in &candidates {
            let child = board.with_mark(cell, player);
            let result = minimax(&child, true, ai, player, depth + 1);
            if result.score < best.score {
                best = SearchResult {
                    index: Some(cell),
                    score: result.score,
                };
            }
        }
        best
    }
}
