use rand::{rngs::StdRng, SeedableRng};

use crate::core::{Board, Difficulty, Player, PlayerMark};
use crate::engine::select_move;

/// A machine player: a difficulty level plus an owned RNG.
///
/// The engine itself is stateless; the bot is the bit of state a host needs
/// to keep between turns.
pub struct Bot {
    mark: PlayerMark,
    difficulty: Difficulty,
    rng: StdRng,
}

impl Bot {
    pub fn new(mark: PlayerMark, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            mark,
            difficulty,
            rng: match seed {
                None => StdRng::from_entropy(),
                Some(seed) => StdRng::seed_from_u64(seed),
            },
        }
    }
}

impl Player for Bot {
    fn play(&mut self, b: &Board) -> Board {
        select_move(b, self.difficulty, self.mark.other(), self.mark, &mut self.rng)
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;
    use crate::core::CellId;

    #[test]
    fn bot_plays_with_its_own_mark() {
        let b = Board::from_str("xx       ").unwrap();
        let mut bot = Bot::new(PlayerMark::Naught, Difficulty::Normal, Some(3));
        let after = bot.play(&b);
        assert_eq!(after.cell(CellId(2)), Some(PlayerMark::Naught));
    }
}
