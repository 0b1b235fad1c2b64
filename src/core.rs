//! The core vocabulary for this application
//!

use anyhow::bail;
use clap::ValueEnum;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, ValueEnum)]
pub enum PlayerMark {
    #[value(alias = "x")]
    Cross,
    #[value(alias = "o")]
    Naught,
}

impl PlayerMark {
    pub fn other(&self) -> Self {
        match *self {
            Self::Cross => Self::Naught,
            Self::Naught => Self::Cross,
        }
    }
}

impl Display for PlayerMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cross => write!(f, "X"),
            Self::Naught => write!(f, "O"),
        }
    }
}

/// A cell on the board
///
///  0 1 2
///  3 4 5
///  6 7 8
///
/// invariant: the number inside must be 0-8
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct CellId(pub usize);

impl Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The board entries from top left, row wise, to bottom right.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Default)]
pub struct Board([Option<PlayerMark>; 9]);

impl Board {
    pub fn cell(&self, id: CellId) -> Option<PlayerMark> {
        self.0[id.0]
    }

    /// The cells where a marker may still be placed, in ascending index order.
    pub fn empty_cells(&self) -> Vec<CellId> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(num, &mark)| if mark.is_none() { Some(CellId(num)) } else { None })
            .collect()
    }

    pub fn place_mark(&mut self, a: CellId, marker: PlayerMark) {
        let num = a.0;
        if num >= 9 {
            panic!("Bad input!")
        }
        if self.0[num].is_some() {
            panic!("There is already a marker there! Invalid move just played!")
        }
        self.0[num] = Some(marker);
    }

    /// A copy of this board with one more marker placed. The engine works on
    /// snapshots, so this is its basic building block.
    pub fn with_mark(&self, a: CellId, marker: PlayerMark) -> Self {
        let mut next = *self;
        next.place_mark(a, marker);
        next
    }

    pub fn is_untouched(&self) -> bool {
        self.0.iter().all(|q| q.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|q| q.is_some())
    }

    pub fn n_moves_made(&self) -> usize {
        self.0.iter().filter(|q| q.is_some()).count()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 9 {
            bail!("A board string must hold exactly 9 characters");
        }
        let mut b = Self::default();
        for (num, c) in s.chars().enumerate() {
            match c {
                'x' | 'X' => b.place_mark(CellId(num), PlayerMark::Cross),
                'o' | 'O' => b.place_mark(CellId(num), PlayerMark::Naught),
                ' ' => {}
                _ => bail!("Invalid character {c:?}. May only contain x, o, or blank space"),
            }
        }
        Ok(b)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |m| match m {
            None => ' ',
            Some(PlayerMark::Cross) => 'X',
            Some(PlayerMark::Naught) => 'O',
        };
        writeln!(f, " ------- ")?;
        for row in self.0.chunks(3) {
            write!(f, "| ")?;
            row.iter().try_for_each(|&mark| write!(f, "{} ", m(mark)))?;
            writeln!(f, "|")?;
        }
        writeln!(f, " ------- ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
pub enum Outcome {
    InProgress,
    Draw,
    Won(PlayerMark),
}

/// How hard the machine opponent tries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    /// Plays an arbitrary legal move
    Easy,
    /// Takes its own wins, blocks yours, otherwise plays at random
    Normal,
    /// Full game-tree search. Does not lose.
    Hard,
}

impl Difficulty {
    /// Map the host-facing ordinal onto a strategy. Level 1 and 2 select the
    /// random and blocking strategies; every other value gets the full search.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Self::Easy,
            2 => Self::Normal,
            _ => Self::Hard,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Normal => 2,
            Self::Hard => 3,
        }
    }

    /// The next harder level, saturating at the top.
    pub fn harder(&self) -> Self {
        match self {
            Self::Easy => Self::Normal,
            Self::Normal | Self::Hard => Self::Hard,
        }
    }
}

/// The Player trait is the struct that represents a player.
pub trait Player {
    /// The play function is the main mechanic for the AIs.
    /// You observe the whole board through a reference, and can do whatever
    /// you like, and then you return the board with your move applied.
    fn play(&mut self, b: &Board) -> Board;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_a_board_string() {
        let b = Board::from_str("xo       ").unwrap();
        assert_eq!(b.cell(CellId(0)), Some(PlayerMark::Cross));
        assert_eq!(b.cell(CellId(1)), Some(PlayerMark::Naught));
        assert_eq!(b.n_moves_made(), 2);
        assert_eq!(b.empty_cells().len(), 7);
    }

    #[test]
    fn rejects_a_bad_board_string() {
        assert!(Board::from_str("xo").is_err());
        assert!(Board::from_str("xq       ").is_err());
    }

    #[test]
    #[should_panic]
    fn refuses_to_overwrite_a_marker() {
        let mut b = Board::from_str("x        ").unwrap();
        b.place_mark(CellId(0), PlayerMark::Naught);
    }

    #[test]
    fn maps_levels_onto_strategies() {
        assert_eq!(Difficulty::from_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(2), Difficulty::Normal);
        assert_eq!(Difficulty::from_level(3), Difficulty::Hard);
        // anything outside the dial still gets the full search
        assert_eq!(Difficulty::from_level(0), Difficulty::Hard);
        assert_eq!(Difficulty::from_level(9), Difficulty::Hard);
    }
}
