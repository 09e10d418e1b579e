mod king;
mod knight;
mod queen;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a player may travel in one ply.
///
/// Every pattern only lands on empty squares; the queen additionally stops
/// sliding at the first square that is not empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovePattern {
    /// One step in any of the eight directions
    King,
    /// L-shaped jumps, ignoring what lies in between
    Knight,
    /// Any distance along the eight rays
    #[default]
    Queen,
}

/// The eight compass directions as (row, col) deltas
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl MovePattern {
    pub fn all() -> &'static [MovePattern] {
        &[MovePattern::King, MovePattern::Knight, MovePattern::Queen]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MovePattern::King => "king",
            MovePattern::Knight => "knight",
            MovePattern::Queen => "queen",
        }
    }
}

impl fmt::Display for MovePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MovePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "king" => Ok(MovePattern::King),
            "knight" => Ok(MovePattern::Knight),
            "queen" => Ok(MovePattern::Queen),
            _ => Err(Error::UnknownName {
                kind: "move pattern",
                name: s.to_string(),
                expected: "king, knight, queen",
            }),
        }
    }
}
