// Backed-up values and alpha-beta windows
//
// Forced outcomes are their own variants rather than huge integers, so a win
// or loss can never collide with a mobility score however large the board.
// The derived ordering compares variants first:
//     ForcedLoss < Heuristic(any) < ForcedWin

use std::fmt;

use super::role::Role;

/// Value of a node from the Maximizer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// The Maximizer runs out of moves
    ForcedLoss,
    /// Mobility difference at the search horizon
    Heuristic(i32),
    /// The Minimizer runs out of moves
    ForcedWin,
}

impl Score {
    pub const MIN: Score = Score::ForcedLoss;
    pub const MAX: Score = Score::ForcedWin;

    /// Score of a node where `stuck` is to move and has no legal move
    pub fn stranded(stuck: Role) -> Score {
        match stuck {
            Role::Maximizer => Score::ForcedLoss,
            Role::Minimizer => Score::ForcedWin,
        }
    }

    pub fn is_forced(&self) -> bool {
        !matches!(self, Score::Heuristic(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::ForcedLoss => f.write_str("loss"),
            Score::Heuristic(value) => write!(f, "{:+}", value),
            Score::ForcedWin => f.write_str("win"),
        }
    }
}

/// Alpha-beta bounds carried down the recursion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Best value the Maximizer is already guaranteed
    pub alpha: Score,
    /// Best value the Minimizer is already guaranteed
    pub beta: Score,
}

impl Window {
    /// Window that excludes nothing
    pub fn full() -> Self {
        Self {
            alpha: Score::MIN,
            beta: Score::MAX,
        }
    }

    /// Raise alpha or lower beta, depending on who just found `value`
    pub fn tighten(&mut self, role: Role, value: Score) {
        match role {
            Role::Maximizer => self.alpha = self.alpha.max(value),
            Role::Minimizer => self.beta = self.beta.min(value),
        }
    }

    /// Remaining siblings cannot change the parent's choice
    pub fn is_closed(&self) -> bool {
        self.alpha >= self.beta
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::full()
    }
}
