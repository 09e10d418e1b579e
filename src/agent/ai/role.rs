use crate::game_repr::Side;

use super::score::Score;

/// Which end of the score scale the side to move is pushing towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The searching side
    Maximizer,
    /// Its opponent
    Minimizer,
}

impl Role {
    pub fn opposite(&self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    /// Seat playing this role when `maximizer` is the searching side
    pub fn side(&self, maximizer: Side) -> Side {
        match self {
            Role::Maximizer => maximizer,
            Role::Minimizer => maximizer.opposite(),
        }
    }

    /// Strictly better for this role. Equal scores never replace the
    /// incumbent, so the earliest enumerated move wins ties.
    pub fn prefers(&self, candidate: Score, incumbent: Score) -> bool {
        match self {
            Role::Maximizer => candidate > incumbent,
            Role::Minimizer => candidate < incumbent,
        }
    }
}

/// Where each role currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats<C> {
    pub maximizer: C,
    pub minimizer: C,
}

impl<C: Copy> Seats<C> {
    pub fn at(&self, role: Role) -> C {
        match role {
            Role::Maximizer => self.maximizer,
            Role::Minimizer => self.minimizer,
        }
    }

    /// Copy with `role` relocated to `cell`
    pub fn moved(&self, role: Role, cell: C) -> Seats<C> {
        let mut seats = *self;
        match role {
            Role::Maximizer => seats.maximizer = cell,
            Role::Minimizer => seats.minimizer = cell,
        }
        seats
    }
}
