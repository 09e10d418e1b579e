//! The narrow contract between the search and a game board.
//!
//! The search never looks inside a board. It only enumerates moves, applies a
//! move, undoes it again and asks where a side currently stands. Anything that
//! honours these four operations can be searched.

use std::fmt::Debug;

use smallvec::SmallVec;

use super::Side;

/// Destinations reachable in one ply, in enumeration order
pub type MoveList<C> = SmallVec<[C; 32]>;

/// Board Adapter consumed by the search.
///
/// # Contract
///
/// - `legal_moves` is pure and returns an empty list iff the player standing
///   on `from` cannot move. The order must be deterministic: the search keeps
///   the first move among equally scored ones.
/// - `apply_move` returns the cell the side vacated. Every call must be paired
///   with an `undo_move` using that origin, which restores the board exactly.
/// - `current_position` is a pure lookup.
pub trait GameBoard {
    type Cell: Copy + Eq + Debug;

    fn legal_moves(&self, from: Self::Cell) -> MoveList<Self::Cell>;

    fn apply_move(&mut self, side: Side, destination: Self::Cell) -> Self::Cell;

    fn undo_move(&mut self, side: Side, origin: Self::Cell, destination: Self::Cell);

    fn current_position(&self, side: Side) -> Self::Cell;

    /// Number of legal moves available to `side` from where it stands
    fn mobility(&self, side: Side) -> usize {
        self.legal_moves(self.current_position(side)).len()
    }
}
