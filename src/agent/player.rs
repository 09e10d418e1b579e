//! Player trait and associated types for Isolation agents.
//!
//! Anything that can be asked for a move implements [`Player`]: the search
//! engine, a random mover, or a scripted opponent in tests. The
//! [`Orchestrator`](crate::orchestrator::Orchestrator) drives two of them
//! through a game.
//!
//! The trait does not define a constructor. Each implementation takes the
//! parameters it needs (search depth, RNG seed, ...).
//!
//! # Synchronous Design
//!
//! `get_move()` blocks until a move is chosen. A game is strictly turn based
//! and the search runs to completion, so there is nothing to await.

use std::fmt;

use crate::game_repr::{Board, Cell, Side};

/// Result of a completed game.
///
/// Isolation has no draws: the side to move without a legal move loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    OneWins,
    TwoWins,
}

impl GameResult {
    /// Create a GameResult from the winning side
    pub fn from_winner(winner: Side) -> Self {
        match winner {
            Side::One => GameResult::OneWins,
            Side::Two => GameResult::TwoWins,
        }
    }

    pub fn winner(&self) -> Side {
        match self {
            GameResult::OneWins => Side::One,
            GameResult::TwoWins => Side::Two,
        }
    }

    pub fn loser(&self) -> Side {
        self.winner().opposite()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} wins", self.winner())
    }
}

/// Trait for entities that can provide Isolation moves.
///
/// # Method Behavior
///
/// ## `get_move()`
/// - **Returns `Some(Cell)`**: the destination for `side`. The caller
///   validates it against the board.
/// - **Returns `None`**: the player has no move or resigns. Either way the
///   game is over and the opponent wins.
///
/// ## `opponent_moved()` / `game_ended()`
/// - Default: do nothing
///
/// ## `name()`
/// - Default: `"Player"`
pub trait Player {
    /// Request the next move for `side` on `board`.
    ///
    /// The board is only borrowed for reading; players that need to search
    /// work on their own copy.
    fn get_move(&mut self, board: &Board, side: Side) -> Option<Cell>;

    /// Notify this player that the opponent moved to `mv`.
    fn opponent_moved(&mut self, _mv: Cell) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Display name used in logs and summaries.
    fn name(&self) -> &str {
        "Player"
    }
}
