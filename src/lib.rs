//! Alpha-beta minimax search for the two-player blocking game Isolation.
//!
//! Two players each own a single token on a rectangular grid. A move picks
//! a destination reachable under the board's [`MovePattern`]; the vacated
//! cell is blocked for the rest of the game. Whoever cannot move loses.
//!
//! The search in [`agent::ai`] works against any [`GameBoard`]; [`Board`]
//! is the grid implementation shipped with the crate.
//!
//! ```
//! use isolation_engine::{search, Board, SearchConfig, Side};
//!
//! let mut board = Board::default();
//! let result = search(&mut board, Side::One, &SearchConfig::with_depth(2));
//! assert!(result.best_move.is_some());
//! assert_eq!(board, Board::default());
//! ```

pub mod agent;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use agent::ai::{
    best_move, evaluate, minimax, search, search_parallel, Difficulty, Pruning, Role, Score,
    SearchConfig, SearchPlayer, SearchResult,
};
pub use agent::{GameResult, Player, RandomPlayer};
pub use error::{Error, Result};
pub use game_repr::{Board, BoardConfig, Cell, GameBoard, MovePattern, Side, Tile};
pub use orchestrator::{Orchestrator, TurnOutcome};
