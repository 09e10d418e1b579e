// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the Isolation AI: a fixed-depth minimax search with
// alpha-beta pruning over any board that implements `GameBoard`.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Mobility-difference evaluation at the search horizon
// - Forced wins and losses as tagged scores that dominate any evaluation
// - In-place apply/undo instead of copying the board per node
// - Optional root-parallel search on the rayon pool

mod evaluation;
mod minimax;
mod role;
mod score;
mod search;
mod search_player;

#[cfg(test)]
mod tests;

pub use evaluation::evaluate;
pub use minimax::{minimax, Minimax, Pruning, SearchStats};
pub use role::{Role, Seats};
pub use score::{Score, Window};
pub use search::{best_move, search, search_parallel, SearchConfig, SearchResult, DEFAULT_DEPTH};
pub use search_player::{Difficulty, SearchPlayer};
