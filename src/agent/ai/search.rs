// Move Selection
//
// Entry points used by players: resolve both positions from the board, search
// with the requesting side as Maximizer and a full window, and report the
// root move together with search statistics.
//
// `search_parallel` spreads the root moves over the rayon pool. Each task
// works on its own clone of the board, since apply/undo on a shared board is
// only safe while a single search owns it.

use std::time::Instant;

use rayon::prelude::*;

use super::minimax::{Minimax, Pruning, SearchStats};
use super::role::Role;
use super::score::{Score, Window};
use crate::game_repr::{GameBoard, Side};

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 3;

/// Parameters for one move search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead (0 = evaluate the current position only)
    pub max_depth: u8,
    pub pruning: Pruning,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            pruning: Pruning::AlphaBeta,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<C> {
    /// None when the side to move is stuck or the depth was 0
    pub best_move: Option<C>,
    pub score: Score,
    pub depth: u8,
    pub nodes_searched: u64,
    pub cutoffs: u64,
    pub time_ms: u64,
}

impl<C> SearchResult<C> {
    fn new(
        (score, best_move): (Score, Option<C>),
        depth: u8,
        stats: SearchStats,
        start_time: &Instant,
    ) -> Self {
        Self {
            best_move,
            score,
            depth,
            nodes_searched: stats.nodes,
            cutoffs: stats.cutoffs,
            time_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}

/// Pick a move for `side` by searching `depth` plies.
///
/// Returns None when `side` has no legal move, which means it has lost.
pub fn best_move<B: GameBoard>(board: &mut B, side: Side, depth: u8) -> Option<B::Cell> {
    search(board, side, &SearchConfig::with_depth(depth)).best_move
}

/// Search for the best move of `side`.
///
/// # Arguments
/// * `board` - Position to search; mutated during the search and restored
/// * `side` - Side to move, searched as the Maximizer
/// * `config` - Depth and pruning
///
/// # Returns
/// SearchResult containing the best move and search statistics
pub fn search<B: GameBoard>(board: &mut B, side: Side, config: &SearchConfig) -> SearchResult<B::Cell> {
    let start_time = Instant::now();
    warn_if_shallow(config);

    let mut minimax = Minimax::new(board, side, config.pruning);
    let seats = minimax.seats();
    let outcome = minimax.search(seats, config.max_depth, Window::full(), Role::Maximizer);

    let result = SearchResult::new(outcome, config.max_depth, minimax.stats(), &start_time);
    log_search_info(side, &result);
    result
}

/// Same result as [`search`], with the root moves searched in parallel.
///
/// Every root move gets a full window, so pruning only happens below the
/// root. The first strictly best move in enumeration order is selected,
/// exactly like the sequential search.
pub fn search_parallel<B>(board: &B, side: Side, config: &SearchConfig) -> SearchResult<B::Cell>
where
    B: GameBoard + Clone + Sync,
    B::Cell: Send + Sync,
{
    let start_time = Instant::now();
    let moves = board.legal_moves(board.current_position(side));

    // Nothing to spread out
    if moves.is_empty() || config.max_depth == 0 {
        let mut board = board.clone();
        return search(&mut board, side, config);
    }

    let children: Vec<(Score, SearchStats)> = moves
        .as_slice()
        .par_iter()
        .map(|&mv| {
            let mut child = board.clone();
            child.apply_move(side, mv);

            let mut minimax = Minimax::new(&mut child, side, config.pruning);
            let seats = minimax.seats();
            let (score, _) = minimax.search(seats, config.max_depth - 1, Window::full(), Role::Minimizer);
            (score, minimax.stats())
        })
        .collect();

    // The root itself counts as a node
    let mut stats = SearchStats { nodes: 1, cutoffs: 0 };
    let mut best: Option<(Score, B::Cell)> = None;

    for (&mv, (score, child_stats)) in moves.iter().zip(&children) {
        stats.merge(child_stats);
        log::debug!("root move {:?} score {} nodes {}", mv, score, child_stats.nodes);

        let improves = match best {
            Some((best_score, _)) => Role::Maximizer.prefers(*score, best_score),
            None => true,
        };
        if improves {
            best = Some((*score, mv));
        }
    }

    let outcome = match best {
        Some((score, mv)) => (score, Some(mv)),
        None => unreachable!("non-empty root move list produced no best move"),
    };
    let result = SearchResult::new(outcome, config.max_depth, stats, &start_time);
    log_search_info(side, &result);
    result
}

fn warn_if_shallow(config: &SearchConfig) {
    if config.max_depth == 0 {
        log::warn!("search requested with depth 0, only the current position is evaluated");
    }
}

/// Log search information for a completed search
fn log_search_info<C: std::fmt::Debug>(side: Side, result: &SearchResult<C>) {
    let nps = if result.time_ms > 0 {
        (result.nodes_searched as f64 / result.time_ms as f64 * 1000.0) as u64
    } else {
        result.nodes_searched
    };

    log::info!(
        "side {} depth {} score {} nodes {} cutoffs {} time {}ms nps {} best {:?}",
        side,
        result.depth,
        result.score,
        result.nodes_searched,
        result.cutoffs,
        result.time_ms,
        nps,
        result.best_move
    );
}
