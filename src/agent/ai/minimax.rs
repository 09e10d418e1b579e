// Minimax Search with Alpha-Beta Pruning
//
// Scores are always from the Maximizer's point of view. Instead of a
// maximizing and a minimizing copy of the loop, one loop is parameterized by
// the Role to move: `Role::prefers` picks the better child and
// `Window::tighten` moves the matching bound.
//
// The board is mutated in place: apply, recurse, undo. The undo happens right
// after the recursive call returns and before any cutoff test, so every exit
// from the loop leaves the board as it found it.
//
// The function returns (score, best_move). best_move is None at terminal and
// horizon nodes.

use super::evaluation::evaluate;
use super::role::{Role, Seats};
use super::score::{Score, Window};
use crate::game_repr::{GameBoard, Side};

/// Whether the search cuts off siblings once the window closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pruning {
    #[default]
    AlphaBeta,
    /// Exhaustive minimax, for verification and benchmarking
    Disabled,
}

impl Pruning {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Pruning::AlphaBeta)
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, including terminal and horizon nodes
    pub nodes: u64,
    /// Times the remaining siblings were skipped
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// One recursive search over an exclusively borrowed board
pub struct Minimax<'a, B: GameBoard> {
    board: &'a mut B,
    maximizer: Side,
    pruning: Pruning,
    stats: SearchStats,
}

impl<'a, B: GameBoard> Minimax<'a, B> {
    pub fn new(board: &'a mut B, maximizer: Side, pruning: Pruning) -> Self {
        Self {
            board,
            maximizer,
            pruning,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Positions of both roles as the board currently has them
    pub fn seats(&self) -> Seats<B::Cell> {
        Seats {
            maximizer: self.board.current_position(self.maximizer),
            minimizer: self.board.current_position(self.maximizer.opposite()),
        }
    }

    /// Search the subtree below the current board with `to_move` to play.
    ///
    /// # Arguments
    ///
    /// * `seats` - Where both roles stand; must match the board
    /// * `depth` - Remaining plies (0 = evaluate)
    /// * `window` - Alpha-beta bounds inherited from the parent
    /// * `to_move` - Role whose turn it is at this node
    pub fn search(
        &mut self,
        seats: Seats<B::Cell>,
        depth: u8,
        mut window: Window,
        to_move: Role,
    ) -> (Score, Option<B::Cell>) {
        self.stats.nodes += 1;

        let side = to_move.side(self.maximizer);
        let from = seats.at(to_move);
        debug_assert_eq!(
            self.board.current_position(side),
            from,
            "board and search disagree on where {} stands",
            side
        );

        let moves = self.board.legal_moves(from);

        // Stuck player loses, whatever depth is left
        if moves.is_empty() {
            return (Score::stranded(to_move), None);
        }

        if depth == 0 {
            return (Score::Heuristic(evaluate(&*self.board, self.maximizer)), None);
        }

        let mut best: Option<(Score, B::Cell)> = None;

        for mv in moves {
            let origin = self.board.apply_move(side, mv);
            debug_assert_eq!(origin, from);

            let (score, _) = self.search(
                seats.moved(to_move, mv),
                depth - 1,
                window,
                to_move.opposite(),
            );

            self.board.undo_move(side, origin, mv);

            let improves = match best {
                Some((best_score, _)) => to_move.prefers(score, best_score),
                None => true,
            };
            if improves {
                best = Some((score, mv));
            }

            window.tighten(to_move, score);
            if self.pruning.is_enabled() && window.is_closed() {
                self.stats.cutoffs += 1;
                break;
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            None => unreachable!("non-empty move list produced no best move"),
        }
    }
}

/// Search from the board's current positions with a full window.
///
/// The board is borrowed mutably for the duration of the call and is restored
/// exactly before returning.
pub fn minimax<B: GameBoard>(
    board: &mut B,
    maximizer: Side,
    depth: u8,
    to_move: Role,
    pruning: Pruning,
) -> (Score, Option<B::Cell>) {
    let mut search = Minimax::new(board, maximizer, pruning);
    let seats = search.seats();
    search.search(seats, depth, Window::full(), to_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Board, Cell, MovePattern};

    fn king_board(layout: &str) -> Board {
        Board::from_layout(layout, MovePattern::King).unwrap()
    }

    #[test]
    fn test_depth_zero_is_heuristic() {
        let mut board = Board::default();
        let expected = Score::Heuristic(evaluate(&board, Side::One));

        for role in [Role::Maximizer, Role::Minimizer] {
            let (score, mv) = minimax(&mut board, Side::One, 0, role, Pruning::AlphaBeta);
            assert_eq!(score, expected);
            assert!(mv.is_none(), "depth 0 should not return a move");
        }
    }

    #[test]
    fn test_stuck_mover_is_terminal_at_any_depth() {
        // Two is boxed in, One still has room
        let mut board = king_board(
            "1...
             ....
             ..##
             ..#2",
        );
        for depth in 0..4 {
            let (score, mv) = minimax(&mut board, Side::One, depth, Role::Minimizer, Pruning::AlphaBeta);
            assert_eq!(score, Score::ForcedWin);
            assert!(mv.is_none());

            let (score, _) = minimax(&mut board, Side::Two, depth, Role::Maximizer, Pruning::AlphaBeta);
            assert_eq!(score, Score::ForcedLoss);
        }
    }

    #[test]
    fn test_minimizer_picks_lowest() {
        // Two at (0,2) can go to (0,1), (1,1) or (1,2)
        let mut board = king_board(
            "1.2
             ...
             ###",
        );
        let (score, mv) = minimax(&mut board, Side::One, 1, Role::Minimizer, Pruning::Disabled);

        // (0,1) and (1,1) both hold One to 2 moves against 3; (1,2) gives +1.
        // The earlier of the tied moves is kept.
        assert_eq!(mv, Some(Cell::new(0, 1)));
        assert_eq!(score, Score::Heuristic(2 - 3));
    }

    #[test]
    fn test_board_restored_after_cutoffs() {
        let mut board = Board::default();
        let before = board.clone();
        let mut search = Minimax::new(&mut board, Side::Two, Pruning::AlphaBeta);
        let seats = search.seats();
        search.search(seats, 3, Window::full(), Role::Maximizer);

        assert!(search.stats().cutoffs > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats { nodes: 3, cutoffs: 1 };
        total.merge(&SearchStats { nodes: 4, cutoffs: 2 });
        assert_eq!(total, SearchStats { nodes: 7, cutoffs: 3 });
    }
}
