use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::player::Player;
use crate::game_repr::{Board, Cell, GameBoard, Side};

/// Plays a uniformly random legal move.
///
/// Seeded, so games against it are reproducible.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: "Random".to_string(),
        }
    }

    pub fn with_name(seed: u64, name: String) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name,
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board, side: Side) -> Option<Cell> {
        let moves = board.legal_moves(board.current_position(side));
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
