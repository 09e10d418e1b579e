// Property and scenario suites for the search


use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::game_repr::{Board, BoardConfig, GameBoard, MovePattern, Side};

/// Fresh `rows x cols` board after up to `plies` random moves, alternating
/// from `Side::One`. Stops early if the side to move is stuck.
fn random_position(pattern: MovePattern, rows: u8, cols: u8, plies: usize, rng: &mut StdRng) -> Board {
    let mut board = Board::new(&BoardConfig { rows, cols, pattern }).expect("valid board");
    let mut side = Side::One;
    for _ in 0..plies {
        let moves = board.legal_moves(board.current_position(side));
        let Some(&dest) = moves.choose(rng) else {
            break;
        };
        board.apply_move(side, dest);
        side = side.opposite();
    }
    board
}
