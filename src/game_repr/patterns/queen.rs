use super::DIRECTIONS;
use crate::game_repr::{Board, Cell, MoveList};

impl Board {
    pub(crate) fn queen_moves_into(&self, from: Cell, moves: &mut MoveList<Cell>) {
        for &(dr, dc) in &DIRECTIONS {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc, self.rows(), self.cols()) {
                if !self.tile(next).is_empty() {
                    break;
                }
                moves.push(next);
                current = next;
            }
        }
    }
}
