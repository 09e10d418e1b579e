use super::DIRECTIONS;
use crate::game_repr::{Board, Cell, MoveList};

impl Board {
    pub(crate) fn king_moves_into(&self, from: Cell, moves: &mut MoveList<Cell>) {
        for &(dr, dc) in &DIRECTIONS {
            if let Some(target) = from.offset(dr, dc, self.rows(), self.cols()) {
                if self.tile(target).is_empty() {
                    moves.push(target);
                }
            }
        }
    }
}
