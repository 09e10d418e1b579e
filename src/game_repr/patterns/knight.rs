use crate::game_repr::{Board, Cell, MoveList};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn knight_moves_into(&self, from: Cell, moves: &mut MoveList<Cell>) {
        for &(dr, dc) in &KNIGHT_JUMPS {
            if let Some(target) = from.offset(dr, dc, self.rows(), self.cols()) {
                // Jumps ignore blockers on the way, only the landing square matters
                if self.tile(target).is_empty() {
                    moves.push(target);
                }
            }
        }
    }
}
