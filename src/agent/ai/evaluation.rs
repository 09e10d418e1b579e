// Position evaluation function
// Returns the mobility difference (positive = good for the maximizing side)

use crate::game_repr::{GameBoard, Side};

/// Legal moves for `maximizer` minus legal moves for its opponent.
///
/// Reads the board only. Terminal positions are scored by the search before
/// this is ever consulted, so a zero-mobility side here just counts as 0.
pub fn evaluate<B: GameBoard + ?Sized>(board: &B, maximizer: Side) -> i32 {
    let own = board.mobility(maximizer) as i32;
    let theirs = board.mobility(maximizer.opposite()) as i32;
    own - theirs
}
