mod board;
mod cell;
mod game_board;
mod patterns;

#[cfg(test)]
mod tests;

pub use board::*;
pub use cell::*;
pub use game_board::*;
pub use patterns::MovePattern;
