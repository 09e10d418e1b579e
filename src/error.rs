//! Error types for the isolation engine
//!
//! The search itself never fails: a stuck player is a scored outcome, not an
//! error. These variants cover building boards, parsing layouts and names,
//! and validating moves handed in by players during a match.

use thiserror::Error;

use crate::game_repr::{Cell, Side};

/// Errors that can occur outside the search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Board dimensions outside the supported range
    #[error("invalid board dimensions {rows}x{cols} (each side must be 1..={max})")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },

    /// Cell lies outside the board
    #[error("cell {cell} is outside the {rows}x{cols} board")]
    OutOfBounds { cell: Cell, rows: u8, cols: u8 },

    /// Both players were placed on the same cell
    #[error("both players cannot share cell {cell}")]
    SharedCell { cell: Cell },

    /// Layout contains a character that is not a tile
    #[error("unexpected character '{character}' at row {row}, column {col}")]
    InvalidCharacter { character: char, row: usize, col: usize },

    /// Layout rows have different lengths
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, got: usize, expected: usize },

    /// Player marker missing from a layout
    #[error("player {side} is missing from the layout")]
    MissingPlayer { side: Side },

    /// Player marker appears more than once in a layout
    #[error("player {side} appears more than once in the layout")]
    DuplicatePlayer { side: Side },

    /// Move is not legal in the current position
    #[error("player {side} cannot move from {from} to {to}")]
    IllegalMove { side: Side, from: Cell, to: Cell },

    /// Unknown name for a configuration value
    #[error("unknown {kind} '{name}' (expected one of: {expected})")]
    UnknownName {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },

    /// Move requested after the game finished
    #[error("game already over")]
    GameOver,
}

/// Result type alias for fallible engine operations
pub type Result<T> = std::result::Result<T, Error>;
