use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Error;
use crate::game_repr::{Board, BoardConfig, Cell, GameBoard, MovePattern, Side, Tile};

// ==================== HELPER FUNCTIONS ====================

fn layout(text: &str, pattern: MovePattern) -> Board {
    Board::from_layout(text, pattern).expect("valid layout")
}

fn cells(pairs: &[(u8, u8)]) -> Vec<Cell> {
    pairs.iter().map(|&(r, c)| Cell::new(r, c)).collect()
}

/// Plays `plies` random moves, alternating from `Side::One`, stopping early
/// when the side to move is stuck.
fn random_playout(board: &mut Board, plies: usize, rng: &mut StdRng) -> Side {
    let mut side = Side::One;
    for _ in 0..plies {
        let moves = board.legal_moves(board.current_position(side));
        match moves.choose(rng) {
            Some(&dest) => {
                board.apply_move(side, dest);
            }
            None => break,
        }
        side = side.opposite();
    }
    side
}

// ==================== MOVE GENERATION ====================

#[test]
fn test_king_moves_all_directions() {
    let board = layout(
        ".....
         .....
         ..1..
         .....
         ....2",
        MovePattern::King,
    );
    let moves = board.legal_moves(Cell::new(2, 2));
    assert_eq!(
        moves.to_vec(),
        cells(&[(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)])
    );
}

#[test]
fn test_king_moves_from_corner() {
    let board = Board::new(&BoardConfig {
        rows: 5,
        cols: 5,
        pattern: MovePattern::King,
    })
    .unwrap();
    let moves = board.legal_moves(board.current_position(Side::One));
    assert_eq!(moves.to_vec(), cells(&[(0, 1), (1, 0), (1, 1)]));
}

#[test]
fn test_knight_jumps_over_blocked() {
    let board = layout(
        "1#...
         ##...
         .....
         .....
         ....2",
        MovePattern::Knight,
    );
    let moves = board.legal_moves(Cell::new(0, 0));
    assert_eq!(moves.to_vec(), cells(&[(1, 2), (2, 1)]));
}

#[test]
fn test_knight_cannot_land_on_blocked_or_opponent() {
    let board = layout(
        "1....
         ..#..
         .2...
         .....
         .....",
        MovePattern::Knight,
    );
    assert!(board.legal_moves(Cell::new(0, 0)).is_empty());
    assert!(board.is_stuck(Side::One));
}

#[test]
fn test_queen_slides_until_blocked() {
    let board = layout(
        "1..#.
         .....
         ..2..
         .....
         #....",
        MovePattern::Queen,
    );
    let moves = board.legal_moves(Cell::new(0, 0));
    // Right stops at the wall, the diagonal stops before the opponent
    assert_eq!(
        moves.to_vec(),
        cells(&[(0, 1), (0, 2), (1, 0), (1, 1), (2, 0), (3, 0)])
    );
}

#[test]
fn test_default_board_queen_mobility() {
    let board = Board::default();
    assert_eq!(board, Board::new(&BoardConfig::default()).unwrap());
    // 6 along the row, 6 down the column, 5 on the diagonal before the opponent
    assert_eq!(board.mobility(Side::One), 17);
    assert_eq!(board.mobility(Side::Two), 17);
}

#[test]
fn test_moves_are_row_major() {
    let mut rng = StdRng::seed_from_u64(7);
    for &pattern in MovePattern::all() {
        let mut board = Board::new(&BoardConfig {
            rows: 6,
            cols: 6,
            pattern,
        })
        .unwrap();
        random_playout(&mut board, 6, &mut rng);
        for side in [Side::One, Side::Two] {
            let moves = board.legal_moves(board.current_position(side));
            assert!(
                moves.windows(2).all(|w| w[0] < w[1]),
                "{} moves not sorted: {:?}",
                pattern,
                moves
            );
        }
    }
}

// ==================== APPLY / UNDO ====================

#[test]
fn test_apply_blocks_origin() {
    let mut board = Board::default();
    let origin = board.apply_move(Side::One, Cell::new(0, 3));

    assert_eq!(origin, Cell::new(0, 0));
    assert_eq!(board.tile(origin), Tile::Blocked);
    assert_eq!(board.tile(Cell::new(0, 3)), Tile::Occupied(Side::One));
    assert_eq!(board.current_position(Side::One), Cell::new(0, 3));
}

#[test]
fn test_apply_undo_round_trip_every_move() {
    let mut rng = StdRng::seed_from_u64(42);
    for &pattern in MovePattern::all() {
        for plies in 0..8 {
            let mut board = Board::new(&BoardConfig {
                rows: 5,
                cols: 6,
                pattern,
            })
            .unwrap();
            random_playout(&mut board, plies, &mut rng);

            for side in [Side::One, Side::Two] {
                let before = board.clone();
                for dest in board.legal_moves(board.current_position(side)) {
                    let origin = board.apply_move(side, dest);
                    assert_ne!(board, before);
                    board.undo_move(side, origin, dest);
                    assert_eq!(board, before, "{} undo of {} -> {}", pattern, origin, dest);
                }
            }
        }
    }
}

#[test]
fn test_play_rejects_illegal_move() {
    let mut board = Board::default();
    let before = board.clone();
    let err = board.play(Side::One, Cell::new(1, 2)).unwrap_err();

    assert_eq!(
        err,
        Error::IllegalMove {
            side: Side::One,
            from: Cell::new(0, 0),
            to: Cell::new(1, 2),
        }
    );
    assert_eq!(board, before);
    assert_eq!(board.play(Side::One, Cell::new(1, 1)), Ok(Cell::new(0, 0)));
}

// ==================== CONSTRUCTION ====================

#[test]
fn test_layout_round_trip() {
    let text = "1.#\n.#.\n..2";
    let board = layout(text, MovePattern::King);
    assert_eq!(board.to_string(), text);
    assert_eq!(layout(&board.to_string(), MovePattern::King), board);
    assert_eq!(board.open_cells(), 5);
}

#[test]
fn test_layout_errors() {
    let pattern = MovePattern::King;
    assert!(matches!(
        Board::from_layout("", pattern),
        Err(Error::InvalidDimensions { .. })
    ));
    assert_eq!(
        Board::from_layout("1..\n.2", pattern),
        Err(Error::RaggedRow {
            row: 1,
            got: 2,
            expected: 3
        })
    );
    assert_eq!(
        Board::from_layout("1x\n.2", pattern),
        Err(Error::InvalidCharacter {
            character: 'x',
            row: 0,
            col: 1
        })
    );
    assert_eq!(
        Board::from_layout("1.\n..", pattern),
        Err(Error::MissingPlayer { side: Side::Two })
    );
    assert_eq!(
        Board::from_layout("12\n.2", pattern),
        Err(Error::DuplicatePlayer { side: Side::Two })
    );
}

#[test]
fn test_with_positions_validation() {
    let config = BoardConfig::default();
    assert_eq!(
        Board::with_positions(&config, Cell::new(3, 3), Cell::new(3, 3)),
        Err(Error::SharedCell {
            cell: Cell::new(3, 3)
        })
    );
    assert!(matches!(
        Board::with_positions(&config, Cell::new(7, 0), Cell::new(3, 3)),
        Err(Error::OutOfBounds { .. })
    ));
    assert!(matches!(
        Board::new(&BoardConfig {
            rows: 0,
            cols: 4,
            pattern: MovePattern::King
        }),
        Err(Error::InvalidDimensions { .. })
    ));
    // A single square cannot hold both players
    assert!(matches!(
        Board::new(&BoardConfig {
            rows: 1,
            cols: 1,
            pattern: MovePattern::King
        }),
        Err(Error::SharedCell { .. })
    ));
}
