use std::fmt;

use super::{Cell, GameBoard, MoveList, MovePattern, Side, Tile};
use crate::error::{Error, Result};

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Largest supported number of rows or columns
pub const MAX_DIMENSION: u8 = 16;

/// Shape and rules of a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: u8,
    pub cols: u8,
    pub pattern: MovePattern,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 7,
            pattern: MovePattern::Queen,
        }
    }
}

/// Isolation board: a grid of tiles plus where each side stands.
///
/// Moving vacates the origin for good: it becomes [`Tile::Blocked`]. The
/// positions array and the `Occupied` tiles always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: u8,
    cols: u8,
    pattern: MovePattern,
    /// Row-major tiles, `rows * cols` long
    tiles: Vec<Tile>,
    /// Indexed by [`Side::index`]
    positions: [Cell; 2],
}

impl Default for Board {
    fn default() -> Self {
        let config = BoardConfig::default();
        let mut board = Self::empty(config.rows, config.cols, config.pattern);
        board.place(Side::One, Cell::new(0, 0));
        board.place(Side::Two, Cell::new(config.rows - 1, config.cols - 1));
        board
    }
}

impl Board {
    /// Fresh board with `Side::One` in the top-left and `Side::Two` in the
    /// bottom-right corner.
    pub fn new(config: &BoardConfig) -> Result<Board> {
        check_dimensions(config.rows as usize, config.cols as usize)?;
        let one = Cell::new(0, 0);
        let two = Cell::new(config.rows - 1, config.cols - 1);
        Self::with_positions(config, one, two)
    }

    /// Fresh board with both sides placed explicitly.
    pub fn with_positions(config: &BoardConfig, one: Cell, two: Cell) -> Result<Board> {
        check_dimensions(config.rows as usize, config.cols as usize)?;
        let mut board = Self::empty(config.rows, config.cols, config.pattern);
        for cell in [one, two] {
            if !board.contains(cell) {
                return Err(Error::OutOfBounds {
                    cell,
                    rows: board.rows,
                    cols: board.cols,
                });
            }
        }
        if one == two {
            return Err(Error::SharedCell { cell: one });
        }
        board.place(Side::One, one);
        board.place(Side::Two, two);
        Ok(board)
    }

    /// Parse a text layout, one whitespace-separated token per row.
    ///
    /// `.` is empty, `#` is blocked, `1` and `2` are the two players:
    ///
    /// ```
    /// use isolation_engine::game_repr::{Board, Cell, MovePattern, Side, GameBoard};
    ///
    /// let board = Board::from_layout("1..\n.#.\n..2", MovePattern::King).unwrap();
    /// assert_eq!(board.current_position(Side::Two), Cell::new(2, 2));
    /// ```
    pub fn from_layout(layout: &str, pattern: MovePattern) -> Result<Board> {
        let lines: Vec<&str> = layout.split_whitespace().collect();
        let rows = lines.len();
        let cols = lines.first().map(|line| line.chars().count()).unwrap_or(0);
        check_dimensions(rows, cols)?;

        let mut board = Self::empty(rows as u8, cols as u8, pattern);
        let mut found: [Option<Cell>; 2] = [None, None];

        for (row, line) in lines.iter().enumerate() {
            let got = line.chars().count();
            if got != cols {
                return Err(Error::RaggedRow {
                    row,
                    got,
                    expected: cols,
                });
            }
            for (col, character) in line.chars().enumerate() {
                let cell = Cell::new(row as u8, col as u8);
                let tile = match character {
                    '.' => Tile::Empty,
                    '#' => Tile::Blocked,
                    '1' => Tile::Occupied(Side::One),
                    '2' => Tile::Occupied(Side::Two),
                    _ => {
                        return Err(Error::InvalidCharacter {
                            character,
                            row,
                            col,
                        })
                    }
                };
                if let Tile::Occupied(side) = tile {
                    if found[side.index()].replace(cell).is_some() {
                        return Err(Error::DuplicatePlayer { side });
                    }
                }
                let idx = board.index(cell);
                board.tiles[idx] = tile;
            }
        }

        for side in [Side::One, Side::Two] {
            match found[side.index()] {
                Some(cell) => board.positions[side.index()] = cell,
                None => return Err(Error::MissingPlayer { side }),
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn pattern(&self) -> MovePattern {
        self.pattern
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Tile at `cell`; panics when `cell` is off the board
    pub fn tile(&self, cell: Cell) -> Tile {
        self.tiles[self.index(cell)]
    }

    /// Number of squares nobody has visited yet
    pub fn open_cells(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_empty()).count()
    }

    /// True when `side` has nowhere to go, i.e. loses if it is to move
    pub fn is_stuck(&self, side: Side) -> bool {
        self.mobility(side) == 0
    }

    /// Validated move for game drivers. Returns the vacated cell.
    pub fn play(&mut self, side: Side, destination: Cell) -> Result<Cell> {
        let from = self.current_position(side);
        if !self.legal_moves(from).contains(&destination) {
            return Err(Error::IllegalMove {
                side,
                from,
                to: destination,
            });
        }
        Ok(self.apply_move(side, destination))
    }

    fn empty(rows: u8, cols: u8, pattern: MovePattern) -> Board {
        Board {
            rows,
            cols,
            pattern,
            tiles: vec![Tile::Empty; rows as usize * cols as usize],
            positions: [Cell::new(0, 0); 2],
        }
    }

    fn place(&mut self, side: Side, cell: Cell) {
        let idx = self.index(cell);
        self.tiles[idx] = Tile::Occupied(side);
        self.positions[side.index()] = cell;
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {} off the board", cell);
        cell.row as usize * self.cols as usize + cell.col as usize
    }
}

impl GameBoard for Board {
    type Cell = Cell;

    /// Destinations in row-major order, independent of the pattern's
    /// generation order.
    fn legal_moves(&self, from: Cell) -> MoveList<Cell> {
        let mut moves = MoveList::new();
        match self.pattern {
            MovePattern::King => self.king_moves_into(from, &mut moves),
            MovePattern::Knight => self.knight_moves_into(from, &mut moves),
            MovePattern::Queen => self.queen_moves_into(from, &mut moves),
        }
        moves.sort_unstable();
        moves
    }

    fn apply_move(&mut self, side: Side, destination: Cell) -> Cell {
        let origin = self.positions[side.index()];
        debug_assert!(
            self.tile(destination).is_empty(),
            "{} moving onto non-empty {}",
            side,
            destination
        );

        let origin_idx = self.index(origin);
        let destination_idx = self.index(destination);
        self.tiles[origin_idx] = Tile::Blocked;
        self.tiles[destination_idx] = Tile::Occupied(side);
        self.positions[side.index()] = destination;
        origin
    }

    fn undo_move(&mut self, side: Side, origin: Cell, destination: Cell) {
        debug_assert_eq!(self.positions[side.index()], destination);

        let origin_idx = self.index(origin);
        let destination_idx = self.index(destination);
        self.tiles[destination_idx] = Tile::Empty;
        self.tiles[origin_idx] = Tile::Occupied(side);
        self.positions[side.index()] = origin;
    }

    fn current_position(&self, side: Side) -> Cell {
        self.positions[side.index()]
    }
}

/// Renders the layout format accepted by [`Board::from_layout`]
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.tiles.chunks(self.cols as usize).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for tile in line {
                write!(f, "{}", tile.to_char())?;
            }
        }
        Ok(())
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    let max = MAX_DIMENSION as usize;
    if rows == 0 || cols == 0 || rows > max || cols > max {
        return Err(Error::InvalidDimensions { rows, cols, max });
    }
    Ok(())
}
