use std::fmt;

/// A square on the board, addressed by row and column from the top-left.
///
/// Ordering is row-major, which is also the order moves are enumerated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Cell reached by stepping `(dr, dc)`, if it stays inside a `rows x cols` grid
    pub fn offset(self, dr: i8, dc: i8, rows: u8, cols: u8) -> Option<Cell> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 || row >= rows as i16 || col >= cols as i16 {
            return None;
        }
        Some(Cell::new(row as u8, col as u8))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Index into per-side arrays
    pub fn index(&self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// Layout character for this side
    pub fn marker(&self) -> char {
        match self {
            Side::One => '1',
            Side::Two => '2',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    /// Visited earlier in the game; nobody may enter it again
    Blocked,
    Occupied(Side),
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    pub fn to_char(&self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Blocked => '#',
            Tile::Occupied(side) => side.marker(),
        }
    }
}
