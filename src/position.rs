use crate::constants::BOARD_SIZE;

/// A cell coordinate. `x` is the column, `y` the row; (0, 0) is the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Position { x, y }
    }

    /// Row-major cell index, `y * 10 + x`.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < BOARD_SIZE * BOARD_SIZE);
        Position {
            x: (index % BOARD_SIZE) as u8,
            y: (index / BOARD_SIZE) as u8,
        }
    }

    pub fn to_index(&self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    pub fn is_valid(&self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    /// Mirror across the main diagonal.
    pub fn transposed(&self) -> Self {
        Position {
            x: self.y,
            y: self.x,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
