#![allow(clippy::unusual_byte_groupings)]

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::str::FromStr;

use crate::constants::{BOARD_MASK, BOARD_SIZE, CAP, CELL, GAP, MAX_SHIP_SIZE};
use crate::direction::{Direction, MoveStatus, Orientation};
use crate::error::ParseBoardError;
use crate::position::Position;

/// A 10×10 grid of cells packed row-major into the 100 high bits of a `u128`.
///
/// Cell (0, 0) is the most significant bit, cell (9, 9) sits just above the
/// 28 padding bits. Every operation returns a fresh value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board(u128);

#[inline(always)]
const fn cell_bit(x: usize, y: usize) -> u128 {
    (1 << (BOARD_SIZE - x - 1)) << (BOARD_SIZE * (BOARD_SIZE - y - 1) + GAP)
}

impl Board {
    pub const EMPTY: Board = Board(0);
    pub const FULL: Board = Board(BOARD_MASK);

    /// Wrap raw bits, rejecting anything with padding bits set.
    #[inline]
    pub const fn from_bits(bits: u128) -> Option<Board> {
        if bits & !BOARD_MASK == 0 {
            Some(Board(bits))
        } else {
            None
        }
    }

    /// Wrap raw bits as-is. The caller guarantees the padding is clear.
    #[inline]
    pub const fn from_bits_unchecked(bits: u128) -> Board {
        Board(bits)
    }

    #[inline]
    pub const fn bits(self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn is_well_formed(self) -> bool {
        self.0 & !BOARD_MASK == 0
    }

    /// Board with only (x, y) set.
    #[inline]
    pub const fn single(x: usize, y: usize) -> Board {
        debug_assert!(x < BOARD_SIZE);
        debug_assert!(y < BOARD_SIZE);
        Board(cell_bit(x, y))
    }

    #[inline(always)]
    pub const fn get(self, x: usize, y: usize) -> bool {
        debug_assert!(x < BOARD_SIZE);
        debug_assert!(y < BOARD_SIZE);
        debug_assert!(self.0 & !BOARD_MASK == 0);

        let y_row = self.0 >> (BOARD_SIZE * (BOARD_SIZE - y - 1) + GAP);
        (y_row >> (BOARD_SIZE - x - 1)) & 1 == 1
    }

    #[inline(always)]
    pub const fn set(self, x: usize, y: usize, value: bool) -> Board {
        debug_assert!(x < BOARD_SIZE);
        debug_assert!(y < BOARD_SIZE);
        debug_assert!(self.0 & !BOARD_MASK == 0);

        let v = cell_bit(x, y);
        if value {
            Board(self.0 | v)
        } else {
            Board(self.0 & !v)
        }
    }

    #[inline]
    pub fn get_at(self, pos: Position) -> bool {
        self.get(pos.x as usize, pos.y as usize)
    }

    #[inline]
    pub fn set_at(self, pos: Position, value: bool) -> Board {
        self.set(pos.x as usize, pos.y as usize, value)
    }

    /// Number of set cells.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn intersects(self, other: Board) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate the set cells in row-major order.
    #[inline]
    pub fn iter_ones(self) -> CellIterator {
        CellIterator { bits: self.0 }
    }

    /// Horizontal ship of `size` cells starting at (0, 0).
    #[inline(always)]
    pub const fn ship(size: usize) -> Board {
        assert!(
            size >= 1 && size <= MAX_SHIP_SIZE,
            "Ship size must be between 1 and 5!"
        );
        Board(((1 << size) - 1) << (CAP - size))
    }

    /// The shape itself plus every cell next to it, diagonals included.
    ///
    /// Built from plain moves, so a cell on the right edge also marks the
    /// left edge of the next row (and vice versa). Use
    /// [`Board::clipped_surround_mask`] when that matters.
    #[inline(always)]
    pub const fn surround_mask(self) -> Board {
        use Direction::*;
        let mask = Board(self.0 | self.wrapping_move(1, Right).0 | self.wrapping_move(1, Left).0);
        Board(mask.0 | mask.wrapping_move(1, Up).0 | mask.wrapping_move(1, Down).0)
    }

    /// Like [`Board::surround_mask`] but never spills across row edges.
    #[inline(always)]
    pub const fn clipped_surround_mask(self) -> Board {
        use Direction::*;
        let mask = Board(self.0 | self.cutting_move(Right).0 | self.cutting_move(Left).0);
        Board(mask.0 | mask.cutting_move(Up).0 | mask.cutting_move(Down).0)
    }

    /// Shift by `step` cells with no boundary detection.
    ///
    /// Cells pushed off the grid are discarded. Horizontal moves carry edge
    /// cells into the neighbouring row.
    #[inline(always)]
    pub const fn wrapping_move(self, step: usize, direction: Direction) -> Board {
        let shift = match direction {
            Direction::Up | Direction::Down => step.saturating_mul(BOARD_SIZE),
            Direction::Left | Direction::Right => step,
        };
        if shift >= CAP {
            return Board::EMPTY;
        }
        let bits = match direction {
            Direction::Up | Direction::Left => self.0 << shift,
            Direction::Down | Direction::Right => self.0 >> shift,
        };
        Board(bits & BOARD_MASK)
    }

    /// Move one cell, unless the shape already touches the border in that
    /// direction. A blocked move hands back `self` untouched.
    #[inline(always)]
    pub const fn saturated_move(self, direction: Direction) -> (Board, MoveStatus) {
        if self.0 & direction.border() != 0 {
            return (self, MoveStatus::Blocked);
        }
        (self.wrapping_move(1, direction), MoveStatus::Moved)
    }

    /// `step` saturating moves, all or nothing. An empty board always moves.
    pub const fn saturated_move_by(self, step: usize, direction: Direction) -> (Board, MoveStatus) {
        if self.0 == 0 {
            return (self, MoveStatus::Moved);
        }
        let mut current = self;
        let mut i = 0;
        while i < step {
            match current.saturated_move(direction) {
                (next, MoveStatus::Moved) => current = next,
                (_, MoveStatus::Blocked) => return (self, MoveStatus::Blocked),
            }
            i += 1;
        }
        (current, MoveStatus::Moved)
    }

    /// Move one cell, dropping the cells that would leave the grid.
    #[inline(always)]
    pub const fn cutting_move(self, direction: Direction) -> Board {
        Board(self.0 & !direction.border()).wrapping_move(1, direction)
    }

    pub const fn cutting_move_by(self, step: usize, direction: Direction) -> Board {
        let mut current = self;
        let mut i = 0;
        while i < step && current.0 != 0 {
            current = current.cutting_move(direction);
            i += 1;
        }
        current
    }

    /// Swap rows and columns: output (x, y) is input (y, x).
    #[inline(always)]
    pub const fn transpose(self) -> Board {
        debug_assert!(self.0 & !BOARD_MASK == 0);
        let mut result = self;
        let mut i = 1;

        while i < BOARD_SIZE {
            let mut j = 0;
            while j < i {
                let a = self.get(i, j);
                let b = self.get(j, i);

                result = result.set(i, j, b);
                result = result.set(j, i, a);

                j += 1;
            }
            i += 1;
        }

        result
    }

    #[inline]
    pub const fn orient(self, orientation: Orientation) -> Board {
        match orientation {
            Orientation::Horizontal => self,
            Orientation::Vertical => self.transpose(),
        }
    }

    /// Rows joined by `/`, the form used by serde.
    pub fn to_compact_string(self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for y in 0..BOARD_SIZE {
            if y > 0 {
                out.push('/');
            }
            for x in 0..BOARD_SIZE {
                out.push(if self.get(x, y) { '#' } else { '.' });
            }
        }
        out
    }
}

/// Horizontal ship of `size` cells starting at (0, 0).
#[inline(always)]
pub const fn create_ship(size: usize) -> Board {
    Board::ship(size)
}

#[inline(always)]
pub const fn move_board(board: Board, step: usize, direction: Direction) -> Board {
    board.wrapping_move(step, direction)
}

impl From<Board> for u128 {
    fn from(board: Board) -> u128 {
        board.0
    }
}

impl BitAnd for Board {
    type Output = Board;
    #[inline]
    fn bitand(self, rhs: Board) -> Board {
        Board(self.0 & rhs.0)
    }
}

impl BitAndAssign for Board {
    #[inline]
    fn bitand_assign(&mut self, rhs: Board) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Board {
    type Output = Board;
    #[inline]
    fn bitor(self, rhs: Board) -> Board {
        Board(self.0 | rhs.0)
    }
}

impl BitOrAssign for Board {
    #[inline]
    fn bitor_assign(&mut self, rhs: Board) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Board {
    type Output = Board;
    #[inline]
    fn bitxor(self, rhs: Board) -> Board {
        Board(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Board {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Board) {
        self.0 ^= rhs.0;
    }
}

/// Complement within the grid; padding stays clear.
impl Not for Board {
    type Output = Board;
    #[inline]
    fn not(self) -> Board {
        Board(!self.0 & BOARD_MASK)
    }
}

/// Iterator over the positions of set cells.
pub struct CellIterator {
    bits: u128,
}

impl Iterator for CellIterator {
    type Item = Position;
    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.bits == 0 {
            return None;
        }
        // Distance from the MSB is exactly the row-major cell index
        let index = self.bits.leading_zeros() as usize;
        self.bits &= !(CELL >> index);
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellIterator {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let c = if self.get(x, y) { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Accepts ten rows of `#`/`.` separated by newlines or `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::EMPTY;
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != BOARD_SIZE {
                return Err(ParseBoardError::RowLength { row: y, len });
            }
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '#' => board = board.set(x, y, true),
                    '.' => {}
                    _ => return Err(ParseBoardError::InvalidCell { ch, x, y }),
                }
            }
        }
        Ok(board)
    }
}
