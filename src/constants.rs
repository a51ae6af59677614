use crate::board::Board;
use crate::direction::Direction;

/// Width of the backing word in bits.
pub const CAP: usize = u128::BITS as usize;
/// Side length of the square grid.
pub const BOARD_SIZE: usize = 10;

pub const BOARD_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
/// Unused low-order padding bits below the grid.
pub const GAP: usize = CAP - BOARD_COUNT;

/// Longest ship the engine can build.
pub const MAX_SHIP_SIZE: usize = 5;

/// Cell (0, 0), the most significant bit.
pub const CELL: u128 = 1 << (CAP - 1);
/// Row 0 fully set.
pub const LINE: u128 = ((1 << BOARD_SIZE) - 1) << (CAP - BOARD_SIZE);
/// Every bit that belongs to the grid.
pub const BOARD_MASK: u128 = ((1 << BOARD_COUNT) - 1) << (CAP - BOARD_COUNT);

pub const TOP_BORDER_MASK: u128 = LINE;
pub const BOT_BORDER_MASK: u128 = Board::from_bits_unchecked(TOP_BORDER_MASK)
    .wrapping_move(BOARD_SIZE - 1, Direction::Down)
    .bits();
pub const LEF_BORDER_MASK: u128 = Board::from_bits_unchecked(TOP_BORDER_MASK)
    .transpose()
    .bits();
pub const RGT_BORDER_MASK: u128 = LEF_BORDER_MASK >> (BOARD_SIZE - 1);

#[cfg(test)]
mod tests {
    #![allow(clippy::unusual_byte_groupings)]

    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(GAP, 28);
        assert_eq!(BOARD_MASK.count_ones(), 100);
        assert_eq!(BOARD_MASK.trailing_zeros() as usize, GAP);
        assert_eq!(CELL, 1u128 << 127);
    }

    #[test]
    fn test_top_border() {
        assert_eq!(TOP_BORDER_MASK.count_ones(), 10);
        assert_eq!(TOP_BORDER_MASK.leading_zeros(), 0);
        assert_eq!(TOP_BORDER_MASK, 0b11111_11111u128 << 118);
    }

    #[test]
    fn test_bottom_border() {
        assert_eq!(BOT_BORDER_MASK, 0b11111_11111u128 << GAP);
    }

    #[test]
    fn test_left_border() {
        let l: u128 = 0b1000000000_1000000000_1000000000_1000000000_1000000000_1000000000_1000000000_1000000000_1000000000_1000000000 << GAP;
        assert_eq!(LEF_BORDER_MASK, l);
    }

    #[test]
    fn test_right_border() {
        let r: u128 = 0b0000000001_0000000001_0000000001_0000000001_0000000001_0000000001_0000000001_0000000001_0000000001_0000000001 << GAP;
        assert_eq!(RGT_BORDER_MASK, r);
    }

    #[test]
    fn test_border_duality() {
        let top = Board::from_bits_unchecked(TOP_BORDER_MASK);
        let bot = Board::from_bits_unchecked(BOT_BORDER_MASK);
        assert_eq!(Board::from_bits_unchecked(LEF_BORDER_MASK).transpose(), top);
        assert_eq!(Board::from_bits_unchecked(RGT_BORDER_MASK), bot.transpose());
    }
}
