use crate::board::{create_ship, Board};
use crate::constants::{BOARD_SIZE, MAX_SHIP_SIZE};
use crate::direction::{Direction, Orientation};
use crate::error::PlacementError;

/// Standard fleet: carrier, battleship, cruiser, submarine, destroyer.
pub const SHIP_SIZES: [usize; 5] = [5, 4, 3, 3, 2];
pub const SHIPS_COUNT: usize = SHIP_SIZES.len();

/// Build a ship of `size` cells with its top-left cell at (x, y).
pub fn ship_at(
    x: usize,
    y: usize,
    size: usize,
    orientation: Orientation,
) -> Result<Board, PlacementError> {
    if !(1..=MAX_SHIP_SIZE).contains(&size) {
        return Err(PlacementError::InvalidSize(size));
    }
    let (width, height) = match orientation {
        Orientation::Horizontal => (size, 1),
        Orientation::Vertical => (1, size),
    };
    if x >= BOARD_SIZE || y >= BOARD_SIZE || x + width > BOARD_SIZE || y + height > BOARD_SIZE {
        return Err(PlacementError::OutOfBounds { x, y, size });
    }

    let ship = create_ship(size).orient(orientation);
    let ship = ship.wrapping_move(x, Direction::Right);
    Ok(ship.wrapping_move(y, Direction::Down))
}

/// Draw a ship onto `board` unless it touches (edges or corners) a ship
/// already there.
///
/// On collision the error carries the board with the ship drawn in anyway and
/// the ship's surround mask, so callers can highlight the clash.
pub fn place_ship(
    board: Board,
    x: usize,
    y: usize,
    size: usize,
    orientation: Orientation,
) -> Result<Board, PlacementError> {
    let ship = ship_at(x, y, size, orientation)?;
    let mask = ship.clipped_surround_mask();

    if mask.intersects(board) {
        return Err(PlacementError::Collision {
            board: board | ship,
            mask,
        });
    }

    Ok(board | ship)
}

/// Length of a ship layer, i.e. its number of cells.
#[inline]
pub fn ship_size(ship: Board) -> usize {
    ship.count() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_at_horizontal() {
        let ship = ship_at(2, 3, 4, Orientation::Horizontal).expect("fits");
        assert_eq!(ship_size(ship), 4);
        for x in 2..6 {
            assert!(ship.get(x, 3));
        }
        assert!(!ship.get(6, 3));
    }

    #[test]
    fn test_ship_at_vertical() {
        let ship = ship_at(7, 5, 5, Orientation::Vertical).expect("fits");
        for y in 5..10 {
            assert!(ship.get(7, y));
        }
        assert_eq!(ship.count(), 5);
    }

    #[test]
    fn test_ship_at_bounds() {
        assert!(ship_at(5, 0, 5, Orientation::Horizontal).is_ok());
        assert_eq!(
            ship_at(6, 0, 5, Orientation::Horizontal),
            Err(PlacementError::OutOfBounds { x: 6, y: 0, size: 5 })
        );
        assert_eq!(
            ship_at(0, 8, 3, Orientation::Vertical),
            Err(PlacementError::OutOfBounds { x: 0, y: 8, size: 3 })
        );
        assert_eq!(
            ship_at(0, 0, 6, Orientation::Horizontal),
            Err(PlacementError::InvalidSize(6))
        );
        assert_eq!(
            ship_at(0, 0, 0, Orientation::Horizontal),
            Err(PlacementError::InvalidSize(0))
        );
    }

    #[test]
    fn test_ship_at_huge_coords() {
        assert_eq!(
            ship_at(usize::MAX, 0, 2, Orientation::Horizontal),
            Err(PlacementError::OutOfBounds { x: usize::MAX, y: 0, size: 2 })
        );
        assert_eq!(
            ship_at(0, usize::MAX, 2, Orientation::Vertical),
            Err(PlacementError::OutOfBounds { x: 0, y: usize::MAX, size: 2 })
        );
        assert_eq!(
            place_ship(Board::EMPTY, usize::MAX, usize::MAX, 3, Orientation::Horizontal),
            Err(PlacementError::OutOfBounds { x: usize::MAX, y: usize::MAX, size: 3 })
        );
        assert_eq!(
            ship_at(10, 0, 1, Orientation::Vertical),
            Err(PlacementError::OutOfBounds { x: 10, y: 0, size: 1 })
        );
    }

    #[test]
    fn test_place_a_ship() {
        let board = place_ship(Board::EMPTY, 0, 3, 4, Orientation::Vertical).expect("empty board");
        let board = place_ship(board, 1, 0, 3, Orientation::Horizontal).expect("not touching");
        assert_eq!(board.count(), 7);
    }

    #[test]
    fn test_cant_place_a_ship() {
        let board = place_ship(Board::EMPTY, 0, 1, 4, Orientation::Vertical).expect("empty board");
        let err = place_ship(board, 0, 0, 3, Orientation::Horizontal).unwrap_err();
        match err {
            PlacementError::Collision { board: drawn, mask } => {
                assert_eq!(drawn.count(), 7);
                assert!(mask.intersects(board));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_diagonal_contact_rejected() {
        let board = place_ship(Board::EMPTY, 3, 3, 2, Orientation::Horizontal).expect("empty board");
        assert!(place_ship(board, 5, 4, 2, Orientation::Horizontal).is_err());
        assert!(place_ship(board, 6, 4, 2, Orientation::Horizontal).is_ok());
    }

    #[test]
    fn test_row_edge_is_not_contact() {
        // Right edge of row 2 and left edge of row 3 are far apart on the grid
        let board = place_ship(Board::EMPTY, 8, 2, 2, Orientation::Horizontal).expect("empty board");
        assert!(place_ship(board, 0, 3, 2, Orientation::Horizontal).is_ok());
    }
}
