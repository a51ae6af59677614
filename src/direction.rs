use crate::constants::{BOT_BORDER_MASK, LEF_BORDER_MASK, RGT_BORDER_MASK, TOP_BORDER_MASK};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub const fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The border a shape must not touch before a move in this direction.
    pub const fn border(&self) -> u128 {
        match self {
            Direction::Up => TOP_BORDER_MASK,
            Direction::Down => BOT_BORDER_MASK,
            Direction::Left => LEF_BORDER_MASK,
            Direction::Right => RGT_BORDER_MASK,
        }
    }

    pub fn from_name(name: &str) -> Option<Direction> {
        match name.to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn flipped(&self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Outcome of a saturating move.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Moved,
    /// The shape already touched the border; the board was left unchanged.
    Blocked,
}

impl MoveStatus {
    pub const fn is_moved(&self) -> bool {
        matches!(self, MoveStatus::Moved)
    }

    pub const fn is_blocked(&self) -> bool {
        matches!(self, MoveStatus::Blocked)
    }
}
