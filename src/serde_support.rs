use crate::board::Board;
use crate::direction::{Direction, Orientation};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // "#####...../........../..."
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid board: {}", e)))
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        serializer.serialize_str(name)
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Direction::from_name(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid direction: {}", s)))
    }
}

impl Serialize for Orientation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let name = match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        serializer.serialize_str(name)
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid orientation: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::create_ship;

    #[test]
    fn test_board_serde_empty() {
        let json = serde_json::to_string(&Board::EMPTY).unwrap();
        let rows = vec![".........."; 10].join("/");
        assert_eq!(json, format!("\"{}\"", rows));

        let board: Board = serde_json::from_str(&json).unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn test_board_serde_ship() {
        let ship = create_ship(4).transpose().wrapping_move(2, Direction::Right);

        let json = serde_json::to_string(&ship).unwrap();
        assert!(json.starts_with(r#""..#......./..#......./"#));

        let ship2: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(ship2, ship);
    }

    #[test]
    fn test_board_serde_rejects_garbage() {
        assert!(serde_json::from_str::<Board>(r#""not a board""#).is_err());
        assert!(serde_json::from_str::<Board>("42").is_err());
    }

    #[test]
    fn test_direction_serde() {
        for dir in Direction::ALL {
            let json = serde_json::to_string(&dir).unwrap();
            let dir2: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(dir2, dir);
        }
        assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), r#""left""#);
        assert!(serde_json::from_str::<Direction>(r#""sideways""#).is_err());
    }

    #[test]
    fn test_orientation_serde() {
        let json = serde_json::to_string(&Orientation::Vertical).unwrap();
        assert_eq!(json, r#""vertical""#);
        let o: Orientation = serde_json::from_str(r#""H""#).unwrap();
        assert_eq!(o, Orientation::Horizontal);
    }
}
