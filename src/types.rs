//! primitive types shared by the board, movement and navigation modules
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    /// row delta, positive steps down the board
    pub row: i64,
    /// column delta, positive steps right
    pub column: i64,
}

/// Represents a heading on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl Direction {
    /// convert this heading to a unit vector. rows grow downward, so up is -row
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Up => Vector { row: -1, column: 0 },
            Direction::Down => Vector { row: 1, column: 0 },
            Direction::Left => Vector { row: 0, column: -1 },
            Direction::Right => Vector { row: 0, column: 1 },
        }
    }

    /// the reversed heading. opposite pairs are up/down and left/right
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// whether this heading runs along the column axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// the two headings at a right angle to this one, in a fixed order.
    /// callers that need a randomized order flip a coin over this pair
    pub fn perpendicular(self) -> [Direction; 2] {
        if self.is_horizontal() {
            [Direction::Up, Direction::Down]
        } else {
            [Direction::Left, Direction::Right]
        }
    }

    /// returns a vec of all four headings
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// a cell address on the board, [row 0, column 0] is the top left corner.
/// signed so that off-board candidates are representable before validation
/// rejects them
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    #[allow(missing_docs)]
    pub row: i32,
    #[allow(missing_docs)]
    pub column: i32,
}

impl Coordinate {
    /// the coordinate one vector away from this one
    pub fn add_vec(&self, v: Vector) -> Coordinate {
        Coordinate {
            row: (self.row as i64 + v.row) as i32,
            column: (self.column as i64 + v.column) as i32,
        }
    }

    /// the coordinate one vector back from this one
    pub fn sub_vec(&self, v: Vector) -> Coordinate {
        Coordinate {
            row: (self.row as i64 - v.row) as i32,
            column: (self.column as i64 - v.column) as i32,
        }
    }
}

/// the extent of a board, both axes positive once validated
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    #[allow(missing_docs)]
    pub rows: u32,
    #[allow(missing_docs)]
    pub columns: u32,
}

impl Dimension {
    /// how many tiles a board of this extent holds
    pub fn total_tiles(&self) -> Result<usize, crate::error::EngineError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(crate::error::EngineError::InvalidArgument(
                "board dimensions must be positive",
            ));
        }
        Ok(self.rows as usize * self.columns as usize)
    }

    /// whether the coordinate lies on a board of this extent
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row >= 0
            && coordinate.row < self.rows as i32
            && coordinate.column >= 0
            && coordinate.column < self.columns as i32
    }
}

/// token to place a creature segment in its sequence. 0 is the head,
/// the highest key is the tail
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SegmentKey(pub u16);

impl SegmentKey {
    /// convert this segment key to a usize
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Serialize for SegmentKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

/// which stretch of the creature a segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WormPart {
    #[allow(missing_docs)]
    Head,
    #[allow(missing_docs)]
    Body,
    #[allow(missing_docs)]
    Tail,
}

/// one segment of the creature. the creature owns its segments as an
/// ordered sequence that is never reordered, only extended at the tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WormSegment {
    /// position in the sequence, 0 is the head
    pub key: SegmentKey,
    #[allow(missing_docs)]
    pub part: WormPart,
    #[allow(missing_docs)]
    pub location: Coordinate,
}

/// Instruments to be used with the tick loop
pub trait TickInstruments: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe_tick(&self, duration: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::all() {
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_unit_vectors() {
        let origin = Coordinate { row: 5, column: 5 };
        for direction in Direction::all() {
            let stepped = origin.add_vec(direction.to_vector());
            let row_delta = (stepped.row - origin.row).abs();
            let column_delta = (stepped.column - origin.column).abs();
            assert_eq!(1, row_delta + column_delta);
        }
        assert_eq!(
            Coordinate { row: 4, column: 5 },
            origin.add_vec(Direction::Up.to_vector())
        );
        assert_eq!(
            Coordinate { row: 6, column: 5 },
            origin.add_vec(Direction::Down.to_vector())
        );
        assert_eq!(
            Coordinate { row: 5, column: 4 },
            origin.add_vec(Direction::Left.to_vector())
        );
        assert_eq!(
            Coordinate { row: 5, column: 6 },
            origin.add_vec(Direction::Right.to_vector())
        );
    }

    #[test]
    fn test_perpendicular_switches_axis() {
        for direction in Direction::all() {
            for option in direction.perpendicular() {
                assert_ne!(direction.is_horizontal(), option.is_horizontal());
            }
        }
    }

    #[test]
    fn test_total_tiles() {
        let desktop = Dimension {
            rows: 15,
            columns: 30,
        };
        assert_eq!(450, desktop.total_tiles().unwrap());
        let flat = Dimension {
            rows: 0,
            columns: 30,
        };
        assert!(flat.total_tiles().is_err());
    }

    #[test]
    fn test_contains_matches_the_extent() {
        let size = Dimension {
            rows: 15,
            columns: 30,
        };
        assert!(size.contains(Coordinate { row: 0, column: 0 }));
        assert!(size.contains(Coordinate {
            row: 14,
            column: 29
        }));
        assert!(!size.contains(Coordinate {
            row: 15,
            column: 29
        }));
        assert!(!size.contains(Coordinate {
            row: 14,
            column: 30
        }));
        assert!(!size.contains(Coordinate { row: -1, column: 0 }));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!("up", format!("{}", Direction::Up));
        assert_eq!("right", format!("{}", Direction::Right));
    }
}
