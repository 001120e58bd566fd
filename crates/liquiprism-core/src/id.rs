//! Strongly-typed face identifiers and edge directions.

use std::fmt;
use std::str::FromStr;

use crate::error::TopologyError;

/// Number of faces on a cube.
pub const FACE_COUNT: usize = 6;

/// Identifies one face of the cube.
///
/// Valid identifiers are `FaceId(0)` through `FaceId(5)`. The inner value
/// is public so that callers can name arbitrary ids; anything outside the
/// valid range is rejected by the topology with
/// [`TopologyError::UnknownFace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u8);

impl FaceId {
    /// All six faces in ascending order.
    pub const ALL: [FaceId; FACE_COUNT] = [
        FaceId(0),
        FaceId(1),
        FaceId(2),
        FaceId(3),
        FaceId(4),
        FaceId(5),
    ];

    /// Position of this face in a cube's face array.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this id names one of the six cube faces.
    pub fn is_valid(self) -> bool {
        self.index() < FACE_COUNT
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for FaceId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// One of the four edges of a face.
///
/// `Up` is the row-0 border, `Down` the last row, `Left` column 0 and
/// `Right` the last column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Top edge (row 0).
    Up,
    /// Bottom edge (last row).
    Down,
    /// Left edge (column 0).
    Left,
    /// Right edge (last column).
    Right,
}

impl Direction {
    /// All four directions in resolution order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Column index of this direction in a topology table row.
    pub fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// The edge on the other side of the face.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lower-case name, as used in textual topology descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(TopologyError::UnknownDirection {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_ids_cover_six_faces() {
        assert!(FaceId::ALL.iter().all(|f| f.is_valid()));
        assert!(!FaceId(6).is_valid());
        assert_eq!(FaceId::ALL[3].index(), 3);
    }

    #[test]
    fn direction_round_trips_through_name() {
        for dir in Direction::ALL {
            assert_eq!(dir.name().parse::<Direction>().unwrap(), dir);
        }
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert_eq!(
            err,
            TopologyError::UnknownDirection {
                name: "diagonal".to_string()
            }
        );
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn direction_indices_are_distinct() {
        let mut seen = [false; 4];
        for dir in Direction::ALL {
            assert!(!seen[dir.index()]);
            seen[dir.index()] = true;
        }
    }
}
