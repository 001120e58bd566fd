//! Error types for the Liquiprism cube automaton.
//!
//! Two failure families exist, both programmer or configuration errors
//! rather than transient conditions:
//!
//! - [`TopologyError`]: a face or direction is absent from the adjacency
//!   table (`InvalidTopology`).
//! - [`LayoutError`]: the sibling-face collection does not match what the
//!   topology and the grid geometry require (`InvalidConfiguration`).
//!
//! [`CubeError`] wraps both and is what neighbour resolution and ticking
//! return. Neither is retried; the caller decides whether to abort.

use std::error::Error;
use std::fmt;

use crate::id::{Direction, FaceId};

/// A face identifier or direction not present in the adjacency table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// The face id has no row in the table.
    UnknownFace {
        /// The offending face id.
        face: FaceId,
    },
    /// A direction name is not one of `up`, `down`, `left`, `right`.
    UnknownDirection {
        /// The unrecognised name.
        name: String,
    },
    /// A table entry points at a face that has no row of its own.
    DanglingEdge {
        /// Face owning the edge.
        face: FaceId,
        /// The edge.
        direction: Direction,
        /// Face the edge points at.
        target: FaceId,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFace { face } => write!(f, "face {face} is not in the topology"),
            Self::UnknownDirection { name } => write!(f, "unknown direction '{name}'"),
            Self::DanglingEdge {
                face,
                direction,
                target,
            } => write!(
                f,
                "edge {direction} of face {face} points at unknown face {target}"
            ),
        }
    }
}

impl Error for TopologyError {}

/// The face collection is malformed relative to the topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// No faces were supplied.
    NoFaces,
    /// A cube was assembled from the wrong number of faces.
    FaceCount {
        /// Number of faces a cube has.
        expected: usize,
        /// Number of faces supplied.
        found: usize,
    },
    /// The topology names a face the collection does not contain.
    MissingFace {
        /// The face that could not be found.
        face: FaceId,
        /// Number of faces actually supplied.
        available: usize,
    },
    /// A sibling face has a different grid size from the face being resolved.
    GridSizeMismatch {
        /// The face with the unexpected size.
        face: FaceId,
        /// Size of the face being resolved.
        expected: usize,
        /// Size actually found.
        found: usize,
    },
    /// A cell coordinate lies outside the face.
    CoordOutOfBounds {
        /// Row of the offending coordinate.
        row: usize,
        /// Column of the offending coordinate.
        col: usize,
        /// Edge length of the face.
        grid_size: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFaces => write!(f, "face collection is empty"),
            Self::FaceCount { expected, found } => {
                write!(f, "expected {expected} faces, found {found}")
            }
            Self::MissingFace { face, available } => {
                write!(f, "face {face} requested but only {available} faces supplied")
            }
            Self::GridSizeMismatch {
                face,
                expected,
                found,
            } => write!(
                f,
                "face {face} has grid size {found}, expected {expected}"
            ),
            Self::CoordOutOfBounds {
                row,
                col,
                grid_size,
            } => write!(
                f,
                "cell ({row}, {col}) out of bounds: [0, {grid_size}) x [0, {grid_size})"
            ),
        }
    }
}

impl Error for LayoutError {}

/// Errors from neighbour resolution and ticking.
///
/// Both variants are fatal to the call that raised them; no grid is
/// modified when either is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CubeError {
    /// A face or direction is missing from the topology.
    InvalidTopology(TopologyError),
    /// The sibling-face collection is empty or inconsistent.
    InvalidConfiguration(LayoutError),
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTopology(e) => write!(f, "invalid topology: {e}"),
            Self::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl Error for CubeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTopology(e) => Some(e),
            Self::InvalidConfiguration(e) => Some(e),
        }
    }
}

impl From<TopologyError> for CubeError {
    fn from(e: TopologyError) -> Self {
        Self::InvalidTopology(e)
    }
}

impl From<LayoutError> for CubeError {
    fn from(e: LayoutError) -> Self {
        Self::InvalidConfiguration(e)
    }
}
