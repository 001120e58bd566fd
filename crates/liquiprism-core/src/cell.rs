//! Binary cell state and the neighbourhood sequence type.

use smallvec::SmallVec;
use std::fmt;

/// State of a single automaton cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellState {
    /// Dead (`0`).
    #[default]
    Dead = 0,
    /// Alive (`1`).
    Alive = 1,
}

impl CellState {
    /// Returns `true` for [`CellState::Alive`].
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// The opposite state.
    pub fn flipped(self) -> Self {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }

    /// Numeric value: `0` for dead, `1` for alive.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = u8;

    /// Accepts only `0` and `1`; any other value is returned as the error.
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Dead),
            1 => Ok(Self::Alive),
            other => Err(other),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// The states of a cell's neighbours.
///
/// Holds up to 8 intra-face cells plus at most 2 cross-face cells without
/// spilling to the heap. Intra-face cells come first, cross-face cells are
/// appended in up/down/left/right order.
pub type Neighbourhood = SmallVec<[CellState; 10]>;

/// Number of alive cells in a neighbour sequence.
pub fn alive_count(neighbours: &[CellState]) -> usize {
    neighbours.iter().filter(|c| c.is_alive()).count()
}
