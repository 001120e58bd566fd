//! A single face of the cube: current grid, previous generation and
//! activity bookkeeping, plus neighbour resolution across face borders.

use liquiprism_core::{CellState, CubeError, Direction, FaceId, LayoutError, Neighbourhood};
use rand::Rng;

use crate::grid::Grid;
use crate::topology::Topology;

/// Intra-face Moore offsets, row-major around the centre.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One square automaton plane on the cube surface.
///
/// A face never holds references to its siblings or to the topology;
/// both are passed into [`neighbours`](Face::neighbours) by the caller.
///
/// `grid` and `previous_grid` are mutated only by the tick engine
/// ([`commit_generation`](Face::commit_generation)) and by perturbation
/// (through [`grid_mut`](Face::grid_mut)).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    grid: Grid,
    previous_grid: Grid,
    activity_count: u32,
}

impl Face {
    /// An all-dead face with edge length `grid_size`.
    pub fn new(grid_size: usize) -> Self {
        Self::with_grid(Grid::new(grid_size))
    }

    /// A face starting from an explicit grid.
    ///
    /// The previous generation starts all dead and the activity count at zero.
    pub fn with_grid(grid: Grid) -> Self {
        let previous_grid = Grid::new(grid.size());
        Self {
            grid,
            previous_grid,
            activity_count: 0,
        }
    }

    /// Fill the current grid with independent fair coin flips.
    ///
    /// Leaves `previous_grid` and `activity_count` untouched.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.grid
            .fill_with(|_, _| CellState::from(rng.random_bool(0.5)));
    }

    /// Edge length of this face.
    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// Current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the current generation.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Snapshot of the grid as it was before the most recent tick.
    pub fn previous_grid(&self) -> &Grid {
        &self.previous_grid
    }

    /// Number of cells that changed state in the most recent tick.
    pub fn activity_count(&self) -> u32 {
        self.activity_count
    }

    /// Read a cell of the current grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.grid.get(row, col)
    }

    /// Write a cell of the current grid.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), LayoutError> {
        self.grid.set(row, col, state)
    }

    /// Install `next` as the current generation.
    ///
    /// The outgoing grid becomes `previous_grid` and `activity_count` is
    /// set to `changed`.
    pub fn commit_generation(&mut self, next: Grid, changed: u32) {
        self.previous_grid = std::mem::replace(&mut self.grid, next);
        self.activity_count = changed;
    }

    /// Reset both generations to all dead and clear the activity count.
    pub fn clear(&mut self) {
        let size = self.grid_size();
        self.grid = Grid::new(size);
        self.previous_grid = Grid::new(size);
        self.activity_count = 0;
    }

    /// States of every neighbour of `(row, col)`.
    ///
    /// `self` is the face registered as `face_id` in `topology`;
    /// `siblings` is the full face collection indexed by face id (it
    /// normally contains `self` as well).
    ///
    /// The result holds the clipped 3x3 Moore block first (3 to 8
    /// cells, no wraparound within the face), followed by at most one
    /// cell per border the coordinate sits on, in up/down/left/right
    /// order. Each such cell comes from the sibling's *current* grid:
    ///
    /// - up (`row == 0`): sibling's last row, column `col`
    /// - down (`row == N-1`): sibling's first row, column `col`
    /// - left (`col == 0`): sibling's row `row`, last column
    /// - right (`col == N-1`): sibling's row `row`, first column
    ///
    /// Diagonal cells across a face border are never included.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - [`CubeError::InvalidTopology`] if `face_id` has no row in `topology`.
    /// - [`CubeError::InvalidConfiguration`] if `siblings` is empty, the
    ///   coordinate is out of range, or a consulted sibling is missing or
    ///   has a different grid size.
    pub fn neighbours(
        &self,
        row: usize,
        col: usize,
        face_id: FaceId,
        topology: &Topology,
        siblings: &[Face],
    ) -> Result<Neighbourhood, CubeError> {
        let edges = topology.edges(face_id)?;
        if siblings.is_empty() {
            return Err(LayoutError::NoFaces.into());
        }
        let n = self.grid_size();
        if !self.grid.contains(row, col) {
            return Err(LayoutError::CoordOutOfBounds {
                row,
                col,
                grid_size: n,
            }
            .into());
        }

        let mut out = Neighbourhood::new();
        for (dr, dc) in MOORE_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if let Some(state) = self.grid.get(r, c) {
                out.push(state);
            }
        }

        for direction in Direction::ALL {
            let (src_row, src_col) = match direction {
                Direction::Up if row == 0 => (n - 1, col),
                Direction::Down if row == n - 1 => (0, col),
                Direction::Left if col == 0 => (row, n - 1),
                Direction::Right if col == n - 1 => (row, 0),
                _ => continue,
            };
            let target = edges[direction.index()];
            let sibling = siblings.get(target.index()).ok_or(LayoutError::MissingFace {
                face: target,
                available: siblings.len(),
            })?;
            if sibling.grid_size() != n {
                return Err(LayoutError::GridSizeMismatch {
                    face: target,
                    expected: n,
                    found: sibling.grid_size(),
                }
                .into());
            }
            out.push(sibling.grid.get_or_dead(src_row, src_col));
        }

        Ok(out)
    }
}
