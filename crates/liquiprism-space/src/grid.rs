//! Square cell storage for a single face.

use std::fmt;

use liquiprism_core::{CellState, LayoutError};

/// An `N x N` grid of cells stored as a flat row-major buffer.
///
/// Cell `(row, col)` lives at index `row * N + col`; iteration order is
/// always row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-dead grid with edge length `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; size * size],
        }
    }

    /// Build a grid from rows of `0`/`1` values.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the rows do not form a square or contain a value
    /// other than `0` or `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, String> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(format!(
                    "row {r} has {} cells, expected {size}",
                    row.len()
                ));
            }
            for (c, &v) in row.iter().enumerate() {
                let state = CellState::try_from(v)
                    .map_err(|bad| format!("cell ({r}, {c}) has value {bad}, expected 0 or 1"))?;
                cells.push(state);
            }
        }
        Ok(Self { size, cells })
    }

    /// Edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Read a cell, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if self.contains(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Read a cell, treating anything outside the grid as dead.
    pub fn get_or_dead(&self, row: usize, col: usize) -> CellState {
        self.get(row, col).unwrap_or(CellState::Dead)
    }

    /// Write a cell.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), LayoutError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Invert a cell in place, returning its new state.
    ///
    /// Returns `None` (and changes nothing) if `(row, col)` is out of range.
    pub fn flip(&mut self, row: usize, col: usize) -> Option<CellState> {
        let idx = self.checked_index(row, col).ok()?;
        let next = self.cells[idx].flipped();
        self.cells[idx] = next;
        Some(next)
    }

    /// Flat row-major view of every cell.
    pub fn as_slice(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        // chunks(0) panics; an empty grid simply has no rows.
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate over `(row, col, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (i / size, i % size, s))
    }

    /// Number of alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of cells whose state differs from `other`.
    ///
    /// Grids of different sizes are compared over their common prefix.
    pub fn diff_count(&self, other: &Grid) -> usize {
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Set every cell from a generator called in row-major order.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> CellState) {
        let size = self.size;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(i / size, i % size);
        }
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, LayoutError> {
        if self.contains(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(LayoutError::CoordOutOfBounds {
                row,
                col,
                grid_size: self.size,
            })
        }
    }
}

impl fmt::Display for Grid {
    /// One line per row, cells separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
