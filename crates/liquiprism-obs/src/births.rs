//! Newborn-cell extraction.

use liquiprism_core::CellState;
use liquiprism_space::Face;
use smallvec::SmallVec;

/// Row-major `(row, col)` coordinates of freshly born cells.
///
/// Inline capacity covers the handful of births a quiet face produces
/// per tick without allocating.
pub type NewbornCells = SmallVec<[(usize, usize); 8]>;

/// Cells that are alive now and were dead in the previous generation.
///
/// Coordinates come out in row-major order. A face that has never been
/// ticked compares against its all-dead initial snapshot, so every live
/// cell counts as newborn.
pub fn newborn_cells(face: &Face) -> NewbornCells {
    let previous = face.previous_grid();
    face.grid()
        .iter()
        .filter(|&(row, col, state)| {
            state.is_alive() && previous.get_or_dead(row, col) == CellState::Dead
        })
        .map(|(row, col, _)| (row, col))
        .collect()
}
