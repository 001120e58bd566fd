//! Random cell flips for external "shake" events.

use liquiprism_space::Face;
use rand::Rng;

/// Invert `intensity` uniformly chosen cells of `face`.
///
/// Coordinates are drawn independently with replacement: the same cell
/// may be picked more than once, and two flips of one cell cancel out.
/// Only the current grid changes; `previous_grid` and the activity count
/// are left alone. `intensity == 0` and empty faces are no-ops.
pub fn perturb<R: Rng>(face: &mut Face, intensity: usize, rng: &mut R) {
    let size = face.grid_size();
    if size == 0 {
        return;
    }
    let grid = face.grid_mut();
    for _ in 0..intensity {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        grid.flip(row, col);
    }
}
