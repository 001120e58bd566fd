//! Test fixtures for Liquiprism development.
//!
//! Provides grid and cube builders plus a seeded RNG so that tests can
//! set up a scenario in one line and replay stochastic paths exactly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;

use liquiprism_core::{FaceId, FACE_COUNT};
use liquiprism_space::{Cube, Face, Grid, Topology};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build a grid from rows of `0`/`1`, panicking on malformed input.
pub fn grid_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Grid {
    match Grid::from_rows(rows) {
        Ok(grid) => grid,
        Err(reason) => panic!("bad test grid: {reason}"),
    }
}

/// A cube with the standard topology where `face` holds `grid` and every
/// other face is all dead with the same size.
pub fn cube_with_face(face: FaceId, grid: Grid) -> Cube {
    cube_with_faces(Topology::cube(), [(face, grid)])
}

/// A self-wrapped cube where `face` holds `grid`.
///
/// Each face's borders fold back onto its own opposite edge.
pub fn self_wrapped_with_face(face: FaceId, grid: Grid) -> Cube {
    cube_with_faces(Topology::self_wrapped(), [(face, grid)])
}

/// A cube where the listed faces hold the given grids and the rest are
/// all dead. All grids must share one size.
pub fn cube_with_faces(
    topology: Topology,
    grids: impl IntoIterator<Item = (FaceId, Grid)>,
) -> Cube {
    let grids: Vec<(FaceId, Grid)> = grids.into_iter().collect();
    let size = grids.first().map_or(0, |(_, g)| g.size());
    let mut faces: Vec<Face> = (0..FACE_COUNT).map(|_| Face::new(size)).collect();
    for (face, grid) in grids {
        faces[face.index()] = Face::with_grid(grid);
    }
    match Cube::from_faces(faces, topology) {
        Ok(cube) => cube,
        Err(e) => panic!("bad test cube: {e}"),
    }
}

/// ChaCha8 RNG seeded from `seed`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_with_face_places_grid() {
        let grid = grid_from_rows(&[[1u8, 0], [0, 1]]);
        let cube = cube_with_face(FaceId(3), grid.clone());
        assert_eq!(cube.face(FaceId(3)).unwrap().grid(), &grid);
        assert_eq!(cube.alive_count(), 2);
        assert_eq!(cube.grid_size(), 2);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        use rand::Rng;
        let a: u64 = seeded_rng(4).random();
        let b: u64 = seeded_rng(4).random();
        assert_eq!(a, b);
    }
}
