//! FNV-1a digests of cube state.
//!
//! Two cubes with equal digests almost certainly hold identical grids.
//! Digests are for fast determinism checks across runs (same seed, same
//! trajectory), not for anything adversarial.

use liquiprism_space::{Cube, Face, Grid};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn fnv1a_grid(mut hash: u64, grid: &Grid) -> u64 {
    hash = fnv1a_u64(hash, grid.size() as u64);
    for &cell in grid.as_slice() {
        hash = fnv1a_byte(hash, cell.as_u8());
    }
    hash
}

/// Digest of one face's current grid.
///
/// Only the current generation is hashed. The previous snapshot and the
/// activity count are derived bookkeeping.
pub fn face_hash(face: &Face) -> u64 {
    fnv1a_grid(FNV_OFFSET, face.grid())
}

/// Digest of every face's current grid.
///
/// The face index is folded in at each face boundary, so swapping two
/// faces' contents changes the digest.
pub fn cube_hash(cube: &Cube) -> u64 {
    let mut hash = FNV_OFFSET;
    for (id, face) in cube.iter() {
        hash = fnv1a_byte(hash, id.0);
        hash = fnv1a_grid(hash, face.grid());
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquiprism_core::{CellState, FaceId};
    use liquiprism_space::Topology;

    #[test]
    fn fnv1a_known_vector() {
        // FNV-1a of the single byte 'a' is 0xaf63dc4c8601ec8c.
        assert_eq!(fnv1a_byte(FNV_OFFSET, b'a'), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn equal_cubes_hash_equal() {
        let a = Cube::new(4, Topology::cube());
        let b = Cube::new(4, Topology::cube());
        assert_eq!(cube_hash(&a), cube_hash(&b));
    }

    #[test]
    fn single_cell_changes_digest() {
        let a = Cube::new(4, Topology::cube());
        let mut b = a.clone();
        b.face_mut(FaceId(5))
            .unwrap()
            .set(3, 3, CellState::Alive)
            .unwrap();
        assert_ne!(cube_hash(&a), cube_hash(&b));
    }

    #[test]
    fn face_order_matters() {
        let mut a = Cube::new(3, Topology::cube());
        let mut b = a.clone();
        a.face_mut(FaceId(0)).unwrap().set(1, 1, CellState::Alive).unwrap();
        b.face_mut(FaceId(1)).unwrap().set(1, 1, CellState::Alive).unwrap();
        assert_ne!(cube_hash(&a), cube_hash(&b));
        assert_eq!(
            face_hash(a.face(FaceId(0)).unwrap()),
            face_hash(b.face(FaceId(1)).unwrap())
        );
    }

    #[test]
    fn grid_size_is_part_of_the_digest() {
        let small = Cube::new(2, Topology::cube());
        let large = Cube::new(3, Topology::cube());
        assert_ne!(cube_hash(&small), cube_hash(&large));
    }
}
