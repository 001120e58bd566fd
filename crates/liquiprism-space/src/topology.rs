//! Face adjacency table.
//!
//! A [`Topology`] maps every `(face, direction)` pair to the face on the
//! other side of that edge. It is built once and never mutated; faces do
//! not hold a reference to it, it is passed into every call that needs it.

use liquiprism_core::{Direction, FaceId, TopologyError, FACE_COUNT};

/// One row of the adjacency table: neighbours in up/down/left/right order.
pub type EdgeRow = [FaceId; 4];

/// Standard cube embedding used by [`Topology::cube`].
///
/// Faces 0..3 form a ring around the equator, 4 is the top cap and 5 the
/// bottom cap. Opposite pairs are (0, 2), (1, 3) and (4, 5).
const CUBE_TABLE: [EdgeRow; FACE_COUNT] = [
    [FaceId(4), FaceId(5), FaceId(3), FaceId(1)],
    [FaceId(4), FaceId(5), FaceId(0), FaceId(2)],
    [FaceId(4), FaceId(5), FaceId(1), FaceId(3)],
    [FaceId(4), FaceId(5), FaceId(2), FaceId(0)],
    [FaceId(2), FaceId(0), FaceId(3), FaceId(1)],
    [FaceId(0), FaceId(2), FaceId(3), FaceId(1)],
];

/// Immutable map from `(face, direction)` to the adjacent face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    table: [EdgeRow; FACE_COUNT],
}

impl Topology {
    /// The cube's face-adjacency graph.
    pub fn cube() -> Self {
        Self { table: CUBE_TABLE }
    }

    /// Every face is its own neighbour on all four edges.
    ///
    /// Not a cube embedding; used to run a single face in isolation
    /// with its borders folded back onto itself.
    pub fn self_wrapped() -> Self {
        let mut table = [[FaceId(0); 4]; FACE_COUNT];
        for face in FaceId::ALL {
            table[face.index()] = [face; 4];
        }
        Self { table }
    }

    /// Build a topology from an explicit table.
    ///
    /// Returns `Err(TopologyError::DanglingEdge)` if any entry points at a
    /// face outside `0..6`.
    pub fn from_table(table: [EdgeRow; FACE_COUNT]) -> Result<Self, TopologyError> {
        for face in FaceId::ALL {
            for direction in Direction::ALL {
                let target = table[face.index()][direction.index()];
                if !target.is_valid() {
                    return Err(TopologyError::DanglingEdge {
                        face,
                        direction,
                        target,
                    });
                }
            }
        }
        Ok(Self { table })
    }

    /// The face adjacent to `face` across its `direction` edge.
    pub fn resolve(&self, face: FaceId, direction: Direction) -> Result<FaceId, TopologyError> {
        Ok(self.edges(face)?[direction.index()])
    }

    /// Like [`resolve`](Self::resolve), taking the direction by name.
    ///
    /// Unknown names fail with [`TopologyError::UnknownDirection`].
    pub fn resolve_named(&self, face: FaceId, direction: &str) -> Result<FaceId, TopologyError> {
        let direction = direction.parse::<Direction>()?;
        self.resolve(face, direction)
    }

    /// All four neighbours of `face`, in up/down/left/right order.
    pub fn edges(&self, face: FaceId) -> Result<&EdgeRow, TopologyError> {
        self.table
            .get(face.index())
            .ok_or(TopologyError::UnknownFace { face })
    }

    /// The unique face that shares no edge with `face`.
    ///
    /// Returns `None` when the row does not leave exactly one other face
    /// unreferenced (self-wrapped or otherwise degenerate tables).
    pub fn opposite(&self, face: FaceId) -> Option<FaceId> {
        let row = self.edges(face).ok()?;
        let mut candidates = FaceId::ALL
            .into_iter()
            .filter(|&f| f != face && !row.contains(&f));
        let only = candidates.next()?;
        candidates.next().is_none().then_some(only)
    }

    /// Whether the table is a valid embedding of a cube's faces.
    ///
    /// Checks that every face has four distinct neighbours other than
    /// itself, adjacency is symmetric, and the one face left out of each
    /// row is a consistent opposite.
    pub fn is_cube_embedding(&self) -> bool {
        FaceId::ALL.into_iter().all(|face| {
            let row = &self.table[face.index()];
            let distinct = row
                .iter()
                .enumerate()
                .all(|(i, f)| *f != face && !row[..i].contains(f));
            let symmetric = row
                .iter()
                .all(|f| self.table[f.index()].contains(&face));
            let opposite = self
                .opposite(face)
                .and_then(|o| self.opposite(o))
                .is_some_and(|back| back == face);
            distinct && symmetric && opposite
        })
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::cube()
    }
}
