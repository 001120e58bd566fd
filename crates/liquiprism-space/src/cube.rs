//! The six-face ensemble.

use liquiprism_core::{FaceId, LayoutError, FACE_COUNT};
use rand::Rng;

use crate::face::Face;
use crate::topology::Topology;

/// How a freshly built cube is populated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    /// Every cell dead.
    Empty,
    /// Every cell an independent fair coin flip.
    #[default]
    Random,
}

/// Six faces addressed by [`FaceId`], plus the topology that wires them.
///
/// The cube owns its faces; faces reach their siblings only through the
/// slice handed to them by whoever holds the cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    faces: Vec<Face>,
    topology: Topology,
}

impl Cube {
    /// Six all-dead faces of edge length `grid_size`.
    pub fn new(grid_size: usize, topology: Topology) -> Self {
        Self {
            faces: (0..FACE_COUNT).map(|_| Face::new(grid_size)).collect(),
            topology,
        }
    }

    /// Build a cube and populate it according to `fill`.
    ///
    /// Random fills consume the RNG face by face, 0 through 5.
    pub fn filled<R: Rng>(grid_size: usize, topology: Topology, fill: FillMode, rng: &mut R) -> Self {
        let mut cube = Self::new(grid_size, topology);
        if fill == FillMode::Random {
            cube.randomize(rng);
        }
        cube
    }

    /// Assemble a cube from existing faces.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NoFaces`] if `faces` is empty.
    /// - [`LayoutError::FaceCount`] if there are not exactly six faces.
    /// - [`LayoutError::GridSizeMismatch`] if the faces disagree on size.
    pub fn from_faces(faces: Vec<Face>, topology: Topology) -> Result<Self, LayoutError> {
        let Some(first) = faces.first() else {
            return Err(LayoutError::NoFaces);
        };
        if faces.len() != FACE_COUNT {
            return Err(LayoutError::FaceCount {
                expected: FACE_COUNT,
                found: faces.len(),
            });
        }
        let expected = first.grid_size();
        for (face, f) in FaceId::ALL.into_iter().zip(&faces) {
            if f.grid_size() != expected {
                return Err(LayoutError::GridSizeMismatch {
                    face,
                    expected,
                    found: f.grid_size(),
                });
            }
        }
        Ok(Self { faces, topology })
    }

    /// Randomize every face, 0 through 5.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for face in &mut self.faces {
            face.randomize(rng);
        }
    }

    /// Clear every face back to all dead.
    pub fn clear(&mut self) {
        for face in &mut self.faces {
            face.clear();
        }
    }

    /// Edge length shared by all faces.
    pub fn grid_size(&self) -> usize {
        self.faces.first().map_or(0, Face::grid_size)
    }

    /// The adjacency table.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// All faces, indexed by face id.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Mutable access to all faces.
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// Split into the mutable face slice and the shared topology.
    pub fn split_mut(&mut self) -> (&mut [Face], &Topology) {
        (&mut self.faces, &self.topology)
    }

    /// One face, or `None` for an id outside `0..6`.
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id.index())
    }

    /// Mutable access to one face.
    pub fn face_mut(&mut self, id: FaceId) -> Option<&mut Face> {
        self.faces.get_mut(id.index())
    }

    /// Iterate over `(id, face)` pairs in face order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        FaceId::ALL.into_iter().zip(&self.faces)
    }

    /// Total number of alive cells across all faces.
    pub fn alive_count(&self) -> usize {
        self.faces.iter().map(|f| f.grid().alive_count()).sum()
    }
}
