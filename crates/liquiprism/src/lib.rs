//! Liquiprism: a binary cellular automaton on the six faces of a cube.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Liquiprism sub-crates. For most users, adding `liquiprism` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use liquiprism::prelude::*;
//!
//! // Six empty 5×5 faces, Conway's rule on every face.
//! let config = CubeConfig {
//!     grid_size: 5,
//!     fill: FillMode::Empty,
//!     policy: RulePolicy::Fixed(Rule::Classic),
//!     ..Default::default()
//! };
//! let mut world = LockstepCube::new(config).unwrap();
//!
//! // A horizontal row of three on face 0.
//! let face = world.cube_mut().face_mut(FaceId(0)).unwrap();
//! for col in 1..=3 {
//!     face.set(1, col, CellState::Alive).unwrap();
//! }
//!
//! let report = world.step().unwrap();
//! assert_eq!(report.tick, 1);
//! assert_eq!(report.metrics.faces_ticked, 6);
//!
//! // The row has turned into a column through (1, 2).
//! let grid = world.face(FaceId(0)).unwrap().grid();
//! for row in 0..=2 {
//!     assert_eq!(grid.get(row, 2), Some(CellState::Alive));
//! }
//! assert_eq!(world.cube().alive_count(), 3);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `liquiprism-core` | Face and direction ids, cell state, errors |
//! | [`space`] | `liquiprism-space` | Topology, grids, faces and neighbour resolution |
//! | [`rules`] | `liquiprism-rules` | Cell-update rules |
//! | [`engine`] | `liquiprism-engine` | Ticking, perturbation and the lockstep driver |
//! | [`obs`] | `liquiprism-obs` | Births, note events, rendering and hashing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, cell state and error types (`liquiprism-core`).
pub use liquiprism_core as types;

/// Cube topology, grids and faces (`liquiprism-space`).
///
/// [`space::Topology`] wires the six faces together;
/// [`space::Face::neighbours`] resolves a cell's neighbourhood across them.
pub use liquiprism_space as space;

/// Cell-update rules (`liquiprism-rules`).
pub use liquiprism_rules as rules;

/// Ticking, perturbation and driving (`liquiprism-engine`).
///
/// [`engine::tick`] advances one face; [`engine::LockstepCube`] owns a
/// cube and advances due faces in a fixed order.
pub use liquiprism_engine as engine;

/// Read-only consumers of cube state (`liquiprism-obs`).
pub use liquiprism_obs as obs;

/// Common imports for typical Liquiprism usage.
///
/// ```rust
/// use liquiprism::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use liquiprism_core::{CellState, Direction, FaceId, FACE_COUNT};

    // Errors
    pub use liquiprism_core::{CubeError, LayoutError, TopologyError};

    // Space
    pub use liquiprism_space::{Cube, Face, FillMode, Grid, Topology};

    // Rules
    pub use liquiprism_rules::Rule;

    // Engine
    pub use liquiprism_engine::{
        perturb, tick, tick_cube, ConfigError, CubeConfig, LockstepCube, RulePolicy, StepMetrics,
        StepReport, TickReport,
    };

    // Consumers
    pub use liquiprism_obs::{cube_hash, newborn_cells, render_cube, NoteEvent, NoteMapper};
}
