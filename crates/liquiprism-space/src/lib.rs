//! Spatial structures for the Liquiprism cube automaton.
//!
//! - [`Topology`]: the fixed face adjacency table
//! - [`Grid`]: square row-major cell storage
//! - [`Face`]: one automaton plane with its previous generation and
//!   activity count, and cross-border neighbour resolution
//! - [`Cube`]: the owning ensemble of six faces
//!
//! Faces never point at each other. Every operation that needs a face's
//! siblings takes `(face_id, &topology, &siblings)` as parameters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube;
pub mod face;
pub mod grid;
pub mod topology;

pub use cube::{Cube, FillMode};
pub use face::Face;
pub use grid::Grid;
pub use topology::{EdgeRow, Topology};
