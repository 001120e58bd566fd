//! Core types for the Liquiprism cube-surface automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: face and
//! edge identifiers, the binary cell state, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;

pub use cell::{alive_count, CellState, Neighbourhood};
pub use error::{CubeError, LayoutError, TopologyError};
pub use id::{Direction, FaceId, FACE_COUNT};
