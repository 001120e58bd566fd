//! Read-only consumers of Liquiprism cube state.
//!
//! Nothing in this crate mutates a face. Each module turns the state a
//! tick left behind into something an outside collaborator can use:
//!
//! - [`births`]: which cells were just born on a face
//! - [`notes`]: mapping those births to note events for a sound engine
//! - [`render`]: plain-text dumps of faces and cubes
//! - [`hash`]: FNV-1a digests for determinism checks

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod births;
pub mod hash;
pub mod notes;
pub mod render;

pub use births::{newborn_cells, NewbornCells};
pub use hash::{cube_hash, face_hash};
pub use notes::{NoteEvent, NoteMapper, NoteMapperBuilder};
pub use render::render_cube;
