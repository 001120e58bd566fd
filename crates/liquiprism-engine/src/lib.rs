//! Tick engine for the Liquiprism cube automaton.
//!
//! The core operations are free functions over a face slice:
//!
//! - [`tick`]: compute and commit one face's next generation
//! - [`perturb`]: flip randomly chosen cells of one face
//!
//! [`LockstepCube`] is a single-threaded driver on top of them. It owns a
//! [`Cube`](liquiprism_space::Cube) and a seeded RNG, picks each face's
//! rule from a [`RulePolicy`], honours per-face cadences and records
//! [`StepMetrics`].
//!
//! Nothing here is thread-safe; callers embedding a cube in a
//! multi-threaded host must serialize access to it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod lockstep;
pub mod metrics;
pub mod perturb;
pub mod policy;
pub mod tick;

pub use config::{ConfigError, CubeConfig};
pub use lockstep::{LockstepCube, StepReport};
pub use metrics::StepMetrics;
pub use perturb::perturb;
pub use policy::RulePolicy;
pub use tick::{tick, tick_cube, TickReport};
