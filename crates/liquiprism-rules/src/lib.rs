//! Cell update rules for the Liquiprism cube automaton.
//!
//! Two pure functions map a cell's current state and its neighbourhood to
//! its next state:
//!
//! 1. [`conventional`]: survive on 2 or 3 alive neighbours, born on exactly 4.
//! 2. [`stochastic`]: same survival, but a dead cell is born with
//!    probability [`GRAVITY_BIRTH_PROBABILITY`] when the cell directly
//!    below it on the same face is alive.
//!
//! [`classic`] (Conway's B3/S23) is available as a third choice.
//!
//! The caller selects between them per tick with the [`Rule`] tag.
//! Randomness is always drawn from an RNG passed in by the caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rule;

pub use rule::{
    classic, conventional, stochastic, CellContext, Rule, BIRTH_NEIGHBOURS,
    CLASSIC_BIRTH_NEIGHBOURS, GRAVITY_BIRTH_PROBABILITY, SURVIVAL_NEIGHBOURS,
};
