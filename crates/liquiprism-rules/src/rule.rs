//! The [`Rule`] tag and the update functions it selects between.

use std::fmt;
use std::ops::RangeInclusive;

use liquiprism_core::{alive_count, CellState};
use liquiprism_space::Grid;
use rand::Rng;

/// Alive-neighbour counts under which a living cell survives.
pub const SURVIVAL_NEIGHBOURS: RangeInclusive<usize> = 2..=3;

/// Alive-neighbour count at which a dead cell is born under Rule 1.
///
/// Deliberately 4, not Conway's 3.
pub const BIRTH_NEIGHBOURS: usize = 4;

/// Alive-neighbour count at which a dead cell is born under [`Rule::Classic`].
pub const CLASSIC_BIRTH_NEIGHBOURS: usize = 3;

/// Chance that a dead cell with a living cell below it is born under Rule 2.
pub const GRAVITY_BIRTH_PROBABILITY: f64 = 0.33;

/// Which update function to apply to a face for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Rule 1: deterministic, see [`conventional`].
    #[default]
    Conventional,
    /// Rule 2: randomized births from below, see [`stochastic`].
    Stochastic,
    /// Conway's B3/S23, see [`classic`].
    Classic,
}

impl Rule {
    /// Whether applying this rule may consume randomness.
    pub fn is_stochastic(self) -> bool {
        self == Self::Stochastic
    }

    /// Compute the next state of one cell.
    ///
    /// `ctx` is only read by [`Rule::Stochastic`], and `rng` is only drawn
    /// from on the stochastic birth branch.
    pub fn apply<R: Rng>(
        self,
        current: CellState,
        neighbours: &[CellState],
        ctx: CellContext<'_>,
        rng: &mut R,
    ) -> CellState {
        match self {
            Self::Conventional => conventional(current, neighbours),
            Self::Stochastic => stochastic(current, neighbours, ctx, rng),
            Self::Classic => classic(current, neighbours),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conventional => f.write_str("conventional"),
            Self::Stochastic => f.write_str("stochastic"),
            Self::Classic => f.write_str("classic"),
        }
    }
}

/// Where a cell sits, for rules that look beyond the neighbour list.
#[derive(Clone, Copy, Debug)]
pub struct CellContext<'a> {
    /// Row of the cell on its face.
    pub row: usize,
    /// Column of the cell on its face.
    pub col: usize,
    /// The owning face's grid as it was before this tick.
    pub grid: &'a Grid,
}

impl<'a> CellContext<'a> {
    /// Context for cell `(row, col)` of `grid`.
    pub fn new(row: usize, col: usize, grid: &'a Grid) -> Self {
        Self { row, col, grid }
    }

    /// State of the cell directly below (`row + 1`), dead past the last row.
    pub fn below(&self) -> CellState {
        self.grid.get_or_dead(self.row + 1, self.col)
    }
}

/// Rule 1.
///
/// A living cell survives with 2 or 3 alive neighbours and dies otherwise.
/// A dead cell is born with exactly 4 alive neighbours.
pub fn conventional(current: CellState, neighbours: &[CellState]) -> CellState {
    life_like(current, neighbours, BIRTH_NEIGHBOURS)
}

/// Conway's rule: as [`conventional`], but births happen on exactly 3.
pub fn classic(current: CellState, neighbours: &[CellState]) -> CellState {
    life_like(current, neighbours, CLASSIC_BIRTH_NEIGHBOURS)
}

fn life_like(current: CellState, neighbours: &[CellState], birth: usize) -> CellState {
    let alive = alive_count(neighbours);
    match current {
        CellState::Alive => SURVIVAL_NEIGHBOURS.contains(&alive).into(),
        CellState::Dead => (alive == birth).into(),
    }
}

/// Rule 2.
///
/// A living cell behaves exactly as under [`conventional`]. A dead cell
/// whose lower neighbour on the same face is alive in the pre-tick grid
/// is born with probability [`GRAVITY_BIRTH_PROBABILITY`]; any other dead
/// cell stays dead. The neighbour count plays no part in births.
pub fn stochastic<R: Rng>(
    current: CellState,
    neighbours: &[CellState],
    ctx: CellContext<'_>,
    rng: &mut R,
) -> CellState {
    match current {
        CellState::Alive => conventional(current, neighbours),
        CellState::Dead if ctx.below().is_alive() => {
            rng.random_bool(GRAVITY_BIRTH_PROBABILITY).into()
        }
        CellState::Dead => CellState::Dead,
    }
}
