//! Single-face tick: compute the next generation, then commit it.
//!
//! Every read during a tick sees pre-tick state. The next-generation grid
//! is built in a fresh buffer and never read back while it is being
//! filled, and sibling faces are read as they currently stand. Whether a
//! sibling has already been ticked in the caller's current pass is the
//! caller's business; there is no barrier across faces.

use liquiprism_core::{CellState, CubeError, FaceId, LayoutError};
use liquiprism_rules::{CellContext, Rule};
use liquiprism_space::{Cube, Face, Grid, Topology};
use rand::Rng;

/// Outcome of a successful [`tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// The face that was ticked.
    pub face: FaceId,
    /// The rule that was applied.
    pub rule: Rule,
    /// Cells that changed state (`births + deaths`).
    pub activity: u32,
    /// Cells that went from dead to alive.
    pub births: u32,
    /// Cells that went from alive to dead.
    pub deaths: u32,
}

/// Advance face `face_id` of `faces` by one generation.
///
/// For every cell in row-major order the neighbourhood is resolved
/// against the pre-tick grids and `rule` picks the next state. Once the
/// whole grid is computed the face's previous generation becomes the
/// pre-tick grid, its current grid the new one, and its activity count
/// the number of changed cells.
///
/// # Errors
///
/// Fails with [`CubeError::InvalidTopology`] if `face_id` is not in
/// `topology`, and with [`CubeError::InvalidConfiguration`] if `faces` is
/// empty, lacks `face_id` or a sibling it borders, or mixes grid sizes.
/// On error nothing has been modified.
pub fn tick<R: Rng>(
    faces: &mut [Face],
    face_id: FaceId,
    topology: &Topology,
    rule: Rule,
    rng: &mut R,
) -> Result<TickReport, CubeError> {
    topology.edges(face_id)?;
    if faces.is_empty() {
        return Err(LayoutError::NoFaces.into());
    }
    let idx = face_id.index();
    let siblings: &[Face] = &*faces;
    let face = siblings.get(idx).ok_or(LayoutError::MissingFace {
        face: face_id,
        available: siblings.len(),
    })?;

    let (next, births, deaths) = next_generation(face, face_id, topology, siblings, rule, rng)?;

    let births = saturating_u32(births);
    let deaths = saturating_u32(deaths);
    let activity = births.saturating_add(deaths);
    faces[idx].commit_generation(next, activity);

    Ok(TickReport {
        face: face_id,
        rule,
        activity,
        births,
        deaths,
    })
}

/// [`tick`] over a [`Cube`]'s own faces and topology.
pub fn tick_cube<R: Rng>(
    cube: &mut Cube,
    face_id: FaceId,
    rule: Rule,
    rng: &mut R,
) -> Result<TickReport, CubeError> {
    let (faces, topology) = cube.split_mut();
    tick(faces, face_id, topology, rule, rng)
}

/// Build the next grid for `face` without touching any face.
fn next_generation<R: Rng>(
    face: &Face,
    face_id: FaceId,
    topology: &Topology,
    siblings: &[Face],
    rule: Rule,
    rng: &mut R,
) -> Result<(Grid, usize, usize), CubeError> {
    let current = face.grid();
    let size = current.size();
    let mut next = Grid::new(size);
    let mut births = 0usize;
    let mut deaths = 0usize;

    for (row, col, state) in current.iter() {
        let neighbours = face.neighbours(row, col, face_id, topology, siblings)?;
        let ctx = CellContext::new(row, col, current);
        let next_state = rule.apply(state, &neighbours, ctx, rng);
        match (state, next_state) {
            (CellState::Dead, CellState::Alive) => births += 1,
            (CellState::Alive, CellState::Dead) => deaths += 1,
            _ => {}
        }
        next.set(row, col, next_state)?;
    }

    Ok((next, births, deaths))
}

fn saturating_u32(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
