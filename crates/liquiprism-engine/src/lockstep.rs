//! Lockstep (synchronous) cube driver.
//!
//! [`LockstepCube`] owns a [`Cube`], the seeded RNG that feeds every
//! random decision, the rule policy and the per-face cadence table. Each
//! call to [`step()`](LockstepCube::step) advances a master tick counter
//! and ticks every due face in ascending face order.
//!
//! # Ordering
//!
//! Faces are ticked one after another, and each reads its siblings'
//! *current* grids. Face 1 therefore sees face 0's new generation within
//! the same step, while face 0 saw face 1's old one. There is no barrier
//! that holds every face back until all six are computed; the fixed
//! 0..5 order is what makes runs reproducible.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`. `LockstepCube` is [`Send`] but
//! carries no internal locking; a multi-threaded host must serialize
//! access per cube.

use std::time::Instant;

use liquiprism_core::{CubeError, FaceId, TopologyError};
use liquiprism_space::{Cube, Face, FillMode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, CubeConfig};
use crate::metrics::StepMetrics;
use crate::perturb::perturb;
use crate::policy::RulePolicy;
use crate::tick::{tick_cube, TickReport};

// Compile-time assertion: LockstepCube is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LockstepCube>();
    }
};

// ── StepReport ──────────────────────────────────────────────────

/// Result of a successful [`LockstepCube::step()`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Master tick reached by this step (1 after the first step).
    pub tick: u64,
    /// One report per face ticked, in face order.
    pub reports: Vec<TickReport>,
    /// Metrics for this step.
    pub metrics: StepMetrics,
}

// ── LockstepCube ────────────────────────────────────────────────

/// Single-threaded driver that ticks a cube's faces in a fixed order.
pub struct LockstepCube {
    cube: Cube,
    rng: ChaCha8Rng,
    policy: RulePolicy,
    cadence: [u32; liquiprism_core::FACE_COUNT],
    fill: FillMode,
    seed: u64,
    tick: u64,
    pending_flips: u64,
    last_metrics: StepMetrics,
}

impl LockstepCube {
    /// Create a driver from a [`CubeConfig`].
    ///
    /// Validates the configuration, seeds the RNG and populates the faces
    /// (random fills consume the RNG face by face, 0 through 5).
    pub fn new(config: CubeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let cube = Cube::filled(config.grid_size, config.topology, config.fill, &mut rng);
        Ok(Self {
            cube,
            rng,
            policy: config.policy,
            cadence: config.cadence,
            fill: config.fill,
            seed: config.seed,
            tick: 0,
            pending_flips: 0,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance the master tick and tick every due face, 0 through 5.
    ///
    /// Each face's rule comes from the policy applied to that face's
    /// activity count from its own previous tick.
    ///
    /// # Errors
    ///
    /// Propagates the first [`CubeError`] from a face tick. Faces ticked
    /// earlier in the same step keep their new generation; the failing
    /// face and the ones after it are untouched. A cube built through
    /// [`new()`](Self::new) always has a consistent layout, so this only
    /// happens if faces were replaced through [`cube_mut()`](Self::cube_mut).
    /// A failed step does not advance the master tick, and pending flips
    /// carry over to the next successful step.
    pub fn step(&mut self) -> Result<StepReport, CubeError> {
        let start = Instant::now();
        let next_tick = self.tick + 1;
        let mut metrics = StepMetrics::default();
        let mut reports = Vec::new();

        for face in FaceId::ALL {
            if !self.is_due(face, next_tick) {
                continue;
            }
            let report = self.tick_face(face)?;
            metrics.faces_ticked += 1;
            if report.rule.is_stochastic() {
                metrics.stochastic_faces += 1;
            }
            metrics.activity[face.index()] = Some(report.activity);
            metrics.births = metrics.births.saturating_add(report.births);
            reports.push(report);
        }

        // Flips stay pending until a step completes.
        metrics.flips = std::mem::take(&mut self.pending_flips);
        self.tick = next_tick;
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.last_metrics = metrics.clone();
        Ok(StepReport {
            tick: next_tick,
            reports,
            metrics,
        })
    }

    /// Tick one face now, outside the cadence schedule.
    ///
    /// Does not advance the master tick.
    pub fn tick_face(&mut self, face: FaceId) -> Result<TickReport, CubeError> {
        let previous = self
            .cube
            .face(face)
            .ok_or(TopologyError::UnknownFace { face })?
            .activity_count();
        let rule = self.policy.select(previous);
        tick_cube(&mut self.cube, face, rule, &mut self.rng)
    }

    /// Whether `face` is scheduled to tick at master tick `tick`.
    ///
    /// Unknown faces are never due.
    pub fn is_due(&self, face: FaceId, tick: u64) -> bool {
        self.cadence
            .get(face.index())
            .is_some_and(|&period| tick % u64::from(period) == 0)
    }

    /// Flip `intensity` random cells of one face.
    pub fn perturb(&mut self, face: FaceId, intensity: usize) -> Result<(), CubeError> {
        let target = self
            .cube
            .face_mut(face)
            .ok_or(TopologyError::UnknownFace { face })?;
        perturb(target, intensity, &mut self.rng);
        self.pending_flips = self.pending_flips.saturating_add(intensity as u64);
        Ok(())
    }

    /// Flip `intensity` random cells on every face, 0 through 5.
    pub fn shake(&mut self, intensity: usize) {
        for face in self.cube.faces_mut() {
            perturb(face, intensity, &mut self.rng);
        }
        let total = (intensity as u64).saturating_mul(FaceId::ALL.len() as u64);
        self.pending_flips = self.pending_flips.saturating_add(total);
    }

    /// Restart from tick 0 with a new seed.
    ///
    /// Reseeds the RNG, clears every face and refills it according to the
    /// configured fill mode, and zeroes all counters.
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.cube.clear();
        if self.fill == FillMode::Random {
            self.cube.randomize(&mut self.rng);
        }
        self.tick = 0;
        self.pending_flips = 0;
        self.last_metrics = StepMetrics::default();
    }

    /// The cube, read-only.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Mutable access to the cube, e.g. to seed a pattern.
    pub fn cube_mut(&mut self) -> &mut Cube {
        &mut self.cube
    }

    /// One face, or `None` for an id outside `0..6`.
    pub fn face(&self, face: FaceId) -> Option<&Face> {
        self.cube.face(face)
    }

    /// Master tick (0 after construction or reset).
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// The seed the RNG was last seeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The active rule policy.
    pub fn policy(&self) -> RulePolicy {
        self.policy
    }

    /// Replace the rule policy from the next tick on.
    pub fn set_policy(&mut self, policy: RulePolicy) {
        self.policy = policy;
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl std::fmt::Debug for LockstepCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockstepCube")
            .field("current_tick", &self.tick)
            .field("seed", &self.seed)
            .field("grid_size", &self.cube.grid_size())
            .field("policy", &self.policy)
            .finish()
    }
}
