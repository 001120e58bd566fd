//! Per-step metrics for the lockstep driver.
//!
//! [`StepMetrics`] captures what happened during one
//! [`LockstepCube::step`](crate::LockstepCube::step): timing, which faces
//! ticked and under which rule, and how much they changed.

use liquiprism_core::FACE_COUNT;

/// Timing and activity data collected during a single step.
///
/// The driver populates these fields after each `step()` call; consumers
/// read them from the returned report or from `last_metrics()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Number of faces that were due and ticked.
    pub faces_ticked: u32,
    /// How many of those were ticked with the stochastic rule.
    pub stochastic_faces: u32,
    /// Activity of each face this step; `None` if the face was not due.
    pub activity: [Option<u32>; FACE_COUNT],
    /// Total births across all ticked faces.
    pub births: u32,
    /// Perturbation draws applied since the previous successful step.
    pub flips: u64,
}

impl StepMetrics {
    /// Sum of activity over the faces that ticked.
    pub fn total_activity(&self) -> u64 {
        self.activity.iter().flatten().map(|&a| u64::from(a)).sum()
    }
}
