//! Cube configuration, validation, and error types.
//!
//! [`CubeConfig`] is the input for constructing a
//! [`LockstepCube`](crate::LockstepCube). [`validate()`](CubeConfig::validate)
//! checks structural invariants at startup so that ticking a validated
//! cube cannot fail on layout grounds.

use std::error::Error;
use std::fmt;

use liquiprism_core::{FaceId, FACE_COUNT};
use liquiprism_space::{FillMode, Topology};

use crate::policy::RulePolicy;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CubeConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `grid_size` is zero.
    ZeroGridSize,
    /// `grid_size * grid_size` does not fit in the `u32` activity counter.
    GridTooLarge {
        /// The configured edge length.
        grid_size: usize,
        /// Largest accepted edge length.
        max: usize,
    },
    /// A face's cadence is zero, so it would never be due.
    ZeroCadence {
        /// The face with the zero cadence.
        face: FaceId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGridSize => write!(f, "grid_size must be at least 1"),
            Self::GridTooLarge { grid_size, max } => {
                write!(f, "grid_size {grid_size} exceeds maximum of {max}")
            }
            Self::ZeroCadence { face } => {
                write!(f, "cadence for face {face} must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {}

// ── CubeConfig ─────────────────────────────────────────────────────

/// Complete configuration for a lockstep cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeConfig {
    /// Edge length of every face. Default: 5.
    pub grid_size: usize,
    /// Initial population of the faces. Default: random.
    pub fill: FillMode,
    /// Seed for the driver's RNG (fill, stochastic rule, perturbation).
    pub seed: u64,
    /// Face adjacency. Default: [`Topology::cube`].
    pub topology: Topology,
    /// Rule selection per face per tick.
    pub policy: RulePolicy,
    /// Master ticks between successive ticks of each face, indexed by
    /// face id. A face is due when its cadence divides the master tick.
    /// Default: every face every tick.
    pub cadence: [u32; FACE_COUNT],
}

impl CubeConfig {
    /// Largest edge length whose cell count still fits a `u32`.
    pub const MAX_GRID_SIZE: usize = u16::MAX as usize;

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.grid_size > Self::MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                grid_size: self.grid_size,
                max: Self::MAX_GRID_SIZE,
            });
        }
        for (face, &period) in FaceId::ALL.iter().zip(&self.cadence) {
            if period == 0 {
                return Err(ConfigError::ZeroCadence { face: *face });
            }
        }
        Ok(())
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            fill: FillMode::Random,
            seed: 0,
            topology: Topology::cube(),
            policy: RulePolicy::default(),
            cadence: [1; FACE_COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = CubeConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.grid_size, 5);
        assert_eq!(cfg.fill, FillMode::Random);
        assert!(cfg.topology.is_cube_embedding());
    }

    #[test]
    fn zero_grid_size_rejected() {
        let cfg = CubeConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroGridSize));
    }

    #[test]
    fn oversized_grid_rejected() {
        let cfg = CubeConfig {
            grid_size: CubeConfig::MAX_GRID_SIZE + 1,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn zero_cadence_names_the_face() {
        let cfg = CubeConfig {
            cadence: [1, 2, 0, 1, 1, 1],
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err, ConfigError::ZeroCadence { face: FaceId(2) });
        assert_eq!(err.to_string(), "cadence for face 2 must be at least 1");
    }
}
