//! Benchmark profiles for the Liquiprism cube automaton.
//!
//! Provides pre-built [`CubeConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_profile`]: six 32x32 faces (~6K cells), default policy
//! - [`stress_profile`]: six 128x128 faces (~98K cells), default policy
//! - [`staggered_profile`]: reference size with faces on cadences 1..=6

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use liquiprism_engine::{CubeConfig, RulePolicy};
use liquiprism_space::FillMode;

/// Reference profile: six 32x32 randomly filled faces.
pub fn reference_profile(seed: u64) -> CubeConfig {
    CubeConfig {
        grid_size: 32,
        fill: FillMode::Random,
        seed,
        policy: RulePolicy::default(),
        ..Default::default()
    }
}

/// Stress profile: six 128x128 randomly filled faces.
pub fn stress_profile(seed: u64) -> CubeConfig {
    CubeConfig {
        grid_size: 128,
        ..reference_profile(seed)
    }
}

/// Reference size with face `i` ticking every `i + 1` master ticks.
///
/// Mirrors a host that gives each face its own tempo.
pub fn staggered_profile(seed: u64) -> CubeConfig {
    CubeConfig {
        cadence: [1, 2, 3, 4, 5, 6],
        ..reference_profile(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        for cfg in [reference_profile(1), stress_profile(1), staggered_profile(1)] {
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn stress_is_larger_than_reference() {
        assert!(stress_profile(0).grid_size > reference_profile(0).grid_size);
    }
}
