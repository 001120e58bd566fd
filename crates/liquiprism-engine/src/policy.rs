//! Per-face rule selection.

use liquiprism_rules::Rule;

/// How a driver picks the rule for a face's next tick.
///
/// The tick engine itself never consults a policy; it is handed the
/// chosen [`Rule`] directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulePolicy {
    /// Always apply the same rule.
    Fixed(Rule),
    /// Apply [`Rule::Stochastic`] while the face's previous activity is
    /// below `threshold`, and `otherwise` the rest of the time.
    ///
    /// Nudges stagnating faces with randomness.
    ActivityThreshold {
        /// Activity below which the stochastic rule kicks in.
        threshold: u32,
        /// Rule for faces at or above the threshold.
        otherwise: Rule,
    },
}

impl RulePolicy {
    /// Default activity threshold.
    pub const DEFAULT_THRESHOLD: u32 = 3;

    /// The rule for a face whose last tick changed `previous_activity` cells.
    pub fn select(&self, previous_activity: u32) -> Rule {
        match *self {
            Self::Fixed(rule) => rule,
            Self::ActivityThreshold {
                threshold,
                otherwise,
            } => {
                if previous_activity < threshold {
                    Rule::Stochastic
                } else {
                    otherwise
                }
            }
        }
    }
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self::ActivityThreshold {
            threshold: Self::DEFAULT_THRESHOLD,
            otherwise: Rule::Conventional,
        }
    }
}
