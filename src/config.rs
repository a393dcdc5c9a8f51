//! Configuration for synchronization analysis.

use crate::error::ConfigError;

/// Default tolerance when clipping finalized values into [0, 1].
pub const DEFAULT_CLIP_EPSILON: f64 = 1e-9;

/// Configuration options for [`SyncEngine`](crate::SyncEngine).
///
/// Built once at engine construction and immutable afterwards; there are no
/// process-wide defaults for the tau set.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Coincidence-window half-widths in sample-index units, sorted
    /// ascending. Validated non-empty, positive, and duplicate-free.
    pub taus: Vec<u32>,

    /// Tolerance when clipping finalized values into [0, 1]
    /// (default: [`DEFAULT_CLIP_EPSILON`]).
    ///
    /// Values beyond the boundary by more than this are treated as an
    /// upstream bug and reported, not clamped.
    pub clip_epsilon: f64,
}

impl Config {
    /// Validate a tau set and build a configuration from it.
    ///
    /// The set must be non-empty, strictly positive, and free of
    /// duplicates. Values are stored sorted ascending; input order only
    /// ever affected diagnostic iteration, never scores.
    pub fn with_taus(taus: &[u32]) -> Result<Self, ConfigError> {
        if taus.is_empty() {
            return Err(ConfigError::EmptyTauSet);
        }
        if taus.contains(&0) {
            return Err(ConfigError::ZeroTau);
        }
        let mut sorted = taus.to_vec();
        sorted.sort_unstable();
        if let Some(window) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigError::DuplicateTau(window[0]));
        }
        Ok(Self {
            taus: sorted,
            clip_epsilon: DEFAULT_CLIP_EPSILON,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_sorts_valid_taus() {
        let config = Config::with_taus(&[10, 1, 5]).unwrap();
        assert_eq!(config.taus, vec![1, 5, 10]);
        assert_eq!(config.clip_epsilon, DEFAULT_CLIP_EPSILON);
    }

    #[test]
    fn rejects_empty_tau_set() {
        assert_eq!(Config::with_taus(&[]), Err(ConfigError::EmptyTauSet));
    }

    #[test]
    fn rejects_zero_tau() {
        assert_eq!(Config::with_taus(&[5, 0]), Err(ConfigError::ZeroTau));
    }

    #[test]
    fn rejects_duplicate_tau() {
        assert_eq!(Config::with_taus(&[5, 3, 5]), Err(ConfigError::DuplicateTau(5)));
    }
}
