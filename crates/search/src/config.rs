//! Negamax configuration parameters.
//!
//! These parameters control how deep the search looks and how terminal
//! positions are weighed against heuristic scores.

/// Default search depth, in plies.
pub const DEFAULT_DEPTH: usize = 3;

/// Score of a won terminal position. The heuristic can reach at most
/// 10 points per line over 80 lines (Ultimate: 9 boards x 8 + 8 meta lines),
/// so a win must be worth more than 800 to dominate any frontier estimate.
pub const DEFAULT_WIN_SCORE: f32 = 1000.0;

/// Negamax configuration parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of plies explored below the root.
    pub max_depth: usize,

    /// Magnitude of a terminal payoff. A terminal state scores
    /// `payoff * player.sign() * win_score`.
    pub win_score: f32,

    /// Use alpha-beta pruning. Returns the same move as the full search.
    pub pruning: bool,

    /// Explore root moves in parallel on the rayon thread pool.
    /// Returns the same move as the sequential search.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            win_score: DEFAULT_WIN_SCORE,
            pruning: true,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Create a new config with the specified depth.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Plain negamax: no pruning, sequential. Used as the reference search.
    pub fn exhaustive(max_depth: usize) -> Self {
        Self {
            max_depth,
            pruning: false,
            parallel: false,
            ..Default::default()
        }
    }

    /// Same config with parallel root exploration switched on or off.
    pub fn parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 3);
        assert!((config.win_score - 1000.0).abs() < 1e-5);
        assert!(config.pruning);
        assert!(!config.parallel);
    }

    #[test]
    fn test_with_depth() {
        let config = SearchConfig::with_depth(5);
        assert_eq!(config.max_depth, 5);
        // Other values should be default
        assert!(config.pruning);
        assert!((config.win_score - DEFAULT_WIN_SCORE).abs() < 1e-5);
    }

    #[test]
    fn test_exhaustive() {
        let config = SearchConfig::exhaustive(2);
        assert_eq!(config.max_depth, 2);
        assert!(!config.pruning);
        assert!(!config.parallel);
    }

    #[test]
    fn test_parallel_toggle() {
        let config = SearchConfig::with_depth(4).parallel(true);
        assert!(config.parallel);
        assert_eq!(config.max_depth, 4);
    }
}
