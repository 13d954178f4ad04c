//! Solver statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one solve.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SolverStats {
    /// Search nodes entered (one per partial assignment explored).
    pub nodes_visited: u64,

    /// Choices undone after their subtree failed.
    pub backtracks: u64,

    /// Subtrees skipped because the same state already failed.
    pub memo_hits: u64,

    /// Total time spent solving (microseconds).
    pub time_us: u64,
}

impl SolverStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
