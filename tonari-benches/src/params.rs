//! Benchmark parameter types.

use std::fmt;

/// Parameters for a component-size benchmark run.
#[derive(Clone, Debug)]
pub struct ComponentBenchParams {
    /// Number of points in the cloud.
    pub point_count: usize,
    /// Connectivity distance threshold.
    pub threshold: f64,
}

impl fmt::Display for ComponentBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},t={}", self.point_count, self.threshold)
    }
}
