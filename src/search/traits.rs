//! Search traits.

use super::exact::Solution;
use crate::error::Result;

/// Trait for center-selection solvers.
pub trait Solver {
    /// Select centers from `points` and return the best subset found.
    ///
    /// Every point must share the same dimensionality.
    fn solve(&self, points: &[Vec<f32>]) -> Result<Solution>;

    /// Get the number of centers this solver selects.
    fn n_centers(&self) -> usize;
}
