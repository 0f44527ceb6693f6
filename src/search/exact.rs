//! Exhaustive search over all K-sized center subsets.
//!
//! # The Algorithm
//!
//! 1. Validate: non-empty input, `1 <= K <= N`, uniform dimensionality
//! 2. Enumerate every K-subset of point indices in lexicographic order
//! 3. Cost each candidate: sum of nearest-center distances over all points
//! 4. Keep the incumbent on a strictly smaller cost; return it at the end
//!
//! The strict `<` in step 4 is load-bearing: equal-cost candidates never
//! displace the incumbent, so the first minimal subset in enumeration order
//! is the one returned.
//!
//! # Complexity
//!
//! - **Time**: O(C(N,K) · N · K · D) — exponential in general
//! - **Space**: O(K) beyond the input; candidates are never materialized
//!   together
//!
//! No pruning is attempted. Admissible lower-bounding could skip candidates,
//! but at the instance sizes this solver targets the evaluation loop is
//! already fast, and the simple scan keeps the tie-break order trivially
//! correct.
//!
//! # Cancellation
//!
//! A shared [`AtomicBool`] can be attached with
//! [`with_cancel_flag`](ExactSearch::with_cancel_flag). The flag is polled
//! between candidate evaluations; once set, the search stops and returns the
//! incumbent so far with [`Solution::complete`] set to `false`. A partial
//! solution is a result, not an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::combinations::Combinations;
use super::traits::Solver;
use crate::error::{Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Exhaustive center-subset search.
#[derive(Debug, Clone)]
pub struct ExactSearch {
    /// Number of centers to select.
    k: usize,
    /// Optional cooperative cancellation flag.
    cancel: Option<Arc<AtomicBool>>,
}

/// Outcome of a search: the best center subset seen and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Indices of the chosen centers into the input, ascending.
    pub indices: Vec<usize>,
    /// Owned copies of the chosen center points.
    pub centers: Vec<Vec<f32>>,
    /// Total nearest-center distance across all points.
    pub cost: f32,
    /// Whether enumeration ran to exhaustion. `false` means the search was
    /// cancelled and this is the best incumbent at that moment.
    pub complete: bool,
}

impl ExactSearch {
    /// Create a solver selecting `k` centers.
    pub fn new(k: usize) -> Self {
        Self { k, cancel: None }
    }

    /// Attach a cancellation flag, polled between candidate evaluations.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|f| f.load(Ordering::Relaxed))
    }

    /// Cost of one candidate subset. Dimensions are validated before
    /// enumeration starts, so no per-distance check is needed here.
    fn subset_cost(points: &[Vec<f32>], subset: &[usize]) -> f32 {
        let mut total = 0.0f32;
        for point in points {
            let mut nearest = f32::INFINITY;
            for &c in subset {
                let center = &points[c];
                let sq: f32 = point
                    .iter()
                    .zip(center.iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum();
                let d = sq.sqrt();
                if d < nearest {
                    nearest = d;
                }
            }
            total += nearest;
        }
        total
    }
}

impl Solver for ExactSearch {
    fn solve(&self, points: &[Vec<f32>]) -> Result<Solution> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }

        let n = points.len();
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidCenterCount {
                requested: self.k,
                n_points: n,
            });
        }

        // Reject malformed input before any candidate is enumerated.
        let dim = points[0].len();
        if let Some(p) = points.iter().find(|p| p.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: p.len(),
            });
        }

        // Incumbent scan - parallel when the feature is enabled. Both paths
        // resolve ties toward the lowest canonical enumeration index.
        #[cfg(feature = "parallel")]
        let (best, best_cost, complete) = {
            let interrupted = AtomicBool::new(false);
            let (cost, _, subset) = Combinations::new(n, self.k)
                .enumerate()
                .par_bridge()
                .map(|(idx, subset)| {
                    if self.cancelled() {
                        interrupted.store(true, Ordering::Relaxed);
                        return (f32::INFINITY, usize::MAX, Vec::new());
                    }
                    (Self::subset_cost(points, &subset), idx, subset)
                })
                .reduce(
                    || (f32::INFINITY, usize::MAX, Vec::new()),
                    |a, b| {
                        let ord = a
                            .0
                            .partial_cmp(&b.0)
                            .unwrap_or(std::cmp::Ordering::Equal)
                            .then(a.1.cmp(&b.1));
                        if ord.is_le() {
                            a
                        } else {
                            b
                        }
                    },
                );
            (subset, cost, !interrupted.load(Ordering::Relaxed))
        };

        #[cfg(not(feature = "parallel"))]
        let (best, best_cost, complete) = {
            let mut best_cost = f32::INFINITY;
            let mut best: Vec<usize> = Vec::new();
            let mut complete = true;

            for subset in Combinations::new(n, self.k) {
                if self.cancelled() {
                    complete = false;
                    break;
                }
                let cost = Self::subset_cost(points, &subset);
                if cost < best_cost {
                    best_cost = cost;
                    best = subset;
                }
            }
            (best, best_cost, complete)
        };

        let centers = best.iter().map(|&i| points[i].clone()).collect();
        Ok(Solution {
            indices: best,
            centers,
            cost: best_cost,
            complete,
        })
    }

    fn n_centers(&self) -> usize {
        self.k
    }
}
