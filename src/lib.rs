//! # terminus
//!
//! Exact facility-location search over small point sets: choose the K
//! "terminal" points that minimize the total distance from every point to
//! its nearest chosen center.
//!
//! The solver is exhaustive by design. It enumerates all `C(N,K)` candidate
//! subsets lazily, costs each one, and returns the provable global minimum
//! with a deterministic tie-break (first minimal subset in lexicographic
//! order). Point generation and rendering are collaborators around that
//! core, not part of it.
//!
//! ```rust
//! use terminus::{ExactSearch, PointSource, Solver, UniformSource};
//!
//! let points = UniformSource::new().with_seed(42).points(8, 2);
//! let solution = ExactSearch::new(2).solve(&points).unwrap();
//!
//! assert_eq!(solution.indices.len(), 2);
//! assert!(solution.complete);
//! ```

/// Error types used across `terminus`.
pub mod error;
pub mod generate;
pub mod metric;
pub mod render;
pub mod search;

pub use error::{Error, Result};
pub use generate::{PointSource, RatioSource, UniformSource};
pub use metric::{assignment_cost, euclidean};
pub use render::{scatter_svg_2d, scatter_svg_3d};
pub use search::{binomial, Combinations, ExactSearch, Solution, Solver};
