//! Exact combinatorial search for optimal center subsets.
//!
//! This module answers one question: out of `N` points, which `K` should
//! become centers so the total nearest-center distance is smallest?
//!
//! ## Why exhaustive?
//!
//! Discrete k-median is NP-hard, and iterative methods (Lloyd-style swaps,
//! local search) only find local minima. For small instances the candidate
//! space `C(N,K)` is enumerable, and enumerating it buys a *provably* optimal
//! answer:
//!
//! ```text
//! candidates = C(N, K)        each costed in O(N·K·D)
//! ```
//!
//! `C(50, 3)` is 19,600 — trivial. `C(50, 10)` is ~10 billion — not. This
//! solver trades runtime for exactness and is meant for small-to-moderate
//! `N` and `K`.
//!
//! ## Determinism
//!
//! Candidates are produced in lexicographic order over index positions, and
//! the incumbent is replaced only on a strictly smaller cost. So when several
//! subsets tie at the minimum, the first one in lexicographic order wins —
//! every run, on every build, including the `parallel` feature's threaded
//! path (which breaks ties by canonical index, not completion order).
//!
//! ## Usage
//!
//! ```rust
//! use terminus::{ExactSearch, Solver};
//!
//! let points = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let solution = ExactSearch::new(2).solve(&points).unwrap();
//! assert_eq!(solution.indices, vec![0, 2]);
//! assert!(solution.complete);
//! ```

mod combinations;
mod exact;
mod traits;

pub use combinations::{binomial, Combinations};
pub use exact::{ExactSearch, Solution};
pub use traits::Solver;
