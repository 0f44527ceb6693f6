use core::fmt;

/// Result alias for `terminus`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the metric, enumerator, and search primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input point set was empty.
    EmptyInput,

    /// Two points of unequal dimensionality were compared.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid number of terminal points requested.
    InvalidCenterCount {
        /// Requested count.
        requested: usize,
        /// Number of points available.
        n_points: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidCenterCount {
                requested,
                n_points,
            } => {
                write!(f, "cannot choose {requested} centers from {n_points} points")
            }
        }
    }
}

impl std::error::Error for Error {}
