//! Error taxonomy for matrix construction and solving.
//!
//! All errors are reported synchronously to the caller of the failing
//! operation; none are silently recovered and no partial results are
//! returned on failure.

use core::fmt;

/// Errors produced by [`CostMatrix`] construction and the solve loop.
///
/// [`CostMatrix`]: crate::matrix::CostMatrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Input rows do not form a square matrix.
    NotSquare {
        /// Number of input rows.
        rows: usize,
        /// Length of the first row that does not match `rows`.
        cols: usize,
    },
    /// The input matrix has zero rows.
    Empty,
    /// The input dimension exceeds [`MAX_DIM`](crate::matrix::MAX_DIM).
    TooLarge {
        /// Requested dimension.
        dim: usize,
    },
    /// A result accessor was invoked before a completed solve.
    InvalidState,
    /// The adjuster was invoked with no uncovered cell remaining.
    ///
    /// Unreachable while the solve-loop invariant holds (the adjuster
    /// only runs when the cover is smaller than the dimension); kept as
    /// a hard failure rather than a silent minimum-of-empty.
    NoUncoveredCell,
    /// The cover never reached the matrix dimension within the pass bound.
    NonTermination {
        /// Adjustment passes performed before giving up.
        passes: u32,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SolveError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square: {} rows but a row of length {}", rows, cols)
            }
            SolveError::Empty => write!(f, "matrix has no rows"),
            SolveError::TooLarge { dim } => {
                write!(
                    f,
                    "dimension {} exceeds the supported maximum of {}",
                    dim,
                    crate::matrix::MAX_DIM
                )
            }
            SolveError::InvalidState => {
                write!(f, "no completed solve: call resolve() before reading results")
            }
            SolveError::NoUncoveredCell => {
                write!(f, "adjustment requested but every cell is covered")
            }
            SolveError::NonTermination { passes } => {
                write!(f, "cover did not reach the matrix dimension after {} passes", passes)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SolveError {}
