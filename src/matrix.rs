//! Cost and working matrices — fixed-capacity square storage.
//!
//! The [`CostMatrix`] is the original input: validated at construction,
//! never mutated afterwards, and the only matrix final costs are ever
//! read from. The crate-internal `WorkingMatrix` is the mutable copy
//! the solve phases reduce and adjust; it is owned by exactly one
//! in-progress solve and each phase is the sole writer for its pass.
//!
//! # Invariants
//! - `1 ≤ dim ≤ MAX_DIM`, enforced at construction.
//! - Every stored row has exactly `dim` meaningful entries; cells beyond
//!   `dim` are zero padding and never read.
//! - no_std compatible; fixed-size arrays, no heap allocation.

use crate::error::SolveError;

/// Maximum supported matrix dimension.
///
/// Matrices are stored as `[[f32; MAX_DIM]; MAX_DIM]` with a runtime
/// dimension, so a solver instance occupies a fixed footprint regardless
/// of the problem size.
pub const MAX_DIM: usize = 64;

/// Entries of the reduced matrix closer to zero than this are treated
/// as zeros. Reduction subtracts a row's (or column's) own minimum, so
/// the argmin cells are exactly 0.0; the epsilon absorbs f32 rounding in
/// cells that reach zero through repeated adjustment instead.
pub(crate) const ZERO_EPS: f32 = 1e-6;

/// Immutable square cost matrix, `1 ≤ dim ≤ MAX_DIM`.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    cells: [[f32; MAX_DIM]; MAX_DIM],
    dim: usize,
}

impl CostMatrix {
    /// Build a cost matrix from row slices.
    ///
    /// # Errors
    /// - [`SolveError::Empty`] if `rows` is empty.
    /// - [`SolveError::TooLarge`] if there are more than [`MAX_DIM`] rows.
    /// - [`SolveError::NotSquare`] if any row's length differs from the
    ///   row count.
    pub fn from_rows(rows: &[&[f32]]) -> Result<Self, SolveError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(SolveError::Empty);
        }
        if dim > MAX_DIM {
            return Err(SolveError::TooLarge { dim });
        }
        let mut cells = [[0.0_f32; MAX_DIM]; MAX_DIM];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(SolveError::NotSquare { rows: dim, cols: row.len() });
            }
            cells[r][..dim].copy_from_slice(row);
        }
        Ok(Self { cells, dim })
    }

    /// Build a cost matrix from a fixed-size array.
    ///
    /// Squareness is guaranteed by the type; only the dimension bounds
    /// can fail ([`SolveError::Empty`], [`SolveError::TooLarge`]).
    pub fn from_array<const N: usize>(rows: [[f32; N]; N]) -> Result<Self, SolveError> {
        if N == 0 {
            return Err(SolveError::Empty);
        }
        if N > MAX_DIM {
            return Err(SolveError::TooLarge { dim: N });
        }
        let mut cells = [[0.0_f32; MAX_DIM]; MAX_DIM];
        for (r, row) in rows.iter().enumerate() {
            cells[r][..N].copy_from_slice(row);
        }
        Ok(Self { cells, dim: N })
    }

    /// Matrix dimension n.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at `(row, col)`. Both indices must be `< dim()`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.dim && col < self.dim);
        self.cells[row][col]
    }

    /// Largest entry in the matrix (used by the maximization transform).
    pub fn max_value(&self) -> f32 {
        let mut max = f32::MIN;
        for row in self.cells[..self.dim].iter() {
            for &v in row[..self.dim].iter() {
                if v > max {
                    max = v;
                }
            }
        }
        max
    }

    pub(crate) fn cells(&self) -> &[[f32; MAX_DIM]; MAX_DIM] {
        &self.cells
    }
}

/// Mutable working copy of a cost matrix for one in-progress solve.
///
/// Derived from a [`CostMatrix`] at REDUCING time and discarded once the
/// loop terminates; only the reduce and adjust phases write to it.
#[derive(Clone, Debug)]
pub(crate) struct WorkingMatrix {
    pub(crate) cells: [[f32; MAX_DIM]; MAX_DIM],
    pub(crate) dim: usize,
}

impl WorkingMatrix {
    pub(crate) fn from_cost(matrix: &CostMatrix) -> Self {
        Self { cells: *matrix.cells(), dim: matrix.dim() }
    }

    /// Zero test on the reduced (non-negative) matrix.
    pub(crate) fn is_zero(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] < ZERO_EPS
    }
}
