//! Preprocessing — maximization inversion and row/column reduction.
//!
//! Subtracting each row's minimum and then each column's minimum
//! introduces zeros without changing which assignment is optimal.
//! Postcondition: every row and every column of the working matrix
//! contains at least one zero and no entry is negative.

use crate::matrix::{CostMatrix, WorkingMatrix};

/// Produce the reduced working matrix for one solve.
///
/// When `maximize` is set, every entry `c` first becomes `max(matrix) − c`
/// so the rest of the pipeline solves the equivalent minimization
/// problem. The cost matrix itself is never touched — final costs are
/// always reported from the untransformed original.
pub(crate) fn prepare(matrix: &CostMatrix, maximize: bool) -> WorkingMatrix {
    let mut work = WorkingMatrix::from_cost(matrix);
    let n = work.dim;

    if maximize {
        let max = matrix.max_value();
        for row in work.cells[..n].iter_mut() {
            for v in row[..n].iter_mut() {
                *v = max - *v;
            }
        }
    }

    // Row reduction
    for row in work.cells[..n].iter_mut() {
        let min = row[..n].iter().copied().fold(f32::MAX, f32::min);
        for v in row[..n].iter_mut() {
            *v -= min;
        }
    }

    // Column reduction on the row-reduced matrix
    for c in 0..n {
        let min = (0..n).map(|r| work.cells[r][c]).fold(f32::MAX, f32::min);
        for r in 0..n {
            work.cells[r][c] -= min;
        }
    }

    work
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CostMatrix;

    fn assert_reduced(work: &WorkingMatrix) {
        let n = work.dim;
        for r in 0..n {
            assert!(
                (0..n).any(|c| work.is_zero(r, c)),
                "row {} has no zero after reduction",
                r
            );
            for c in 0..n {
                assert!(work.cells[r][c] >= 0.0, "negative entry at ({}, {})", r, c);
            }
        }
        for c in 0..n {
            assert!(
                (0..n).any(|r| work.is_zero(r, c)),
                "column {} has no zero after reduction",
                c
            );
        }
    }

    #[test]
    fn test_every_row_and_column_gains_a_zero() {
        let m = CostMatrix::from_array([
            [4.0, 1.0, 3.0],
            [2.0, 0.0, 5.0],
            [3.0, 2.0, 2.0],
        ])
        .unwrap();
        let work = prepare(&m, false);
        assert_reduced(&work);
    }

    #[test]
    fn test_known_reduction_values() {
        // Row minima 1, 0, 2; then column minimum 1 in the first column.
        let m = CostMatrix::from_array([
            [4.0, 1.0, 3.0],
            [2.0, 0.0, 5.0],
            [3.0, 2.0, 2.0],
        ])
        .unwrap();
        let work = prepare(&m, false);
        let expected = [[2.0, 0.0, 2.0], [1.0, 0.0, 5.0], [0.0, 0.0, 0.0]];
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(work.cells[r][c], expected[r][c], "cell ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_maximize_inverts_against_matrix_max() {
        let m = CostMatrix::from_array([[1.0, 4.0], [2.0, 3.0]]).unwrap();
        let work = prepare(&m, true);
        // After inversion the largest original entry is the cheapest;
        // its row and column reduce to zero at that position.
        assert!(work.is_zero(0, 1));
        assert_reduced(&work);
    }

    #[test]
    fn test_negative_entries_become_non_negative() {
        let m = CostMatrix::from_array([[-4.0, -1.0], [-2.0, -8.0]]).unwrap();
        let work = prepare(&m, false);
        assert_reduced(&work);
    }

    #[test]
    fn test_single_cell_reduces_to_zero() {
        let m = CostMatrix::from_array([[7.0]]).unwrap();
        let work = prepare(&m, false);
        assert!(work.is_zero(0, 0));
    }
}
