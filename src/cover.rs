//! Zero-cover analysis — greedy independent-zero marking and the
//! row/column cover of all zeros.
//!
//! # Algorithm
//!
//! 1. Rebuild the zero mask of the working matrix.
//! 2. Greedily mark independent zeros: repeatedly take the row with the
//!    fewest remaining zeros (ties go to the lowest row index), mark its
//!    lowest-index zero column, then eliminate that row and column from
//!    further consideration.
//! 3. Derive the cover by fixed-point propagation over the original
//!    mask: rows absent from the marked set start unmarked; every zero
//!    column of an unmarked row becomes marked, and every marked pair
//!    whose column is marked moves its row into the unmarked set.
//!    Covered rows are the complement of the unmarked rows; covered
//!    columns are the marked columns.
//!
//! This is the widely used greedy stand-in for the canonical König
//! minimum-vertex-cover computation. It is exact for the reduced
//! matrices the reduce/adjust cycle produces in normal use; the solve
//! loop's pass bound guards the adversarial patterns where it is not.
//!
//! # Invariants
//! - Marked zeros form an independent set: no two share a row or column.
//! - `marked().len() ≤ dim`.
//! - All derived structures are local to one analysis pass.

use hashbrown::HashSet;

use crate::matrix::{WorkingMatrix, MAX_DIM};

/// Output of one analysis pass: the candidate assignment and the cover.
#[derive(Clone, Debug)]
pub(crate) struct CoverAnalysis {
    marked: [(usize, usize); MAX_DIM],
    marked_count: usize,
    pub(crate) covered_rows: [bool; MAX_DIM],
    pub(crate) covered_cols: [bool; MAX_DIM],
}

impl CoverAnalysis {
    /// Marked zero pairs, in marking order.
    pub(crate) fn marked(&self) -> &[(usize, usize)] {
        &self.marked[..self.marked_count]
    }

    /// `|covered rows| + |covered columns|` — the loop's termination metric.
    pub(crate) fn cover_size(&self) -> usize {
        let rows = self.covered_rows.iter().filter(|&&v| v).count();
        let cols = self.covered_cols.iter().filter(|&&v| v).count();
        rows + cols
    }
}

/// Analyze the current working matrix.
pub(crate) fn analyze(work: &WorkingMatrix) -> CoverAnalysis {
    let n = work.dim;

    // Zero mask, rebuilt fresh each pass.
    let mut zeros = [[false; MAX_DIM]; MAX_DIM];
    for r in 0..n {
        for c in 0..n {
            zeros[r][c] = work.is_zero(r, c);
        }
    }

    // Greedy marking consumes a copy; `zeros` stays intact for the
    // propagation step below.
    let mut remaining = zeros;
    let mut marked = [(0usize, 0usize); MAX_DIM];
    let mut marked_count = 0usize;
    loop {
        // Row with the fewest remaining zeros; the first qualifying row
        // found wins ties since scanning is in index order.
        let mut best: Option<(usize, usize)> = None; // (zero_count, row)
        for r in 0..n {
            let count = remaining[r][..n].iter().filter(|&&z| z).count();
            if count > 0 && best.map_or(true, |(best_count, _)| count < best_count) {
                best = Some((count, r));
            }
        }
        let Some((_, row)) = best else { break };
        let Some(col) = remaining[row][..n].iter().position(|&z| z) else { break };

        marked[marked_count] = (row, col);
        marked_count += 1;
        for c in 0..n {
            remaining[row][c] = false;
        }
        for r in 0..n {
            remaining[r][col] = false;
        }
    }

    // Fixed-point cover propagation over the original mask.
    let mut unmarked_rows: HashSet<usize> = (0..n).collect();
    for &(r, _) in marked[..marked_count].iter() {
        unmarked_rows.remove(&r);
    }
    let mut marked_cols: HashSet<usize> = HashSet::new();

    let mut changed = true;
    while changed {
        changed = false;

        for &r in unmarked_rows.iter() {
            for c in 0..n {
                if zeros[r][c] && marked_cols.insert(c) {
                    changed = true;
                }
            }
        }

        for &(r, c) in marked[..marked_count].iter() {
            if !unmarked_rows.contains(&r) && marked_cols.contains(&c) {
                unmarked_rows.insert(r);
                changed = true;
            }
        }
    }

    let mut covered_rows = [false; MAX_DIM];
    for r in 0..n {
        if !unmarked_rows.contains(&r) {
            covered_rows[r] = true;
        }
    }
    let mut covered_cols = [false; MAX_DIM];
    for &c in marked_cols.iter() {
        covered_cols[c] = true;
    }

    CoverAnalysis { marked, marked_count, covered_rows, covered_cols }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_from(cells: &[&[f32]]) -> WorkingMatrix {
        let n = cells.len();
        let mut w = WorkingMatrix { cells: [[0.0; MAX_DIM]; MAX_DIM], dim: n };
        for (r, row) in cells.iter().enumerate() {
            w.cells[r][..n].copy_from_slice(row);
        }
        w
    }

    fn assert_independent(cover: &CoverAnalysis) {
        let marked = cover.marked();
        for (i, &(r1, c1)) in marked.iter().enumerate() {
            for &(r2, c2) in marked[i + 1..].iter() {
                assert_ne!(r1, r2, "two marked zeros share row {}", r1);
                assert_ne!(c1, c2, "two marked zeros share column {}", c1);
            }
        }
    }

    fn assert_all_zeros_covered(work: &WorkingMatrix, cover: &CoverAnalysis) {
        let n = work.dim;
        for r in 0..n {
            for c in 0..n {
                if work.is_zero(r, c) {
                    assert!(
                        cover.covered_rows[r] || cover.covered_cols[c],
                        "zero at ({}, {}) is uncovered",
                        r,
                        c
                    );
                }
            }
        }
    }

    #[test]
    fn test_incomplete_cover_on_first_reduction() {
        // The reduced form of [[4,1,3],[2,0,5],[3,2,2]]: cover is row 2
        // plus column 1, size 2 < 3, so the adjuster must run.
        let work = work_from(&[
            &[2.0, 0.0, 2.0],
            &[1.0, 0.0, 5.0],
            &[0.0, 0.0, 0.0],
        ]);
        let cover = analyze(&work);

        assert_independent(&cover);
        assert_all_zeros_covered(&work, &cover);
        assert_eq!(cover.cover_size(), 2);
        assert!(cover.covered_rows[2]);
        assert!(cover.covered_cols[1]);
        assert_eq!(cover.marked(), &[(0, 1), (2, 0)]);
    }

    #[test]
    fn test_complete_cover_after_adjustment() {
        // The same problem after one adjustment pass: three independent
        // zeros exist and the cover reaches the dimension.
        let work = work_from(&[
            &[1.0, 0.0, 1.0],
            &[0.0, 0.0, 4.0],
            &[0.0, 1.0, 0.0],
        ]);
        let cover = analyze(&work);

        assert_independent(&cover);
        assert_eq!(cover.cover_size(), 3);
        let mut marked = [cover.marked()[0], cover.marked()[1], cover.marked()[2]];
        marked.sort_unstable();
        assert_eq!(marked, [(0, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn test_fewest_zeros_row_marked_first() {
        // Row 1 has a single zero and must be marked before row 0, which
        // forces row 0 onto its other zero.
        let work = work_from(&[
            &[0.0, 0.0],
            &[0.0, 3.0],
        ]);
        let cover = analyze(&work);
        assert_eq!(cover.marked()[0], (1, 0));
        assert_eq!(cover.marked()[1], (0, 1));
    }

    #[test]
    fn test_tie_breaks_to_lowest_row_index() {
        // Identity-like zero pattern: every row has exactly one zero, so
        // marking proceeds in row order.
        let work = work_from(&[
            &[0.0, 1.0, 1.0],
            &[1.0, 0.0, 1.0],
            &[1.0, 1.0, 0.0],
        ]);
        let cover = analyze(&work);
        assert_eq!(cover.marked(), &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(cover.cover_size(), 3);
    }

    #[test]
    fn test_single_cell() {
        let work = work_from(&[&[0.0]]);
        let cover = analyze(&work);
        assert_eq!(cover.marked(), &[(0, 0)]);
        assert_eq!(cover.cover_size(), 1);
    }
}
