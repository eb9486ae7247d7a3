//! Matrix adjustment — shifts the minimum uncovered value to create new
//! zeros when the cover is still smaller than the dimension.
//!
//! Subtracting the minimum uncovered value from every uncovered cell and
//! adding it to every doubly-covered cell leaves all covered zeros in
//! place while turning at least one uncovered cell into a new zero,
//! growing the eventual cover.

use crate::cover::CoverAnalysis;
use crate::error::SolveError;
use crate::matrix::WorkingMatrix;

/// One adjustment pass over the working matrix.
///
/// Precondition: at least one cell has both its row and column uncovered
/// (true whenever the cover size is below the dimension). If the
/// uncovered region is empty the minimum is undefined and this returns
/// [`SolveError::NoUncoveredCell`] instead of proceeding.
pub(crate) fn adjust(work: &mut WorkingMatrix, cover: &CoverAnalysis) -> Result<(), SolveError> {
    let n = work.dim;

    let mut min: Option<f32> = None;
    for r in 0..n {
        if cover.covered_rows[r] {
            continue;
        }
        for c in 0..n {
            if cover.covered_cols[c] {
                continue;
            }
            let v = work.cells[r][c];
            min = Some(match min {
                Some(m) if m <= v => m,
                _ => v,
            });
        }
    }
    let Some(delta) = min else {
        return Err(SolveError::NoUncoveredCell);
    };

    for r in 0..n {
        for c in 0..n {
            match (cover.covered_rows[r], cover.covered_cols[c]) {
                (false, false) => work.cells[r][c] -= delta,
                (true, true) => work.cells[r][c] += delta,
                // Singly-covered cells are untouched.
                _ => {}
            }
        }
    }

    Ok(())
}
