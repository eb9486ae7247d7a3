//! Solve loop, result extraction, and the stateful solver facade.
//!
//! The primary entry point is the pure [`solve`] function: it owns its
//! working matrix for the duration of the call, runs
//! reduce → { cover → adjust }* to completion, and returns a
//! self-contained [`Solution`]. [`HungarianSolver`] wraps it for callers
//! that want to hold the matrix and re-read results between solves.
//!
//! # Invariants
//! - The adjust loop is bounded by n² passes; exceeding the bound fails
//!   with [`SolveError::NonTermination`] rather than spinning.
//! - Reported costs always come from the original, untransformed cost
//!   matrix — the maximization inversion never leaks into results.

use crate::adjust::adjust;
use crate::cover::analyze;
use crate::error::SolveError;
use crate::matrix::{CostMatrix, MAX_DIM};
use crate::reduce::prepare;

/// One agent→task pairing with its original-matrix cost.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Assignment {
    /// Agent (row) index.
    pub row: usize,
    /// Task (column) index.
    pub col: usize,
    /// Cost of this pairing in the original matrix.
    pub cost: f32,
}

/// The result of a completed solve.
///
/// Read-only once created; a later [`HungarianSolver::resolve`] call
/// replaces the stored solution wholesale.
#[derive(Clone, Debug)]
pub struct Solution {
    total_cost: f32,
    assignments: [Assignment; MAX_DIM],
    dim: usize,
    adjust_passes: u32,
}

impl Solution {
    /// Sum of original-matrix costs over the chosen pairings.
    pub fn total_cost(&self) -> f32 {
        self.total_cost
    }

    /// Chosen pairings, sorted by row index ascending. Always exactly
    /// [`dim`](Solution::dim) entries — extraction rejects anything less.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments[..self.dim]
    }

    /// Dimension of the solved matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of adjustment passes the solve loop needed.
    pub fn adjust_passes(&self) -> u32 {
        self.adjust_passes
    }

    /// Fill `out` with the sparse assignment matrix: the original cost
    /// at every chosen `(row, col)` and zero everywhere else.
    pub fn write_dense(&self, out: &mut [[f32; MAX_DIM]; MAX_DIM]) {
        for row in out.iter_mut() {
            row.fill(0.0);
        }
        for a in self.assignments() {
            out[a.row][a.col] = a.cost;
        }
    }
}

/// Solve the assignment problem for `matrix`.
///
/// With `maximize` set, the working copy is inverted against the matrix
/// maximum so the highest-value pairing wins; the returned costs and
/// total are still the original entries.
///
/// # Errors
/// - [`SolveError::NonTermination`] if the cover never reaches the
///   dimension within n² adjustment passes, or reaches it with fewer
///   than n marked zeros (malformed zero patterns).
/// - [`SolveError::NoUncoveredCell`] if an adjustment pass finds nothing
///   to adjust (unreachable while the loop invariant holds).
pub fn solve(matrix: &CostMatrix, maximize: bool) -> Result<Solution, SolveError> {
    let n = matrix.dim();
    let mut work = prepare(matrix, maximize);

    let pass_bound = (n * n) as u32;
    let mut adjust_passes = 0u32;
    let cover = loop {
        let cover = analyze(&work);
        if cover.cover_size() >= n {
            break cover;
        }
        if adjust_passes >= pass_bound {
            return Err(SolveError::NonTermination { passes: adjust_passes });
        }
        adjust(&mut work, &cover)?;
        adjust_passes += 1;
    };

    extract(matrix, cover.marked(), adjust_passes)
}

/// Map the marked zeros back onto the original matrix.
///
/// A complete cover must come with one marked zero per row; a shorter
/// marking means the cover metric lied about completion (the greedy
/// cover is not canonical König), and returning it would yield a
/// sub-permutation. Fail loudly instead of trusting it.
fn extract(
    matrix: &CostMatrix,
    marked: &[(usize, usize)],
    adjust_passes: u32,
) -> Result<Solution, SolveError> {
    let n = matrix.dim();
    if marked.len() != n {
        return Err(SolveError::NonTermination { passes: adjust_passes });
    }

    let mut assignments = [Assignment::default(); MAX_DIM];
    for (slot, &(row, col)) in assignments.iter_mut().zip(marked.iter()) {
        *slot = Assignment { row, col, cost: matrix.get(row, col) };
    }
    assignments[..n].sort_unstable_by_key(|a| a.row);
    let total_cost = assignments[..n].iter().map(|a| a.cost).sum();

    Ok(Solution { total_cost, assignments, dim: n, adjust_passes })
}

/// Stateful convenience wrapper around [`solve`].
///
/// Owns the cost matrix and the most recent [`Solution`]. Result
/// accessors fail with [`SolveError::InvalidState`] until the first
/// completed [`resolve`](HungarianSolver::resolve).
#[derive(Clone, Debug)]
pub struct HungarianSolver {
    matrix: CostMatrix,
    solution: Option<Solution>,
}

impl HungarianSolver {
    /// Wrap a validated cost matrix. No solving happens yet.
    pub fn new(matrix: CostMatrix) -> Self {
        Self { matrix, solution: None }
    }

    /// The wrapped cost matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Run a full solve, replacing any previously stored solution.
    pub fn resolve(&mut self, maximize: bool) -> Result<&Solution, SolveError> {
        let solution = solve(&self.matrix, maximize)?;
        Ok(self.solution.insert(solution))
    }

    /// The most recent solution.
    ///
    /// # Errors
    /// [`SolveError::InvalidState`] before the first completed resolve.
    pub fn solution(&self) -> Result<&Solution, SolveError> {
        self.solution.as_ref().ok_or(SolveError::InvalidState)
    }

    /// Pairings of the most recent solution, sorted by row.
    ///
    /// # Errors
    /// [`SolveError::InvalidState`] before the first completed resolve.
    pub fn assignments(&self) -> Result<&[Assignment], SolveError> {
        Ok(self.solution()?.assignments())
    }

    /// Total cost of the most recent solution.
    ///
    /// # Errors
    /// [`SolveError::InvalidState`] before the first completed resolve.
    pub fn total_cost(&self) -> Result<f32, SolveError> {
        Ok(self.solution()?.total_cost())
    }

    /// Print the most recent solution in a human-readable form.
    ///
    /// # Errors
    /// [`SolveError::InvalidState`] before the first completed resolve.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn print_solution(&self) -> Result<(), SolveError> {
        let solution = self.solution()?;
        std::println!("Total assignment cost: {:.2}", solution.total_cost());
        std::println!("Assignments:");
        for a in solution.assignments() {
            std::println!("  agent {} -> task {} (cost {:.2})", a.row, a.col, a.cost);
        }
        Ok(())
    }
}
