//! Portable solution record for persistence and transport.
//!
//! Requires the `serde` feature. Compatible with no_std + alloc
//! environments — the record owns its data in an `alloc::vec::Vec` so it
//! can outlive the fixed-capacity [`Solution`] it was built from.
//!
//! ```rust,ignore
//! use hungarian_core::report::SolutionReport;
//!
//! let report = SolutionReport::from_solution(&solution);
//! let json = serde_json::to_string(&report).unwrap();
//! let restored: SolutionReport = serde_json::from_str(&json).unwrap();
//! assert_eq!(report, restored);
//! ```
//!
//! [`Solution`]: crate::solver::Solution

extern crate alloc;

use alloc::vec::Vec;

use crate::solver::{Assignment, Solution};

/// Current report format version.
pub const REPORT_VERSION: u16 = 1;

/// A serialisable snapshot of a completed [`Solution`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct SolutionReport {
    /// Format version — always [`REPORT_VERSION`] for new reports.
    pub version: u16,
    /// Dimension of the solved matrix.
    pub dim: usize,
    /// Sum of original-matrix costs over the chosen pairings.
    pub total_cost: f32,
    /// Adjustment passes the solve loop needed.
    pub adjust_passes: u32,
    /// Chosen pairings, sorted by row index ascending.
    pub assignments: Vec<AssignmentRecord>,
}

/// Serialisable representation of a single [`Assignment`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AssignmentRecord {
    /// Agent (row) index.
    pub row: usize,
    /// Task (column) index.
    pub col: usize,
    /// Cost of this pairing in the original matrix.
    pub cost: f32,
}

impl From<&Assignment> for AssignmentRecord {
    fn from(a: &Assignment) -> Self {
        Self { row: a.row, col: a.col, cost: a.cost }
    }
}

impl From<&AssignmentRecord> for Assignment {
    fn from(r: &AssignmentRecord) -> Self {
        Self { row: r.row, col: r.col, cost: r.cost }
    }
}

impl SolutionReport {
    /// Capture a completed solution as a portable record.
    pub fn from_solution(solution: &Solution) -> Self {
        Self {
            version: REPORT_VERSION,
            dim: solution.dim(),
            total_cost: solution.total_cost(),
            adjust_passes: solution.adjust_passes(),
            assignments: solution.assignments().iter().map(AssignmentRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CostMatrix;
    use crate::solver::solve;

    #[test]
    fn test_report_captures_solution() {
        let m = CostMatrix::from_array([
            [4.0, 1.0, 3.0],
            [2.0, 0.0, 5.0],
            [3.0, 2.0, 2.0],
        ])
        .unwrap();
        let s = solve(&m, false).unwrap();
        let report = SolutionReport::from_solution(&s);

        assert_eq!(report.version, REPORT_VERSION);
        assert_eq!(report.dim, 3);
        assert_eq!(report.total_cost, 5.0);
        assert_eq!(report.assignments.len(), 3);
        assert_eq!(report.assignments[0], AssignmentRecord { row: 0, col: 1, cost: 1.0 });
    }

    #[test]
    fn test_record_round_trips_to_assignment() {
        let a = Assignment { row: 2, col: 0, cost: 3.5 };
        let r = AssignmentRecord::from(&a);
        assert_eq!(Assignment::from(&r), a);
    }
}
