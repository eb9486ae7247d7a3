//! Round-trip tests for the serialisable solution report.
//!
//! Run with `cargo test --features serde`.

#![cfg(feature = "serde")]

use hungarian_core::matrix::CostMatrix;
use hungarian_core::report::{SolutionReport, REPORT_VERSION};
use hungarian_core::solver::solve;

fn solved_report() -> SolutionReport {
    let matrix = CostMatrix::from_array([
        [4.0, 1.0, 3.0],
        [2.0, 0.0, 5.0],
        [3.0, 2.0, 2.0],
    ])
    .unwrap();
    let solution = solve(&matrix, false).unwrap();
    SolutionReport::from_solution(&solution)
}

#[test]
fn test_json_round_trip_preserves_report() {
    let report = solved_report();
    let json = serde_json::to_string(&report).unwrap();
    let restored: SolutionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, restored);
}

#[test]
fn test_report_fields_survive_serialisation() {
    let report = solved_report();
    let json = serde_json::to_string(&report).unwrap();
    let restored: SolutionReport = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.version, REPORT_VERSION);
    assert_eq!(restored.dim, 3);
    assert_eq!(restored.total_cost, 5.0);
    assert_eq!(restored.assignments.len(), 3);
    // Row-ascending order is part of the contract and must survive.
    let rows: Vec<usize> = restored.assignments.iter().map(|a| a.row).collect();
    assert_eq!(rows, vec![0, 1, 2]);
}

#[test]
fn test_json_shape_is_stable() {
    let report = solved_report();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["version"], REPORT_VERSION);
    assert_eq!(value["dim"], 3);
    assert_eq!(value["assignments"][0]["row"], 0);
    assert_eq!(value["assignments"][0]["col"], 1);
}
