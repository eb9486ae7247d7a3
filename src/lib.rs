//! # hungarian-core
//!
//! Square assignment solver — the Hungarian algorithm for small dense
//! cost matrices.
//!
//! Given an n×n cost matrix, the solver finds the one-to-one pairing of
//! n agents (rows) to n tasks (columns) that minimises — or, via an
//! inversion transform, maximises — the total assigned cost.
//!
//! ## The pipeline
//!
//! ```text
//! CostMatrix → reduce → { cover → adjust }* → Solution
//!                 ↑          ↑
//!        row/col minima   greedy zero marking
//!                         + cover propagation
//! ```
//!
//! Each solve runs four phases in strict sequence: the preprocessor
//! reduces the matrix so every row and column holds a zero; the
//! zero-cover analyzer marks an independent set of zeros and derives the
//! rows/columns that cover all zeros; while the cover is smaller than n,
//! the adjuster shifts the minimum uncovered value to create new zeros;
//! once the cover reaches n, the marked zeros are read back against the
//! original matrix to produce the [`solver::Solution`].
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`matrix`] | [`matrix::CostMatrix`] | Validated square cost matrix, fixed-capacity storage |
//! | [`solver`] | [`solver::Solution`], [`solver::HungarianSolver`] | Solve loop, result extraction, stateful facade |
//! | [`error`] | [`error::SolveError`] | Construction and solve error taxonomy |
//! | [`report`] | [`report::SolutionReport`] | Serialisable solution record (requires `serde` feature) |
//!
//! ## Quick start
//!
//! ```rust
//! use hungarian_core::matrix::CostMatrix;
//! use hungarian_core::solver::solve;
//!
//! let costs = CostMatrix::from_array([
//!     [4.0, 1.0, 3.0],
//!     [2.0, 0.0, 5.0],
//!     [3.0, 2.0, 2.0],
//! ]).unwrap();
//! let solution = solve(&costs, false).unwrap();
//! assert_eq!(solution.total_cost(), 5.0);
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default with no heap required — matrices
//! are fixed-capacity arrays bounded by [`matrix::MAX_DIM`]. Enable the
//! `std` feature for the formatted [`solver::HungarianSolver::print_solution`]
//! helper. Enable the `serde` feature for the [`report`] snapshot module
//! (no_std + alloc compatible).

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod matrix;
pub mod solver;

#[cfg(feature = "serde")]
pub mod report;

mod adjust;
mod cover;
mod reduce;
