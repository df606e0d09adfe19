//! `pbknapsack` — the participatory-budgeting knapsack solver engine (§1-§5).
//!
//! This crate is the "core" spec.md describes: a validated instance model
//! (single- and multi-budget), a registry of exact and approximate 0/1
//! knapsack algorithms, and a dispatcher that runs any of them under a
//! wall-clock timeout. It has no knowledge of file formats, random instance
//! generation, or CLI argument parsing — those live in the sibling
//! `pbfile`/`pbgen`/`demos/knapsack_cli` crates, which depend on this one.

pub mod algorithm;
pub mod cancel;
pub mod config;
mod dispatch;
pub mod error;
pub mod model;
pub mod params;
pub mod result;
pub mod solvers;
pub mod vote;

pub use algorithm::{MultiAlgorithm, Scope, SingleAlgorithm};
pub use dispatch::SolveConfig;
pub use error::{InputError, ValidationError};
pub use model::{MultiProblem, SingleProblem};
pub use result::SolveResult;
pub use vote::{aggregate, ordinal_to_utility, vote_to_utility, VoteType};
