//! Random Participatory Budgeting instance generation (§6).
//!
//! A generation-only collaborator to the `pbknapsack` solver engine and the
//! `pbfile` format: it builds random [`pbknapsack::SingleProblem`]/
//! [`pbknapsack::MultiProblem`] instances from bounds on their parameters,
//! for benchmarking and fuzzing the solvers.

mod error;
mod generator;

pub use error::BoundsError;
pub use generator::Generator;
