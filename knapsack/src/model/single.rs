use std::fmt::Display;
use std::hash::Hash;

use crate::algorithm::SingleAlgorithm;
use crate::dispatch::{self, SolveConfig};
use crate::error::ValidationError;
use crate::result::SolveResult;

use super::{aggregate_values, resolve_count, validate_positive_costs, validate_utilities};

/// A single-budget Participatory Budgeting instance: `n` projects sharing
/// one budget, with per-voter utilities aggregated into a per-project value.
///
/// `Id` identifies projects and voters in the outside world (a `pbfile`
/// instance uses `String`); the solver engine itself only ever works with
/// positions in `costs`/`values`.
#[derive(Debug, Clone)]
pub struct SingleProblem<Id = String> {
    projects: Vec<Id>,
    voters: Vec<Id>,
    budget: i64,
    costs: Vec<i64>,
    utilities: Vec<Vec<i64>>,
    values: Vec<i64>,
}

impl<Id: Clone + Eq + Hash + Display + From<String>> SingleProblem<Id> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num_projects: usize,
        num_voters: usize,
        budget: i64,
        costs: Vec<i64>,
        utilities: Vec<Vec<i64>>,
        projects: Option<Vec<Id>>,
        voters: Option<Vec<Id>>,
    ) -> Result<Self, ValidationError> {
        let (num_projects, projects) = resolve_count(projects, num_projects, "project");
        let (num_voters, voters) = resolve_count(voters, num_voters, "voter");

        if costs.len() != num_projects {
            return Err(ValidationError::CostRowWidthMismatch {
                dimension: 0,
                found: costs.len(),
                expected: num_projects,
            });
        }
        validate_positive_costs(&costs)?;
        validate_utilities(&utilities, num_voters, num_projects)?;

        let values = aggregate_values(&utilities, num_projects);

        Ok(Self {
            projects,
            voters,
            budget,
            costs,
            utilities,
            values,
        })
    }

    pub fn num_projects(&self) -> usize {
        self.costs.len()
    }

    pub fn num_voters(&self) -> usize {
        self.voters.len()
    }

    pub fn budget(&self) -> i64 {
        self.budget
    }

    pub fn costs(&self) -> &[i64] {
        &self.costs
    }

    pub fn utilities(&self) -> &[Vec<i64>] {
        &self.utilities
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn projects(&self) -> &[Id] {
        &self.projects
    }

    pub fn voters(&self) -> &[Id] {
        &self.voters
    }

    /// Replaces the utility matrix, re-validating and recomputing `values`.
    pub fn set_utilities(&mut self, utilities: Vec<Vec<i64>>) -> Result<(), ValidationError> {
        validate_utilities(&utilities, self.num_voters(), self.num_projects())?;
        self.values = aggregate_values(&utilities, self.num_projects());
        self.utilities = utilities;
        Ok(())
    }

    /// Sums the cost of an allocation (by project index) along the single
    /// budget dimension.
    pub fn cost_of(&self, allocation: &[usize]) -> i64 {
        allocation.iter().map(|&i| self.costs[i]).sum()
    }

    /// Runs `algorithm` against this instance under the dispatcher's default
    /// configuration, bounded by `timeout_seconds` (negative means no
    /// timeout).
    pub fn solve(&self, algorithm: SingleAlgorithm, timeout_seconds: f64) -> SolveResult<Id, i64> {
        let config = SolveConfig {
            timeout_seconds,
            ..SolveConfig::default()
        };
        self.solve_with(algorithm, &config)
    }

    /// Like [`Self::solve`] but with full control over FPTAS/SA/GA tuning
    /// and the RNG seed.
    pub fn solve_with(&self, algorithm: SingleAlgorithm, config: &SolveConfig) -> SolveResult<Id, i64> {
        dispatch::solve_single(self, algorithm, config)
    }
}
