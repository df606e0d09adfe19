use std::fmt::Display;
use std::hash::Hash;

use crate::algorithm::MultiAlgorithm;
use crate::dispatch::{self, SolveConfig};
use crate::error::ValidationError;
use crate::result::SolveResult;

use super::{aggregate_values, resolve_count, validate_positive_costs, validate_utilities};

/// A multi-budget Participatory Budgeting instance: `n` projects and `d ≥ 1`
/// simultaneous budget dimensions.
#[derive(Debug, Clone)]
pub struct MultiProblem<Id = String> {
    projects: Vec<Id>,
    voters: Vec<Id>,
    budget: Vec<i64>,
    costs: Vec<Vec<i64>>,
    utilities: Vec<Vec<i64>>,
    values: Vec<i64>,
}

impl<Id: Clone + Eq + Hash + Display + From<String>> MultiProblem<Id> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num_projects: usize,
        num_voters: usize,
        budget: Vec<i64>,
        costs: Vec<Vec<i64>>,
        utilities: Vec<Vec<i64>>,
        projects: Option<Vec<Id>>,
        voters: Option<Vec<Id>>,
    ) -> Result<Self, ValidationError> {
        let (num_projects, projects) = resolve_count(projects, num_projects, "project");
        let (num_voters, voters) = resolve_count(voters, num_voters, "voter");

        if budget.len() != costs.len() {
            return Err(ValidationError::BudgetDimensionMismatch {
                found: budget.len(),
                expected: costs.len(),
            });
        }
        for (dimension, row) in costs.iter().enumerate() {
            if row.len() != num_projects {
                return Err(ValidationError::CostRowWidthMismatch {
                    dimension,
                    found: row.len(),
                    expected: num_projects,
                });
            }
            validate_positive_costs(row)?;
        }
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
        self.values.len()
    }

    pub fn num_voters(&self) -> usize {
        self.voters.len()
    }

    pub fn num_dimensions(&self) -> usize {
        self.budget.len()
    }

    pub fn budget(&self) -> &[i64] {
        &self.budget
    }

    pub fn costs(&self) -> &[Vec<i64>] {
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

    pub fn set_utilities(&mut self, utilities: Vec<Vec<i64>>) -> Result<(), ValidationError> {
        validate_utilities(&utilities, self.num_voters(), self.num_projects())?;
        self.values = aggregate_values(&utilities, self.num_projects());
        self.utilities = utilities;
        Ok(())
    }

    /// Sums the cost of an allocation (by project index) along every budget
    /// dimension.
    pub fn cost_of(&self, allocation: &[usize]) -> Vec<i64> {
        self.costs
            .iter()
            .map(|row| allocation.iter().map(|&i| row[i]).sum())
            .collect()
    }

    pub fn solve(&self, algorithm: MultiAlgorithm, timeout_seconds: f64) -> SolveResult<Id, Vec<i64>> {
        let config = SolveConfig {
            timeout_seconds,
            ..SolveConfig::default()
        };
        self.solve_with(algorithm, &config)
    }

    pub fn solve_with(&self, algorithm: MultiAlgorithm, config: &SolveConfig) -> SolveResult<Id, Vec<i64>> {
        dispatch::solve_multi(self, algorithm, config)
    }
}
