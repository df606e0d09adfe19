//! Integer linear programming via `good_lp`. Grounded in
//! `community_knapsack/solvers/exact/ilp.py`, which delegates to PuLP/CBC;
//! Rust has no idiomatic binding to CBC without a system dependency, so this
//! uses `good_lp`'s pure-Rust `microlp` backend for the same binary-variable
//! formulation (usage pattern grounded in
//! `examples/other_examples/5d4fb158_mdcpepper-lattice__src-solvers-milp.rs.rs`).

use good_lp::solvers::microlp::microlp;
use good_lp::{constraint, variable, Expression, ProblemVariables, Solution, SolverModel, Variable};

/// `max Σ values_i · x_i` subject to `Σ_k costs_{k,i} · x_i ≤ budget_k` for
/// every dimension `k`, `x_i ∈ {0,1}`. Any `x_i ≥ 0.5` in the solver's
/// output is treated as included, tolerating floating-point noise in the
/// relaxation the branch-and-cut solver performs internally.
fn solve(budgets: &[i64], costs: &[Vec<i64>], values: &[i64]) -> (Vec<usize>, i64) {
    let n = values.len();
    if n == 0 {
        return (Vec::new(), 0);
    }

    let mut problem = ProblemVariables::new();
    let decisions: Vec<Variable> = (0..n).map(|_| problem.add(variable().binary())).collect();

    let mut objective = Expression::default();
    for (&x, &value) in decisions.iter().zip(values) {
        objective += x * (value as f64);
    }

    let mut model = problem.maximise(objective).using(microlp);
    for (dimension, row) in costs.iter().enumerate() {
        let mut expr = Expression::default();
        for (&x, &cost) in decisions.iter().zip(row) {
            expr += x * (cost as f64);
        }
        model = model.with(constraint::leq(expr, budgets[dimension] as f64));
    }

    let solution = model
        .solve()
        .expect("good_lp failed to solve a feasible binary knapsack program");

    let allocation: Vec<usize> = decisions
        .iter()
        .enumerate()
        .filter(|(_, &x)| solution.value(x) >= 0.5)
        .map(|(i, _)| i)
        .collect();
    let value = allocation.iter().map(|&i| values[i]).sum();
    (allocation, value)
}

pub fn ilp(budget: i64, costs: &[i64], values: &[i64]) -> (Vec<usize>, i64) {
    solve(&[budget], &[costs.to_vec()], values)
}

pub fn multi_ilp(budgets: &[i64], costs: &[Vec<i64>], values: &[i64]) -> (Vec<usize>, i64) {
    solve(budgets, costs, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_brute_force_optimum() {
        let costs = vec![50, 75, 90, 20, 10];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = ilp(100, &costs, &values);
        assert_eq!(value, 7);
        assert_eq!(allocation, vec![0, 3, 4]);
    }

    #[test]
    fn multi_respects_every_dimension() {
        let budgets = vec![100, 200];
        let costs = vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = multi_ilp(&budgets, &costs, &values);
        assert_eq!(value, 5);
        for (dimension, &budget) in budgets.iter().enumerate() {
            let used: i64 = allocation.iter().map(|&i| costs[dimension][i]).sum();
            assert!(used <= budget);
        }
    }

    #[test]
    fn empty_instance_returns_empty() {
        let (allocation, value) = ilp(10, &[], &[]);
        assert!(allocation.is_empty());
        assert_eq!(value, 0);
    }
}
