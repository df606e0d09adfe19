//! Exhaustive subset enumeration. Grounded in
//! `community_knapsack/solvers/exact/brute_force.py`.

use crate::cancel::{CancelToken, POLL_INTERVAL};

/// Bit `j` of `mask` is set iff project `j` is included — the canonical
/// encoding the testable properties in §8 rely on.
fn included(mask: u64, project: usize) -> bool {
    (mask >> project) & 1 == 1
}

/// Enumerates every subset of `{0..costs.len()}` and keeps the best feasible
/// one. `O(2^n · d)`; only sane for small `n`, which is the whole point of
/// having cheaper exact algorithms available.
pub fn brute_force(budget: i64, costs: &[i64], values: &[i64], cancel: &CancelToken) -> (Vec<usize>, i64) {
    let n = costs.len();
    let mut best_allocation = Vec::new();
    let mut best_value = 0i64;

    let total: u64 = 1 << n;
    for mask in 0..total {
        if mask % POLL_INTERVAL == 0 && cancel.is_cancelled() {
            break;
        }
        let mut cost = 0i64;
        let mut value = 0i64;
        let mut allocation = Vec::new();
        for j in 0..n {
            if included(mask, j) {
                cost += costs[j];
                value += values[j];
                allocation.push(j);
            }
        }
        if cost <= budget && value > best_value {
            best_value = value;
            best_allocation = allocation;
        }
    }
    (best_allocation, best_value)
}

/// Multi-budget variant: a subset is feasible only if every dimension's
/// budget is respected.
pub fn multi_brute_force(
    budgets: &[i64],
    costs: &[Vec<i64>],
    values: &[i64],
    cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = values.len();
    let mut best_allocation = Vec::new();
    let mut best_value = 0i64;

    let total: u64 = 1 << n;
    for mask in 0..total {
        if mask % POLL_INTERVAL == 0 && cancel.is_cancelled() {
            break;
        }
        let mut allocation = Vec::new();
        let mut value = 0i64;
        for j in 0..n {
            if included(mask, j) {
                value += values[j];
                allocation.push(j);
            }
        }
        let feasible = budgets.iter().zip(costs.iter()).all(|(&budget, row)| {
            allocation.iter().map(|&j| row[j]).sum::<i64>() <= budget
        });
        if feasible && value > best_value {
            best_value = value;
            best_allocation = allocation;
        }
    }
    (best_allocation, best_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_optimal_subset() {
        // {0,3,4} costs 80 <= 100 and scores 7; this is the unique optimum
        // (the set {1,2,4} costs 175 and is infeasible under this budget).
        let costs = vec![50, 75, 90, 20, 10];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = brute_force(100, &costs, &values, &CancelToken::new());
        assert_eq!(value, 7);
        assert_eq!(allocation, vec![0, 3, 4]);
    }

    #[test]
    fn multi_respects_every_dimension() {
        // {1,2} costs 165 along dimension 0 alone and is infeasible; the
        // true optimum (5) is reached by several feasible pairs.
        let budgets = vec![100, 200];
        let costs = vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = multi_brute_force(&budgets, &costs, &values, &CancelToken::new());
        assert_eq!(value, 5);
        for (dimension, &budget) in budgets.iter().enumerate() {
            let used: i64 = allocation.iter().map(|&i| costs[dimension][i]).sum();
            assert!(used <= budget);
        }
    }

    #[test]
    fn empty_instance_returns_empty() {
        let (allocation, value) = brute_force(10, &[], &[], &CancelToken::new());
        assert!(allocation.is_empty());
        assert_eq!(value, 0);
    }
}
