//! Top-down memoized recursion. Grounded in
//! `community_knapsack/solvers/exact/memoize.py`.

use std::collections::HashMap;

use crate::cancel::CancelToken;

/// `memo[i][j]` = best value achievable using the first `i` projects with
/// remaining budget `j`, or `None` if not yet computed.
fn best_value(i: usize, j: i64, costs: &[i64], values: &[i64], memo: &mut [Vec<Option<i64>>]) -> i64 {
    if i == 0 || j <= 0 {
        return 0;
    }
    if let Some(cached) = memo[i][j as usize] {
        return cached;
    }
    let exclude = best_value(i - 1, j, costs, values, memo);
    let best = if costs[i - 1] <= j {
        let include = values[i - 1] + best_value(i - 1, j - costs[i - 1], costs, values, memo);
        exclude.max(include)
    } else {
        exclude
    };
    memo[i][j as usize] = Some(best);
    best
}

/// Recursion on `(i, remaining budget)`, memoized; allocation recovered by
/// descending the table and comparing `M[i][j]` against `M[i-1][j]`.
pub fn memoization(budget: i64, costs: &[i64], values: &[i64], _cancel: &CancelToken) -> (Vec<usize>, i64) {
    let n = costs.len();
    if n == 0 || budget <= 0 {
        return (Vec::new(), 0);
    }
    let mut memo = vec![vec![None; (budget + 1) as usize]; n + 1];
    let optimum = best_value(n, budget, costs, values, &mut memo);

    let mut allocation = Vec::new();
    let mut i = n;
    let mut j = budget;
    while i > 0 {
        let without = best_value(i - 1, j, costs, values, &mut memo);
        if memo[i][j as usize] != Some(without) {
            allocation.push(i - 1);
            j -= costs[i - 1];
        }
        i -= 1;
    }
    allocation.sort_unstable();
    (allocation, optimum)
}

type MultiKey = (usize, Vec<i64>);

fn multi_best_value(
    i: usize,
    remaining: &[i64],
    costs: &[Vec<i64>],
    values: &[i64],
    memo: &mut HashMap<MultiKey, i64>,
) -> i64 {
    if i == 0 {
        return 0;
    }
    let key: MultiKey = (i, remaining.to_vec());
    if let Some(&cached) = memo.get(&key) {
        return cached;
    }
    let exclude = multi_best_value(i - 1, remaining, costs, values, memo);
    let fits = costs.iter().enumerate().all(|(k, row)| row[i - 1] <= remaining[k]);
    let best = if fits {
        let next_remaining: Vec<i64> = remaining
            .iter()
            .zip(costs.iter())
            .map(|(&r, row)| r - row[i - 1])
            .collect();
        let include = values[i - 1] + multi_best_value(i - 1, &next_remaining, costs, values, memo);
        exclude.max(include)
    } else {
        exclude
    };
    memo.insert(key, best);
    best
}

/// Multi-budget variant: recursion on `(i, tuple(remaining budgets))`,
/// memoized in a hash map since the state space is not a dense grid.
pub fn multi_memoization(
    budgets: &[i64],
    costs: &[Vec<i64>],
    values: &[i64],
    cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = values.len();
    if n == 0 {
        return (Vec::new(), 0);
    }
    let mut memo = HashMap::new();
    let optimum = multi_best_value(n, budgets, costs, values, &mut memo);
    if cancel.is_cancelled() {
        tracing::warn!("multi memoization cancelled after computing the optimum table");
    }

    let mut allocation = Vec::new();
    let mut remaining = budgets.to_vec();
    let mut i = n;
    while i > 0 {
        let without = multi_best_value(i - 1, &remaining, costs, values, &mut memo);
        if memo.get(&(i, remaining.clone())) != Some(&without) {
            allocation.push(i - 1);
            for (k, row) in costs.iter().enumerate() {
                remaining[k] -= row[i - 1];
            }
        }
        i -= 1;
    }
    allocation.sort_unstable();
    (allocation, optimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_brute_force_optimum() {
        let costs = vec![50, 75, 90, 20, 10];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = memoization(100, &costs, &values, &CancelToken::new());
        assert_eq!(value, 7);
        assert_eq!(allocation, vec![0, 3, 4]);
    }

    #[test]
    fn multi_matches_brute_force_optimum() {
        let budgets = vec![100, 200];
        let costs = vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = multi_memoization(&budgets, &costs, &values, &CancelToken::new());
        assert_eq!(value, 5);
        for (dimension, &budget) in budgets.iter().enumerate() {
            let used: i64 = allocation.iter().map(|&i| costs[dimension][i]).sum();
            assert!(used <= budget);
        }
    }

    #[test]
    fn empty_instance() {
        let (allocation, value) = memoization(100, &[], &[], &CancelToken::new());
        assert!(allocation.is_empty());
        assert_eq!(value, 0);
    }
}
