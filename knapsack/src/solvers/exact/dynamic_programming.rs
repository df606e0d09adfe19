//! Bottom-up dynamic programming. Grounded in
//! `community_knapsack/solvers/exact/dyn_prog.py`.

use std::collections::HashMap;

use itertools::Itertools;

use crate::cancel::{CancelToken, POLL_INTERVAL};

/// `M[i][j]` = best value achievable using the first `i` projects with
/// budget `j`. Backtracking descends `i`, including project `i-1` whenever
/// `M[i][j] != M[i-1][j]`.
pub fn dynamic_programming(budget: i64, costs: &[i64], values: &[i64], _cancel: &CancelToken) -> (Vec<usize>, i64) {
    let n = costs.len();
    if n == 0 || budget <= 0 {
        return (Vec::new(), 0);
    }
    let capacity = budget as usize;
    let mut table = vec![vec![0i64; capacity + 1]; n + 1];
    for i in 1..=n {
        let cost = costs[i - 1];
        let value = values[i - 1];
        for j in 0..=capacity {
            table[i][j] = table[i - 1][j];
            if cost as usize <= j {
                table[i][j] = table[i][j].max(table[i - 1][j - cost as usize] + value);
            }
        }
    }

    let mut allocation = Vec::new();
    let mut j = capacity;
    for i in (1..=n).rev() {
        if table[i][j] != table[i - 1][j] {
            allocation.push(i - 1);
            j -= costs[i - 1] as usize;
        }
    }
    allocation.sort_unstable();
    (allocation, table[n][capacity])
}

/// `M[i][v]` = minimum cost to reach value at least `v` using the first `i`
/// projects. Used directly as `DYNAMIC_PROGRAMMING`'s min-cost twin and as
/// the inner solve of the FPTAS (§4.E), which calls this on rescaled values.
pub fn dynamic_programming_min_cost(
    budget: i64,
    costs: &[i64],
    values: &[i64],
    _cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = costs.len();
    let max_value: i64 = values.iter().sum();
    if n == 0 || max_value == 0 {
        return (Vec::new(), 0);
    }
    const INFEASIBLE: i64 = i64::MAX / 2;
    let mut table = vec![vec![INFEASIBLE; (max_value + 1) as usize]; n + 1];
    for row in table.iter_mut() {
        row[0] = 0;
    }

    for i in 1..=n {
        let cost = costs[i - 1];
        let value = values[i - 1];
        for v in 0..=max_value {
            let without = table[i - 1][v as usize];
            let prior_value = (v - value).max(0) as usize;
            let with = table[i - 1][prior_value].saturating_add(cost);
            table[i][v as usize] = without.min(with);
        }
    }

    let best_value = (0..=max_value).rev().find(|&v| table[n][v as usize] <= budget).unwrap_or(0);

    let mut allocation = Vec::new();
    let mut v = best_value;
    for i in (1..=n).rev() {
        let prior_value = (v - values[i - 1]).max(0);
        let with = table[i - 1][prior_value as usize].saturating_add(costs[i - 1]);
        if table[i][v as usize] == with && with < table[i - 1][v as usize] {
            allocation.push(i - 1);
            v = prior_value;
        }
    }
    allocation.sort_unstable();
    (allocation, best_value)
}

type MultiKey = (usize, Vec<i64>);

/// Tabulates over the Cartesian product `{0..n} x prod_k {0..budget_k}` in a
/// hash map, iterating lexicographically so predecessor states are always
/// already filled. Only practical for small instances.
pub fn multi_dynamic_programming(
    budgets: &[i64],
    costs: &[Vec<i64>],
    values: &[i64],
    cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = values.len();
    if n == 0 || budgets.iter().any(|&b| b < 0) {
        return (Vec::new(), 0);
    }

    let mut table: HashMap<MultiKey, i64> = HashMap::new();
    table.insert((0, vec![0; budgets.len()]), 0);

    let ranges: Vec<i64> = budgets.to_vec();
    let combos: Vec<Vec<i64>> = ranges.iter().map(|&b| 0..=b).multi_cartesian_product().collect();

    let mut iterations: u64 = 0;
    let mut cancelled = false;
    for i in 1..=n {
        for combo in &combos {
            iterations += 1;
            if iterations % POLL_INTERVAL == 0 && cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            let exclude = *table.get(&(i - 1, combo.clone())).unwrap_or(&0);
            let fits = costs.iter().enumerate().all(|(k, row)| row[i - 1] <= combo[k]);
            let best = if fits {
                let prior: Vec<i64> = combo
                    .iter()
                    .zip(costs.iter())
                    .map(|(&rem, row)| rem - row[i - 1])
                    .collect();
                let include = values[i - 1] + *table.get(&(i - 1, prior)).unwrap_or(&0);
                exclude.max(include)
            } else {
                exclude
            };
            table.insert((i, combo.clone()), best);
        }
        if cancelled {
            tracing::warn!("multi dynamic programming cancelled before completing its Cartesian table");
            break;
        }
    }

    let full_budget = ranges.clone();
    let optimum = *table.get(&(n, full_budget.clone())).unwrap_or(&0);

    let mut allocation = Vec::new();
    let mut remaining = full_budget;
    let mut i = n;
    while i > 0 && !cancelled {
        let without = *table.get(&(i - 1, remaining.clone())).unwrap_or(&0);
        let current = *table.get(&(i, remaining.clone())).unwrap_or(&0);
        if current != without {
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
        let (allocation, value) = dynamic_programming(100, &costs, &values, &CancelToken::new());
        assert_eq!(value, 7);
        assert_eq!(allocation, vec![0, 3, 4]);
    }

    #[test]
    fn small_round_trip_scenario() {
        // S3: budget=1000, costs=[200,650,400,700,400], values=[2,3,3,2,3].
        let costs = vec![200, 650, 400, 700, 400];
        let values = vec![2, 3, 3, 2, 3];
        let (_, value) = dynamic_programming(1000, &costs, &values, &CancelToken::new());
        assert_eq!(value, 8);
    }

    #[test]
    fn min_cost_matches_max_value_optimum() {
        let costs = vec![50, 75, 90, 20, 10];
        let values = vec![3, 1, 3, 2, 2];
        let (_, value) = dynamic_programming_min_cost(100, &costs, &values, &CancelToken::new());
        assert_eq!(value, 7);
    }

    #[test]
    fn multi_matches_brute_force_optimum() {
        let budgets = vec![100, 200];
        let costs = vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = multi_dynamic_programming(&budgets, &costs, &values, &CancelToken::new());
        assert_eq!(value, 5);
        for (dimension, &budget) in budgets.iter().enumerate() {
            let used: i64 = allocation.iter().map(|&i| costs[dimension][i]).sum();
            assert!(used <= budget);
        }
    }
}
