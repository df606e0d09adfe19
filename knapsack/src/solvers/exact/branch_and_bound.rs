//! Best-first branch-and-bound over a binary inclusion tree, bounded by a
//! greedy fractional relaxation. Grounded in
//! `community_knapsack/solvers/exact/branch_bound.py`.
//!
//! The single-budget variant is exact (the fractional relaxation is a valid
//! upper bound on the true LP relaxation). The multi-budget variant uses a
//! heuristic multi-dimensional fractional bound instead of a true LP
//! relaxation, so the registry marks it approximate (§4.C, §9).

use std::collections::VecDeque;

use crate::cancel::{CancelToken, POLL_INTERVAL};

struct Node {
    /// Index into the ratio-sorted project list of the next project to
    /// decide on.
    next: usize,
    value: i64,
    cost: i64,
    allocation: Vec<usize>,
}

fn bound(value: i64, cost: i64, budget: i64, start: usize, sorted: &[(usize, i64, i64)]) -> f64 {
    let mut remaining = budget - cost;
    if remaining < 0 {
        return 0.0;
    }
    let mut total = value as f64;
    for &(_, item_cost, item_value) in &sorted[start..] {
        if remaining <= 0 {
            break;
        }
        if item_cost <= remaining {
            total += item_value as f64;
            remaining -= item_cost;
        } else {
            total += item_value as f64 * (remaining as f64 / item_cost as f64);
            break;
        }
    }
    total
}

/// BFS over the binary include/exclude tree, projects pre-sorted by
/// value/cost ratio descending. Prunes any child whose bound does not
/// exceed the current incumbent.
pub fn branch_and_bound(budget: i64, costs: &[i64], values: &[i64], cancel: &CancelToken) -> (Vec<usize>, i64) {
    let n = costs.len();
    if n == 0 {
        return (Vec::new(), 0);
    }
    let mut sorted: Vec<(usize, i64, i64)> = (0..n).map(|i| (i, costs[i], values[i])).collect();
    sorted.sort_by(|a, b| {
        let ratio_a = a.2 as f64 / a.1 as f64;
        let ratio_b = b.2 as f64 / b.1 as f64;
        ratio_b.partial_cmp(&ratio_a).unwrap()
    });

    let mut best_value = 0i64;
    let mut best_allocation = Vec::new();

    let mut queue = VecDeque::new();
    queue.push_back(Node {
        next: 0,
        value: 0,
        cost: 0,
        allocation: Vec::new(),
    });

    let mut popped: u64 = 0;
    while let Some(node) = queue.pop_front() {
        popped += 1;
        if popped % POLL_INTERVAL == 0 && cancel.is_cancelled() {
            break;
        }
        if node.next == n {
            continue;
        }
        let (project, item_cost, item_value) = sorted[node.next];

        let included_cost = node.cost + item_cost;
        if included_cost <= budget {
            let included_value = node.value + item_value;
            let mut included_allocation = node.allocation.clone();
            included_allocation.push(project);
            if included_value > best_value {
                best_value = included_value;
                best_allocation = included_allocation.clone();
            }
            let included_bound = bound(included_value, included_cost, budget, node.next + 1, &sorted);
            if included_bound > best_value as f64 {
                queue.push_back(Node {
                    next: node.next + 1,
                    value: included_value,
                    cost: included_cost,
                    allocation: included_allocation,
                });
            }
        }

        let excluded_bound = bound(node.value, node.cost, budget, node.next + 1, &sorted);
        if excluded_bound > best_value as f64 {
            queue.push_back(Node {
                next: node.next + 1,
                value: node.value,
                cost: node.cost,
                allocation: node.allocation,
            });
        }
    }

    best_allocation.sort_unstable();
    (best_allocation, best_value)
}

fn multi_bound(value: i64, cost: &[i64], budgets: &[i64], start: usize, sorted: &[(usize, Vec<i64>, i64)]) -> f64 {
    let mut remaining: Vec<i64> = budgets.iter().zip(cost).map(|(&b, &c)| b - c).collect();
    if remaining.iter().any(|&r| r < 0) {
        return 0.0;
    }
    let mut total = value as f64;
    for (_, item_costs, item_value) in &sorted[start..] {
        if remaining.iter().all(|&r| r <= 0) {
            break;
        }
        let fits = item_costs.iter().zip(&remaining).all(|(&c, &r)| c <= r);
        if fits {
            total += *item_value as f64;
            for (r, &c) in remaining.iter_mut().zip(item_costs.iter()) {
                *r -= c;
            }
        } else {
            let fraction = item_costs
                .iter()
                .zip(&remaining)
                .filter(|&(&c, _)| c > 0)
                .map(|(&c, &r)| (r as f64 / c as f64).max(0.0))
                .fold(f64::INFINITY, f64::min)
                .min(1.0);
            total += *item_value as f64 * fraction;
            break;
        }
    }
    total
}

/// Multi-dimensional variant of [`branch_and_bound`]: same skeleton, bound
/// computed by a multi-dimensional greedy fractional relaxation (fractional
/// share = the tightest dimension's remaining headroom over that
/// dimension's cost), sorted by value over summed per-dimension cost.
pub fn multi_branch_and_bound(
    budgets: &[i64],
    costs: &[Vec<i64>],
    values: &[i64],
    cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = values.len();
    if n == 0 {
        return (Vec::new(), 0);
    }
    let mut sorted: Vec<(usize, Vec<i64>, i64)> = (0..n)
        .map(|i| {
            let item_costs: Vec<i64> = costs.iter().map(|row| row[i]).collect();
            (i, item_costs, values[i])
        })
        .collect();
    sorted.sort_by(|a, b| {
        let sum_a: i64 = a.1.iter().sum();
        let sum_b: i64 = b.1.iter().sum();
        let ratio_a = a.2 as f64 / sum_a as f64;
        let ratio_b = b.2 as f64 / sum_b as f64;
        ratio_b.partial_cmp(&ratio_a).unwrap()
    });

    let dims = budgets.len();
    let mut best_value = 0i64;
    let mut best_allocation = Vec::new();

    let mut queue = VecDeque::new();
    queue.push_back((0usize, 0i64, vec![0i64; dims], Vec::<usize>::new()));

    let mut popped: u64 = 0;
    while let Some((next, value, cost, allocation)) = queue.pop_front() {
        popped += 1;
        if popped % POLL_INTERVAL == 0 && cancel.is_cancelled() {
            break;
        }
        if next == n {
            continue;
        }
        let (project, ref item_costs, item_value) = sorted[next];

        let included_cost: Vec<i64> = cost.iter().zip(item_costs.iter()).map(|(&c, &ic)| c + ic).collect();
        if included_cost.iter().zip(budgets).all(|(&c, &b)| c <= b) {
            let included_value = value + item_value;
            let mut included_allocation = allocation.clone();
            included_allocation.push(project);
            if included_value > best_value {
                best_value = included_value;
                best_allocation = included_allocation.clone();
            }
            let included_bound = multi_bound(included_value, &included_cost, budgets, next + 1, &sorted);
            if included_bound > best_value as f64 {
                queue.push_back((next + 1, included_value, included_cost, included_allocation));
            }
        }

        let excluded_bound = multi_bound(value, &cost, budgets, next + 1, &sorted);
        if excluded_bound > best_value as f64 {
            queue.push_back((next + 1, value, cost, allocation));
        }
    }

    best_allocation.sort_unstable();
    (best_allocation, best_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_brute_force_optimum() {
        let costs = vec![50, 75, 90, 20, 10];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = branch_and_bound(100, &costs, &values, &CancelToken::new());
        assert_eq!(value, 7);
        assert_eq!(allocation, vec![0, 3, 4]);
    }

    #[test]
    fn multi_finds_a_feasible_optimum() {
        let budgets = vec![100, 200];
        let costs = vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = multi_branch_and_bound(&budgets, &costs, &values, &CancelToken::new());
        assert_eq!(value, 5);
        for (dimension, &budget) in budgets.iter().enumerate() {
            let used: i64 = allocation.iter().map(|&i| costs[dimension][i]).sum();
            assert!(used <= budget);
        }
    }
}
