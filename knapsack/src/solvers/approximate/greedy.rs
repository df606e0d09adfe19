//! Greedy and ratio-greedy heuristics. Grounded in
//! `community_knapsack/solvers/approximate/greedy.py`.

/// Sorts by raw value descending, taking every project that still fits.
pub fn greedy(budget: i64, costs: &[i64], values: &[i64]) -> (Vec<usize>, i64) {
    let mut order: Vec<usize> = (0..costs.len()).collect();
    order.sort_by(|&a, &b| values[b].cmp(&values[a]));

    let mut remaining = budget;
    let mut allocation = Vec::new();
    for project in order {
        if costs[project] <= remaining {
            remaining -= costs[project];
            allocation.push(project);
        }
    }
    let value = allocation.iter().map(|&i| values[i]).sum();
    (allocation, value)
}

/// Sorts by `value / cost` descending.
pub fn ratio_greedy(budget: i64, costs: &[i64], values: &[i64]) -> (Vec<usize>, i64) {
    let mut order: Vec<usize> = (0..costs.len()).collect();
    order.sort_by(|&a, &b| {
        let ratio_a = values[a] as f64 / costs[a] as f64;
        let ratio_b = values[b] as f64 / costs[b] as f64;
        ratio_b.partial_cmp(&ratio_a).unwrap()
    });

    let mut remaining = budget;
    let mut allocation = Vec::new();
    for project in order {
        if costs[project] <= remaining {
            remaining -= costs[project];
            allocation.push(project);
        }
    }
    let value = allocation.iter().map(|&i| values[i]).sum();
    (allocation, value)
}

/// Multi-budget greedy: sorts by raw value descending, taking every project
/// whose cost fits every remaining dimension.
pub fn multi_greedy(budgets: &[i64], costs: &[Vec<i64>], values: &[i64]) -> (Vec<usize>, i64) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].cmp(&values[a]));

    let mut remaining = budgets.to_vec();
    let mut allocation = Vec::new();
    for project in order {
        let fits = costs.iter().zip(&remaining).all(|(row, &r)| row[project] <= r);
        if fits {
            for (row, r) in costs.iter().zip(remaining.iter_mut()) {
                *r -= row[project];
            }
            allocation.push(project);
        }
    }
    let value = allocation.iter().map(|&i| values[i]).sum();
    (allocation, value)
}

/// Multi-budget ratio-greedy: sorts by `value / Σ_k cost_k` descending.
pub fn multi_ratio_greedy(budgets: &[i64], costs: &[Vec<i64>], values: &[i64]) -> (Vec<usize>, i64) {
    let total_cost = |i: usize| -> i64 { costs.iter().map(|row| row[i]).sum() };
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        let ratio_a = values[a] as f64 / total_cost(a) as f64;
        let ratio_b = values[b] as f64 / total_cost(b) as f64;
        ratio_b.partial_cmp(&ratio_a).unwrap()
    });

    let mut remaining = budgets.to_vec();
    let mut allocation = Vec::new();
    for project in order {
        let fits = costs.iter().zip(&remaining).all(|(row, &r)| row[project] <= r);
        if fits {
            for (row, r) in costs.iter().zip(remaining.iter_mut()) {
                *r -= row[project];
            }
            allocation.push(project);
        }
    }
    let value = allocation.iter().map(|&i| values[i]).sum();
    (allocation, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_returns_a_feasible_allocation() {
        let costs = vec![50, 75, 90, 20, 10];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, value) = greedy(100, &costs, &values);
        let used: i64 = allocation.iter().map(|&i| costs[i]).sum();
        assert!(used <= 100);
        assert!(value <= 7); // never beats the known optimum
    }

    #[test]
    fn ratio_greedy_prefers_cheap_high_value_projects() {
        let costs = vec![10, 100];
        let values = vec![9, 10];
        let (allocation, _) = ratio_greedy(10, &costs, &values);
        assert_eq!(allocation, vec![0]);
    }

    #[test]
    fn multi_greedy_respects_every_dimension() {
        let budgets = vec![100, 200];
        let costs = vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]];
        let values = vec![3, 1, 3, 2, 2];
        let (allocation, _) = multi_greedy(&budgets, &costs, &values);
        for (dimension, &budget) in budgets.iter().enumerate() {
            let used: i64 = allocation.iter().map(|&i| costs[dimension][i]).sum();
            assert!(used <= budget);
        }
    }
}
