//! Simulated annealing over the bit-vector inclusion space. Grounded in
//! `community_knapsack/solvers/approximate/sim_anneal.py`.

use rand::Rng;

use crate::cancel::{CancelToken, POLL_INTERVAL};
use crate::params::SimulatedAnnealingParams;

/// Starts from the empty allocation; at each step flips a random project's
/// inclusion, rejecting moves that would overflow the budget, accepting
/// improving moves outright and deteriorating moves with probability
/// `exp(-Δ/T)`. Cools by `cooling_ratio` every `temperature_length`
/// proposals until the temperature drops to `stopping_temperature`.
pub fn simulated_annealing(
    budget: i64,
    costs: &[i64],
    values: &[i64],
    params: &SimulatedAnnealingParams,
    rng: &mut impl Rng,
    cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = costs.len();
    if n == 0 {
        return (Vec::new(), 0);
    }

    let mut included = vec![false; n];
    let mut cost = 0i64;
    let mut value = 0i64;
    let mut best_included = included.clone();
    let mut best_value = 0i64;

    let mut temperature = params.initial_temperature;
    let mut iterations: u64 = 0;
    'cooling: while temperature > params.stopping_temperature {
        for _ in 0..params.temperature_length {
            iterations += 1;
            if iterations % POLL_INTERVAL == 0 && cancel.is_cancelled() {
                break 'cooling;
            }

            let project = rng.random_range(0..n);
            let including = !included[project];
            let new_cost = if including { cost + costs[project] } else { cost - costs[project] };
            if including && new_cost > budget {
                continue;
            }
            let new_value = if including { value + values[project] } else { value - values[project] };
            let delta = new_value - value;

            let accept = if delta >= 0 {
                true
            } else {
                rng.random::<f64>() < (delta as f64 / temperature).exp()
            };

            if accept {
                included[project] = including;
                cost = new_cost;
                value = new_value;
                if value > best_value {
                    best_value = value;
                    best_included = included.clone();
                }
            }
        }
        temperature *= params.cooling_ratio;
    }

    let allocation: Vec<usize> = (0..n).filter(|&i| best_included[i]).collect();
    (allocation, best_value)
}

/// Multi-budget variant: a proposed inclusion is rejected if it would
/// overflow any dimension.
pub fn multi_simulated_annealing(
    budgets: &[i64],
    costs: &[Vec<i64>],
    values: &[i64],
    params: &SimulatedAnnealingParams,
    rng: &mut impl Rng,
    cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = values.len();
    if n == 0 {
        return (Vec::new(), 0);
    }

    let mut included = vec![false; n];
    let mut cost = vec![0i64; budgets.len()];
    let mut value = 0i64;
    let mut best_included = included.clone();
    let mut best_value = 0i64;

    let mut temperature = params.initial_temperature;
    let mut iterations: u64 = 0;
    'cooling: while temperature > params.stopping_temperature {
        for _ in 0..params.temperature_length {
            iterations += 1;
            if iterations % POLL_INTERVAL == 0 && cancel.is_cancelled() {
                break 'cooling;
            }

            let project = rng.random_range(0..n);
            let including = !included[project];
            let new_cost: Vec<i64> = cost
                .iter()
                .zip(costs.iter())
                .map(|(&c, row)| if including { c + row[project] } else { c - row[project] })
                .collect();
            if including && new_cost.iter().zip(budgets).any(|(&c, &b)| c > b) {
                continue;
            }
            let new_value = if including { value + values[project] } else { value - values[project] };
            let delta = new_value - value;

            let accept = if delta >= 0 {
                true
            } else {
                rng.random::<f64>() < (delta as f64 / temperature).exp()
            };

            if accept {
                included[project] = including;
                cost = new_cost;
                value = new_value;
                if value > best_value {
                    best_value = value;
                    best_included = included.clone();
                }
            }
        }
        temperature *= params.cooling_ratio;
    }

    let allocation: Vec<usize> = (0..n).filter(|&i| best_included[i]).collect();
    (allocation, best_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn finds_a_feasible_and_reasonable_allocation() {
        let costs = vec![50, 75, 90, 20, 10];
        let values = vec![3, 1, 3, 2, 2];
        let params = SimulatedAnnealingParams {
            initial_temperature: 1.0,
            temperature_length: 2000,
            cooling_ratio: 0.9,
            stopping_temperature: 0.5,
        };
        let mut rng = SmallRng::seed_from_u64(42);
        let (allocation, value) = simulated_annealing(100, &costs, &values, &params, &mut rng, &CancelToken::new());
        let used: i64 = allocation.iter().map(|&i| costs[i]).sum();
        assert!(used <= 100);
        assert!(value <= 7);
        assert!(value > 0);
    }

    #[test]
    fn multi_respects_every_dimension() {
        let budgets = vec![100, 200];
        let costs = vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]];
        let values = vec![3, 1, 3, 2, 2];
        let params = SimulatedAnnealingParams {
            initial_temperature: 1.0,
            temperature_length: 2000,
            cooling_ratio: 0.9,
            stopping_temperature: 0.5,
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let (allocation, _) =
            multi_simulated_annealing(&budgets, &costs, &values, &params, &mut rng, &CancelToken::new());
        for (dimension, &budget) in budgets.iter().enumerate() {
            let used: i64 = allocation.iter().map(|&i| costs[dimension][i]).sum();
            assert!(used <= budget);
        }
    }
}
