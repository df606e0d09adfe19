//! Solver dispatcher (§4.F, §5): invokes the selected algorithm on a
//! supervised worker thread under a wall-clock timeout, and assembles the
//! immutable [`SolveResult`] record.
//!
//! Grounded in the teacher's `solver/src/solver/parallel/parallel_solver.rs`:
//! a plain `std::thread::spawn` worker reporting over a channel, with the
//! caller bounding its wait by `recv_timeout`. Unlike the teacher's
//! `ParSolver`, there is only ever one worker per call (no incremental
//! restart), and an abandoned worker is never joined — solvers here are
//! pure functions of their inputs with no shared state to corrupt (§5), so
//! leaving one running past its timeout is safe.

use std::fmt::Display;
use std::hash::Hash;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::algorithm::{MultiAlgorithm, SingleAlgorithm};
use crate::cancel::CancelToken;
use crate::config;
use crate::model::{MultiProblem, SingleProblem};
use crate::params::{GeneticAlgorithmParams, SimulatedAnnealingParams};
use crate::result::SolveResult;
use crate::solvers::approximate::{
    fptas, genetic_algorithm, greedy, multi_genetic_algorithm, multi_greedy, multi_ratio_greedy,
    multi_simulated_annealing, ratio_greedy, simulated_annealing,
};
use crate::solvers::exact::{
    branch_and_bound, brute_force, dynamic_programming, ilp, memoization, multi_branch_and_bound,
    multi_brute_force, multi_dynamic_programming, multi_ilp, multi_memoization,
};

/// Tuning knobs a `solve_with` caller can override; `solve` uses
/// [`SolveConfig::default`], which sources the metaheuristic/FPTAS defaults
/// from [`crate::config`]'s `env_param` statics.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Negative means "no timeout", per §5.
    pub timeout_seconds: f64,
    pub fptas_epsilon: f64,
    pub simulated_annealing: SimulatedAnnealingParams,
    pub genetic_algorithm: GeneticAlgorithmParams,
    /// Seeds the per-call RNG used by simulated annealing and the genetic
    /// algorithm. `None` draws a fresh seed from the OS, per §5/§9's
    /// "seedable for tests, no global RNG dependency" requirement.
    pub rng_seed: Option<u64>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: -1.0,
            fptas_epsilon: config::FPTAS_EPSILON.get(),
            simulated_annealing: SimulatedAnnealingParams::default(),
            genetic_algorithm: GeneticAlgorithmParams::default(),
            rng_seed: None,
        }
    }
}

fn make_rng(config: &SolveConfig) -> SmallRng {
    match config.rng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::seed_from_u64(rand::random()),
    }
}

/// Blocks on `rx` for at most `timeout_seconds` (or indefinitely if
/// negative), returning `None` on timeout.
fn await_worker<T>(rx: mpsc::Receiver<T>, timeout_seconds: f64) -> Option<T> {
    if timeout_seconds < 0.0 {
        rx.recv().ok()
    } else {
        rx.recv_timeout(Duration::from_secs_f64(timeout_seconds)).ok()
    }
}

pub fn solve_single<Id: Clone + Eq + Hash + Display + From<String>>(
    problem: &SingleProblem<Id>,
    algorithm: SingleAlgorithm,
    config: &SolveConfig,
) -> SolveResult<Id, i64> {
    let name = algorithm.name();
    let is_approximate = algorithm.is_approximate();
    if problem.num_projects() == 0 {
        return SolveResult::empty(name, is_approximate, 0.0);
    }

    let budget = problem.budget();
    let costs = problem.costs().to_vec();
    let values = problem.values().to_vec();
    let config = config.clone();
    let timeout_seconds = config.timeout_seconds;

    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();
    let (tx, rx) = mpsc::channel();

    let start = Instant::now();
    thread::spawn(move || {
        let mut rng = make_rng(&config);
        let outcome = match algorithm {
            SingleAlgorithm::BruteForce => brute_force(budget, &costs, &values, &worker_cancel),
            SingleAlgorithm::Memoization => memoization(budget, &costs, &values, &worker_cancel),
            SingleAlgorithm::DynamicProgramming => dynamic_programming(budget, &costs, &values, &worker_cancel),
            SingleAlgorithm::BranchAndBound => branch_and_bound(budget, &costs, &values, &worker_cancel),
            SingleAlgorithm::Ilp => ilp(budget, &costs, &values),
            SingleAlgorithm::Greedy => greedy(budget, &costs, &values),
            SingleAlgorithm::RatioGreedy => ratio_greedy(budget, &costs, &values),
            SingleAlgorithm::Fptas => fptas(budget, &costs, &values, config.fptas_epsilon, &worker_cancel),
            SingleAlgorithm::SimulatedAnnealing => simulated_annealing(
                budget,
                &costs,
                &values,
                &config.simulated_annealing,
                &mut rng,
                &worker_cancel,
            ),
            SingleAlgorithm::GeneticAlgorithm => genetic_algorithm(
                budget,
                &costs,
                &values,
                &config.genetic_algorithm,
                &mut rng,
                &worker_cancel,
            ),
        };
        let _ = tx.send(outcome);
    });

    match await_worker(rx, timeout_seconds) {
        Some((allocation, value)) => {
            let runtime_ms = start.elapsed().as_secs_f64() * 1000.0;
            let cost = problem.cost_of(&allocation);
            let projects = problem.projects();
            let ids = allocation.iter().map(|&i| projects[i].clone()).collect();
            SolveResult {
                allocation: ids,
                value,
                cost,
                runtime_ms,
                algorithm: name,
                is_approximate,
            }
        }
        None => {
            cancel.cancel();
            tracing::warn!(
                algorithm = name,
                timeout_seconds,
                "solve timed out, returning the sentinel empty result"
            );
            SolveResult::empty(name, is_approximate, timeout_seconds * 1000.0)
        }
    }
}

pub fn solve_multi<Id: Clone + Eq + Hash + Display + From<String>>(
    problem: &MultiProblem<Id>,
    algorithm: MultiAlgorithm,
    config: &SolveConfig,
) -> SolveResult<Id, Vec<i64>> {
    let name = algorithm.name();
    let is_approximate = algorithm.is_approximate();
    if problem.num_projects() == 0 {
        return SolveResult::empty(name, is_approximate, 0.0);
    }

    let budgets = problem.budget().to_vec();
    let costs = problem.costs().to_vec();
    let values = problem.values().to_vec();
    let config = config.clone();
    let timeout_seconds = config.timeout_seconds;

    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();
    let (tx, rx) = mpsc::channel();

    let start = Instant::now();
    thread::spawn(move || {
        let mut rng = make_rng(&config);
        let outcome = match algorithm {
            MultiAlgorithm::BruteForce => multi_brute_force(&budgets, &costs, &values, &worker_cancel),
            MultiAlgorithm::Memoization => multi_memoization(&budgets, &costs, &values, &worker_cancel),
            MultiAlgorithm::DynamicProgramming => {
                multi_dynamic_programming(&budgets, &costs, &values, &worker_cancel)
            }
            MultiAlgorithm::BranchAndBound => multi_branch_and_bound(&budgets, &costs, &values, &worker_cancel),
            MultiAlgorithm::Ilp => multi_ilp(&budgets, &costs, &values),
            MultiAlgorithm::Greedy => multi_greedy(&budgets, &costs, &values),
            MultiAlgorithm::RatioGreedy => multi_ratio_greedy(&budgets, &costs, &values),
            MultiAlgorithm::SimulatedAnnealing => multi_simulated_annealing(
                &budgets,
                &costs,
                &values,
                &config.simulated_annealing,
                &mut rng,
                &worker_cancel,
            ),
            MultiAlgorithm::GeneticAlgorithm => multi_genetic_algorithm(
                &budgets,
                &costs,
                &values,
                &config.genetic_algorithm,
                &mut rng,
                &worker_cancel,
            ),
        };
        let _ = tx.send(outcome);
    });

    match await_worker(rx, timeout_seconds) {
        Some((allocation, value)) => {
            let runtime_ms = start.elapsed().as_secs_f64() * 1000.0;
            let cost = problem.cost_of(&allocation);
            let projects = problem.projects();
            let ids = allocation.iter().map(|&i| projects[i].clone()).collect();
            SolveResult {
                allocation: ids,
                value,
                cost,
                runtime_ms,
                algorithm: name,
                is_approximate,
            }
        }
        None => {
            cancel.cancel();
            tracing::warn!(
                algorithm = name,
                timeout_seconds,
                "solve timed out, returning the sentinel empty result"
            );
            SolveResult::empty(name, is_approximate, timeout_seconds * 1000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_single() -> SingleProblem<String> {
        SingleProblem::new(
            5,
            5,
            100,
            vec![50, 75, 90, 20, 10],
            vec![
                vec![1, 1, 1, 0, 1],
                vec![1, 0, 1, 0, 0],
                vec![0, 0, 0, 1, 1],
                vec![1, 0, 0, 0, 0],
                vec![0, 0, 1, 1, 0],
            ],
            Some(vec!["5".into(), "6".into(), "7".into(), "8".into(), "9".into()]),
            None,
        )
        .unwrap()
    }

    #[test]
    fn brute_force_reaches_known_optimum() {
        let problem = sample_single();
        let result = solve_single(&problem, SingleAlgorithm::BruteForce, &SolveConfig::default());
        assert_eq!(result.value, 7);
        assert_eq!(result.cost, 80);
        assert_eq!(result.allocation, vec!["5", "8", "9"]);
        assert!(!result.is_approximate);
    }

    #[test]
    fn empty_instance_short_circuits() {
        let problem = SingleProblem::<String>::new(0, 0, 10, vec![], vec![], None, None).unwrap();
        let result = solve_single(&problem, SingleAlgorithm::DynamicProgramming, &SolveConfig::default());
        assert!(result.allocation.is_empty());
        assert_eq!(result.value, 0);
    }

    #[test]
    fn timeout_yields_sentinel_empty_result() {
        // 40 uniformly-weighted projects defeat brute force's 2^40 scan well
        // within any reasonable timeout (S5).
        let n = 40;
        let costs = vec![37; n];
        let values: Vec<Vec<i64>> = vec![vec![1; n]];
        let problem = SingleProblem::<String>::new(n, 1, 1000, costs, values, None, None).unwrap();
        let config = SolveConfig {
            timeout_seconds: 0.1,
            ..SolveConfig::default()
        };
        let result = problem.solve_with(SingleAlgorithm::BruteForce, &config);
        assert!(result.allocation.is_empty());
        assert_eq!(result.value, 0);
        assert_eq!(result.runtime_ms, 100.0);
    }
}
