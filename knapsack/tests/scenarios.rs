//! End-to-end scenarios S1-S5 from spec.md §8, run against the public
//! `pbknapsack` API rather than individual solver functions.

use pbknapsack::{MultiAlgorithm, MultiProblem, SingleAlgorithm, SingleProblem, SolveConfig};

fn s1_projects() -> Vec<String> {
    vec!["5".into(), "6".into(), "7".into(), "8".into(), "9".into()]
}

fn s1_utilities() -> Vec<Vec<i64>> {
    vec![
        vec![1, 1, 1, 0, 1],
        vec![1, 0, 1, 0, 0],
        vec![0, 0, 0, 1, 1],
        vec![1, 0, 0, 0, 0],
        vec![0, 0, 1, 1, 0],
    ]
}

#[test]
fn s1_single_exact_algorithms_agree_on_the_optimum() {
    let problem = SingleProblem::new(
        5,
        5,
        100,
        vec![50, 75, 90, 20, 10],
        s1_utilities(),
        Some(s1_projects()),
        None,
    )
    .unwrap();

    assert_eq!(problem.values(), &[3, 1, 3, 2, 2]);

    for algorithm in [
        SingleAlgorithm::BruteForce,
        SingleAlgorithm::Memoization,
        SingleAlgorithm::DynamicProgramming,
        SingleAlgorithm::BranchAndBound,
        SingleAlgorithm::Ilp,
    ] {
        let result = problem.solve(algorithm, -1.0);
        assert_eq!(result.value, 7, "{algorithm:?} disagreed on the optimum");
        let mut allocation = result.allocation.clone();
        allocation.sort();
        assert_eq!(allocation, vec!["5", "8", "9"]);
        assert!(!result.is_approximate);
    }
}

#[test]
fn s2_multi_exact_algorithms_agree_on_the_optimum() {
    let problem = MultiProblem::new(
        5,
        5,
        vec![100, 200],
        vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]],
        s1_utilities(),
        Some(s1_projects()),
        None,
    )
    .unwrap();

    for algorithm in [MultiAlgorithm::BruteForce, MultiAlgorithm::Memoization, MultiAlgorithm::Ilp] {
        let result = problem.solve(algorithm, -1.0);
        assert_eq!(result.value, 5, "{algorithm:?} disagreed on the optimum");
        // Several allocations tie at the optimum ({"5","8"}, {"5","9"}, {"7","9"}),
        // so only feasibility is checked here, not a specific winner.
        for (dimension, &budget) in problem.budget().iter().enumerate() {
            let used = result.cost[dimension];
            assert!(used <= budget);
        }
    }
}

#[test]
fn s3_small_knapsack_round_trip() {
    let problem = SingleProblem::<String>::new(
        5,
        5,
        1000,
        vec![200, 650, 400, 700, 400],
        s1_utilities(),
        None,
        None,
    )
    .unwrap();
    assert_eq!(problem.values(), &[2, 3, 3, 2, 3]);

    let result = problem.solve(SingleAlgorithm::DynamicProgramming, -1.0);
    assert_eq!(result.value, 8);
}

#[test]
fn s4_fptas_stays_within_epsilon_of_the_optimum() {
    let problem = SingleProblem::new(
        5,
        5,
        100,
        vec![50, 75, 90, 20, 10],
        s1_utilities(),
        Some(s1_projects()),
        None,
    )
    .unwrap();

    let optimum = problem.solve(SingleAlgorithm::BruteForce, -1.0).value;
    let config = SolveConfig {
        fptas_epsilon: 0.5,
        ..SolveConfig::default()
    };
    let result = problem.solve_with(SingleAlgorithm::Fptas, &config);

    assert!(result.value as f64 >= 0.5 * optimum as f64);
    assert!(result.value <= optimum);
}

#[test]
fn s5_timeout_on_a_forty_project_instance_returns_the_sentinel_result() {
    let n = 40;
    let problem = SingleProblem::<String>::new(n, 1, 1000, vec![37; n], vec![vec![1; n]], None, None).unwrap();

    let config = SolveConfig {
        timeout_seconds: 0.1,
        ..SolveConfig::default()
    };
    let result = problem.solve_with(SingleAlgorithm::BruteForce, &config);

    assert!(result.allocation.is_empty());
    assert_eq!(result.value, 0);
    assert_eq!(result.runtime_ms, 100.0);
}

#[test]
fn empty_instance_solves_to_an_empty_allocation_regardless_of_algorithm() {
    let problem = SingleProblem::<String>::new(0, 0, 10, vec![], vec![], None, None).unwrap();
    for algorithm in [
        SingleAlgorithm::BruteForce,
        SingleAlgorithm::Greedy,
        SingleAlgorithm::SimulatedAnnealing,
        SingleAlgorithm::GeneticAlgorithm,
    ] {
        let result = problem.solve(algorithm, -1.0);
        assert!(result.allocation.is_empty());
        assert_eq!(result.value, 0);
    }
}

#[test]
fn every_allocation_respects_every_budget_dimension() {
    let problem = MultiProblem::new(
        5,
        5,
        vec![100, 200],
        vec![vec![50, 75, 90, 20, 10], vec![75, 100, 90, 50, 85]],
        s1_utilities(),
        None,
        None,
    )
    .unwrap();

    for algorithm in [
        MultiAlgorithm::BruteForce,
        MultiAlgorithm::Greedy,
        MultiAlgorithm::RatioGreedy,
        MultiAlgorithm::BranchAndBound,
        MultiAlgorithm::SimulatedAnnealing,
        MultiAlgorithm::GeneticAlgorithm,
    ] {
        let result = problem.solve(algorithm, -1.0);
        for (dimension, &budget) in problem.budget().iter().enumerate() {
            assert!(result.cost[dimension] <= budget, "{algorithm:?} overran dimension {dimension}");
        }
    }
}
