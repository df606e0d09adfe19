//! Genetic algorithm over bit-chromosomes. Grounded in
//! `community_knapsack/solvers/approximate/genetic.py`.

use rand::Rng;

use crate::cancel::{CancelToken, POLL_INTERVAL};
use crate::params::GeneticAlgorithmParams;

fn tournament<'a>(population: &'a [Vec<bool>], fitness: &[i64], rng: &mut impl Rng) -> &'a [bool] {
    let a = rng.random_range(0..population.len());
    let b = rng.random_range(0..population.len());
    if fitness[a] >= fitness[b] {
        &population[a]
    } else {
        &population[b]
    }
}

fn crossover(parent1: &[bool], parent2: &[bool], crossover_rate: f64, rng: &mut impl Rng) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    if n < 2 || rng.random::<f64>() >= crossover_rate {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let split = rng.random_range(1..n);
    let mut child1 = parent1[..split].to_vec();
    child1.extend_from_slice(&parent2[split..]);
    let mut child2 = parent2[..split].to_vec();
    child2.extend_from_slice(&parent1[split..]);
    (child1, child2)
}

fn mutate(chromosome: &mut [bool], mutation_rate: f64, rng: &mut impl Rng) {
    if rng.random::<f64>() < mutation_rate {
        let bit = rng.random_range(0..chromosome.len());
        chromosome[bit] = !chromosome[bit];
    }
}

/// `0` for any chromosome whose inclusion set exceeds any budget dimension,
/// otherwise its allocation value.
fn fitness_single(chromosome: &[bool], budget: i64, costs: &[i64], values: &[i64]) -> i64 {
    let cost: i64 = chromosome
        .iter()
        .enumerate()
        .filter(|&(_, &included)| included)
        .map(|(i, _)| costs[i])
        .sum();
    if cost > budget {
        return 0;
    }
    chromosome
        .iter()
        .enumerate()
        .filter(|&(_, &included)| included)
        .map(|(i, _)| values[i])
        .sum()
}

fn fitness_multi(chromosome: &[bool], budgets: &[i64], costs: &[Vec<i64>], values: &[i64]) -> i64 {
    let feasible = costs.iter().zip(budgets).all(|(row, &budget)| {
        chromosome
            .iter()
            .enumerate()
            .filter(|&(_, &included)| included)
            .map(|(i, _)| row[i])
            .sum::<i64>()
            <= budget
    });
    if !feasible {
        return 0;
    }
    chromosome
        .iter()
        .enumerate()
        .filter(|&(_, &included)| included)
        .map(|(i, _)| values[i])
        .sum()
}

fn chromosome_to_allocation(chromosome: &[bool]) -> Vec<usize> {
    (0..chromosome.len()).filter(|&i| chromosome[i]).collect()
}

/// Runs `num_generations` generations of tournament selection,
/// single-point crossover and bit-flip mutation over an initially all-zero
/// population, keeping the best-fitness chromosome seen across every
/// generation (not just the last).
pub fn genetic_algorithm(
    budget: i64,
    costs: &[i64],
    values: &[i64],
    params: &GeneticAlgorithmParams,
    rng: &mut impl Rng,
    cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = costs.len();
    if n == 0 {
        return (Vec::new(), 0);
    }

    let mut population: Vec<Vec<bool>> = vec![vec![false; n]; params.population_size];
    let mut best_value = 0i64;
    let mut best_chromosome = population[0].clone();

    let mut evaluated: u64 = 0;
    'generations: for _ in 0..params.num_generations {
        let fitness: Vec<i64> = population
            .iter()
            .map(|c| fitness_single(c, budget, costs, values))
            .collect();
        for (chromosome, &value) in population.iter().zip(&fitness) {
            if value > best_value {
                best_value = value;
                best_chromosome = chromosome.clone();
            }
        }

        let mut next_population = Vec::with_capacity(params.population_size);
        while next_population.len() < params.population_size {
            evaluated += 1;
            if evaluated % POLL_INTERVAL == 0 && cancel.is_cancelled() {
                break 'generations;
            }
            let parent1 = tournament(&population, &fitness, rng).to_vec();
            let parent2 = tournament(&population, &fitness, rng).to_vec();
            let (mut child1, mut child2) = crossover(&parent1, &parent2, params.crossover_rate, rng);
            mutate(&mut child1, params.mutation_rate, rng);
            mutate(&mut child2, params.mutation_rate, rng);
            next_population.push(child1);
            if next_population.len() < params.population_size {
                next_population.push(child2);
            }
        }
        population = next_population;
    }

    (chromosome_to_allocation(&best_chromosome), best_value)
}

pub fn multi_genetic_algorithm(
    budgets: &[i64],
    costs: &[Vec<i64>],
    values: &[i64],
    params: &GeneticAlgorithmParams,
    rng: &mut impl Rng,
    cancel: &CancelToken,
) -> (Vec<usize>, i64) {
    let n = values.len();
    if n == 0 {
        return (Vec::new(), 0);
    }

    let mut population: Vec<Vec<bool>> = vec![vec![false; n]; params.population_size];
    let mut best_value = 0i64;
    let mut best_chromosome = population[0].clone();

    let mut evaluated: u64 = 0;
    'generations: for _ in 0..params.num_generations {
        let fitness: Vec<i64> = population
            .iter()
            .map(|c| fitness_multi(c, budgets, costs, values))
            .collect();
        for (chromosome, &value) in population.iter().zip(&fitness) {
            if value > best_value {
                best_value = value;
                best_chromosome = chromosome.clone();
            }
        }

        let mut next_population = Vec::with_capacity(params.population_size);
        while next_population.len() < params.population_size {
            evaluated += 1;
            if evaluated % POLL_INTERVAL == 0 && cancel.is_cancelled() {
                break 'generations;
            }
            let parent1 = tournament(&population, &fitness, rng).to_vec();
            let parent2 = tournament(&population, &fitness, rng).to_vec();
            let (mut child1, mut child2) = crossover(&parent1, &parent2, params.crossover_rate, rng);
            mutate(&mut child1, params.mutation_rate, rng);
            mutate(&mut child2, params.mutation_rate, rng);
            next_population.push(child1);
            if next_population.len() < params.population_size {
                next_population.push(child2);
            }
        }
        population = next_population;
    }

    (chromosome_to_allocation(&best_chromosome), best_value)
}
