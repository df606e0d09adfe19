//! Tuning parameters for the two metaheuristics, and the FPTAS accuracy
//! knob. Defaults are sourced from [`crate::config`]'s `env_param` statics,
//! matching spec defaults (`T_0 = 1.0, L = 50_000, α = 0.9, T_stop = 0.5`
//! for simulated annealing; `P = 200, p_c = 0.8, p_m = 0.3, G = 100` for the
//! genetic algorithm).

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedAnnealingParams {
    pub initial_temperature: f64,
    pub temperature_length: u32,
    pub cooling_ratio: f64,
    pub stopping_temperature: f64,
}

impl Default for SimulatedAnnealingParams {
    fn default() -> Self {
        Self {
            initial_temperature: config::SA_INITIAL_TEMPERATURE.get(),
            temperature_length: config::SA_TEMPERATURE_LENGTH.get(),
            cooling_ratio: config::SA_COOLING_RATIO.get(),
            stopping_temperature: config::SA_STOPPING_TEMPERATURE.get(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticAlgorithmParams {
    pub population_size: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub num_generations: u32,
}

impl Default for GeneticAlgorithmParams {
    fn default() -> Self {
        Self {
            population_size: config::GA_POPULATION_SIZE.get(),
            crossover_rate: config::GA_CROSSOVER_RATE.get(),
            mutation_rate: config::GA_MUTATION_RATE.get(),
            num_generations: config::GA_NUM_GENERATIONS.get(),
        }
    }
}
