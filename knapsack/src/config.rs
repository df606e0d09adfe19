//! Tunable algorithm defaults, overridable via environment variables the
//! same way the teacher exposes its own solver tuning knobs (`env_param`).

use env_param::EnvParam;

pub static SA_INITIAL_TEMPERATURE: EnvParam<f64> = EnvParam::new("PBKNAPSACK_SA_INITIAL_TEMPERATURE", "1.0");
pub static SA_TEMPERATURE_LENGTH: EnvParam<u32> = EnvParam::new("PBKNAPSACK_SA_TEMPERATURE_LENGTH", "50000");
pub static SA_COOLING_RATIO: EnvParam<f64> = EnvParam::new("PBKNAPSACK_SA_COOLING_RATIO", "0.9");
pub static SA_STOPPING_TEMPERATURE: EnvParam<f64> = EnvParam::new("PBKNAPSACK_SA_STOPPING_TEMPERATURE", "0.5");

pub static GA_POPULATION_SIZE: EnvParam<usize> = EnvParam::new("PBKNAPSACK_GA_POPULATION_SIZE", "200");
pub static GA_CROSSOVER_RATE: EnvParam<f64> = EnvParam::new("PBKNAPSACK_GA_CROSSOVER_RATE", "0.8");
pub static GA_MUTATION_RATE: EnvParam<f64> = EnvParam::new("PBKNAPSACK_GA_MUTATION_RATE", "0.3");
pub static GA_NUM_GENERATIONS: EnvParam<u32> = EnvParam::new("PBKNAPSACK_GA_NUM_GENERATIONS", "100");

pub static FPTAS_EPSILON: EnvParam<f64> = EnvParam::new("PBKNAPSACK_FPTAS_EPSILON", "0.5");
