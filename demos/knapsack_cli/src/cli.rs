//! Command line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pbknapsack::{MultiAlgorithm, SingleAlgorithm};

/// Solve or generate Participatory Budgeting knapsack instances.
#[derive(Parser, Debug)]
#[command(version, about = "Participatory Budgeting knapsack solver.", long_about = None)]
pub struct Cli {
    /// Logging level to use: one of "error", "warn", "info", "debug", "trace".
    #[arg(short, long, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a `.pb` instance with the chosen algorithm.
    Solve(SolveArgs),
    /// Generate a random `.pb` instance and write it to a file.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// The `.pb` file to read.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Algorithm to run.
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::BranchAndBound)]
    pub algorithm: AlgorithmArg,

    /// Treat the instance as multi-dimensional even if it has one budget.
    #[arg(short, long)]
    pub multi: bool,

    /// Wall-clock timeout in seconds; negative means no timeout.
    #[arg(short, long, default_value_t = -1.0)]
    pub timeout: f64,

    /// FPTAS approximation factor (single-budget only).
    #[arg(long, default_value_t = 0.5)]
    pub epsilon: f64,

    /// Seeds the RNG used by simulated annealing and the genetic algorithm.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Where to write the generated instance.
    #[arg(value_name = "FILE")]
    pub output: PathBuf,

    /// Seeds the generator; omit to draw entropy from the OS.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of budget dimensions to generate.
    #[arg(long, default_value_t = 1)]
    pub dimensions: usize,

    /// Inclusive `(min, max)` bound on the number of projects.
    #[arg(long, num_args = 2, default_values_t = [5i64, 20i64])]
    pub num_projects: Vec<i64>,

    /// Inclusive `(min, max)` bound on the number of voters.
    #[arg(long, num_args = 2, default_values_t = [5i64, 50i64])]
    pub num_voters: Vec<i64>,

    /// Inclusive `(min, max)` bound on each budget dimension.
    #[arg(long, num_args = 2, default_values_t = [100i64, 1000i64])]
    pub budget: Vec<i64>,

    /// Inclusive `(min, max)` bound on each project's per-dimension cost.
    #[arg(long, num_args = 2, default_values_t = [10i64, 200i64])]
    pub cost: Vec<i64>,

    /// Inclusive `(min, max)` bound on a single cast vote's utility points.
    #[arg(long, num_args = 2, default_values_t = [0i64, 5i64])]
    pub utility: Vec<i64>,
}

/// Clap-facing algorithm selector; maps onto whichever of
/// [`SingleAlgorithm`]/[`MultiAlgorithm`] the chosen scope supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    BruteForce,
    Memoization,
    DynamicProgramming,
    BranchAndBound,
    Ilp,
    Greedy,
    RatioGreedy,
    Fptas,
    SimulatedAnnealing,
    GeneticAlgorithm,
}

impl AlgorithmArg {
    pub fn single(self) -> SingleAlgorithm {
        match self {
            Self::BruteForce => SingleAlgorithm::BruteForce,
            Self::Memoization => SingleAlgorithm::Memoization,
            Self::DynamicProgramming => SingleAlgorithm::DynamicProgramming,
            Self::BranchAndBound => SingleAlgorithm::BranchAndBound,
            Self::Ilp => SingleAlgorithm::Ilp,
            Self::Greedy => SingleAlgorithm::Greedy,
            Self::RatioGreedy => SingleAlgorithm::RatioGreedy,
            Self::Fptas => SingleAlgorithm::Fptas,
            Self::SimulatedAnnealing => SingleAlgorithm::SimulatedAnnealing,
            Self::GeneticAlgorithm => SingleAlgorithm::GeneticAlgorithm,
        }
    }

    /// `None` for `Fptas`: the registry has no multi-budget FPTAS (§4.C).
    pub fn multi(self) -> Option<MultiAlgorithm> {
        Some(match self {
            Self::BruteForce => MultiAlgorithm::BruteForce,
            Self::Memoization => MultiAlgorithm::Memoization,
            Self::DynamicProgramming => MultiAlgorithm::DynamicProgramming,
            Self::BranchAndBound => MultiAlgorithm::BranchAndBound,
            Self::Ilp => MultiAlgorithm::Ilp,
            Self::Greedy => MultiAlgorithm::Greedy,
            Self::RatioGreedy => MultiAlgorithm::RatioGreedy,
            Self::SimulatedAnnealing => MultiAlgorithm::SimulatedAnnealing,
            Self::GeneticAlgorithm => MultiAlgorithm::GeneticAlgorithm,
            Self::Fptas => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_except_fptas_has_a_multi_counterpart() {
        for algorithm in AlgorithmArg::value_variants() {
            if *algorithm == AlgorithmArg::Fptas {
                assert!(algorithm.multi().is_none());
            } else {
                assert!(algorithm.multi().is_some());
            }
        }
    }

    #[test]
    fn cli_parses_a_solve_invocation() {
        let cli = Cli::parse_from(["knapsack_cli", "solve", "instance.pb", "--algorithm", "greedy", "--multi"]);
        match cli.command {
            Command::Solve(args) => {
                assert_eq!(args.algorithm, AlgorithmArg::Greedy);
                assert!(args.multi);
                assert_eq!(args.input, PathBuf::from("instance.pb"));
            }
            Command::Generate(_) => panic!("expected a solve subcommand"),
        }
    }
}
