mod cli;

use std::process::exit;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use pbfile::{write_multi, write_single, PbParser};
use pbgen::Generator;
use pbknapsack::SolveConfig;

use cli::{Cli, Command, GenerateArgs, SolveArgs};

fn main() {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt().with_max_level(cli.log_level).finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {error}");
    }

    let result = match &cli.command {
        Command::Solve(args) => solve(args),
        Command::Generate(args) => generate(args),
    };
    if let Err(error) = result {
        eprintln!("{error:#}");
        exit(1);
    }
}

fn solve(args: &SolveArgs) -> Result<()> {
    let parser = PbParser::from_path(&args.input).with_context(|| format!("reading {}", args.input.display()))?;

    let config = SolveConfig {
        timeout_seconds: args.timeout,
        fptas_epsilon: args.epsilon,
        rng_seed: args.seed,
        ..SolveConfig::default()
    };

    if args.multi {
        let problem = parser.multi_problem().context("parsing instance as multi-dimensional")?;
        let algorithm = args
            .algorithm
            .multi()
            .ok_or_else(|| anyhow!("{:?} has no multi-dimensional counterpart", args.algorithm))?;
        let result = problem.solve_with(algorithm, &config);
        println!("algorithm:    {}", result.algorithm);
        println!("approximate:  {}", result.is_approximate);
        println!("value:        {}", result.value);
        println!("cost:         {:?}", result.cost);
        println!("runtime_ms:   {:.3}", result.runtime_ms);
        println!("allocation:   {}", result.allocation.join(", "));
    } else {
        let problem = parser.single_problem().context("parsing instance as single-dimensional")?;
        let result = problem.solve_with(args.algorithm.single(), &config);
        println!("algorithm:    {}", result.algorithm);
        println!("approximate:  {}", result.is_approximate);
        println!("value:        {}", result.value);
        println!("cost:         {}", result.cost);
        println!("runtime_ms:   {:.3}", result.runtime_ms);
        println!("allocation:   {}", result.allocation.join(", "));
    }
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let mut generator = Generator::new(args.seed);
    let num_projects = bound_of(&args.num_projects, "num-projects")?;
    let num_voters = bound_of(&args.num_voters, "num-voters")?;
    let utility = bound_of(&args.utility, "utility")?;
    let vote_length = (0, -1);

    if args.dimensions <= 1 {
        let budget = bound_of(&args.budget, "budget")?;
        let cost = bound_of(&args.cost, "cost")?;
        let problem = generator
            .generate_single_problem(num_projects, num_voters, budget, cost, utility, vote_length)
            .context("generating random instance")?;
        write_single(&problem, &args.output).with_context(|| format!("writing {}", args.output.display()))?;
        println!(
            "wrote {} projects, {} voters to {}",
            problem.num_projects(),
            problem.num_voters(),
            args.output.display()
        );
    } else {
        let budget = bound_of(&args.budget, "budget")?;
        let cost = bound_of(&args.cost, "cost")?;
        let budgets = vec![budget; args.dimensions];
        let costs = vec![cost; args.dimensions];
        let problem = generator
            .generate_multi_problem(num_projects, num_voters, &budgets, &costs, utility, vote_length)
            .context("generating random instance")?;
        write_multi(&problem, &args.output).with_context(|| format!("writing {}", args.output.display()))?;
        println!(
            "wrote {} projects, {} voters, {} dimensions to {}",
            problem.num_projects(),
            problem.num_voters(),
            problem.num_dimensions(),
            args.output.display()
        );
    }
    Ok(())
}

fn bound_of(values: &[i64], name: &str) -> Result<(i64, i64)> {
    match values {
        [min, max] => Ok((*min, *max)),
        other => Err(anyhow!("--{name} expects exactly two values, got {}", other.len())),
    }
}
