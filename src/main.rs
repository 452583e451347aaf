use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use knapsack::infrastructure::{self, Cli};
use knapsack::{parse_problem, KnapsackService};

fn main() -> Result<()> {
    let args = Cli::parse();
    infrastructure::init_logger(args.log_level)?;

    let config = infrastructure::resolve_config(&args)?;

    let input = fs::read_to_string(&args.input_file)
        .with_context(|| format!("could not read instance file: {}", args.input_file.display()))?;
    let problem = parse_problem(&input)
        .with_context(|| format!("could not parse instance file: {}", args.input_file.display()))?;

    let service = KnapsackService::new(config).with_cross_check(args.check);
    let solution = service.solve(&problem)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{}", solution);
    }

    Ok(())
}
