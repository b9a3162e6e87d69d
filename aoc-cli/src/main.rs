//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use env_logger::Env;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every selected part produced an answer
fn run(args: Args) -> Result<bool, error::CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    executor.check_explicit_selection(&work_items)?;
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(true);
    }
    log::info!("running {} solver(s)", work_items.len());

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    Ok(results.iter().all(|r| r.answer.is_ok()))
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
