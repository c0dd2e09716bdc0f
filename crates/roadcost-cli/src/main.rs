//! RoadCost - fuel cost estimation for road trips
//!
//! A CLI tool that looks up vehicle mileage and route distance from
//! reference tables and estimates the fuel cost of a trip.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", output::error_message(&e));
        std::process::exit(1);
    }
}
