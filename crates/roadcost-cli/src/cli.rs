//! CLI definition using clap

use clap::{Parser, Subcommand};
use roadcost_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roadcost")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Estimate the fuel cost of a road trip")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory with cars.json, routes.json and fuel-prices.json (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all vehicles
    Vehicles,

    /// Show one vehicle and its default fuel price
    Vehicle {
        /// Vehicle name (e.g., "Honda City")
        name: String,
    },

    /// List all cities that appear in the route table
    Cities,

    /// Show the distance between two cities
    Route {
        /// Starting city
        from: String,

        /// Destination city
        to: String,
    },

    /// Show the fuel price table
    Prices,

    /// Calculate fuel required and total cost for a trip
    Calculate {
        /// Vehicle name
        #[arg(long)]
        vehicle: String,

        /// Starting city
        #[arg(long)]
        from: String,

        /// Destination city
        #[arg(long)]
        to: String,

        /// Fuel price per litre. Uses the table price for the vehicle's fuel if not specified.
        #[arg(long, short = 'p')]
        price: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set reference data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Use the built-in reference data again
        #[arg(long)]
        clear_data_dir: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency symbol
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
