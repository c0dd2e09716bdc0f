//! Command handlers

use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use crate::output::{
    output_cities, output_prices, output_route, output_trip, output_vehicle, output_vehicles,
};
use roadcost_app::app::{plan_trip, vehicle_details, TripRequest};
use roadcost_app::config::Config;
use roadcost_app::repository::load_catalog;
use roadcost_domain::model::Catalog;
use roadcost_domain::service::route_between;
use roadcost_types::{OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    if let Commands::Config {
        show,
        set_data_dir,
        clear_data_dir,
        set_output,
        set_currency,
        reset,
    } = cli.command
    {
        return cmd_config(
            show,
            set_data_dir,
            clear_data_dir,
            set_output,
            set_currency,
            reset,
        );
    }

    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::Vehicles => cmd_vehicles(&catalog, output_format),
        Commands::Vehicle { name } => cmd_vehicle(&catalog, &config, &name, output_format),
        Commands::Cities => cmd_cities(&catalog, output_format),
        Commands::Route { from, to } => cmd_route(&catalog, &from, &to, output_format),
        Commands::Prices => cmd_prices(&catalog, &config, output_format),
        Commands::Calculate {
            vehicle,
            from,
            to,
            price,
        } => {
            let request = TripRequest {
                vehicle,
                from,
                to,
                fuel_price: price,
            };
            cmd_calculate(&catalog, &config, &request, output_format)
        }
        Commands::Config { .. } => Ok(()),
    }
}

fn cmd_vehicles(catalog: &Catalog, output_format: OutputFormat) -> Result<()> {
    output_vehicles(output_format, catalog.vehicles())
}

fn cmd_vehicle(
    catalog: &Catalog,
    config: &Config,
    name: &str,
    output_format: OutputFormat,
) -> Result<()> {
    let details = vehicle_details(catalog, name)?;
    output_vehicle(output_format, &details, &config.currency)
}

fn cmd_cities(catalog: &Catalog, output_format: OutputFormat) -> Result<()> {
    let cities: Vec<&str> = catalog.list_cities().into_iter().collect();
    output_cities(output_format, &cities)
}

fn cmd_route(catalog: &Catalog, from: &str, to: &str, output_format: OutputFormat) -> Result<()> {
    let route = route_between(catalog, from, to)?;
    output_route(output_format, from, to, route.distance_km)
}

fn cmd_prices(catalog: &Catalog, config: &Config, output_format: OutputFormat) -> Result<()> {
    output_prices(output_format, catalog.prices(), &config.currency)
}

fn cmd_calculate(
    catalog: &Catalog,
    config: &Config,
    request: &TripRequest,
    output_format: OutputFormat,
) -> Result<()> {
    let summary = plan_trip(catalog, request)?;
    log::debug!(
        "{} -> {} with {}: {:.2} L",
        summary.from,
        summary.to,
        summary.vehicle,
        summary.fuel_required_l
    );
    output_trip(output_format, &summary, &config.currency)
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    clear_data_dir: bool,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = apply_config_changes(
        &mut config,
        set_data_dir,
        clear_data_dir,
        set_output,
        set_currency,
    );

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

/// Apply the requested settings; returns whether anything changed.
///
/// `clear_data_dir` wins over `set_data_dir` when both are given.
fn apply_config_changes(
    config: &mut Config,
    set_data_dir: Option<PathBuf>,
    clear_data_dir: bool,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
) -> bool {
    let mut modified = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if clear_data_dir {
        config.data_dir = None;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency = currency;
        modified = true;
    }

    modified
}
