//! Output formatting module

use roadcost_app::app::VehicleDetails;
use roadcost_domain::model::{FuelPrices, Vehicle};
use roadcost_domain::service::TripSummary;
use roadcost_types::{CalcError, Error, OutputFormat, Result};
use serde::Serialize;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

/// Error line for stderr; a missing field is named after the message
pub fn error_message(err: &Error) -> String {
    match err {
        Error::Calc(CalcError::MissingField(field)) => format!("{} (missing {})", err, field),
        _ => err.to_string(),
    }
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(vehicles);
    }

    println!(
        "{:<28} {:>8} {:<10} {:<12} Engine",
        "Vehicle", "kmpl", "Fuel", "Transmission"
    );
    println!("{}", "-".repeat(78));
    for v in vehicles {
        println!(
            "{:<28} {:>8} {:<10} {:<12} {}",
            v.name, v.mileage_kmpl, v.fuel, v.transmission, v.engine
        );
    }
    println!();
    println!("{} vehicles", vehicles.len());
    Ok(())
}

pub fn output_vehicle(
    output_format: OutputFormat,
    details: &VehicleDetails,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(details);
    }

    let v = &details.vehicle;
    println!("\nVehicle Details");
    println!("===============");
    println!("Vehicle:         {}", v.name);
    println!("Fuel type:       {}", v.fuel);
    println!("Mileage:         {} kmpl", v.mileage_kmpl);
    println!("Transmission:    {}", v.transmission);
    println!("Engine:          {}", v.engine);
    match details.default_fuel_price {
        Some(price) => println!("Fuel price:      {}{}/L", currency, price),
        None => println!("Fuel price:      (not in price table)"),
    }
    Ok(())
}

pub fn output_cities(output_format: OutputFormat, cities: &[&str]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(cities);
    }

    for city in cities {
        println!("{}", city);
    }
    Ok(())
}

#[derive(Serialize)]
struct RouteOutput<'a> {
    from: &'a str,
    to: &'a str,
    distance_km: f64,
}

pub fn output_route(
    output_format: OutputFormat,
    from: &str,
    to: &str,
    distance_km: f64,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&RouteOutput {
            from,
            to,
            distance_km,
        });
    }

    println!("{} -> {}: {} km", from, to, distance_km);
    Ok(())
}

pub fn output_prices(output_format: OutputFormat, prices: &FuelPrices, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(prices);
    }

    println!("{:<12} {:>10}", "Fuel", "Price/L");
    println!("{}", "-".repeat(23));
    for (fuel, price) in prices.iter() {
        println!("{:<12} {:>10}", fuel, format!("{}{:.2}", currency, price));
    }
    Ok(())
}

fn format_trip(summary: &TripSummary, currency: &str) -> String {
    [
        "\nTrip Summary".to_string(),
        "============".to_string(),
        format!("Vehicle:         {}", summary.vehicle),
        format!("Route:           {} -> {}", summary.from, summary.to),
        format!("Distance:        {} km", summary.distance_km),
        format!("Vehicle mileage: {} kmpl", summary.mileage_kmpl),
        format!("Fuel price:      {}{}/L", currency, summary.fuel_price),
        "-------------------------".to_string(),
        format!("Fuel required:   {:.2} litres", summary.fuel_required_l),
        format!("Total cost:      {}{:.2}", currency, summary.total_cost),
    ]
    .join("\n")
}

pub fn output_trip(output_format: OutputFormat, summary: &TripSummary, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(summary);
    }

    println!("{}", format_trip(summary, currency));
    Ok(())
}
