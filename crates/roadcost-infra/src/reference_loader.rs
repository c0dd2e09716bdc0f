//! JSON loaders for the reference tables
//!
//! File formats:
//! - cars.json: `{"cars": [{"car", "mileage", "fuel", "transmission", "engine"}]}`
//!   (mileage may be a number or a numeric string)
//! - routes.json: `{"routes": [{"city1", "city2", "distance_km"}]}`
//! - fuel-prices.json: `{"prices": {"petrol": 96.72, ...}}`

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use roadcost_domain::model::{FuelPrices, Route, Vehicle};
use roadcost_types::{DataError, Result};
use serde::Deserialize;

pub const VEHICLES_FILE: &str = "cars.json";
pub const ROUTES_FILE: &str = "routes.json";
pub const PRICES_FILE: &str = "fuel-prices.json";

#[derive(Debug, Deserialize)]
struct VehicleTable {
    cars: Vec<VehicleEntry>,
}

#[derive(Debug, Deserialize)]
struct VehicleEntry {
    car: String,
    mileage: NumberOrText,
    fuel: String,
    transmission: String,
    engine: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RouteTable {
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct PriceTable {
    prices: BTreeMap<String, f64>,
}

fn parse_error(file: &str, e: serde_json::Error) -> DataError {
    DataError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    }
}

fn invalid(file: &str, reason: String) -> DataError {
    DataError::Invalid {
        file: file.to_string(),
        reason,
    }
}

/// Read a whole data file, tagging failures with the file name
pub fn read_data_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        DataError::Read {
            file: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Parse the vehicle table.
///
/// `file` is only used in error messages.
pub fn parse_vehicles(content: &str, file: &str) -> Result<Vec<Vehicle>> {
    let table: VehicleTable = serde_json::from_str(content).map_err(|e| parse_error(file, e))?;

    let mut seen = HashSet::new();
    let mut vehicles = Vec::with_capacity(table.cars.len());
    for entry in table.cars {
        if !seen.insert(entry.car.clone()) {
            return Err(invalid(file, format!("duplicate vehicle '{}'", entry.car)).into());
        }

        let mileage_kmpl = match entry.mileage {
            NumberOrText::Number(n) => n,
            NumberOrText::Text(ref s) => s.trim().parse::<f64>().map_err(|_| {
                invalid(
                    file,
                    format!("mileage '{}' of '{}' is not a number", s, entry.car),
                )
            })?,
        };
        if !mileage_kmpl.is_finite() || mileage_kmpl < 0.0 {
            return Err(invalid(
                file,
                format!("mileage {} of '{}' is out of range", mileage_kmpl, entry.car),
            )
            .into());
        }

        vehicles.push(Vehicle {
            name: entry.car,
            mileage_kmpl,
            fuel: entry.fuel,
            transmission: entry.transmission,
            engine: entry.engine,
        });
    }

    log::debug!("Loaded {} vehicles from {}", vehicles.len(), file);
    Ok(vehicles)
}

/// Parse the route table
pub fn parse_routes(content: &str, file: &str) -> Result<Vec<Route>> {
    let table: RouteTable = serde_json::from_str(content).map_err(|e| parse_error(file, e))?;

    if let Some(bad) = table
        .routes
        .iter()
        .find(|r| !r.distance_km.is_finite() || r.distance_km < 0.0)
    {
        return Err(invalid(
            file,
            format!(
                "distance {} between '{}' and '{}' is out of range",
                bad.distance_km, bad.city1, bad.city2
            ),
        )
        .into());
    }

    log::debug!("Loaded {} routes from {}", table.routes.len(), file);
    Ok(table.routes)
}

/// Parse the fuel price table
pub fn parse_prices(content: &str, file: &str) -> Result<FuelPrices> {
    let table: PriceTable = serde_json::from_str(content).map_err(|e| parse_error(file, e))?;

    if let Some((fuel, price)) = table
        .prices
        .iter()
        .find(|(_, p)| !p.is_finite() || **p < 0.0)
    {
        return Err(invalid(file, format!("price {} for '{}' is out of range", price, fuel)).into());
    }

    log::debug!("Loaded {} fuel prices from {}", table.prices.len(), file);
    Ok(FuelPrices::new(table.prices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadcost_types::Error;

    const CARS_JSON: &str = r#"
{
  "cars": [
    {"car": "Maruti Swift", "mileage": "22.38", "fuel": "petrol", "transmission": "Manual", "engine": "1.2L K-Series"},
    {"car": "Mahindra XUV700", "mileage": 16.5, "fuel": "diesel", "transmission": "Automatic", "engine": "2.2L mHawk"}
  ]
}
"#;

    #[test]
    fn test_parse_vehicles_number_or_string_mileage() {
        let vehicles = parse_vehicles(CARS_JSON, "cars.json").unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].name, "Maruti Swift");
        assert!((vehicles[0].mileage_kmpl - 22.38).abs() < 1e-9);
        assert!((vehicles[1].mileage_kmpl - 16.5).abs() < 1e-9);
        assert_eq!(vehicles[1].fuel, "diesel");
    }

    #[test]
    fn test_parse_vehicles_bad_mileage() {
        let json = r#"{"cars": [{"car": "X", "mileage": "fast", "fuel": "petrol", "transmission": "", "engine": ""}]}"#;
        let err = parse_vehicles(json, "cars.json").unwrap_err();
        assert!(matches!(err, Error::Data(DataError::Invalid { .. })));
        assert!(err.to_string().contains("cars.json"));
    }

    #[test]
    fn test_parse_vehicles_duplicate_name() {
        let json = r#"{"cars": [
            {"car": "X", "mileage": 10, "fuel": "petrol", "transmission": "", "engine": ""},
            {"car": "X", "mileage": 12, "fuel": "petrol", "transmission": "", "engine": ""}
        ]}"#;
        assert!(matches!(
            parse_vehicles(json, "cars.json"),
            Err(Error::Data(DataError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_parse_vehicles_malformed_json() {
        assert!(matches!(
            parse_vehicles("{\"cars\": [", "cars.json"),
            Err(Error::Data(DataError::Parse { .. }))
        ));
    }

    #[test]
    fn test_parse_routes() {
        let json = r#"{"routes": [{"city1": "Delhi", "city2": "Jaipur", "distance_km": 281}]}"#;
        let routes = parse_routes(json, "routes.json").unwrap();
        assert_eq!(routes.len(), 1);
        assert!(routes[0].connects("Jaipur", "Delhi"));
        assert!((routes[0].distance_km - 281.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_routes_negative_distance() {
        let json = r#"{"routes": [{"city1": "A", "city2": "B", "distance_km": -5}]}"#;
        assert!(parse_routes(json, "routes.json").is_err());
    }

    #[test]
    fn test_parse_prices() {
        let json = r#"{"prices": {"petrol": 96.72, "diesel": 89.62}}"#;
        let prices = parse_prices(json, "fuel-prices.json").unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices.get("petrol"), Some(96.72));
        assert_eq!(prices.get("cng"), None);
    }

    #[test]
    fn test_parse_prices_negative() {
        let json = r#"{"prices": {"petrol": -1}}"#;
        assert!(parse_prices(json, "fuel-prices.json").is_err());
    }
}
