//! Lookups over the reference tables

use std::collections::BTreeSet;

use crate::model::{FuelPrices, Route, Vehicle};

pub fn find_vehicle<'a>(vehicles: &'a [Vehicle], name: &str) -> Option<&'a Vehicle> {
    vehicles.iter().find(|v| v.name == name)
}

/// First stored route joining the two cities, whichever order it was stored in
pub fn find_route<'a>(routes: &'a [Route], city_a: &str, city_b: &str) -> Option<&'a Route> {
    routes.iter().find(|r| r.connects(city_a, city_b))
}

pub fn list_cities(routes: &[Route]) -> BTreeSet<&str> {
    routes
        .iter()
        .flat_map(|r| [r.city1.as_str(), r.city2.as_str()])
        .collect()
}

pub fn default_price_for(
    vehicles: &[Vehicle],
    prices: &FuelPrices,
    vehicle_name: &str,
) -> Option<f64> {
    let vehicle = find_vehicle(vehicles, vehicle_name)?;
    let price = prices.get(&vehicle.fuel);
    if price.is_none() {
        log::warn!(
            "No fuel price for '{}' (vehicle '{}')",
            vehicle.fuel,
            vehicle.name
        );
    }
    price
}
