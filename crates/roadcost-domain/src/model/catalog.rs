//! In-memory reference catalog
//!
//! Holds the vehicle, route and fuel price tables for the process lifetime.
//! There is no mutation API; a catalog is built once from a repository.

use std::collections::BTreeSet;

use crate::model::{FuelPrices, Route, Vehicle};
use crate::service::lookup;

/// Immutable reference tables
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
    routes: Vec<Route>,
    prices: FuelPrices,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>, routes: Vec<Route>, prices: FuelPrices) -> Self {
        Self {
            vehicles,
            routes,
            prices,
        }
    }

    /// Vehicles in table order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn prices(&self) -> &FuelPrices {
        &self.prices
    }

    /// Look up a vehicle by exact name
    pub fn find_vehicle(&self, name: &str) -> Option<&Vehicle> {
        lookup::find_vehicle(&self.vehicles, name)
    }

    /// Look up a route by unordered city pair
    pub fn find_route(&self, city_a: &str, city_b: &str) -> Option<&Route> {
        lookup::find_route(&self.routes, city_a, city_b)
    }

    /// All cities appearing in the route table, deduplicated and sorted
    pub fn list_cities(&self) -> BTreeSet<&str> {
        lookup::list_cities(&self.routes)
    }

    pub fn fuel_price(&self, fuel: &str) -> Option<f64> {
        self.prices.get(fuel)
    }

    /// Table price for the named vehicle's fuel type
    pub fn default_price_for(&self, vehicle_name: &str) -> Option<f64> {
        lookup::default_price_for(&self.vehicles, &self.prices, vehicle_name)
    }
}
