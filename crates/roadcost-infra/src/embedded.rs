//! Reference tables compiled into the binary

use roadcost_domain::model::{FuelPrices, Route, Vehicle};
use roadcost_domain::repository::ReferenceDataRepository;
use roadcost_types::Error;

use crate::reference_loader::{
    parse_prices, parse_routes, parse_vehicles, PRICES_FILE, ROUTES_FILE, VEHICLES_FILE,
};

const VEHICLES_JSON: &str = include_str!("../../../data/cars.json");
const ROUTES_JSON: &str = include_str!("../../../data/routes.json");
const PRICES_JSON: &str = include_str!("../../../data/fuel-prices.json");

/// Repository over the built-in data set
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedReferenceDataRepository;

impl ReferenceDataRepository for EmbeddedReferenceDataRepository {
    fn find_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        parse_vehicles(VEHICLES_JSON, VEHICLES_FILE)
    }

    fn find_routes(&self) -> Result<Vec<Route>, Error> {
        parse_routes(ROUTES_JSON, ROUTES_FILE)
    }

    fn find_prices(&self) -> Result<FuelPrices, Error> {
        parse_prices(PRICES_JSON, PRICES_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let catalog = EmbeddedReferenceDataRepository.load_catalog().unwrap();
        assert!(!catalog.vehicles().is_empty());
        assert!(!catalog.routes().is_empty());
        assert!(!catalog.prices().is_empty());
    }

    #[test]
    fn test_embedded_vehicles_have_prices_and_mileage() {
        let catalog = EmbeddedReferenceDataRepository.load_catalog().unwrap();
        for vehicle in catalog.vehicles() {
            assert!(
                catalog.fuel_price(&vehicle.fuel).is_some(),
                "no price for fuel '{}' of {}",
                vehicle.fuel,
                vehicle.name
            );
            assert!(vehicle.mileage_kmpl > 0.0, "{} has no mileage", vehicle.name);
        }
    }

    #[test]
    fn test_embedded_routes_are_symmetric() {
        let catalog = EmbeddedReferenceDataRepository.load_catalog().unwrap();
        for route in catalog.routes() {
            let back = catalog.find_route(&route.city2, &route.city1).unwrap();
            assert!((back.distance_km - route.distance_km).abs() < f64::EPSILON);
        }
    }
}
