//! Trip Service - vehicle, route and cost queries
//!
//! Thin use cases over an immutable catalog, shared by the CLI and GUI.

use roadcost_domain::model::{Catalog, Vehicle};
use roadcost_domain::service::{TripForm, TripSummary};
use roadcost_types::{CalcError, Result};
use serde::Serialize;

/// A vehicle together with its fuel's table price
#[derive(Debug, Clone, Serialize)]
pub struct VehicleDetails {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub default_fuel_price: Option<f64>,
}

/// Inputs of a one-shot trip calculation
#[derive(Debug, Clone, Default)]
pub struct TripRequest {
    pub vehicle: String,
    pub from: String,
    pub to: String,
    /// Overrides the table price for this calculation
    pub fuel_price: Option<String>,
}

/// Get a vehicle by name with its default fuel price
pub fn vehicle_details(catalog: &Catalog, name: &str) -> Result<VehicleDetails> {
    let vehicle = catalog
        .find_vehicle(name)
        .ok_or_else(|| CalcError::VehicleNotFound(name.to_string()))?;
    Ok(VehicleDetails {
        vehicle: vehicle.clone(),
        default_fuel_price: catalog.fuel_price(&vehicle.fuel),
    })
}

/// Fill a trip form from the request and calculate.
///
/// An unknown city pair is reported as `RouteNotFound` rather than as a
/// missing route field.
pub fn plan_trip(
    catalog: &Catalog,
    request: &TripRequest,
) -> std::result::Result<TripSummary, CalcError> {
    let mut form = TripForm::new();
    form.select_vehicle(catalog, request.vehicle.as_str());
    form.select_from(catalog, request.from.as_str());
    form.select_to(catalog, request.to.as_str());
    if let Some(err) = form.error() {
        return Err(err.clone());
    }
    if let Some(ref price) = request.fuel_price {
        form.set_price(price.as_str());
    }

    form.calculate(catalog).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadcost_domain::model::{FuelPrices, Route};
    use roadcost_types::{Error, Field};

    fn catalog() -> Catalog {
        let vehicles = vec![Vehicle {
            name: "Honda City".to_string(),
            mileage_kmpl: 18.4,
            fuel: "petrol".to_string(),
            transmission: "CVT".to_string(),
            engine: "1.5L i-VTEC".to_string(),
        }];
        let routes = vec![Route {
            city1: "Mumbai".to_string(),
            city2: "Pune".to_string(),
            distance_km: 148.0,
        }];
        let prices: FuelPrices = [("petrol".to_string(), 96.72)].into_iter().collect();
        Catalog::new(vehicles, routes, prices)
    }

    fn request(vehicle: &str, from: &str, to: &str) -> TripRequest {
        TripRequest {
            vehicle: vehicle.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            fuel_price: None,
        }
    }

    #[test]
    fn test_vehicle_details() {
        let catalog = catalog();
        let details = vehicle_details(&catalog, "Honda City").unwrap();
        assert_eq!(details.vehicle.transmission, "CVT");
        assert_eq!(details.default_fuel_price, Some(96.72));

        assert!(matches!(
            vehicle_details(&catalog, "Honda Civic"),
            Err(Error::Calc(CalcError::VehicleNotFound(_)))
        ));
    }

    #[test]
    fn test_plan_trip_with_table_price() {
        let catalog = catalog();
        let summary = plan_trip(&catalog, &request("Honda City", "Mumbai", "Pune")).unwrap();
        // 148 / 18.4 = 8.043.. -> 8.04L, 8.04 x 96.72 = 777.6288
        assert!((summary.fuel_required_l - 8.04).abs() < 1e-9);
        assert!((summary.total_cost - 777.63).abs() < 1e-9);
        assert!((summary.fuel_price - 96.72).abs() < 1e-9);
    }

    #[test]
    fn test_plan_trip_with_price_override() {
        let catalog = catalog();
        let mut req = request("Honda City", "Pune", "Mumbai");
        req.fuel_price = Some("100".to_string());
        let summary = plan_trip(&catalog, &req).unwrap();
        assert!((summary.total_cost - 804.0).abs() < 1e-9);
    }

    #[test]
    fn test_plan_trip_unknown_route() {
        let catalog = catalog();
        assert!(matches!(
            plan_trip(&catalog, &request("Honda City", "Mumbai", "Goa")),
            Err(CalcError::RouteNotFound { .. })
        ));
    }

    #[test]
    fn test_plan_trip_missing_vehicle() {
        let catalog = catalog();
        assert_eq!(
            plan_trip(&catalog, &request("", "Mumbai", "Pune")).unwrap_err(),
            CalcError::MissingField(Field::Vehicle)
        );
    }
}
