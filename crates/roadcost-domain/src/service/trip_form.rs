//! Trip form state
//!
//! Holds the current selections of the calculator form and re-derives the
//! dependent values whenever one of them changes:
//! - vehicle -> vehicle details and the default fuel price
//! - from/to city -> route distance, or a "route not found" error
//!
//! Every setter calls the derivation directly; there is no subscription graph.

use roadcost_types::{CalcError, Field};
use serde::{Deserialize, Serialize};

use crate::model::{Catalog, Route, Vehicle};
use crate::service::cost_calculator::compute_cost;

/// Result of a successful calculation, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub vehicle: String,
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub mileage_kmpl: f64,
    pub fuel_price: f64,
    pub fuel_required_l: f64,
    pub total_cost: f64,
}

/// Find the route between two cities in either order
pub fn route_between<'c>(
    catalog: &'c Catalog,
    from: &str,
    to: &str,
) -> Result<&'c Route, CalcError> {
    catalog
        .find_route(from, to)
        .ok_or_else(|| CalcError::RouteNotFound {
            from: from.to_string(),
            to: to.to_string(),
        })
}

/// Parse the free-text fuel price field
fn parse_price(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidInput(format!("fuel price '{}' is not a number", text)))
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Calculator form: selections plus the values derived from them
#[derive(Debug, Clone, Default)]
pub struct TripForm {
    vehicle: Option<String>,
    from: Option<String>,
    to: Option<String>,
    price: String,
    distance_km: Option<f64>,
    error: Option<CalcError>,
    result: Option<TripSummary>,
}

impl TripForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a vehicle by name; an empty name clears the selection.
    ///
    /// A known vehicle replaces the price field with its fuel's table price.
    pub fn select_vehicle(&mut self, catalog: &Catalog, name: impl Into<String>) {
        self.vehicle = non_empty(name);
        if let Some(ref name) = self.vehicle {
            if let Some(price) = catalog.default_price_for(name) {
                self.price = price.to_string();
            }
        }
    }

    pub fn select_from(&mut self, catalog: &Catalog, city: impl Into<String>) {
        self.from = non_empty(city);
        self.refresh_route(catalog);
    }

    pub fn select_to(&mut self, catalog: &Catalog, city: impl Into<String>) {
        self.to = non_empty(city);
        self.refresh_route(catalog);
    }

    /// Override the fuel price for this calculation only
    pub fn set_price(&mut self, text: impl Into<String>) {
        self.price = text.into();
    }

    fn refresh_route(&mut self, catalog: &Catalog) {
        let (Some(from), Some(to)) = (self.from.as_deref(), self.to.as_deref()) else {
            self.distance_km = None;
            return;
        };
        match route_between(catalog, from, to).map(|r| r.distance_km) {
            Ok(distance) => {
                self.distance_km = Some(distance);
                self.error = None;
            }
            Err(e) => {
                log::debug!("{} ({} -> {})", e, from, to);
                self.distance_km = None;
                self.error = Some(e);
            }
        }
    }

    /// Run the calculation with the current selections.
    ///
    /// On success the summary replaces any previous result and the error is
    /// cleared; on failure the previous result is discarded.
    pub fn calculate(&mut self, catalog: &Catalog) -> Result<&TripSummary, CalcError> {
        match self.evaluate(catalog) {
            Ok(summary) => {
                self.error = None;
                Ok(self.result.insert(summary))
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn evaluate(&self, catalog: &Catalog) -> Result<TripSummary, CalcError> {
        let name = self
            .vehicle
            .as_deref()
            .ok_or(CalcError::MissingField(Field::Vehicle))?;
        let distance_km = self
            .distance_km
            .ok_or(CalcError::MissingField(Field::Route))?;
        let price_text = self.price.trim();
        if price_text.is_empty() {
            return Err(CalcError::MissingField(Field::FuelPrice));
        }

        let vehicle = catalog
            .find_vehicle(name)
            .ok_or_else(|| CalcError::VehicleNotFound(name.to_string()))?;
        let fuel_price = parse_price(price_text)?;
        let cost = compute_cost(distance_km, vehicle.mileage_kmpl, fuel_price)?;

        Ok(TripSummary {
            vehicle: vehicle.name.clone(),
            from: self.from.clone().unwrap_or_default(),
            to: self.to.clone().unwrap_or_default(),
            distance_km,
            mileage_kmpl: vehicle.mileage_kmpl,
            fuel_price,
            fuel_required_l: cost.fuel_volume_l,
            total_cost: cost.total_cost,
        })
    }

    /// Details of the selected vehicle, if it exists in the catalog
    pub fn vehicle_details<'c>(&self, catalog: &'c Catalog) -> Option<&'c Vehicle> {
        self.vehicle
            .as_deref()
            .and_then(|name| catalog.find_vehicle(name))
    }

    pub fn vehicle(&self) -> Option<&str> {
        self.vehicle.as_deref()
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Error currently shown by the form
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Result currently shown by the form
    pub fn result(&self) -> Option<&TripSummary> {
        self.result.as_ref()
    }
}
