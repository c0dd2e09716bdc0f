//! Repository trait definitions for reference data

use roadcost_types::Error;

use crate::model::{Catalog, FuelPrices, Route, Vehicle};

/// Read-only source of the vehicle, route and fuel price tables
pub trait ReferenceDataRepository {
    /// Load all vehicles in table order
    fn find_vehicles(&self) -> Result<Vec<Vehicle>, Error>;

    /// Load all routes
    fn find_routes(&self) -> Result<Vec<Route>, Error>;

    /// Load the fuel price table
    fn find_prices(&self) -> Result<FuelPrices, Error>;

    /// Load every table into an immutable catalog
    fn load_catalog(&self) -> Result<Catalog, Error> {
        Ok(Catalog::new(
            self.find_vehicles()?,
            self.find_routes()?,
            self.find_prices()?,
        ))
    }
}
