//! Vehicle reference data type definitions

use serde::{Deserialize, Serialize};

/// A vehicle from the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Model name, unique within the table (e.g. "Maruti Swift")
    pub name: String,
    /// Kilometres per litre
    pub mileage_kmpl: f64,
    /// Fuel type tag, key into the fuel price table ("petrol", "diesel", ...)
    pub fuel: String,
    pub transmission: String,
    pub engine: String,
}

impl Vehicle {
    /// Label used by vehicle selectors
    pub fn option_label(&self) -> String {
        format!("{} - {} kmpl ({})", self.name, self.mileage_kmpl, self.fuel)
    }
}
