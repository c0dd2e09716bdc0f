//! Fuel price table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Unit price (per litre) keyed by fuel type tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelPrices {
    prices: BTreeMap<String, f64>,
}

impl FuelPrices {
    pub fn new(prices: BTreeMap<String, f64>) -> Self {
        Self { prices }
    }

    /// Table price for a fuel type
    pub fn get(&self, fuel: &str) -> Option<f64> {
        self.prices.get(fuel).copied()
    }

    /// Iterate in fuel type order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices.iter().map(|(fuel, price)| (fuel.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, f64)> for FuelPrices {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
