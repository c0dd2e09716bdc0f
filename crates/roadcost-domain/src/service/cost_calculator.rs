//! Fuel cost calculation
//!
//! # Formula
//! fuel_volume = round2(distance / mileage)
//! total_cost  = round2(fuel_volume x unit_price)
//!
//! The rounded volume feeds the cost, so the total is exactly what a user
//! gets by multiplying the displayed litres by the displayed price.

use roadcost_types::CalcError;
use serde::{Deserialize, Serialize};

/// Fuel needed for a trip and what it costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelCost {
    /// Litres, rounded to two decimals
    pub fuel_volume_l: f64,
    /// Currency units, rounded to two decimals
    pub total_cost: f64,
}

/// Round to two decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute fuel volume and cost for a trip.
///
/// # Arguments
/// * `distance_km` - Trip distance, >= 0
/// * `mileage_kmpl` - Kilometres per litre, > 0
/// * `unit_price` - Price per litre, >= 0
///
/// # Errors
/// `CalcError::InvalidInput` if any argument is out of range or not finite,
/// or if the volume or cost overflows.
pub fn compute_cost(
    distance_km: f64,
    mileage_kmpl: f64,
    unit_price: f64,
) -> Result<FuelCost, CalcError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "distance must be a non-negative number, got {}",
            distance_km
        )));
    }
    if !mileage_kmpl.is_finite() || mileage_kmpl <= 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "mileage must be greater than zero, got {}",
            mileage_kmpl
        )));
    }
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "fuel price must be a non-negative number, got {}",
            unit_price
        )));
    }

    let fuel_volume_l = round2(distance_km / mileage_kmpl);
    let total_cost = round2(fuel_volume_l * unit_price);
    if !fuel_volume_l.is_finite() || !total_cost.is_finite() {
        return Err(CalcError::InvalidInput(format!(
            "result out of range for distance {}, mileage {}, price {}",
            distance_km, mileage_kmpl, unit_price
        )));
    }

    Ok(FuelCost {
        fuel_volume_l,
        total_cost,
    })
}
