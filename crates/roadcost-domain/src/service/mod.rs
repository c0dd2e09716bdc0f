//! Domain services

pub mod cost_calculator;
pub mod lookup;
pub mod trip_form;

pub use cost_calculator::{compute_cost, round2, FuelCost};
pub use trip_form::{route_between, TripForm, TripSummary};
