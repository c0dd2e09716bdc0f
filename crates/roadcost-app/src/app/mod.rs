//! Application Layer
//!
//! Orchestrates between the UI (CLI/GUI) and the domain/infrastructure layers.
//! - `trip_service`: vehicle, route and trip cost queries over a catalog

pub mod trip_service;

pub use trip_service::{plan_trip, vehicle_details, TripRequest, VehicleDetails};
