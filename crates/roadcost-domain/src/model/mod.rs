//! Domain model types

pub mod catalog;
pub mod fuel_price;
pub mod route;
pub mod vehicle;

pub use catalog::Catalog;
pub use fuel_price::FuelPrices;
pub use route::Route;
pub use vehicle::Vehicle;
