//! Error types for roadcost

use thiserror::Error;

use crate::Field;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Reference data (vehicles, routes, fuel prices) errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {file}: {reason}")]
    Read { file: String, reason: String },

    #[error("Failed to parse {file}: {reason}")]
    Parse { file: String, reason: String },

    #[error("Invalid entry in {file}: {reason}")]
    Invalid { file: String, reason: String },

    #[error("Built-in tables unusable: {0}")]
    Embedded(String),
}

/// Recoverable errors of a single trip calculation.
///
/// The display text is what the form shows to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Please fill in all fields")]
    MissingField(Field),

    #[error("Route not found in database")]
    RouteNotFound { from: String, to: String },

    #[error("Invalid car selection")]
    VehicleNotFound(String),

    #[error("Calculation error. Please check inputs ({0})")]
    InvalidInput(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reference data error: {0}")]
    Data(#[from] DataError),

    #[error("{0}")]
    Calc(#[from] CalcError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_messages() {
        assert_eq!(
            CalcError::MissingField(Field::FuelPrice).to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            CalcError::RouteNotFound {
                from: "Delhi".to_string(),
                to: "Goa".to_string(),
            }
            .to_string(),
            "Route not found in database"
        );
        assert_eq!(
            CalcError::VehicleNotFound("Tardis".to_string()).to_string(),
            "Invalid car selection"
        );
    }

    #[test]
    fn test_calc_error_converts_to_error() {
        let err: Error = CalcError::InvalidInput("mileage must be positive".to_string()).into();
        assert!(err.to_string().contains("mileage must be positive"));
    }
}
