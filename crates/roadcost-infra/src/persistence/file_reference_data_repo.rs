//! File-based implementation of ReferenceDataRepository

use std::path::{Path, PathBuf};

use roadcost_domain::model::{FuelPrices, Route, Vehicle};
use roadcost_domain::repository::ReferenceDataRepository;
use roadcost_types::Error;

use crate::reference_loader::{
    parse_prices, parse_routes, parse_vehicles, read_data_file, PRICES_FILE, ROUTES_FILE,
    VEHICLES_FILE,
};

/// Reads cars.json, routes.json and fuel-prices.json from a directory
pub struct FileReferenceDataRepository {
    data_dir: PathBuf,
}

impl FileReferenceDataRepository {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load<T>(
        &self,
        file_name: &str,
        parse: fn(&str, &str) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let path = self.data_dir.join(file_name);
        let content = read_data_file(&path)?;
        parse(&content, &path.display().to_string())
    }
}

impl ReferenceDataRepository for FileReferenceDataRepository {
    fn find_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        self.load(VEHICLES_FILE, parse_vehicles)
    }

    fn find_routes(&self) -> Result<Vec<Route>, Error> {
        self.load(ROUTES_FILE, parse_routes)
    }

    fn find_prices(&self) -> Result<FuelPrices, Error> {
        self.load(PRICES_FILE, parse_prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadcost_types::DataError;
    use std::fs;
    use tempfile::tempdir;

    fn write_tables(dir: &Path) {
        fs::write(
            dir.join(VEHICLES_FILE),
            r#"{"cars": [{"car": "Test Car", "mileage": "20", "fuel": "petrol", "transmission": "Manual", "engine": "1.0L"}]}"#,
        )
        .unwrap();
        fs::write(
            dir.join(ROUTES_FILE),
            r#"{"routes": [{"city1": "A", "city2": "B", "distance_km": 100}, {"city1": "B", "city2": "C", "distance_km": 50}]}"#,
        )
        .unwrap();
        fs::write(dir.join(PRICES_FILE), r#"{"prices": {"petrol": 100}}"#).unwrap();
    }

    #[test]
    fn test_load_catalog_from_dir() {
        let dir = tempdir().unwrap();
        write_tables(dir.path());

        let repo = FileReferenceDataRepository::new(dir.path().to_path_buf());
        assert_eq!(repo.data_dir(), dir.path());
        let catalog = repo.load_catalog().unwrap();

        assert_eq!(catalog.vehicles().len(), 1);
        assert_eq!(catalog.list_cities().len(), 3);
        assert_eq!(catalog.default_price_for("Test Car"), Some(100.0));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let repo = FileReferenceDataRepository::new(dir.path().to_path_buf());

        let err = repo.find_routes().unwrap_err();
        assert!(matches!(err, Error::Data(DataError::Read { .. })));
        assert!(err.to_string().contains(ROUTES_FILE));
    }
}
