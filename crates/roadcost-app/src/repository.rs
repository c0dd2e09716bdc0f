//! Repository adapters for the reference data

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::LazyLock;

use roadcost_domain::model::Catalog;
use roadcost_domain::repository::ReferenceDataRepository;
use roadcost_infra::embedded::EmbeddedReferenceDataRepository;
use roadcost_infra::persistence::FileReferenceDataRepository;
use roadcost_types::{DataError, Error, Result};

use crate::config::Config;

/// Built-in catalog, parsed on first use
static EMBEDDED_CATALOG: LazyLock<std::result::Result<Catalog, String>> = LazyLock::new(|| {
    EmbeddedReferenceDataRepository
        .load_catalog()
        .map_err(failure_reason)
});

/// Reason text of a load failure without the outer error's prefix
fn failure_reason(err: Error) -> String {
    match err {
        Error::Data(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

/// The built-in catalog shared for the process lifetime
pub fn embedded_catalog() -> Result<&'static Catalog> {
    match &*EMBEDDED_CATALOG {
        Ok(catalog) => Ok(catalog),
        Err(reason) => Err(DataError::Embedded(reason.clone()).into()),
    }
}

/// Open file-based reference repository at a data directory
pub fn open_reference_repo_at(data_dir: PathBuf) -> FileReferenceDataRepository {
    FileReferenceDataRepository::new(data_dir)
}

/// Load the catalog selected by the configuration.
///
/// A configured data directory replaces the built-in tables entirely.
pub fn load_catalog(config: &Config) -> Result<Cow<'static, Catalog>> {
    match config.data_dir {
        Some(ref dir) => {
            let repo = open_reference_repo_at(dir.clone());
            log::debug!("Loading reference data from {}", repo.data_dir().display());
            let catalog = repo.load_catalog()?;
            Ok(Cow::Owned(catalog))
        }
        None => {
            log::debug!("Using built-in reference data");
            embedded_catalog().map(Cow::Borrowed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_failure_is_reported_once() {
        let err = Error::Data(DataError::Invalid {
            file: "cars.json".to_string(),
            reason: "entry 3: mileage must be a number".to_string(),
        });
        let reported: Error = DataError::Embedded(failure_reason(err)).into();
        let message = reported.to_string();
        assert_eq!(
            message,
            "Reference data error: Built-in tables unusable: \
             Invalid entry in cars.json: entry 3: mileage must be a number"
        );
        assert_eq!(message.matches("Reference data error").count(), 1);
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = embedded_catalog().unwrap();
        assert!(!catalog.vehicles().is_empty());
    }
}
