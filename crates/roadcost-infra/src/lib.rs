//! Infrastructure layer - reference data loaders and repositories

pub mod embedded;
pub mod persistence;
pub mod reference_loader;
