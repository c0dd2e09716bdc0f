//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_reference_data_repo;

pub use file_reference_data_repo::FileReferenceDataRepository;
