//! Repository layer for flat-file persistence

pub mod crts;
pub mod manufacturers;

use crate::config::StorageConfig;

/// Main repository struct holding the file-backed stores
#[derive(Clone)]
pub struct Repository {
    pub crts: crts::CrtsRepository,
    pub manufacturers: manufacturers::ManufacturersRepository,
}

impl Repository {
    /// Create a new repository over the configured data files
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            crts: crts::CrtsRepository::new(&storage.crts_file),
            manufacturers: manufacturers::ManufacturersRepository::new(
                &storage.manufacturers_file,
            ),
        }
    }
}
