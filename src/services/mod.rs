//! Business logic services

pub mod auth;
pub mod catalog;
pub mod uploads;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub uploads: uploads::UploadService,
    pub auth: auth::AuthService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        let uploads = uploads::UploadService::new(
            &config.storage.upload_dir,
            &config.storage.public_upload_prefix,
            &config.uploads,
        );
        Self {
            catalog: catalog::CatalogService::new(repository, uploads.clone()),
            uploads,
            auth: auth::AuthService::new(config.auth.clone()),
        }
    }
}
