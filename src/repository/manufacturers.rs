//! Manufacturers repository. Static reference data, never written.

use std::path::{Path, PathBuf};

use crate::{
    error::{AppError, AppResult},
    models::{manufacturer::slugify, Manufacturer},
};

#[derive(Clone)]
pub struct ManufacturersRepository {
    path: PathBuf,
}

impl ManufacturersRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the manufacturers file.
    pub async fn list(&self) -> AppResult<Vec<Manufacturer>> {
        read_array(&self.path).await
    }

    /// Look a manufacturer up by its URL slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Manufacturer> {
        let wanted = slugify(slug);
        self.list()
            .await?
            .into_iter()
            .find(|m| m.slug() == wanted)
            .ok_or_else(|| AppError::NotFound("Manufacturer not found".to_string()))
    }
}

async fn read_array(path: &Path) -> AppResult<Vec<Manufacturer>> {
    let data = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&data)?)
}
