//! Catalog management service

use crate::{
    error::AppResult,
    models::{
        units::{self, Quantity},
        Crt, Manufacturer,
    },
    repository::Repository,
};

use super::uploads::UploadService;

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    uploads: UploadService,
}

impl CatalogService {
    pub fn new(repository: Repository, uploads: UploadService) -> Self {
        Self { repository, uploads }
    }

    /// The whole catalog, in file order.
    pub async fn list(&self) -> AppResult<Vec<Crt>> {
        self.repository.crts.list().await
    }

    /// One entry by id.
    pub async fn get(&self, id: i64) -> AppResult<Crt> {
        self.repository.crts.get_by_id(id).await
    }

    /// Create a new entry. A missing id is assigned by the store; a missing
    /// side of any dual-unit measurement is derived from the other.
    pub async fn create(&self, mut crt: Crt) -> AppResult<Crt> {
        fill_measurements(&mut crt);
        let created = self.repository.crts.append(crt).await?;
        tracing::info!(id = created.id, "Catalog entry created");
        Ok(created)
    }

    /// Replace an entry wholesale. The admin form always sends the full
    /// record, never a partial patch.
    pub async fn update(&self, id: i64, mut crt: Crt) -> AppResult<Crt> {
        fill_measurements(&mut crt);
        let updated = self.repository.crts.replace_by_id(id, crt).await?;
        tracing::info!(id, "Catalog entry updated");
        Ok(updated)
    }

    /// Delete an entry, removing its uploaded images from disk best-effort.
    /// Deleting an id that is not present still succeeds.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if let Some(removed) = self.repository.crts.remove_by_id(id).await? {
            tracing::info!(id, "Catalog entry deleted");
            for image in &removed.images {
                self.delete_image_file(image).await;
            }
        }
        Ok(())
    }

    /// Attach already-stored image paths to an entry.
    pub async fn attach_images(&self, id: i64, paths: Vec<String>) -> AppResult<Vec<String>> {
        self.repository.crts.append_images(id, &paths).await?;
        Ok(paths)
    }

    /// Detach one image path from an entry and delete the file best-effort.
    /// The metadata change commits even when the file cannot be removed.
    pub async fn remove_image(&self, id: i64, path: &str) -> AppResult<()> {
        self.repository.crts.remove_image(id, path).await?;
        self.delete_image_file(path).await;
        Ok(())
    }

    async fn delete_image_file(&self, url_path: &str) {
        let Some(disk_path) = self.uploads.physical_path(url_path) else {
            tracing::warn!("Image path {} is outside the upload prefix, skipping", url_path);
            return;
        };
        if let Err(e) = tokio::fs::remove_file(&disk_path).await {
            tracing::warn!("Failed to delete image file {:?}: {}", disk_path, e);
        }
    }

    /// All manufacturers, in file order.
    pub async fn list_manufacturers(&self) -> AppResult<Vec<Manufacturer>> {
        self.repository.manufacturers.list().await
    }

    /// One manufacturer by URL slug.
    pub async fn get_manufacturer(&self, slug: &str) -> AppResult<Manufacturer> {
        self.repository.manufacturers.find_by_slug(slug).await
    }
}

fn fill_measurements(crt: &mut Crt) {
    units::fill_pair(&mut crt.screen_size, Quantity::Length);
    units::fill_pair(&mut crt.tube_size, Quantity::Length);
    units::fill_pair(&mut crt.weight, Quantity::Weight);
}
