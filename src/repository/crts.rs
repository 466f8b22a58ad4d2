//! File-backed catalog store.
//!
//! The catalog is one JSON array in one file; every mutation is a
//! read-modify-write of the whole array. Mutations are serialized behind a
//! single-writer mutex and the rewrite goes through a temp file renamed over
//! the original, so concurrent admin submissions cannot interleave and a
//! crash mid-write cannot tear the file. Reads skip the lock: the rename is
//! atomic, so a reader sees either the old array or the new one.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::Crt,
};

#[derive(Clone)]
pub struct CrtsRepository {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl CrtsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read and parse the whole catalog file.
    pub async fn list(&self) -> AppResult<Vec<Crt>> {
        read_array(&self.path).await
    }

    /// Find one entry by id.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Crt> {
        let crts = self.list().await?;
        crts.into_iter()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| AppError::NotFound("CRT not found".to_string()))
    }

    /// Append a new entry.
    ///
    /// When the record carries no id, the next id (max existing + 1) is
    /// assigned inside the write lock. A client-supplied id is kept, but a
    /// duplicate is rejected so update/delete-by-id stay unambiguous.
    pub async fn append(&self, mut crt: Crt) -> AppResult<Crt> {
        let _guard = self.write_lock.lock().await;
        let mut crts = read_array(&self.path).await?;

        match crt.id {
            Some(id) => {
                if crts.iter().any(|c| c.id == Some(id)) {
                    return Err(AppError::Conflict(format!(
                        "A CRT with id {} already exists",
                        id
                    )));
                }
            }
            None => {
                let next = crts.iter().filter_map(|c| c.id).max().unwrap_or(0) + 1;
                crt.id = Some(next);
            }
        }

        crts.push(crt.clone());
        write_array(&self.path, &crts).await?;
        Ok(crt)
    }

    /// Overwrite the entry with the given id wholesale.
    ///
    /// The path id is forced onto the stored record, so a body carrying a
    /// different id cannot silently re-key the entry.
    pub async fn replace_by_id(&self, id: i64, mut crt: Crt) -> AppResult<Crt> {
        let _guard = self.write_lock.lock().await;
        let mut crts = read_array(&self.path).await?;

        let slot = crts
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| AppError::NotFound("CRT not found".to_string()))?;

        crt.id = Some(id);
        *slot = crt.clone();
        write_array(&self.path, &crts).await?;
        Ok(crt)
    }

    /// Remove the entry with the given id. Returns whether anything was
    /// removed; an absent id is not an error (the delete is idempotent).
    pub async fn remove_by_id(&self, id: i64) -> AppResult<Option<Crt>> {
        let _guard = self.write_lock.lock().await;
        let mut crts = read_array(&self.path).await?;

        let removed = match crts.iter().position(|c| c.id == Some(id)) {
            Some(index) => Some(crts.remove(index)),
            None => None,
        };

        if removed.is_some() {
            write_array(&self.path, &crts).await?;
        }
        Ok(removed)
    }

    /// Append image paths to the entry's `images` list.
    pub async fn append_images(&self, id: i64, paths: &[String]) -> AppResult<Crt> {
        let _guard = self.write_lock.lock().await;
        let mut crts = read_array(&self.path).await?;

        let crt = crts
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| AppError::NotFound("CRT not found".to_string()))?;

        crt.images.extend_from_slice(paths);
        let updated = crt.clone();
        write_array(&self.path, &crts).await?;
        Ok(updated)
    }

    /// Remove exact string matches of `path` from the entry's `images`
    /// list. Removing a path that is not present still succeeds.
    pub async fn remove_image(&self, id: i64, path: &str) -> AppResult<Crt> {
        let _guard = self.write_lock.lock().await;
        let mut crts = read_array(&self.path).await?;

        let crt = crts
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| AppError::NotFound("CRT not found".to_string()))?;

        crt.images.retain(|img| img != path);
        let updated = crt.clone();
        write_array(&self.path, &crts).await?;
        Ok(updated)
    }
}

async fn read_array(path: &Path) -> AppResult<Vec<Crt>> {
    let data = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&data)?)
}

/// Full rewrite through a temp file in the same directory, renamed over
/// the original once the write completes.
async fn write_array(path: &Path, crts: &[Crt]) -> AppResult<()> {
    let data = serde_json::to_vec_pretty(crts)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &data).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
