//! Image intake service.
//!
//! Accepts the decoded multipart parts of one upload request, validates
//! every part against the image allow-list and the per-file size cap, and
//! only then writes anything to disk. All-or-nothing: a single rejected
//! part fails the whole request, and files already written when a later
//! write fails are removed again best-effort.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::{
    config::UploadsConfig,
    error::{AppError, AppResult},
};

/// Allow-list shared by the extension and MIME checks.
static ALLOWED_TYPES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"jpeg|jpg|png|gif|webp").unwrap());

/// Subdirectory of the upload root where catalog images land.
pub const CRTS_SUBDIR: &str = "crts";

/// One decoded multipart file part.
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Clone)]
pub struct UploadService {
    upload_dir: PathBuf,
    public_prefix: String,
    max_files: usize,
    max_file_size: u64,
}

impl UploadService {
    pub fn new(upload_dir: impl Into<PathBuf>, public_prefix: &str, config: &UploadsConfig) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
            max_files: config.max_files,
            max_file_size: config.max_file_size_mib * 1024 * 1024,
        }
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    /// Request budget for the multipart body: every part at its cap, plus
    /// headroom for boundaries and part headers.
    pub fn request_body_limit(&self) -> usize {
        (self.max_files as u64 * self.max_file_size + 1024 * 1024) as usize
    }

    /// Validate and persist one request's worth of files, returning the
    /// public URL paths in submission order.
    pub async fn store(&self, files: Vec<UploadFile>) -> AppResult<Vec<String>> {
        if files.is_empty() {
            return Err(AppError::BadRequest("No files uploaded".to_string()));
        }
        if files.len() > self.max_files {
            return Err(AppError::BadRequest(format!(
                "Too many files: at most {} per request",
                self.max_files
            )));
        }
        for file in &files {
            self.validate(file)?;
        }

        let dir = self.upload_dir.join(CRTS_SUBDIR);
        tokio::fs::create_dir_all(&dir).await?;

        let mut written: Vec<PathBuf> = Vec::with_capacity(files.len());
        let mut urls = Vec::with_capacity(files.len());
        for file in &files {
            let name = unique_filename(&file.file_name);
            let path = dir.join(&name);
            if let Err(e) = tokio::fs::write(&path, &file.data).await {
                for stale in &written {
                    if let Err(cleanup) = tokio::fs::remove_file(stale).await {
                        tracing::warn!("Failed to clean up partial upload {:?}: {}", stale, cleanup);
                    }
                }
                return Err(e.into());
            }
            written.push(path);
            urls.push(format!("{}/{}/{}", self.public_prefix, CRTS_SUBDIR, name));
        }

        tracing::info!("Stored {} uploaded image(s)", urls.len());
        Ok(urls)
    }

    fn validate(&self, file: &UploadFile) -> AppResult<()> {
        if file.data.len() as u64 > self.max_file_size {
            return Err(AppError::BadRequest(format!(
                "File {} exceeds the {} MiB limit",
                file.file_name,
                self.max_file_size / (1024 * 1024)
            )));
        }
        let ext = extension_of(&file.file_name);
        let ext_ok = ext.as_deref().is_some_and(|e| ALLOWED_TYPES.is_match(e));
        let mime_ok = ALLOWED_TYPES.is_match(&file.content_type.to_lowercase());
        if !(ext_ok && mime_ok) {
            return Err(AppError::BadRequest(
                "Only image files are allowed!".to_string(),
            ));
        }
        Ok(())
    }

    /// Map a public image URL path back to its location on disk.
    /// Returns None for paths outside the upload prefix or containing
    /// traversal components.
    pub fn physical_path(&self, url_path: &str) -> Option<PathBuf> {
        let rest = url_path.strip_prefix(&self.public_prefix)?;
        let rest = rest.trim_start_matches('/');
        if rest.is_empty() || rest.split('/').any(|part| part == ".." || part.is_empty()) {
            return None;
        }
        Some(self.upload_dir.join(rest))
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// `<millis-timestamp>-<random>` plus the original extension, mirroring the
/// names already present in deployed upload directories.
fn unique_filename(original: &str) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    match extension_of(original) {
        Some(ext) => format!("{}-{}.{}", stamp, suffix, ext),
        None => format!("{}-{}", stamp, suffix),
    }
}
