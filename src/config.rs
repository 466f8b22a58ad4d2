//! Configuration management for the CRT database server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file holding the array of catalog entries
    pub crts_file: String,
    /// JSON file holding the array of manufacturers (never written)
    pub manufacturers_file: String,
    /// Directory uploaded images are written to
    pub upload_dir: String,
    /// Public URL prefix the upload directory is served under
    pub public_upload_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    /// Maximum number of files accepted per upload request
    pub max_files: usize,
    /// Maximum size of a single file, in MiB
    pub max_file_size_mib: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Shared admin password for the catalog form
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub uploads: UploadsConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix CRTDB_)
            .add_source(
                Environment::with_prefix("CRTDB")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override admin password from ADMIN_PASSWORD env var if present
            .set_override_option("auth.admin_password", env::var("ADMIN_PASSWORD").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            crts_file: "data/crts.json".to_string(),
            manufacturers_file: "data/manufacturers.json".to_string(),
            upload_dir: "public/uploads".to_string(),
            public_upload_prefix: "/uploads".to_string(),
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            max_files: 10,
            max_file_size_mib: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
