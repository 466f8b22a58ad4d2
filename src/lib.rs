//! CRT Database server
//!
//! A REST JSON API for a catalog of cathode-ray tube displays: browsable
//! manufacturer and model data backed by flat JSON files, plus image
//! uploads for catalog entries.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
