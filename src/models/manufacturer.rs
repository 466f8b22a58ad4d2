//! Manufacturer reference data.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One manufacturer: static reference data, read-only from the service's
/// perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Relative path to the manufacturer logo.
    pub logo: Option<String>,
}

impl Manufacturer {
    /// URL-safe identifier used for routing. Derived, never stored.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Lowercase a name and collapse whitespace runs into hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
