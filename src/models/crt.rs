//! Catalog entry model and related types.
//!
//! Field names on the wire are the camelCase names the admin form sends, and
//! the persisted JSON file uses the same shape, so one set of serde
//! definitions covers both. Nearly every field is optional: the form submits
//! explicit nulls for anything the editor left blank, and the store echoes
//! records back exactly as received.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{ConnectorType, IoCategory, IoDirection, SignalType};

/// A measured value stored in both unit systems.
///
/// Both sides are captured at edit time (the form converts as the editor
/// types); the store keeps whatever pair it was given. `units::fill_pair`
/// derives a missing side at write time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Measurement {
    pub imperial: Option<String>,
    pub metric: Option<String>,
}

/// Cabinet dimensions along one unit system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dimensions {
    pub width: Option<String>,
    pub height: Option<String>,
    pub depth: Option<String>,
}

/// One power input rating. In practice every record carries exactly one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PowerInput {
    pub voltage: Option<String>,
    pub freq: Option<String>,
    pub watt: Option<String>,
}

/// Built-in speaker configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Speakers {
    pub config: Option<String>,
    pub wattage: Option<String>,
}

/// External documentation reference (service manual, brochure, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DocumentationLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// One video/audio I/O port group on the chassis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VideoIo {
    pub category: Option<IoCategory>,
    pub quantity: Option<u32>,
    pub connector: Option<ConnectorType>,
    #[serde(rename = "type")]
    pub signal: Option<SignalType>,
    pub direction: Option<IoDirection>,
}

/// One CRT model's full record of specifications, media, and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Crt {
    /// Entry identity. Assigned by the store on append when absent;
    /// client-supplied ids are honored but duplicates are rejected.
    #[serde(default)]
    pub id: Option<i64>,

    // Descriptive fields
    pub brand: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub brand_series: Option<String>,
    pub chassis: Option<String>,
    pub purpose: Option<String>,
    pub purpose_type: Option<String>,
    pub market: Option<String>,
    /// Safety flag: chassis is at line potential.
    pub hot_chassis: Option<bool>,
    pub custom_name: Option<String>,
    pub description: Option<String>,

    // Dual-unit measurements
    #[serde(default)]
    pub screen_size: Measurement,
    #[serde(default)]
    pub tube_size: Measurement,
    #[serde(default)]
    pub weight: Measurement,
    #[serde(default)]
    pub size_imperial: Dimensions,
    #[serde(default)]
    pub size_metric: Dimensions,

    // Tube and signal specifications
    pub tube_model: Option<String>,
    pub tube_type: Option<String>,
    #[serde(rename = "tubeTVL")]
    pub tube_tvl: Option<i32>,
    pub refresh_rate: Option<String>,
    /// Either one of the form's preset strings or a synthesized
    /// `WxH{p|i}` custom resolution.
    pub max_resolution: Option<String>,
    pub horizontal_scan_rate: Option<String>,
    #[serde(rename = "hasOSD")]
    pub has_osd: Option<bool>,
    pub has_service_menu: Option<bool>,
    pub service_menu: Option<String>,
    pub adjustments: Option<String>,
    pub chassis_16x9_capable: Option<bool>,
    pub aspect_ratio: Option<String>,
    pub tinted_tube: Option<bool>,
    pub removeable_tint: Option<bool>,

    // Component part numbers
    pub horizontal_output_transistor: Option<String>,
    pub flyback_transformer: Option<String>,
    #[serde(rename = "verticalDeflectionIC")]
    pub vertical_deflection_ic: Option<String>,
    #[serde(rename = "jungleIC")]
    pub jungle_ic: Option<String>,

    // Commerce and extras
    pub remote: Option<String>,
    #[serde(rename = "launchMSRP")]
    pub launch_msrp: Option<i64>,
    pub msrp_currency: Option<String>,
    pub extra_features: Option<String>,

    // Collections
    #[serde(default)]
    pub supported_video_systems: Vec<String>,
    #[serde(rename = "videoIO", default)]
    pub video_io: Vec<VideoIo>,
    #[serde(default)]
    pub similar_models: Vec<String>,
    #[serde(default)]
    pub documentation: Vec<DocumentationLink>,
    /// Relative URL paths under the public upload prefix, in display order.
    #[serde(default)]
    pub images: Vec<String>,

    // Nested records
    #[serde(default)]
    pub power: Vec<PowerInput>,
    #[serde(default)]
    pub speakers: Speakers,
}
