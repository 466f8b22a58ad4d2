//! Enumerated catalog vocabularies.
//!
//! The admin form offers fixed option lists for connector and signal types
//! but lets the editor type anything when none of them fit. Those fields are
//! modeled as untagged `Known | Custom` pairs so a known string parses to its
//! variant and any other string round-trips untouched, without a sentinel
//! `"Other"` value.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signal type carried by a video/audio/other I/O port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SignalType {
    Known(KnownSignal),
    Custom(String),
}

/// Signal types the form offers out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum KnownSignal {
    #[serde(rename = "RGBS")]
    Rgbs,
    #[serde(rename = "RGBHV")]
    Rgbhv,
    #[serde(rename = "RGsB")]
    RgSb,
    Component,
    Composite,
    #[serde(rename = "S-Video (Luma + Chroma)")]
    SVideo,
    #[serde(rename = "RF (UHF + VHF)")]
    Rf,
    #[serde(rename = "CGA")]
    Cga,
    #[serde(rename = "EGA")]
    Ega,
    #[serde(rename = "MDA")]
    Mda,
    #[serde(rename = "SVGA")]
    Svga,
    #[serde(rename = "XGA")]
    Xga,
    #[serde(rename = "HDMI")]
    Hdmi,
    #[serde(rename = "RCA Stereo")]
    RcaStereo,
    #[serde(rename = "RCA Mono")]
    RcaMono,
    #[serde(rename = "3.5mm")]
    Trs35mm,
    #[serde(rename = "XLR")]
    Xlr,
    Optical,
    Serial,
    #[serde(rename = "USB")]
    Usb,
    Ethernet,
}

/// Physical connector on the chassis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ConnectorType {
    Known(KnownConnector),
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum KnownConnector {
    #[serde(rename = "BNC")]
    Bnc,
    #[serde(rename = "Belling-Lee")]
    BellingLee,
    #[serde(rename = "DB-13W3")]
    Db13w3,
    #[serde(rename = "DB-15")]
    Db15,
    #[serde(rename = "DB-9")]
    Db9,
    #[serde(rename = "DIN")]
    Din,
    #[serde(rename = "D端子 (D-Terminal)")]
    DTerminal,
    #[serde(rename = "EIAJ-D8A2 / EIAJ-8")]
    Eiaj8,
    #[serde(rename = "F-Type")]
    FType,
    #[serde(rename = "HD-15 (VGA)")]
    Hd15,
    #[serde(rename = "HDMI")]
    Hdmi,
    #[serde(rename = "Mini-DIN")]
    MiniDin,
    #[serde(rename = "Quick F-Type")]
    QuickFType,
    #[serde(rename = "RCA / Cinch")]
    Rca,
    #[serde(rename = "SCART / EIAJ TTC-003")]
    Scart,
    #[serde(rename = "Sony A/V Hit / A/V Uniconnector")]
    SonyAvHit,
    #[serde(rename = "Twin-Leads (Screws/Forks)")]
    TwinLeads,
    #[serde(rename = "34-pin IDC (2x17)")]
    Idc34Pin,
    #[serde(rename = "3.5mm TRS")]
    Trs35mm,
    #[serde(rename = "6.3mm TRS")]
    Trs63mm,
}

/// Broad grouping of an I/O port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IoCategory {
    Known(KnownIoCategory),
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum KnownIoCategory {
    Video,
    Audio,
    Other,
}

/// Whether a port accepts or emits a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IoDirection {
    Input,
    Output,
}
