//! Data models for the CRT database

pub mod crt;
pub mod enums;
pub mod manufacturer;
pub mod units;

// Re-export commonly used types
pub use crt::{Crt, Measurement, VideoIo};
pub use enums::{ConnectorType, IoCategory, IoDirection, SignalType};
pub use manufacturer::Manufacturer;
