//! # CabinetKit Settings
//!
//! Engine-wide settings: default material, curve sampling, wall layout
//! tuning and obstacle clearances. Stored as JSON or TOML under the
//! platform configuration directory.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{
    EngineSettings, LayoutSettings, MaterialSettings, MeasurementSystem, SamplingSettings,
};
pub use error::{SettingsError, SettingsResult};
pub use persistence::{config_directory, default_settings_path};
