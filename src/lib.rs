//! # CabinetKit
//!
//! A parametric geometry engine for furniture and cabinetry. Given a section
//! size, a material and a component configuration it produces cut panels,
//! joinery and cutout metadata, and a hardware list, with validation
//! diagnostics before anything is generated.
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Value types: panels, materials, contexts, results, units
//! 2. **cabinetkit-geometry** - Pure geometry: corners, arches, scallops, ceilings, wall layout, 3D mapping
//! 3. **cabinetkit-components** - The component contract, registry and builtin catalogue
//! 4. **cabinetkit-settings** - Engine-wide settings stored as JSON or TOML
//! 5. **cabinetkit** - This facade: [`CabinetEngine`] and logging setup

pub mod engine;

pub use cabinetkit_components as components;
pub use cabinetkit_geometry as geometry;
pub use cabinetkit_settings as settings;

pub use engine::{CabinetEngine, EngineError, EngineResult};

pub use cabinetkit_components::{
    Component, ComponentError, ComponentRegistry, ConfiguredComponent, RegistryError,
};
pub use cabinetkit_core::{
    ComponentContext, GenerationResult, GeometryError, HardwareItem, MaterialSpec, MaterialType,
    Panel, PanelType, Position, ValidationResult,
};
pub use cabinetkit_geometry::{
    BoundingBox3D, CabinetFrame, LayoutResult, Obstacle, ObstacleType, RoomTransform,
    SectionRequest,
};
pub use cabinetkit_settings::{EngineSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date, UTC; pinned by `SOURCE_DATE_EPOCH` when set
pub const BUILD_DATE: &str = env!("CABINETKIT_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Output goes to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
