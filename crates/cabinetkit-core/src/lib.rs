//! # CabinetKit Core
//!
//! Core value types shared by every CabinetKit crate:
//!
//! - **Materials**: [`MaterialSpec`] / [`MaterialType`], hashable grouping keys
//! - **Geometry primitives**: [`Position`], [`Point2D`], [`Panel`], [`PanelType`],
//!   cut metadata ([`AngleCut`], [`TaperSpec`], [`NotchSpec`])
//! - **Component I/O**: [`ComponentContext`], [`ValidationResult`],
//!   [`GenerationResult`], [`HardwareItem`], [`MetadataValue`]
//! - **Units**: fractional-inch formatting and parsing
//!
//! Value-object constructors fail fast with [`GeometryError`]; user-facing
//! configuration problems are accumulated in [`ValidationResult`] instead.

pub mod context;
pub mod error;
pub mod materials;
pub mod results;
pub mod types;
pub mod units;

pub use context::ComponentContext;
pub use error::{GeometryError, GeometryResult};
pub use materials::{MaterialSpec, MaterialType};
pub use results::{GenerationResult, HardwareItem, MetadataValue, ValidationResult};
pub use types::{
    AngleCut, AutoOr, CutMetadata, CutoutShape, CutoutSpec, DadoSpec, NotchSpec, Panel,
    PanelCategory, PanelEdge, PanelType, PinHolePattern, Point2D, Point3D, Position,
    TaperDirection, TaperSpec,
};
pub use units::{format_inches, parse_inches, MeasurementSystem};

/// Tolerance used when comparing lengths for equality (inches).
pub const LENGTH_EPSILON: f64 = 1e-9;
