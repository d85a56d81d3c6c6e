//! Geometry value types.
//!
//! ## Modules
//!
//! - [`position`]: cabinet-local [`Position`], room-space [`Point2D`]/[`Point3D`], [`AutoOr`]
//! - [`panel`]: [`PanelType`], [`PanelEdge`] and the [`Panel`] value object
//! - [`cuts`]: angle cuts, tapers, notches, dados, pin holes and cutouts

pub mod cuts;
pub mod panel;
pub mod position;

pub use cuts::*;
pub use panel::*;
pub use position::*;
