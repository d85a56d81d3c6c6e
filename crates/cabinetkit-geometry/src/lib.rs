//! # CabinetKit Geometry
//!
//! Stateless geometry services used by the cabinet components and by the
//! layout and visualisation layers.
//!
//! ## Services
//!
//! ### Component geometry
//! - **Corners**: lazy susan, blind and diagonal footprints
//! - **Arches**: full round, segmental and elliptical header curves
//! - **Scallops**: evenly redistributed valance scallops
//!
//! ### Ceilings
//! - **Sloped ceilings**: edge heights, tapers and minimum-height checks
//! - **Skylights**: void expansion and top-panel notches
//! - **Radial ceilings**: bay facets around a shared apex
//!
//! ### Walls and rooms
//! - **Obstacles**: exclusion zones with per-type clearances
//! - **Wall layout**: valid-region search and section placement
//! - **Mapper**: panel to 3D box mapping
//! - **Room**: rigid placement of cabinets into room coordinates
//!
//! ## Architecture
//!
//! ```text
//! Obstacles ──► find_valid_regions ──► layout_sections ──► PlacedSection
//!                                                             │
//! Component panels ──► map_panels (CabinetFrame) ──► BoundingBox3D
//!                                                             │
//!                                      place_boxes (RoomTransform)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cabinetkit_geometry::corner::calculate_lazy_susan_footprint;
//!
//! let footprint = calculate_lazy_susan_footprint(24.0, 2.0).unwrap();
//! assert_eq!(footprint.left_wall, 26.0);
//! ```

pub mod arch;
pub mod corner;
pub mod mapper;
pub mod obstacles;
pub mod radial_ceiling;
pub mod room;
pub mod scallop;
pub mod skylight;
pub mod sloped_ceiling;
pub mod wall_layout;

pub use arch::{ArchConfig, ArchType};
pub use corner::{
    calculate_blind_corner_footprint, calculate_diagonal_footprint,
    calculate_lazy_susan_footprint, BlindSide, CornerFootprint,
};
pub use mapper::{map_panel, map_panels, BoundingBox3D, CabinetFrame};
pub use obstacles::{check_collision, ExclusionZone, Obstacle, ObstacleType, SectionBounds};
pub use radial_ceiling::{
    ApexPoint, CeilingFacet, RadialCeilingConfig, RadialCeilingGeometry, RadialCeilingService,
    WallSegment, WallZone,
};
pub use room::{place_assemblies, place_boxes, RoomTransform};
pub use scallop::ScallopConfig;
pub use skylight::{calculate_skylight_notches, Skylight};
pub use sloped_ceiling::{CeilingSlope, SlopeDirection};
pub use wall_layout::{
    find_valid_regions, layout_sections, LayoutConfig, LayoutResult, PlacedSection, RegionType,
    SectionRequest, SkippedSection, SplitPart, ValidRegion,
};
