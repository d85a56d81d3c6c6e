//! # Panel to 3D Mapping
//!
//! Turns the 2D panels a component generates into axis-aligned 3D boxes in
//! the cabinet's frame.
//!
//! ## Axes
//! - `x` runs across the cabinet width, left to right
//! - `y` runs front to back from the carcass face; applied fronts sit at negative `y`
//! - `z` runs up from the cabinet bottom
//!
//! Each panel type decides which of its 2D dimensions becomes which box axis
//! and where it is anchored. Horizontal panels use their `height` as depth.
//! A panel may carry a numeric `depth_offset` metadata entry to override its
//! position along `y`.

use cabinetkit_core::error::{ensure_positive, GeometryResult};
use cabinetkit_core::{Panel, PanelType};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Default recess of a toe kick behind the carcass face.
pub const DEFAULT_TOE_KICK_SETBACK: f64 = 3.0;

/// Axis-aligned box, origin at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl BoundingBox3D {
    pub fn new(x: f64, y: f64, z: f64, width: f64, depth: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && depth >= 0.0 && height >= 0.0);
        Self {
            x,
            y,
            z,
            width,
            depth,
            height,
        }
    }

    /// Box spanning two opposite corners.
    pub fn from_corners(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self::new(min.x, min.y, min.z, max.x - min.x, max.y - min.y, max.z - min.z)
    }

    pub fn min(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn max(&self) -> Point3<f64> {
        Point3::new(self.x + self.width, self.y + self.depth, self.z + self.height)
    }

    pub fn volume(&self) -> f64 {
        self.width * self.depth * self.height
    }

    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (min, max) = (self.min(), self.max());
        [
            Point3::new(min.x, min.y, min.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(min.x, max.y, min.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(min.x, min.y, max.z),
            Point3::new(max.x, min.y, max.z),
            Point3::new(min.x, max.y, max.z),
            Point3::new(max.x, max.y, max.z),
        ]
    }

    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            z: self.z + offset.z,
            ..*self
        }
    }

    /// Whether interiors overlap.
    pub fn intersects(&self, other: &BoundingBox3D) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        (0..3).all(|i| a_min[i] < b_max[i] && b_min[i] < a_max[i])
    }
}

/// The cabinet volume panels are mapped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinetFrame {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Offset added to every mapped box, e.g. the section's place on the wall.
    #[serde(default)]
    pub origin: [f64; 3],
}

impl CabinetFrame {
    pub fn new(width: f64, height: f64, depth: f64) -> GeometryResult<Self> {
        ensure_positive("frame width", width)?;
        ensure_positive("frame height", height)?;
        ensure_positive("frame depth", depth)?;
        Ok(Self {
            width,
            height,
            depth,
            origin: [0.0; 3],
        })
    }

    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.origin = [x, y, z];
        self
    }
}

/// How a panel's 2D face is oriented inside the cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plane {
    /// Lies flat; 2D height is depth.
    Horizontal,
    /// Stands front to back, like a side; 2D width is depth.
    Side,
    /// Stands across the back.
    Back,
    /// Stands across the front, proud of the carcass face.
    Front,
}

fn plane_of(panel_type: PanelType) -> Plane {
    use PanelType::*;
    match panel_type {
        Top | Bottom | Shelf | HorizontalDivider | DrawerBottom | LazySusanTray | Desktop
        | KeyboardTray | MonitorShelf | Countertop | SeatSurface | BayCeilingFacet
        | BaySeatWing | Nailer => Plane::Horizontal,
        LeftSide | RightSide | Divider | DrawerSide | KeyboardEnclosure | MonitorRiser
        | CrownReturn => Plane::Side,
        Back | ModestyPanel | WireChase | Backsplash | DrawerBoxBack => Plane::Back,
        ToeKick | Door | DrawerFront | DrawerBoxFront | FaceFrameStile | FaceFrameRail
        | ArchHeader | Valance | LightRail | CrownMolding | Filler | DiagonalFace | SeatFront
        | BayApron => Plane::Front,
    }
}

/// Map one panel into the cabinet frame.
pub fn map_panel(panel: &Panel, frame: &CabinetFrame) -> BoundingBox3D {
    let t = panel.thickness();
    let (px, pz) = (panel.position.x, panel.position.y);
    let number = |key: &str| panel.metadata.get(key).and_then(|v| v.as_number());
    let depth_offset = number("depth_offset");

    let local = match (panel.panel_type, plane_of(panel.panel_type)) {
        (PanelType::Top, _) => {
            BoundingBox3D::new(px, 0.0, frame.height - t, panel.width, panel.height, t)
        }
        (PanelType::Countertop, _) => {
            BoundingBox3D::new(px, 0.0, frame.height, panel.width, panel.height, t)
        }
        // trays turn on a post centred in the footprint
        (PanelType::LazySusanTray, _) => BoundingBox3D::new(
            px + (frame.width - panel.width) / 2.0,
            (frame.depth - panel.height) / 2.0,
            pz,
            panel.width,
            panel.height,
            t,
        ),
        // width runs along the wall edge, height is the slant length up to the apex
        (PanelType::BayCeilingFacet, _) => {
            let pitch = number("pitch").unwrap_or(0.0).to_radians();
            let run = panel.height * pitch.cos();
            let rise = panel.height * pitch.sin() + t * pitch.cos();
            let edge = number("edge_height").unwrap_or(frame.height);
            BoundingBox3D::new(px, 0.0, edge, panel.width, run.max(t), rise.max(t))
        }
        (_, Plane::Horizontal) => BoundingBox3D::new(px, 0.0, pz, panel.width, panel.height, t),
        (PanelType::LeftSide, _) => {
            BoundingBox3D::new(0.0, 0.0, pz, t, panel.width, panel.height)
        }
        (PanelType::RightSide, _) => {
            BoundingBox3D::new(frame.width - t, 0.0, pz, t, panel.width, panel.height)
        }
        (PanelType::CrownReturn, _) => BoundingBox3D::new(
            number("side_x").unwrap_or(px),
            frame.depth - panel.width,
            pz,
            t,
            panel.width,
            panel.height,
        ),
        (_, Plane::Side) => BoundingBox3D::new(px, 0.0, pz, t, panel.width, panel.height),
        (PanelType::Backsplash, _) => BoundingBox3D::new(
            px,
            frame.depth - t,
            frame.height.max(pz),
            panel.width,
            t,
            panel.height,
        ),
        (PanelType::DrawerBoxBack, _) => BoundingBox3D::new(
            px,
            number("box_depth").unwrap_or(frame.depth) - t,
            pz,
            panel.width,
            t,
            panel.height,
        ),
        (_, Plane::Back) => {
            BoundingBox3D::new(px, frame.depth - t, pz, panel.width, t, panel.height)
        }
        (PanelType::ToeKick, _) => BoundingBox3D::new(
            px,
            depth_offset.unwrap_or(DEFAULT_TOE_KICK_SETBACK),
            0.0,
            panel.width,
            t,
            panel.height,
        ),
        (PanelType::DrawerBoxFront, _) => {
            BoundingBox3D::new(px, 0.0, pz, panel.width, t, panel.height)
        }
        (PanelType::CrownMolding, _) => BoundingBox3D::new(
            px - number("overhang").unwrap_or(0.0),
            -t,
            pz,
            panel.width,
            t,
            panel.height,
        ),
        (_, Plane::Front) => BoundingBox3D::new(px, -t, pz, panel.width, t, panel.height),
    };

    let local = match (panel.panel_type, depth_offset) {
        (PanelType::ToeKick, _) | (_, None) => local,
        (_, Some(offset)) => BoundingBox3D { y: offset, ..local },
    };
    local.translated(&Vector3::from(frame.origin))
}

/// Map every panel of a result, preserving order.
pub fn map_panels<'a>(
    panels: impl IntoIterator<Item = &'a Panel>,
    frame: &CabinetFrame,
) -> Vec<BoundingBox3D> {
    panels
        .into_iter()
        .map(|panel| map_panel(panel, frame))
        .collect()
}
