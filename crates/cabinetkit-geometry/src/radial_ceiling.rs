//! Radial (bay window) ceiling geometry
//!
//! A bay ceiling is a set of triangular facets, one per wall segment, each
//! running from its wall edge up to a shared apex. Heights inside a facet are
//! interpolated by the radial distance ratio from the wall edge's centre
//! toward the apex rather than by true planar interpolation. A query point is
//! assigned to the facet whose edge centre is nearest, which approximates
//! point-in-triangle containment for convex bays.

use cabinetkit_core::error::{ensure_positive, GeometryError, GeometryResult};
use cabinetkit_core::{Point2D, LENGTH_EPSILON};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// One straight wall segment of the bay, in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallZone {
    pub index: usize,
    pub start: Point2D,
    pub end: Point2D,
}

impl WallZone {
    pub fn new(index: usize, start: Point2D, end: Point2D) -> GeometryResult<Self> {
        ensure_positive("wall zone length", start.distance_to(&end))?;
        Ok(Self { index, start, end })
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point2D {
        self.start.midpoint(&self.end)
    }
}

/// The point where every facet meets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApexPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ApexPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Plan position of the apex.
    pub fn plan(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Triangular ceiling facet between a wall edge and the apex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CeilingFacet {
    pub wall_index: usize,
    pub edge_start: Point2D,
    pub edge_end: Point2D,
    pub edge_height: f64,
    pub apex: ApexPoint,
}

impl CeilingFacet {
    pub fn new(zone: &WallZone, edge_height: f64, apex: ApexPoint) -> GeometryResult<Self> {
        ensure_positive("facet edge_height", edge_height)?;
        if edge_height >= apex.z {
            return Err(GeometryError::InvertedRange {
                name: "facet height".to_string(),
                start: edge_height,
                end: apex.z,
            });
        }
        Ok(Self {
            wall_index: zone.index,
            edge_start: zone.start,
            edge_end: zone.end,
            edge_height,
            apex,
        })
    }

    pub fn edge_center(&self) -> Point2D {
        self.edge_start.midpoint(&self.edge_end)
    }

    pub fn edge_length(&self) -> f64 {
        self.edge_start.distance_to(&self.edge_end)
    }

    /// Horizontal run from the wall edge centre to the apex.
    pub fn run(&self) -> f64 {
        self.edge_center().distance_to(&self.apex.plan())
    }

    /// Length of the facet measured up its slope, edge centre to apex.
    pub fn slant_height(&self) -> f64 {
        self.run().hypot(self.apex.z - self.edge_height)
    }

    /// Ceiling height above a plan point.
    ///
    /// Rises linearly from `edge_height` at the edge centre to the apex height
    /// once the point is as far from the edge centre as the apex is.
    pub fn height_at_point(&self, point: &Point2D) -> f64 {
        let run = self.run();
        if run < LENGTH_EPSILON {
            return self.apex.z;
        }
        let t = (point.distance_to(&self.edge_center()) / run).min(1.0);
        self.edge_height + t * (self.apex.z - self.edge_height)
    }
}

/// A validated set of facets sharing one apex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialCeilingGeometry {
    apex: ApexPoint,
    facets: Vec<CeilingFacet>,
}

impl RadialCeilingGeometry {
    pub fn new(apex: ApexPoint, facets: Vec<CeilingFacet>) -> GeometryResult<Self> {
        if facets.len() < 3 {
            return Err(GeometryError::invalid(
                "radial ceiling",
                format!("needs at least 3 facets, got {}", facets.len()),
            ));
        }
        if let Some(facet) = facets.iter().find(|f| f.apex != apex) {
            return Err(GeometryError::invalid(
                "radial ceiling",
                format!("facet {} does not share the apex", facet.wall_index),
            ));
        }
        Ok(Self { apex, facets })
    }

    pub fn apex(&self) -> ApexPoint {
        self.apex
    }

    pub fn facets(&self) -> &[CeilingFacet] {
        &self.facets
    }

    /// Facet whose edge centre is nearest the point; ties go to the lower index.
    pub fn facet_for_point(&self, point: &Point2D) -> &CeilingFacet {
        let mut best = &self.facets[0];
        let mut best_distance = point.distance_to(&best.edge_center());
        for facet in &self.facets[1..] {
            let distance = point.distance_to(&facet.edge_center());
            if distance < best_distance {
                best = facet;
                best_distance = distance;
            }
        }
        best
    }

    pub fn height_at_point(&self, point: &Point2D) -> f64 {
        self.facet_for_point(point).height_at_point(point)
    }
}

/// One wall of a bay given as its length and the turn from the previous wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub length: f64,
    /// Degrees turned counter-clockwise from the previous wall's direction.
    #[serde(default)]
    pub turn: f64,
}

/// Inputs for [`RadialCeilingService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialCeilingConfig {
    pub walls: Vec<WallSegment>,
    pub edge_height: f64,
    pub apex_height: f64,
    /// Plan position of the apex; defaults to the centroid of wall midpoints.
    #[serde(default)]
    pub apex: Option<Point2D>,
}

/// Builds radial ceiling geometry from wall segments, caching the derived
/// wall zones and apex until [`RadialCeilingService::invalidate_cache`].
#[derive(Debug)]
pub struct RadialCeilingService {
    config: RwLock<RadialCeilingConfig>,
    zones: RwLock<Option<Arc<Vec<WallZone>>>>,
    apex: RwLock<Option<ApexPoint>>,
}

impl RadialCeilingService {
    pub fn new(config: RadialCeilingConfig) -> Self {
        Self {
            config: RwLock::new(config),
            zones: RwLock::new(None),
            apex: RwLock::new(None),
        }
    }

    pub fn config(&self) -> RadialCeilingConfig {
        self.config.read().clone()
    }

    /// Replace the configuration and drop everything derived from it.
    pub fn set_config(&self, config: RadialCeilingConfig) {
        *self.config.write() = config;
        self.invalidate_cache();
    }

    pub fn invalidate_cache(&self) {
        *self.zones.write() = None;
        *self.apex.write() = None;
        debug!("radial ceiling cache invalidated");
    }

    /// Wall zones laid out by walking the segments from the origin along +x.
    pub fn wall_zones(&self) -> GeometryResult<Arc<Vec<WallZone>>> {
        if let Some(zones) = self.zones.read().as_ref() {
            return Ok(Arc::clone(zones));
        }

        let mut slot = self.zones.write();
        if let Some(zones) = slot.as_ref() {
            return Ok(Arc::clone(zones));
        }
        let zones = Arc::new(build_zones(&self.config.read().walls)?);
        *slot = Some(Arc::clone(&zones));
        Ok(zones)
    }

    pub fn apex_point(&self) -> GeometryResult<ApexPoint> {
        if let Some(apex) = *self.apex.read() {
            return Ok(apex);
        }

        let zones = self.wall_zones()?;
        let mut slot = self.apex.write();
        if let Some(apex) = *slot {
            return Ok(apex);
        }
        let config = self.config.read();
        let plan = match config.apex {
            Some(point) => point,
            None => {
                let n = zones.len() as f64;
                let (sx, sy) = zones.iter().fold((0.0, 0.0), |(sx, sy), zone| {
                    let mid = zone.midpoint();
                    (sx + mid.x, sy + mid.y)
                });
                Point2D::new(sx / n, sy / n)
            }
        };
        let apex = ApexPoint::new(plan.x, plan.y, config.apex_height);
        *slot = Some(apex);
        Ok(apex)
    }

    pub fn geometry(&self) -> GeometryResult<RadialCeilingGeometry> {
        let zones = self.wall_zones()?;
        let apex = self.apex_point()?;
        let edge_height = self.config.read().edge_height;
        let facets = zones
            .iter()
            .map(|zone| CeilingFacet::new(zone, edge_height, apex))
            .collect::<GeometryResult<Vec<_>>>()?;
        RadialCeilingGeometry::new(apex, facets)
    }

    /// `(edge length, slant height)` of the panel covering facet `index`.
    pub fn facet_panel_dimensions(&self, index: usize) -> GeometryResult<(f64, f64)> {
        let geometry = self.geometry()?;
        let facet = geometry.facets().get(index).ok_or_else(|| {
            GeometryError::invalid(
                "facet index",
                format!("{} out of {} facets", index, geometry.facets().len()),
            )
        })?;
        Ok((facet.edge_length(), facet.slant_height()))
    }
}

fn build_zones(walls: &[WallSegment]) -> GeometryResult<Vec<WallZone>> {
    if walls.len() < 3 {
        return Err(GeometryError::invalid(
            "radial ceiling",
            format!("needs at least 3 walls, got {}", walls.len()),
        ));
    }

    let mut heading = 0.0f64;
    let mut cursor = Point2D::new(0.0, 0.0);
    let mut zones = Vec::with_capacity(walls.len());
    for (index, wall) in walls.iter().enumerate() {
        ensure_positive("wall length", wall.length)?;
        if index > 0 {
            heading += wall.turn;
        }
        let radians = heading.to_radians();
        let end = Point2D::new(
            cursor.x + wall.length * radians.cos(),
            cursor.y + wall.length * radians.sin(),
        );
        zones.push(WallZone::new(index, cursor, end)?);
        cursor = end;
    }
    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_bay() -> RadialCeilingConfig {
        RadialCeilingConfig {
            walls: vec![
                WallSegment { length: 48.0, turn: 0.0 },
                WallSegment { length: 48.0, turn: 90.0 },
                WallSegment { length: 48.0, turn: 90.0 },
                WallSegment { length: 48.0, turn: 90.0 },
            ],
            edge_height: 84.0,
            apex_height: 96.0,
            apex: None,
        }
    }

    #[test]
    fn test_apex_is_centroid_of_midpoints() {
        let service = RadialCeilingService::new(square_bay());
        let apex = service.apex_point().unwrap();
        assert!((apex.x - 24.0).abs() < 1e-9);
        assert!((apex.y - 24.0).abs() < 1e-9);
        assert_eq!(apex.z, 96.0);
    }

    #[test]
    fn test_height_interpolates_by_distance_ratio() {
        let geometry = RadialCeilingService::new(square_bay()).geometry().unwrap();
        let at_edge = geometry.height_at_point(&Point2D::new(24.0, 0.0));
        assert!((at_edge - 84.0).abs() < 1e-9);
        let halfway = geometry.height_at_point(&Point2D::new(24.0, 12.0));
        assert!((halfway - 90.0).abs() < 1e-9);
        let at_apex = geometry.height_at_point(&Point2D::new(24.0, 24.0));
        assert!((at_apex - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_edge_center_selection() {
        let geometry = RadialCeilingService::new(square_bay()).geometry().unwrap();
        assert_eq!(geometry.facet_for_point(&Point2D::new(24.0, 2.0)).wall_index, 0);
        assert_eq!(geometry.facet_for_point(&Point2D::new(46.0, 24.0)).wall_index, 1);
        // past the apex, distance ratio is clamped
        let facet = geometry.facet_for_point(&Point2D::new(24.0, 2.0));
        assert_eq!(facet.height_at_point(&Point2D::new(24.0, 40.0)), 96.0);
    }

    #[test]
    fn test_facet_panel_dimensions() {
        let service = RadialCeilingService::new(square_bay());
        let (edge, slant) = service.facet_panel_dimensions(0).unwrap();
        assert!((edge - 48.0).abs() < 1e-9);
        assert!((slant - 24.0f64.hypot(12.0)).abs() < 1e-9);
        assert!(service.facet_panel_dimensions(9).is_err());
    }

    #[test]
    fn test_cache_invalidation() {
        let service = RadialCeilingService::new(square_bay());
        let first = service.apex_point().unwrap();
        let mut config = square_bay();
        config.apex = Some(Point2D::new(10.0, 10.0));
        service.set_config(config);
        let second = service.apex_point().unwrap();
        assert_ne!(first, second);
        assert_eq!(second.x, 10.0);
    }

    #[test]
    fn test_facet_rejects_edge_above_apex() {
        let zone = WallZone::new(0, Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)).unwrap();
        assert!(CeilingFacet::new(&zone, 96.0, ApexPoint::new(5.0, 5.0, 90.0)).is_err());
    }

    #[test]
    fn test_geometry_needs_three_facets() {
        let mut config = square_bay();
        config.walls.truncate(2);
        assert!(RadialCeilingService::new(config).geometry().is_err());
    }
}
