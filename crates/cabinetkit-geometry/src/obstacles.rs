//! Wall obstacles and their exclusion zones
//!
//! Obstacles are positioned in wall coordinates: `x` along the wall from its
//! left end, `y` up from the floor. Each obstacle keeps a clearance around it
//! that cabinets may not enter.

use cabinetkit_core::error::{ensure_non_negative, ensure_positive, GeometryError, GeometryResult};
use cabinetkit_core::LENGTH_EPSILON;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of wall obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleType {
    Window,
    Door,
    Outlet,
    Switch,
    Vent,
    Radiator,
    Skylight,
    Custom,
}

impl ObstacleType {
    pub const ALL: [ObstacleType; 8] = [
        ObstacleType::Window,
        ObstacleType::Door,
        ObstacleType::Outlet,
        ObstacleType::Switch,
        ObstacleType::Vent,
        ObstacleType::Radiator,
        ObstacleType::Skylight,
        ObstacleType::Custom,
    ];

    /// Clearance kept on every side when none is given explicitly.
    pub fn default_clearance(&self) -> f64 {
        match self {
            ObstacleType::Window => 2.0,
            ObstacleType::Door => 2.0,
            ObstacleType::Outlet => 0.5,
            ObstacleType::Switch => 0.5,
            ObstacleType::Vent => 3.0,
            ObstacleType::Radiator => 6.0,
            ObstacleType::Skylight => 2.0,
            ObstacleType::Custom => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleType::Window => "window",
            ObstacleType::Door => "door",
            ObstacleType::Outlet => "outlet",
            ObstacleType::Switch => "switch",
            ObstacleType::Vent => "vent",
            ObstacleType::Radiator => "radiator",
            ObstacleType::Skylight => "skylight",
            ObstacleType::Custom => "custom",
        }
    }
}

impl fmt::Display for ObstacleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObstacleType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        ObstacleType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| GeometryError::invalid("obstacle type", format!("unknown '{}'", s)))
    }
}

/// Axis-aligned rectangle on a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl SectionBounds {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> GeometryResult<Self> {
        if right <= left {
            return Err(GeometryError::InvertedRange {
                name: "bounds horizontal".to_string(),
                start: left,
                end: right,
            });
        }
        if top <= bottom {
            return Err(GeometryError::InvertedRange {
                name: "bounds vertical".to_string(),
                start: bottom,
                end: top,
            });
        }
        Ok(Self {
            left,
            bottom,
            right,
            top,
        })
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Interiors overlap; shared edges do not count.
    pub fn overlaps(&self, other: &SectionBounds) -> bool {
        self.left < other.right - LENGTH_EPSILON
            && other.left < self.right - LENGTH_EPSILON
            && self.bottom < other.top - LENGTH_EPSILON
            && other.bottom < self.top - LENGTH_EPSILON
    }

    pub fn contains(&self, other: &SectionBounds) -> bool {
        other.left >= self.left - LENGTH_EPSILON
            && other.right <= self.right + LENGTH_EPSILON
            && other.bottom >= self.bottom - LENGTH_EPSILON
            && other.top <= self.top + LENGTH_EPSILON
    }
}

/// A physical obstacle on the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub obstacle_type: ObstacleType,
    /// Left edge along the wall.
    pub x: f64,
    /// Bottom edge above the floor.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Overrides the type's default clearance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Obstacle {
    pub fn new(
        obstacle_type: ObstacleType,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> GeometryResult<Self> {
        ensure_non_negative("obstacle x", x)?;
        ensure_non_negative("obstacle y", y)?;
        ensure_positive("obstacle width", width)?;
        ensure_positive("obstacle height", height)?;
        Ok(Self {
            obstacle_type,
            x,
            y,
            width,
            height,
            clearance: None,
            name: None,
        })
    }

    pub fn with_clearance(mut self, clearance: f64) -> GeometryResult<Self> {
        self.clearance = Some(ensure_non_negative("obstacle clearance", clearance)?);
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn effective_clearance(&self) -> f64 {
        self.clearance
            .unwrap_or_else(|| self.obstacle_type.default_clearance())
    }

    /// The obstacle's own rectangle, without clearance.
    pub fn bounds(&self) -> SectionBounds {
        SectionBounds {
            left: self.x,
            bottom: self.y,
            right: self.x + self.width,
            top: self.y + self.height,
        }
    }

    pub fn exclusion_zone(&self) -> ExclusionZone {
        self.exclusion_zone_with(self.effective_clearance())
    }

    /// Exclusion zone using an explicit clearance.
    pub fn exclusion_zone_with(&self, clearance: f64) -> ExclusionZone {
        ExclusionZone {
            bounds: SectionBounds {
                left: self.x - clearance,
                bottom: self.y - clearance,
                right: self.x + self.width + clearance,
                top: self.y + self.height + clearance,
            },
            obstacle_type: self.obstacle_type,
            label: self
                .name
                .clone()
                .unwrap_or_else(|| self.obstacle_type.to_string()),
        }
    }
}

/// Area a cabinet may not occupy: an obstacle plus its clearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone {
    pub bounds: SectionBounds,
    pub obstacle_type: ObstacleType,
    pub label: String,
}

impl ExclusionZone {
    /// Zone clipped to the wall rectangle; `None` if it lies entirely off the wall.
    pub fn clipped(&self, wall_length: f64, wall_height: f64) -> Option<SectionBounds> {
        let left = self.bounds.left.max(0.0);
        let right = self.bounds.right.min(wall_length);
        let bottom = self.bounds.bottom.max(0.0);
        let top = self.bounds.top.min(wall_height);
        if right - left > LENGTH_EPSILON && top - bottom > LENGTH_EPSILON {
            Some(SectionBounds {
                left,
                bottom,
                right,
                top,
            })
        } else {
            None
        }
    }
}

/// Exclusion zones for every obstacle, in input order.
pub fn exclusion_zones(obstacles: &[Obstacle]) -> Vec<ExclusionZone> {
    obstacles.iter().map(Obstacle::exclusion_zone).collect()
}

/// Zones whose interior overlaps the bounds.
pub fn check_collision<'a>(
    bounds: &SectionBounds,
    zones: &'a [ExclusionZone],
) -> Vec<&'a ExclusionZone> {
    zones
        .iter()
        .filter(|zone| zone.bounds.overlaps(bounds))
        .collect()
}
