//! Corner cabinet footprint calculations
//!
//! A corner cabinet occupies wall length on two walls meeting at the corner.
//! Each style derives that footprint differently:
//!
//! - **Lazy susan**: symmetric, `depth + door_clearance` on both walls
//! - **Blind**: asymmetric, full `depth` on the blind wall and
//!   `accessible_width + filler_width` on the accessible wall
//! - **Diagonal**: symmetric, `depth` on both walls, with a `depth·√2` face
//!
//! Footprints are derived values, always produced fresh by these functions.

use cabinetkit_core::error::{ensure_non_negative, ensure_positive, GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative tolerance used by [`CornerFootprint::is_symmetric`].
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Clearance between a tray's edge and the cabinet interior (total, both sides).
const TRAY_MAX_CLEARANCE: f64 = 2.0;
/// Additional margin used when the tray diameter is chosen automatically.
const TRAY_AUTO_CLEARANCE: f64 = 4.0;

/// Wall length consumed by a corner cabinet on each wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerFootprint {
    pub left_wall: f64,
    pub right_wall: f64,
}

impl CornerFootprint {
    /// Create a footprint; both walls must be strictly positive.
    pub fn new(left_wall: f64, right_wall: f64) -> GeometryResult<Self> {
        ensure_positive("left_wall", left_wall)?;
        ensure_positive("right_wall", right_wall)?;
        Ok(Self {
            left_wall,
            right_wall,
        })
    }

    /// Combined wall length along both walls.
    pub fn total_footprint(&self) -> f64 {
        self.left_wall + self.right_wall
    }

    /// Whether both walls match within a relative tolerance.
    pub fn is_symmetric(&self) -> bool {
        let scale = self.left_wall.abs().max(self.right_wall.abs()).max(1.0);
        (self.left_wall - self.right_wall).abs() <= SYMMETRY_TOLERANCE * scale
    }

    /// The footprint seen from the other corner orientation.
    pub fn mirrored(&self) -> Self {
        Self {
            left_wall: self.right_wall,
            right_wall: self.left_wall,
        }
    }
}

/// The side of a blind corner cabinet that is not reachable from the opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlindSide {
    #[default]
    Left,
    Right,
}

impl BlindSide {
    pub fn opposite(&self) -> Self {
        match self {
            BlindSide::Left => BlindSide::Right,
            BlindSide::Right => BlindSide::Left,
        }
    }
}

impl fmt::Display for BlindSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlindSide::Left => write!(f, "left"),
            BlindSide::Right => write!(f, "right"),
        }
    }
}

impl FromStr for BlindSide {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(BlindSide::Left),
            "right" => Ok(BlindSide::Right),
            other => Err(GeometryError::invalid(
                "blind_side",
                format!("expected 'left' or 'right', got '{}'", other),
            )),
        }
    }
}

/// Lazy susan corner: `depth + door_clearance` on both walls.
pub fn calculate_lazy_susan_footprint(
    depth: f64,
    door_clearance: f64,
) -> GeometryResult<CornerFootprint> {
    ensure_positive("depth", depth)?;
    ensure_non_negative("door_clearance", door_clearance)?;
    let wall = depth + door_clearance;
    CornerFootprint::new(wall, wall)
}

/// Blind corner: the blind wall gets `depth`, the accessible wall gets
/// `accessible_width + filler_width`.
pub fn calculate_blind_corner_footprint(
    depth: f64,
    accessible_width: f64,
    filler_width: f64,
    blind_side: BlindSide,
) -> GeometryResult<CornerFootprint> {
    ensure_positive("depth", depth)?;
    ensure_positive("accessible_width", accessible_width)?;
    ensure_non_negative("filler_width", filler_width)?;

    let accessible = accessible_width + filler_width;
    match blind_side {
        BlindSide::Left => CornerFootprint::new(depth, accessible),
        BlindSide::Right => CornerFootprint::new(accessible, depth),
    }
}

/// Diagonal corner: an isosceles right-triangle corner, `depth` on both walls.
pub fn calculate_diagonal_footprint(depth: f64) -> GeometryResult<CornerFootprint> {
    ensure_positive("depth", depth)?;
    CornerFootprint::new(depth, depth)
}

/// Width of the visible diagonal face, independent of the footprint.
pub fn diagonal_face_width(depth: f64) -> GeometryResult<f64> {
    ensure_positive("depth", depth)?;
    Ok(depth * std::f64::consts::SQRT_2)
}

/// Largest tray a lazy susan of this depth can hold.
pub fn max_tray_diameter(depth: f64) -> f64 {
    depth * 2.0 - TRAY_MAX_CLEARANCE
}

/// Tray diameter chosen when the configuration says `"auto"`.
pub fn default_tray_diameter(depth: f64) -> f64 {
    depth * 2.0 - TRAY_AUTO_CLEARANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_susan_example() {
        let footprint = calculate_lazy_susan_footprint(24.0, 2.0).unwrap();
        assert_eq!(footprint, CornerFootprint::new(26.0, 26.0).unwrap());
        assert!(footprint.is_symmetric());
        assert_eq!(max_tray_diameter(24.0), 46.0);
        assert_eq!(default_tray_diameter(24.0), 44.0);
    }

    #[test]
    fn test_blind_corner_example() {
        let footprint = calculate_blind_corner_footprint(24.0, 36.0, 3.0, BlindSide::Left).unwrap();
        assert_eq!(footprint.left_wall, 24.0);
        assert_eq!(footprint.right_wall, 39.0);
        assert_eq!(footprint.total_footprint(), 63.0);
        assert!(!footprint.is_symmetric());
    }

    #[test]
    fn test_blind_side_swap_mirrors_footprint() {
        let left = calculate_blind_corner_footprint(24.0, 30.0, 1.5, BlindSide::Left).unwrap();
        let right = calculate_blind_corner_footprint(24.0, 30.0, 1.5, BlindSide::Right).unwrap();
        assert_eq!(left.mirrored(), right);
    }

    #[test]
    fn test_diagonal_face() {
        let footprint = calculate_diagonal_footprint(24.0).unwrap();
        assert_eq!(footprint.left_wall, 24.0);
        let face = diagonal_face_width(24.0).unwrap();
        assert!((face - 33.941_125_496_954_28).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(calculate_lazy_susan_footprint(0.0, 2.0).is_err());
        assert!(calculate_lazy_susan_footprint(24.0, -1.0).is_err());
        assert!(calculate_blind_corner_footprint(24.0, 0.0, 3.0, BlindSide::Left).is_err());
        assert!(calculate_diagonal_footprint(-24.0).is_err());
        assert!(diagonal_face_width(0.0).is_err());
        assert!(CornerFootprint::new(0.0, 1.0).is_err());
    }

    #[test]
    fn test_symmetry_uses_relative_tolerance() {
        let nearly = CornerFootprint::new(1.0e6, 1.0e6 + 1.0e-5).unwrap();
        assert!(nearly.is_symmetric());
        let off = CornerFootprint::new(24.0, 24.001).unwrap();
        assert!(!off.is_symmetric());
    }

    #[test]
    fn test_blind_side_parsing() {
        assert_eq!("Right".parse::<BlindSide>().unwrap(), BlindSide::Right);
        assert!("up".parse::<BlindSide>().is_err());
        assert_eq!(BlindSide::Left.opposite(), BlindSide::Right);
    }
}
