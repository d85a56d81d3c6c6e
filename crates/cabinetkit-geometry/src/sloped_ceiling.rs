//! Sloped ceiling heights and section tapers
//!
//! A sloped ceiling falls linearly along the wall from `start_height`. The
//! direction decides which end of the wall the slope is measured from. Heights
//! never drop below `min_height` (a knee wall or flat ceiling section).

use cabinetkit_core::error::{ensure_non_negative, ensure_positive, GeometryError, GeometryResult};
use cabinetkit_core::{TaperDirection, TaperSpec};
use serde::{Deserialize, Serialize};

/// Left and right edge heights closer than this produce no taper.
pub const TAPER_TOLERANCE: f64 = 0.001;

/// Which way the ceiling descends along the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlopeDirection {
    /// Tallest at the wall's left end.
    #[default]
    LeftToRight,
    /// Tallest at the wall's right end.
    RightToLeft,
}

/// A linear ceiling slope above a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CeilingSlope {
    /// Degrees from horizontal, `0 <= angle < 90`.
    pub angle: f64,
    /// Ceiling height at the tall end of the wall.
    pub start_height: f64,
    pub direction: SlopeDirection,
    #[serde(default)]
    pub min_height: f64,
}

impl CeilingSlope {
    pub fn new(
        angle: f64,
        start_height: f64,
        direction: SlopeDirection,
        min_height: f64,
    ) -> GeometryResult<Self> {
        if !(angle.is_finite() && (0.0..90.0).contains(&angle)) {
            return Err(GeometryError::OutOfRange {
                name: "slope angle".to_string(),
                value: angle,
                min: 0.0,
                max: 90.0,
            });
        }
        ensure_positive("start_height", start_height)?;
        ensure_non_negative("min_height", min_height)?;
        if min_height > start_height {
            return Err(GeometryError::InvertedRange {
                name: "ceiling height".to_string(),
                start: min_height,
                end: start_height,
            });
        }
        Ok(Self {
            angle,
            start_height,
            direction,
            min_height,
        })
    }

    /// Height at a distance `position` from the tall end of the slope.
    pub fn height_at_position(&self, position: f64) -> f64 {
        let raw = self.start_height - position * self.angle.to_radians().tan();
        raw.max(self.min_height)
    }

    /// Height at `x` measured from the wall's left end.
    pub fn height_at_wall_x(&self, x: f64, wall_length: f64) -> f64 {
        match self.direction {
            SlopeDirection::LeftToRight => self.height_at_position(x),
            SlopeDirection::RightToLeft => self.height_at_position(wall_length - x),
        }
    }

    /// Ceiling heights above the (left, right) edges of a section.
    pub fn section_edge_heights(
        &self,
        section_x: f64,
        section_width: f64,
        wall_length: f64,
    ) -> (f64, f64) {
        (
            self.height_at_wall_x(section_x, wall_length),
            self.height_at_wall_x(section_x + section_width, wall_length),
        )
    }

    /// Taper for a section's back and sides, or `None` when the ceiling is
    /// effectively level across it.
    pub fn calculate_section_taper(
        &self,
        section_x: f64,
        section_width: f64,
        wall_length: f64,
    ) -> GeometryResult<Option<TaperSpec>> {
        let (left, right) = self.section_edge_heights(section_x, section_width, wall_length);
        if (left - right).abs() <= TAPER_TOLERANCE {
            return Ok(None);
        }

        let taper = if left > right {
            TaperSpec::new(left, right, TaperDirection::LeftToRight)?
        } else {
            TaperSpec::new(right, left, TaperDirection::RightToLeft)?
        };
        Ok(Some(taper))
    }

    /// Lowest ceiling height over a section.
    pub fn lowest_height(&self, section_x: f64, section_width: f64, wall_length: f64) -> f64 {
        let (left, right) = self.section_edge_heights(section_x, section_width, wall_length);
        left.min(right)
    }

    /// Whether every point of the section clears `required` height.
    pub fn check_min_height(
        &self,
        section_x: f64,
        section_width: f64,
        wall_length: f64,
        required: f64,
    ) -> bool {
        self.lowest_height(section_x, section_width, wall_length) >= required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slope(angle: f64) -> CeilingSlope {
        CeilingSlope::new(angle, 96.0, SlopeDirection::LeftToRight, 24.0).unwrap()
    }

    #[test]
    fn test_height_falls_with_tangent() {
        let ceiling = slope(45.0);
        assert!((ceiling.height_at_position(10.0) - 86.0).abs() < 1e-9);
    }

    #[test]
    fn test_height_clamped_to_min() {
        let ceiling = slope(45.0);
        assert_eq!(ceiling.height_at_position(200.0), 24.0);
    }

    #[test]
    fn test_right_to_left_measures_from_right_end() {
        let ceiling = CeilingSlope::new(45.0, 96.0, SlopeDirection::RightToLeft, 0.0).unwrap();
        let (left, right) = ceiling.section_edge_heights(60.0, 20.0, 100.0);
        assert!((left - 56.0).abs() < 1e-9);
        assert!((right - 76.0).abs() < 1e-9);

        let taper = ceiling.calculate_section_taper(60.0, 20.0, 100.0).unwrap().unwrap();
        assert_eq!(taper.direction, TaperDirection::RightToLeft);
        assert!(taper.start_height > taper.end_height);
    }

    #[test]
    fn test_taper_threshold() {
        // 0.0005" drop across one inch stays square
        let shallow = slope(0.0005f64.atan().to_degrees());
        assert!(shallow.calculate_section_taper(0.0, 1.0, 100.0).unwrap().is_none());

        let steeper = slope(0.002f64.atan().to_degrees());
        let taper = steeper.calculate_section_taper(0.0, 1.0, 100.0).unwrap().unwrap();
        assert!(taper.start_height > taper.end_height);
        assert_eq!(taper.direction, TaperDirection::LeftToRight);
    }

    #[test]
    fn test_check_min_height() {
        let ceiling = slope(30.0);
        assert!(ceiling.check_min_height(0.0, 24.0, 120.0, 80.0));
        assert!(!ceiling.check_min_height(60.0, 24.0, 120.0, 80.0));
    }

    #[test]
    fn test_rejects_bad_slope() {
        assert!(CeilingSlope::new(90.0, 96.0, SlopeDirection::LeftToRight, 0.0).is_err());
        assert!(CeilingSlope::new(30.0, 0.0, SlopeDirection::LeftToRight, 0.0).is_err());
        assert!(CeilingSlope::new(30.0, 50.0, SlopeDirection::LeftToRight, 60.0).is_err());
    }
}
