//! Arch curve geometry
//!
//! An arch header spans an opening and has its lower edge cut to a curve.
//! The curve starts at the spring line at both ends of the opening and rises
//! to its apex at the centre. Three curve families are supported:
//!
//! - **Full round**: a circular arc, semicircle when the radius is `width/2`
//! - **Segmental**: a shallow circular arc whose radius is at least `width/2`
//! - **Elliptical**: half an ellipse, radius is the vertical semi-axis
//!
//! Heights are measured from the bottom of the header stock. The stock hangs
//! `spring_height` below the spring line at its ends, so the curve height at
//! offset `x` from centre is `spring_height + curve(x)`.

use cabinetkit_core::error::{ensure_non_negative, GeometryError, GeometryResult};
use cabinetkit_core::AutoOr;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Curve family of an arch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArchType {
    #[default]
    FullRound,
    Segmental,
    Elliptical,
}

impl fmt::Display for ArchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchType::FullRound => write!(f, "full_round"),
            ArchType::Segmental => write!(f, "segmental"),
            ArchType::Elliptical => write!(f, "elliptical"),
        }
    }
}

impl FromStr for ArchType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full_round" | "round" => Ok(ArchType::FullRound),
            "segmental" => Ok(ArchType::Segmental),
            "elliptical" | "ellipse" => Ok(ArchType::Elliptical),
            other => Err(GeometryError::invalid(
                "arch_type",
                format!("unknown arch type '{}'", other),
            )),
        }
    }
}

/// Parameters of one arch curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchConfig {
    pub arch_type: ArchType,
    /// Circle radius, or the vertical semi-axis for elliptical arches.
    pub radius: AutoOr<f64>,
    /// Straight drop of the header below the spring line at its ends.
    pub spring_height: f64,
    /// Solid stock left above the apex of the curve.
    pub header_margin: f64,
}

impl Default for ArchConfig {
    fn default() -> Self {
        Self {
            arch_type: ArchType::FullRound,
            radius: AutoOr::Auto,
            spring_height: 0.0,
            header_margin: 1.5,
        }
    }
}

impl ArchConfig {
    pub fn new(arch_type: ArchType, radius: AutoOr<f64>) -> Self {
        Self {
            arch_type,
            radius,
            ..Self::default()
        }
    }

    pub fn with_spring_height(mut self, spring_height: f64) -> GeometryResult<Self> {
        self.spring_height = ensure_non_negative("spring_height", spring_height)?;
        Ok(self)
    }

    pub fn with_header_margin(mut self, header_margin: f64) -> GeometryResult<Self> {
        self.header_margin = ensure_non_negative("header_margin", header_margin)?;
        Ok(self)
    }

    /// Resolved radius for an opening; `"auto"` is half the opening width.
    pub fn calculate_radius(&self, opening_width: f64) -> f64 {
        self.radius.resolve(|| opening_width / 2.0)
    }

    /// Whether a segmental arch's radius can span the opening.
    pub fn is_segment_possible(&self, opening_width: f64) -> bool {
        self.arch_type != ArchType::Segmental
            || self.calculate_radius(opening_width) >= opening_width / 2.0
    }

    /// Height of the curve's apex above the spring line.
    pub fn calculate_rise(&self, opening_width: f64) -> f64 {
        let radius = self.calculate_radius(opening_width);
        let half_width = opening_width / 2.0;
        match self.arch_type {
            ArchType::FullRound | ArchType::Elliptical => radius,
            ArchType::Segmental => {
                if radius < half_width {
                    warn!(
                        radius,
                        half_width, "segmental arch radius cannot span opening, using flat header"
                    );
                    0.0
                } else {
                    radius - (radius * radius - half_width * half_width).sqrt()
                }
            }
        }
    }

    /// Curve height above the bottom of the header stock at offset `x` from
    /// the opening centre.
    pub fn calculate_upright_extension(&self, x: f64, opening_width: f64) -> f64 {
        self.spring_height + self.curve_height(x, opening_width)
    }

    /// Curve height above the spring line at offset `x` from centre.
    fn curve_height(&self, x: f64, opening_width: f64) -> f64 {
        let radius = self.calculate_radius(opening_width);
        let half_width = opening_width / 2.0;
        if radius <= 0.0 || x.abs() > half_width {
            return 0.0;
        }

        match self.arch_type {
            ArchType::FullRound => {
                let under = radius * radius - x * x;
                if under > 0.0 {
                    under.sqrt()
                } else {
                    0.0
                }
            }
            ArchType::Segmental => {
                let rise = self.calculate_rise(opening_width);
                if rise <= 0.0 {
                    return 0.0;
                }
                // Shift the circle down so its chord sits on the spring line
                ((radius * radius - x * x).max(0.0).sqrt() - (radius - rise)).max(0.0)
            }
            ArchType::Elliptical => {
                if half_width <= 0.0 {
                    return 0.0;
                }
                let ratio = x / half_width;
                radius * (1.0 - ratio * ratio).max(0.0).sqrt()
            }
        }
    }

    /// Height of the header stock needed for an opening.
    pub fn header_height(&self, opening_width: f64) -> f64 {
        self.spring_height + self.calculate_rise(opening_width) + self.header_margin
    }

    /// Sample `count` evenly spaced points along the curve, left to right.
    ///
    /// Points are `(x, height)` with `x` measured from the left end of the
    /// opening, suitable for a cutting template.
    pub fn curve_points(&self, opening_width: f64, count: usize) -> GeometryResult<Vec<(f64, f64)>> {
        if count < 2 {
            return Err(GeometryError::invalid(
                "curve_points",
                format!("need at least 2 points, got {}", count),
            ));
        }
        let half_width = opening_width / 2.0;
        let step = opening_width / (count - 1) as f64;

        Ok((0..count)
            .map(|i| {
                let offset = -half_width + step * i as f64;
                (
                    offset + half_width,
                    self.calculate_upright_extension(offset, opening_width),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_full_round_auto_radius() {
        let arch = ArchConfig::default().with_spring_height(2.0).unwrap();
        assert_eq!(arch.calculate_radius(30.0), 15.0);
        assert_eq!(arch.calculate_rise(30.0), 15.0);
        assert!((arch.calculate_upright_extension(0.0, 30.0) - 17.0).abs() < EPS);
        // at the spring points the curve meets the spring line
        assert!((arch.calculate_upright_extension(15.0, 30.0) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_full_round_extension_is_circle() {
        let arch = ArchConfig::default();
        let ext = arch.calculate_upright_extension(9.0, 30.0);
        assert!((ext - 12.0).abs() < EPS);
    }

    #[test]
    fn test_segmental_rise() {
        let arch = ArchConfig::new(ArchType::Segmental, AutoOr::Value(25.0));
        // 25 - sqrt(625 - 225) = 5
        assert!((arch.calculate_rise(30.0) - 5.0).abs() < EPS);
        assert!((arch.calculate_upright_extension(0.0, 30.0) - 5.0).abs() < EPS);
        assert!(arch.calculate_upright_extension(15.0, 30.0).abs() < EPS);
    }

    #[test]
    fn test_segmental_degrades_to_flat() {
        let arch = ArchConfig::new(ArchType::Segmental, AutoOr::Value(10.0));
        assert!(!arch.is_segment_possible(30.0));
        assert_eq!(arch.calculate_rise(30.0), 0.0);
        assert_eq!(arch.calculate_upright_extension(0.0, 30.0), 0.0);
    }

    #[test]
    fn test_elliptical() {
        let arch = ArchConfig::new(ArchType::Elliptical, AutoOr::Value(6.0));
        assert_eq!(arch.calculate_rise(40.0), 6.0);
        assert!((arch.calculate_upright_extension(0.0, 40.0) - 6.0).abs() < EPS);
        // b * sqrt(1 - (10/20)^2)
        let expected = 6.0 * (0.75f64).sqrt();
        assert!((arch.calculate_upright_extension(10.0, 40.0) - expected).abs() < EPS);
    }

    #[test]
    fn test_header_height() {
        let arch = ArchConfig::default()
            .with_spring_height(1.0)
            .unwrap()
            .with_header_margin(2.0)
            .unwrap();
        assert_eq!(arch.header_height(24.0), 15.0);
    }

    #[test]
    fn test_curve_points_span_opening() {
        let arch = ArchConfig::default();
        let points = arch.curve_points(20.0, 5).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].0, 0.0);
        assert!((points[4].0 - 20.0).abs() < EPS);
        assert!((points[2].1 - 10.0).abs() < EPS);
        assert!(points[0].1.abs() < EPS);
        assert!(arch.curve_points(20.0, 1).is_err());
    }

    #[test]
    fn test_arch_type_parsing() {
        assert_eq!("segmental".parse::<ArchType>().unwrap(), ArchType::Segmental);
        assert!("gothic".parse::<ArchType>().is_err());
    }
}
