//! Skylight voids and the notches they cut into section tops.

use cabinetkit_core::error::{ensure_non_negative, ensure_positive, GeometryError, GeometryResult};
use cabinetkit_core::{NotchSpec, PanelEdge, LENGTH_EPSILON};
use serde::{Deserialize, Serialize};

/// A skylight shaft projecting down through the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Skylight {
    /// Left edge of the opening along the wall.
    pub position: f64,
    pub width: f64,
    /// How far the shaft reaches below the ceiling line.
    pub projection_depth: f64,
    /// Degrees from horizontal; 90 is a vertical shaft.
    #[serde(default = "vertical")]
    pub projection_angle: f64,
}

fn vertical() -> f64 {
    90.0
}

impl Skylight {
    pub fn new(
        position: f64,
        width: f64,
        projection_depth: f64,
        projection_angle: f64,
    ) -> GeometryResult<Self> {
        ensure_non_negative("skylight position", position)?;
        ensure_positive("skylight width", width)?;
        ensure_positive("skylight projection_depth", projection_depth)?;
        if !(projection_angle.is_finite() && projection_angle > 0.0 && projection_angle <= 90.0) {
            return Err(GeometryError::OutOfRange {
                name: "skylight projection_angle".to_string(),
                value: projection_angle,
                min: 0.0,
                max: 90.0,
            });
        }
        Ok(Self {
            position,
            width,
            projection_depth,
            projection_angle,
        })
    }

    /// Total widening of the void at `depth` in front of the wall.
    pub fn expansion_at_depth(&self, depth: f64) -> f64 {
        depth * (90.0 - self.projection_angle).to_radians().tan()
    }

    /// `(left, right)` extent of the void at a cabinet depth, along the wall.
    pub fn void_at_depth(&self, depth: f64) -> (f64, f64) {
        let half = self.expansion_at_depth(depth) / 2.0;
        (self.position - half, self.position + self.width + half)
    }

    /// Whether the void at `depth` overlaps the section's span.
    pub fn intersects_section(&self, section_x: f64, section_width: f64, depth: f64) -> bool {
        let (left, right) = self.void_at_depth(depth);
        left < section_x + section_width - LENGTH_EPSILON && right > section_x + LENGTH_EPSILON
    }

    /// Notch in the section's top panel, in section-local coordinates.
    pub fn notch_for_section(
        &self,
        section_x: f64,
        section_width: f64,
        depth: f64,
    ) -> GeometryResult<Option<NotchSpec>> {
        if !self.intersects_section(section_x, section_width, depth) {
            return Ok(None);
        }
        let (left, right) = self.void_at_depth(depth);
        let start = left.max(section_x) - section_x;
        let end = right.min(section_x + section_width) - section_x;
        NotchSpec::new(start, end - start, self.projection_depth, PanelEdge::Top).map(Some)
    }
}

/// Every notch a set of skylights cuts into one section, ordered along the section.
pub fn calculate_skylight_notches(
    skylights: &[Skylight],
    section_x: f64,
    section_width: f64,
    depth: f64,
) -> GeometryResult<Vec<NotchSpec>> {
    let mut notches = Vec::new();
    for skylight in skylights {
        if let Some(notch) = skylight.notch_for_section(section_x, section_width, depth)? {
            notches.push(notch);
        }
    }
    notches.sort_by(|a, b| a.x_offset.total_cmp(&b.x_offset));
    Ok(notches)
}
