//! Cut metadata attached to panels and manufacturing records exchanged
//! through [`crate::GenerationResult::metadata`].

use super::panel::{PanelEdge, PanelType};
use crate::error::{
    ensure_non_negative, ensure_positive, GeometryError, GeometryResult,
};
use serde::{Deserialize, Serialize};

/// A bevel or mitre along one edge of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleCut {
    pub edge: PanelEdge,
    /// Degrees off square, strictly between 0 and 90.
    pub angle: f64,
    /// `true` for a bevel through the thickness, `false` for a mitre across the face.
    pub bevel: bool,
}

impl AngleCut {
    pub fn new(edge: PanelEdge, angle: f64, bevel: bool) -> GeometryResult<Self> {
        if !(angle.is_finite() && angle > 0.0 && angle < 90.0) {
            return Err(GeometryError::OutOfRange {
                name: "angle cut".to_string(),
                value: angle,
                min: 0.0,
                max: 90.0,
            });
        }
        Ok(Self { edge, angle, bevel })
    }
}

/// Which edge of a tapered panel is the taller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaperDirection {
    /// The left edge is taller; the top edge falls moving right.
    LeftToRight,
    /// The right edge is taller; the top edge falls moving left.
    RightToLeft,
}

/// A panel whose top edge runs from `start_height` down to `end_height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaperSpec {
    pub start_height: f64,
    pub end_height: f64,
    pub direction: TaperDirection,
}

impl TaperSpec {
    /// Create a taper; `start_height` must be strictly greater than `end_height`.
    pub fn new(start_height: f64, end_height: f64, direction: TaperDirection) -> GeometryResult<Self> {
        ensure_positive("taper start_height", start_height)?;
        ensure_positive("taper end_height", end_height)?;
        if start_height <= end_height {
            return Err(GeometryError::InvertedRange {
                name: "taper".to_string(),
                start: start_height,
                end: end_height,
            });
        }
        Ok(Self {
            start_height,
            end_height,
            direction,
        })
    }

    pub fn drop(&self) -> f64 {
        self.start_height - self.end_height
    }

    /// Heights at the (left, right) edges.
    pub fn edge_heights(&self) -> (f64, f64) {
        match self.direction {
            TaperDirection::LeftToRight => (self.start_height, self.end_height),
            TaperDirection::RightToLeft => (self.end_height, self.start_height),
        }
    }
}

/// A rectangular notch cut into one edge of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotchSpec {
    /// Offset of the notch along the edge, from the panel's left end.
    pub x_offset: f64,
    pub width: f64,
    pub depth: f64,
    pub edge: PanelEdge,
}

impl NotchSpec {
    pub fn new(x_offset: f64, width: f64, depth: f64, edge: PanelEdge) -> GeometryResult<Self> {
        ensure_non_negative("notch x_offset", x_offset)?;
        ensure_positive("notch width", width)?;
        ensure_positive("notch depth", depth)?;
        Ok(Self {
            x_offset,
            width,
            depth,
            edge,
        })
    }

    pub fn end(&self) -> f64 {
        self.x_offset + self.width
    }
}

/// Non-rectangular cutting instructions for one panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CutMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub angle_cuts: Vec<AngleCut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taper: Option<TaperSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notches: Vec<NotchSpec>,
}

impl CutMetadata {
    pub fn is_empty(&self) -> bool {
        self.angle_cuts.is_empty() && self.taper.is_none() && self.notches.is_empty()
    }

    pub fn with_angle_cut(mut self, cut: AngleCut) -> Self {
        self.angle_cuts.push(cut);
        self
    }

    pub fn with_taper(mut self, taper: TaperSpec) -> Self {
        self.taper = Some(taper);
        self
    }

    pub fn with_notches(mut self, notches: impl IntoIterator<Item = NotchSpec>) -> Self {
        self.notches.extend(notches);
        self
    }
}

/// A dado groove a mating panel must receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DadoSpec {
    /// Identifier of the panel to be grooved (`"left_side"`, `"right_side"`).
    pub panel_id: String,
    /// Height of the groove's lower edge above the panel bottom.
    pub position: f64,
    /// Groove width, normally the shelf thickness.
    pub width: f64,
    pub depth: f64,
    /// Groove length from the front edge; `None` runs through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

/// A column grid of shelf-pin holes drilled into one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinHolePattern {
    pub panel_id: String,
    /// Distance of each hole column from the panel's front edge.
    pub columns: Vec<f64>,
    pub start_height: f64,
    pub spacing: f64,
    pub count: u32,
    pub hole_diameter: f64,
    pub hole_depth: f64,
}

impl PinHolePattern {
    /// Height of the last hole in each column.
    pub fn end_height(&self) -> f64 {
        self.start_height + self.spacing * self.count.saturating_sub(1) as f64
    }

    pub fn total_holes(&self) -> u32 {
        self.count * self.columns.len() as u32
    }
}

/// Shape of a cutout through a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutoutShape {
    Circle,
    Rectangle,
    Slot,
}

/// A through-cut (grommet, outlet box, vent, light recess) in a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoutSpec {
    pub panel: PanelType,
    pub shape: CutoutShape,
    /// Centre of the cutout in panel coordinates.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pocket depth; `None` cuts through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl CutoutSpec {
    pub fn circle(panel: PanelType, x: f64, y: f64, diameter: f64) -> GeometryResult<Self> {
        ensure_positive("cutout diameter", diameter)?;
        Ok(Self {
            panel,
            shape: CutoutShape::Circle,
            x,
            y,
            width: diameter,
            height: diameter,
            depth: None,
            purpose: None,
        })
    }

    pub fn rectangle(
        panel: PanelType,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> GeometryResult<Self> {
        ensure_positive("cutout width", width)?;
        ensure_positive("cutout height", height)?;
        Ok(Self {
            panel,
            shape: CutoutShape::Rectangle,
            x,
            y,
            width,
            height,
            depth: None,
            purpose: None,
        })
    }

    pub fn slot(panel: PanelType, x: f64, y: f64, length: f64, width: f64) -> GeometryResult<Self> {
        let mut cutout = Self::rectangle(panel, x, y, length, width)?;
        cutout.shape = CutoutShape::Slot;
        Ok(cutout)
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Open area in square inches.
    pub fn area(&self) -> f64 {
        match self.shape {
            CutoutShape::Circle => std::f64::consts::PI * (self.width / 2.0).powi(2),
            CutoutShape::Rectangle => self.width * self.height,
            CutoutShape::Slot => {
                // rectangle with semicircular ends
                let radius = self.height.min(self.width) / 2.0;
                let straight = (self.width.max(self.height) - 2.0 * radius).max(0.0);
                straight * 2.0 * radius + std::f64::consts::PI * radius * radius
            }
        }
    }

    /// Axis-aligned extent (left, bottom, right, top) in panel coordinates.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (
            self.x - self.width / 2.0,
            self.y - self.height / 2.0,
            self.x + self.width / 2.0,
            self.y + self.height / 2.0,
        )
    }

    /// Whether two cutouts on the same panel overlap.
    pub fn overlaps(&self, other: &CutoutSpec) -> bool {
        if self.panel != other.panel {
            return false;
        }
        let (l1, b1, r1, t1) = self.extent();
        let (l2, b2, r2, t2) = other.extent();
        l1 < r2 && l2 < r1 && b1 < t2 && b2 < t1
    }
}
