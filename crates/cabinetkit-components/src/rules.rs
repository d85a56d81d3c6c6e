//! Hardware and sizing rules shared by several components.

use cabinetkit_core::{
    ComponentContext, GeometryResult, HardwareItem, MaterialSpec, Panel, PanelType,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hinges a door of the given height needs.
///
/// Under 40" takes two, up to and including 60" takes three, taller doors four.
pub fn hinge_count(door_height: f64) -> u32 {
    if door_height < 40.0 {
        2
    } else if door_height <= 60.0 {
        3
    } else {
        4
    }
}

/// Distance of the outer hinges from the door's top and bottom edges.
pub const HINGE_INSET: f64 = 3.0;

/// Hinge centre heights measured from the bottom of the door, evenly spread
/// between the two inset positions.
pub fn hinge_positions(door_height: f64) -> Vec<f64> {
    let count = hinge_count(door_height);
    let span = (door_height - 2.0 * HINGE_INSET).max(0.0);
    let step = span / f64::from(count - 1);
    (0..count).map(|i| HINGE_INSET + step * f64::from(i)).collect()
}

/// Standard drawer slide lengths, longest first.
pub const SLIDE_LENGTHS: [f64; 8] = [24.0, 22.0, 20.0, 18.0, 16.0, 14.0, 12.0, 10.0];

/// Clearance left behind a drawer slide.
pub const SLIDE_REAR_CLEARANCE: f64 = 1.0;

/// Longest standard slide that fits a section of the given depth.
pub fn auto_slide_length(depth: f64) -> Option<f64> {
    SLIDE_LENGTHS
        .into_iter()
        .find(|length| *length + SLIDE_REAR_CLEARANCE <= depth)
}

/// Door and drawer front overlay style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    #[default]
    Full,
    Half,
    Inset,
}

impl Overlay {
    /// How far a front extends past the opening on each side.
    pub fn extension(&self, thickness: f64) -> f64 {
        match self {
            Overlay::Full => thickness,
            Overlay::Half => thickness / 2.0,
            Overlay::Inset => 0.0,
        }
    }

    /// Name of the matching hinge.
    pub fn hinge_name(&self) -> &'static str {
        match self {
            Overlay::Full => "Concealed hinge, full overlay",
            Overlay::Half => "Concealed hinge, half overlay",
            Overlay::Inset => "Concealed hinge, inset",
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overlay::Full => write!(f, "full"),
            Overlay::Half => write!(f, "half"),
            Overlay::Inset => write!(f, "inset"),
        }
    }
}

/// Door or drawer handle style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    #[default]
    Pull,
    Knob,
    None,
}

impl Handle {
    /// Hardware line for `quantity` handles, if this style needs any.
    pub fn item(&self, quantity: u32) -> Option<HardwareItem> {
        match self {
            Handle::Pull => Some(HardwareItem::new("Pull handle", quantity)),
            Handle::Knob => Some(HardwareItem::new("Knob", quantity)),
            Handle::None => None,
        }
    }
}

/// Side the door hinges on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HingeSide {
    #[default]
    Left,
    Right,
}

impl HingeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            HingeSide::Left => "left",
            HingeSide::Right => "right",
        }
    }
}

/// Sides, top, bottom and a 1/4" back for a box of the given outer size,
/// anchored at the section's position.
pub fn carcass_panels(
    ctx: &ComponentContext,
    width: f64,
    height: f64,
    depth: f64,
) -> GeometryResult<Vec<Panel>> {
    let t = ctx.thickness();
    let origin = ctx.position;
    let inner_width = width - 2.0 * t;
    Ok(vec![
        Panel::new(PanelType::LeftSide, depth, height, ctx.material, origin)?,
        Panel::new(
            PanelType::RightSide,
            depth,
            height,
            ctx.material,
            origin.offset(width - t, 0.0)?,
        )?,
        Panel::new(PanelType::Top, inner_width, depth, ctx.material, origin.offset(t, height - t)?)?,
        Panel::new(PanelType::Bottom, inner_width, depth, ctx.material, origin.offset(t, 0.0)?)?,
        Panel::new(
            PanelType::Back,
            inner_width,
            height - 2.0 * t,
            MaterialSpec::standard_1_4(),
            origin.offset(t, t)?,
        )?,
    ])
}
