//! Services routed through cabinets: lighting, outlets, cable grommets and
//! ventilation.
//!
//! These components add no structural panels of their own (apart from an
//! optional wire chase). They describe cutouts in one of the section's
//! carcass panels, in that panel's own coordinates.

use crate::component::ConfiguredComponent;
use crate::error::ComponentResult;
use cabinetkit_core::{
    ComponentContext, CutoutSpec, GenerationResult, GeometryResult, HardwareItem, Panel,
    PanelType, ValidationResult,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Clear stock kept between a cutout and the edge of its panel.
pub const EDGE_MARGIN: f64 = 1.0;

/// The carcass panel a cutout is made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MountPanel {
    #[default]
    Back,
    Bottom,
    Top,
    LeftSide,
    RightSide,
}

impl MountPanel {
    pub fn panel_type(&self) -> PanelType {
        match self {
            MountPanel::Back => PanelType::Back,
            MountPanel::Bottom => PanelType::Bottom,
            MountPanel::Top => PanelType::Top,
            MountPanel::LeftSide => PanelType::LeftSide,
            MountPanel::RightSide => PanelType::RightSide,
        }
    }

    /// Face size of the panel in its own (x, y) coordinates.
    pub fn extent(&self, ctx: &ComponentContext) -> (f64, f64) {
        match self {
            MountPanel::Back => (ctx.width, ctx.height),
            MountPanel::Bottom | MountPanel::Top => (ctx.width, ctx.depth),
            MountPanel::LeftSide | MountPanel::RightSide => (ctx.depth, ctx.height),
        }
    }

    fn is_horizontal(&self) -> bool {
        matches!(self, MountPanel::Bottom | MountPanel::Top)
    }
}

impl fmt::Display for MountPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.panel_type().as_str().replace('_', " "))
    }
}

/// True when a `width` x `height` cutout centred at (x, y) keeps
/// [`EDGE_MARGIN`] inside a panel of the given extent.
fn fits(extent: (f64, f64), x: f64, y: f64, width: f64, height: f64) -> bool {
    x - width / 2.0 >= EDGE_MARGIN
        && x + width / 2.0 <= extent.0 - EDGE_MARGIN
        && y - height / 2.0 >= EDGE_MARGIN
        && y + height / 2.0 <= extent.1 - EDGE_MARGIN
}

/// `count` centres spread evenly across `length`.
fn spread(count: u32, length: f64) -> Vec<f64> {
    let step = length / f64::from(count + 1);
    (1..=count).map(|i| step * f64::from(i)).collect()
}

// =============================================================================
// Lighting
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LightType {
    #[default]
    Puck,
    Strip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub light_type: LightType,
    pub count: u32,
    pub puck_diameter: f64,
    pub channel_width: f64,
    pub channel_depth: f64,
    pub location: MountPanel,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            light_type: LightType::Puck,
            count: 2,
            puck_diameter: 2.5,
            channel_width: 0.5,
            channel_depth: 0.25,
            location: MountPanel::Bottom,
        }
    }
}

pub const PUCK_WATTS: f64 = 3.0;
pub const STRIP_WATTS_PER_FOOT: f64 = 4.4;

/// Recessed puck lights or an LED strip channel.
#[derive(Debug, Default)]
pub struct Lighting;

impl ConfiguredComponent for Lighting {
    type Config = LightingConfig;
    const NAME: &'static str = "lighting";

    fn check(&self, config: &LightingConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let (width, _) = config.location.extent(ctx);
        match config.light_type {
            LightType::Puck => {
                if !(1..=12).contains(&config.count) {
                    result.error(format!("count must be between 1 and 12, got {}", config.count));
                } else if result.require_range("puck_diameter", config.puck_diameter, 1.0, 4.0)
                    && f64::from(config.count) * (config.puck_diameter + EDGE_MARGIN) > width
                {
                    result.error(format!(
                        "{} pucks do not fit across the {}",
                        config.count, config.location
                    ));
                }
            }
            LightType::Strip => {
                result.require_positive("channel_width", config.channel_width);
                if result.require_positive("channel_depth", config.channel_depth)
                    && config.channel_depth >= ctx.thickness()
                {
                    result.error("channel_depth must be less than the panel thickness");
                }
                if width <= 2.0 * EDGE_MARGIN {
                    result.error("panel is too narrow for an LED channel");
                }
            }
        }
        if !config.location.is_horizontal() {
            result.warning(format!("lights mounted in the {} will shine sideways", config.location));
        }
        result
    }

    fn build(&self, config: &LightingConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let panel = config.location.panel_type();
        let (width, height) = config.location.extent(ctx);

        let mut result = GenerationResult::new();
        let watts = match config.light_type {
            LightType::Puck => {
                let cutouts = spread(config.count, width)
                    .into_iter()
                    .map(|x| {
                        CutoutSpec::circle(panel, x, height / 2.0, config.puck_diameter)
                            .map(|c| c.with_purpose("puck light"))
                    })
                    .collect::<GeometryResult<Vec<_>>>()?;
                result.insert_metadata("cutouts", cutouts);
                result.add_hardware(HardwareItem::new(
                    format!("LED puck light {}\"", config.puck_diameter),
                    config.count,
                ));
                f64::from(config.count) * PUCK_WATTS
            }
            LightType::Strip => {
                let length = width - 2.0 * EDGE_MARGIN;
                let channel = CutoutSpec::slot(
                    panel,
                    width / 2.0,
                    EDGE_MARGIN + config.channel_width,
                    length,
                    config.channel_width,
                )?
                .with_depth(config.channel_depth)
                .with_purpose("led channel");
                result.insert_metadata("cutouts", vec![channel]);
                result.add_hardware(
                    HardwareItem::new("LED strip", 1).with_notes(format!("{:.2}\" run", length)),
                );
                result.add_hardware(HardwareItem::new("LED channel diffuser", 1));
                length / 12.0 * STRIP_WATTS_PER_FOOT
            }
        };
        result.add_hardware(
            HardwareItem::new("LED driver 12V", 1).with_notes(format!("{:.0}W minimum", watts.ceil())),
        );
        result.insert_metadata("light_watts", watts);
        Ok(result)
    }
}

// =============================================================================
// Outlets
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutletKind {
    #[default]
    Duplex,
    Usb,
    Data,
}

impl OutletKind {
    /// Rough-in cutout (width, height) for the box or bracket.
    pub fn cutout(&self) -> (f64, f64) {
        match self {
            OutletKind::Duplex | OutletKind::Usb => (2.25, 3.75),
            OutletKind::Data => (2.0, 3.5),
        }
    }

    fn hardware_name(&self) -> &'static str {
        match self {
            OutletKind::Duplex => "Old-work outlet box, duplex",
            OutletKind::Usb => "Old-work outlet box, USB",
            OutletKind::Data => "Low-voltage mounting bracket",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutletSpec {
    pub x: f64,
    pub y: f64,
    pub kind: OutletKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutletsConfig {
    pub outlets: Vec<OutletSpec>,
    pub panel: MountPanel,
}

/// Electrical and data box cutouts.
#[derive(Debug, Default)]
pub struct Outlets;

impl ConfiguredComponent for Outlets {
    type Config = OutletsConfig;
    const NAME: &'static str = "outlets";

    fn check(&self, config: &OutletsConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if config.outlets.is_empty() {
            result.warning("no outlets listed");
        }
        let extent = config.panel.extent(ctx);
        for (i, outlet) in config.outlets.iter().enumerate() {
            let (w, h) = outlet.kind.cutout();
            if !fits(extent, outlet.x, outlet.y, w, h) {
                result.error(format!(
                    "outlet {} at ({}, {}) does not fit inside the {}",
                    i + 1,
                    outlet.x,
                    outlet.y,
                    config.panel
                ));
            }
        }
        for (i, a) in config.outlets.iter().enumerate() {
            for (j, b) in config.outlets.iter().enumerate().skip(i + 1) {
                let (aw, ah) = a.kind.cutout();
                let (bw, bh) = b.kind.cutout();
                if (a.x - b.x).abs() < (aw + bw) / 2.0 && (a.y - b.y).abs() < (ah + bh) / 2.0 {
                    result.error(format!("outlets {} and {} overlap", i + 1, j + 1));
                }
            }
        }
        if config.panel.is_horizontal() {
            result.warning(format!("outlets in the {} collect debris", config.panel));
        }
        result
    }

    fn build(&self, config: &OutletsConfig, _ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let panel = config.panel.panel_type();
        let cutouts = config
            .outlets
            .iter()
            .map(|outlet| {
                let (w, h) = outlet.kind.cutout();
                CutoutSpec::rectangle(panel, outlet.x, outlet.y, w, h).map(|c| c.with_purpose("outlet"))
            })
            .collect::<GeometryResult<Vec<_>>>()?;

        let mut counts: BTreeMap<OutletKind, u32> = BTreeMap::new();
        for outlet in &config.outlets {
            *counts.entry(outlet.kind).or_default() += 1;
        }

        let mut result = GenerationResult::new();
        for (kind, count) in counts {
            result.add_hardware(HardwareItem::new(kind.hardware_name(), count));
        }
        result.insert_metadata("cutouts", cutouts);
        Ok(result)
    }
}

// =============================================================================
// Grommets
// =============================================================================

/// Either the keyword `"auto"` or explicit x positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrommetPositions {
    Explicit(Vec<f64>),
    Keyword(String),
}

impl Default for GrommetPositions {
    fn default() -> Self {
        GrommetPositions::Keyword("auto".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrommetsConfig {
    pub count: u32,
    pub diameter: f64,
    pub panel: MountPanel,
    pub positions: GrommetPositions,
    pub cable_chase: bool,
}

impl Default for GrommetsConfig {
    fn default() -> Self {
        Self {
            count: 1,
            diameter: 2.5,
            panel: MountPanel::Back,
            positions: GrommetPositions::default(),
            cable_chase: false,
        }
    }
}

impl GrommetsConfig {
    fn centres(&self, width: f64) -> Vec<f64> {
        match &self.positions {
            GrommetPositions::Explicit(xs) => xs.clone(),
            GrommetPositions::Keyword(_) => spread(self.count, width),
        }
    }

    /// Grommets sit near the top of vertical panels and the back of
    /// horizontal ones.
    fn row(&self, extent: (f64, f64)) -> f64 {
        extent.1 - EDGE_MARGIN - self.diameter
    }
}

pub const CABLE_CHASE_WIDTH: f64 = 3.0;

/// Cable pass-through grommets with an optional wire chase.
#[derive(Debug, Default)]
pub struct Grommets;

impl ConfiguredComponent for Grommets {
    type Config = GrommetsConfig;
    const NAME: &'static str = "grommets";

    fn check(&self, config: &GrommetsConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if !result.require_range("diameter", config.diameter, 1.0, 4.0) {
            return result;
        }
        match &config.positions {
            GrommetPositions::Keyword(word) if word != "auto" => {
                result.error(format!(
                    "positions must be \"auto\" or a list of numbers, got \"{}\"",
                    word
                ));
                return result;
            }
            GrommetPositions::Keyword(_) if config.count == 0 => {
                result.error("count must be at least 1");
                return result;
            }
            GrommetPositions::Explicit(xs) if xs.len() != config.count as usize => {
                result.warning(format!(
                    "{} positions given, count of {} ignored",
                    xs.len(),
                    config.count
                ));
            }
            _ => {}
        }
        let extent = config.panel.extent(ctx);
        let y = config.row(extent);
        for (i, x) in config.centres(extent.0).into_iter().enumerate() {
            if !fits(extent, x, y, config.diameter, config.diameter) {
                result.error(format!("grommet {} at x={} does not fit inside the {}", i + 1, x, config.panel));
            }
        }
        result
    }

    fn build(&self, config: &GrommetsConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let panel = config.panel.panel_type();
        let extent = config.panel.extent(ctx);
        let y = config.row(extent);
        let cutouts = config
            .centres(extent.0)
            .into_iter()
            .map(|x| CutoutSpec::circle(panel, x, y, config.diameter).map(|c| c.with_purpose("grommet")))
            .collect::<GeometryResult<Vec<_>>>()?;

        let mut result = GenerationResult::new();
        result.add_hardware(HardwareItem::new(
            format!("Cable grommet {}\"", config.diameter),
            cutouts.len() as u32,
        ));
        if config.cable_chase {
            result.add_panel(
                Panel::new(
                    PanelType::WireChase,
                    CABLE_CHASE_WIDTH,
                    ctx.height,
                    ctx.material,
                    ctx.position.offset((ctx.width - CABLE_CHASE_WIDTH) / 2.0, 0.0)?,
                )?
                .with_metadata("depth_offset", ctx.depth - CABLE_CHASE_WIDTH)
                .with_label("Cable chase"),
            );
        }
        result.insert_metadata("cutouts", cutouts);
        Ok(result)
    }
}

// =============================================================================
// Ventilation
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VentPattern {
    #[default]
    Slots,
    Holes,
    Grille,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VentilationConfig {
    pub pattern: VentPattern,
    /// Open area needed, in square inches.
    pub required_area: f64,
    pub location: MountPanel,
    pub slot_width: f64,
    pub slot_length: f64,
    pub hole_diameter: f64,
}

impl Default for VentilationConfig {
    fn default() -> Self {
        Self {
            pattern: VentPattern::Slots,
            required_area: 12.0,
            location: MountPanel::Back,
            slot_width: 0.5,
            slot_length: 4.0,
            hole_diameter: 1.0,
        }
    }
}

/// Fraction of a stamped grille's face that is open.
pub const GRILLE_FREE_AREA: f64 = 0.5;

/// Web of solid stock between neighbouring slots or holes.
const WEB: f64 = 0.5;

impl VentilationConfig {
    /// (width, height) of one opening and its open area.
    fn opening(&self) -> (f64, f64, f64) {
        match self.pattern {
            VentPattern::Slots => {
                let r = self.slot_width / 2.0;
                let area = (self.slot_length - self.slot_width).max(0.0) * self.slot_width
                    + std::f64::consts::PI * r * r;
                (self.slot_length, self.slot_width, area)
            }
            VentPattern::Holes => {
                let r = self.hole_diameter / 2.0;
                (self.hole_diameter, self.hole_diameter, std::f64::consts::PI * r * r)
            }
            VentPattern::Grille => {
                let face = self.required_area / GRILLE_FREE_AREA;
                // 4:1 landscape grille
                let width = (face * 4.0).sqrt();
                (width, face / width, self.required_area)
            }
        }
    }

    /// Grid of opening centres packed from the top of the panel, or `None`
    /// when the openings do not fit.
    fn grid(&self, extent: (f64, f64)) -> Option<Vec<(f64, f64)>> {
        let (w, h, area) = self.opening();
        let count = if self.pattern == VentPattern::Grille {
            1
        } else {
            (self.required_area / area).ceil() as usize
        };
        let (pitch_x, pitch_y) = (w + WEB, h + WEB);
        let usable_w = extent.0 - 2.0 * EDGE_MARGIN;
        let usable_h = extent.1 - 2.0 * EDGE_MARGIN;
        let columns = ((usable_w + WEB) / pitch_x).floor() as usize;
        if columns == 0 || count == 0 {
            return None;
        }
        let columns = columns.min(count);
        let rows = count.div_ceil(columns);
        if rows as f64 * pitch_y - WEB > usable_h {
            return None;
        }
        let left = (extent.0 - (columns as f64 * pitch_x - WEB)) / 2.0 + w / 2.0;
        let top = extent.1 - EDGE_MARGIN - h / 2.0;
        Some(
            (0..count)
                .map(|i| {
                    let (row, col) = (i / columns, i % columns);
                    (left + col as f64 * pitch_x, top - row as f64 * pitch_y)
                })
                .collect(),
        )
    }
}

/// Ventilation openings sized to a required free area.
#[derive(Debug, Default)]
pub struct Ventilation;

impl ConfiguredComponent for Ventilation {
    type Config = VentilationConfig;
    const NAME: &'static str = "ventilation";

    fn check(&self, config: &VentilationConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut ok = result.require_positive("required_area", config.required_area);
        match config.pattern {
            VentPattern::Slots => {
                ok &= result.require_positive("slot_width", config.slot_width)
                    & result.require_positive("slot_length", config.slot_length);
                if ok && config.slot_length < config.slot_width {
                    result.error("slot_length must be at least slot_width");
                    ok = false;
                }
            }
            VentPattern::Holes => ok &= result.require_positive("hole_diameter", config.hole_diameter),
            VentPattern::Grille => {}
        }
        if ok && config.grid(config.location.extent(ctx)).is_none() {
            result.error(format!(
                "{} sq in of {:?} venting does not fit in the {}",
                config.required_area, config.pattern, config.location
            ));
        }
        result
    }

    fn build(&self, config: &VentilationConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let panel = config.location.panel_type();
        let (w, h, _) = config.opening();
        let centres = config.grid(config.location.extent(ctx)).unwrap_or_default();
        let cutouts = centres
            .into_iter()
            .map(|(x, y)| {
                let cutout = match config.pattern {
                    VentPattern::Slots => CutoutSpec::slot(panel, x, y, w, h),
                    VentPattern::Holes => CutoutSpec::circle(panel, x, y, w),
                    VentPattern::Grille => CutoutSpec::rectangle(panel, x, y, w, h),
                };
                cutout.map(|c| c.with_purpose("vent"))
            })
            .collect::<GeometryResult<Vec<_>>>()?;

        let mut result = GenerationResult::new();
        let open_area = if config.pattern == VentPattern::Grille {
            result.add_hardware(HardwareItem::new(
                format!("Vent grille {:.1}\" x {:.1}\"", w, h),
                1,
            ));
            config.required_area
        } else {
            cutouts.iter().map(CutoutSpec::area).sum()
        };
        result.insert_metadata("vent_area", open_area);
        result.insert_metadata("cutouts", cutouts);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use serde_json::json;

    fn ctx() -> ComponentContext {
        ComponentContext::new(30.0, 30.0, 23.25).unwrap()
    }

    fn cutouts(result: &GenerationResult) -> &[CutoutSpec] {
        result.metadata("cutouts").and_then(|m| m.as_cutouts()).unwrap()
    }

    #[test]
    fn test_puck_lights() {
        let result = Lighting.generate(&json!({"count": 3}), &ctx()).unwrap();
        let holes = cutouts(&result);
        assert_eq!(holes.len(), 3);
        assert!(holes.iter().all(|c| c.panel == PanelType::Bottom));
        assert_eq!(holes[1].x, 15.0);
        assert_eq!(result.hardware_quantity("LED puck light"), 3);
        assert_eq!(result.metadata("light_watts").and_then(|m| m.as_number()), Some(9.0));
    }

    #[test]
    fn test_strip_channel_depth() {
        let config = json!({"light_type": "strip", "channel_depth": 0.75});
        assert!(!Lighting.validate(&config, &ctx()).is_valid());

        let result = Lighting.generate(&json!({"light_type": "strip"}), &ctx()).unwrap();
        let channel = &cutouts(&result)[0];
        assert_eq!(channel.width, 28.0);
        assert_eq!(channel.depth, Some(0.25));
        assert_eq!(result.hardware_quantity("LED driver"), 1);
    }

    #[test]
    fn test_outlets_fit_and_overlap() {
        let config = json!({"outlets": [
            {"x": 6, "y": 12, "kind": "duplex"},
            {"x": 12, "y": 12, "kind": "data"},
        ]});
        assert!(Outlets.validate(&config, &ctx()).is_valid());
        let result = Outlets.generate(&config, &ctx()).unwrap();
        assert_eq!(cutouts(&result).len(), 2);
        assert_eq!(result.hardware_quantity("Low-voltage mounting bracket"), 1);

        let clash = json!({"outlets": [{"x": 6, "y": 12}, {"x": 7, "y": 13}]});
        assert!(!Outlets.validate(&clash, &ctx()).is_valid());
        let off_panel = json!({"outlets": [{"x": 29.5, "y": 12}]});
        assert!(!Outlets.validate(&off_panel, &ctx()).is_valid());
    }

    #[test]
    fn test_grommet_positions() {
        let auto = Grommets.generate(&json!({"count": 2}), &ctx()).unwrap();
        let xs: Vec<f64> = cutouts(&auto).iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![10.0, 20.0]);
        assert_eq!(auto.hardware_quantity("Cable grommet"), 2);

        let explicit = json!({"positions": [5, 25], "cable_chase": true});
        let result = Grommets.generate(&explicit, &ctx()).unwrap();
        assert_eq!(cutouts(&result)[1].x, 25.0);
        assert_eq!(result.count_of_type(PanelType::WireChase), 1);

        assert!(!Grommets.validate(&json!({"positions": "left"}), &ctx()).is_valid());
    }

    #[test]
    fn test_slot_vents_meet_required_area() {
        let result = Ventilation.generate(&json!({}), &ctx()).unwrap();
        let area = result.metadata("vent_area").and_then(|m| m.as_number()).unwrap();
        assert!(area >= 12.0);
        assert!(cutouts(&result).iter().all(|c| c.panel == PanelType::Back));
    }

    #[test]
    fn test_vent_does_not_fit() {
        let small = ComponentContext::new(6.0, 4.0, 12.0).unwrap();
        let result = Ventilation.validate(&json!({"required_area": 100}), &small);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_grille_is_single_cutout() {
        let result = Ventilation.generate(&json!({"pattern": "grille"}), &ctx()).unwrap();
        assert_eq!(cutouts(&result).len(), 1);
        assert_eq!(result.hardware_quantity("Vent grille"), 1);
    }
}
