//! Decorative trim: arches, scallops, face frames, crown, toe kicks and
//! light rails.

use crate::component::ConfiguredComponent;
use crate::error::ComponentResult;
use cabinetkit_core::{
    AngleCut, AutoOr, ComponentContext, CutMetadata, CutoutSpec, GenerationResult, HardwareItem,
    Panel, PanelEdge, PanelType, ValidationResult,
};
use cabinetkit_geometry::arch::{ArchConfig, ArchType};
use cabinetkit_geometry::scallop::ScallopConfig;
use serde::{Deserialize, Serialize};

// =============================================================================
// Arch
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchComponentConfig {
    pub arch_type: ArchType,
    pub radius: AutoOr<f64>,
    pub spring_height: f64,
    pub header_margin: f64,
    pub curve_points: usize,
}

impl Default for ArchComponentConfig {
    fn default() -> Self {
        Self {
            arch_type: ArchType::FullRound,
            radius: AutoOr::Auto,
            spring_height: 0.0,
            header_margin: 1.5,
            curve_points: 25,
        }
    }
}

impl ArchComponentConfig {
    fn arch(&self) -> ArchConfig {
        ArchConfig {
            arch_type: self.arch_type,
            radius: self.radius,
            spring_height: self.spring_height,
            header_margin: self.header_margin,
        }
    }
}

/// Arched header spanning the top of an opening.
#[derive(Debug, Default)]
pub struct Arch;

impl ConfiguredComponent for Arch {
    type Config = ArchComponentConfig;
    const NAME: &'static str = "arch";

    fn check(&self, config: &ArchComponentConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_non_negative("spring_height", config.spring_height);
        result.require_non_negative("header_margin", config.header_margin);
        if config.curve_points < 2 {
            result.error("curve_points must be at least 2");
        }
        if let AutoOr::Value(radius) = config.radius {
            if result.require_positive("radius", radius)
                && config.arch_type == ArchType::Segmental
                && radius < ctx.width / 2.0
            {
                result.warning(format!(
                    "segmental radius {:.2}\" is less than half the opening; the header will be flat",
                    radius
                ));
            }
        }

        let arch = config.arch();
        let header = arch.header_height(ctx.width);
        if header > ctx.height {
            result.error(format!(
                "arch header of {:.2}\" is taller than the {:.2}\" section",
                header, ctx.height
            ));
        } else if arch.calculate_rise(ctx.width) > 12.0 {
            result.warning("arch rise over 12\" needs glued-up header stock");
        }
        result
    }

    fn build(&self, config: &ArchComponentConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let arch = config.arch();
        let header = arch.header_height(ctx.width);
        let points = arch.curve_points(ctx.width, config.curve_points)?;

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(
                PanelType::ArchHeader,
                ctx.width,
                header,
                ctx.material,
                ctx.position.offset(0.0, (ctx.height - header).max(0.0))?,
            )?
            .with_metadata("arch_type", arch.arch_type.to_string())
            .with_label("Arch header"),
        );
        result.insert_metadata("curve_points", points);
        result.insert_metadata("radius", arch.calculate_radius(ctx.width));
        result.insert_metadata("rise", arch.calculate_rise(ctx.width));
        Ok(result)
    }
}

// =============================================================================
// Scallop
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScallopComponentConfig {
    pub depth: f64,
    pub width: f64,
    pub count: AutoOr<u32>,
    pub valance_height: f64,
    pub points_per_scallop: usize,
}

impl Default for ScallopComponentConfig {
    fn default() -> Self {
        Self {
            depth: 1.5,
            width: 4.0,
            count: AutoOr::Auto,
            valance_height: 4.0,
            points_per_scallop: 12,
        }
    }
}

/// Valance with a scalloped lower edge.
#[derive(Debug, Default)]
pub struct Scallop;

impl ConfiguredComponent for Scallop {
    type Config = ScallopComponentConfig;
    const NAME: &'static str = "scallop valance";

    fn check(&self, config: &ScallopComponentConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let depth_ok = result.require_positive("depth", config.depth);
        let width_ok = result.require_positive("width", config.width);
        if result.require_positive("valance_height", config.valance_height)
            && depth_ok
            && config.depth >= config.valance_height
        {
            result.error("scallop depth must be less than the valance height");
        }
        if config.points_per_scallop < 2 {
            result.error("points_per_scallop must be at least 2");
        }
        if depth_ok && width_ok {
            match ScallopConfig::new(config.depth, config.width, config.count) {
                Ok(scallop) => {
                    let actual = scallop.calculate_actual_width(ctx.width);
                    if (actual - config.width).abs() > config.width * 0.25 {
                        result.warning(format!(
                            "scallops stretched to {:.2}\" from a nominal {:.2}\"",
                            actual, config.width
                        ));
                    }
                }
                Err(e) => result.error(e.to_string()),
            }
        }
        if config.valance_height > ctx.height {
            result.error("valance is taller than the section");
        }
        result
    }

    fn build(
        &self,
        config: &ScallopComponentConfig,
        ctx: &ComponentContext,
    ) -> ComponentResult<GenerationResult> {
        let scallop = ScallopConfig::new(config.depth, config.width, config.count)?;
        let points = scallop.generate_points(ctx.width, config.points_per_scallop)?;

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(
                PanelType::Valance,
                ctx.width,
                config.valance_height,
                ctx.material,
                ctx.position.offset(0.0, (ctx.height - config.valance_height).max(0.0))?,
            )?
            .with_label("Scalloped valance"),
        );
        result.insert_metadata("scallop_points", points);
        result.insert_metadata("scallop_count", scallop.calculate_count(ctx.width));
        result.insert_metadata("scallop_width", scallop.calculate_actual_width(ctx.width));
        Ok(result)
    }
}

// =============================================================================
// Face frame
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceFrameConfig {
    pub stile_width: f64,
    pub rail_width: f64,
    pub mid_stiles: u32,
    pub mid_rails: u32,
}

impl Default for FaceFrameConfig {
    fn default() -> Self {
        Self {
            stile_width: 1.5,
            rail_width: 1.5,
            mid_stiles: 0,
            mid_rails: 0,
        }
    }
}

impl FaceFrameConfig {
    /// Clear (width, height) of each opening.
    pub fn opening(&self, width: f64, height: f64) -> (f64, f64) {
        let stiles = f64::from(2 + self.mid_stiles);
        let rails = f64::from(2 + self.mid_rails);
        (
            (width - stiles * self.stile_width) / f64::from(1 + self.mid_stiles),
            (height - rails * self.rail_width) / f64::from(1 + self.mid_rails),
        )
    }

    /// Pocket screws: two at each rail end and each mid-stile end.
    pub fn pocket_screws(&self) -> u32 {
        let joints = (2 + self.mid_rails) * 2 + self.mid_stiles * 2;
        joints * 2
    }
}

/// Stile and rail frame applied to the cabinet front.
#[derive(Debug, Default)]
pub struct FaceFrame;

impl ConfiguredComponent for FaceFrame {
    type Config = FaceFrameConfig;
    const NAME: &'static str = "face frame";

    fn check(&self, config: &FaceFrameConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let stile_ok = result.require_range("stile_width", config.stile_width, 0.75, 4.0);
        let rail_ok = result.require_range("rail_width", config.rail_width, 0.75, 4.0);
        if stile_ok && rail_ok {
            let (w, h) = config.opening(ctx.width, ctx.height);
            if w <= 0.0 || h <= 0.0 {
                result.error("stiles and rails leave no opening");
            } else if w < 4.0 || h < 4.0 {
                result.warning(format!("face frame openings are only {:.2}\" x {:.2}\"", w, h));
            }
        }
        result
    }

    fn build(&self, config: &FaceFrameConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let (opening_w, opening_h) = config.opening(ctx.width, ctx.height);
        let rail_length = ctx.width - 2.0 * config.stile_width;
        let mid_stile_length = ctx.height - 2.0 * config.rail_width;

        let mut result = GenerationResult::new();
        for (label, x) in [("Left stile", 0.0), ("Right stile", ctx.width - config.stile_width)] {
            result.add_panel(
                Panel::new(
                    PanelType::FaceFrameStile,
                    config.stile_width,
                    ctx.height,
                    ctx.material,
                    ctx.position.offset(x, 0.0)?,
                )?
                .with_label(label),
            );
        }
        for i in 1..=config.mid_stiles {
            let x = f64::from(i) * (opening_w + config.stile_width);
            result.add_panel(
                Panel::new(
                    PanelType::FaceFrameStile,
                    config.stile_width,
                    mid_stile_length,
                    ctx.material,
                    ctx.position.offset(x, config.rail_width)?,
                )?
                .with_label(format!("Mid stile {}", i)),
            );
        }
        let rail_heights = std::iter::once(0.0)
            .chain((1..=config.mid_rails).map(|i| f64::from(i) * (opening_h + config.rail_width)))
            .chain(std::iter::once(ctx.height - config.rail_width));
        for (i, y) in rail_heights.enumerate() {
            result.add_panel(
                Panel::new(
                    PanelType::FaceFrameRail,
                    rail_length,
                    config.rail_width,
                    ctx.material,
                    ctx.position.offset(config.stile_width, y)?,
                )?
                .with_label(format!("Rail {}", i + 1)),
            );
        }

        result.add_hardware(HardwareItem::new("Pocket screw 1-1/4\"", config.pocket_screws()));
        result.insert_metadata("opening_width", opening_w);
        result.insert_metadata("opening_height", opening_h);
        Ok(result)
    }
}

// =============================================================================
// Crown molding
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrownMoldingConfig {
    pub profile_height: f64,
    pub spring_angle: f64,
    pub nailer_width: f64,
    pub return_sides: bool,
}

impl Default for CrownMoldingConfig {
    fn default() -> Self {
        Self {
            profile_height: 3.5,
            spring_angle: 45.0,
            nailer_width: 2.5,
            return_sides: true,
        }
    }
}

impl CrownMoldingConfig {
    /// How far the crown stands out from the cabinet face.
    pub fn projection(&self) -> f64 {
        self.profile_height * self.spring_angle.to_radians().sin()
    }
}

/// Brad spacing along crown and nailers.
const NAIL_SPACING: f64 = 8.0;

/// Crown molding on a nailer strip, with optional side returns.
#[derive(Debug, Default)]
pub struct CrownMolding;

impl ConfiguredComponent for CrownMolding {
    type Config = CrownMoldingConfig;
    const NAME: &'static str = "crown molding";

    fn check(&self, config: &CrownMoldingConfig, _ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_positive("profile_height", config.profile_height);
        result.require_range("spring_angle", config.spring_angle, 30.0, 60.0);
        if result.require_positive("nailer_width", config.nailer_width) && config.nailer_width < 1.0 {
            result.warning("nailers under 1\" give the crown little to fasten to");
        }
        if config.profile_height > 8.0 {
            result.warning("crown profiles over 8\" are usually built up from two pieces");
        }
        result
    }

    fn build(&self, config: &CrownMoldingConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let projection = config.projection();
        let top = ctx.position.offset(0.0, ctx.height)?;
        let mitre = |edge: PanelEdge| AngleCut::new(edge, 45.0, false);
        let bevel = config.spring_angle.min(89.0);

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(PanelType::Nailer, ctx.width, config.nailer_width, ctx.material, top)?
                .with_label("Crown nailer"),
        );

        let front_length = if config.return_sides {
            ctx.width + 2.0 * projection
        } else {
            ctx.width
        };
        let mut front_cuts = CutMetadata::default();
        if config.return_sides {
            front_cuts = front_cuts
                .with_angle_cut(mitre(PanelEdge::Left)?)
                .with_angle_cut(mitre(PanelEdge::Right)?);
        }
        front_cuts = front_cuts.with_angle_cut(AngleCut::new(PanelEdge::Bottom, bevel, true)?);
        result.add_panel(
            Panel::new(PanelType::CrownMolding, front_length, config.profile_height, ctx.material, top)?
                .with_cut_metadata(front_cuts)
                .with_metadata("overhang", (front_length - ctx.width) / 2.0)
                .with_label("Crown front"),
        );

        let mut total_length = front_length + ctx.width;
        if config.return_sides {
            let return_length = ctx.depth + projection;
            let returns = [
                ("Left crown return", ctx.position.x - ctx.thickness()),
                ("Right crown return", ctx.position.x + ctx.width),
            ];
            for (label, side_x) in returns {
                result.add_panel(
                    Panel::new(
                        PanelType::CrownReturn,
                        return_length,
                        config.profile_height,
                        ctx.material,
                        top,
                    )?
                    .with_cut_metadata(CutMetadata::default().with_angle_cut(mitre(PanelEdge::Front)?))
                    .with_metadata("side_x", side_x)
                    .with_label(label),
                );
            }
            total_length += 2.0 * return_length;
        }

        result.add_hardware(HardwareItem::new(
            "18ga brad nail 1-1/4\"",
            (total_length / NAIL_SPACING).ceil() as u32,
        ));
        result.insert_metadata("projection", projection);
        Ok(result)
    }
}

// =============================================================================
// Toe kick
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToeKickConfig {
    pub height: f64,
    pub setback: f64,
    pub vent: bool,
}

impl Default for ToeKickConfig {
    fn default() -> Self {
        Self {
            height: 4.0,
            setback: 3.0,
            vent: false,
        }
    }
}

const TOE_VENT_WIDTH: f64 = 10.0;
const TOE_VENT_HEIGHT: f64 = 2.25;

/// Recessed board closing the space under a base cabinet.
#[derive(Debug, Default)]
pub struct ToeKick;

impl ConfiguredComponent for ToeKick {
    type Config = ToeKickConfig;
    const NAME: &'static str = "toe kick";

    fn check(&self, config: &ToeKickConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_range("height", config.height, 2.0, 6.0);
        if result.require_range("setback", config.setback, 0.0, 6.0) && config.setback < 2.0 {
            result.warning("setback under 2\" leaves little toe room");
        }
        if config.vent && (ctx.width < TOE_VENT_WIDTH + 2.0 || config.height < TOE_VENT_HEIGHT + 0.5) {
            result.error(format!(
                "a {}\" x {}\" vent does not fit this toe kick",
                TOE_VENT_WIDTH, TOE_VENT_HEIGHT
            ));
        }
        result
    }

    fn build(&self, config: &ToeKickConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(PanelType::ToeKick, ctx.width, config.height, ctx.material, ctx.position)?
                .with_metadata("depth_offset", config.setback)
                .with_label("Toe kick"),
        );
        if config.vent {
            let vent = CutoutSpec::rectangle(
                PanelType::ToeKick,
                ctx.width / 2.0,
                config.height / 2.0,
                TOE_VENT_WIDTH,
                TOE_VENT_HEIGHT,
            )?
            .with_purpose("vent");
            result.insert_metadata("cutouts", vec![vent]);
            result.add_hardware(HardwareItem::new("Toe kick vent grille", 1));
        }
        Ok(result)
    }
}

// =============================================================================
// Light rail
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightRailConfig {
    pub height: f64,
    pub led_channel: bool,
}

impl Default for LightRailConfig {
    fn default() -> Self {
        Self {
            height: 1.5,
            led_channel: false,
        }
    }
}

const LED_CHANNEL_WIDTH: f64 = 0.5;
const LED_CHANNEL_DEPTH: f64 = 0.25;

/// Strip under a wall cabinet hiding under-cabinet lights.
#[derive(Debug, Default)]
pub struct LightRail;

impl ConfiguredComponent for LightRail {
    type Config = LightRailConfig;
    const NAME: &'static str = "light rail";

    fn check(&self, config: &LightRailConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_range("height", config.height, 0.75, 4.0);
        if config.led_channel && ctx.width <= 2.0 {
            result.error("section is too narrow for an LED channel");
        }
        result
    }

    fn build(&self, config: &LightRailConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(PanelType::LightRail, ctx.width, config.height, ctx.material, ctx.position)?
                .with_label("Light rail"),
        );
        if config.led_channel {
            let channel_length = ctx.width - 2.0;
            let channel = CutoutSpec::rectangle(
                PanelType::LightRail,
                ctx.width / 2.0,
                config.height / 2.0,
                channel_length,
                LED_CHANNEL_WIDTH,
            )?
            .with_depth(LED_CHANNEL_DEPTH)
            .with_purpose("LED channel");
            result.insert_metadata("cutouts", vec![channel]);
            result.add_hardware(
                HardwareItem::new("LED strip", 1).with_notes(format!("{:.1}\" run", channel_length)),
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use serde_json::json;

    #[test]
    fn test_full_round_arch_header() {
        let ctx = ComponentContext::new(36.0, 30.0, 12.0).unwrap();
        let result = Arch.generate(&json!({}), &ctx).unwrap();
        let header = &result.panels[0];
        assert_eq!(header.height, 19.5);
        assert_eq!(header.position.y, 10.5);
        let points = result.metadata("curve_points").and_then(|m| m.as_points()).unwrap();
        assert_eq!(points.len(), 25);
        assert_eq!(result.metadata("rise").and_then(|m| m.as_number()), Some(18.0));
    }

    #[test]
    fn test_arch_header_too_tall() {
        let ctx = ComponentContext::new(48.0, 20.0, 12.0).unwrap();
        assert!(!Arch.validate(&json!({}), &ctx).is_valid());
        let flat = Arch.validate(&json!({"arch_type": "segmental", "radius": 10}), &ctx);
        assert!(flat.is_valid());
        assert!(flat.warnings.iter().any(|w| w.contains("flat")));
    }

    #[test]
    fn test_scallop_valance() {
        let ctx = ComponentContext::new(18.0, 30.0, 12.0).unwrap();
        let result = Scallop.generate(&json!({}), &ctx).unwrap();
        assert_eq!(result.metadata("scallop_count").and_then(|m| m.as_number()), Some(4.0));
        assert_eq!(result.metadata("scallop_width").and_then(|m| m.as_number()), Some(4.5));
        assert_eq!(result.panels[0].panel_type, PanelType::Valance);
    }

    #[test]
    fn test_scallop_deeper_than_valance() {
        let ctx = ComponentContext::new(18.0, 30.0, 12.0).unwrap();
        let result = Scallop.validate(&json!({"depth": 5}), &ctx);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_face_frame_with_mid_stile() {
        let ctx = ComponentContext::new(36.0, 30.0, 12.0).unwrap();
        let result = FaceFrame.generate(&json!({"mid_stiles": 1}), &ctx).unwrap();
        assert_eq!(result.count_of_type(PanelType::FaceFrameStile), 3);
        assert_eq!(result.count_of_type(PanelType::FaceFrameRail), 2);
        assert_eq!(result.hardware_quantity("Pocket screw 1-1/4\""), 12);
        assert_eq!(
            result.metadata("opening_width").and_then(|m| m.as_number()),
            Some((36.0 - 4.5) / 2.0)
        );
    }

    #[test]
    fn test_crown_returns() {
        let ctx = ComponentContext::new(30.0, 30.0, 12.0).unwrap();
        let result = CrownMolding.generate(&json!({}), &ctx).unwrap();
        assert_eq!(result.count_of_type(PanelType::CrownReturn), 2);
        let front = result.panels_of_type(PanelType::CrownMolding).next().unwrap();
        let projection = 3.5 * 45f64.to_radians().sin();
        assert!((front.width - (30.0 + 2.0 * projection)).abs() < 1e-9);

        let result = CrownMolding.generate(&json!({"return_sides": false}), &ctx).unwrap();
        assert_eq!(result.count_of_type(PanelType::CrownReturn), 0);
    }

    #[test]
    fn test_toe_kick_vent() {
        let ctx = ComponentContext::new(30.0, 34.5, 24.0).unwrap();
        let result = ToeKick.generate(&json!({"vent": true}), &ctx).unwrap();
        let kick = &result.panels[0];
        assert_eq!(kick.metadata.get("depth_offset").and_then(|v| v.as_number()), Some(3.0));
        assert_eq!(result.metadata("cutouts").and_then(|m| m.as_cutouts()).unwrap().len(), 1);
        assert_eq!(result.hardware_quantity("Toe kick vent grille"), 1);
    }

    #[test]
    fn test_light_rail_channel() {
        let ctx = ComponentContext::new(30.0, 30.0, 12.0).unwrap();
        let result = LightRail.generate(&json!({"led_channel": true}), &ctx).unwrap();
        let cutouts = result.metadata("cutouts").and_then(|m| m.as_cutouts()).unwrap();
        assert_eq!(cutouts[0].depth, Some(0.25));
        assert!(LightRail.validate(&json!({"height": 6}), &ctx).errors.len() == 1);
    }
}
