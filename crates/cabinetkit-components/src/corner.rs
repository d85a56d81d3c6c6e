//! Corner cabinets: lazy susan, blind corner and diagonal corner.
//!
//! For corner components the section width is the run along each wall and
//! the section depth is the cabinet depth. Footprints come from
//! [`cabinetkit_geometry::corner`].

use crate::component::ConfiguredComponent;
use crate::error::ComponentResult;
use crate::rules::{carcass_panels, hinge_count, Handle};
use cabinetkit_core::{
    AngleCut, AutoOr, ComponentContext, CutMetadata, GenerationResult, HardwareItem, Panel,
    PanelEdge, PanelType, ValidationResult,
};
use cabinetkit_geometry::corner::{
    calculate_blind_corner_footprint, calculate_diagonal_footprint,
    calculate_lazy_susan_footprint, default_tray_diameter, diagonal_face_width,
    max_tray_diameter, BlindSide, CornerFootprint,
};
use serde::{Deserialize, Serialize};

fn footprint_metadata(result: &mut GenerationResult, footprint: &CornerFootprint) {
    result.insert_metadata("footprint", vec![footprint.left_wall, footprint.right_wall]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LazySusanDoorStyle {
    /// Two leaves hinged together, folding into the corner.
    #[default]
    PieCut,
    /// No door; trays with a fixed front lip rotate into view.
    Attached,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LazySusanConfig {
    pub door_clearance: f64,
    pub tray_diameter: AutoOr<f64>,
    pub tray_count: u32,
    pub door_style: LazySusanDoorStyle,
}

impl Default for LazySusanConfig {
    fn default() -> Self {
        Self {
            door_clearance: 2.0,
            tray_diameter: AutoOr::Auto,
            tray_count: 2,
            door_style: LazySusanDoorStyle::PieCut,
        }
    }
}

impl LazySusanConfig {
    pub fn resolved_tray_diameter(&self, depth: f64) -> f64 {
        self.tray_diameter.resolve(|| default_tray_diameter(depth))
    }
}

/// Corner cabinet with rotating trays.
#[derive(Debug, Default)]
pub struct LazySusanCorner;

impl ConfiguredComponent for LazySusanCorner {
    type Config = LazySusanConfig;
    const NAME: &'static str = "lazy susan corner";

    fn check(&self, config: &LazySusanConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();

        match calculate_lazy_susan_footprint(ctx.depth, config.door_clearance) {
            Ok(footprint) if footprint.left_wall > ctx.width => result.error(format!(
                "lazy susan needs {:.2}\" along each wall, section is {:.2}\"",
                footprint.left_wall, ctx.width
            )),
            Ok(_) => {}
            Err(e) => result.error(e.to_string()),
        }

        let diameter = config.resolved_tray_diameter(ctx.depth);
        let max = max_tray_diameter(ctx.depth);
        if result.require_positive("tray_diameter", diameter) && diameter > max {
            result.error(format!(
                "tray diameter {:.2}\" exceeds the {:.2}\" this cabinet can hold",
                diameter, max
            ));
        }
        if !(1..=4).contains(&config.tray_count) {
            result.error(format!("tray_count must be between 1 and 4, got {}", config.tray_count));
        } else if ctx.height / f64::from(config.tray_count) < 8.0 {
            result.warning("less than 8\" between trays");
        }
        if config.door_style == LazySusanDoorStyle::PieCut && ctx.width - ctx.depth < 6.0 {
            result.error("pie-cut doors need at least 6\" of face on each wall");
        }
        result
    }

    fn build(&self, config: &LazySusanConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let footprint = calculate_lazy_susan_footprint(ctx.depth, config.door_clearance)?;
        let diameter = config.resolved_tray_diameter(ctx.depth);
        let wall = footprint.left_wall;

        let mut result = GenerationResult::new();
        result.add_panels(carcass_panels(ctx, wall, ctx.height, wall)?);

        let spacing = ctx.height / f64::from(config.tray_count);
        for i in 0..config.tray_count {
            let y = ctx.thickness() + spacing * f64::from(i);
            result.add_panel(
                Panel::new(
                    PanelType::LazySusanTray,
                    diameter,
                    diameter,
                    ctx.material,
                    ctx.position.offset(0.0, y)?,
                )?
                .with_label(format!("Tray {}", i + 1)),
            );
        }

        let door_height = ctx.height - 2.0 * ctx.thickness();
        if config.door_style == LazySusanDoorStyle::PieCut {
            let leaf = ctx.width - ctx.depth;
            for (i, label) in ["Pie-cut door leaf A", "Pie-cut door leaf B"].iter().enumerate() {
                result.add_panel(
                    Panel::new(
                        PanelType::Door,
                        leaf,
                        door_height,
                        ctx.material,
                        ctx.position.offset(leaf * i as f64, ctx.thickness())?,
                    )?
                    .with_label(*label),
                );
            }
            result.add_hardware(HardwareItem::new("Pie-cut corner hinge", hinge_count(door_height)));
            result.add_hardware(HardwareItem::new("Bi-fold leaf hinge", 2));
            if let Some(handle) = Handle::Pull.item(1) {
                result.add_hardware(handle);
            }
        }

        result.add_hardware(
            HardwareItem::new("Lazy susan pole kit", 1)
                .with_notes(format!("{} trays, {:.1}\" diameter", config.tray_count, diameter)),
        );
        footprint_metadata(&mut result, &footprint);
        result.insert_metadata("tray_diameter", diameter);
        Ok(result)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlindCornerConfig {
    pub accessible_width: f64,
    pub filler_width: f64,
    pub blind_side: BlindSide,
    pub pull_out: bool,
    pub reveal: f64,
}

impl Default for BlindCornerConfig {
    fn default() -> Self {
        Self {
            accessible_width: 24.0,
            filler_width: 3.0,
            blind_side: BlindSide::Left,
            pull_out: false,
            reveal: 0.125,
        }
    }
}

/// Corner cabinet whose far side runs blind behind the adjoining run.
#[derive(Debug, Default)]
pub struct BlindCorner;

impl ConfiguredComponent for BlindCorner {
    type Config = BlindCornerConfig;
    const NAME: &'static str = "blind corner";

    fn check(&self, config: &BlindCornerConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_range("reveal", config.reveal, 0.0, 0.5);
        if result.require_non_negative("filler_width", config.filler_width)
            && config.filler_width < 1.5
        {
            result.warning("filler under 1-1/2\" may not clear door handles");
        }
        if result.require_positive("accessible_width", config.accessible_width)
            && config.accessible_width < 9.0
        {
            result.error("accessible_width must be at least 9\"");
        }

        match calculate_blind_corner_footprint(
            ctx.depth,
            config.accessible_width,
            config.filler_width,
            config.blind_side,
        ) {
            Ok(_) if config.accessible_width + config.filler_width > ctx.width => {
                result.error(format!(
                    "accessible width plus filler ({:.2}\") exceeds the section width {:.2}\"",
                    config.accessible_width + config.filler_width,
                    ctx.width
                ))
            }
            Ok(_) => {}
            Err(e) => result.error(e.to_string()),
        }
        if config.pull_out && config.accessible_width < 15.0 {
            result.warning("blind corner pull-outs generally need a 15\" opening");
        }
        result
    }

    fn build(&self, config: &BlindCornerConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let footprint = calculate_blind_corner_footprint(
            ctx.depth,
            config.accessible_width,
            config.filler_width,
            config.blind_side,
        )?;
        let door_width = config.accessible_width - config.reveal;
        let door_height = ctx.height - config.reveal;

        // accessible opening sits on the side away from the blind wall
        let (filler_x, door_x) = match config.blind_side {
            BlindSide::Left => {
                let door_x = ctx.width - config.accessible_width;
                (door_x - config.filler_width, door_x + config.reveal / 2.0)
            }
            BlindSide::Right => (config.accessible_width, config.reveal / 2.0),
        };

        let mut result = GenerationResult::new();
        result.add_panels(carcass_panels(ctx, ctx.width, ctx.height, ctx.depth)?);
        result.add_panel(
            Panel::new(
                PanelType::Door,
                door_width,
                door_height,
                ctx.material,
                ctx.position.offset(door_x, config.reveal / 2.0)?,
            )?
            .with_metadata("hinge_side", config.blind_side.opposite().to_string()),
        );
        if config.filler_width > 0.0 {
            result.add_panel(
                Panel::new(
                    PanelType::Filler,
                    config.filler_width,
                    ctx.height,
                    ctx.material,
                    ctx.position.offset(filler_x.max(0.0), 0.0)?,
                )?
                .with_label("Blind corner filler"),
            );
        }

        result.add_hardware(HardwareItem::new(
            "Concealed hinge, full overlay",
            hinge_count(door_height),
        ));
        if let Some(handle) = Handle::Pull.item(1) {
            result.add_hardware(handle);
        }
        if config.pull_out {
            result.add_hardware(HardwareItem::new("Blind corner pull-out", 1));
        }
        footprint_metadata(&mut result, &footprint);
        result.insert_metadata("blind_side", config.blind_side.to_string());
        Ok(result)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagonalCornerConfig {
    pub door_count: u32,
    pub reveal: f64,
}

impl Default for DiagonalCornerConfig {
    fn default() -> Self {
        Self {
            door_count: 1,
            reveal: 0.125,
        }
    }
}

/// Corner cabinet with a face set at 45 degrees across the corner.
#[derive(Debug, Default)]
pub struct DiagonalCorner;

impl ConfiguredComponent for DiagonalCorner {
    type Config = DiagonalCornerConfig;
    const NAME: &'static str = "diagonal corner";

    fn check(&self, config: &DiagonalCornerConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_range("reveal", config.reveal, 0.0, 0.5);
        if !(1..=2).contains(&config.door_count) {
            result.error(format!("door_count must be 1 or 2, got {}", config.door_count));
        }
        if let Ok(face) = diagonal_face_width(ctx.depth) {
            if config.door_count == 1 && face > 24.0 {
                result.warning(format!(
                    "diagonal face of {:.2}\" is wide for a single door",
                    face
                ));
            }
        }
        result
    }

    fn build(
        &self,
        config: &DiagonalCornerConfig,
        ctx: &ComponentContext,
    ) -> ComponentResult<GenerationResult> {
        let footprint = calculate_diagonal_footprint(ctx.depth)?;
        let face = diagonal_face_width(ctx.depth)?;
        let t = ctx.thickness();
        let mitre = CutMetadata::default().with_angle_cut(AngleCut::new(PanelEdge::Front, 45.0, false)?);

        let mut result = GenerationResult::new();
        result.add_panel(Panel::new(PanelType::LeftSide, ctx.depth, ctx.height, ctx.material, ctx.position)?);
        result.add_panel(Panel::new(
            PanelType::RightSide,
            ctx.depth,
            ctx.height,
            ctx.material,
            ctx.position.offset(ctx.depth - t, 0.0)?,
        )?);
        for (panel_type, y) in [(PanelType::Top, ctx.height - t), (PanelType::Bottom, 0.0)] {
            result.add_panel(
                Panel::new(panel_type, ctx.depth, ctx.depth, ctx.material, ctx.position.offset(0.0, y)?)?
                    .with_cut_metadata(mitre.clone()),
            );
        }
        result.add_panel(
            Panel::new(PanelType::DiagonalFace, face, ctx.height, ctx.material, ctx.position)?
                .with_cut_metadata(
                    CutMetadata::default()
                        .with_angle_cut(AngleCut::new(PanelEdge::Left, 45.0, true)?)
                        .with_angle_cut(AngleCut::new(PanelEdge::Right, 45.0, true)?),
                )
                .with_label("Diagonal face frame"),
        );

        let count = f64::from(config.door_count.max(1));
        let door_width = (face - 2.0 * t - count * config.reveal) / count;
        let door_height = ctx.height - 2.0 * t - config.reveal;
        for i in 0..config.door_count {
            let x = t + config.reveal / 2.0 + f64::from(i) * (door_width + config.reveal);
            result.add_panel(
                Panel::new(
                    PanelType::Door,
                    door_width,
                    door_height,
                    ctx.material,
                    ctx.position.offset(x, t)?,
                )?
                .with_label(format!("Diagonal door {}", i + 1)),
            );
        }

        result.add_hardware(HardwareItem::new(
            "Concealed hinge, full overlay",
            config.door_count * hinge_count(door_height),
        ));
        if let Some(handle) = Handle::Pull.item(config.door_count) {
            result.add_hardware(handle);
        }
        footprint_metadata(&mut result, &footprint);
        result.insert_metadata("face_width", face);
        Ok(result)
    }
}
