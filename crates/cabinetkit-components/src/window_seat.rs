//! Window seats: a storage bench and a three-sided bay seat.

use crate::component::ConfiguredComponent;
use crate::error::ComponentResult;
use crate::rules::{auto_slide_length, hinge_count};
use cabinetkit_core::{
    AngleCut, ComponentContext, CutMetadata, GenerationResult, HardwareItem, MaterialSpec, Panel,
    PanelEdge, PanelType, Position, ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Finished seat heights outside this range are uncomfortable.
pub const COMFORT_RANGE: (f64, f64) = (16.0, 20.0);

fn check_seat_height(result: &mut ValidationResult, seat_height: f64) -> bool {
    if !result.require_range("seat_height", seat_height, 12.0, 30.0) {
        return false;
    }
    if seat_height < COMFORT_RANGE.0 || seat_height > COMFORT_RANGE.1 {
        result.warning(format!(
            "seat height of {}\" is outside the comfortable {}\"-{}\" range",
            seat_height, COMFORT_RANGE.0, COMFORT_RANGE.1
        ));
    }
    true
}

// =============================================================================
// Storage seat
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeatAccess {
    #[default]
    HingedLid,
    Doors,
    Drawers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSeatConfig {
    pub seat_height: f64,
    pub cushion_thickness: f64,
    pub access: SeatAccess,
}

impl Default for StorageSeatConfig {
    fn default() -> Self {
        Self {
            seat_height: 18.0,
            cushion_thickness: 3.0,
            access: SeatAccess::HingedLid,
        }
    }
}

/// Widest door or drawer front a storage seat gets before it is split.
const MAX_FRONT_WIDTH: f64 = 24.0;

impl StorageSeatConfig {
    /// Height of the carcass below the seat board.
    fn box_height(&self, ctx: &ComponentContext) -> f64 {
        self.seat_height - self.cushion_thickness - ctx.thickness()
    }

    fn front_count(&self, ctx: &ComponentContext) -> u32 {
        ((ctx.width / MAX_FRONT_WIDTH).ceil() as u32).max(1)
    }
}

/// Bench with storage below the seat board.
#[derive(Debug, Default)]
pub struct StorageSeat;

impl ConfiguredComponent for StorageSeat {
    type Config = StorageSeatConfig;
    const NAME: &'static str = "storage seat";

    fn check(&self, config: &StorageSeatConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let height_ok = check_seat_height(&mut result, config.seat_height);
        let cushion_ok = result.require_range("cushion_thickness", config.cushion_thickness, 0.0, 6.0);
        if height_ok && cushion_ok {
            let box_height = config.box_height(ctx);
            if box_height < 6.0 {
                result.error(format!(
                    "only {:.2}\" left below the seat for storage",
                    box_height
                ));
            }
            if config.access == SeatAccess::Drawers && box_height - 2.0 * ctx.thickness() < 4.0 {
                result.error("too little height under the seat for drawers");
            }
        }
        if config.access == SeatAccess::Drawers && auto_slide_length(ctx.depth).is_none() {
            result.error(format!("a {:.2}\" deep seat is too shallow for slides", ctx.depth));
        }
        if config.access == SeatAccess::HingedLid && ctx.width > 48.0 {
            result.warning("lids over 48\" wide are heavy; consider doors or drawers");
        }
        result
    }

    fn build(&self, config: &StorageSeatConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let t = ctx.thickness();
        let box_height = config.box_height(ctx);

        let mut result = GenerationResult::new();
        let seat_label = match config.access {
            SeatAccess::HingedLid => "Seat lid",
            _ => "Seat",
        };
        result.add_panel(
            Panel::new(
                PanelType::SeatSurface,
                ctx.width,
                ctx.depth,
                ctx.material,
                ctx.position.offset(0.0, box_height)?,
            )?
            .with_label(seat_label),
        );
        result.add_panel(
            Panel::new(PanelType::SeatFront, ctx.width, box_height, ctx.material, ctx.position)?
                .with_label("Seat front"),
        );
        result.add_panel(Panel::new(
            PanelType::LeftSide,
            ctx.depth - t,
            box_height,
            ctx.material,
            ctx.position,
        )?);
        result.add_panel(Panel::new(
            PanelType::RightSide,
            ctx.depth - t,
            box_height,
            ctx.material,
            ctx.position.offset(ctx.width - t, 0.0)?,
        )?);
        result.add_panel(Panel::new(
            PanelType::Bottom,
            ctx.width - 2.0 * t,
            ctx.depth - t,
            ctx.material,
            ctx.position.offset(t, 0.0)?,
        )?);
        result.add_panel(Panel::new(
            PanelType::Back,
            ctx.width,
            box_height,
            MaterialSpec::standard_1_4(),
            ctx.position,
        )?);

        let fronts = config.front_count(ctx);
        match config.access {
            SeatAccess::HingedLid => {
                result.add_hardware(
                    HardwareItem::new("Piano hinge", 1).with_notes(format!("{:.2}\" long", ctx.width)),
                );
                result.add_hardware(HardwareItem::new("Soft-close lid stay", 2));
            }
            SeatAccess::Doors => {
                result.add_hardware(HardwareItem::new(
                    "Concealed hinge, full overlay",
                    fronts * hinge_count(box_height),
                ));
                result.add_hardware(HardwareItem::new("Knob", fronts));
            }
            SeatAccess::Drawers => {
                let slide = auto_slide_length(ctx.depth).unwrap_or(ctx.depth);
                result.add_hardware(
                    HardwareItem::new(format!("Drawer slide, side mount {}\"", slide), fronts)
                        .with_notes("pairs"),
                );
                result.add_hardware(HardwareItem::new("Pull handle", fronts));
            }
        }
        result.insert_metadata("storage_height", box_height);
        Ok(result)
    }
}

// =============================================================================
// Bay seat
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaySeatConfig {
    /// Turn between the centre window and each side window.
    pub side_angle: f64,
    pub side_width: f64,
    pub seat_height: f64,
}

impl Default for BaySeatConfig {
    fn default() -> Self {
        Self {
            side_angle: 45.0,
            side_width: 24.0,
            seat_height: 18.0,
        }
    }
}

impl BaySeatConfig {
    /// Each joint is mitred at half the turn.
    fn mitre(&self) -> f64 {
        self.side_angle / 2.0
    }

    /// Length of the whole seat measured along the room wall.
    fn overall_run(&self, centre_width: f64) -> f64 {
        centre_width + 2.0 * self.side_width * self.side_angle.to_radians().cos()
    }
}

/// Seat following a three-sided bay: a centre bench and two angled wings.
#[derive(Debug, Default)]
pub struct BaySeat;

impl ConfiguredComponent for BaySeat {
    type Config = BaySeatConfig;
    const NAME: &'static str = "bay seat";

    fn check(&self, config: &BaySeatConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if result.require_range("side_angle", config.side_angle, 10.0, 80.0)
            && (config.side_angle - 45.0).abs() > 1e-9
            && (config.side_angle - 30.0).abs() > 1e-9
        {
            result.warning(format!(
                "{}\u{b0} bays are uncommon; check the window angles on site",
                config.side_angle
            ));
        }
        if result.require_positive("side_width", config.side_width) && config.side_width < ctx.depth {
            result.warning("wings narrower than the seat depth leave almost no flat seat");
        }
        if check_seat_height(&mut result, config.seat_height) && config.seat_height <= ctx.thickness() {
            result.error("seat height must exceed the seat board thickness");
        }
        result
    }

    fn build(&self, config: &BaySeatConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let t = ctx.thickness();
        let board_y = config.seat_height - t;
        let apron_height = board_y;
        let mitre = config.mitre();

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(
                PanelType::SeatSurface,
                ctx.width,
                ctx.depth,
                ctx.material,
                ctx.position.offset(0.0, board_y)?,
            )?
            .with_cut_metadata(
                CutMetadata::default()
                    .with_angle_cut(AngleCut::new(PanelEdge::Left, mitre, false)?)
                    .with_angle_cut(AngleCut::new(PanelEdge::Right, mitre, false)?),
            )
            .with_label("Centre seat"),
        );
        result.add_panel(
            Panel::new(
                PanelType::BayApron,
                ctx.width,
                apron_height,
                ctx.material,
                ctx.position,
            )?
            .with_cut_metadata(
                CutMetadata::default()
                    .with_angle_cut(AngleCut::new(PanelEdge::Left, mitre, true)?)
                    .with_angle_cut(AngleCut::new(PanelEdge::Right, mitre, true)?),
            )
            .with_label("Centre apron"),
        );

        for (side, inner_edge, x) in [
            ("Left", PanelEdge::Right, ctx.position.x),
            ("Right", PanelEdge::Left, ctx.position.x + ctx.width),
        ] {
            let at = Position::new(x, ctx.position.y)?;
            result.add_panel(
                Panel::new(
                    PanelType::BaySeatWing,
                    config.side_width,
                    ctx.depth,
                    ctx.material,
                    at.offset(0.0, board_y)?,
                )?
                .with_cut_metadata(
                    CutMetadata::default().with_angle_cut(AngleCut::new(inner_edge, mitre, false)?),
                )
                .with_metadata("wall", side.to_lowercase())
                .with_metadata("turn_angle", config.side_angle)
                .with_label(format!("{} wing", side)),
            );
            result.add_panel(
                Panel::new(PanelType::BayApron, config.side_width, apron_height, ctx.material, at)?
                    .with_cut_metadata(
                        CutMetadata::default().with_angle_cut(AngleCut::new(inner_edge, mitre, true)?),
                    )
                    .with_metadata("wall", side.to_lowercase())
                    .with_label(format!("{} apron", side)),
            );
        }

        result.add_hardware(HardwareItem::new("Pocket screw 1-1/4\"", 16));
        result.add_hardware(HardwareItem::new("Seat support cleat", 3));
        result.insert_metadata("overall_run", config.overall_run(ctx.width));
        result.insert_metadata("mitre_angle", mitre);
        Ok(result)
    }
}
