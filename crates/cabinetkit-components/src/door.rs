//! Hinged doors.

use crate::component::ConfiguredComponent;
use crate::error::ComponentResult;
use crate::rules::{hinge_count, hinge_positions, Handle, HingeSide, Overlay};
use cabinetkit_core::{
    ComponentContext, GenerationResult, HardwareItem, Panel, PanelType, Position,
    ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Narrowest practical door.
pub const MIN_DOOR_WIDTH: f64 = 6.0;

/// Doors wider than this tend to sag on their hinges.
pub const MAX_SINGLE_DOOR_WIDTH: f64 = 24.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleDoorConfig {
    pub overlay: Overlay,
    pub reveal: f64,
    pub hinge_side: HingeSide,
    pub handle: Handle,
}

impl Default for SingleDoorConfig {
    fn default() -> Self {
        Self {
            overlay: Overlay::Full,
            reveal: 0.125,
            hinge_side: HingeSide::Left,
            handle: Handle::Pull,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoubleDoorConfig {
    pub overlay: Overlay,
    pub reveal: f64,
    pub hinge_side: HingeSide,
    pub handle: Handle,
    pub center_gap: f64,
}

impl Default for DoubleDoorConfig {
    fn default() -> Self {
        Self {
            overlay: Overlay::Full,
            reveal: 0.125,
            hinge_side: HingeSide::Left,
            handle: Handle::Pull,
            center_gap: 0.125,
        }
    }
}

/// Outer size of the door (or door pair) covering the section opening.
fn door_envelope(ctx: &ComponentContext, overlay: Overlay, reveal: f64) -> (f64, f64) {
    let extension = overlay.extension(ctx.thickness());
    (
        ctx.width + 2.0 * extension - reveal,
        ctx.height + 2.0 * extension - reveal,
    )
}

fn check_reveal(result: &mut ValidationResult, reveal: f64) {
    result.require_range("reveal", reveal, 0.0, 0.5);
}

fn check_height(result: &mut ValidationResult, height: f64) {
    if height <= 0.0 {
        result.error("section is too short for a door");
    } else if height > 84.0 {
        result.warning(format!(
            "door height of {:.2}\" is taller than standard stock; expect warping",
            height
        ));
    }
}

/// One door panel with its hinge metadata.
fn door_panel(
    ctx: &ComponentContext,
    x: f64,
    width: f64,
    height: f64,
    overlay: Overlay,
    reveal: f64,
    hinge_side: HingeSide,
) -> ComponentResult<Panel> {
    let extension = overlay.extension(ctx.thickness());
    let y = (ctx.position.y - extension + reveal / 2.0).max(0.0);
    let panel = Panel::new(
        PanelType::Door,
        width,
        height,
        ctx.material,
        Position::new(x.max(0.0), y)?,
    )?
    .with_metadata("hinge_side", hinge_side.as_str())
    .with_metadata("hinge_positions", hinge_positions(height));
    Ok(panel)
}

/// A single door hinged on one side.
#[derive(Debug, Default)]
pub struct SingleHingedDoor;

impl ConfiguredComponent for SingleHingedDoor {
    type Config = SingleDoorConfig;
    const NAME: &'static str = "single hinged door";

    fn check(&self, config: &SingleDoorConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_reveal(&mut result, config.reveal);
        let (width, height) = door_envelope(ctx, config.overlay, config.reveal);
        if width < MIN_DOOR_WIDTH {
            result.error(format!(
                "door width of {:.2}\" is below the {}\" minimum",
                width, MIN_DOOR_WIDTH
            ));
        } else if width > MAX_SINGLE_DOOR_WIDTH {
            result.warning(format!(
                "door width of {:.2}\" exceeds {}\"; consider a double door",
                width, MAX_SINGLE_DOOR_WIDTH
            ));
        }
        check_height(&mut result, height);
        result
    }

    fn build(&self, config: &SingleDoorConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let (width, height) = door_envelope(ctx, config.overlay, config.reveal);
        let x = ctx.position.x - config.overlay.extension(ctx.thickness()) + config.reveal / 2.0;

        let mut result = GenerationResult::new();
        result.add_panel(
            door_panel(ctx, x, width, height, config.overlay, config.reveal, config.hinge_side)?
                .with_label("Door"),
        );
        result.add_hardware(HardwareItem::new(config.overlay.hinge_name(), hinge_count(height)));
        if let Some(handle) = config.handle.item(1) {
            result.add_hardware(handle);
        }
        result.insert_metadata("overlay", config.overlay.to_string());
        result.insert_metadata("hinge_side", config.hinge_side.as_str());
        result.insert_metadata("hinge_positions", hinge_positions(height));
        Ok(result)
    }
}

/// A pair of doors meeting in the middle of the opening.
#[derive(Debug, Default)]
pub struct DoubleHingedDoor;

impl DoubleHingedDoor {
    fn leaf_width(config: &DoubleDoorConfig, ctx: &ComponentContext) -> f64 {
        let (width, _) = door_envelope(ctx, config.overlay, config.reveal);
        (width - config.center_gap) / 2.0
    }
}

impl ConfiguredComponent for DoubleHingedDoor {
    type Config = DoubleDoorConfig;
    const NAME: &'static str = "double hinged door";

    fn check(&self, config: &DoubleDoorConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_reveal(&mut result, config.reveal);
        result.require_range("center_gap", config.center_gap, 0.0, 0.5);

        let leaf = Self::leaf_width(config, ctx);
        if leaf < MIN_DOOR_WIDTH {
            result.error(format!(
                "each door would be {:.2}\" wide, below the {}\" minimum",
                leaf, MIN_DOOR_WIDTH
            ));
        } else if leaf > MAX_SINGLE_DOOR_WIDTH {
            result.warning(format!(
                "each door is {:.2}\" wide; doors over {}\" tend to sag",
                leaf, MAX_SINGLE_DOOR_WIDTH
            ));
        }
        let (_, height) = door_envelope(ctx, config.overlay, config.reveal);
        check_height(&mut result, height);
        result
    }

    fn build(&self, config: &DoubleDoorConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let (_, height) = door_envelope(ctx, config.overlay, config.reveal);
        let leaf = Self::leaf_width(config, ctx);
        let left_x = ctx.position.x - config.overlay.extension(ctx.thickness()) + config.reveal / 2.0;
        let right_x = left_x + leaf + config.center_gap;

        let mut result = GenerationResult::new();
        result.add_panel(
            door_panel(ctx, left_x, leaf, height, config.overlay, config.reveal, HingeSide::Left)?
                .with_label("Left door"),
        );
        result.add_panel(
            door_panel(ctx, right_x, leaf, height, config.overlay, config.reveal, HingeSide::Right)?
                .with_label("Right door"),
        );
        result.add_hardware(HardwareItem::new(
            config.overlay.hinge_name(),
            2 * hinge_count(height),
        ));
        if let Some(handle) = config.handle.item(2) {
            result.add_hardware(handle);
        }
        result.insert_metadata("overlay", config.overlay.to_string());
        result.insert_metadata("hinge_positions", hinge_positions(height));
        Ok(result)
    }
}
