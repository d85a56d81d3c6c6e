//! Drawer stacks and file drawers.
//!
//! Drawer fronts are full overlay. Boxes are built from 1/2" stock with the
//! bottom captured in a groove 1/4" up from the lower edge of the box.

use crate::component::ConfiguredComponent;
use crate::error::ComponentResult;
use crate::rules::{auto_slide_length, Handle, SLIDE_REAR_CLEARANCE};
use cabinetkit_core::{
    AutoOr, ComponentContext, GenerationResult, HardwareItem, MaterialSpec, Panel, PanelType,
    Position, ValidationResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gap between the top of a drawer box and the opening above it.
pub const BOX_TOP_CLEARANCE: f64 = 1.0;

/// Depth of the groove holding the drawer bottom.
pub const BOTTOM_GROOVE_DEPTH: f64 = 0.25;

/// Lowest usable drawer box.
pub const MIN_BOX_HEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlideType {
    #[default]
    SideMount,
    Undermount,
    CenterMount,
}

impl SlideType {
    /// Total width the slides take out of the opening.
    pub fn required_clearance(&self) -> f64 {
        match self {
            SlideType::SideMount => 1.0,
            SlideType::Undermount => 0.625,
            SlideType::CenterMount => 0.25,
        }
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideType::SideMount => write!(f, "side mount"),
            SlideType::Undermount => write!(f, "undermount"),
            SlideType::CenterMount => write!(f, "center mount"),
        }
    }
}

/// Outer size of one drawer box.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BoxSize {
    width: f64,
    height: f64,
    depth: f64,
}

/// Front, sides, box front/back and bottom for one drawer.
fn drawer_box_panels(
    ctx: &ComponentContext,
    index: u32,
    size: BoxSize,
    bottom_thickness: f64,
    y: f64,
) -> ComponentResult<Vec<Panel>> {
    let box_stock = MaterialSpec::standard_1_2();
    let bottom_stock = ctx.material.with_thickness(bottom_thickness)?;
    let side = box_stock.thickness;
    let x = ctx.position.x + (ctx.width - size.width) / 2.0;
    let inner_width = size.width - 2.0 * side;
    let label = |part: &str| format!("Drawer {} {}", index, part);

    let at = Position::new;
    Ok(vec![
        Panel::new(PanelType::DrawerSide, size.depth, size.height, box_stock, at(x, y)?)?
            .with_label(label("left side")),
        Panel::new(
            PanelType::DrawerSide,
            size.depth,
            size.height,
            box_stock,
            at(x + size.width - side, y)?,
        )?
        .with_label(label("right side")),
        Panel::new(PanelType::DrawerBoxFront, inner_width, size.height, box_stock, at(x + side, y)?)?
            .with_label(label("box front")),
        Panel::new(PanelType::DrawerBoxBack, inner_width, size.height, box_stock, at(x + side, y)?)?
            .with_metadata("box_depth", size.depth)
            .with_label(label("box back")),
        Panel::new(
            PanelType::DrawerBottom,
            inner_width + 2.0 * BOTTOM_GROOVE_DEPTH,
            size.depth - 2.0 * side + 2.0 * BOTTOM_GROOVE_DEPTH,
            bottom_stock,
            at(x + side - BOTTOM_GROOVE_DEPTH, y + BOTTOM_GROOVE_DEPTH)?,
        )?
        .with_metadata("depth_offset", side - BOTTOM_GROOVE_DEPTH)
        .with_label(label("bottom")),
    ])
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardDrawerConfig {
    pub count: u32,
    pub slide_type: SlideType,
    pub slide_length: AutoOr<f64>,
    pub reveal: f64,
    pub box_clearance: f64,
    pub bottom_thickness: f64,
    pub handle: Handle,
}

impl Default for StandardDrawerConfig {
    fn default() -> Self {
        Self {
            count: 1,
            slide_type: SlideType::SideMount,
            slide_length: AutoOr::Auto,
            reveal: 0.125,
            box_clearance: 1.0,
            bottom_thickness: 0.25,
            handle: Handle::Pull,
        }
    }
}

impl StandardDrawerConfig {
    fn slide_length(&self, depth: f64) -> Option<f64> {
        match self.slide_length {
            AutoOr::Auto => auto_slide_length(depth),
            AutoOr::Value(length) => Some(length),
        }
    }

    /// Clear height of each drawer opening between dividers.
    fn opening_height(&self, ctx: &ComponentContext) -> f64 {
        let dividers = f64::from(self.count.saturating_sub(1));
        (ctx.height - dividers * ctx.thickness()) / f64::from(self.count.max(1))
    }

    fn front_height(&self, ctx: &ComponentContext) -> f64 {
        let count = f64::from(self.count.max(1));
        (ctx.height + 2.0 * ctx.thickness() - count * self.reveal) / count
    }
}

/// A stack of equal-height drawers on slides.
#[derive(Debug, Default)]
pub struct StandardDrawer;

impl ConfiguredComponent for StandardDrawer {
    type Config = StandardDrawerConfig;
    const NAME: &'static str = "standard drawer";

    fn check(&self, config: &StandardDrawerConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !(1..=10).contains(&config.count) {
            result.error(format!("count must be between 1 and 10, got {}", config.count));
        }
        result.require_range("reveal", config.reveal, 0.0, 0.5);
        result.require_range("bottom_thickness", config.bottom_thickness, 0.125, 0.75);
        if result.require_non_negative("box_clearance", config.box_clearance)
            && config.box_clearance < config.slide_type.required_clearance()
        {
            result.error(format!(
                "{} slides need {}\" of box clearance, got {}",
                config.slide_type,
                config.slide_type.required_clearance(),
                config.box_clearance
            ));
        }

        match config.slide_length(ctx.depth) {
            None => result.error(format!(
                "section depth of {:.2}\" is too shallow for any standard slide",
                ctx.depth
            )),
            Some(length) if length + SLIDE_REAR_CLEARANCE > ctx.depth => result.error(format!(
                "{}\" slides do not fit a {:.2}\" deep section",
                length, ctx.depth
            )),
            Some(length) if length <= 0.0 => result.error("slide_length must be positive"),
            Some(_) => {}
        }

        if config.count > 0 {
            let box_height = config.opening_height(ctx) - BOX_TOP_CLEARANCE;
            if box_height < MIN_BOX_HEIGHT {
                result.error(format!(
                    "{} drawers leave boxes only {:.2}\" tall",
                    config.count, box_height
                ));
            }
        }
        if ctx.width - config.box_clearance < 6.0 {
            result.error("section is too narrow for a drawer box");
        } else if ctx.width > 36.0 {
            result.warning("drawers wider than 36\" need heavy-duty slides");
        }
        result
    }

    fn build(
        &self,
        config: &StandardDrawerConfig,
        ctx: &ComponentContext,
    ) -> ComponentResult<GenerationResult> {
        let t = ctx.thickness();
        let slide_length = config.slide_length(ctx.depth).unwrap_or(ctx.depth);
        let opening = config.opening_height(ctx);
        let front_height = config.front_height(ctx);
        let front_width = ctx.width + 2.0 * t - config.reveal;
        let size = BoxSize {
            width: ctx.width - config.box_clearance,
            height: opening - BOX_TOP_CLEARANCE,
            depth: slide_length,
        };

        let mut result = GenerationResult::new();
        for i in 0..config.count {
            let index = i + 1;
            let opening_y = ctx.position.y + f64::from(i) * (opening + t);
            let front_y = (ctx.position.y - t + config.reveal / 2.0
                + f64::from(i) * (front_height + config.reveal))
                .max(0.0);
            result.add_panel(
                Panel::new(
                    PanelType::DrawerFront,
                    front_width,
                    front_height,
                    ctx.material,
                    Position::new((ctx.position.x - t + config.reveal / 2.0).max(0.0), front_y)?,
                )?
                .with_label(format!("Drawer {} front", index)),
            );
            result.add_panels(drawer_box_panels(ctx, index, size, config.bottom_thickness, opening_y)?);

            if i > 0 {
                result.add_panel(
                    Panel::new(
                        PanelType::HorizontalDivider,
                        ctx.width,
                        ctx.depth,
                        ctx.material,
                        ctx.position.offset(0.0, opening_y - t)?,
                    )?
                    .with_label(format!("Divider below drawer {}", index)),
                );
            }
        }
        if !ctx.skip_top_divider {
            result.add_panel(
                Panel::new(
                    PanelType::HorizontalDivider,
                    ctx.width,
                    ctx.depth,
                    ctx.material,
                    ctx.position.offset(0.0, ctx.height)?,
                )?
                .with_label("Top divider"),
            );
        }

        result.add_hardware(
            HardwareItem::new(
                format!("Drawer slide, {} {}\"", config.slide_type, slide_length),
                config.count,
            )
            .with_notes("pairs"),
        );
        if let Some(handle) = config.handle.item(config.count) {
            result.add_hardware(handle);
        }
        result.insert_metadata("slide_length", slide_length);
        result.insert_metadata("box_height", size.height);
        Ok(result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FileSize {
    #[default]
    Letter,
    Legal,
}

impl FileSize {
    /// Centre-to-centre spacing of the hanging rails.
    pub fn rail_spacing(&self) -> f64 {
        match self {
            FileSize::Letter => 12.0,
            FileSize::Legal => 15.0,
        }
    }

    /// Clear height hanging folders need.
    pub fn min_height(&self) -> f64 {
        10.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FileOrientation {
    #[default]
    FrontToBack,
    SideToSide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDrawerConfig {
    pub file_size: FileSize,
    pub orientation: FileOrientation,
    pub reveal: f64,
    pub slide_length: AutoOr<f64>,
}

impl Default for FileDrawerConfig {
    fn default() -> Self {
        Self {
            file_size: FileSize::Letter,
            orientation: FileOrientation::FrontToBack,
            reveal: 0.125,
            slide_length: AutoOr::Auto,
        }
    }
}

/// A single deep drawer fitted with hanging-folder rails.
#[derive(Debug, Default)]
pub struct FileDrawer;

impl FileDrawer {
    fn size(config: &FileDrawerConfig, ctx: &ComponentContext) -> Option<BoxSize> {
        let depth = match config.slide_length {
            AutoOr::Auto => auto_slide_length(ctx.depth)?,
            AutoOr::Value(length) => length,
        };
        Some(BoxSize {
            width: ctx.width - SlideType::SideMount.required_clearance(),
            height: ctx.height - BOX_TOP_CLEARANCE,
            depth,
        })
    }
}

impl ConfiguredComponent for FileDrawer {
    type Config = FileDrawerConfig;
    const NAME: &'static str = "file drawer";

    fn check(&self, config: &FileDrawerConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_range("reveal", config.reveal, 0.0, 0.5);

        let Some(size) = Self::size(config, ctx) else {
            result.error(format!(
                "section depth of {:.2}\" is too shallow for any standard slide",
                ctx.depth
            ));
            return result;
        };
        if size.depth + SLIDE_REAR_CLEARANCE > ctx.depth {
            result.error(format!(
                "{}\" slides do not fit a {:.2}\" deep section",
                size.depth, ctx.depth
            ));
        }
        if size.height < config.file_size.min_height() {
            result.error(format!(
                "hanging files need {}\" of box height, section allows {:.2}\"",
                config.file_size.min_height(),
                size.height
            ));
        }

        let side = MaterialSpec::standard_1_2().thickness;
        let spacing = config.file_size.rail_spacing();
        let available = match config.orientation {
            FileOrientation::FrontToBack => size.width - 2.0 * side,
            FileOrientation::SideToSide => size.depth - 2.0 * side,
        };
        if available < spacing {
            result.error(format!(
                "{:?} files need {}\" between rails, only {:.2}\" available",
                config.file_size, spacing, available
            ));
        }
        result
    }

    fn build(&self, config: &FileDrawerConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let t = ctx.thickness();
        let size = Self::size(config, ctx).unwrap_or(BoxSize {
            width: ctx.width,
            height: ctx.height,
            depth: ctx.depth,
        });

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(
                PanelType::DrawerFront,
                ctx.width + 2.0 * t - config.reveal,
                ctx.height + 2.0 * t - config.reveal,
                ctx.material,
                Position::new(
                    (ctx.position.x - t + config.reveal / 2.0).max(0.0),
                    (ctx.position.y - t + config.reveal / 2.0).max(0.0),
                )?,
            )?
            .with_label("File drawer front"),
        );
        result.add_panels(drawer_box_panels(ctx, 1, size, 0.25, ctx.position.y)?);

        let rail_length = match config.orientation {
            FileOrientation::FrontToBack => size.depth,
            FileOrientation::SideToSide => size.width,
        };
        result.add_hardware(
            HardwareItem::new(format!("Full-extension drawer slide {}\"", size.depth), 1)
                .with_notes("pair, 100 lb"),
        );
        result.add_hardware(
            HardwareItem::new("Hanging file rail", 2).with_notes(format!("{:.2}\" long", rail_length)),
        );
        result.add_hardware(HardwareItem::new("Pull handle", 1));

        result.insert_metadata("rail_spacing", config.file_size.rail_spacing());
        result.insert_metadata("rail_length", rail_length);
        result.insert_metadata(
            "rail_orientation",
            match config.orientation {
                FileOrientation::FrontToBack => "front_to_back",
                FileOrientation::SideToSide => "side_to_side",
            },
        );
        result.insert_metadata("slide_length", size.depth);
        Ok(result)
    }
}
