//! Desk components: work surface, drawer pedestal, keyboard tray, monitor
//! shelf and hutch.
//!
//! The pedestal and hutch are assemblies. They build their carcass here and
//! delegate the drawers and shelves to the drawer and shelf components, run
//! against a context for the interior opening.

use crate::component::ConfiguredComponent;
use crate::drawer::{FileDrawer, FileDrawerConfig, StandardDrawer, StandardDrawerConfig};
use crate::error::ComponentResult;
use crate::rules::carcass_panels;
use crate::shelf::{FixedShelf, FixedShelfConfig};
use cabinetkit_core::{
    ComponentContext, CutoutSpec, GenerationResult, GeometryResult, HardwareItem, Panel,
    PanelType, ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Interior opening of a carcass built from `ctx.material`.
fn interior(ctx: &ComponentContext, height: f64, depth: f64) -> GeometryResult<ComponentContext> {
    let t = ctx.thickness();
    Ok(ComponentContext::new(ctx.width - 2.0 * t, height - 2.0 * t, depth)?
        .with_material(ctx.material)
        .with_position(ctx.position.offset(t, t)?)
        .with_section_index(ctx.section_index)
        .with_cabinet(ctx.width, height, depth)?)
}

/// Re-label another component's messages with the part they came from.
fn prefixed(part: &str, inner: ValidationResult) -> ValidationResult {
    ValidationResult {
        errors: inner.errors.into_iter().map(|e| format!("{}: {}", part, e)).collect(),
        warnings: inner.warnings.into_iter().map(|w| format!("{}: {}", part, w)).collect(),
    }
}

// =============================================================================
// Work surface
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskSurfaceConfig {
    pub desk_height: f64,
    pub overhang_front: f64,
    pub overhang_sides: f64,
    pub grommet_count: u32,
    pub grommet_diameter: f64,
}

impl Default for DeskSurfaceConfig {
    fn default() -> Self {
        Self {
            desk_height: 30.0,
            overhang_front: 1.0,
            overhang_sides: 0.0,
            grommet_count: 0,
            grommet_diameter: 2.5,
        }
    }
}

/// Grommets sit this far in from the back edge of the desktop.
const GROMMET_BACK_INSET: f64 = 3.0;

/// A desktop at seated working height.
#[derive(Debug, Default)]
pub struct DeskSurface;

impl ConfiguredComponent for DeskSurface {
    type Config = DeskSurfaceConfig;
    const NAME: &'static str = "desk surface";

    fn check(&self, config: &DeskSurfaceConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if result.require_range("desk_height", config.desk_height, 22.0, 48.0)
            && !(28.0..=31.0).contains(&config.desk_height)
        {
            result.warning(format!(
                "desk height of {:.2}\" is outside the 28\"-31\" seated range",
                config.desk_height
            ));
        }
        result.require_range("overhang_front", config.overhang_front, 0.0, 12.0);
        result.require_range("overhang_sides", config.overhang_sides, 0.0, 12.0);
        if config.grommet_count > 0
            && result.require_range("grommet_diameter", config.grommet_diameter, 1.0, 4.0)
            && f64::from(config.grommet_count) * (config.grommet_diameter + 2.0) > ctx.width
        {
            result.error(format!("{} grommets do not fit across the desk", config.grommet_count));
        }
        if ctx.depth < 20.0 {
            result.warning("desks shallower than 20\" leave little room for a keyboard and monitor");
        }
        result
    }

    fn build(&self, config: &DeskSurfaceConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let width = ctx.width + 2.0 * config.overhang_sides;
        let depth = ctx.depth + config.overhang_front;
        let y = (config.desk_height - ctx.thickness()).max(0.0);

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(PanelType::Desktop, width, depth, ctx.material, ctx.position.offset(0.0, y)?)?
                .with_label("Desktop"),
        );

        if config.grommet_count > 0 {
            let spacing = width / f64::from(config.grommet_count + 1);
            let grommets = (1..=config.grommet_count)
                .map(|i| {
                    CutoutSpec::circle(
                        PanelType::Desktop,
                        spacing * f64::from(i),
                        depth - GROMMET_BACK_INSET,
                        config.grommet_diameter,
                    )
                    .map(|c| c.with_purpose("grommet"))
                })
                .collect::<GeometryResult<Vec<_>>>()?;
            result.insert_metadata("cutouts", grommets);
            result.add_hardware(HardwareItem::new(
                format!("Desk grommet {}\"", config.grommet_diameter),
                config.grommet_count,
            ));
        }
        result.insert_metadata("desk_height", config.desk_height);
        Ok(result)
    }
}

// =============================================================================
// Pedestal
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PedestalConfig {
    pub drawer_count: u32,
    pub file_drawer: bool,
    pub reveal: f64,
}

impl Default for PedestalConfig {
    fn default() -> Self {
        Self {
            drawer_count: 3,
            file_drawer: false,
            reveal: 0.125,
        }
    }
}

/// Height of the file drawer opening at the bottom of a pedestal.
pub const FILE_DRAWER_OPENING: f64 = 12.0;

/// The contexts and configs the pedestal's drawers are built from.
struct PedestalPlan {
    file: Option<(ComponentContext, FileDrawerConfig)>,
    stack: Option<(ComponentContext, StandardDrawerConfig)>,
}

impl PedestalPlan {
    fn new(config: &PedestalConfig, ctx: &ComponentContext) -> GeometryResult<Self> {
        let opening = interior(ctx, ctx.height, ctx.depth)?;
        let t = ctx.thickness();
        let stack_count = if config.file_drawer {
            config.drawer_count.saturating_sub(1)
        } else {
            config.drawer_count
        };

        let file = if config.file_drawer {
            let file_ctx = ComponentContext::new(opening.width, FILE_DRAWER_OPENING, opening.depth)?
                .with_material(ctx.material)
                .with_position(opening.position);
            let file_config = FileDrawerConfig {
                reveal: config.reveal,
                ..FileDrawerConfig::default()
            };
            Some((file_ctx, file_config))
        } else {
            None
        };

        let stack = if stack_count > 0 {
            let stack_ctx = match &file {
                Some((file_ctx, _)) => ComponentContext::new(
                    opening.width,
                    opening.height - file_ctx.height - t,
                    opening.depth,
                )?
                .with_material(ctx.material)
                .with_position(opening.position.offset(0.0, file_ctx.height + t)?),
                None => opening.clone(),
            }
            // the carcass top closes the stack
            .with_skip_top_divider(true);
            let stack_config = StandardDrawerConfig {
                count: stack_count,
                reveal: config.reveal,
                ..StandardDrawerConfig::default()
            };
            Some((stack_ctx, stack_config))
        } else {
            None
        };
        Ok(Self { file, stack })
    }
}

/// Free-standing drawer pedestal under a desk.
#[derive(Debug, Default)]
pub struct DeskPedestal;

impl ConfiguredComponent for DeskPedestal {
    type Config = PedestalConfig;
    const NAME: &'static str = "desk pedestal";

    fn check(&self, config: &PedestalConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if !(1..=5).contains(&config.drawer_count) {
            result.error(format!(
                "drawer_count must be between 1 and 5, got {}",
                config.drawer_count
            ));
            return result;
        }
        result.require_range("reveal", config.reveal, 0.0, 0.5);

        match PedestalPlan::new(config, ctx) {
            Ok(plan) => {
                if let Some((file_ctx, file_config)) = &plan.file {
                    result.merge(prefixed("file drawer", FileDrawer.check(file_config, file_ctx)));
                }
                if let Some((stack_ctx, stack_config)) = &plan.stack {
                    result.merge(prefixed("drawers", StandardDrawer.check(stack_config, stack_ctx)));
                }
            }
            Err(e) => result.error(format!("pedestal is too small for its drawers: {}", e)),
        }
        result
    }

    fn build(&self, config: &PedestalConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let plan = PedestalPlan::new(config, ctx)?;

        let mut result = GenerationResult::new();
        result.add_panels(carcass_panels(ctx, ctx.width, ctx.height, ctx.depth)?);
        if let Some((file_ctx, file_config)) = &plan.file {
            result.merge(FileDrawer.build(file_config, file_ctx)?);
        }
        if let Some((stack_ctx, stack_config)) = &plan.stack {
            result.merge(StandardDrawer.build(stack_config, stack_ctx)?);
        }
        result.add_hardware(HardwareItem::new("Leveling foot", 4));
        Ok(result)
    }
}

// =============================================================================
// Keyboard tray
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardTrayConfig {
    pub tray_width: f64,
    pub tray_depth: f64,
    pub slide_length: f64,
    pub drop: f64,
    pub enclosure: bool,
}

impl Default for KeyboardTrayConfig {
    fn default() -> Self {
        Self {
            tray_width: 24.0,
            tray_depth: 10.0,
            slide_length: 14.0,
            drop: 2.0,
            enclosure: false,
        }
    }
}

/// Pull-out keyboard tray hung below the desktop.
#[derive(Debug, Default)]
pub struct KeyboardTray;

impl ConfiguredComponent for KeyboardTray {
    type Config = KeyboardTrayConfig;
    const NAME: &'static str = "keyboard tray";

    fn check(&self, config: &KeyboardTrayConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if result.require_positive("tray_width", config.tray_width) {
            if config.tray_width > ctx.width {
                result.error(format!(
                    "tray width {:.2}\" exceeds the {:.2}\" opening",
                    config.tray_width, ctx.width
                ));
            } else if config.tray_width < 15.0 {
                result.warning("trays narrower than 15\" will not hold a full keyboard");
            }
        }
        if result.require_positive("slide_length", config.slide_length)
            && config.slide_length + 1.0 > ctx.depth
        {
            result.error("slides are longer than the section is deep");
        }
        if result.require_positive("tray_depth", config.tray_depth)
            && config.tray_depth > config.slide_length
        {
            result.warning("tray is deeper than its slides; it will not fully retract");
        }
        result.require_range("drop", config.drop, 0.0, 6.0);
        result
    }

    fn build(&self, config: &KeyboardTrayConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let t = ctx.thickness();
        let y = (ctx.height - config.drop - t).max(0.0);
        let x = (ctx.width - config.tray_width) / 2.0;

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(
                PanelType::KeyboardTray,
                config.tray_width,
                config.tray_depth,
                ctx.material,
                ctx.position.offset(x, y)?,
            )?
            .with_label("Keyboard tray"),
        );
        if config.enclosure {
            let height = config.drop + t;
            for (label, ex) in [("Left", x - t), ("Right", x + config.tray_width)] {
                result.add_panel(
                    Panel::new(
                        PanelType::KeyboardEnclosure,
                        config.slide_length,
                        height,
                        ctx.material,
                        ctx.position.offset(ex.max(0.0), y)?,
                    )?
                    .with_label(format!("{} enclosure side", label)),
                );
            }
        }
        result.add_hardware(
            HardwareItem::new(format!("Keyboard tray slide {}\"", config.slide_length), 1)
                .with_notes("pair"),
        );
        Ok(result)
    }
}

// =============================================================================
// Monitor shelf
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorShelfConfig {
    pub riser_height: f64,
    pub shelf_depth: f64,
    pub support_count: u32,
}

impl Default for MonitorShelfConfig {
    fn default() -> Self {
        Self {
            riser_height: 5.0,
            shelf_depth: 10.0,
            support_count: 2,
        }
    }
}

/// Raised shelf lifting monitors to eye level.
#[derive(Debug, Default)]
pub struct MonitorShelf;

impl ConfiguredComponent for MonitorShelf {
    type Config = MonitorShelfConfig;
    const NAME: &'static str = "monitor shelf";

    fn check(&self, config: &MonitorShelfConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if result.require_range("riser_height", config.riser_height, 2.0, 10.0)
            && config.riser_height > 8.0
        {
            result.warning("monitor shelves over 8\" usually put screens above eye level");
        }
        if result.require_positive("shelf_depth", config.shelf_depth) && config.shelf_depth > ctx.depth {
            result.error("shelf is deeper than the desk");
        }
        if !(2..=4).contains(&config.support_count) {
            result.error(format!(
                "support_count must be between 2 and 4, got {}",
                config.support_count
            ));
        } else if ctx.width / f64::from(config.support_count - 1) > 36.0 {
            result.warning("more than 36\" between supports; the shelf may sag");
        }
        if config.riser_height <= ctx.thickness() {
            result.error("riser height must exceed the shelf thickness");
        }
        result
    }

    fn build(&self, config: &MonitorShelfConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let t = ctx.thickness();
        let back = ctx.depth - config.shelf_depth;

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(
                PanelType::MonitorShelf,
                ctx.width,
                config.shelf_depth,
                ctx.material,
                ctx.position.offset(0.0, config.riser_height - t)?,
            )?
            .with_metadata("depth_offset", back)
            .with_label("Monitor shelf"),
        );
        let gaps = f64::from(config.support_count.max(2) - 1);
        for i in 0..config.support_count {
            let x = (ctx.width - t) * f64::from(i) / gaps;
            result.add_panel(
                Panel::new(
                    PanelType::MonitorRiser,
                    config.shelf_depth,
                    config.riser_height - t,
                    ctx.material,
                    ctx.position.offset(x, 0.0)?,
                )?
                .with_label(format!("Riser {}", i + 1)),
            );
        }
        result.add_hardware(HardwareItem::new("Confirmat screw", config.support_count * 2));
        Ok(result)
    }
}

// =============================================================================
// Hutch
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HutchConfig {
    pub hutch_height: f64,
    pub hutch_depth: f64,
    pub shelf_count: u32,
    pub wire_chase: bool,
}

impl Default for HutchConfig {
    fn default() -> Self {
        Self {
            hutch_height: 36.0,
            hutch_depth: 12.0,
            shelf_count: 1,
            wire_chase: false,
        }
    }
}

pub const WIRE_CHASE_WIDTH: f64 = 3.0;

/// Open shelving unit standing on the back of a desk.
#[derive(Debug, Default)]
pub struct Hutch;

impl ConfiguredComponent for Hutch {
    type Config = HutchConfig;
    const NAME: &'static str = "hutch";

    fn check(&self, config: &HutchConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let height_ok = result.require_range("hutch_height", config.hutch_height, 12.0, 60.0);
        let depth_ok = result.require_range("hutch_depth", config.hutch_depth, 6.0, 16.0);
        if depth_ok && config.hutch_depth > ctx.depth {
            result.error("hutch is deeper than the desk it stands on");
        } else if depth_ok && ctx.depth - config.hutch_depth < 12.0 {
            result.warning("less than 12\" of desk remains in front of the hutch");
        }
        if config.shelf_count > 6 {
            result.error(format!("shelf_count must be at most 6, got {}", config.shelf_count));
        } else if config.shelf_count > 0 && height_ok && depth_ok {
            match interior(ctx, config.hutch_height, config.hutch_depth) {
                Ok(inner) => {
                    let shelves = FixedShelfConfig {
                        count: config.shelf_count,
                        ..FixedShelfConfig::default()
                    };
                    result.merge(prefixed("shelves", FixedShelf.check(&shelves, &inner)));
                }
                Err(e) => result.error(format!("hutch interior: {}", e)),
            }
        }
        result
    }

    fn build(&self, config: &HutchConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let mut result = GenerationResult::new();
        result.add_panels(carcass_panels(ctx, ctx.width, config.hutch_height, config.hutch_depth)?);

        if config.shelf_count > 0 {
            let inner = interior(ctx, config.hutch_height, config.hutch_depth)?;
            let shelves = FixedShelfConfig {
                count: config.shelf_count,
                ..FixedShelfConfig::default()
            };
            result.merge(FixedShelf.build(&shelves, &inner)?);
        }
        if config.wire_chase {
            result.add_panel(
                Panel::new(
                    PanelType::WireChase,
                    WIRE_CHASE_WIDTH,
                    config.hutch_height,
                    ctx.material,
                    ctx.position.offset((ctx.width - WIRE_CHASE_WIDTH) / 2.0, 0.0)?,
                )?
                .with_label("Wire chase cover"),
            );
        }
        result.add_hardware(HardwareItem::new("Hutch mounting bracket", 2));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use serde_json::json;

    #[test]
    fn test_desk_surface_grommets() {
        let ctx = ComponentContext::new(60.0, 30.0, 24.0).unwrap();
        let result = DeskSurface.generate(&json!({"grommet_count": 2}), &ctx).unwrap();
        let desktop = &result.panels[0];
        assert_eq!((desktop.width, desktop.height), (60.0, 25.0));
        assert_eq!(desktop.position.y, 29.25);
        let cutouts = result.metadata("cutouts").and_then(|m| m.as_cutouts()).unwrap();
        assert_eq!(cutouts.len(), 2);
        assert_eq!(cutouts[0].x, 20.0);
        assert_eq!(result.hardware_quantity("Desk grommet 2.5\""), 2);
    }

    #[test]
    fn test_desk_height_ergonomics() {
        let ctx = ComponentContext::new(60.0, 30.0, 24.0).unwrap();
        let result = DeskSurface.validate(&json!({"desk_height": 36}), &ctx);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(!DeskSurface.validate(&json!({"desk_height": 50}), &ctx).is_valid());
    }

    #[test]
    fn test_pedestal_with_file_drawer() {
        let ctx = ComponentContext::new(16.0, 28.5, 23.25).unwrap();
        let config = json!({"drawer_count": 2, "file_drawer": true});
        let validation = DeskPedestal.validate(&config, &ctx);
        assert!(validation.is_valid(), "{:?}", validation.errors);

        let result = DeskPedestal.generate(&config, &ctx).unwrap();
        assert_eq!(result.count_of_type(PanelType::DrawerFront), 2);
        assert_eq!(result.count_of_type(PanelType::LeftSide), 1);
        assert_eq!(result.count_of_type(PanelType::HorizontalDivider), 0);
        assert_eq!(result.hardware_quantity("Hanging file rail"), 2);
        assert_eq!(result.hardware_quantity("Leveling foot"), 4);
    }

    #[test]
    fn test_pedestal_errors_name_the_part() {
        let ctx = ComponentContext::new(16.0, 10.0, 23.25).unwrap();
        let result = DeskPedestal.validate(&json!({"drawer_count": 5}), &ctx);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.starts_with("drawers: ")));
    }

    #[test]
    fn test_keyboard_tray_enclosure() {
        let ctx = ComponentContext::new(30.0, 28.0, 22.0).unwrap();
        let result = KeyboardTray.generate(&json!({"enclosure": true}), &ctx).unwrap();
        assert_eq!(result.count_of_type(PanelType::KeyboardEnclosure), 2);
        assert_eq!(result.hardware_quantity("Keyboard tray slide 14\""), 1);
        assert!(!KeyboardTray.validate(&json!({"tray_width": 32}), &ctx).is_valid());
    }

    #[test]
    fn test_monitor_shelf_supports() {
        let ctx = ComponentContext::new(48.0, 12.0, 24.0).unwrap();
        let result = MonitorShelf.generate(&json!({"support_count": 3}), &ctx).unwrap();
        assert_eq!(result.count_of_type(PanelType::MonitorRiser), 3);
        let risers: Vec<_> = result.panels_of_type(PanelType::MonitorRiser).collect();
        assert_eq!(risers[2].position.x, 47.25);
    }

    #[test]
    fn test_hutch_with_shelves() {
        let ctx = ComponentContext::new(48.0, 36.0, 30.0).unwrap();
        let config = json!({"shelf_count": 2, "wire_chase": true});
        assert!(Hutch.validate(&config, &ctx).is_valid());
        let result = Hutch.generate(&config, &ctx).unwrap();
        assert_eq!(result.count_of_type(PanelType::Shelf), 2);
        assert_eq!(result.count_of_type(PanelType::WireChase), 1);
        assert!(result.metadata("dado_specs").is_some());
    }
}
