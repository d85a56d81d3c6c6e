//! Fixed (dadoed) and adjustable (pin-supported) shelves.

use crate::component::ConfiguredComponent;
use crate::error::ComponentResult;
use cabinetkit_core::{
    ComponentContext, DadoSpec, GenerationResult, HardwareItem, Panel, PanelType,
    PinHolePattern, ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Longest unsupported span before shelves visibly sag under load.
pub const MAX_UNSUPPORTED_SPAN: f64 = 36.0;

/// Depth of a drilled shelf-pin hole.
pub const PIN_HOLE_DEPTH: f64 = 0.375;

const SIDE_PANELS: [&str; 2] = ["left_side", "right_side"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedShelfConfig {
    pub count: u32,
    pub dado_depth: f64,
    pub setback: f64,
}

impl Default for FixedShelfConfig {
    fn default() -> Self {
        Self {
            count: 1,
            dado_depth: 0.25,
            setback: 0.0,
        }
    }
}

/// Shelves captured in dados cut into both sides.
#[derive(Debug, Default)]
pub struct FixedShelf;

impl FixedShelf {
    fn spacing(config: &FixedShelfConfig, ctx: &ComponentContext) -> f64 {
        ctx.height / f64::from(config.count + 1)
    }
}

impl ConfiguredComponent for FixedShelf {
    type Config = FixedShelfConfig;
    const NAME: &'static str = "fixed shelf";

    fn check(&self, config: &FixedShelfConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let t = ctx.thickness();

        if config.count == 0 {
            result.error("count must be at least 1");
        }
        if result.require_non_negative("dado_depth", config.dado_depth) && config.dado_depth >= t {
            result.error(format!(
                "dado_depth {} must be less than the side thickness {}",
                config.dado_depth, t
            ));
        } else if config.dado_depth > t / 2.0 {
            result.warning("dado_depth is more than half the side thickness");
        }
        if result.require_non_negative("setback", config.setback) && config.setback >= ctx.depth {
            result.error("setback must be less than the section depth");
        }

        if config.count > 0 {
            let clear = Self::spacing(config, ctx) - t;
            if clear <= 0.0 {
                result.error(format!("{} shelves do not fit in the section height", config.count));
            } else if clear < 4.0 {
                result.warning(format!("shelf spacing of {:.2}\" is very tight", clear));
            }
        }
        if ctx.width > MAX_UNSUPPORTED_SPAN {
            result.warning(format!(
                "shelf span of {:.2}\" exceeds {}\"; consider a centre support",
                ctx.width, MAX_UNSUPPORTED_SPAN
            ));
        }
        result
    }

    fn build(&self, config: &FixedShelfConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let t = ctx.thickness();
        let spacing = Self::spacing(config, ctx);
        let width = ctx.width + 2.0 * config.dado_depth;
        let depth = ctx.depth - config.setback;

        let mut result = GenerationResult::new();
        let mut dados = Vec::new();
        for i in 1..=config.count {
            let y = spacing * f64::from(i) - t / 2.0;
            result.add_panel(
                Panel::new(PanelType::Shelf, width, depth, ctx.material, ctx.position.offset(0.0, y)?)?
                    .with_label(format!("Fixed shelf {}", i)),
            );
            for panel_id in SIDE_PANELS {
                dados.push(DadoSpec {
                    panel_id: panel_id.to_string(),
                    position: y,
                    width: t,
                    depth: config.dado_depth,
                    length: (config.setback > 0.0).then_some(depth),
                });
            }
        }
        result.insert_metadata("dado_specs", dados);
        result.insert_metadata("shelf_spacing", spacing);
        Ok(result)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustableShelfConfig {
    pub count: u32,
    pub pin_spacing: f64,
    pub pin_inset: f64,
    pub pin_start: f64,
    pub pin_end_offset: f64,
    pub clearance: f64,
    pub setback: f64,
    pub pin_diameter: f64,
}

impl Default for AdjustableShelfConfig {
    fn default() -> Self {
        Self {
            count: 2,
            pin_spacing: 1.26,
            pin_inset: 1.5,
            pin_start: 6.0,
            pin_end_offset: 6.0,
            clearance: 0.0625,
            setback: 0.0,
            pin_diameter: 0.197,
        }
    }
}

impl AdjustableShelfConfig {
    /// Holes per column that fit between the start and end offsets.
    pub fn holes_per_column(&self, height: f64) -> u32 {
        let run = height - self.pin_start - self.pin_end_offset;
        if run < 0.0 || self.pin_spacing <= 0.0 {
            return 0;
        }
        (run / self.pin_spacing).floor() as u32 + 1
    }

    /// Nearest hole height at or above `y`, limited to the drilled run.
    fn snap(&self, y: f64, holes: u32) -> f64 {
        let index = ((y - self.pin_start) / self.pin_spacing).round().max(0.0) as u32;
        self.pin_start + self.pin_spacing * f64::from(index.min(holes.saturating_sub(1)))
    }
}

/// Loose shelves resting on pins in a line-bored hole pattern.
#[derive(Debug, Default)]
pub struct AdjustableShelf;

impl ConfiguredComponent for AdjustableShelf {
    type Config = AdjustableShelfConfig;
    const NAME: &'static str = "adjustable shelf";

    fn check(&self, config: &AdjustableShelfConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();

        if config.count == 0 {
            result.error("count must be at least 1");
        }
        result.require_positive("pin_spacing", config.pin_spacing);
        result.require_non_negative("pin_start", config.pin_start);
        result.require_non_negative("pin_end_offset", config.pin_end_offset);
        result.require_range("pin_diameter", config.pin_diameter, 0.1, 0.5);
        if result.require_positive("pin_inset", config.pin_inset)
            && 2.0 * config.pin_inset >= ctx.depth - config.setback
        {
            result.error("pin_inset leaves no room between the front and back hole columns");
        }
        if result.require_non_negative("clearance", config.clearance)
            && 2.0 * config.clearance >= ctx.width
        {
            result.error("clearance is larger than the shelf");
        }
        if result.require_non_negative("setback", config.setback) && config.setback >= ctx.depth {
            result.error("setback must be less than the section depth");
        }

        if config.pin_spacing > 0.0 {
            let holes = config.holes_per_column(ctx.height);
            if holes == 0 {
                result.error("pin_start and pin_end_offset leave no room for holes");
            } else if holes < config.count {
                result.warning(format!(
                    "only {} hole positions for {} shelves",
                    holes, config.count
                ));
            }
        }
        if ctx.width > MAX_UNSUPPORTED_SPAN {
            result.warning(format!(
                "shelf span of {:.2}\" exceeds {}\"; consider a centre support",
                ctx.width, MAX_UNSUPPORTED_SPAN
            ));
        }
        result
    }

    fn build(
        &self,
        config: &AdjustableShelfConfig,
        ctx: &ComponentContext,
    ) -> ComponentResult<GenerationResult> {
        let depth = ctx.depth - config.setback;
        let width = ctx.width - 2.0 * config.clearance;
        let holes = config.holes_per_column(ctx.height);

        let mut result = GenerationResult::new();
        let mut positions = Vec::with_capacity(config.count as usize);
        for i in 1..=config.count {
            let even = ctx.height * f64::from(i) / f64::from(config.count + 1);
            let y = config.snap(even, holes);
            positions.push(y);
            result.add_panel(
                Panel::new(
                    PanelType::Shelf,
                    width,
                    depth,
                    ctx.material,
                    ctx.position.offset(config.clearance, y)?,
                )?
                .with_label(format!("Adjustable shelf {}", i)),
            );
        }

        let patterns: Vec<PinHolePattern> = SIDE_PANELS
            .iter()
            .map(|panel_id| PinHolePattern {
                panel_id: panel_id.to_string(),
                columns: vec![config.pin_inset, depth - config.pin_inset],
                start_height: config.pin_start,
                spacing: config.pin_spacing,
                count: holes,
                hole_diameter: config.pin_diameter,
                hole_depth: PIN_HOLE_DEPTH,
            })
            .collect();

        result.insert_metadata("pin_holes", patterns);
        result.insert_metadata("shelf_positions", positions);
        result.add_hardware(HardwareItem::new("Shelf pin", config.count * 4).with_notes(format!(
            "{:.1}mm",
            config.pin_diameter * 25.4
        )));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use serde_json::json;

    fn ctx() -> ComponentContext {
        ComponentContext::new(30.0, 30.0, 12.0).unwrap()
    }

    #[test]
    fn test_fixed_shelf_defaults() {
        let result = FixedShelf.generate(&json!({}), &ctx()).unwrap();
        assert_eq!(result.panels.len(), 1);
        assert_eq!(result.panels[0].width, 30.5);
        assert_eq!(result.panels[0].position.y, 14.625);
        let dados = result.metadata("dado_specs").and_then(|m| m.as_dados()).unwrap();
        assert_eq!(dados.len(), 2);
        assert_eq!(dados[0].panel_id, "left_side");
        assert_eq!(dados[1].depth, 0.25);
        assert!(result.hardware.is_empty());
    }

    #[test]
    fn test_fixed_shelf_rejects_deep_dado() {
        let result = FixedShelf.validate(&json!({"dado_depth": 0.75}), &ctx());
        assert!(!result.is_valid());
        let result = FixedShelf.validate(&json!({"dado_depth": 0.5}), &ctx());
        assert!(result.is_valid());
        assert!(result.has_warnings());
    }

    #[test]
    fn test_fixed_shelf_too_many() {
        let result = FixedShelf.validate(&json!({"count": 40}), &ctx());
        assert!(!result.is_valid());
    }

    #[test]
    fn test_adjustable_shelf_pins() {
        let result = AdjustableShelf.generate(&json!({}), &ctx()).unwrap();
        assert_eq!(result.panels.len(), 2);
        assert_eq!(result.panels[0].width, 29.875);
        assert_eq!(result.hardware_quantity("Shelf pin"), 8);

        let patterns = result.metadata("pin_holes").and_then(|m| m.as_pin_holes()).unwrap();
        assert_eq!(patterns.len(), 2);
        // (30 - 6 - 6) / 1.26 = 14.28 -> 15 holes
        assert_eq!(patterns[0].count, 15);
        assert_eq!(patterns[0].columns, vec![1.5, 10.5]);
    }

    #[test]
    fn test_adjustable_shelves_sit_on_holes() {
        let config = AdjustableShelfConfig::default();
        let result = AdjustableShelf.generate(&json!({}), &ctx()).unwrap();
        let positions = result.metadata("shelf_positions").and_then(|m| m.as_numbers()).unwrap();
        for y in positions {
            let steps = (y - config.pin_start) / config.pin_spacing;
            assert!((steps - steps.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_adjustable_shelf_short_section() {
        let short = ComponentContext::new(30.0, 10.0, 12.0).unwrap();
        let result = AdjustableShelf.validate(&json!({}), &short);
        assert!(!result.is_valid());
    }
}
