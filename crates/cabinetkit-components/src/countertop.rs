//! Countertop slab with backsplash and an optional sink cutout.

use crate::component::ConfiguredComponent;
use crate::error::ComponentResult;
use cabinetkit_core::{
    AutoOr, ComponentContext, CutoutSpec, GenerationResult, HardwareItem, Panel, PanelType, Position,
    ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Solid stock required between a sink cutout and any countertop edge.
pub const MIN_SINK_EDGE: f64 = 1.5;

/// Overhangs beyond this need corbels or brackets underneath.
pub const UNSUPPORTED_OVERHANG: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub width: f64,
    pub depth: f64,
    /// Centre of the sink measured from the countertop's left edge.
    pub center: AutoOr<f64>,
    /// Distance from the countertop's front edge to the front of the cutout.
    pub front_setback: f64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            width: 22.0,
            depth: 16.0,
            center: AutoOr::Auto,
            front_setback: 2.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountertopConfig {
    pub thickness: f64,
    pub overhang_front: f64,
    pub overhang_left: f64,
    pub overhang_right: f64,
    pub backsplash_height: f64,
    pub sink: Option<SinkConfig>,
}

impl Default for CountertopConfig {
    fn default() -> Self {
        Self {
            thickness: 1.25,
            overhang_front: 1.0,
            overhang_left: 0.0,
            overhang_right: 0.0,
            backsplash_height: 4.0,
            sink: None,
        }
    }
}

impl CountertopConfig {
    fn slab(&self, ctx: &ComponentContext) -> (f64, f64) {
        (
            ctx.width + self.overhang_left + self.overhang_right,
            ctx.depth + self.overhang_front,
        )
    }
}

/// A countertop resting on the section's carcass.
#[derive(Debug, Default)]
pub struct StandardCountertop;

impl ConfiguredComponent for StandardCountertop {
    type Config = CountertopConfig;
    const NAME: &'static str = "countertop";

    fn check(&self, config: &CountertopConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_range("thickness", config.thickness, 0.5, 3.0);
        result.require_range("backsplash_height", config.backsplash_height, 0.0, 18.0);
        for (name, overhang) in [
            ("overhang_front", config.overhang_front),
            ("overhang_left", config.overhang_left),
            ("overhang_right", config.overhang_right),
        ] {
            if result.require_range(name, overhang, 0.0, 16.0) && overhang > UNSUPPORTED_OVERHANG {
                result.warning(format!(
                    "{} of {}\" needs support brackets",
                    name, overhang
                ));
            }
        }

        if let Some(sink) = &config.sink {
            let (width, depth) = config.slab(ctx);
            let sink_ok = result.require_positive("sink.width", sink.width)
                & result.require_positive("sink.depth", sink.depth)
                & result.require_non_negative("sink.front_setback", sink.front_setback);
            if sink_ok {
                let center = sink.center.resolve(|| width / 2.0);
                if center - sink.width / 2.0 < MIN_SINK_EDGE
                    || center + sink.width / 2.0 > width - MIN_SINK_EDGE
                {
                    result.error(format!(
                        "a {}\" sink centred at {:.2}\" leaves less than {}\" at the countertop ends",
                        sink.width, center, MIN_SINK_EDGE
                    ));
                }
                if sink.front_setback + sink.depth > depth - MIN_SINK_EDGE {
                    result.error(format!(
                        "a {}\" deep sink does not fit a {:.2}\" deep countertop",
                        sink.depth, depth
                    ));
                }
                if sink.front_setback < MIN_SINK_EDGE {
                    result.warning("sink sits very close to the front edge");
                }
            }
        }
        result
    }

    fn build(&self, config: &CountertopConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let (width, depth) = config.slab(ctx);
        let stock = ctx.material.with_thickness(config.thickness)?;
        let x = (ctx.position.x - config.overhang_left).max(0.0);

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(
                PanelType::Countertop,
                width,
                depth,
                stock,
                Position::new(x, ctx.position.y + ctx.height)?,
            )?
            .with_label("Countertop"),
        );
        if config.backsplash_height > 0.0 {
            result.add_panel(
                Panel::new(
                    PanelType::Backsplash,
                    width,
                    config.backsplash_height,
                    ctx.material,
                    Position::new(x, ctx.position.y + ctx.height + config.thickness)?,
                )?
                .with_metadata("depth_offset", depth - ctx.thickness())
                .with_label("Backsplash"),
            );
        }

        if let Some(sink) = &config.sink {
            let center = sink.center.resolve(|| width / 2.0);
            let cutout = CutoutSpec::rectangle(
                PanelType::Countertop,
                center,
                sink.front_setback + sink.depth / 2.0,
                sink.width,
                sink.depth,
            )?
            .with_purpose("sink");
            result.insert_metadata("cutouts", vec![cutout]);
            result.add_hardware(HardwareItem::new("Sink mounting clip", 8));
        }

        let brackets = (width / 24.0).ceil() as u32 + 1;
        result.add_hardware(
            HardwareItem::new("Countertop fastening bracket", brackets)
                .with_notes("screw up through the top rail"),
        );
        result.insert_metadata("countertop_depth", depth);
        result.insert_metadata("countertop_width", width);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use serde_json::json;

    fn base() -> ComponentContext {
        ComponentContext::new(36.0, 34.5, 24.0).unwrap()
    }

    #[test]
    fn test_countertop_with_overhangs() {
        let config = json!({"overhang_left": 1, "overhang_right": 1.5});
        let result = StandardCountertop.generate(&config, &base()).unwrap();
        let top = result.panels_of_type(PanelType::Countertop).next().unwrap();
        assert_eq!((top.width, top.height), (38.5, 25.0));
        assert_eq!(top.material.thickness, 1.25);
        assert_eq!(top.position.y, 34.5);
        assert_eq!(result.count_of_type(PanelType::Backsplash), 1);
        assert_eq!(result.hardware_quantity("Countertop fastening bracket"), 3);
    }

    #[test]
    fn test_no_backsplash() {
        let result = StandardCountertop
            .generate(&json!({"backsplash_height": 0}), &base())
            .unwrap();
        assert_eq!(result.count_of_type(PanelType::Backsplash), 0);
    }

    #[test]
    fn test_sink_cutout_centred_by_default() {
        let config = json!({"sink": {"width": 22, "depth": 16}});
        assert!(StandardCountertop.validate(&config, &base()).is_valid());
        let result = StandardCountertop.generate(&config, &base()).unwrap();
        let cutouts = result.metadata("cutouts").and_then(|m| m.as_cutouts()).unwrap();
        assert_eq!(cutouts[0].x, 18.0);
        assert_eq!(cutouts[0].y, 10.5);
        assert_eq!(result.hardware_quantity("Sink mounting clip"), 8);
    }

    #[test]
    fn test_sink_too_wide() {
        let narrow = ComponentContext::new(24.0, 34.5, 24.0).unwrap();
        let config = json!({"sink": {"width": 22}});
        assert!(!StandardCountertop.validate(&config, &narrow).is_valid());
    }

    #[test]
    fn test_deep_overhang_warns() {
        let result = StandardCountertop.validate(&json!({"overhang_front": 12}), &base());
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.contains("brackets")));
    }
}
