//! Cabinets fitted under non-flat ceilings.
//!
//! [`SlopedCeiling`] builds an upper section whose sides follow a sloped
//! ceiling and whose top is notched around skylight shafts. [`RadialCeiling`]
//! produces the facet panels that line a bay window's hipped ceiling.

use crate::component::ConfiguredComponent;
use crate::error::{ComponentError, ComponentResult};
use cabinetkit_core::{
    AngleCut, ComponentContext, CutMetadata, GenerationResult, GeometryResult, HardwareItem,
    MaterialSpec, Panel, PanelEdge, PanelType, Point2D, TaperSpec, ValidationResult,
};
use cabinetkit_geometry::radial_ceiling::{RadialCeilingConfig, RadialCeilingService, WallSegment};
use cabinetkit_geometry::skylight::{calculate_skylight_notches, Skylight};
use cabinetkit_geometry::sloped_ceiling::{CeilingSlope, SlopeDirection};
use serde::{Deserialize, Serialize};

// =============================================================================
// Sloped ceiling
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopedCeilingConfig {
    pub slope: Option<CeilingSlope>,
    /// Left edge of the section along the wall.
    pub section_x: f64,
    /// Needed for `right_to_left` slopes; defaults to the section's right edge.
    pub wall_length: Option<f64>,
    pub skylights: Vec<Skylight>,
    pub min_usable_height: f64,
}

impl Default for SlopedCeilingConfig {
    fn default() -> Self {
        Self {
            slope: None,
            section_x: 0.0,
            wall_length: None,
            skylights: Vec::new(),
            min_usable_height: 12.0,
        }
    }
}

/// Ceiling-relative shape of one section.
struct SectionShape {
    /// Section-relative heights of the left and right sides.
    left: f64,
    right: f64,
    taper: Option<TaperSpec>,
}

impl SlopedCeilingConfig {
    fn wall_length(&self, ctx: &ComponentContext) -> f64 {
        self.wall_length.unwrap_or(self.section_x + ctx.width)
    }

    fn shape(&self, slope: &CeilingSlope, ctx: &ComponentContext) -> GeometryResult<SectionShape> {
        let wall = self.wall_length(ctx);
        let floor = ctx.position.y;
        let (left, right) = slope.section_edge_heights(self.section_x, ctx.width, wall);
        let taper = match slope.calculate_section_taper(self.section_x, ctx.width, wall)? {
            Some(t) => Some(TaperSpec::new(t.start_height - floor, t.end_height - floor, t.direction)?),
            None => None,
        };
        Ok(SectionShape {
            left: left - floor,
            right: right - floor,
            taper,
        })
    }
}

/// Upper section whose top follows a sloped ceiling.
#[derive(Debug, Default)]
pub struct SlopedCeiling;

impl ConfiguredComponent for SlopedCeiling {
    type Config = SlopedCeilingConfig;
    const NAME: &'static str = "sloped ceiling";

    fn check(&self, config: &SlopedCeilingConfig, ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let Some(slope) = &config.slope else {
            result.error("slope is required");
            return result;
        };
        if let Err(e) = CeilingSlope::new(slope.angle, slope.start_height, slope.direction, slope.min_height) {
            result.error(format!("invalid slope: {}", e));
            return result;
        }
        result.require_non_negative("section_x", config.section_x);
        result.require_non_negative("min_usable_height", config.min_usable_height);

        match config.wall_length {
            None if slope.direction == SlopeDirection::RightToLeft => {
                result.error("wall_length is required for right_to_left slopes");
            }
            Some(wall) if wall < config.section_x + ctx.width => {
                result.error(format!(
                    "section ends at {:.2}\" but the wall is only {:.2}\" long",
                    config.section_x + ctx.width,
                    wall
                ));
            }
            _ => {}
        }
        for (i, s) in config.skylights.iter().enumerate() {
            if let Err(e) = Skylight::new(s.position, s.width, s.projection_depth, s.projection_angle) {
                result.error(format!("skylight {}: {}", i + 1, e));
            }
        }
        if !result.is_valid() {
            return result;
        }

        let wall = config.wall_length(ctx);
        let required = config.min_usable_height + ctx.position.y;
        if !slope.check_min_height(config.section_x, ctx.width, wall, required) {
            result.error(format!(
                "ceiling drops to {:.2}\" over this section, leaving less than {}\" of cabinet",
                slope.lowest_height(config.section_x, ctx.width, wall),
                config.min_usable_height
            ));
            return result;
        }

        let lowest = slope.lowest_height(config.section_x, ctx.width, wall) - ctx.position.y;
        match calculate_skylight_notches(&config.skylights, config.section_x, ctx.width, ctx.depth) {
            Ok(notches) => {
                for notch in notches {
                    if notch.depth >= lowest - ctx.thickness() {
                        result.error(format!(
                            "skylight shaft at {:.2}\" reaches through the whole section",
                            config.section_x + notch.x_offset
                        ));
                    } else if notch.width > ctx.width * 0.75 {
                        result.warning("a skylight removes most of this section's top");
                    }
                }
            }
            Err(e) => result.error(format!("skylight notch: {}", e)),
        }
        result
    }

    fn build(&self, config: &SlopedCeilingConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let Some(slope) = &config.slope else {
            return Err(ComponentError::InvalidConfig {
                component: Self::NAME.to_string(),
                reason: "slope is required".to_string(),
            });
        };
        let t = ctx.thickness();
        let shape = config.shape(slope, ctx)?;
        let tall = shape.left.max(shape.right);
        let short = shape.left.min(shape.right);
        let notches = calculate_skylight_notches(&config.skylights, config.section_x, ctx.width, ctx.depth)?;

        let mut result = GenerationResult::new();
        result.add_panel(
            Panel::new(PanelType::LeftSide, ctx.depth, shape.left, ctx.material, ctx.position)?
                .with_label("Left side"),
        );
        result.add_panel(
            Panel::new(
                PanelType::RightSide,
                ctx.depth,
                shape.right,
                ctx.material,
                ctx.position.offset(ctx.width - t, 0.0)?,
            )?
            .with_label("Right side"),
        );
        result.add_panel(Panel::new(
            PanelType::Bottom,
            ctx.width - 2.0 * t,
            ctx.depth,
            ctx.material,
            ctx.position.offset(t, 0.0)?,
        )?);

        let mut back = Panel::new(PanelType::Back, ctx.width, tall, MaterialSpec::standard_1_4(), ctx.position)?;
        let mut top_cuts = CutMetadata::default().with_notches(notches.clone());
        if let Some(taper) = shape.taper {
            back = back.with_cut_metadata(CutMetadata::default().with_taper(taper));
            let pitch = (tall - short).atan2(ctx.width - 2.0 * t).to_degrees();
            top_cuts = top_cuts
                .with_angle_cut(AngleCut::new(PanelEdge::Left, pitch, true)?)
                .with_angle_cut(AngleCut::new(PanelEdge::Right, pitch, true)?);
        }
        result.add_panel(back.with_label("Back"));

        // the top runs up the slope between the sides
        let run = ctx.width - 2.0 * t;
        let top_length = run.hypot(tall - short);
        result.add_panel(
            Panel::new(
                PanelType::Top,
                top_length,
                ctx.depth,
                ctx.material,
                ctx.position.offset(t, short - t)?,
            )?
            .with_cut_metadata(top_cuts)
            .with_label("Sloped top"),
        );

        result.add_hardware(HardwareItem::new("Ceiling scribe strip", 1).with_notes(format!(
            "{:.2}\" long",
            top_length
        )));
        result.insert_metadata("edge_heights", vec![shape.left, shape.right]);
        if !notches.is_empty() {
            result.insert_metadata("skylight_notches", notches);
        }
        Ok(result)
    }
}

// =============================================================================
// Radial ceiling
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialCeilingComponentConfig {
    pub walls: Vec<WallSegment>,
    pub edge_height: f64,
    pub apex_height: f64,
    pub apex: Option<Point2D>,
}

impl Default for RadialCeilingComponentConfig {
    fn default() -> Self {
        Self {
            walls: Vec::new(),
            edge_height: 96.0,
            apex_height: 108.0,
            apex: None,
        }
    }
}

impl RadialCeilingComponentConfig {
    fn service(&self) -> RadialCeilingService {
        RadialCeilingService::new(RadialCeilingConfig {
            walls: self.walls.clone(),
            edge_height: self.edge_height,
            apex_height: self.apex_height,
            apex: self.apex,
        })
    }
}

/// Distance along the facet's wall edge to the foot of the apex.
fn apex_offset(start: Point2D, end: Point2D, apex: Point2D) -> f64 {
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let length = dx.hypot(dy);
    ((apex.x - start.x) * dx + (apex.y - start.y) * dy) / length
}

/// Triangular facet panels lining a bay window's hipped ceiling.
#[derive(Debug, Default)]
pub struct RadialCeiling;

impl ConfiguredComponent for RadialCeiling {
    type Config = RadialCeilingComponentConfig;
    const NAME: &'static str = "radial ceiling";

    fn check(&self, config: &RadialCeilingComponentConfig, _ctx: &ComponentContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if config.walls.len() < 3 {
            result.error(format!(
                "a radial ceiling needs at least 3 walls, got {}",
                config.walls.len()
            ));
        }
        for (i, wall) in config.walls.iter().enumerate() {
            result.require_positive(&format!("walls[{}].length", i), wall.length);
        }
        let heights_ok = result.require_positive("edge_height", config.edge_height);
        if heights_ok && config.apex_height <= config.edge_height {
            result.error("apex_height must be above edge_height");
        }
        if !result.is_valid() {
            return result;
        }

        match config.service().geometry() {
            Ok(geometry) => {
                for facet in geometry.facets() {
                    let pitch = (config.apex_height - config.edge_height).atan2(facet.run()).to_degrees();
                    if pitch > 60.0 {
                        result.warning(format!(
                            "facet {} pitches at {:.0}\u{b0}; panels this steep are hard to hang",
                            facet.wall_index + 1,
                            pitch
                        ));
                    }
                }
            }
            Err(e) => result.error(format!("invalid bay geometry: {}", e)),
        }
        result
    }

    fn build(&self, config: &RadialCeilingComponentConfig, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let service = config.service();
        let geometry = service.geometry()?;
        let apex = geometry.apex();

        let mut result = GenerationResult::new();
        for (i, facet) in geometry.facets().iter().enumerate() {
            let (width, slant) = service.facet_panel_dimensions(i)?;
            let pitch = (apex.z - facet.edge_height).atan2(facet.run()).to_degrees();
            result.add_panel(
                Panel::new(PanelType::BayCeilingFacet, width, slant, ctx.material, ctx.position)?
                    .with_metadata("wall_index", facet.wall_index as u32)
                    .with_metadata("pitch", pitch)
                    .with_metadata("edge_height", facet.edge_height)
                    .with_metadata(
                        "apex_offset",
                        apex_offset(facet.edge_start, facet.edge_end, apex.plan()),
                    )
                    .with_label(format!("Ceiling facet {}", i + 1)),
            );
        }
        let count = geometry.facets().len() as u32;
        result.add_hardware(HardwareItem::new("Hip rafter", count));
        result.add_hardware(HardwareItem::new("Ceiling ledger strip", count));
        result.insert_metadata("apex_height", apex.z);
        result.insert_metadata("apex_point", vec![(apex.x, apex.y)]);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use serde_json::json;

    fn slope_config() -> serde_json::Value {
        json!({
            "slope": {"angle": 30, "start_height": 96, "direction": "left_to_right", "min_height": 24},
            "section_x": 12,
        })
    }

    #[test]
    fn test_sloped_sides_follow_ceiling() {
        let ctx = ComponentContext::new(24.0, 40.0, 12.0).unwrap();
        let config = slope_config();
        assert!(SlopedCeiling.validate(&config, &ctx).is_valid());

        let result = SlopedCeiling.generate(&config, &ctx).unwrap();
        let tan = 30f64.to_radians().tan();
        let left = result.panels_of_type(PanelType::LeftSide).next().unwrap();
        let right = result.panels_of_type(PanelType::RightSide).next().unwrap();
        assert!((left.height - (96.0 - 12.0 * tan)).abs() < 1e-9);
        assert!((right.height - (96.0 - 36.0 * tan)).abs() < 1e-9);

        let back = result.panels_of_type(PanelType::Back).next().unwrap();
        let taper = back.cut_metadata.as_ref().and_then(|c| c.taper).unwrap();
        assert_eq!(taper.direction, cabinetkit_core::TaperDirection::LeftToRight);
        assert!((taper.start_height - left.height).abs() < 1e-9);
    }

    #[test]
    fn test_skylight_notches_the_top() {
        let ctx = ComponentContext::new(24.0, 40.0, 12.0).unwrap();
        let mut config = slope_config();
        config["skylights"] = json!([{"position": 20, "width": 8, "projection_depth": 6}]);
        let result = SlopedCeiling.generate(&config, &ctx).unwrap();
        let top = result.panels_of_type(PanelType::Top).next().unwrap();
        let notches = &top.cut_metadata.as_ref().unwrap().notches;
        assert_eq!(notches.len(), 1);
        assert!((notches[0].x_offset - 8.0).abs() < 1e-9);
        assert!((notches[0].width - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_sloped_ceiling_too_low() {
        let ctx = ComponentContext::new(24.0, 40.0, 12.0).unwrap().with_position(
            cabinetkit_core::Position::new(0.0, 84.0).unwrap(),
        );
        let result = SlopedCeiling.validate(&slope_config(), &ctx);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_right_to_left_needs_wall_length() {
        let ctx = ComponentContext::new(24.0, 40.0, 12.0).unwrap();
        let config = json!({
            "slope": {"angle": 20, "start_height": 96, "direction": "right_to_left"},
        });
        assert!(!SlopedCeiling.validate(&config, &ctx).is_valid());
        assert!(!SlopedCeiling.validate(&json!({}), &ctx).is_valid());
    }

    fn square_bay() -> serde_json::Value {
        json!({
            "walls": [
                {"length": 48, "turn": 0},
                {"length": 48, "turn": 90},
                {"length": 48, "turn": 90},
                {"length": 48, "turn": 90},
            ],
            "edge_height": 84,
            "apex_height": 96,
        })
    }

    #[test]
    fn test_radial_facets() {
        let ctx = ComponentContext::new(48.0, 96.0, 48.0).unwrap();
        assert!(RadialCeiling.validate(&square_bay(), &ctx).is_valid());
        let result = RadialCeiling.generate(&square_bay(), &ctx).unwrap();
        assert_eq!(result.count_of_type(PanelType::BayCeilingFacet), 4);
        let facet = &result.panels[0];
        assert!((facet.width - 48.0).abs() < 1e-9);
        assert!((facet.height - 24.0f64.hypot(12.0)).abs() < 1e-9);
        let offset = facet.metadata.get("apex_offset").and_then(|m| m.as_number()).unwrap();
        assert!((offset - 24.0).abs() < 1e-9);
        assert_eq!(result.hardware_quantity("Hip rafter"), 4);
    }

    #[test]
    fn test_radial_needs_three_walls() {
        let ctx = ComponentContext::new(48.0, 96.0, 48.0).unwrap();
        let config = json!({"walls": [{"length": 48}, {"length": 48, "turn": 90}]});
        assert!(!RadialCeiling.validate(&config, &ctx).is_valid());
        let inverted = json!({"walls": square_bay()["walls"], "edge_height": 96, "apex_height": 90});
        assert!(!RadialCeiling.validate(&inverted, &ctx).is_valid());
    }
}
