//! Cabinet engine
//!
//! [`CabinetEngine`] ties the crates together: an owned component registry,
//! the engine settings, wall layout and 3D mapping. Every generation goes
//! through validation first; a configuration with errors is never generated.

use cabinetkit_components::{
    register_builtin_components, ComponentError, ComponentRegistry, RegistryError,
};
use cabinetkit_core::{ComponentContext, GenerationResult, GeometryError, HardwareItem, ValidationResult};
use cabinetkit_geometry::{
    layout_sections, map_panels, place_boxes, BoundingBox3D, CabinetFrame, LayoutResult,
    Obstacle, RoomTransform, SectionRequest,
};
use cabinetkit_settings::{EngineSettings, SettingsError};
use serde_json::Value;
use thiserror::Error;

/// Errors raised by [`CabinetEngine`].
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Configuration keys filled from the sampling settings when a component
/// configuration leaves them out.
const SAMPLED_KEYS: [(&str, &str); 2] = [
    ("decorative.arch", "curve_points"),
    ("decorative.scallop", "points_per_scallop"),
];

pub struct CabinetEngine {
    registry: ComponentRegistry,
    settings: EngineSettings,
}

impl CabinetEngine {
    /// Build an engine with every builtin component registered.
    pub fn new(settings: EngineSettings) -> EngineResult<Self> {
        settings.validate()?;
        let registry = ComponentRegistry::new();
        register_builtin_components(&registry)?;
        tracing::info!("Cabinet engine ready with {} components", registry.len());
        Ok(Self { registry, settings })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Section context carrying the configured default material.
    pub fn context(&self, width: f64, height: f64, depth: f64) -> EngineResult<ComponentContext> {
        let material = self.settings.material_spec()?;
        Ok(ComponentContext::new(width, height, depth)?.with_material(material))
    }

    pub fn validate_section(
        &self,
        id: &str,
        config: &Value,
        ctx: &ComponentContext,
    ) -> EngineResult<ValidationResult> {
        let component = self.registry.get(id)?;
        Ok(component.validate(&self.with_sampling(id, config), ctx))
    }

    /// Validate, then generate. Validation errors refuse generation with
    /// [`ComponentError::ValidationFailed`]; warnings are logged and kept out
    /// of the result.
    pub fn generate_section(
        &self,
        id: &str,
        config: &Value,
        ctx: &ComponentContext,
    ) -> EngineResult<GenerationResult> {
        let component = self.registry.get(id)?;
        let config = self.with_sampling(id, config);
        let validation = component.validate(&config, ctx);
        for warning in &validation.warnings {
            tracing::warn!("{}: {}", id, warning);
        }
        if !validation.is_valid() {
            tracing::debug!("refusing to generate {}: {:?}", id, validation.errors);
            return Err(ComponentError::ValidationFailed {
                component: id.to_string(),
                errors: validation.errors,
            }
            .into());
        }
        let result = component.generate(&config, ctx)?;
        tracing::debug!(
            "{} generated {} panels, {} hardware items",
            id,
            result.panels.len(),
            result.hardware.len()
        );
        Ok(result)
    }

    pub fn hardware_for_section(
        &self,
        id: &str,
        config: &Value,
        ctx: &ComponentContext,
    ) -> EngineResult<Vec<HardwareItem>> {
        Ok(self.generate_section(id, config, ctx)?.hardware)
    }

    /// Place section requests along a wall using the configured layout
    /// tuning and clearance overrides.
    pub fn layout_wall(
        &self,
        wall_length: f64,
        wall_height: f64,
        obstacles: &[Obstacle],
        requests: &[SectionRequest],
    ) -> EngineResult<LayoutResult> {
        let config = self.settings.layout_config()?;
        let layout = layout_sections(wall_length, wall_height, obstacles, requests, &config)?;
        if !layout.is_complete() {
            tracing::warn!(
                "{} of {} sections could not be placed",
                layout.skipped.len(),
                requests.len()
            );
        }
        Ok(layout)
    }

    /// Map every panel of a generation result into the cabinet frame.
    pub fn map_result(&self, result: &GenerationResult, frame: &CabinetFrame) -> Vec<BoundingBox3D> {
        map_panels(&result.panels, frame)
    }

    pub fn place_in_room(
        &self,
        boxes: &[BoundingBox3D],
        transform: &RoomTransform,
    ) -> Vec<BoundingBox3D> {
        place_boxes(boxes, transform)
    }

    fn with_sampling(&self, id: &str, config: &Value) -> Value {
        let mut config = config.clone();
        if let Value::Object(map) = &mut config {
            for (component, key) in SAMPLED_KEYS {
                if component == id && !map.contains_key(key) {
                    let points = match key {
                        "curve_points" => self.settings.sampling.arch_curve_points,
                        _ => self.settings.sampling.points_per_scallop,
                    };
                    map.insert(key.to_string(), Value::from(points));
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::PanelType;
    use serde_json::json;

    fn engine() -> CabinetEngine {
        CabinetEngine::new(EngineSettings::default()).unwrap()
    }

    #[test]
    fn test_engine_registers_builtins() {
        let engine = engine();
        assert!(engine.registry().contains("shelf.fixed"));
        assert!(engine.registry().contains("windowseat.bay"));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut settings = EngineSettings::default();
        settings.material.thickness = -0.75;
        assert!(CabinetEngine::new(settings).is_err());
    }

    #[test]
    fn test_generate_refuses_invalid_config() {
        let engine = engine();
        let ctx = engine.context(30.0, 30.0, 12.0).unwrap();
        let err = engine
            .generate_section("shelf.fixed", &json!({"count": "three"}), &ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Component(ComponentError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_unknown_component() {
        let engine = engine();
        let ctx = engine.context(30.0, 30.0, 12.0).unwrap();
        let err = engine.validate_section("shelf.floating", &json!({}), &ctx).unwrap_err();
        assert!(matches!(err, EngineError::Registry(RegistryError::UnknownComponent(_))));
    }

    #[test]
    fn test_sampling_defaults_fill_missing_keys() {
        let mut settings = EngineSettings::default();
        settings.sampling.arch_curve_points = 9;
        let engine = CabinetEngine::new(settings).unwrap();
        let config = engine.with_sampling("decorative.arch", &json!({}));
        assert_eq!(config["curve_points"], json!(9));

        let explicit = engine.with_sampling("decorative.arch", &json!({"curve_points": 40}));
        assert_eq!(explicit["curve_points"], json!(40));

        let other = engine.with_sampling("shelf.fixed", &json!({}));
        assert_eq!(other, json!({}));
    }

    #[test]
    fn test_context_uses_default_material() {
        let mut settings = EngineSettings::default();
        settings.material.thickness = 0.5;
        let engine = CabinetEngine::new(settings).unwrap();
        let ctx = engine.context(24.0, 30.0, 12.0).unwrap();
        let result = engine
            .generate_section("shelf.adjustable", &json!({"count": 1}), &ctx)
            .unwrap();
        let shelf = result.panels_of_type(PanelType::Shelf).next().unwrap();
        assert_eq!(shelf.material.thickness, 0.5);
    }
}
