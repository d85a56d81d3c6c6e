//! Engine-wide settings
//!
//! Settings are organised into sections:
//! - Material defaults applied to new section contexts
//! - Curve sampling used when a component configuration leaves it unset
//! - Wall layout tuning (region minimums, splitting)
//! - Obstacle clearance overrides keyed by obstacle type

pub use cabinetkit_core::units::MeasurementSystem;
use crate::error::{SettingsError, SettingsResult};
use cabinetkit_core::{MaterialSpec, MaterialType};
use cabinetkit_geometry::obstacles::ObstacleType;
use cabinetkit_geometry::wall_layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default stock for section contexts built by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    /// Panel thickness in inches
    pub thickness: f64,
    pub material_type: MaterialType,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            thickness: 0.75,
            material_type: MaterialType::Plywood,
        }
    }
}

/// Point counts for sampled curve templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    pub arch_curve_points: usize,
    pub points_per_scallop: usize,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            arch_curve_points: 25,
            points_per_scallop: 12,
        }
    }
}

/// Wall layout tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub min_region_width: f64,
    pub min_region_height: f64,
    pub allow_split: bool,
    pub min_split_width: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self {
            min_region_width: layout.min_region_width,
            min_region_height: layout.min_region_height,
            allow_split: layout.allow_split,
            min_split_width: layout.min_split_width,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineSettings {
    /// Units used when formatting diagnostics
    pub measurement_system: MeasurementSystem,
    pub material: MaterialSettings,
    pub sampling: SamplingSettings,
    pub layout: LayoutSettings,
    /// Clearance overrides in inches, keyed by obstacle type name
    pub clearances: BTreeMap<String, f64>,
}

impl EngineSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every section, failing on the first unusable value
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.material.thickness > 0.0 && self.material.thickness.is_finite()) {
            return Err(SettingsError::invalid(
                "material.thickness",
                "must be a positive length",
            ));
        }

        if self.sampling.arch_curve_points < 2 {
            return Err(SettingsError::invalid(
                "sampling.arch_curve_points",
                "at least 2 points are needed",
            ));
        }
        if self.sampling.points_per_scallop < 2 {
            return Err(SettingsError::invalid(
                "sampling.points_per_scallop",
                "at least 2 points are needed",
            ));
        }

        let lengths = [
            ("layout.min_region_width", self.layout.min_region_width),
            ("layout.min_region_height", self.layout.min_region_height),
            ("layout.min_split_width", self.layout.min_split_width),
        ];
        for (key, value) in lengths {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SettingsError::invalid(key, "must be a positive length"));
            }
        }

        for (name, clearance) in &self.clearances {
            name.parse::<ObstacleType>()
                .map_err(|e| SettingsError::invalid(format!("clearances.{}", name), e.to_string()))?;
            if !(*clearance >= 0.0 && clearance.is_finite()) {
                return Err(SettingsError::invalid(
                    format!("clearances.{}", name),
                    "must not be negative",
                ));
            }
        }

        Ok(())
    }

    /// Apply a partial override document on top of these settings.
    ///
    /// Objects merge key by key; any other value replaces the current one.
    /// The merged result is validated and `self` is left untouched on error.
    pub fn merge(&mut self, overrides: &Value) -> SettingsResult<()> {
        if !overrides.is_object() {
            return Err(SettingsError::invalid(
                "overrides",
                "must be an object of settings sections",
            ));
        }
        let mut current = serde_json::to_value(&*self)?;
        merge_values(&mut current, overrides);
        let merged: EngineSettings = serde_json::from_value(current)?;
        merged.validate()?;
        tracing::debug!("merged settings overrides");
        *self = merged;
        Ok(())
    }

    /// Material spec for new section contexts
    pub fn material_spec(&self) -> SettingsResult<MaterialSpec> {
        MaterialSpec::new(self.material.thickness, self.material.material_type)
            .map_err(|e| SettingsError::invalid("material.thickness", e.to_string()))
    }

    /// Layout configuration for the wall layout service
    pub fn layout_config(&self) -> SettingsResult<LayoutConfig> {
        let mut clearances = BTreeMap::new();
        for (name, clearance) in &self.clearances {
            let obstacle_type = name
                .parse::<ObstacleType>()
                .map_err(|e| SettingsError::invalid(format!("clearances.{}", name), e.to_string()))?;
            clearances.insert(obstacle_type, *clearance);
        }
        Ok(LayoutConfig {
            min_region_width: self.layout.min_region_width,
            min_region_height: self.layout.min_region_height,
            allow_split: self.layout.allow_split,
            min_split_width: self.layout.min_split_width,
            clearances,
        })
    }
}

fn merge_values(base: &mut Value, overrides: &Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overrides) => *base = overrides.clone(),
    }
}
