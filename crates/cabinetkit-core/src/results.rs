//! Validation and generation results
//!
//! [`ValidationResult`] accumulates every configuration problem in one pass
//! instead of stopping at the first. [`GenerationResult`] carries the panels,
//! hardware and cross-component metadata one component produced.

use crate::types::{CutoutSpec, DadoSpec, NotchSpec, Panel, PanelType, PinHolePattern};
use crate::units::format_inches;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Diagnostics produced by a component's `validate`.
///
/// Errors block generation; warnings are advisory and never do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// A result holding a single error.
    pub fn from_error(message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.error(message);
        result
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another result's diagnostics, preserving order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Record an error unless `value` is strictly positive. Returns whether it was.
    pub fn require_positive(&mut self, name: &str, value: f64) -> bool {
        if value.is_finite() && value > 0.0 {
            true
        } else {
            self.error(format!("{} must be positive (got {})", name, value));
            false
        }
    }

    /// Record an error unless `value` is not negative. Returns whether it was.
    pub fn require_non_negative(&mut self, name: &str, value: f64) -> bool {
        if value.is_finite() && value >= 0.0 {
            true
        } else {
            self.error(format!("{} must not be negative (got {})", name, value));
            false
        }
    }

    /// Record an error unless `min <= value <= max`, formatting lengths in inches.
    pub fn require_range(&mut self, name: &str, value: f64, min: f64, max: f64) -> bool {
        if value.is_finite() && value >= min && value <= max {
            true
        } else {
            self.error(format!(
                "{} of {} is outside {} to {}",
                name,
                format_inches(value),
                format_inches(min),
                format_inches(max)
            ));
            false
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }
        for warning in &self.warnings {
            writeln!(f, "warning: {}", warning)?;
        }
        Ok(())
    }
}

/// One line of a bill of materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareItem {
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HardwareItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            sku: None,
            notes: None,
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Typed payload of the cross-component metadata channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetadataValue {
    Number(f64),
    Numbers(Vec<f64>),
    Text(String),
    Flag(bool),
    /// Template or curve points, `(x, y)` in panel coordinates.
    Points(Vec<(f64, f64)>),
    Dados(Vec<DadoSpec>),
    PinHoles(Vec<PinHolePattern>),
    Notches(Vec<NotchSpec>),
    Cutouts(Vec<CutoutSpec>),
}

impl MetadataValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetadataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            MetadataValue::Numbers(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            MetadataValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_points(&self) -> Option<&[(f64, f64)]> {
        match self {
            MetadataValue::Points(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dados(&self) -> Option<&[DadoSpec]> {
        match self {
            MetadataValue::Dados(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_pin_holes(&self) -> Option<&[PinHolePattern]> {
        match self {
            MetadataValue::PinHoles(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_notches(&self) -> Option<&[NotchSpec]> {
        match self {
            MetadataValue::Notches(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_cutouts(&self) -> Option<&[CutoutSpec]> {
        match self {
            MetadataValue::Cutouts(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Number(value)
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        MetadataValue::Number(f64::from(value))
    }
}

impl From<Vec<f64>> for MetadataValue {
    fn from(value: Vec<f64>) -> Self {
        MetadataValue::Numbers(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Flag(value)
    }
}

impl From<Vec<(f64, f64)>> for MetadataValue {
    fn from(value: Vec<(f64, f64)>) -> Self {
        MetadataValue::Points(value)
    }
}

impl From<Vec<DadoSpec>> for MetadataValue {
    fn from(value: Vec<DadoSpec>) -> Self {
        MetadataValue::Dados(value)
    }
}

impl From<Vec<PinHolePattern>> for MetadataValue {
    fn from(value: Vec<PinHolePattern>) -> Self {
        MetadataValue::PinHoles(value)
    }
}

impl From<Vec<NotchSpec>> for MetadataValue {
    fn from(value: Vec<NotchSpec>) -> Self {
        MetadataValue::Notches(value)
    }
}

impl From<Vec<CutoutSpec>> for MetadataValue {
    fn from(value: Vec<CutoutSpec>) -> Self {
        MetadataValue::Cutouts(value)
    }
}

/// Everything one `generate` call produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub panels: Vec<Panel>,
    pub hardware: Vec<HardwareItem>,
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl GenerationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub fn add_panels(&mut self, panels: impl IntoIterator<Item = Panel>) {
        self.panels.extend(panels);
    }

    /// Add a hardware line; zero quantities are kept as explicit entries.
    pub fn add_hardware(&mut self, item: HardwareItem) {
        self.hardware.push(item);
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn metadata(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Append another result; metadata keys from `other` win on collision.
    pub fn merge(&mut self, other: GenerationResult) {
        self.panels.extend(other.panels);
        self.hardware.extend(other.hardware);
        self.metadata.extend(other.metadata);
    }

    pub fn panels_of_type(&self, panel_type: PanelType) -> impl Iterator<Item = &Panel> {
        self.panels
            .iter()
            .filter(move |panel| panel.panel_type == panel_type)
    }

    pub fn count_of_type(&self, panel_type: PanelType) -> usize {
        self.panels_of_type(panel_type).count()
    }

    /// Total quantity of hardware lines whose name contains `needle`.
    pub fn hardware_quantity(&self, needle: &str) -> u32 {
        self.hardware
            .iter()
            .filter(|item| item.name.contains(needle))
            .map(|item| item.quantity)
            .sum()
    }
}
