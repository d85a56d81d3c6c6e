//! The component contract
//!
//! Every registered component answers three questions about a section:
//! is this configuration acceptable ([`Component::validate`]), what does it
//! produce ([`Component::generate`]) and what hardware does it need
//! ([`Component::hardware`]). All three are pure functions of the
//! configuration and the [`ComponentContext`].
//!
//! `generate` does not re-validate. Callers check `validate(..).is_valid()`
//! first; generating from an invalid configuration gives unspecified geometry.
//!
//! Most components implement [`ConfiguredComponent`] instead of
//! [`Component`] directly. The untyped configuration is then read once into a
//! typed `Config` struct with defaults for every missing key.

use crate::error::{ComponentError, ComponentResult};
use cabinetkit_core::{ComponentContext, GenerationResult, HardwareItem, ValidationResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Object-safe contract every registered component implements.
pub trait Component: Send + Sync {
    /// Short human name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Check a configuration, collecting every problem found.
    fn validate(&self, config: &Value, ctx: &ComponentContext) -> ValidationResult;

    /// Produce panels, hardware and metadata. Deterministic for equal inputs.
    fn generate(&self, config: &Value, ctx: &ComponentContext) -> ComponentResult<GenerationResult>;

    /// Bill of materials; the hardware `generate` would produce.
    fn hardware(&self, config: &Value, ctx: &ComponentContext) -> ComponentResult<Vec<HardwareItem>> {
        Ok(self.generate(config, ctx)?.hardware)
    }
}

/// A component with a typed configuration.
pub trait ConfiguredComponent: Send + Sync {
    /// Typed configuration. Every field must have a default and every field
    /// must appear when serialized, since unrecognised keys are detected by
    /// comparing against the serialized form.
    type Config: DeserializeOwned + Serialize + Default;

    const NAME: &'static str;

    fn check(&self, config: &Self::Config, ctx: &ComponentContext) -> ValidationResult;

    fn build(&self, config: &Self::Config, ctx: &ComponentContext) -> ComponentResult<GenerationResult>;
}

/// Read an untyped configuration into `C`.
///
/// `null` means "all defaults". Returns the typed config and a warning for
/// every key `C` does not recognise.
pub fn parse_config<C>(config: &Value) -> Result<(C, Vec<String>), String>
where
    C: DeserializeOwned + Serialize + Default,
{
    let object = match config {
        Value::Null => return Ok((C::default(), Vec::new())),
        Value::Object(object) => object,
        other => return Err(format!("configuration must be an object, got {}", type_name(other))),
    };

    let typed: C = serde_json::from_value(config.clone()).map_err(|e| e.to_string())?;

    let known = match serde_json::to_value(&typed) {
        Ok(Value::Object(known)) => known,
        _ => serde_json::Map::new(),
    };
    let warnings = object
        .keys()
        .filter(|key| !known.contains_key(*key))
        .map(|key| format!("unrecognised configuration key '{}' ignored", key))
        .collect();
    Ok((typed, warnings))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<T: ConfiguredComponent> Component for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn validate(&self, config: &Value, ctx: &ComponentContext) -> ValidationResult {
        match parse_config::<T::Config>(config) {
            Ok((typed, warnings)) => {
                let mut result = ValidationResult::new();
                result.warnings.extend(warnings);
                result.merge(self.check(&typed, ctx));
                result
            }
            Err(reason) => ValidationResult::from_error(format!("invalid configuration: {}", reason)),
        }
    }

    fn generate(&self, config: &Value, ctx: &ComponentContext) -> ComponentResult<GenerationResult> {
        let (typed, _) =
            parse_config::<T::Config>(config).map_err(|reason| ComponentError::InvalidConfig {
                component: T::NAME.to_string(),
                reason,
            })?;
        let result = self.build(&typed, ctx)?;
        debug!(
            component = T::NAME,
            section = ctx.section_index,
            panels = result.panels.len(),
            hardware = result.hardware.len(),
            "generated component"
        );
        Ok(result)
    }
}
