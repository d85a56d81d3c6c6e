//! Error types for the components crate.
//!
//! Registry misuse and component failures are programming errors and are
//! returned as `Err`. Problems with a user's configuration are never errors
//! here; they are collected in a [`cabinetkit_core::ValidationResult`].

use cabinetkit_core::GeometryError;
use thiserror::Error;

/// Errors raised by the component registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The id is already registered.
    #[error("Component '{0}' is already registered")]
    DuplicateRegistration(String),

    /// The id is not `category.type` or `category.type.variant`.
    #[error("Invalid component id '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// No component is registered under the id.
    #[error("Unknown component '{0}'")]
    UnknownComponent(String),
}

/// Errors raised while generating a component.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    /// The configuration could not be read into the component's typed config.
    #[error("Invalid configuration for '{component}': {reason}")]
    InvalidConfig { component: String, reason: String },

    /// Generation was refused because validation reported errors.
    #[error("Configuration for '{component}' failed validation: {}", .errors.join("; "))]
    ValidationFailed {
        component: String,
        errors: Vec<String>,
    },

    /// A value object rejected its inputs during generation.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// A registry lookup failed.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type alias for component generation.
pub type ComponentResult<T> = Result<T, ComponentError>;
