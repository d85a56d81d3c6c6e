//! Error handling for CabinetKit value types
//!
//! Construction-time invariant violations (negative dimensions, inverted
//! ranges, unknown enum strings) fail fast with a [`GeometryError`]. They are
//! programming errors in the caller and are distinct from the user-facing
//! diagnostics accumulated in [`crate::ValidationResult`].
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Invariant violation raised by a value-object constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A value that must be strictly positive was zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A value that must be non-negative was negative.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A value fell outside its permitted range.
    #[error("{name} out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        /// Name of the offending field.
        name: String,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A range whose start is not below its end.
    #[error("Inverted range for {name}: {start} >= {end}")]
    InvertedRange {
        /// Name of the offending range.
        name: String,
        /// Range start.
        start: f64,
        /// Range end.
        end: f64,
    },

    /// A value was rejected for a structural reason.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// Name of the offending field.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl GeometryError {
    /// Shorthand for [`GeometryError::InvalidValue`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for value-object construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Fail unless `value` is finite and strictly positive.
pub fn ensure_positive(name: &str, value: f64) -> GeometryResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive {
            name: name.to_string(),
            value,
        })
    }
}

/// Fail unless `value` is finite and not negative.
pub fn ensure_non_negative(name: &str, value: f64) -> GeometryResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::Negative {
            name: name.to_string(),
            value,
        })
    }
}

/// Fail unless `min <= value <= max`.
pub fn ensure_range(name: &str, value: f64, min: f64, max: f64) -> GeometryResult<f64> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(GeometryError::OutOfRange {
            name: name.to_string(),
            value,
            min,
            max,
        })
    }
}
