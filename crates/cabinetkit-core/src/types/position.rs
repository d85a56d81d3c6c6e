//! Positions, points and "auto"-or-value configuration fields.

use crate::error::{ensure_non_negative, GeometryError, GeometryResult};
use crate::units::parse_inches;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Cabinet-local placement of a panel.
///
/// The origin is a cabinet corner so neither coordinate may be negative.
/// `x` runs across the cabinet width, `y` runs up from the cabinet bottom.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    x: f64,
    y: f64,
}

impl TryFrom<RawPosition> for Position {
    type Error = GeometryError;

    fn try_from(raw: RawPosition) -> GeometryResult<Self> {
        Position::new(raw.x, raw.y)
    }
}

impl Position {
    /// Create a position, rejecting negative coordinates.
    pub fn new(x: f64, y: f64) -> GeometryResult<Self> {
        ensure_non_negative("position.x", x)?;
        ensure_non_negative("position.y", y)?;
        Ok(Self { x, y })
    }

    /// The cabinet origin.
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Offset by a non-negative delta.
    pub fn offset(&self, dx: f64, dy: f64) -> GeometryResult<Self> {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Room-space point. Unlike [`Position`] it may be negative after rotation
/// or translation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between two points.
    pub fn midpoint(&self, other: &Point2D) -> Point2D {
        Point2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Room-space point with height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A configuration value that is either computed (`"auto"`) or given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AutoOr<T> {
    #[default]
    Auto,
    Value(T),
}

impl<T: Copy> AutoOr<T> {
    /// Resolve against a computed fallback.
    pub fn resolve(&self, auto: impl FnOnce() -> T) -> T {
        match self {
            AutoOr::Auto => auto(),
            AutoOr::Value(v) => *v,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, AutoOr::Auto)
    }

    pub fn value(&self) -> Option<T> {
        match self {
            AutoOr::Auto => None,
            AutoOr::Value(v) => Some(*v),
        }
    }
}

impl<T: fmt::Display> fmt::Display for AutoOr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoOr::Auto => write!(f, "auto"),
            AutoOr::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Values that can be written as text in an `"auto"`-or-value field.
pub trait AutoText: Sized {
    fn parse_text(text: &str) -> Result<Self, String>;
}

impl AutoText for f64 {
    fn parse_text(text: &str) -> Result<Self, String> {
        parse_inches(text)
    }
}

impl AutoText for u32 {
    fn parse_text(text: &str) -> Result<Self, String> {
        text.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid count '{}': {}", text, e))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAutoOr<T> {
    Value(T),
    Text(String),
}

impl<'de, T> Deserialize<'de> for AutoOr<T>
where
    T: Deserialize<'de> + AutoText,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawAutoOr::<T>::deserialize(deserializer)? {
            RawAutoOr::Value(v) => Ok(AutoOr::Value(v)),
            RawAutoOr::Text(text) if text.trim().eq_ignore_ascii_case("auto") => Ok(AutoOr::Auto),
            RawAutoOr::Text(text) => T::parse_text(&text)
                .map(AutoOr::Value)
                .map_err(serde::de::Error::custom),
        }
    }
}

impl<T: Serialize> Serialize for AutoOr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AutoOr::Auto => serializer.serialize_str("auto"),
            AutoOr::Value(v) => v.serialize(serializer),
        }
    }
}
