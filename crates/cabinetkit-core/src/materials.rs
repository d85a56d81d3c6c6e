//! Sheet material specifications
//!
//! A [`MaterialSpec`] is the thickness + stock type pair carried by every
//! panel. It is an immutable value with value equality and a stable hash so
//! material estimators can group panels by it.

use crate::error::{ensure_positive, GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Stock material categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    /// Veneer-core or MDF-core plywood
    #[default]
    Plywood,
    /// Medium density fibreboard
    Mdf,
    /// Particle board / melamine core
    ParticleBoard,
    /// Solid hardwood or softwood stock
    SolidWood,
}

impl MaterialType {
    /// Get material type as its configuration string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plywood => "plywood",
            Self::Mdf => "mdf",
            Self::ParticleBoard => "particle_board",
            Self::SolidWood => "solid_wood",
        }
    }

    /// Whether the stock holds screws in its edges reliably.
    pub fn holds_edge_screws(&self) -> bool {
        matches!(self, Self::Plywood | Self::SolidWood)
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plywood => write!(f, "Plywood"),
            Self::Mdf => write!(f, "MDF"),
            Self::ParticleBoard => write!(f, "Particle Board"),
            Self::SolidWood => write!(f, "Solid Wood"),
        }
    }
}

impl FromStr for MaterialType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plywood" => Ok(Self::Plywood),
            "mdf" => Ok(Self::Mdf),
            "particle_board" | "particleboard" => Ok(Self::ParticleBoard),
            "solid_wood" | "solid" => Ok(Self::SolidWood),
            other => Err(GeometryError::invalid(
                "material_type",
                format!("unknown material '{}'", other),
            )),
        }
    }
}

/// Thickness and stock type of a sheet or board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Thickness in inches
    pub thickness: f64,
    /// Stock type
    pub material_type: MaterialType,
}

impl MaterialSpec {
    /// Create a material, rejecting non-positive thickness.
    pub fn new(thickness: f64, material_type: MaterialType) -> GeometryResult<Self> {
        ensure_positive("thickness", thickness)?;
        Ok(Self {
            thickness,
            material_type,
        })
    }

    /// 3/4" plywood, the default carcass stock.
    pub fn standard_3_4() -> Self {
        Self {
            thickness: 0.75,
            material_type: MaterialType::Plywood,
        }
    }

    /// 1/2" plywood, used for drawer boxes.
    pub fn standard_1_2() -> Self {
        Self {
            thickness: 0.5,
            material_type: MaterialType::Plywood,
        }
    }

    /// 1/4" plywood, used for backs and drawer bottoms.
    pub fn standard_1_4() -> Self {
        Self {
            thickness: 0.25,
            material_type: MaterialType::Plywood,
        }
    }

    /// Same stock type with a different thickness.
    pub fn with_thickness(&self, thickness: f64) -> GeometryResult<Self> {
        Self::new(thickness, self.material_type)
    }
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self::standard_3_4()
    }
}

impl PartialEq for MaterialSpec {
    fn eq(&self, other: &Self) -> bool {
        self.thickness.to_bits() == other.thickness.to_bits()
            && self.material_type == other.material_type
    }
}

impl Eq for MaterialSpec {}

impl Hash for MaterialSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.thickness.to_bits().hash(state);
        self.material_type.hash(state);
    }
}

impl fmt::Display for MaterialSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            crate::units::format_inches(self.thickness),
            self.material_type
        )
    }
}
