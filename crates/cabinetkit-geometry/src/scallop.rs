//! Scallop pattern tessellation for valances.

use cabinetkit_core::error::{ensure_positive, GeometryError, GeometryResult};
use cabinetkit_core::{AutoOr, LENGTH_EPSILON};
use serde::{Deserialize, Serialize};

/// A row of semicircular scallops cut along the lower edge of a valance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScallopConfig {
    /// How far each scallop reaches into the valance.
    pub depth: f64,
    /// Nominal width of one scallop.
    pub width: f64,
    pub count: AutoOr<u32>,
}

impl Default for ScallopConfig {
    fn default() -> Self {
        Self {
            depth: 1.5,
            width: 4.0,
            count: AutoOr::Auto,
        }
    }
}

impl ScallopConfig {
    pub fn new(depth: f64, width: f64, count: AutoOr<u32>) -> GeometryResult<Self> {
        ensure_positive("scallop depth", depth)?;
        ensure_positive("scallop width", width)?;
        if count == AutoOr::Value(0) {
            return Err(GeometryError::invalid("scallop count", "must be at least 1"));
        }
        Ok(Self { depth, width, count })
    }

    /// Number of scallops across the piece.
    ///
    /// `"auto"` fits as many nominal-width scallops as possible, never fewer than one.
    pub fn calculate_count(&self, piece_width: f64) -> u32 {
        match self.count {
            AutoOr::Value(n) => n.max(1),
            AutoOr::Auto => {
                if self.width <= 0.0 || piece_width <= 0.0 {
                    return 1;
                }
                ((piece_width / self.width).floor() as u32).max(1)
            }
        }
    }

    /// Width of each scallop after spreading the count evenly over the piece.
    pub fn calculate_actual_width(&self, piece_width: f64) -> f64 {
        piece_width / f64::from(self.calculate_count(piece_width))
    }

    /// Sample the scallop edge as `(x, y)` points, left to right.
    ///
    /// `y` is measured up from the lower edge of the valance, so the boundary
    /// between two scallops sits at `y = 0` and each crown at `y = depth`.
    /// Shared boundary points appear once.
    pub fn generate_points(
        &self,
        piece_width: f64,
        points_per_scallop: usize,
    ) -> GeometryResult<Vec<(f64, f64)>> {
        ensure_positive("piece width", piece_width)?;
        if points_per_scallop < 2 {
            return Err(GeometryError::invalid(
                "points_per_scallop",
                format!("need at least 2 points, got {}", points_per_scallop),
            ));
        }

        let count = self.calculate_count(piece_width);
        let actual_width = self.calculate_actual_width(piece_width);
        let radius = actual_width / 2.0;
        let steps = (points_per_scallop - 1) as f64;

        let mut points: Vec<(f64, f64)> =
            Vec::with_capacity(count as usize * (points_per_scallop - 1) + 1);
        for i in 0..count {
            let center = actual_width * (f64::from(i) + 0.5);
            for j in 0..points_per_scallop {
                let angle = std::f64::consts::PI * j as f64 / steps;
                let point = (center - radius * angle.cos(), angle.sin() * self.depth);
                let duplicate = points.last().is_some_and(|last| {
                    (last.0 - point.0).abs() < LENGTH_EPSILON
                        && (last.1 - point.1).abs() < LENGTH_EPSILON
                });
                if !duplicate {
                    points.push(point);
                }
            }
        }
        Ok(points)
    }
}
