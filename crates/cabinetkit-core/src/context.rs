//! Per-section snapshot handed to every component call.

use crate::error::{ensure_positive, GeometryResult};
use crate::materials::MaterialSpec;
use crate::types::Position;
use serde::{Deserialize, Serialize};

/// Immutable description of the section a component fills.
///
/// Built once per section by the layout orchestrator and passed by reference
/// into `validate`, `generate` and `hardware`. Components never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentContext {
    /// Section opening width
    pub width: f64,
    /// Section opening height
    pub height: f64,
    /// Section interior depth
    pub depth: f64,
    pub material: MaterialSpec,
    /// Section origin inside the parent cabinet
    pub position: Position,
    pub section_index: usize,
    pub cabinet_width: f64,
    pub cabinet_height: f64,
    pub cabinet_depth: f64,
    /// Component id of the neighbour on each side, when known
    #[serde(default)]
    pub adjacent_left: Option<String>,
    #[serde(default)]
    pub adjacent_right: Option<String>,
    #[serde(default)]
    pub adjacent_above: Option<String>,
    #[serde(default)]
    pub adjacent_below: Option<String>,
    /// Set when the section above already closes this one, so a stacked
    /// drawer component must not emit its own top divider.
    #[serde(default)]
    pub skip_top_divider: bool,
}

impl ComponentContext {
    /// Context for a section that fills a whole cabinet of the given size.
    pub fn new(width: f64, height: f64, depth: f64) -> GeometryResult<Self> {
        ensure_positive("section width", width)?;
        ensure_positive("section height", height)?;
        ensure_positive("section depth", depth)?;
        Ok(Self {
            width,
            height,
            depth,
            material: MaterialSpec::standard_3_4(),
            position: Position::origin(),
            section_index: 0,
            cabinet_width: width,
            cabinet_height: height,
            cabinet_depth: depth,
            adjacent_left: None,
            adjacent_right: None,
            adjacent_above: None,
            adjacent_below: None,
            skip_top_divider: false,
        })
    }

    pub fn with_material(mut self, material: MaterialSpec) -> Self {
        self.material = material;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_section_index(mut self, section_index: usize) -> Self {
        self.section_index = section_index;
        self
    }

    pub fn with_cabinet(mut self, width: f64, height: f64, depth: f64) -> GeometryResult<Self> {
        self.cabinet_width = ensure_positive("cabinet width", width)?;
        self.cabinet_height = ensure_positive("cabinet height", height)?;
        self.cabinet_depth = ensure_positive("cabinet depth", depth)?;
        Ok(self)
    }

    pub fn with_adjacent_left(mut self, id: impl Into<String>) -> Self {
        self.adjacent_left = Some(id.into());
        self
    }

    pub fn with_adjacent_right(mut self, id: impl Into<String>) -> Self {
        self.adjacent_right = Some(id.into());
        self
    }

    pub fn with_adjacent_above(mut self, id: impl Into<String>) -> Self {
        self.adjacent_above = Some(id.into());
        self
    }

    pub fn with_adjacent_below(mut self, id: impl Into<String>) -> Self {
        self.adjacent_below = Some(id.into());
        self
    }

    pub fn with_skip_top_divider(mut self, skip: bool) -> Self {
        self.skip_top_divider = skip;
        self
    }

    /// Material thickness shorthand.
    pub fn thickness(&self) -> f64 {
        self.material.thickness
    }

    /// Whether the neighbour above is a component of the given category
    /// (the first segment of its id, e.g. `"drawer"`).
    pub fn above_is(&self, category: &str) -> bool {
        self.adjacent_above
            .as_deref()
            .and_then(|id| id.split('.').next())
            .is_some_and(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults_to_whole_cabinet() {
        let ctx = ComponentContext::new(30.0, 34.5, 23.25).unwrap();
        assert_eq!(ctx.cabinet_width, 30.0);
        assert_eq!(ctx.cabinet_height, 34.5);
        assert_eq!(ctx.thickness(), 0.75);
        assert!(!ctx.skip_top_divider);
    }

    #[test]
    fn test_context_rejects_bad_sizes() {
        assert!(ComponentContext::new(0.0, 10.0, 10.0).is_err());
        assert!(ComponentContext::new(10.0, 10.0, 10.0)
            .unwrap()
            .with_cabinet(10.0, -1.0, 10.0)
            .is_err());
    }

    #[test]
    fn test_adjacency_category() {
        let ctx = ComponentContext::new(18.0, 6.0, 22.0)
            .unwrap()
            .with_adjacent_above("drawer.standard");
        assert!(ctx.above_is("drawer"));
        assert!(!ctx.above_is("door"));
    }
}
