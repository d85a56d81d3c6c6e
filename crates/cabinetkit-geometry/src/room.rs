//! Rigid placement of cabinet boxes into room coordinates.

use crate::mapper::BoundingBox3D;
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Rotation about the vertical axis followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RoomTransform {
    /// Degrees, counter-clockwise seen from above.
    pub rotation: f64,
    pub translation: [f64; 3],
}

impl RoomTransform {
    pub fn new(rotation: f64, translation: [f64; 3]) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    pub fn isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::from(Vector3::from(self.translation)),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.rotation.to_radians()),
        )
    }

    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.isometry().transform_point(point)
    }

    /// Axis-aligned envelope of the box's eight corners after the transform.
    pub fn transform_box(&self, bbox: &BoundingBox3D) -> BoundingBox3D {
        let iso = self.isometry();
        envelope(bbox.corners().iter().map(|c| iso.transform_point(c)))
            .unwrap_or(*bbox)
    }
}

fn envelope(points: impl Iterator<Item = Point3<f64>>) -> Option<BoundingBox3D> {
    let mut bounds: Option<(Point3<f64>, Point3<f64>)> = None;
    for p in points {
        bounds = Some(match bounds {
            None => (p, p),
            Some((min, max)) => (min.inf(&p), max.sup(&p)),
        });
    }
    bounds.map(|(min, max)| BoundingBox3D::from_corners(min, max))
}

/// Shift that brings every box to non-negative coordinates.
fn normalising_shift(boxes: &[BoundingBox3D]) -> Vector3<f64> {
    let mut shift = Vector3::zeros();
    for b in boxes {
        shift.x = f64::max(shift.x, -b.x);
        shift.y = f64::max(shift.y, -b.y);
        shift.z = f64::max(shift.z, -b.z);
    }
    shift
}

/// Transform a cabinet's boxes into the room, then shift all of them together
/// so no coordinate is negative.
pub fn place_boxes(boxes: &[BoundingBox3D], transform: &RoomTransform) -> Vec<BoundingBox3D> {
    place_assemblies(&[(boxes.to_vec(), *transform)])
}

/// Place several cabinets at once, each with its own transform, sharing one
/// normalising shift so their relative positions are kept.
pub fn place_assemblies(assemblies: &[(Vec<BoundingBox3D>, RoomTransform)]) -> Vec<BoundingBox3D> {
    let moved: Vec<BoundingBox3D> = assemblies
        .iter()
        .flat_map(|(boxes, transform)| boxes.iter().map(move |b| transform.transform_box(b)))
        .collect();
    let shift = normalising_shift(&moved);
    moved.iter().map(|b| b.translated(&shift)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_identity_keeps_box() {
        let b = BoundingBox3D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(RoomTransform::identity().transform_box(&b), b);
    }

    #[test]
    fn test_quarter_turn_swaps_width_and_depth() {
        let b = BoundingBox3D::new(0.0, 0.0, 0.0, 36.0, 24.0, 30.0);
        let turned = RoomTransform::new(90.0, [0.0; 3]).transform_box(&b);
        assert!(close(turned.width, 24.0));
        assert!(close(turned.depth, 36.0));
        assert!(close(turned.height, 30.0));
        assert!(close(turned.x, -24.0));
    }

    #[test]
    fn test_diagonal_turn_grows_envelope() {
        let b = BoundingBox3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 1.0);
        let turned = RoomTransform::new(45.0, [0.0; 3]).transform_box(&b);
        assert!(close(turned.width, 10.0 * std::f64::consts::SQRT_2));
        assert!(close(turned.depth, 10.0 * std::f64::consts::SQRT_2));
    }

    #[test]
    fn test_place_boxes_shifts_to_non_negative() {
        let boxes = vec![
            BoundingBox3D::new(0.0, -0.75, 0.0, 18.0, 0.75, 30.0),
            BoundingBox3D::new(0.0, 0.0, 0.0, 18.0, 12.0, 30.0),
        ];
        let placed = place_boxes(&boxes, &RoomTransform::new(180.0, [0.0; 3]));
        assert!(placed.iter().all(|b| b.x >= -EPS && b.y >= -EPS && b.z >= -EPS));
        // relative offset between the two boxes is preserved
        assert!(close(placed[0].y - placed[1].y, 12.0));
    }

    #[test]
    fn test_assemblies_share_shift() {
        let cabinet = vec![BoundingBox3D::new(0.0, 0.0, 0.0, 24.0, 24.0, 34.5)];
        let placed = place_assemblies(&[
            (cabinet.clone(), RoomTransform::identity()),
            (cabinet, RoomTransform::new(0.0, [-30.0, 0.0, 0.0])),
        ]);
        assert!(close(placed[0].x, 30.0));
        assert!(close(placed[1].x, 0.0));
    }
}
