use cabinetkit_core::{MaterialSpec, Panel, PanelType, Position};
use cabinetkit_geometry::mapper::{map_panels, CabinetFrame};
use cabinetkit_geometry::room::{place_boxes, RoomTransform};

fn carcass(width: f64, height: f64, depth: f64) -> Vec<Panel> {
    let m = MaterialSpec::standard_3_4();
    let t = m.thickness;
    let inner = width - 2.0 * t;
    vec![
        Panel::new(PanelType::LeftSide, depth, height, m, Position::origin()).unwrap(),
        Panel::new(PanelType::RightSide, depth, height, m, Position::new(width - t, 0.0).unwrap())
            .unwrap(),
        Panel::new(PanelType::Top, inner, depth - t, m, Position::new(t, height - t).unwrap())
            .unwrap(),
        Panel::new(PanelType::Bottom, inner, depth - t, m, Position::new(t, 0.0).unwrap()).unwrap(),
        Panel::new(PanelType::Back, width, height, m, Position::origin()).unwrap(),
    ]
}

#[test]
fn test_carcass_boxes_stay_inside_frame() {
    let frame = CabinetFrame::new(30.0, 34.5, 24.0).unwrap();
    let boxes = map_panels(&carcass(30.0, 34.5, 24.0), &frame);
    assert_eq!(boxes.len(), 5);
    for b in &boxes {
        assert!(b.x >= 0.0 && b.x + b.width <= 30.0 + 1e-9);
        assert!(b.y >= 0.0 && b.y + b.depth <= 24.0 + 1e-9);
        assert!(b.z >= 0.0 && b.z + b.height <= 34.5 + 1e-9);
    }
}

#[test]
fn test_carcass_rotated_onto_side_wall() {
    let frame = CabinetFrame::new(30.0, 34.5, 24.0).unwrap();
    let boxes = map_panels(&carcass(30.0, 34.5, 24.0), &frame);
    let placed = place_boxes(&boxes, &RoomTransform::new(90.0, [120.0, 0.0, 0.0]));
    assert_eq!(placed.len(), boxes.len());
    for (before, after) in boxes.iter().zip(&placed) {
        assert!((before.volume() - after.volume()).abs() < 1e-6);
        assert!(after.x >= -1e-9 && after.y >= -1e-9 && after.z >= -1e-9);
    }
}
