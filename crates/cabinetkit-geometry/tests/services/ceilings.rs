use cabinetkit_core::{Point2D, TaperDirection};
use cabinetkit_geometry::radial_ceiling::{RadialCeilingConfig, RadialCeilingService, WallSegment};
use cabinetkit_geometry::skylight::{calculate_skylight_notches, Skylight};
use cabinetkit_geometry::sloped_ceiling::{CeilingSlope, SlopeDirection};

#[test]
fn test_attic_run_of_sections() {
    let ceiling = CeilingSlope::new(30.0, 90.0, SlopeDirection::LeftToRight, 36.0).unwrap();
    let mut previous_right = f64::INFINITY;
    for i in 0..4 {
        let x = f64::from(i) * 24.0;
        let (left, right) = ceiling.section_edge_heights(x, 24.0, 96.0);
        assert!(left <= previous_right + 1e-9);
        assert!(right <= left);
        let taper = ceiling.calculate_section_taper(x, 24.0, 96.0).unwrap();
        if let Some(taper) = taper {
            assert_eq!(taper.direction, TaperDirection::LeftToRight);
            assert!(taper.start_height > taper.end_height);
        }
        previous_right = right;
    }
}

#[test]
fn test_flat_region_past_knee_wall_has_no_taper() {
    let ceiling = CeilingSlope::new(45.0, 60.0, SlopeDirection::LeftToRight, 30.0).unwrap();
    // the slope reaches the 30" floor at 30" along the wall
    assert!(ceiling.calculate_section_taper(40.0, 20.0, 96.0).unwrap().is_none());
}

#[test]
fn test_skylight_notches_across_sections() {
    let skylights = [Skylight::new(30.0, 20.0, 8.0, 60.0).unwrap()];
    let depth = 12.0;
    let left = calculate_skylight_notches(&skylights, 0.0, 36.0, depth).unwrap();
    let right = calculate_skylight_notches(&skylights, 36.0, 36.0, depth).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(right.len(), 1);
    let (void_left, void_right) = skylights[0].void_at_depth(depth);
    let covered = left[0].width + right[0].width;
    assert!((covered - (void_right - void_left)).abs() < 1e-9);
    assert_eq!(right[0].x_offset, 0.0);
    assert!((left[0].end() - 36.0).abs() < 1e-9);
}

#[test]
fn test_hexagonal_bay_heights_stay_between_edge_and_apex() {
    let walls = (0..6)
        .map(|i| WallSegment {
            length: 30.0,
            turn: if i == 0 { 0.0 } else { 60.0 },
        })
        .collect();
    let service = RadialCeilingService::new(RadialCeilingConfig {
        walls,
        edge_height: 84.0,
        apex_height: 100.0,
        apex: None,
    });
    let geometry = service.geometry().unwrap();
    assert_eq!(geometry.facets().len(), 6);
    for facet in geometry.facets() {
        let center = facet.edge_center();
        assert!((geometry.height_at_point(&center) - 84.0).abs() < 1e-9);
    }
    let apex = geometry.apex();
    assert!((geometry.height_at_point(&Point2D::new(apex.x, apex.y)) - 100.0).abs() < 1e-9);

    let (edge, slant) = service.facet_panel_dimensions(2).unwrap();
    assert!((edge - 30.0).abs() < 1e-9);
    assert!(slant > 16.0);
}
