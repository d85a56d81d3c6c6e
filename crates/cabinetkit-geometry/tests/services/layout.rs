use cabinetkit_geometry::obstacles::{check_collision, Obstacle, ObstacleType};
use cabinetkit_geometry::wall_layout::{
    find_valid_regions, layout_sections, LayoutConfig, RegionType, SectionRequest,
};

fn kitchen_wall() -> Vec<Obstacle> {
    vec![
        Obstacle::new(ObstacleType::Window, 60.0, 42.0, 36.0, 42.0).unwrap(),
        Obstacle::new(ObstacleType::Outlet, 20.0, 44.0, 2.75, 4.5).unwrap(),
        Obstacle::new(ObstacleType::Door, 130.0, 0.0, 32.0, 80.0).unwrap(),
    ]
}

#[test]
fn test_kitchen_wall_regions() {
    let zones = cabinetkit_geometry::obstacles::exclusion_zones(&kitchen_wall());
    let regions = find_valid_regions(168.0, 96.0, &zones, 6.0, 6.0).unwrap();
    assert!(regions.iter().any(|r| r.region_type == RegionType::Full));
    assert!(regions.iter().any(|r| r.region_type == RegionType::Lower));
    assert!(regions.iter().any(|r| r.region_type == RegionType::Upper));
    for region in &regions {
        assert!(check_collision(&region.bounds, &zones).is_empty());
    }
    let lefts: Vec<f64> = regions.iter().map(|r| r.bounds.left).collect();
    assert!(lefts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_kitchen_layout_is_deterministic() {
    let requests = vec![
        SectionRequest::new("base 1", 18.0, 34.5).unwrap(),
        SectionRequest::new("sink base", 36.0, 34.5).unwrap(),
        SectionRequest::new("wall 1", 30.0, 30.0).unwrap(),
        SectionRequest::new("pantry", 24.0, 90.0).unwrap().with_shelf_count(5),
    ];
    let config = LayoutConfig::default();
    let first = layout_sections(168.0, 96.0, &kitchen_wall(), &requests, &config).unwrap();
    let second = layout_sections(168.0, 96.0, &kitchen_wall(), &requests, &config).unwrap();
    assert_eq!(first, second);
    for placed in &first.placed {
        assert!(check_collision(&placed.bounds, &first.zones).is_empty());
    }
}

#[test]
fn test_layout_result_serializes() {
    let requests = vec![SectionRequest::new("base", 24.0, 34.5).unwrap()];
    let result =
        layout_sections(96.0, 96.0, &[], &requests, &LayoutConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["placed"][0]["name"], "base");
    assert_eq!(json["placed"][0]["region_type"], "full");
    assert!(json["placed"][0].get("split").is_none());
}

#[test]
fn test_split_leaves_room_for_a_minimum_last_piece() {
    let door = Obstacle::new(ObstacleType::Door, 70.0, 0.0, 12.0, 80.0)
        .unwrap()
        .with_clearance(0.0)
        .unwrap();
    let requests = vec![SectionRequest::new("run", 80.0, 84.0).unwrap()];
    let config = LayoutConfig::default();
    let result = layout_sections(122.0, 84.0, &[door], &requests, &config).unwrap();

    assert!(result.is_complete(), "skipped: {:?}", result.skipped);
    let widths: Vec<f64> = result.placed.iter().map(|p| p.bounds.width()).collect();
    assert_eq!(widths.len(), 2);
    assert!((widths[0] - 68.0).abs() < 1e-9);
    assert!((widths[1] - 12.0).abs() < 1e-9);
    assert!(widths.iter().all(|w| *w >= config.min_split_width));
    for placed in &result.placed {
        assert!(check_collision(&placed.bounds, &result.zones).is_empty());
    }
}
