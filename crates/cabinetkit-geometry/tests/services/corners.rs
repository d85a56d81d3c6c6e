use cabinetkit_core::AutoOr;
use cabinetkit_geometry::arch::{ArchConfig, ArchType};
use cabinetkit_geometry::corner::{
    calculate_blind_corner_footprint, calculate_diagonal_footprint,
    calculate_lazy_susan_footprint, default_tray_diameter, max_tray_diameter, BlindSide,
};
use cabinetkit_geometry::scallop::ScallopConfig;

#[test]
fn test_blind_corner_end_to_end() {
    let footprint = calculate_blind_corner_footprint(24.0, 36.0, 3.0, BlindSide::Left).unwrap();
    assert_eq!(footprint.left_wall, 24.0);
    assert_eq!(footprint.right_wall, 39.0);
}

#[test]
fn test_lazy_susan_end_to_end() {
    let footprint = calculate_lazy_susan_footprint(24.0, 2.0).unwrap();
    assert_eq!((footprint.left_wall, footprint.right_wall), (26.0, 26.0));
    assert_eq!(max_tray_diameter(24.0), 46.0);
    assert_eq!(default_tray_diameter(24.0), 44.0);
}

#[test]
fn test_diagonal_matches_lazy_susan_without_clearance() {
    let diagonal = calculate_diagonal_footprint(22.5).unwrap();
    let susan = calculate_lazy_susan_footprint(22.5, 0.0).unwrap();
    assert_eq!(diagonal, susan);
}

#[test]
fn test_scallop_end_to_end() {
    let scallop = ScallopConfig::new(1.5, 4.0, AutoOr::Auto).unwrap();
    assert_eq!(scallop.calculate_count(18.0), 4);
    assert_eq!(scallop.calculate_actual_width(18.0), 4.5);
}

#[test]
fn test_arch_header_for_standard_opening() {
    let arch = ArchConfig::new(ArchType::FullRound, AutoOr::Auto)
        .with_spring_height(1.5)
        .unwrap();
    assert_eq!(arch.calculate_radius(36.0), 18.0);
    assert_eq!(arch.calculate_upright_extension(0.0, 36.0), 19.5);
    assert_eq!(arch.header_height(36.0), 21.0);
}

#[test]
fn test_arch_config_from_json() {
    let arch: ArchConfig =
        serde_json::from_value(serde_json::json!({"arch_type": "segmental", "radius": 30}))
            .unwrap();
    assert_eq!(arch.arch_type, ArchType::Segmental);
    assert_eq!(arch.radius, AutoOr::Value(30.0));
    assert_eq!(arch.header_margin, 1.5);
}
