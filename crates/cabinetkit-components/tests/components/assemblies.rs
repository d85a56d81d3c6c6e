//! Several components generated together the way a full cabinet is built:
//! one section per component, sharing the cabinet's material.

use cabinetkit_components::ComponentRegistry;
use cabinetkit_core::{ComponentContext, GenerationResult, MaterialSpec, PanelType, Position};
use serde_json::{json, Value};

fn build(registry: &ComponentRegistry, parts: &[(&str, Value, ComponentContext)]) -> GenerationResult {
    let mut combined = GenerationResult::new();
    for (id, config, ctx) in parts {
        let component = registry.get(id).unwrap();
        let validation = component.validate(config, ctx);
        assert!(validation.is_valid(), "{}: {:?}", id, validation.errors);
        combined.merge(component.generate(config, ctx).unwrap());
    }
    combined
}

#[test]
fn test_kitchen_base_cabinet() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let drawer_ctx = ComponentContext::new(16.5, 6.0, 23.25)
        .unwrap()
        .with_position(Position::new(0.75, 24.0).unwrap())
        .with_section_index(0);
    let door_ctx = ComponentContext::new(16.5, 22.5, 23.25)
        .unwrap()
        .with_position(Position::new(0.75, 0.75).unwrap())
        .with_section_index(1);
    let top_ctx = ComponentContext::new(18.0, 34.5, 24.0).unwrap();
    let kick_ctx = ComponentContext::new(18.0, 4.0, 24.0).unwrap();

    let result = build(
        &registry,
        &[
            ("drawer.standard", json!({}), drawer_ctx),
            ("door.hinged.single", json!({"hinge_side": "right"}), door_ctx),
            ("countertop.standard", json!({}), top_ctx),
            ("decorative.toe_kick", json!({}), kick_ctx),
        ],
    );

    assert_eq!(result.count_of_type(PanelType::DrawerFront), 1);
    assert_eq!(result.count_of_type(PanelType::Door), 1);
    assert_eq!(result.count_of_type(PanelType::Countertop), 1);
    assert_eq!(result.count_of_type(PanelType::ToeKick), 1);
    assert_eq!(result.hardware_quantity("Pull handle"), 2);
    assert_eq!(result.hardware_quantity("Concealed hinge"), 2);
}

#[test]
fn test_desk_workstation() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let surface = ComponentContext::new(60.0, 30.0, 24.0).unwrap();
    let pedestal = ComponentContext::new(16.0, 28.5, 23.25).unwrap();
    let hutch = ComponentContext::new(60.0, 36.0, 24.0).unwrap();

    let result = build(
        &registry,
        &[
            ("desk.surface", json!({"grommet_count": 2}), surface),
            ("desk.pedestal", json!({"file_drawer": true}), pedestal),
            ("desk.hutch", json!({"shelf_count": 1}), hutch),
        ],
    );

    assert_eq!(result.count_of_type(PanelType::Desktop), 1);
    assert_eq!(result.count_of_type(PanelType::DrawerFront), 3);
    assert_eq!(result.hardware_quantity("Desk grommet"), 2);
    assert_eq!(result.hardware_quantity("Hanging file rail"), 2);
}

#[test]
fn test_half_inch_material_flows_into_panels() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let ctx = ComponentContext::new(24.0, 30.0, 12.0)
        .unwrap()
        .with_material(MaterialSpec::standard_1_2());
    let result = registry
        .get("shelf.adjustable")
        .unwrap()
        .generate(&json!({"count": 3}), &ctx)
        .unwrap();
    assert!(result.panels.iter().all(|p| p.material.thickness == 0.5));
    assert_eq!(result.hardware_quantity("Shelf pin"), 12);
}

#[test]
fn test_window_bay_with_ceiling() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let seat = ComponentContext::new(48.0, 18.0, 18.0).unwrap();
    let ceiling = ComponentContext::new(48.0, 96.0, 18.0).unwrap();
    let walls = json!([
        {"length": 24, "turn": 0},
        {"length": 48, "turn": 45},
        {"length": 24, "turn": 45},
    ]);

    let result = build(
        &registry,
        &[
            ("windowseat.bay", json!({}), seat),
            (
                "ceiling.radial",
                json!({"walls": walls, "edge_height": 84, "apex_height": 96}),
                ceiling,
            ),
        ],
    );
    assert_eq!(result.count_of_type(PanelType::BaySeatWing), 2);
    assert_eq!(result.count_of_type(PanelType::BayCeilingFacet), 3);
}
