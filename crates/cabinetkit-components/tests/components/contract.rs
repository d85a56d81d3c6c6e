//! Behaviour every registered component shares, checked across the whole
//! builtin catalogue.

use cabinetkit_components::ComponentRegistry;
use cabinetkit_core::ComponentContext;
use serde_json::{json, Value};

/// A configuration each component can be generated from on `contexts()`.
fn sample_config(id: &str) -> Value {
    match id {
        "ceiling.sloped" => json!({
            "slope": {"angle": 20, "start_height": 96, "direction": "left_to_right"},
        }),
        "ceiling.radial" => json!({
            "walls": [
                {"length": 36, "turn": 0},
                {"length": 48, "turn": 45},
                {"length": 36, "turn": 45},
                {"length": 60, "turn": 135},
            ],
            "edge_height": 96,
            "apex_height": 110,
        }),
        "infrastructure.outlet" => json!({"outlets": [{"x": 8, "y": 10}]}),
        _ => json!({}),
    }
}

fn contexts() -> Vec<ComponentContext> {
    vec![
        ComponentContext::new(18.0, 30.0, 23.25).unwrap(),
        ComponentContext::new(36.0, 34.5, 24.0).unwrap(),
        ComponentContext::new(36.0, 30.0, 12.0).unwrap(),
        ComponentContext::new(48.0, 18.0, 20.0).unwrap(),
    ]
}

#[test]
fn test_valid_configs_generate() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let mut generated = 0;
    for id in registry.list() {
        let component = registry.get(&id).unwrap();
        for ctx in contexts() {
            let config = sample_config(&id);
            if component.validate(&config, &ctx).is_valid() {
                let result = component.generate(&config, &ctx);
                assert!(result.is_ok(), "{} failed to generate: {:?}", id, result.err());
                generated += 1;
            }
        }
    }
    // most of the catalogue accepts its defaults on at least one context
    assert!(generated > 29, "only {} generations succeeded", generated);
}

#[test]
fn test_hardware_matches_generate() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    for id in registry.list() {
        let component = registry.get(&id).unwrap();
        for ctx in contexts() {
            let config = sample_config(&id);
            if !component.validate(&config, &ctx).is_valid() {
                continue;
            }
            let generated = component.generate(&config, &ctx).unwrap();
            let hardware = component.hardware(&config, &ctx).unwrap();
            assert_eq!(hardware, generated.hardware, "{}", id);
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    for id in registry.list() {
        let component = registry.get(&id).unwrap();
        let ctx = ComponentContext::new(36.0, 34.5, 24.0).unwrap();
        let config = sample_config(&id);
        if component.validate(&config, &ctx).is_valid() {
            let first = component.generate(&config, &ctx).unwrap();
            let second = component.generate(&config, &ctx).unwrap();
            assert_eq!(first, second, "{}", id);
        }
    }
}

#[test]
fn test_unknown_keys_warn_everywhere() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let ctx = ComponentContext::new(36.0, 34.5, 24.0).unwrap();
    for id in registry.list() {
        let component = registry.get(&id).unwrap();
        let mut config = sample_config(&id);
        config["colour"] = json!("walnut");
        let result = component.validate(&config, &ctx);
        assert!(
            result.warnings.iter().any(|w| w.contains("colour")),
            "{} did not warn about an unknown key",
            id
        );
    }
}

#[test]
fn test_non_object_config_is_rejected_everywhere() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let ctx = ComponentContext::new(36.0, 34.5, 24.0).unwrap();
    for id in registry.list() {
        let component = registry.get(&id).unwrap();
        assert!(!component.validate(&json!([1, 2]), &ctx).is_valid(), "{}", id);
        assert!(component.generate(&json!("shelf"), &ctx).is_err(), "{}", id);
    }
}

#[test]
fn test_wrong_field_type_is_a_validation_error() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let ctx = ComponentContext::new(36.0, 34.5, 24.0).unwrap();
    let shelf = registry.get("shelf.adjustable").unwrap();
    let result = shelf.validate(&json!({"count": "several"}), &ctx);
    assert!(!result.is_valid());
    assert!(result.errors[0].starts_with("invalid configuration"));
}
