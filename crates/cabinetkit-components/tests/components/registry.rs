use cabinetkit_components::shelf::FixedShelf;
use cabinetkit_components::{register_builtin_components, ComponentRegistry, RegistryError};
use cabinetkit_core::ComponentContext;
use serde_json::json;

#[test]
fn test_builtin_ids_resolve() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    assert_eq!(registry.len(), 29);
    for id in registry.list() {
        let component = registry.get(&id).unwrap();
        assert!(!component.name().is_empty(), "{} has no name", id);
    }
}

#[test]
fn test_every_category_is_present() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let mut categories: Vec<String> = registry
        .list()
        .iter()
        .filter_map(|id| id.split('.').next().map(str::to_string))
        .collect();
    categories.dedup();
    assert_eq!(
        categories,
        vec![
            "ceiling",
            "corner",
            "countertop",
            "decorative",
            "desk",
            "door",
            "drawer",
            "infrastructure",
            "shelf",
            "windowseat",
        ]
    );
}

#[test]
fn test_builtins_twice_is_duplicate() {
    let registry = ComponentRegistry::new();
    register_builtin_components(&registry).unwrap();
    let err = register_builtin_components(&registry).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateRegistration(_)));
}

#[test]
fn test_custom_registration_alongside_builtins() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    registry.register::<FixedShelf>("custom.shelf.deep").unwrap();
    let ctx = ComponentContext::new(30.0, 30.0, 11.25).unwrap();
    let component = registry.get("custom.shelf.deep").unwrap();
    let result = component.generate(&json!({"count": 2}), &ctx).unwrap();
    assert_eq!(result.panels.len(), 2);
}

#[test]
fn test_unknown_id_error_names_the_id() {
    let registry = ComponentRegistry::with_builtins().unwrap();
    let err = registry.get("door.sliding").err().unwrap();
    assert!(err.to_string().contains("door.sliding"));
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(ComponentRegistry::with_builtins().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                let ctx = ComponentContext::new(18.0, 30.0, 23.25).unwrap();
                let door = registry.get("door.hinged.single").unwrap();
                door.generate(&json!({}), &ctx).unwrap().panels.len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
