//! Component registry
//!
//! Maps `category.type[.variant]` ids to component factories. A registry is
//! normally filled once at startup with [`register_builtin_components`] and
//! only read afterwards.

use crate::component::Component;
use crate::error::{RegistryError, RegistryResult};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Factory producing a fresh component instance.
pub type ComponentFactory = Arc<dyn Fn() -> Box<dyn Component> + Send + Sync>;

/// Table of registered components, keyed by id.
pub struct ComponentRegistry {
    factories: RwLock<BTreeMap<String, ComponentFactory>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(BTreeMap::new()),
        }
    }

    /// Registry pre-filled with every builtin component.
    pub fn with_builtins() -> RegistryResult<Self> {
        let registry = Self::new();
        register_builtin_components(&registry)?;
        Ok(registry)
    }

    /// Register `T` under `id`.
    pub fn register<T>(&self, id: &str) -> RegistryResult<()>
    where
        T: Component + Default + 'static,
    {
        self.register_factory(id, Arc::new(|| Box::new(T::default()) as Box<dyn Component>))
    }

    /// Register an arbitrary factory under `id`.
    pub fn register_factory(&self, id: &str, factory: ComponentFactory) -> RegistryResult<()> {
        validate_id(id)?;
        let mut factories = self.factories.write();
        if factories.contains_key(id) {
            return Err(RegistryError::DuplicateRegistration(id.to_string()));
        }
        factories.insert(id.to_string(), factory);
        debug!(id, "registered component");
        Ok(())
    }

    /// A fresh instance of the component registered under `id`.
    pub fn get(&self, id: &str) -> RegistryResult<Box<dyn Component>> {
        self.factories
            .read()
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::UnknownComponent(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.read().contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn list(&self) -> Vec<String> {
        self.factories.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    /// Remove every registration. Intended for tests.
    pub fn clear(&self) {
        self.factories.write().clear();
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("ids", &self.list())
            .finish()
    }
}

fn validate_id(id: &str) -> RegistryResult<()> {
    let segments: Vec<&str> = id.split('.').collect();
    if !(2..=3).contains(&segments.len()) {
        return Err(RegistryError::InvalidIdentifier {
            id: id.to_string(),
            reason: format!(
                "expected 2 or 3 dot-separated segments, got {}",
                segments.len()
            ),
        });
    }
    if segments.iter().any(|s| s.is_empty()) {
        return Err(RegistryError::InvalidIdentifier {
            id: id.to_string(),
            reason: "segments must not be empty".to_string(),
        });
    }
    Ok(())
}

static REGISTRY: OnceLock<ComponentRegistry> = OnceLock::new();

/// The process-wide registry. Empty until [`init_registry`] installs one or
/// builtins are registered into it.
pub fn registry() -> &'static ComponentRegistry {
    REGISTRY.get_or_init(ComponentRegistry::new)
}

/// Install a pre-built registry as the process-wide one.
///
/// Fails, handing the registry back, if the global was already initialised.
pub fn init_registry(registry: ComponentRegistry) -> Result<(), ComponentRegistry> {
    REGISTRY.set(registry)
}

/// Register every builtin component into `registry`.
pub fn register_builtin_components(registry: &ComponentRegistry) -> RegistryResult<()> {
    use crate::{
        ceiling, corner, countertop, decorative, desk, door, drawer, infrastructure, shelf,
        window_seat,
    };

    registry.register::<shelf::FixedShelf>("shelf.fixed")?;
    registry.register::<shelf::AdjustableShelf>("shelf.adjustable")?;
    registry.register::<door::SingleHingedDoor>("door.hinged.single")?;
    registry.register::<door::DoubleHingedDoor>("door.hinged.double")?;
    registry.register::<drawer::StandardDrawer>("drawer.standard")?;
    registry.register::<drawer::FileDrawer>("drawer.file")?;
    registry.register::<corner::LazySusanCorner>("corner.lazy_susan")?;
    registry.register::<corner::BlindCorner>("corner.blind")?;
    registry.register::<corner::DiagonalCorner>("corner.diagonal")?;
    registry.register::<decorative::Arch>("decorative.arch")?;
    registry.register::<decorative::Scallop>("decorative.scallop")?;
    registry.register::<decorative::FaceFrame>("decorative.face_frame")?;
    registry.register::<decorative::CrownMolding>("decorative.crown_molding")?;
    registry.register::<decorative::ToeKick>("decorative.toe_kick")?;
    registry.register::<decorative::LightRail>("decorative.light_rail")?;
    registry.register::<desk::DeskSurface>("desk.surface")?;
    registry.register::<desk::DeskPedestal>("desk.pedestal")?;
    registry.register::<desk::KeyboardTray>("desk.keyboard_tray")?;
    registry.register::<desk::MonitorShelf>("desk.monitor_shelf")?;
    registry.register::<desk::Hutch>("desk.hutch")?;
    registry.register::<countertop::StandardCountertop>("countertop.standard")?;
    registry.register::<infrastructure::Lighting>("infrastructure.lighting")?;
    registry.register::<infrastructure::Outlets>("infrastructure.outlet")?;
    registry.register::<infrastructure::Grommets>("infrastructure.grommet")?;
    registry.register::<infrastructure::Ventilation>("infrastructure.ventilation")?;
    registry.register::<window_seat::StorageSeat>("windowseat.storage")?;
    registry.register::<window_seat::BaySeat>("windowseat.bay")?;
    registry.register::<ceiling::SlopedCeiling>("ceiling.sloped")?;
    registry.register::<ceiling::RadialCeiling>("ceiling.radial")?;

    info!(count = registry.len(), "registered builtin components");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shelf::FixedShelf;

    #[test]
    fn test_register_and_get() {
        let registry = ComponentRegistry::new();
        registry.register::<FixedShelf>("shelf.fixed").unwrap();
        assert!(registry.contains("shelf.fixed"));
        assert_eq!(registry.get("shelf.fixed").unwrap().name(), "fixed shelf");
    }

    #[test]
    fn test_duplicate_registration() {
        let registry = ComponentRegistry::new();
        registry.register::<FixedShelf>("shelf.fixed").unwrap();
        assert_eq!(
            registry.register::<FixedShelf>("shelf.fixed"),
            Err(RegistryError::DuplicateRegistration("shelf.fixed".to_string()))
        );
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.register::<FixedShelf>("shelf.fixed").is_ok());
    }

    #[test]
    fn test_identifier_segments() {
        let registry = ComponentRegistry::new();
        assert!(registry.register::<FixedShelf>("shelf.fixed.variant").is_ok());
        for bad in ["shelf", "a.b.c.d", "shelf..fixed", ".fixed"] {
            assert!(
                matches!(
                    registry.register::<FixedShelf>(bad),
                    Err(RegistryError::InvalidIdentifier { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_unknown_component() {
        let registry = ComponentRegistry::new();
        assert!(matches!(
            registry.get("door.sliding"),
            Err(RegistryError::UnknownComponent(id)) if id == "door.sliding"
        ));
    }

    #[test]
    fn test_builtins_are_sorted() {
        let registry = ComponentRegistry::with_builtins().unwrap();
        let ids = registry.list();
        assert_eq!(ids.len(), 29);
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(register_builtin_components(&registry).is_err());
    }
}
