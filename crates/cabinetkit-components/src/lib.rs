//! # CabinetKit Components
//!
//! Parametric cabinet components and the registry that looks them up by
//! dotted identifier (`"shelf.fixed"`, `"door.hinged.double"`).
//!
//! ## Components Included
//!
//! - **Shelves**: fixed (dadoed) and adjustable (shelf pins)
//! - **Doors**: single and double hinged, full/half/inset overlay
//! - **Drawers**: equal-height drawer stacks and hanging-file drawers
//! - **Corners**: lazy susan, blind and diagonal corner cabinets
//! - **Decorative**: arches, scallops, face frames, crown, toe kicks, light rails
//! - **Desks**: surfaces, pedestals, keyboard trays, monitor shelves, hutches
//! - **Countertops**, **window seats** and **ceiling-fitted** sections
//! - **Infrastructure**: lighting, outlets, grommets and ventilation cutouts
//!
//! ## Supporting Infrastructure
//!
//! - [`Component`] / [`ConfiguredComponent`]: the validate/generate contract
//! - [`ComponentRegistry`]: identifier to factory map, plus a process-wide instance
//! - [`rules`]: hardware rules shared between components (hinges, slides, carcasses)

pub mod ceiling;
pub mod component;
pub mod corner;
pub mod countertop;
pub mod decorative;
pub mod desk;
pub mod door;
pub mod drawer;
pub mod error;
pub mod infrastructure;
pub mod registry;
pub mod rules;
pub mod shelf;
pub mod window_seat;

pub use component::{parse_config, Component, ConfiguredComponent};
pub use error::{ComponentError, ComponentResult, RegistryError, RegistryResult};
pub use registry::{
    init_registry, register_builtin_components, registry, ComponentFactory, ComponentRegistry,
};
pub use rules::{hinge_count, Handle, HingeSide, Overlay};
