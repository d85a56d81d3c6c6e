#[path = "services/ceilings.rs"]
mod ceilings;
#[path = "services/corners.rs"]
mod corners;
#[path = "services/layout.rs"]
mod layout;
#[path = "services/mapping.rs"]
mod mapping;
