#[path = "components/assemblies.rs"]
mod assemblies;
#[path = "components/contract.rs"]
mod contract;
#[path = "components/properties.rs"]
mod properties;
#[path = "components/registry.rs"]
mod registry;
