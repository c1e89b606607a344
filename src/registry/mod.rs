//! Capability registry wiring.
//!
//! This module groups compiled StructureDefinition records by resource
//! type so callers can answer "what profiles does this resource type
//! support" without re-walking the definition list. Callers use
//! `CapabilityRegistry` for lookups against one FHIR release and
//! `RegistryRepository` when multiple releases are hosted.

pub mod identity;
pub mod index;
pub mod model;
pub mod repository;

pub use identity::FhirVersion;
pub use index::CapabilityRegistry;
pub use model::{ResourceCapability, StructureDefinition};
pub use repository::RegistryRepository;

pub use model::load_definitions_from_path;
