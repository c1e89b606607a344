//! Holds one registry per hosted FHIR release.
//!
//! The repository lets multi-version deployments resolve profile lists
//! using the release recorded on each registry, keeping version selection
//! explicit even when several releases are served side by side.

use crate::registry::identity::FhirVersion;
use crate::registry::index::CapabilityRegistry;
use std::collections::BTreeMap;

#[derive(Default)]
/// In-memory store for capability registries keyed by `FhirVersion`.
pub struct RegistryRepository {
    registries: BTreeMap<FhirVersion, CapabilityRegistry>,
}

impl RegistryRepository {
    /// Register a registry for later lookup, replacing any previous one
    /// for the same release.
    pub fn register(&mut self, registry: CapabilityRegistry) {
        self.registries
            .insert(registry.fhir_version().clone(), registry);
    }

    /// Fetch the registry for a release, if one was registered.
    pub fn get(&self, version: &FhirVersion) -> Option<&CapabilityRegistry> {
        self.registries.get(version)
    }

    /// Profiles for a resource type under a specific release.
    ///
    /// Empty when either the release or the resource type is unknown.
    pub fn profiles(&self, version: &FhirVersion, resource_type: &str) -> &[String] {
        self.get(version)
            .map(|registry| registry.profiles(resource_type))
            .unwrap_or_default()
    }
}
