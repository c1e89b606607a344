//! Grouped view of a compiled definition list.
//!
//! The registry is built in one pass over the input and never mutated
//! afterwards, so a populated instance can be shared freely across
//! readers. Lookups have no failure modes; an unknown resource type
//! yields an empty profile list rather than an error.

use crate::registry::identity::FhirVersion;
use crate::registry::model::{ResourceCapability, StructureDefinition};
use std::collections::BTreeMap;

#[derive(Debug)]
/// Mapping from resource-type name to its declared profile list, fixed at
/// construction for one FHIR release.
pub struct CapabilityRegistry {
    fhir_version: FhirVersion,
    capability_statement: BTreeMap<String, ResourceCapability>,
}

impl CapabilityRegistry {
    /// Group a compiled definition list by resource-type name.
    ///
    /// Profiles for a name keep their encounter order and duplicates are
    /// kept as-is. When records sharing a name disagree on `type`, the
    /// first record wins and later values are dropped. An upstream loader
    /// with no definitions passes an empty vector.
    ///
    /// The version is recorded but not consulted; it reserves room for
    /// release-dependent grouping without a signature change.
    pub fn new(fhir_version: FhirVersion, definitions: Vec<StructureDefinition>) -> Self {
        let capability_statement = build_statement(definitions);
        Self {
            fhir_version,
            capability_statement,
        }
    }

    /// The FHIR release this registry was built for.
    pub fn fhir_version(&self) -> &FhirVersion {
        &self.fhir_version
    }

    /// Profiles declared for a resource type, in declaration order.
    ///
    /// Returns an empty slice instead of `None`; callers treat "no
    /// profiles" and "unknown resource type" the same way.
    pub fn profiles(&self, resource_type: &str) -> &[String] {
        self.capability_statement
            .get(resource_type)
            .map(|entry| entry.supported_profile.as_slice())
            .unwrap_or_default()
    }

    /// The full capability mapping, for embedding into a wider
    /// CapabilityStatement document.
    ///
    /// Shared view; treat as read-only.
    pub fn capabilities(&self) -> &BTreeMap<String, ResourceCapability> {
        &self.capability_statement
    }

    /// Iterates resource-type names in stable order.
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.capability_statement.keys().map(String::as_str)
    }

    /// Number of distinct resource types registered.
    pub fn len(&self) -> usize {
        self.capability_statement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capability_statement.is_empty()
    }
}

fn build_statement(definitions: Vec<StructureDefinition>) -> BTreeMap<String, ResourceCapability> {
    let mut statement: BTreeMap<String, ResourceCapability> = BTreeMap::new();
    for definition in definitions {
        match statement.get_mut(&definition.name) {
            Some(entry) => {
                // First writer wins on `type`; only the profile list grows.
                entry.supported_profile.push(definition.url);
            }
            None => {
                statement.insert(
                    definition.name,
                    ResourceCapability {
                        resource_type: definition.resource_type,
                        supported_profile: vec![definition.url],
                    },
                );
            }
        }
    }
    statement
}
