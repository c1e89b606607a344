//! Shared library for the FHIR profile registry.
//!
//! The crate exposes the types a FHIR host needs to answer capability
//! questions: compiled StructureDefinition records, the per-release
//! `CapabilityRegistry` built from them, and a `RegistryRepository` for
//! deployments hosting several releases. Loading helpers here form the
//! contract the `fhir-profiles` binary depends on; the registry itself
//! performs no I/O and no validation beyond typed deserialization.

use anyhow::{Context, Result, bail};
use serde_json::Value;

pub mod registry;

pub use registry::{
    CapabilityRegistry, FhirVersion, RegistryRepository, ResourceCapability, StructureDefinition,
    load_definitions_from_path,
};

/// Parse a definition stream, accepting either NDJSON or a JSON array.
///
/// The parser mirrors the guide-compiler output contract: empty input is
/// an error, single definitions or arrays are accepted, and NDJSON
/// streams are parsed line-by-line so one malformed record names its
/// line number instead of failing the whole stream opaquely.
pub fn parse_definition_stream(input: &str) -> Result<Vec<StructureDefinition>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("No definition input provided");
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<_>, _>>()
                .context("Unable to parse JSON array of structure definitions"),
            Value::Object(_) => serde_json::from_value(value)
                .map(|definition| vec![definition])
                .context("Unable to parse structure definition"),
            _ => bail!("Unsupported JSON input; expected object or array"),
        };
    }

    let mut definitions = Vec::new();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let definition: StructureDefinition = serde_json::from_str(line).with_context(|| {
            format!("Unable to parse structure definition from line {}", idx + 1)
        })?;
        definitions.push(definition);
    }

    if definitions.is_empty() {
        bail!("No structure definitions found in input stream");
    }

    Ok(definitions)
}
