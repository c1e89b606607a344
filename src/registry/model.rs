//! Deserializable representation of compiled StructureDefinition records.
//!
//! The types mirror the fields the implementation-guide compiler emits so
//! the registry and tests can reason about definitions without ad-hoc JSON
//! handling. Use `CapabilityRegistry` for grouped profile lookup; use these
//! structs when the raw definition list is required.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One compiled StructureDefinition as produced by the guide compiler.
///
/// `name`, `type` and `url` are required; a record missing any of them is
/// rejected at deserialization, before it can reach a registry.
pub struct StructureDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_definition: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-resource-type capability entry: category label plus the profiles
/// declared to support it, in declaration order, duplicates kept.
pub struct ResourceCapability {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub supported_profile: Vec<String>,
}

/// Read and parse a JSON array of definitions from disk without additional
/// validation.
pub fn load_definitions_from_path(path: &Path) -> Result<Vec<StructureDefinition>> {
    let data = fs::read_to_string(path)?;
    let definitions: Vec<StructureDefinition> = serde_json::from_str(&data)?;
    Ok(definitions)
}
