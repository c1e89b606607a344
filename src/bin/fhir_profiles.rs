//! Query helper over a compiled definition list.
//!
//! Reads StructureDefinitions from a file or stdin, builds a registry for
//! the requested FHIR release, and prints either the profile list for one
//! resource type or the full capability mapping as compact JSON. Designed
//! for deployment scripts that need capability answers without standing up
//! the full service layer.

use anyhow::{Context, Result, bail};
use fhir_profile_registry::{CapabilityRegistry, FhirVersion, parse_definition_stream};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let source = args.source.read()?;
    let definitions = parse_definition_stream(&source)?;
    let registry = CapabilityRegistry::new(args.fhir_version, definitions);

    match args.query {
        Query::Profiles(resource_type) => {
            println!("{}", serde_json::to_string(registry.profiles(&resource_type))?);
        }
        Query::Capabilities => {
            println!("{}", serde_json::to_string(registry.capabilities())?);
        }
    }
    Ok(())
}

struct CliArgs {
    source: InputSource,
    fhir_version: FhirVersion,
    query: Query,
}

enum Query {
    Profiles(String),
    Capabilities,
}

enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    bail!("input file not found: {}", path.display());
                }
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
            }
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut source: Option<InputSource> = None;
        let mut fhir_version: Option<FhirVersion> = None;
        let mut resource_type: Option<String> = None;
        let mut capabilities = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--file" => {
                    let path = next_value(&mut args, "--file")?;
                    if source.is_some() {
                        bail!("--file/--stdin may only be provided once");
                    }
                    source = Some(InputSource::File(PathBuf::from(path)));
                }
                "--stdin" => {
                    if source.is_some() {
                        bail!("--file/--stdin may only be provided once");
                    }
                    source = Some(InputSource::Stdin);
                }
                "--fhir-version" => {
                    let raw = next_value(&mut args, "--fhir-version")?;
                    if raw.trim().is_empty() {
                        bail!("--fhir-version must not be empty");
                    }
                    fhir_version = Some(FhirVersion::from_str(raw.trim()));
                }
                "--resource-type" => {
                    let raw = next_value(&mut args, "--resource-type")?;
                    if raw.trim().is_empty() {
                        bail!("--resource-type must not be empty");
                    }
                    resource_type = Some(raw.trim().to_string());
                }
                "--capabilities" => {
                    capabilities = true;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        let query = select_query(resource_type, capabilities)?;

        Ok(CliArgs {
            source: source.unwrap_or(InputSource::Stdin),
            fhir_version: fhir_version.unwrap_or(FhirVersion::R4),
            query,
        })
    }
}

fn select_query(resource_type: Option<String>, capabilities: bool) -> Result<Query> {
    match (resource_type, capabilities) {
        (Some(name), false) => Ok(Query::Profiles(name)),
        (None, true) => Ok(Query::Capabilities),
        (None, false) => bail!("exactly one of --resource-type or --capabilities is required"),
        (Some(_), true) => bail!("--resource-type and --capabilities are mutually exclusive"),
    }
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: fhir-profiles [--file PATH|--stdin] [--fhir-version VERSION] (--resource-type NAME | --capabilities)\n\
Reads compiled StructureDefinitions (JSON array or NDJSON), groups them by resource type, and prints either the profile list for one resource type or the full capability mapping as compact JSON.\n"
}

fn print_usage() {
    print!("{}", usage());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requires_exactly_one_selector() {
        assert!(select_query(None, false).is_err());
        assert!(select_query(Some("Patient".to_string()), true).is_err());
        assert!(matches!(
            select_query(Some("Patient".to_string()), false),
            Ok(Query::Profiles(name)) if name == "Patient"
        ));
        assert!(matches!(select_query(None, true), Ok(Query::Capabilities)));
    }

    #[test]
    fn missing_input_file_is_rejected() {
        let source = InputSource::File(PathBuf::from("/does/not/exist.json"));
        assert!(source.read().is_err());
    }
}
