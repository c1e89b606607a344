use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Target FHIR release a registry was built for (e.g., `4.0.1`).
///
/// Carried by every registry so consumers can resolve profile lists
/// against the correct release even when several are hosted at once.
/// Known variants keep serialization consistent; `Other` preserves
/// forward compatibility with releases this crate does not yet know
/// about.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FhirVersion {
    R3,
    R4,
    Other(String),
}

impl FhirVersion {
    pub fn as_str(&self) -> &str {
        match self {
            FhirVersion::R3 => "3.0.1",
            FhirVersion::R4 => "4.0.1",
            FhirVersion::Other(value) => value.as_str(),
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "3.0.1" => FhirVersion::R3,
            "4.0.1" => FhirVersion::R4,
            other => FhirVersion::Other(other.to_string()),
        }
    }
}

impl Serialize for FhirVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FhirVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}
