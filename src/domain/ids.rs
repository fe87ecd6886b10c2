//! Domain identifier types with validation
//!
//! Newtype wrappers for record and storage identifiers. Each type ensures
//! type safety and provides validation for format compliance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record identifier newtype wrapper
///
/// Uniquely identifies one vital-sign reading. Typically a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new RecordId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Record ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the record ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Patient identifier newtype wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Patient ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the patient ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Object-storage key newtype wrapper
///
/// Represents a full key within the configured bucket, including any
/// namespace prefix (e.g. `data_request/patient_records-2024-01-01.json`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Creates a new ObjectKey from a string
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err("Object key cannot be empty".to_string());
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// True when the key denotes a "directory" placeholder object
    pub fn is_directory(&self) -> bool {
        self.0.ends_with('/')
    }

    /// True when the key carries the expected batch content-type suffix
    pub fn is_json(&self) -> bool {
        self.0.ends_with(".json")
    }

    /// The file name portion of the key (after the last `/`)
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Derives the archival export key for this source batch
    ///
    /// The artifact name is deterministic: the source file name with its
    /// `.json` suffix replaced by `.csv`, placed under `output_prefix`.
    pub fn export_key(&self, output_prefix: &str) -> String {
        let name = self.file_name();
        let stem = name.strip_suffix(".json").unwrap_or(name);
        let prefix = output_prefix.trim_end_matches('/');
        format!("{prefix}/{stem}.csv")
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_creation() {
        let id = RecordId::new("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
        assert_eq!(id.as_str(), "7d44b88c-4199-4bad-97dc-d78268e01398");
    }

    #[test]
    fn test_record_id_empty_fails() {
        assert!(RecordId::new("").is_err());
        assert!(RecordId::new("   ").is_err());
    }

    #[test]
    fn test_patient_id_from_str() {
        let id: PatientId = "patient-42".parse().unwrap();
        assert_eq!(id.as_str(), "patient-42");
    }

    #[test]
    fn test_object_key_directory_detection() {
        let key = ObjectKey::new("data_request/").unwrap();
        assert!(key.is_directory());
        assert!(!key.is_json());
    }

    #[test]
    fn test_object_key_json_detection() {
        let key = ObjectKey::new("data_request/batch-1.json").unwrap();
        assert!(!key.is_directory());
        assert!(key.is_json());

        let key = ObjectKey::new("data_request/readme.txt").unwrap();
        assert!(!key.is_json());
    }

    #[test]
    fn test_object_key_file_name() {
        let key = ObjectKey::new("data_request/patient_records-2024.json").unwrap();
        assert_eq!(key.file_name(), "patient_records-2024.json");

        let key = ObjectKey::new("flat.json").unwrap();
        assert_eq!(key.file_name(), "flat.json");
    }

    #[test]
    fn test_object_key_export_key() {
        let key = ObjectKey::new("data_request/patient_records-2024.json").unwrap();
        assert_eq!(
            key.export_key("output/"),
            "output/patient_records-2024.csv"
        );
        assert_eq!(key.export_key("output"), "output/patient_records-2024.csv");
    }

    #[test]
    fn test_object_key_display() {
        let key = ObjectKey::new("data_request/a.json").unwrap();
        assert_eq!(format!("{}", key), "data_request/a.json");
    }
}
