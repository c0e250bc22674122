//! Mock geocoder for development and tests without network access.
//!
//! Serves a fixed address table, optionally loaded from a JSON file of
//! the form `{"address": {"lat": 12.97, "lon": 77.59}, ...}`.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::Coordinates;

use super::error::GeocodeError;
use super::{Geocoder, normalize_address};

/// Geocoder backed by an in-memory address table.
///
/// Lookups ignore case and surrounding/repeated whitespace.
#[derive(Debug, Clone, Default)]
pub struct MockGeocoder {
    addresses: HashMap<String, Coordinates>,
}

impl MockGeocoder {
    /// Create an empty mock; every lookup returns `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an address.
    pub fn with(mut self, address: &str, coordinates: Coordinates) -> Self {
        self.insert(address, coordinates);
        self
    }

    pub fn insert(&mut self, address: &str, coordinates: Coordinates) {
        self.addresses.insert(normalize_address(address), coordinates);
    }

    /// Load the address table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GeocodeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| GeocodeError::MockData {
            message: format!("failed to read {:?}: {}", path, e),
        })?;
        let table: HashMap<String, Coordinates> =
            serde_json::from_str(&json).map_err(|e| GeocodeError::MockData {
                message: format!("failed to parse {:?}: {}", path, e),
            })?;

        let mut mock = Self::new();
        for (address, coordinates) in table {
            if !coordinates.is_valid() {
                return Err(GeocodeError::MockData {
                    message: format!("invalid coordinates for {address:?}"),
                });
            }
            mock.insert(&address, coordinates);
        }
        Ok(mock)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl Geocoder for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        Ok(self.addresses.get(&normalize_address(address)).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn lookup_is_case_and_space_insensitive() {
        let mock = MockGeocoder::new().with("MG Road, Bengaluru", Coordinates::new(12.9755, 77.6068));

        let hit = mock.geocode("  mg road,   BENGALURU ").await.unwrap();
        assert_eq!(hit, Some(Coordinates::new(12.9755, 77.6068)));
        assert_eq!(mock.geocode("Atlantis").await.unwrap(), None);
    }

    #[tokio::test]
    async fn loads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addresses.json");
        std::fs::write(
            &path,
            r#"{"Majestic": {"lat": 12.9757, "lon": 77.5728}, "Indiranagar": {"lat": 12.9784, "lon": 77.6386}}"#,
        )
        .unwrap();

        let mock = MockGeocoder::from_file(&path).unwrap();
        assert_eq!(mock.len(), 2);
        assert_eq!(
            mock.geocode("majestic").await.unwrap(),
            Some(Coordinates::new(12.9757, 77.5728))
        );
    }

    #[test]
    fn rejects_bad_files() {
        let dir = tempdir().unwrap();

        let missing = MockGeocoder::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, GeocodeError::MockData { .. }));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"Pole": {"lat": 91.0, "lon": 0.0}}"#).unwrap();
        let err = MockGeocoder::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("invalid coordinates"));
    }
}
