//! Station dataset loading.
//!
//! The dataset is a JSON array of station records:
//!
//! ```json
//! [{"id": "MJS", "name": "Majestic", "lat": 12.9757, "lon": 77.5728,
//!   "lines": ["purple", "green"], "connections": ["CRS", "SVS"]}]
//! ```
//!
//! Ids may be strings or integers.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::{Coordinates, GraphOptions, LineId, Station, StationGraph, StationId};

use super::error::DatasetError;

/// A station id as written in the dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<RecordId> for StationId {
    fn from(id: RecordId) -> Self {
        StationId::new(id.to_string())
    }
}

/// Raw station record.
#[derive(Debug, Clone, Deserialize)]
struct StationRecord {
    id: RecordId,
    name: String,
    lat: f64,
    lon: f64,
    lines: Vec<String>,
    #[serde(default)]
    connections: Vec<RecordId>,
}

impl StationRecord {
    fn into_station(self) -> Result<Station, DatasetError> {
        let id = self.id.to_string();
        if id.trim().is_empty() {
            return Err(DatasetError::InvalidRecord {
                id,
                reason: "empty id",
            });
        }
        if self.name.trim().is_empty() {
            return Err(DatasetError::InvalidRecord {
                id,
                reason: "empty name",
            });
        }

        Ok(Station::new(
            StationId::new(id),
            self.name.trim(),
            Coordinates::new(self.lat, self.lon),
            self.lines.into_iter().map(LineId::new).collect(),
            self.connections.into_iter().map(StationId::from).collect(),
        ))
    }
}

/// Parse and validate a dataset held in memory.
pub fn parse_stations(json: &str, options: &GraphOptions) -> Result<StationGraph, DatasetError> {
    let records: Vec<StationRecord> =
        serde_json::from_str(json).map_err(|e| DatasetError::Json {
            message: e.to_string(),
        })?;

    let stations = records
        .into_iter()
        .map(StationRecord::into_station)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StationGraph::build(stations, options)?)
}

/// Read, parse and validate the dataset file.
///
/// Fails on the first integrity problem; a bad dataset must stop the
/// server at startup rather than surface as odd routes later.
pub fn load_stations(
    path: impl AsRef<Path>,
    options: &GraphOptions,
) -> Result<StationGraph, DatasetError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let graph = parse_stations(&json, options)?;
    let interchanges = graph.stations().iter().filter(|s| s.is_interchange()).count();
    info!(
        path = %path.display(),
        stations = graph.len(),
        interchanges,
        "loaded station dataset"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GraphError, UnsharedLinePolicy};
    use tempfile::tempdir;

    const SMALL: &str = r#"[
        {"id": "A", "name": "Alpha", "lat": 12.97, "lon": 77.55, "lines": ["L1"], "connections": ["B"]},
        {"id": "B", "name": "Bravo", "lat": 12.97, "lon": 77.57, "lines": ["L1", "L2"], "connections": ["A", "C"]},
        {"id": "C", "name": "Charlie", "lat": 12.97, "lon": 77.59, "lines": ["L2"], "connections": ["B"]}
    ]"#;

    #[test]
    fn parses_records() {
        let graph = parse_stations(SMALL, &GraphOptions::default()).unwrap();
        assert_eq!(graph.len(), 3);

        let bravo = graph.get(&StationId::new("B")).unwrap();
        assert_eq!(bravo.name, "Bravo");
        assert_eq!(bravo.lines, vec![LineId::new("L1"), LineId::new("L2")]);
        assert_eq!(bravo.connections.len(), 2);
    }

    #[test]
    fn numeric_ids_and_missing_connections() {
        let json = r#"[
            {"id": 1, "name": "One", "lat": 0.0, "lon": 0.0, "lines": ["L"], "connections": [2]},
            {"id": "2", "name": "Two", "lat": 0.0, "lon": 0.1, "lines": ["L"]}
        ]"#;
        let graph = parse_stations(json, &GraphOptions::default()).unwrap();
        let two = graph.get(&StationId::new("2")).unwrap();
        assert!(two.connections.is_empty());
        // Mirrored from station 1.
        let neighbours: Vec<_> = graph
            .neighbours(&StationId::new("2"))
            .unwrap()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(neighbours, vec!["One"]);
    }

    #[test]
    fn unknown_connection_fails_fast() {
        let json = r#"[{"id": "A", "name": "Alpha", "lat": 0.0, "lon": 0.0, "lines": ["L"], "connections": ["Z"]}]"#;
        let err = parse_stations(json, &GraphOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Graph(GraphError::UnknownConnection { .. })
        ));
    }

    #[test]
    fn malformed_records() {
        let err = parse_stations(r#"[{"id": "A"}]"#, &GraphOptions::default()).unwrap_err();
        assert!(matches!(err, DatasetError::Json { .. }));

        let json = r#"[{"id": "A", "name": "  ", "lat": 0.0, "lon": 0.0, "lines": ["L"]}]"#;
        let err = parse_stations(json, &GraphOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid station A: empty name");
    }

    #[test]
    fn strict_policy_rejects_unshared_connections() {
        let json = r#"[
            {"id": "A", "name": "Alpha", "lat": 0.0, "lon": 0.0, "lines": ["L1"], "connections": ["B"]},
            {"id": "B", "name": "Bravo", "lat": 0.0, "lon": 0.1, "lines": ["L2"], "connections": ["A"]}
        ]"#;
        assert!(parse_stations(json, &GraphOptions::default()).is_ok());

        let strict = GraphOptions::default().with_unshared_lines(UnsharedLinePolicy::Reject);
        let err = parse_stations(json, &strict).unwrap_err();
        assert!(matches!(err, DatasetError::Graph(GraphError::NoSharedLine { .. })));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, SMALL).unwrap();

        let graph = load_stations(&path, &GraphOptions::default()).unwrap();
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_stations("/nonexistent/stations.json", &GraphOptions::default())
            .unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/stations.json"));
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/metro_stations.json");
        let strict = GraphOptions::default().with_unshared_lines(UnsharedLinePolicy::Reject);
        let graph = load_stations(path, &strict).unwrap();

        assert!(graph.len() > 20);
        let majestic = graph.get(&StationId::new("MJS")).unwrap();
        assert!(majestic.is_interchange());
    }
}
