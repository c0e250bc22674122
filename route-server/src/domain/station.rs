//! Station, line and coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a station in the dataset.
///
/// Datasets use either strings or integers for ids; both are normalised
/// to their string form when loaded.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a transit line (e.g. "purple").
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True if both components are finite and within their degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A station of the transit network.
///
/// Stations are only constructed through the dataset loader or
/// [`StationGraph::build`](super::StationGraph::build), which checks
/// that every connection target exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub coordinates: Coordinates,
    /// Lines stopping here, in dataset order.
    pub lines: Vec<LineId>,
    /// Directly connected stations, in dataset order.
    pub connections: Vec<StationId>,
}

impl Station {
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        coordinates: Coordinates,
        lines: Vec<LineId>,
        connections: Vec<StationId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            coordinates,
            lines,
            connections,
        }
    }

    /// Whether `line` stops at this station.
    pub fn serves(&self, line: &LineId) -> bool {
        self.lines.contains(line)
    }

    /// A station served by more than one line.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }

    /// The first of this station's lines (in dataset order) that also
    /// stops at `other`.
    ///
    /// When the two stations share several lines the dataset order of
    /// `self.lines` decides which one is reported.
    pub fn shared_line<'a>(&'a self, other: &Station) -> Option<&'a LineId> {
        self.lines.iter().find(|line| other.serves(line))
    }
}
