//! The immutable station graph.

use std::collections::HashMap;

use tracing::warn;

use super::error::GraphError;
use super::station::{Station, StationId};

/// What to do with a connection whose endpoints share no line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsharedLinePolicy {
    /// Keep the connection; the hop is narrated without a line.
    #[default]
    Allow,
    /// Refuse to load the dataset.
    Reject,
}

/// Options applied while building a [`StationGraph`].
#[derive(Debug, Clone, Default)]
pub struct GraphOptions {
    pub unshared_lines: UnsharedLinePolicy,
}

impl GraphOptions {
    pub fn with_unshared_lines(mut self, policy: UnsharedLinePolicy) -> Self {
        self.unshared_lines = policy;
        self
    }
}

/// All stations of the network and their connections.
///
/// Built once at startup and shared read-only (typically behind an `Arc`)
/// by every request. There is no mutation API.
///
/// Stations keep the order they had in the dataset; that order is the
/// tie-breaker wherever two stations compare equal.
#[derive(Debug, Clone)]
pub struct StationGraph {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    /// Undirected adjacency by station index.
    adjacency: Vec<Vec<usize>>,
}

impl StationGraph {
    /// Validate `stations` and build the graph.
    ///
    /// Every connection must name a known station. A connection listed on
    /// only one side is mirrored onto the other so the graph is undirected.
    pub fn build(stations: Vec<Station>, options: &GraphOptions) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(stations.len());

        for (idx, station) in stations.iter().enumerate() {
            if station.lines.is_empty() {
                return Err(GraphError::NoLines(station.id.clone()));
            }
            if !station.coordinates.is_valid() {
                return Err(GraphError::InvalidCoordinates {
                    station: station.id.clone(),
                    lat: station.coordinates.lat,
                    lon: station.coordinates.lon,
                });
            }
            if index.insert(station.id.clone(), idx).is_some() {
                return Err(GraphError::DuplicateStation(station.id.clone()));
            }
        }

        let mut adjacency: Vec<Vec<usize>> = Vec::with_capacity(stations.len());
        for station in &stations {
            let mut neighbours = Vec::with_capacity(station.connections.len());
            for target in &station.connections {
                let &to = index
                    .get(target)
                    .ok_or_else(|| GraphError::UnknownConnection {
                        from: station.id.clone(),
                        to: target.clone(),
                    })?;
                if stations[to].id == station.id {
                    return Err(GraphError::SelfConnection(station.id.clone()));
                }
                if !neighbours.contains(&to) {
                    neighbours.push(to);
                }
            }
            adjacency.push(neighbours);
        }

        // Mirror one-sided connections.
        let declared = adjacency.clone();
        for (from, neighbours) in declared.iter().enumerate() {
            for &to in neighbours {
                if !adjacency[to].contains(&from) {
                    warn!(
                        from = %stations[from].id,
                        to = %stations[to].id,
                        "connection not reciprocated in dataset, mirroring it"
                    );
                    adjacency[to].push(from);
                }
            }
        }

        for (from, neighbours) in adjacency.iter().enumerate() {
            for &to in neighbours {
                // Each undirected edge once.
                if to < from {
                    continue;
                }
                if stations[from].shared_line(&stations[to]).is_some() {
                    continue;
                }
                match options.unshared_lines {
                    UnsharedLinePolicy::Reject => {
                        return Err(GraphError::NoSharedLine {
                            from: stations[from].id.clone(),
                            to: stations[to].id.clone(),
                        });
                    }
                    UnsharedLinePolicy::Allow => {
                        warn!(
                            from = %stations[from].id,
                            to = %stations[to].id,
                            "connected stations share no line"
                        );
                    }
                }
            }
        }

        Ok(Self {
            stations,
            index,
            adjacency,
        })
    }

    /// Look up a station by id.
    pub fn get(&self, id: &StationId) -> Option<&Station> {
        self.index.get(id).map(|&idx| &self.stations[idx])
    }

    /// All stations in dataset order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Neighbours of a station, in dataset connection order followed by
    /// any mirrored connections. `None` for an unknown id.
    pub fn neighbours(&self, id: &StationId) -> Option<impl Iterator<Item = &Station> + '_> {
        let idx = *self.index.get(id)?;
        Some(self.adjacency[idx].iter().map(|&n| &self.stations[n]))
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub(crate) fn index_of(&self, id: &StationId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn station_at(&self, idx: usize) -> &Station {
        &self.stations[idx]
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }
}
