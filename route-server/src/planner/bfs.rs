//! Fewest-hop path search over the station graph.
//!
//! Plain breadth-first search: every edge costs one hop. Geography and
//! line changes play no part here; they are weighed by the candidate
//! scoring in `select`.

use std::collections::VecDeque;

use tracing::trace;

use crate::domain::{Station, StationGraph, StationId};

use super::error::PlanError;

/// A simple path through the graph, both endpoints included.
#[derive(Debug, Clone)]
pub struct StationPath<'g> {
    stations: Vec<&'g Station>,
}

impl<'g> StationPath<'g> {
    pub fn stations(&self) -> &[&'g Station] {
        &self.stations
    }

    pub fn first(&self) -> &'g Station {
        self.stations[0]
    }

    pub fn last(&self) -> &'g Station {
        self.stations[self.stations.len() - 1]
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false: a path holds at least its start station.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Queue entry: a station reached via `parent`, an index into the node arena.
struct Node {
    station: usize,
    parent: Option<usize>,
}

/// Find the fewest-hop path from `start` to `end`.
///
/// Returns `Ok(None)` if the stations are not connected. Stations are
/// marked visited when dequeued, so a station may sit in the queue more
/// than once; the first dequeue is still via a shortest path.
pub fn shortest_path<'g>(
    graph: &'g StationGraph,
    start: &StationId,
    end: &StationId,
) -> Result<Option<StationPath<'g>>, PlanError> {
    let start_idx = graph
        .index_of(start)
        .ok_or_else(|| PlanError::UnknownStation(start.clone()))?;
    let end_idx = graph
        .index_of(end)
        .ok_or_else(|| PlanError::UnknownStation(end.clone()))?;

    let mut nodes = vec![Node {
        station: start_idx,
        parent: None,
    }];
    let mut queue: VecDeque<usize> = VecDeque::from([0]);
    let mut visited = vec![false; graph.len()];

    while let Some(node_idx) = queue.pop_front() {
        let current = nodes[node_idx].station;

        if current == end_idx {
            let path = reconstruct(graph, &nodes, node_idx);
            trace!(%start, %end, hops = path.hops(), expanded = nodes.len(), "path found");
            return Ok(Some(path));
        }

        if visited[current] {
            continue;
        }
        visited[current] = true;

        for &next in graph.adjacent(current) {
            if !visited[next] {
                nodes.push(Node {
                    station: next,
                    parent: Some(node_idx),
                });
                queue.push_back(nodes.len() - 1);
            }
        }
    }

    trace!(%start, %end, "no path");
    Ok(None)
}

fn reconstruct<'g>(graph: &'g StationGraph, nodes: &[Node], mut node_idx: usize) -> StationPath<'g> {
    let mut stations = vec![graph.station_at(nodes[node_idx].station)];
    while let Some(parent) = nodes[node_idx].parent {
        stations.push(graph.station_at(nodes[parent].station));
        node_idx = parent;
    }
    stations.reverse();
    StationPath { stations }
}
