//! Line attribution along a path.
//!
//! Both the candidate score and the rendered itinerary count line changes
//! through [`line_runs`], so the two can never disagree.
//!
//! Rules:
//! - the line of a hop is [`Station::shared_line`] of its endpoints;
//! - the starting line is the line of the first hop;
//! - a hop with a defined line different from the current one starts a
//!   new run (one line change), even when the current line is undefined;
//! - a hop with no shared line belongs to the current run and does not
//!   change the current line.

use crate::domain::{LineId, Station};

/// A maximal stretch of a path ridden on one line.
///
/// `start` and `end` are indices into the path's stations, so the run
/// covers hops `start..end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRun<'g> {
    pub line: Option<&'g LineId>,
    pub start: usize,
    pub end: usize,
}

/// Line of each hop, `stations.len() - 1` entries.
pub fn hop_lines<'g>(stations: &[&'g Station]) -> Vec<Option<&'g LineId>> {
    stations
        .windows(2)
        .map(|pair| pair[0].shared_line(pair[1]))
        .collect()
}

/// Split a path into same-line runs. Empty for paths with no hops.
pub fn line_runs<'g>(stations: &[&'g Station]) -> Vec<LineRun<'g>> {
    let lines = hop_lines(stations);
    let Some(&first) = lines.first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut current = first;
    let mut run_start = 0;

    for (hop, &line) in lines.iter().enumerate() {
        if line.is_some() && line != current {
            runs.push(LineRun {
                line: current,
                start: run_start,
                end: hop,
            });
            run_start = hop;
            current = line;
        }
    }

    runs.push(LineRun {
        line: current,
        start: run_start,
        end: lines.len(),
    });
    runs
}

/// Number of line changes along a path.
pub fn count_line_changes(stations: &[&Station]) -> usize {
    line_runs(stations).len().saturating_sub(1)
}
