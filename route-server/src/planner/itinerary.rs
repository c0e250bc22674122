//! Turning a station path into instructions.

use crate::domain::{LineId, Station};

use super::bfs::StationPath;
use super::lines::{hop_lines, line_runs};

/// One instruction of the itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<'g> {
    /// Walk from the address to the entry station.
    Walk { to: &'g Station },
    /// Ride one line between two stations.
    Metro {
        line: Option<&'g LineId>,
        from: &'g Station,
        to: &'g Station,
    },
    /// Change lines.
    Transfer { at: &'g Station },
    /// Leave the network.
    Exit { at: &'g Station },
}

/// One hop of the path and the line it is ridden on.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'g> {
    pub from: &'g Station,
    pub to: &'g Station,
    /// `None` when the two stations share no line.
    pub line: Option<&'g LineId>,
}

#[derive(Debug, Clone)]
pub struct Itinerary<'g> {
    pub steps: Vec<Step<'g>>,
    pub segments: Vec<Segment<'g>>,
}

/// Build steps and per-hop segments for a path.
///
/// Steps are a walk to the first station, one metro step per same-line
/// run with a transfer between consecutive runs, and an exit at the last
/// station. A single-station path is just walk then exit.
pub fn build_itinerary<'g>(path: &StationPath<'g>) -> Itinerary<'g> {
    let stations = path.stations();

    let mut steps = vec![Step::Walk { to: path.first() }];
    for (i, run) in line_runs(stations).into_iter().enumerate() {
        if i > 0 {
            steps.push(Step::Transfer {
                at: stations[run.start],
            });
        }
        steps.push(Step::Metro {
            line: run.line,
            from: stations[run.start],
            to: stations[run.end],
        });
    }
    steps.push(Step::Exit { at: path.last() });

    let segments = stations
        .windows(2)
        .zip(hop_lines(stations))
        .map(|(pair, line)| Segment {
            from: pair[0],
            to: pair[1],
            line,
        })
        .collect();

    Itinerary { steps, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::bfs::shortest_path;
    use crate::planner::fixtures::{abc, graph, id, station};

    /// Compact rendering for assertions.
    fn describe(steps: &[Step<'_>]) -> Vec<String> {
        steps
            .iter()
            .map(|step| match step {
                Step::Walk { to } => format!("walk->{}", to.name),
                Step::Metro { line, from, to } => format!(
                    "metro({},{}->{})",
                    line.map(|l| l.as_str()).unwrap_or("?"),
                    from.name,
                    to.name
                ),
                Step::Transfer { at } => format!("transfer@{}", at.name),
                Step::Exit { at } => format!("exit@{}", at.name),
            })
            .collect()
    }

    #[test]
    fn interchange_scenario() {
        let g = abc();
        let path = shortest_path(&g, &id("A"), &id("C")).unwrap().unwrap();
        let itinerary = build_itinerary(&path);

        assert_eq!(
            describe(&itinerary.steps),
            vec![
                "walk->A",
                "metro(L1,A->B)",
                "transfer@B",
                "metro(L2,B->C)",
                "exit@C",
            ]
        );

        assert_eq!(itinerary.segments.len(), 2);
        assert_eq!(itinerary.segments[0].from.name, "A");
        assert_eq!(itinerary.segments[0].to.name, "B");
        assert_eq!(itinerary.segments[0].line.map(|l| l.as_str()), Some("L1"));
        assert_eq!(itinerary.segments[1].line.map(|l| l.as_str()), Some("L2"));
        assert_eq!(itinerary.segments[1].to.coordinates, g.get(&id("C")).unwrap().coordinates);
    }

    #[test]
    fn single_station_path() {
        let g = abc();
        let path = shortest_path(&g, &id("B"), &id("B")).unwrap().unwrap();
        let itinerary = build_itinerary(&path);

        assert_eq!(describe(&itinerary.steps), vec!["walk->B", "exit@B"]);
        assert!(itinerary.segments.is_empty());
    }

    #[test]
    fn one_line_many_stops() {
        let g = graph(vec![
            station("A", 0.0, 0.00, &["L1"], &["B"]),
            station("B", 0.0, 0.01, &["L1"], &["A", "C"]),
            station("C", 0.0, 0.02, &["L1"], &["B", "D"]),
            station("D", 0.0, 0.03, &["L1"], &["C"]),
        ]);
        let path = shortest_path(&g, &id("A"), &id("D")).unwrap().unwrap();
        let itinerary = build_itinerary(&path);

        assert_eq!(
            describe(&itinerary.steps),
            vec!["walk->A", "metro(L1,A->D)", "exit@D"]
        );
        assert_eq!(itinerary.segments.len(), 3);
    }

    #[test]
    fn unshared_hop_keeps_current_line() {
        // B-C is a connection without a common line.
        let g = graph(vec![
            station("A", 0.0, 0.00, &["L1"], &["B"]),
            station("B", 0.0, 0.01, &["L1"], &["A", "C"]),
            station("C", 0.0, 0.02, &["L2"], &["B", "D"]),
            station("D", 0.0, 0.03, &["L2"], &["C"]),
        ]);
        let path = shortest_path(&g, &id("A"), &id("D")).unwrap().unwrap();
        let itinerary = build_itinerary(&path);

        assert_eq!(
            describe(&itinerary.steps),
            vec![
                "walk->A",
                "metro(L1,A->C)",
                "transfer@C",
                "metro(L2,C->D)",
                "exit@D",
            ]
        );
        assert_eq!(itinerary.segments[1].line, None);
    }

    #[test]
    fn unshared_first_hop_is_its_own_run() {
        // A-B is a connection without a common line.
        let g = graph(vec![
            station("A", 0.0, 0.00, &["L9"], &["B"]),
            station("B", 0.0, 0.01, &["L1"], &["A", "C"]),
            station("C", 0.0, 0.02, &["L1"], &["B"]),
        ]);
        let path = shortest_path(&g, &id("A"), &id("C")).unwrap().unwrap();
        let itinerary = build_itinerary(&path);

        assert_eq!(
            describe(&itinerary.steps),
            vec![
                "walk->A",
                "metro(?,A->B)",
                "transfer@B",
                "metro(L1,B->C)",
                "exit@C",
            ]
        );
        assert_eq!(itinerary.segments[0].line, None);
        assert_eq!(itinerary.segments[1].line.map(|l| l.as_str()), Some("L1"));
    }

    #[test]
    fn two_transfers() {
        let g = graph(vec![
            station("A", 0.0, 0.00, &["L1"], &["B"]),
            station("B", 0.0, 0.01, &["L1", "L2"], &["A", "C"]),
            station("C", 0.0, 0.02, &["L2", "L3"], &["B", "D"]),
            station("D", 0.0, 0.03, &["L3"], &["C"]),
        ]);
        let path = shortest_path(&g, &id("A"), &id("D")).unwrap().unwrap();
        let itinerary = build_itinerary(&path);

        assert_eq!(
            describe(&itinerary.steps),
            vec![
                "walk->A",
                "metro(L1,A->B)",
                "transfer@B",
                "metro(L2,B->C)",
                "transfer@C",
                "metro(L3,C->D)",
                "exit@D",
            ]
        );
    }
}
