//! Scoring configuration for route selection.

/// Parameters of the candidate search and its linear score.
///
/// `score = walk_weight * (origin_km + destination_km)
///        + hop_weight * hops
///        + change_penalty * line_changes`
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Nearest stations considered at each end of the trip.
    pub candidates: usize,

    /// Cost of one kilometre of walking, in hop-equivalents.
    pub walk_weight: f64,

    /// Cost of one hop between adjacent stations.
    pub hop_weight: f64,

    /// Cost of one line change, in hop-equivalents.
    pub change_penalty: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(candidates: usize, walk_weight: f64, hop_weight: f64, change_penalty: f64) -> Self {
        Self {
            candidates,
            walk_weight,
            hop_weight,
            change_penalty,
        }
    }

    /// Set the number of candidates per end.
    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }

    /// Set the per-change penalty.
    pub fn with_change_penalty(mut self, penalty: f64) -> Self {
        self.change_penalty = penalty;
        self
    }

    /// Score a candidate pair and its path. Lower is better.
    pub fn score(
        &self,
        origin_km: f64,
        destination_km: f64,
        hops: usize,
        line_changes: usize,
    ) -> f64 {
        self.walk_weight * origin_km
            + self.walk_weight * destination_km
            + self.hop_weight * hops as f64
            + self.change_penalty * line_changes as f64
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            candidates: 5,
            walk_weight: 1.5,
            hop_weight: 1.0,
            change_penalty: 10.0,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// One more line change costs exactly the change penalty
        #[test]
        fn line_change_adds_penalty(
            o in 0.0f64..50.0,
            d in 0.0f64..50.0,
            hops in 0usize..100,
            changes in 0usize..10,
        ) {
            let config = PlannerConfig::default();
            let delta = config.score(o, d, hops, changes + 1) - config.score(o, d, hops, changes);
            prop_assert!((delta - 10.0).abs() < 1e-9);
        }

        /// Extra walking distance at either end costs 1.5 per kilometre
        #[test]
        fn walking_adds_weighted_distance(
            o in 0.0f64..50.0,
            d in 0.0f64..50.0,
            extra in 0.0f64..20.0,
            hops in 0usize..100,
            changes in 0usize..10,
        ) {
            let config = PlannerConfig::default();
            let base = config.score(o, d, hops, changes);
            let at_origin = config.score(o + extra, d, hops, changes) - base;
            let at_destination = config.score(o, d + extra, hops, changes) - base;
            prop_assert!((at_origin - 1.5 * extra).abs() < 1e-9);
            prop_assert!((at_destination - 1.5 * extra).abs() < 1e-9);
        }
    }
}
