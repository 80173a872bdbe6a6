//! Stop ordering.
//!
//! A [`StopSequencer`] proposes a visiting order and reports the straight-line
//! length of both the original and the proposed order.  It never decides
//! whether the proposal is used; [`RoutePlanner`](crate::RoutePlanner) keeps
//! the proposal only when [`Reordering::improves`] is true.
//!
//! Totals run depot → first stop → … → last stop.  The return leg to the
//! depot is excluded from both.

use tracing::debug;

use depot_core::{DeliveryStop, GeoCoord};

/// A proposed stop order and the straight-line miles before and after.
#[derive(Clone, Debug, PartialEq)]
pub struct Reordering {
    pub stops:           Vec<DeliveryStop>,
    pub original_miles:  f64,
    pub reordered_miles: f64,
}

impl Reordering {
    /// `true` only for a strict reduction in straight-line miles.
    pub fn improves(&self) -> bool {
        self.reordered_miles < self.original_miles
    }
}

/// Pluggable stop-ordering heuristic.
///
/// Implementations must be `Send + Sync` so a planner can be shared across
/// threads.
pub trait StopSequencer: Send + Sync {
    fn reorder(&self, depot: GeoCoord, stops: &[DeliveryStop]) -> Reordering;
}

/// Greedy nearest-neighbour tour construction.
///
/// From the depot, repeatedly travel to the closest remaining stop.  O(n²), no
/// lookahead.  When two remaining stops are equally close, the one that came
/// first in the input wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestNeighbor;

impl StopSequencer for NearestNeighbor {
    fn reorder(&self, depot: GeoCoord, stops: &[DeliveryStop]) -> Reordering {
        let original_miles = crow_miles(depot, stops);

        let mut remaining: Vec<&DeliveryStop> = stops.iter().collect();
        let mut ordered: Vec<DeliveryStop> = Vec::with_capacity(stops.len());
        let mut here = depot;

        while !remaining.is_empty() {
            let mut best = 0;
            let mut best_miles = here.distance_miles(remaining[0].location);
            for (i, stop) in remaining.iter().enumerate().skip(1) {
                let miles = here.distance_miles(stop.location);
                if miles < best_miles {
                    best = i;
                    best_miles = miles;
                }
            }
            let stop = remaining.remove(best);
            here = stop.location;
            ordered.push(stop.clone());
        }

        let reordered_miles = crow_miles(depot, &ordered);
        debug!(stops = stops.len(), original_miles, reordered_miles, "nearest-neighbour reorder");

        Reordering { stops: ordered, original_miles, reordered_miles }
    }
}

/// Straight-line miles from `depot` through every stop in order, without
/// returning to the depot.
pub fn crow_miles(depot: GeoCoord, stops: &[DeliveryStop]) -> f64 {
    let mut here = depot;
    let mut total = 0.0;
    for stop in stops {
        total += here.distance_miles(stop.location);
        here = stop.location;
    }
    total
}
