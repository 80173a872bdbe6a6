//! A* shortest paths over the street map.
//!
//! # Costs
//!
//! Edge cost is the great-circle length of a segment in miles.  The heuristic
//! is the straight-line distance to the goal measured on raw degrees.  For
//! map-scale inputs away from the poles a degree covers tens of miles, so the
//! heuristic stays below the remaining road miles and the search is optimal.
//!
//! # Frontier
//!
//! The open set is a `BinaryHeap` ordered by `f = g + h`.  Improving a
//! coordinate's `g` pushes a fresh entry instead of decreasing a key; stale
//! entries are skipped when popped.  Equal `f` values pop in push order, so
//! a query always returns the same path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use depot_core::{GeoCoord, StreetSegment};
use depot_map::StreetMap;

use crate::RouteError;

// ── Path ──────────────────────────────────────────────────────────────────────

/// A sequence of segments and the miles they cover.
///
/// `Path::default()` is the empty, zero-mile path.  [`PathFinder::extend_path`]
/// appends to an existing `Path`, which is how multi-leg routes accumulate.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Segments in travel order.
    pub segments: Vec<StreetSegment>,
    /// Sum of the great-circle lengths of `segments`.
    pub miles: f64,
}

impl Path {
    /// `true` if no segment has been travelled.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final coordinate reached, if any segment has been travelled.
    pub fn end(&self) -> Option<GeoCoord> {
        self.segments.last().map(|s| s.end)
    }
}

// ── PathFinder ────────────────────────────────────────────────────────────────

/// Point-to-point router over a borrowed, read-only [`StreetMap`].
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'a> {
    map: &'a StreetMap,
}

impl<'a> PathFinder<'a> {
    pub fn new(map: &'a StreetMap) -> Self {
        Self { map }
    }

    /// Shortest path from `start` to `end`.
    ///
    /// `start == end` is an empty, zero-mile path as long as the coordinate is
    /// on the map.
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnknownCoordinate`] if no segment starts at `start` or
    ///   `end`.
    /// - [`RouteError::NoPath`] if `end` is unreachable from `start`.
    pub fn find_path(&self, start: GeoCoord, end: GeoCoord) -> Result<Path, RouteError> {
        let mut path = Path::default();
        self.extend_path(start, end, &mut path)?;
        Ok(path)
    }

    /// Append the shortest path from `start` to `end` onto `path`, adding its
    /// length to `path.miles`.
    ///
    /// On error `path` is left exactly as it was.
    pub fn extend_path(
        &self,
        start: GeoCoord,
        end: GeoCoord,
        path: &mut Path,
    ) -> Result<(), RouteError> {
        for coord in [start, end] {
            if !self.map.contains(&coord) {
                return Err(RouteError::UnknownCoordinate(coord));
            }
        }

        let leg = astar(self.map, start, end)?;
        let miles: f64 = leg.iter().map(|s| s.length_miles()).sum();
        debug!(%start, %end, segments = leg.len(), miles, "path found");

        path.miles += miles;
        path.segments.extend(leg.into_iter().cloned());
        Ok(())
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Frontier entry.  `BinaryHeap` is a max-heap, so `Ord` is reversed: lower
/// `f` ranks higher, and on equal `f` the lower push sequence ranks higher.
#[derive(Debug)]
struct Open {
    f:     f64,
    g:     f64,
    seq:   u64,
    coord: GeoCoord,
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open {}

fn astar<'m>(
    map: &'m StreetMap,
    start: GeoCoord,
    end: GeoCoord,
) -> Result<Vec<&'m StreetSegment>, RouteError> {
    let heuristic = |c: GeoCoord| c.euclidean_deg(end);

    // g[c] = best known miles from start to c.
    let mut g: FxHashMap<GeoCoord, f64> = FxHashMap::default();
    // came_from[c] = segment whose traversal produced g[c].
    let mut came_from: FxHashMap<GeoCoord, &'m StreetSegment> = FxHashMap::default();
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;

    g.insert(start, 0.0);
    open.push(Open { f: heuristic(start), g: 0.0, seq, coord: start });

    while let Some(Open { g: cost, coord, .. }) = open.pop() {
        if coord == end {
            trace!(expanded, frontier = open.len(), "goal reached");
            return Ok(reconstruct(&came_from, start, end));
        }

        // Skip stale frontier entries.
        if g.get(&coord).is_some_and(|&best| cost > best) {
            continue;
        }
        expanded += 1;

        for segment in map.segments_from(&coord).unwrap_or_default() {
            let next = segment.end;
            let tentative = cost + segment.length_miles();

            if g.get(&next).is_none_or(|&best| tentative < best) {
                g.insert(next, tentative);
                came_from.insert(next, segment);
                seq += 1;
                open.push(Open { f: tentative + heuristic(next), g: tentative, seq, coord: next });
            }
        }
    }

    debug!(%start, %end, expanded, "frontier exhausted");
    Err(RouteError::NoPath { from: start, to: end })
}

fn reconstruct<'m>(
    came_from: &FxHashMap<GeoCoord, &'m StreetSegment>,
    start: GeoCoord,
    end: GeoCoord,
) -> Vec<&'m StreetSegment> {
    let mut leg = Vec::new();
    let mut cur = end;
    while cur != start {
        let Some(&segment) = came_from.get(&cur) else {
            break;
        };
        leg.push(segment);
        cur = segment.start;
    }
    leg.reverse();
    leg
}
