//! Street graph representation and builder.
//!
//! # Data layout
//!
//! The graph is an adjacency index: a [`KeyedTable`] from each coordinate to
//! the `Vec` of segments that *start* there.  Every street block is inserted
//! in both directions, so every indexed coordinate has at least one outgoing
//! segment and a coordinate missing from the index has no roads at all.
//!
//! The map is frozen once [`StreetMapBuilder::build`] returns; routing code
//! only ever holds `&StreetMap`.

use tracing::debug;

use depot_core::{GeoCoord, KeyedTable, StreetSegment};

use crate::MapResult;

// ── StreetMap ─────────────────────────────────────────────────────────────────

/// Read-only street graph keyed by coordinate.
///
/// Do not construct directly; use [`StreetMapBuilder`] or one of the
/// [`loader`](crate::loader) functions.
#[derive(Debug)]
pub struct StreetMap {
    adjacency:     KeyedTable<GeoCoord, Vec<StreetSegment>>,
    segment_count: usize,
}

impl StreetMap {
    /// Construct a map with no streets.  Every query against it reports an
    /// unknown coordinate.
    pub fn empty() -> Self {
        StreetMapBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    /// Number of distinct coordinates with at least one outgoing segment.
    pub fn coord_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed segments (twice the number of street blocks).
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Segments leaving `coord`, or `None` if no road starts there.
    #[inline]
    pub fn segments_from(&self, coord: &GeoCoord) -> Option<&[StreetSegment]> {
        self.adjacency.find(coord).map(Vec::as_slice)
    }

    /// `true` if at least one segment leaves `coord`.
    #[inline]
    pub fn contains(&self, coord: &GeoCoord) -> bool {
        self.adjacency.find(coord).is_some()
    }

    /// Every coordinate in the index.
    pub fn coords(&self) -> impl Iterator<Item = &GeoCoord> + '_ {
        self.adjacency.iter().map(|(c, _)| c)
    }
}

// ── StreetMapBuilder ──────────────────────────────────────────────────────────

/// Construct a [`StreetMap`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use depot_core::GeoCoord;
/// use depot_map::StreetMapBuilder;
///
/// let a = GeoCoord::new(34.0547, -118.4795);
/// let b = GeoCoord::new(34.0549, -118.4790);
///
/// let mut builder = StreetMapBuilder::new();
/// builder.add_street(a, b, "Broxton Ave");
/// let map = builder.build();
/// assert_eq!(map.coord_count(), 2);
/// assert_eq!(map.segment_count(), 2); // both directions
/// ```
#[derive(Debug)]
pub struct StreetMapBuilder {
    adjacency:     KeyedTable<GeoCoord, Vec<StreetSegment>>,
    segment_count: usize,
}

impl StreetMapBuilder {
    pub fn new() -> Self {
        Self { adjacency: KeyedTable::new(), segment_count: 0 }
    }

    /// Builder whose coordinate index uses a non-default maximum load factor.
    ///
    /// # Errors
    ///
    /// [`MapError::Core`](crate::MapError::Core) wrapping
    /// `CoreError::InvalidLoadFactor` for a factor that is not finite and
    /// positive.
    pub fn with_max_load_factor(max_load_factor: f64) -> MapResult<Self> {
        Ok(Self {
            adjacency: KeyedTable::with_max_load_factor(max_load_factor)?,
            segment_count: 0,
        })
    }

    /// Add a **directed** segment.  Only `segment.start` gains an outgoing
    /// edge.
    pub fn add_directed_segment(&mut self, segment: StreetSegment) {
        let start = segment.start;
        match self.adjacency.find_mut(&start) {
            Some(out) => out.push(segment),
            None => self.adjacency.associate(start, vec![segment]),
        }
        self.segment_count += 1;
    }

    /// Add a street block in **both directions**.
    pub fn add_street(&mut self, start: GeoCoord, end: GeoCoord, name: impl Into<String>) {
        let forward = StreetSegment::new(start, end, name);
        let backward = forward.reversed();
        self.add_directed_segment(forward);
        self.add_directed_segment(backward);
    }

    pub fn coord_count(&self) -> usize { self.adjacency.len() }
    pub fn segment_count(&self) -> usize { self.segment_count }

    /// Consume the builder and freeze the graph.
    pub fn build(self) -> StreetMap {
        debug!(
            coords = self.adjacency.len(),
            segments = self.segment_count,
            buckets = self.adjacency.bucket_count(),
            "street map built"
        );
        StreetMap { adjacency: self.adjacency, segment_count: self.segment_count }
    }
}

impl Default for StreetMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
