//! Plain-text map and delivery-list loaders.
//!
//! # Map format
//!
//! One block per street: the street name on its own line, then the number of
//! blocks, then one line per block with the start and end coordinates.
//!
//! ```text
//! 10th Helena Drive
//! 1
//! 34.0547000 -118.4794734 34.0544590 -118.4801137
//! Broxton Avenue
//! 2
//! 34.0610000 -118.4472000 34.0612000 -118.4470000
//! 34.0612000 -118.4470000 34.0615000 -118.4468000
//! ```
//!
//! Each block is indexed in both directions.  Blank lines between blocks are
//! ignored.
//!
//! # Delivery format
//!
//! The depot coordinate on the first line, then one stop per line as
//! `lat lon:item`.
//!
//! ```text
//! 34.0625329 -118.4470263
//! 34.0712323 -118.4505969:Chicken tenders (Sproul Landing)
//! 34.0687443 -118.4449195:B-Plate salmon (Eng IV)
//! ```

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use depot_core::{DeliveryStop, GeoCoord};

use crate::network::{StreetMap, StreetMapBuilder};
use crate::MapError;

// ── Street map ────────────────────────────────────────────────────────────────

/// Load a [`StreetMap`] from a map file.
pub fn load_map(path: &Path) -> Result<StreetMap, MapError> {
    let file = std::fs::File::open(path)?;
    let map = load_map_reader(file)?;
    info!(path = %path.display(), coords = map.coord_count(), "loaded street map");
    Ok(map)
}

/// Like [`load_map`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_map_reader<R: Read>(reader: R) -> Result<StreetMap, MapError> {
    let mut lines = NumberedLines::new(reader);
    let mut builder = StreetMapBuilder::new();
    let mut streets = 0usize;

    while let Some((line_no, name)) = lines.next_non_blank()? {
        let name = name.trim().to_string();

        let (count_line, count_text) = lines
            .next_line()?
            .ok_or_else(|| parse_error(line_no, format!("street {name:?} has no segment count")))?;
        let count: usize = count_text.trim().parse().map_err(|_| {
            parse_error(count_line, format!("expected segment count, found {:?}", count_text.trim()))
        })?;

        for _ in 0..count {
            let (seg_line, text) = lines.next_line()?.ok_or_else(|| {
                parse_error(count_line, format!("street {name:?} ended before {count} segments"))
            })?;
            let (start, end) = parse_segment_line(seg_line, &text)?;
            builder.add_street(start, end, name.as_str());
        }
        streets += 1;
    }

    debug!(streets, segments = builder.segment_count(), "parsed map text");
    Ok(builder.build())
}

fn parse_segment_line(line_no: usize, text: &str) -> Result<(GeoCoord, GeoCoord), MapError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [slat, slon, elat, elon] = fields[..] else {
        return Err(parse_error(
            line_no,
            format!("expected 4 coordinates, found {} fields", fields.len()),
        ));
    };
    let start = GeoCoord::parse(slat, slon).map_err(|e| parse_error(line_no, e.to_string()))?;
    let end = GeoCoord::parse(elat, elon).map_err(|e| parse_error(line_no, e.to_string()))?;
    Ok((start, end))
}

// ── Deliveries ────────────────────────────────────────────────────────────────

/// A depot and the stops to serve from it, in file order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryList {
    pub depot: GeoCoord,
    pub stops: Vec<DeliveryStop>,
}

/// Load a [`DeliveryList`] from a deliveries file.
pub fn load_deliveries(path: &Path) -> Result<DeliveryList, MapError> {
    let file = std::fs::File::open(path)?;
    let list = load_deliveries_reader(file)?;
    info!(path = %path.display(), stops = list.stops.len(), "loaded deliveries");
    Ok(list)
}

/// Like [`load_deliveries`] but accepts any `Read` source.
pub fn load_deliveries_reader<R: Read>(reader: R) -> Result<DeliveryList, MapError> {
    let mut lines = NumberedLines::new(reader);

    let (depot_line, depot_text) = lines
        .next_non_blank()?
        .ok_or_else(|| parse_error(1, "missing depot coordinate".to_string()))?;
    let depot = parse_coord_pair(depot_line, &depot_text)?;

    let mut stops = Vec::new();
    while let Some((line_no, text)) = lines.next_non_blank()? {
        let (coord_text, item) = text
            .split_once(':')
            .ok_or_else(|| parse_error(line_no, "expected `lat lon:item`".to_string()))?;
        let location = parse_coord_pair(line_no, coord_text)?;
        stops.push(DeliveryStop::new(location, item.trim()));
    }

    Ok(DeliveryList { depot, stops })
}

fn parse_coord_pair(line_no: usize, text: &str) -> Result<GeoCoord, MapError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [lat, lon] = fields[..] else {
        return Err(parse_error(
            line_no,
            format!("expected `lat lon`, found {} fields", fields.len()),
        ));
    };
    GeoCoord::parse(lat, lon).map_err(|e| parse_error(line_no, e.to_string()))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_error(line: usize, message: String) -> MapError {
    MapError::Parse { line, message }
}

/// Line reader that remembers 1-based line numbers for error reporting.
struct NumberedLines<R> {
    inner:   BufReader<R>,
    line_no: usize,
}

impl<R: Read> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self { inner: BufReader::new(reader), line_no: 0 }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, MapError> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some((self.line_no, buf)))
    }

    fn next_non_blank(&mut self) -> Result<Option<(usize, String)>, MapError> {
        while let Some((n, line)) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some((n, line)));
            }
        }
        Ok(None)
    }
}
