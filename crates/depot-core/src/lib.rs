//! `depot-core`: foundational types for the `depot` delivery routing workspace.
//!
//! This crate is a dependency of every other `depot-*` crate.  It has no
//! `depot-*` dependencies and only small external ones (`rustc-hash`,
//! `thiserror`, `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `GeoCoord`, haversine and raw-degree distances          |
//! | [`segment`]   | `StreetSegment`, bearing, `angle_between`               |
//! | [`stop`]      | `DeliveryStop`                                          |
//! | [`table`]     | `KeyedTable`, the chained hash table behind the map     |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod error;
pub mod geo;
pub mod segment;
pub mod stop;
pub mod table;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoCoord;
pub use segment::{StreetSegment, angle_between};
pub use stop::DeliveryStop;
pub use table::KeyedTable;
