//! `depot-map`: street graph and text-file loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `StreetMap` (coordinate → outgoing segments), `StreetMapBuilder` |
//! | [`loader`]  | `load_map`, `load_deliveries` and their `Read` variants     |
//! | [`error`]   | `MapError`, `MapResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod loader;
pub mod network;


pub use error::{MapError, MapResult};
pub use loader::{DeliveryList, load_deliveries, load_deliveries_reader, load_map, load_map_reader};
pub use network::{StreetMap, StreetMapBuilder};
