//! `depot-route`: shortest paths, stop ordering, and turn-by-turn plans.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`router`]      | `PathFinder` (A*), `Path`                                     |
//! | [`optimizer`]   | `StopSequencer` trait, `NearestNeighbor`, `Reordering`        |
//! | [`instruction`] | `Instruction`, `Compass`, `TurnDirection`                     |
//! | [`planner`]     | `RoutePlanner`, `PlannerConfig`, `DeliveryPlan`               |
//! | [`error`]       | `RouteError`, `ConfigError`, `RouteOutcome`, `RouteResult<T>` |
//!
//! # Units
//!
//! Every distance reported by this crate is in statute miles, measured as
//! great-circle length of the street segments travelled.
//!
//! # Concurrency
//!
//! All types borrow a frozen [`StreetMap`](depot_map::StreetMap) and allocate
//! their own search state per call, so one map can serve any number of
//! planners on any number of threads without locking.

pub mod error;
pub mod instruction;
pub mod optimizer;
pub mod planner;
pub mod router;


pub use error::{ConfigError, RouteError, RouteOutcome, RouteResult};
pub use instruction::{Compass, Instruction, TurnDirection};
pub use optimizer::{NearestNeighbor, Reordering, StopSequencer, crow_miles};
pub use planner::{DeliveryPlan, PlannerConfig, RoutePlanner};
pub use router::{Path, PathFinder};
