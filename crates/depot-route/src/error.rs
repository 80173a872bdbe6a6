//! Routing and planner-configuration error types, and outcome tags.

use std::fmt;

use thiserror::Error;

use depot_core::GeoCoord;

/// Errors produced by `depot-route`.
///
/// Both variants are final: search is deterministic, so retrying the same
/// query cannot succeed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RouteError {
    /// No street segment starts at this coordinate.
    #[error("no road leaves {0}")]
    UnknownCoordinate(GeoCoord),

    /// The search exhausted every reachable coordinate without reaching `to`.
    #[error("no path from {from} to {to}")]
    NoPath { from: GeoCoord, to: GeoCoord },
}

impl RouteError {
    pub fn outcome(&self) -> RouteOutcome {
        match self {
            RouteError::UnknownCoordinate(_) => RouteOutcome::UnknownCoordinate,
            RouteError::NoPath { .. } => RouteOutcome::NoPath,
        }
    }
}

pub type RouteResult<T> = Result<T, RouteError>;

/// Rejected [`PlannerConfig`](crate::PlannerConfig) settings.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid straight tolerance {0}: must be strictly between 0 and 180 degrees")]
    InvalidTolerance(f64),
}

/// Flat result tag for callers that only need to know how a query ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteOutcome {
    Success,
    UnknownCoordinate,
    NoPath,
}

impl RouteOutcome {
    pub fn of<T>(result: &RouteResult<T>) -> Self {
        match result {
            Ok(_) => RouteOutcome::Success,
            Err(e) => e.outcome(),
        }
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RouteOutcome::Success => "success",
            RouteOutcome::UnknownCoordinate => "unknown coordinate",
            RouteOutcome::NoPath => "no path",
        })
    }
}
