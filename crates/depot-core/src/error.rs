//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced by `depot-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid maximum load factor {0}: must be finite and greater than zero")]
    InvalidLoadFactor(f64),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Shorthand result type for `depot-core`.
pub type CoreResult<T> = Result<T, CoreError>;
