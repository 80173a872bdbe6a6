//! Map-subsystem error type.

use thiserror::Error;

use depot_core::CoreError;

/// Errors produced by `depot-map`.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
