// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a sensor log or deriving data from it.
///
/// Rendering keeps `Box<dyn Error>` like the rest of the plotting code; this enum
/// covers the load and compute steps where callers need to tell failures apart.
#[derive(Debug, Error)]
pub enum SensorLogError {
    #[error("File '{}' not found.", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' holds non-numeric value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type SensorLogResult<T> = Result<T, SensorLogError>;
