use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a [`LaunchDataset`](super::model::LaunchDataset).
///
/// Every variant is fatal for the load that produced it: no partial dataset
/// is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON")]
    Json(#[from] serde_json::Error),

    #[error("reading parquet")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("reading arrow batch")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("source has no '{column}' column")]
    MissingColumn { column: &'static str },

    #[error("row {row}: missing field '{column}'")]
    MissingField { row: usize, column: &'static str },

    #[error("row {row}: invalid '{column}' value '{value}'")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("{0}")]
    Malformed(String),

    #[error("source contains no launch records")]
    Empty,
}

/// A site selector that is neither `ALL` nor a site present in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown launch site '{0}'")]
pub struct UnknownSiteError(pub String);
