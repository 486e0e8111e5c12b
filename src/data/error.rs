use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an upload from reaching the dashboard.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parsed but is not an array of flat objects.
    #[error("unexpected JSON layout: {0}")]
    JsonLayout(String),

    #[error("failed to read parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("failed to decode parquet batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("{name} has no header row")]
    Empty { name: String },

    /// Header lacks one or more of the required columns.
    #[error("missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}
