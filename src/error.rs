use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the backing file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid calorie store: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode calorie store: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// A day total that no longer fits in an `i64`.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("adding {calories} calories to a day total of {total} overflows")]
pub struct TotalOverflow {
    pub total: i64,
    pub calories: i64,
}
