pub mod loader;

use polars::prelude::PolarsError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Cannot read price data at {}: {source}", path.display())]
    DataAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Column `{column}` is not numeric: {source}")]
    NonNumericColumn {
        column: String,
        #[source]
        source: PolarsError,
    },
    #[error("Cannot write table to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, DataError>;
