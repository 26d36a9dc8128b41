use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("no Round1 counterpart on disk: {}", .0.display())]
    MissingPair(PathBuf),
    #[error("{}: {reason}", .path.display())]
    MalformedInput { path: PathBuf, reason: String },
    #[error("{}: {rows} data rows but {maxima} Round1 maxima", .path.display())]
    Alignment {
        path: PathBuf,
        rows: usize,
        maxima: usize,
    },
    #[error("no samples to summarize")]
    EmptyInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
