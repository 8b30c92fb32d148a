use std::path::PathBuf;

use thiserror::Error;

/// The dataset resource could not be read. Terminal for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("loader thread terminated before reporting a result")]
    Disconnected,
}

/// The resource parsed but holds no usable rows, so no slider can be built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dataset contains no usable rows")]
pub struct EmptyDatasetError;
