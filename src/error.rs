//! Error types shared by traversal, grouping and output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Any failure that aborts a listing run.
#[derive(Debug, Error)]
pub enum ListError {
    /// A directory could not be read, or an entry's type could not be determined.
    #[error("cannot access '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not under '{}'", .path.display(), .base.display())]
    Relativize { path: PathBuf, base: PathBuf },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("error serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ListError {
    pub(crate) fn walk(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
