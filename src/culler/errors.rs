use crate::extractor::DocumentError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CullError {
    #[error("failed to list {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    /// Removal was attempted for every excluded document; `failed` of them
    /// could not be deleted and `path` is the first of those.
    #[error("failed to remove {path} ({failed} removal(s) failed): {source}")]
    Remove {
        path: PathBuf,
        failed: usize,
        #[source]
        source: std::io::Error,
    },
}
