//! Packaging errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackagerError {
    #[error("unable to read '{path}': {source}")]
    ContentRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Resolve(#[from] wskdeploy_core::Error),
}

pub type PackagerResult<T> = std::result::Result<T, PackagerError>;
