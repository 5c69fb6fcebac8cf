//! Error types for wskdeploy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "creating an action from a .zip artifact requires specifying the action kind explicitly"
    )]
    ZipKindRequired,

    #[error("'{0}' is not a supported action runtime")]
    UnsupportedRuntime(String),

    #[error("Java actions require --main to specify the fully-qualified name of the main class")]
    JavaMainRequired,

    /// Carries the rejected web-export mode verbatim.
    #[error("{0}")]
    InvalidWebMode(String),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
