use std::path::PathBuf;

use thiserror::Error;

use crate::id::FieldIdError;

/// Errors raised by form construction, configuration and event handling.
///
/// Validation failures are not errors: an invalid field carries an error
/// label as display state and the form stays usable.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("duplicate field `{0}`")]
    DuplicateField(String),

    #[error("invalid field id: {0}")]
    InvalidId(#[from] FieldIdError),

    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i64, max: i64 },

    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse form definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid form definition: {0}")]
    InvalidDefinition(String),
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;
