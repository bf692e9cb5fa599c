use crate::outcome::ValidationErrors;
use ferrite_models::MetaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failure of [`Validator::validate`](crate::Validator::validate).
#[derive(Debug, Error)]
pub enum Error {
    /// The resource violates one or more constraints.
    #[error("{0}")]
    Invalid(ValidationErrors),

    /// The catalog's own metadata is malformed; validation did not run to completion.
    #[error(transparent)]
    Metadata(#[from] MetaError),
}

impl Error {
    /// The collected violations, if this is a data error.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Invalid(errors) => Some(errors),
            Error::Metadata(_) => None,
        }
    }
}
