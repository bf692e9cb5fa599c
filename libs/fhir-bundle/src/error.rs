use ferrite_models::ReferenceError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BundleError {
    #[error("duplicate fullUrl in bundle: {0}")]
    DuplicateFullUrl(String),

    #[error("cannot resolve reference '{reference}': {source}")]
    MalformedReference {
        reference: String,
        source: ReferenceError,
    },
}

pub type Result<T> = std::result::Result<T, BundleError>;
