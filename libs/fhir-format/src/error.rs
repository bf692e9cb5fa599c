use ferrite_models::MetaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    /// Two fields, or a field and a choice variant, map to the same JSON key.
    #[error("duplicate property '{0}' in encoded object")]
    DuplicateProperty(String),

    #[error(transparent)]
    Metadata(#[from] MetaError),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
