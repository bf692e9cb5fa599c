//! Error types for FHIR models

use crate::pointer::JsonPointer;
use thiserror::Error;

/// A malformed directive in a field annotation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("malformed cardinality '{0}' (expected 'min..max')")]
    MalformedCardinality(String),

    #[error("cardinality minimum {min} exceeds maximum {max}")]
    InvertedCardinality { min: u32, max: u32 },

    #[error("enum directive lists no values")]
    EmptyEnum,

    #[error("malformed summary flag '{0}' (expected 'true' or 'false')")]
    MalformedSummary(String),

    #[error("unknown directive '{0}'")]
    UnknownDirective(String),
}

/// Metadata attached to a record type is malformed.
///
/// This is a programmer fault in the resource catalog, never a data fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid metadata on {type_name}.{field}: {source}")]
pub struct MetaError {
    pub type_name: String,
    pub field: String,
    pub source: TagError,
}

impl MetaError {
    pub fn new(type_name: impl Into<String>, field: impl Into<String>, source: TagError) -> Self {
        Self {
            type_name: type_name.into(),
            field: field.into(),
            source,
        }
    }
}

/// Decoding failure, located by a JSON pointer into the input document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {kind}", .pointer.display_or_root())]
pub struct ParseError {
    pub pointer: JsonPointer,
    pub kind: ParseErrorKind,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("malformed JSON: {0}")]
    Syntax(String),

    #[error("expected a JSON object")]
    ExpectedObject,

    #[error("missing resourceType property")]
    MissingResourceType,

    #[error("unknown resourceType '{0}'")]
    UnknownResourceType(String),

    #[error("expected resourceType '{expected}', found '{found}'")]
    ResourceTypeMismatch { expected: String, found: String },

    #[error("choice '{field}[x]' has conflicting properties '{first}' and '{second}'")]
    ConflictingChoice {
        field: String,
        first: String,
        second: String,
    },

    #[error("expected {expected}")]
    InvalidType { expected: &'static str },

    #[error("invalid {type_name} '{value}': {reason}")]
    InvalidPrimitive {
        type_name: &'static str,
        value: String,
        reason: String,
    },
}

impl ParseError {
    pub fn new(pointer: JsonPointer, kind: ParseErrorKind) -> Self {
        Self { pointer, kind }
    }

    pub fn invalid_type(pointer: &JsonPointer, expected: &'static str) -> Self {
        Self::new(pointer.clone(), ParseErrorKind::InvalidType { expected })
    }

    pub fn invalid_primitive(
        pointer: &JsonPointer,
        type_name: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::new(
            pointer.clone(),
            ParseErrorKind::InvalidPrimitive {
                type_name,
                value: value.into(),
                reason: reason.to_string(),
            },
        )
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(JsonPointer::root(), ParseErrorKind::Syntax(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
