//! FHIR R5 JSON serialization.
//!
//! Encoding walks a resource's type descriptor, so the output order is the
//! declaration order of the catalog with `resourceType` first. Absent fields
//! and empty collections are omitted; choice fields are written as
//! `<name><TypeSuffix>`.
//!
//! ```rust
//! use ferrite_format::{marshal, marshal_summary, unmarshal};
//! use ferrite_models::r5::{ContactPoint, Patient};
//!
//! let mut patient = Patient::new("example");
//! patient.telecom.push(ContactPoint::new("phone", "555-0100"));
//!
//! let full = String::from_utf8(marshal(&patient).unwrap()).unwrap();
//! assert!(full.contains("telecom"));
//!
//! let summary = String::from_utf8(marshal_summary(&patient).unwrap()).unwrap();
//! assert!(!summary.contains("telecom"));
//!
//! let decoded = unmarshal(full.as_bytes()).unwrap();
//! assert_eq!(decoded.id(), Some("example"));
//! ```

mod decode;
mod encode;
mod error;
mod summary;

pub use decode::{from_slice, from_value, unmarshal};
pub use error::{EncodeError, Result};
pub use summary::SummaryMode;

use encode::Encoder;
use ferrite_models::{descriptor_for, MetaError, Resource, Typed};
use serde_json::Value;

/// Encodes every field.
pub fn marshal<R: Resource + ?Sized>(resource: &R) -> Result<Vec<u8>> {
    marshal_with_mode(resource, SummaryMode::Full)
}

pub fn marshal_pretty<R: Resource + ?Sized>(resource: &R) -> Result<Vec<u8>> {
    let value = to_value(resource, SummaryMode::Full)?;
    Ok(serde_json::to_vec_pretty(&value)?)
}

/// Encodes only the fields marked as summary elements.
pub fn marshal_summary<R: Resource + ?Sized>(resource: &R) -> Result<Vec<u8>> {
    marshal_with_mode(resource, SummaryMode::True)
}

pub fn marshal_with_mode<R: Resource + ?Sized>(resource: &R, mode: SummaryMode) -> Result<Vec<u8>> {
    let value = to_value(resource, mode)?;
    Ok(serde_json::to_vec(&value)?)
}

pub fn to_value<R: Resource + ?Sized>(resource: &R, mode: SummaryMode) -> Result<Value> {
    tracing::trace!(
        resource_type = resource.resource_type(),
        mode = %mode,
        "encoding resource"
    );
    Encoder::new(mode).resource(resource).map(Value::Object)
}

/// JSON names of `T`'s summary fields, in declaration order.
pub fn summary_fields<T: Typed>() -> std::result::Result<Vec<&'static str>, MetaError> {
    let descriptor = descriptor_for::<T>()?;
    Ok(descriptor.summary_fields().map(|f| f.json_name).collect())
}
