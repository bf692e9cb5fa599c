//! FHIR R5 data models
//!
//! This crate provides strongly-typed Rust structures for FHIR R5 resources,
//! together with the per-field metadata that drives validation and
//! serialization in the sibling crates.
//!
//! # Module Organization
//!
//! - `r5`: the resource and datatype catalog
//! - `meta`: field annotation grammar (`required`, `cardinality`, `enum`, `summary`)
//! - `descriptor`: parsed per-type metadata and the per-type descriptor slots
//! - `element`: uniform views (`Element`, `Resource`, `Node`) used by generic walkers
//! - `primitives`: FHIR date/time primitives that keep their lexical form
//! - `reference`: the reference string grammar
//!
//! # Example
//!
//! ```rust
//! use ferrite_models::r5::{HumanName, Patient};
//! use ferrite_models::Element;
//!
//! let mut patient = Patient::new("example");
//! patient.name.push(HumanName::new("Chalmers", ["Peter"]));
//!
//! let descriptor = patient.descriptor().unwrap();
//! assert_eq!(descriptor.name, "Patient");
//! assert!(descriptor.field("name").unwrap().is_summary());
//! ```

#[macro_use]
mod macros;

pub mod descriptor;
pub mod element;
pub mod error;
pub mod meta;
pub mod pointer;
pub mod primitives;
pub mod r5;
pub mod reference;

pub use descriptor::{descriptor_for, DescriptorSlot, FieldDescriptor, TypeDescriptor, Typed};
pub use element::{ChoiceValue, Element, FhirValue, FieldValue, Node, Resource};
pub use error::{MetaError, ParseError, ParseErrorKind, TagError};
pub use meta::{Cardinality, FieldMeta};
pub use pointer::JsonPointer;
pub use r5::{AnyResource, TypedResource};
pub use reference::{parse_reference, ReferenceError, ReferenceKind};
