//! The FHIR R5 catalog.
//!
//! Datatypes live in [`datatypes`]; each resource has its own module. All of
//! them are re-exported here.

mod allergy_intolerance;
mod body_structure;
mod bundle;
mod condition;
mod datatypes;
mod diagnostic_report;
mod encounter;
mod observation;
mod operation_outcome;
mod organization;
mod patient;
mod practitioner;
mod procedure;

pub use allergy_intolerance::*;
pub use body_structure::*;
pub use bundle::*;
pub use condition::*;
pub use datatypes::*;
pub use diagnostic_report::*;
pub use encounter::*;
pub use observation::*;
pub use operation_outcome::*;
pub use organization::*;
pub use patient::*;
pub use practitioner::*;
pub use procedure::*;

use crate::descriptor::Typed;
use crate::element::{FhirValue, Resource};

/// A concrete resource type that can be pulled back out of an [`AnyResource`].
pub trait TypedResource: Resource + FhirValue + Typed + Clone {
    const TYPE: &'static str;

    fn from_any(resource: &AnyResource) -> Option<&Self>;
}

crate::resource_registry! {
    Patient,
    Practitioner,
    Organization,
    Encounter,
    Observation,
    Condition,
    Procedure,
    AllergyIntolerance,
    DiagnosticReport,
    BodyStructure,
    OperationOutcome,
    Bundle,
}
