//! Indexed access to the entries of a FHIR R5 Bundle.
//!
//! [`BundleHelper`] owns a [`Bundle`](ferrite_models::r5::Bundle) and answers
//! lookups by `(type, id)`, by `fullUrl`, and by reference string. The index is
//! built on first use and rebuilt after [`BundleHelper::add_entry`]; entry order
//! is never changed.
//!
//! ```rust
//! use ferrite_bundle::BundleHelper;
//! use ferrite_models::r5::{Bundle, BundleType, Patient};
//!
//! let mut helper = BundleHelper::new(Bundle::new(BundleType::Collection));
//! helper
//!     .add_entry(Patient::new("p1"), Some("urn:uuid:0c3151bd-1cbf-4d64-b04d-cd9187a4c6e0"))
//!     .unwrap();
//!
//! assert!(helper.get_resource_by_id("Patient", "p1").is_some());
//! let entry = helper.resolve_reference("Patient/p1").unwrap().unwrap();
//! assert_eq!(entry.full_url.as_deref(), Some("urn:uuid:0c3151bd-1cbf-4d64-b04d-cd9187a4c6e0"));
//! ```

mod contained;
mod error;
mod helper;
mod index;

pub use contained::ContainedIndex;
pub use error::{BundleError, Result};
pub use helper::BundleHelper;
