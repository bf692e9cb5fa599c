//! Reference syntax checks.

use crate::outcome::{ErrorKind, ValidationError};
use crate::plan::ReferencesPlan;
use ferrite_models::reference::is_resource_type;
use ferrite_models::{parse_reference, ReferenceError, ReferenceKind};

/// Checks `reference` with the default policy: known resource types, versioned
/// and contained references accepted.
pub fn validate_reference(field: &str, reference: &str) -> Option<ValidationError> {
    validate_reference_with(field, reference, &ReferencesPlan::default())
}

pub fn validate_reference_with(
    field: &str,
    reference: &str,
    plan: &ReferencesPlan,
) -> Option<ValidationError> {
    check(reference, plan)
        .err()
        .map(|err| ValidationError::new(field, err.to_string(), ErrorKind::Reference))
}

fn check(reference: &str, plan: &ReferencesPlan) -> Result<(), ReferenceError> {
    match parse_reference(reference)? {
        ReferenceKind::Relative {
            resource_type,
            version,
            ..
        } => {
            if plan.require_known_type && !is_resource_type(resource_type) {
                return Err(ReferenceError::UnknownResourceType(resource_type.to_string()));
            }
            if version.is_some() && !plan.allow_versioned {
                return Err(ReferenceError::Versioned(reference.to_string()));
            }
            Ok(())
        }
        ReferenceKind::Contained(_) if !plan.allow_contained => {
            Err(ReferenceError::Contained(reference.to_string()))
        }
        ReferenceKind::Absolute(_) | ReferenceKind::Uuid(_) | ReferenceKind::Contained(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(reference: &str) -> Option<String> {
        validate_reference("Observation.subject.reference", reference).map(|e| e.message)
    }

    #[test]
    fn accepted_forms() {
        for reference in [
            "Patient/123",
            "Patient/123/_history/2",
            "https://example.org/fhir/Patient/123",
            "http://example.org/Observation/bp",
            "urn:uuid:61ebe359-bfdc-4613-8bf2-c5e300945f0a",
            "#med1",
        ] {
            assert_eq!(message(reference), None, "{reference}");
        }
    }

    #[test]
    fn rejected_forms() {
        let cases = [
            ("patient/123", "invalid resource type in reference: patient"),
            ("Patient123", "invalid reference format: Patient123 (expected 'ResourceType/id')"),
            ("", "reference cannot be empty"),
            ("Patients/1", "unknown resource type in reference: Patients"),
            ("urn:uuid:zzz", "invalid urn:uuid reference: urn:uuid:zzz"),
        ];
        for (reference, expected) in cases {
            assert_eq!(message(reference).as_deref(), Some(expected), "{reference}");
        }
    }

    #[test]
    fn error_carries_field_and_kind() {
        let err = validate_reference("Observation.subject.reference", "patient/1").unwrap();
        assert_eq!(err.field, "Observation.subject.reference");
        assert_eq!(err.kind, ErrorKind::Reference);
    }

    #[test]
    fn plan_switches() {
        let strict = ReferencesPlan {
            allow_versioned: false,
            require_known_type: true,
            allow_contained: false,
        };
        assert!(validate_reference_with("f", "Patient/1/_history/3", &strict).is_some());
        assert!(validate_reference_with("f", "#a", &strict).is_some());
        assert!(validate_reference_with("f", "Patient/1", &strict).is_none());

        let lenient = ReferencesPlan {
            require_known_type: false,
            ..ReferencesPlan::default()
        };
        assert!(validate_reference_with("f", "Widget/1", &lenient).is_none());
    }
}
