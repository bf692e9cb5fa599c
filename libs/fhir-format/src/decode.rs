//! JSON decoding into catalog values.
//!
//! Unknown properties are ignored. Everything else that does not fit the
//! model is a [`ParseError`] located by JSON pointer.

use ferrite_models::{AnyResource, FhirValue, JsonPointer, ParseError, TypedResource};
use serde_json::Value;

/// Decodes any modeled resource, dispatching on `resourceType`.
pub fn unmarshal(bytes: &[u8]) -> Result<AnyResource, ParseError> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_value(&value)
}

pub fn from_value(value: &Value) -> Result<AnyResource, ParseError> {
    AnyResource::from_json(value, &JsonPointer::root())
}

/// Decodes a resource of a known type; a different `resourceType` is an error.
pub fn from_slice<T: TypedResource>(bytes: &[u8]) -> Result<T, ParseError> {
    let value: Value = serde_json::from_slice(bytes)?;
    T::from_json(&value, &JsonPointer::root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_models::r5::{Observation, Patient};
    use ferrite_models::ParseErrorKind;

    #[test]
    fn syntax_errors_point_at_root() {
        let err = unmarshal(b"{not json").unwrap_err();
        assert!(err.pointer.is_root());
        assert!(matches!(err.kind, ParseErrorKind::Syntax(_)));
    }

    #[test]
    fn non_object_is_rejected() {
        let err = unmarshal(b"[]").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedObject);
    }

    #[test]
    fn missing_resource_type() {
        let err = unmarshal(br#"{"id": "x"}"#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingResourceType);
        assert_eq!(err.pointer.as_str(), "/resourceType");
    }

    #[test]
    fn unknown_resource_type() {
        let err = unmarshal(br#"{"resourceType": "Spaceship"}"#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownResourceType("Spaceship".into()));
    }

    #[test]
    fn unknown_properties_are_ignored() {
        let patient: Patient =
            from_slice(br#"{"resourceType": "Patient", "id": "a", "futureField": 1}"#).unwrap();
        assert_eq!(patient.id.as_deref(), Some("a"));
    }

    #[test]
    fn typed_decode_checks_resource_type() {
        let err = from_slice::<Observation>(br#"{"resourceType": "Patient"}"#).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::ResourceTypeMismatch {
                expected: "Observation".into(),
                found: "Patient".into(),
            }
        );
    }

    #[test]
    fn malformed_primitive_is_located() {
        let err = unmarshal(
            br#"{"resourceType": "Observation", "status": "final", "effectiveDateTime": "2024-02-30"}"#,
        )
        .unwrap_err();
        assert_eq!(err.pointer.as_str(), "/effectiveDateTime");
        assert!(matches!(err.kind, ParseErrorKind::InvalidPrimitive { .. }));
    }

    #[test]
    fn wrong_json_type_is_located() {
        let err = unmarshal(br#"{"resourceType": "Patient", "name": [{"given": "Jane"}]}"#)
            .unwrap_err();
        assert_eq!(err.pointer.as_str(), "/name/0/given");
        assert!(matches!(err.kind, ParseErrorKind::InvalidType { .. }));
    }
}
