//! Required, cardinality and enumeration checks.

use crate::outcome::{ErrorKind, ValidationError};
use ferrite_models::{FieldValue, Node};

const MISSING: &str = "required field is missing";
const EMPTY: &str = "required field cannot be empty";

/// Fails when `value` is absent, an empty string, or an empty collection.
pub fn validate_required(field: &str, value: &FieldValue<'_>) -> Option<ValidationError> {
    let message = match value {
        FieldValue::Single(None) => MISSING,
        FieldValue::Single(Some(Node::String(""))) => EMPTY,
        FieldValue::Many(nodes) if nodes.is_empty() => EMPTY,
        _ => return None,
    };
    Some(ValidationError::new(field, message, ErrorKind::Required))
}

/// Checks `min <= count <= max`; `max == None` is unbounded.
pub fn validate_cardinality(
    field: &str,
    count: usize,
    min: u32,
    max: Option<u32>,
) -> Option<ValidationError> {
    if count < min as usize {
        return Some(if min == 1 {
            ValidationError::new(field, MISSING, ErrorKind::Required)
        } else {
            ValidationError::new(
                field,
                format!("requires at least {min} element(s), got {count}"),
                ErrorKind::Cardinality,
            )
        });
    }

    match max {
        Some(max) if count > max as usize => Some(ValidationError::new(
            field,
            format!("requires at most {max} element(s), got {count}"),
            ErrorKind::Cardinality,
        )),
        _ => None,
    }
}

/// Case-sensitive membership test. An empty value or an empty set always passes.
pub fn validate_enum<S: AsRef<str>>(
    field: &str,
    value: &str,
    allowed: &[S],
) -> Option<ValidationError> {
    if value.is_empty() || allowed.is_empty() || allowed.iter().any(|a| a.as_ref() == value) {
        return None;
    }

    let choices: Vec<&str> = allowed.iter().map(AsRef::as_ref).collect();
    Some(ValidationError::new(
        field,
        format!(
            "invalid enum value '{value}', must be one of: {}",
            choices.join("|")
        ),
        ErrorKind::Enum,
    ))
}
