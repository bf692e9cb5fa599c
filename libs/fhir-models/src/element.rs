//! Uniform views over catalog values.
//!
//! The validator and the encoder never know which record they are visiting.
//! They pair a type's [`TypeDescriptor`] with the [`FieldValue`]s returned by
//! [`Element::fields`], in the same order, and descend through [`Node`]s.

use crate::descriptor::{Shape, TypeDescriptor, ValueKind};
use crate::error::{MetaError, ParseError, ParseErrorKind};
use crate::pointer::JsonPointer;
use crate::primitives::{Date, DateTime, Instant, Time};
use crate::r5::{AnyResource, Meta};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A record type from the catalog: resource, datatype or backbone element.
pub trait Element: fmt::Debug + Send + Sync + 'static {
    fn type_name(&self) -> &'static str;

    fn descriptor(&self) -> Result<Arc<TypeDescriptor>, MetaError>;

    /// Current field values, in descriptor order.
    fn fields(&self) -> Vec<FieldValue<'_>>;
}

/// A top-level record identified by a `resourceType` discriminator.
pub trait Resource: Element {
    fn resource_type(&self) -> &'static str;

    fn id(&self) -> Option<&str>;

    fn meta(&self) -> Option<&Meta>;

    /// Inline resources; empty for resources that cannot contain any.
    fn contained(&self) -> &[AnyResource];

    fn as_element(&self) -> &dyn Element;
}

/// The value currently held by a choice field.
pub trait ChoiceValue: fmt::Debug + Send + Sync {
    /// Type suffix appended to the logical name on the wire.
    fn suffix(&self) -> &'static str;

    fn value(&self) -> Node<'_>;
}

#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    Single(Option<Node<'a>>),
    Many(Vec<Node<'a>>),
}

impl<'a> FieldValue<'a> {
    pub fn of<S: Slot>(slot: &'a S) -> Self {
        slot.view()
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Single(node) => usize::from(node.is_some()),
            Self::Many(nodes) => nodes.len(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Single(None))
    }

    pub fn nodes(&self) -> &[Node<'a>] {
        match self {
            Self::Single(Some(node)) => std::slice::from_ref(node),
            Self::Single(None) => &[],
            Self::Many(nodes) => nodes,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Boolean(bool),
    Integer(i64),
    Decimal(&'a Decimal),
    String(&'a str),
    Date(&'a Date),
    DateTime(&'a DateTime),
    Instant(&'a Instant),
    Time(&'a Time),
    Element(&'a dyn Element),
    Resource(&'a dyn Resource),
    Choice(&'a dyn ChoiceValue),
}

impl<'a> Node<'a> {
    /// Textual form of a primitive, as compared against enum literals.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Node::Boolean(b) => Some(b.to_string()),
            Node::Integer(i) => Some(i.to_string()),
            Node::Decimal(d) => Some(d.to_string()),
            Node::String(s) => Some((*s).to_string()),
            Node::Date(d) => Some(d.to_string()),
            Node::DateTime(d) => Some(d.to_string()),
            Node::Instant(i) => Some(i.to_string()),
            Node::Time(t) => Some(t.to_string()),
            Node::Element(_) | Node::Resource(_) | Node::Choice(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Node::String(s) => Some(*s),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.as_text().is_some()
    }
}

/// A value type that can occupy a field.
pub trait FhirValue: Sized {
    const KIND: ValueKind;
    const CHOICES: &'static [&'static str] = &[];

    fn node(&self) -> Node<'_>;

    fn from_json(value: &Value, at: &JsonPointer) -> Result<Self, ParseError>;

    /// Reads a singular field `name` out of its parent object.
    fn read_single(
        object: &Map<String, Value>,
        name: &str,
        at: &JsonPointer,
    ) -> Result<Option<Self>, ParseError> {
        match object.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Self::from_json(value, &at.child(name)).map(Some),
        }
    }
}

/// Builds a record from the members of its JSON object.
#[doc(hidden)]
pub trait ReadFields: Sized {
    fn read_fields(object: &Map<String, Value>, at: &JsonPointer) -> Result<Self, ParseError>;
}

/// Storage of a field: `Option<T>` for singular fields, `Vec<T>` for collections.
pub trait Slot: Default {
    const SHAPE: Shape;
    const KIND: ValueKind;
    const CHOICES: &'static [&'static str];

    fn view(&self) -> FieldValue<'_>;

    fn read(object: &Map<String, Value>, name: &str, at: &JsonPointer) -> Result<Self, ParseError>;
}

impl<T: FhirValue> Slot for Option<T> {
    const SHAPE: Shape = Shape::Single;
    const KIND: ValueKind = T::KIND;
    const CHOICES: &'static [&'static str] = T::CHOICES;

    fn view(&self) -> FieldValue<'_> {
        FieldValue::Single(self.as_ref().map(FhirValue::node))
    }

    fn read(object: &Map<String, Value>, name: &str, at: &JsonPointer) -> Result<Self, ParseError> {
        T::read_single(object, name, at)
    }
}

impl<T: FhirValue> Slot for Vec<T> {
    const SHAPE: Shape = Shape::Many;
    const KIND: ValueKind = T::KIND;
    const CHOICES: &'static [&'static str] = T::CHOICES;

    fn view(&self) -> FieldValue<'_> {
        FieldValue::Many(self.iter().map(FhirValue::node).collect())
    }

    fn read(object: &Map<String, Value>, name: &str, at: &JsonPointer) -> Result<Self, ParseError> {
        match object.get(name) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => {
                let at = at.child(name);
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| T::from_json(item, &at.index(i)))
                    .collect()
            }
            Some(_) => Err(ParseError::invalid_type(&at.child(name), "an array")),
        }
    }
}

impl<T: FhirValue> FhirValue for Box<T> {
    const KIND: ValueKind = T::KIND;
    const CHOICES: &'static [&'static str] = T::CHOICES;

    fn node(&self) -> Node<'_> {
        (**self).node()
    }

    fn from_json(value: &Value, at: &JsonPointer) -> Result<Self, ParseError> {
        T::from_json(value, at).map(Box::new)
    }

    fn read_single(
        object: &Map<String, Value>,
        name: &str,
        at: &JsonPointer,
    ) -> Result<Option<Self>, ParseError> {
        T::read_single(object, name, at).map(|v| v.map(Box::new))
    }
}

// ============================================================================
// Primitives
// ============================================================================

impl FhirValue for String {
    const KIND: ValueKind = ValueKind::Primitive;

    fn node(&self) -> Node<'_> {
        Node::String(self)
    }

    fn from_json(value: &Value, at: &JsonPointer) -> Result<Self, ParseError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ParseError::invalid_type(at, "a string"))
    }
}

impl FhirValue for bool {
    const KIND: ValueKind = ValueKind::Primitive;

    fn node(&self) -> Node<'_> {
        Node::Boolean(*self)
    }

    fn from_json(value: &Value, at: &JsonPointer) -> Result<Self, ParseError> {
        value
            .as_bool()
            .ok_or_else(|| ParseError::invalid_type(at, "a boolean"))
    }
}

impl FhirValue for i32 {
    const KIND: ValueKind = ValueKind::Primitive;

    fn node(&self) -> Node<'_> {
        Node::Integer(i64::from(*self))
    }

    fn from_json(value: &Value, at: &JsonPointer) -> Result<Self, ParseError> {
        let n = value
            .as_i64()
            .ok_or_else(|| ParseError::invalid_type(at, "an integer"))?;
        i32::try_from(n).map_err(|e| ParseError::invalid_primitive(at, "integer", n.to_string(), e))
    }
}

impl FhirValue for u32 {
    const KIND: ValueKind = ValueKind::Primitive;

    fn node(&self) -> Node<'_> {
        Node::Integer(i64::from(*self))
    }

    fn from_json(value: &Value, at: &JsonPointer) -> Result<Self, ParseError> {
        let n = value
            .as_i64()
            .ok_or_else(|| ParseError::invalid_type(at, "an integer"))?;
        u32::try_from(n)
            .map_err(|e| ParseError::invalid_primitive(at, "unsignedInt", n.to_string(), e))
    }
}

impl FhirValue for Decimal {
    const KIND: ValueKind = ValueKind::Primitive;

    fn node(&self) -> Node<'_> {
        Node::Decimal(self)
    }

    fn from_json(value: &Value, at: &JsonPointer) -> Result<Self, ParseError> {
        let Value::Number(number) = value else {
            return Err(ParseError::invalid_type(at, "a number"));
        };
        // Number keeps the source digits, so the scale survives.
        let text = number.to_string();
        let parsed = if text.contains(['e', 'E']) {
            Decimal::from_scientific(&text)
        } else {
            Decimal::from_str(&text)
        };
        parsed.map_err(|e| ParseError::invalid_primitive(at, "decimal", text, e))
    }
}

macro_rules! temporal_value {
    ($ty:ident, $variant:ident) => {
        impl FhirValue for $ty {
            const KIND: ValueKind = ValueKind::Primitive;

            fn node(&self) -> Node<'_> {
                Node::$variant(self)
            }

            fn from_json(value: &Value, at: &JsonPointer) -> Result<Self, ParseError> {
                let text = value
                    .as_str()
                    .ok_or_else(|| ParseError::invalid_type(at, "a string"))?;
                text.parse::<$ty>().map_err(|e| {
                    ParseError::new(
                        at.clone(),
                        ParseErrorKind::InvalidPrimitive {
                            type_name: e.type_name,
                            value: e.value,
                            reason: e.reason.to_string(),
                        },
                    )
                })
            }
        }
    };
}

temporal_value!(Date, Date);
temporal_value!(DateTime, DateTime);
temporal_value!(Instant, Instant);
temporal_value!(Time, Time);

// ============================================================================
// Helpers used by generated code
// ============================================================================

pub fn expect_object<'v>(
    value: &'v Value,
    at: &JsonPointer,
) -> Result<&'v Map<String, Value>, ParseError> {
    value
        .as_object()
        .ok_or_else(|| ParseError::new(at.clone(), ParseErrorKind::ExpectedObject))
}

/// Checks the `resourceType` discriminator of a resource object.
pub fn expect_resource_type(
    object: &Map<String, Value>,
    expected: &str,
    at: &JsonPointer,
) -> Result<(), ParseError> {
    match object.get("resourceType").and_then(Value::as_str) {
        None => Err(ParseError::new(
            at.child("resourceType"),
            ParseErrorKind::MissingResourceType,
        )),
        Some(found) if found != expected => Err(ParseError::new(
            at.child("resourceType"),
            ParseErrorKind::ResourceTypeMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            },
        )),
        Some(_) => Ok(()),
    }
}
