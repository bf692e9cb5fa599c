//! Per-type descriptors and the write-once slots they are published to.
//!
//! Every catalog type carries a static [`TypeSchema`]: its FHIR name and, for
//! each field, the JSON name, the raw annotation string and the value kind.
//! The first time a type is visited its schema is parsed into a
//! [`TypeDescriptor`], which is published to the type's [`DescriptorSlot`] and never mutated.

use crate::error::MetaError;
use crate::meta::{Cardinality, FieldMeta};
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Resource,
    Complex,
    Backbone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    Many,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Primitive,
    Complex,
    Backbone,
    Resource,
    Choice,
}

/// Raw, unparsed description of one field.
#[derive(Debug)]
pub struct FieldSchema {
    pub name: &'static str,
    pub json_name: &'static str,
    pub tag: &'static str,
    pub shape: Shape,
    pub kind: ValueKind,
    /// Type suffixes of a choice field, in declaration order.
    pub choices: &'static [&'static str],
}

/// Raw description of a record type, emitted alongside the type itself.
#[derive(Debug)]
pub struct TypeSchema {
    pub name: &'static str,
    pub kind: TypeKind,
    pub fields: &'static [FieldSchema],
}

/// Implemented by every catalog type.
pub trait Typed: 'static {
    fn schema() -> &'static TypeSchema;

    /// The slot this type's descriptor is published to.
    fn slot() -> &'static DescriptorSlot;
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub json_name: &'static str,
    pub shape: Shape,
    pub kind: ValueKind,
    pub choices: &'static [&'static str],
    pub meta: FieldMeta,
}

impl FieldDescriptor {
    /// Declared bounds, or the default for the field's shape.
    pub fn cardinality(&self) -> Cardinality {
        self.meta.cardinality.unwrap_or(match self.shape {
            Shape::Single => Cardinality::OPTIONAL,
            Shape::Many => Cardinality::REPEATED,
        })
    }

    pub fn is_required(&self) -> bool {
        self.meta.required
    }

    pub fn is_summary(&self) -> bool {
        self.meta.summary
    }

    pub fn is_choice(&self) -> bool {
        self.kind == ValueKind::Choice
    }

    /// Property name on the wire; choice fields append the variant suffix.
    pub fn wire_name(&self, suffix: Option<&str>) -> String {
        match suffix {
            Some(suffix) => format!("{}{}", self.json_name, suffix),
            None => self.json_name.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub kind: TypeKind,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn build(schema: &TypeSchema) -> Result<Self, MetaError> {
        let fields = schema
            .fields
            .iter()
            .map(|field| {
                let meta = FieldMeta::parse(field.tag)
                    .map_err(|source| MetaError::new(schema.name, field.json_name, source))?;
                Ok(FieldDescriptor {
                    name: field.name,
                    json_name: field.json_name,
                    shape: field.shape,
                    kind: field.kind,
                    choices: field.choices,
                    meta,
                })
            })
            .collect::<Result<Vec<_>, MetaError>>()?;

        Ok(Self {
            name: schema.name,
            kind: schema.kind,
            fields,
        })
    }

    pub fn field(&self, json_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.json_name == json_name)
    }

    pub fn summary_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_summary())
    }

    /// `(field, directive)` pairs for every directive the parser did not recognize.
    pub fn unknown_directives(&self) -> impl Iterator<Item = (&FieldDescriptor, &str)> {
        self.fields
            .iter()
            .flat_map(|f| f.meta.unknown.iter().map(move |d| (f, d.as_str())))
    }
}

type Entry = Result<Arc<TypeDescriptor>, MetaError>;

/// Write-once home of one type's descriptor.
///
/// Every catalog type owns a static slot, so the type itself is the key.
/// The first lookup builds and publishes the descriptor (or the metadata
/// error); later lookups are a plain load with no lock.
#[derive(Debug, Default)]
pub struct DescriptorSlot {
    cell: OnceLock<Entry>,
}

impl DescriptorSlot {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_build(&self, schema: &'static TypeSchema) -> Entry {
        self.cell
            .get_or_init(|| {
                let built = TypeDescriptor::build(schema).map(Arc::new);
                match &built {
                    Ok(descriptor) => tracing::debug!(
                        type_name = schema.name,
                        fields = descriptor.fields.len(),
                        "built type descriptor"
                    ),
                    Err(err) => tracing::debug!(
                        type_name = schema.name,
                        error = %err,
                        "type descriptor has malformed metadata"
                    ),
                }
                built
            })
            .clone()
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Descriptor for `T`, built on first use.
pub fn descriptor_for<T: Typed>() -> Result<Arc<TypeDescriptor>, MetaError> {
    T::slot().get_or_build(T::schema())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagError;

    static GOOD: TypeSchema = TypeSchema {
        name: "Sample",
        kind: TypeKind::Complex,
        fields: &[
            FieldSchema {
                name: "status",
                json_name: "status",
                tag: "required,enum=a|b",
                shape: Shape::Single,
                kind: ValueKind::Primitive,
                choices: &[],
            },
            FieldSchema {
                name: "note",
                json_name: "note",
                tag: "summary=false,binding=example",
                shape: Shape::Many,
                kind: ValueKind::Primitive,
                choices: &[],
            },
        ],
    };

    static BAD: TypeSchema = TypeSchema {
        name: "Broken",
        kind: TypeKind::Complex,
        fields: &[FieldSchema {
            name: "items",
            json_name: "items",
            tag: "cardinality=x..y",
            shape: Shape::Many,
            kind: ValueKind::Primitive,
            choices: &[],
        }],
    };

    #[test]
    fn builds_descriptor_in_field_order() {
        let slot = DescriptorSlot::new();
        let desc = slot.get_or_build(&GOOD).unwrap();
        assert_eq!(desc.name, "Sample");
        let names: Vec<_> = desc.fields.iter().map(|f| f.json_name).collect();
        assert_eq!(names, vec!["status", "note"]);
        assert_eq!(desc.fields[1].cardinality(), Cardinality::REPEATED);
        assert_eq!(
            desc.summary_fields().map(|f| f.json_name).collect::<Vec<_>>(),
            vec!["status"]
        );
        let unknown: Vec<_> = desc
            .unknown_directives()
            .map(|(f, d)| (f.json_name, d))
            .collect();
        assert_eq!(unknown, vec![("note", "binding=example")]);
    }

    #[test]
    fn descriptors_are_published_once() {
        let slot = DescriptorSlot::new();
        assert!(!slot.is_built());
        let first = slot.get_or_build(&GOOD).unwrap();
        let second = slot.get_or_build(&GOOD).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(slot.is_built());
    }

    #[test]
    fn malformed_metadata_is_memoized_as_error() {
        let slot = DescriptorSlot::new();
        let err = slot.get_or_build(&BAD).unwrap_err();
        assert_eq!(err.type_name, "Broken");
        assert_eq!(err.field, "items");
        assert!(matches!(err.source, TagError::MalformedCardinality(_)));
        assert!(slot.get_or_build(&BAD).is_err());
    }

    #[test]
    fn choice_wire_names_append_suffix() {
        let field = FieldDescriptor {
            name: "value",
            json_name: "value",
            shape: Shape::Single,
            kind: ValueKind::Choice,
            choices: &["Quantity", "String"],
            meta: FieldMeta::default(),
        };
        assert_eq!(field.wire_name(Some("Quantity")), "valueQuantity");
        assert_eq!(field.wire_name(None), "value");
    }
}
