//! Declarative macros that define the catalog.
//!
//! Each record is declared once, with one line per field:
//!
//! ```text
//! name: Vec<HumanName> => "name", "cardinality=0..*";
//! ```
//!
//! The macro emits the struct, its static [`TypeSchema`](crate::descriptor::TypeSchema),
//! the [`Element`](crate::element::Element) field views and the JSON reader.

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_tag {
    () => {
        ""
    };
    ($tag:literal) => {
        $tag
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_struct {
    (
        [$kind:ident]
        $(#[doc = $doc:literal])*
        pub struct $name:ident $fhir:literal {
            $(
                $(#[doc = $fdoc:literal])*
                $field:ident : $ty:ty => $json:literal $(, $tag:literal)? ;
            )*
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[doc = $fdoc])*
                pub $field: $ty,
            )*
        }

        impl $crate::descriptor::Typed for $name {
            fn schema() -> &'static $crate::descriptor::TypeSchema {
                static SCHEMA: $crate::descriptor::TypeSchema = $crate::descriptor::TypeSchema {
                    name: $fhir,
                    kind: $crate::descriptor::TypeKind::$kind,
                    fields: &[$(
                        $crate::descriptor::FieldSchema {
                            name: stringify!($field),
                            json_name: $json,
                            tag: $crate::__fhir_tag!($($tag)?),
                            shape: <$ty as $crate::element::Slot>::SHAPE,
                            kind: <$ty as $crate::element::Slot>::KIND,
                            choices: <$ty as $crate::element::Slot>::CHOICES,
                        },
                    )*],
                };
                &SCHEMA
            }

            fn slot() -> &'static $crate::descriptor::DescriptorSlot {
                static SLOT: $crate::descriptor::DescriptorSlot =
                    $crate::descriptor::DescriptorSlot::new();
                &SLOT
            }
        }

        impl $crate::element::Element for $name {
            fn type_name(&self) -> &'static str {
                $fhir
            }

            fn descriptor(
                &self,
            ) -> ::std::result::Result<
                ::std::sync::Arc<$crate::descriptor::TypeDescriptor>,
                $crate::error::MetaError,
            > {
                $crate::descriptor::descriptor_for::<Self>()
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::element::FieldValue<'_>> {
                ::std::vec![$(<$ty as $crate::element::Slot>::view(&self.$field),)*]
            }
        }

        impl $crate::element::ReadFields for $name {
            #[allow(unused_variables)]
            fn read_fields(
                object: &::serde_json::Map<::std::string::String, ::serde_json::Value>,
                at: &$crate::pointer::JsonPointer,
            ) -> ::std::result::Result<Self, $crate::error::ParseError> {
                ::std::result::Result::Ok(Self {
                    $($field: <$ty as $crate::element::Slot>::read(object, $json, at)?,)*
                })
            }
        }
    };
}

/// Defines a datatype (`Complex`) or a backbone element (`Backbone`).
#[macro_export]
macro_rules! fhir_element {
    (
        $(#[doc = $doc:literal])*
        pub struct $name:ident : $kind:ident $fhir:literal { $($body:tt)* }
    ) => {
        $crate::__fhir_struct! {
            [$kind]
            $(#[doc = $doc])*
            pub struct $name $fhir { $($body)* }
        }

        impl $crate::element::FhirValue for $name {
            const KIND: $crate::descriptor::ValueKind = $crate::descriptor::ValueKind::$kind;

            fn node(&self) -> $crate::element::Node<'_> {
                $crate::element::Node::Element(self)
            }

            fn from_json(
                value: &::serde_json::Value,
                at: &$crate::pointer::JsonPointer,
            ) -> ::std::result::Result<Self, $crate::error::ParseError> {
                let object = $crate::element::expect_object(value, at)?;
                <Self as $crate::element::ReadFields>::read_fields(object, at)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_resource_impls {
    ($name:ident $fhir:literal) => {
        impl $crate::element::FhirValue for $name {
            const KIND: $crate::descriptor::ValueKind = $crate::descriptor::ValueKind::Resource;

            fn node(&self) -> $crate::element::Node<'_> {
                $crate::element::Node::Resource(self)
            }

            fn from_json(
                value: &::serde_json::Value,
                at: &$crate::pointer::JsonPointer,
            ) -> ::std::result::Result<Self, $crate::error::ParseError> {
                let object = $crate::element::expect_object(value, at)?;
                $crate::element::expect_resource_type(object, $fhir, at)?;
                <Self as $crate::element::ReadFields>::read_fields(object, at)
            }
        }
    };
}

/// Defines a resource. `DomainResource` adds `text`, `contained` and the
/// extension lists to the base `Resource` fields.
#[macro_export]
macro_rules! fhir_resource {
    (
        $(#[doc = $doc:literal])*
        pub struct $name:ident : DomainResource $fhir:literal { $($body:tt)* }
    ) => {
        $crate::__fhir_struct! {
            [Resource]
            $(#[doc = $doc])*
            pub struct $name $fhir {
                /// Logical id of this artifact
                id: Option<String> => "id";
                /// Metadata about the resource
                meta: Option<$crate::r5::Meta> => "meta";
                /// A set of rules under which this content was created
                implicit_rules: Option<String> => "implicitRules";
                /// Language of the resource content
                language: Option<String> => "language", "summary=false";
                /// Text summary of the resource, for human interpretation
                text: Option<$crate::r5::Narrative> => "text", "summary=false";
                /// Contained, inline Resources
                contained: Vec<$crate::r5::AnyResource> => "contained", "summary=false";
                /// Additional content defined by implementations
                extension: Vec<$crate::r5::Extension> => "extension", "summary=false";
                /// Extensions that cannot be ignored
                modifier_extension: Vec<$crate::r5::Extension> => "modifierExtension", "summary=false";
                $($body)*
            }
        }

        $crate::__fhir_resource_impls!($name $fhir);

        impl $crate::element::Resource for $name {
            fn resource_type(&self) -> &'static str {
                $fhir
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn meta(&self) -> Option<&$crate::r5::Meta> {
                self.meta.as_ref()
            }

            fn contained(&self) -> &[$crate::r5::AnyResource] {
                &self.contained
            }

            fn as_element(&self) -> &dyn $crate::element::Element {
                self
            }
        }
    };
    (
        $(#[doc = $doc:literal])*
        pub struct $name:ident : Resource $fhir:literal { $($body:tt)* }
    ) => {
        $crate::__fhir_struct! {
            [Resource]
            $(#[doc = $doc])*
            pub struct $name $fhir {
                /// Logical id of this artifact
                id: Option<String> => "id";
                /// Metadata about the resource
                meta: Option<$crate::r5::Meta> => "meta";
                /// A set of rules under which this content was created
                implicit_rules: Option<String> => "implicitRules";
                /// Language of the resource content
                language: Option<String> => "language", "summary=false";
                $($body)*
            }
        }

        $crate::__fhir_resource_impls!($name $fhir);

        impl $crate::element::Resource for $name {
            fn resource_type(&self) -> &'static str {
                $fhir
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn meta(&self) -> Option<&$crate::r5::Meta> {
                self.meta.as_ref()
            }

            fn contained(&self) -> &[$crate::r5::AnyResource] {
                &[]
            }

            fn as_element(&self) -> &dyn $crate::element::Element {
                self
            }
        }
    };
}

/// Defines the value of a polymorphic `name[x]` field: one arm per permitted
/// type, each with the suffix it carries on the wire.
#[macro_export]
macro_rules! fhir_choice {
    (
        $(#[doc = $doc:literal])*
        pub enum $name:ident {
            $($arm:ident($ty:ty) => $suffix:literal,)+
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $($arm($ty),)+
        }

        impl $crate::element::ChoiceValue for $name {
            fn suffix(&self) -> &'static str {
                match self {
                    $(Self::$arm(_) => $suffix,)+
                }
            }

            fn value(&self) -> $crate::element::Node<'_> {
                match self {
                    $(Self::$arm(v) => <$ty as $crate::element::FhirValue>::node(v),)+
                }
            }
        }

        impl $crate::element::FhirValue for $name {
            const KIND: $crate::descriptor::ValueKind = $crate::descriptor::ValueKind::Choice;
            const CHOICES: &'static [&'static str] = &[$($suffix),+];

            fn node(&self) -> $crate::element::Node<'_> {
                $crate::element::Node::Choice(self)
            }

            fn from_json(
                _value: &::serde_json::Value,
                at: &$crate::pointer::JsonPointer,
            ) -> ::std::result::Result<Self, $crate::error::ParseError> {
                ::std::result::Result::Err($crate::error::ParseError::invalid_type(
                    at,
                    "a type-suffixed choice property",
                ))
            }

            fn read_single(
                object: &::serde_json::Map<::std::string::String, ::serde_json::Value>,
                name: &str,
                at: &$crate::pointer::JsonPointer,
            ) -> ::std::result::Result<::std::option::Option<Self>, $crate::error::ParseError> {
                let mut found: ::std::option::Option<(::std::string::String, Self)> = None;
                $(
                    let key = ::std::format!("{}{}", name, $suffix);
                    if let Some(value) = object.get(&key).filter(|v| !v.is_null()) {
                        if let Some((first, _)) = &found {
                            return Err($crate::error::ParseError::new(
                                at.child(&key),
                                $crate::error::ParseErrorKind::ConflictingChoice {
                                    field: name.to_string(),
                                    first: first.clone(),
                                    second: key,
                                },
                            ));
                        }
                        let parsed = <$ty as $crate::element::FhirValue>::from_json(value, &at.child(&key))?;
                        found = Some((key, Self::$arm(parsed)));
                    }
                )+
                Ok(found.map(|(_, value)| value))
            }
        }
    };
}

/// Declares the set of resources that can appear where any resource is
/// allowed (`contained`, `Bundle.entry.resource`) and wires decode dispatch
/// on `resourceType`.
#[macro_export]
macro_rules! resource_registry {
    ($($name:ident),+ $(,)?) => {
        /// A resource of any modeled type.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyResource {
            $($name(Box<$name>),)+
        }

        impl AnyResource {
            /// Resource types this catalog models.
            pub const MODELED: &'static [&'static str] = &[$(stringify!($name)),+];

            pub fn as_resource(&self) -> &dyn $crate::element::Resource {
                match self {
                    $(Self::$name(r) => r.as_ref(),)+
                }
            }

            pub fn resource_type(&self) -> &'static str {
                self.as_resource().resource_type()
            }

            pub fn id(&self) -> Option<&str> {
                self.as_resource().id()
            }

            pub fn meta(&self) -> Option<&$crate::r5::Meta> {
                self.as_resource().meta()
            }

            pub fn is_modeled(resource_type: &str) -> bool {
                Self::MODELED.contains(&resource_type)
            }

            pub fn downcast_ref<T: $crate::r5::TypedResource>(&self) -> Option<&T> {
                T::from_any(self)
            }
        }

        impl $crate::element::Element for AnyResource {
            fn type_name(&self) -> &'static str {
                self.as_resource().type_name()
            }

            fn descriptor(
                &self,
            ) -> ::std::result::Result<
                ::std::sync::Arc<$crate::descriptor::TypeDescriptor>,
                $crate::error::MetaError,
            > {
                self.as_resource().descriptor()
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::element::FieldValue<'_>> {
                self.as_resource().fields()
            }
        }

        impl $crate::element::Resource for AnyResource {
            fn resource_type(&self) -> &'static str {
                self.as_resource().resource_type()
            }

            fn id(&self) -> Option<&str> {
                self.as_resource().id()
            }

            fn meta(&self) -> Option<&$crate::r5::Meta> {
                self.as_resource().meta()
            }

            fn contained(&self) -> &[AnyResource] {
                self.as_resource().contained()
            }

            fn as_element(&self) -> &dyn $crate::element::Element {
                self.as_resource().as_element()
            }
        }

        impl $crate::element::FhirValue for AnyResource {
            const KIND: $crate::descriptor::ValueKind = $crate::descriptor::ValueKind::Resource;

            fn node(&self) -> $crate::element::Node<'_> {
                $crate::element::Node::Resource(self.as_resource())
            }

            fn from_json(
                value: &::serde_json::Value,
                at: &$crate::pointer::JsonPointer,
            ) -> ::std::result::Result<Self, $crate::error::ParseError> {
                use $crate::element::ReadFields;
                use $crate::error::{ParseError, ParseErrorKind};

                let object = $crate::element::expect_object(value, at)?;
                let resource_type = object
                    .get("resourceType")
                    .and_then(::serde_json::Value::as_str)
                    .ok_or_else(|| {
                        ParseError::new(at.child("resourceType"), ParseErrorKind::MissingResourceType)
                    })?;
                match resource_type {
                    $(stringify!($name) => {
                        $name::read_fields(object, at).map(|r| Self::$name(Box::new(r)))
                    })+
                    other => Err(ParseError::new(
                        at.child("resourceType"),
                        ParseErrorKind::UnknownResourceType(other.to_string()),
                    )),
                }
            }
        }

        $(
            impl From<$name> for AnyResource {
                fn from(resource: $name) -> Self {
                    Self::$name(Box::new(resource))
                }
            }

            impl $crate::r5::TypedResource for $name {
                const TYPE: &'static str = stringify!($name);

                fn from_any(resource: &AnyResource) -> Option<&Self> {
                    match resource {
                        AnyResource::$name(inner) => Some(inner.as_ref()),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )+
    };
}
