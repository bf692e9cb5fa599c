//! General-purpose datatypes shared by every resource.

use crate::primitives::{Date, DateTime, Instant, Time};
use rust_decimal::Decimal;

fhir_element! {
    /// Metadata about a resource.
    pub struct Meta : Complex "Meta" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Version specific identifier
        version_id: Option<String> => "versionId";
        /// When the resource version last changed
        last_updated: Option<Instant> => "lastUpdated";
        /// Identifies where the resource comes from
        source: Option<String> => "source";
        /// Profiles this resource claims to conform to
        profile: Vec<String> => "profile";
        /// Security Labels applied to this resource
        security: Vec<Coding> => "security";
        /// Tags applied to this resource
        tag: Vec<Coding> => "tag";
    }
}

fhir_element! {
    /// Human-readable summary of the resource.
    pub struct Narrative : Complex "Narrative" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        status: Option<String> => "status", "required,enum=generated|extensions|additional|empty";
        /// Limited xhtml content
        div: Option<String> => "div", "required";
    }
}

fhir_element! {
    /// Optional extension element, present on every element.
    pub struct Extension : Complex "Extension" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Identifies the meaning of the extension
        url: Option<String> => "url", "required";
        value: Option<ExtensionValue> => "value";
    }
}

fhir_choice! {
    /// Extension.value[x]
    pub enum ExtensionValue {
        Base64Binary(String) => "Base64Binary",
        Boolean(bool) => "Boolean",
        Canonical(String) => "Canonical",
        Code(String) => "Code",
        Date(Date) => "Date",
        DateTime(DateTime) => "DateTime",
        Decimal(Decimal) => "Decimal",
        Id(String) => "Id",
        Instant(Instant) => "Instant",
        Integer(i32) => "Integer",
        Markdown(String) => "Markdown",
        PositiveInt(u32) => "PositiveInt",
        String(String) => "String",
        Time(Time) => "Time",
        UnsignedInt(u32) => "UnsignedInt",
        Uri(String) => "Uri",
        Url(String) => "Url",
        Address(Address) => "Address",
        Annotation(Annotation) => "Annotation",
        Attachment(Attachment) => "Attachment",
        CodeableConcept(CodeableConcept) => "CodeableConcept",
        CodeableReference(CodeableReference) => "CodeableReference",
        Coding(Coding) => "Coding",
        ContactPoint(ContactPoint) => "ContactPoint",
        HumanName(HumanName) => "HumanName",
        Identifier(Identifier) => "Identifier",
        Period(Period) => "Period",
        Quantity(Quantity) => "Quantity",
        Range(Range) => "Range",
        Ratio(Ratio) => "Ratio",
        Reference(Reference) => "Reference",
    }
}

fhir_element! {
    /// A reference to a code defined by a terminology system.
    pub struct Coding : Complex "Coding" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Identity of the terminology system
        system: Option<String> => "system";
        /// Version of the system - if relevant
        version: Option<String> => "version";
        /// Symbol in syntax defined by the system
        code: Option<String> => "code";
        /// Representation defined by the system
        display: Option<String> => "display";
        /// If this coding was chosen directly by the user
        user_selected: Option<bool> => "userSelected";
    }
}

impl Coding {
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

fhir_element! {
    /// Concept - reference to a terminology or just text.
    pub struct CodeableConcept : Complex "CodeableConcept" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Code defined by a terminology system
        coding: Vec<Coding> => "coding";
        /// Plain text representation of the concept
        text: Option<String> => "text";
    }
}

impl CodeableConcept {
    pub fn from_coding(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
            ..Default::default()
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Whether any coding carries `system` and `code`.
    pub fn has_code(&self, system: &str, code: &str) -> bool {
        self.coding
            .iter()
            .any(|c| c.system.as_deref() == Some(system) && c.code.as_deref() == Some(code))
    }
}

fhir_element! {
    /// Reference to a resource or a concept.
    pub struct CodeableReference : Complex "CodeableReference" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Reference to a concept (by class)
        concept: Option<CodeableConcept> => "concept";
        /// Reference to a resource (by instance)
        reference: Option<Reference> => "reference";
    }
}

fhir_element! {
    /// An identifier intended for computation.
    pub struct Identifier : Complex "Identifier" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        r#use: Option<String> => "use", "enum=usual|official|temp|secondary|old";
        /// Description of identifier
        r#type: Option<CodeableConcept> => "type";
        /// The namespace for the identifier value
        system: Option<String> => "system";
        /// The value that is unique
        value: Option<String> => "value";
        /// Time period when id is/was valid for use
        period: Option<Period> => "period";
        /// Organization that issued id (may be just text)
        assigner: Option<Reference> => "assigner";
    }
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

fhir_element! {
    /// A reference from one resource to another.
    pub struct Reference : Complex "Reference" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Literal reference, Relative, internal or absolute URL
        reference: Option<String> => "reference";
        /// Type the reference refers to (e.g. "Patient")
        r#type: Option<String> => "type";
        /// Logical reference, when literal reference is not known
        identifier: Option<Box<Identifier>> => "identifier";
        /// Text alternative for the resource
        display: Option<String> => "display";
    }
}

impl Reference {
    pub fn to(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

fhir_element! {
    /// A measured or measurable amount.
    pub struct Quantity : Complex "Quantity" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Numerical value (with implicit precision)
        value: Option<Decimal> => "value";
        comparator: Option<String> => "comparator", "enum=<|<=|>=|>|ad";
        /// Unit representation
        unit: Option<String> => "unit";
        /// System that defines coded unit form
        system: Option<String> => "system";
        /// Coded form of the unit
        code: Option<String> => "code";
    }
}

impl Quantity {
    pub fn new(value: impl Into<Decimal>, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            unit: Some(unit.into()),
            ..Default::default()
        }
    }

    /// Adds the UCUM coded form of the unit.
    pub fn with_ucum(mut self, code: impl Into<String>) -> Self {
        self.system = Some("http://unitsofmeasure.org".to_string());
        self.code = Some(code.into());
        self
    }
}

fhir_element! {
    /// Time range defined by start and end date/time.
    pub struct Period : Complex "Period" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Starting time with inclusive boundary
        start: Option<DateTime> => "start";
        /// End time with inclusive boundary, if not ongoing
        end: Option<DateTime> => "end";
    }
}

fhir_element! {
    /// Set of values bounded by low and high.
    pub struct Range : Complex "Range" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        low: Option<Quantity> => "low";
        high: Option<Quantity> => "high";
    }
}

fhir_element! {
    /// A ratio of two Quantity values - a numerator and a denominator.
    pub struct Ratio : Complex "Ratio" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        numerator: Option<Quantity> => "numerator";
        denominator: Option<Quantity> => "denominator";
    }
}

fhir_element! {
    /// Name of a human or other living entity - parts and usage.
    pub struct HumanName : Complex "HumanName" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        r#use: Option<String> => "use", "enum=usual|official|temp|nickname|anonymous|old|maiden";
        /// Text representation of the full name
        text: Option<String> => "text";
        /// Family name (often called 'Surname')
        family: Option<String> => "family";
        /// Given names (not always 'first'). Includes middle names
        given: Vec<String> => "given";
        /// Parts that come before the name
        prefix: Vec<String> => "prefix";
        /// Parts that come after the name
        suffix: Vec<String> => "suffix";
        /// Time period when name was/is in use
        period: Option<Period> => "period";
    }
}

impl HumanName {
    pub fn new(family: impl Into<String>, given: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            family: Some(family.into()),
            given: given.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

fhir_element! {
    /// An address expressed using postal conventions.
    pub struct Address : Complex "Address" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        r#use: Option<String> => "use", "enum=home|work|temp|old|billing";
        r#type: Option<String> => "type", "enum=postal|physical|both";
        /// Text representation of the address
        text: Option<String> => "text";
        /// Street name, number, direction & P.O. Box etc.
        line: Vec<String> => "line";
        city: Option<String> => "city";
        /// District name (aka county)
        district: Option<String> => "district";
        /// Sub-unit of country (abbreviations ok)
        state: Option<String> => "state";
        postal_code: Option<String> => "postalCode";
        country: Option<String> => "country";
        period: Option<Period> => "period";
    }
}

fhir_element! {
    /// Details of a technology mediated contact point.
    pub struct ContactPoint : Complex "ContactPoint" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        system: Option<String> => "system", "enum=phone|fax|email|pager|url|sms|other";
        /// The actual contact point details
        value: Option<String> => "value";
        r#use: Option<String> => "use", "enum=home|work|temp|old|mobile";
        /// Specify preferred order of use (1 = highest)
        rank: Option<u32> => "rank";
        period: Option<Period> => "period";
    }
}

impl ContactPoint {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

fhir_element! {
    /// Content in a format defined elsewhere.
    pub struct Attachment : Complex "Attachment" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Mime type of the content, with charset etc.
        content_type: Option<String> => "contentType";
        language: Option<String> => "language";
        /// Data inline, base64ed
        data: Option<String> => "data", "summary=false";
        /// Uri where the data can be found
        url: Option<String> => "url";
        /// Hash of the data (sha-1, base64ed)
        hash: Option<String> => "hash";
        title: Option<String> => "title";
        /// Date attachment was first created
        creation: Option<DateTime> => "creation";
        height: Option<u32> => "height";
        width: Option<u32> => "width";
        frames: Option<u32> => "frames";
        /// Length in seconds (audio / video)
        duration: Option<Decimal> => "duration";
        pages: Option<u32> => "pages";
    }
}

fhir_element! {
    /// Text node with attribution.
    pub struct Annotation : Complex "Annotation" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Individual responsible for the annotation
        author: Option<AnnotationAuthor> => "author";
        /// When the annotation was made
        time: Option<DateTime> => "time";
        /// The annotation - text content (as markdown)
        text: Option<String> => "text", "required";
    }
}

fhir_choice! {
    /// Annotation.author[x]
    pub enum AnnotationAuthor {
        Reference(Reference) => "Reference",
        String(String) => "String",
    }
}

fhir_element! {
    /// A digital signature along with supporting context.
    pub struct Signature : Complex "Signature" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// Indication of the reason the entity signed the object(s)
        r#type: Vec<Coding> => "type";
        /// When the signature was created
        when: Option<Instant> => "when";
        /// Who signed
        who: Option<Reference> => "who";
        /// The party represented
        on_behalf_of: Option<Reference> => "onBehalfOf";
        /// The technical format of the signed resources
        target_format: Option<String> => "targetFormat";
        /// The technical format of the signature
        sig_format: Option<String> => "sigFormat";
        /// The actual signature content (XML DigSig. JWS, picture, etc.)
        data: Option<String> => "data", "summary=false";
    }
}

fhir_element! {
    /// Contact information.
    pub struct ExtendedContactDetail : Complex "ExtendedContactDetail" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension";
        /// The type of contact
        purpose: Option<CodeableConcept> => "purpose";
        /// Name of an individual to contact
        name: Vec<HumanName> => "name";
        /// Contact details (e.g.phone/fax/url)
        telecom: Vec<ContactPoint> => "telecom";
        /// Address for the contact
        address: Option<Address> => "address";
        /// This contact detail is handled/monitored by a specific organization
        organization: Option<Reference> => "organization";
        /// Period that this contact was valid for usage
        period: Option<Period> => "period";
    }
}
