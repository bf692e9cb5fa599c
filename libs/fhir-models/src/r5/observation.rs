use super::{
    Annotation, Attachment, CodeableConcept, Extension, Identifier, Period, Quantity, Range,
    Ratio, Reference,
};
use crate::primitives::{DateTime, Instant, Time};

fhir_resource! {
    /// Measurements and simple assertions.
    pub struct Observation : DomainResource "Observation" {
        /// Business Identifier for observation
        identifier: Vec<Identifier> => "identifier";
        /// Instantiates FHIR ObservationDefinition
        instantiates: Option<ObservationInstantiates> => "instantiates";
        /// Fulfills plan, proposal or order
        based_on: Vec<Reference> => "basedOn";
        /// Triggering observation(s)
        triggered_by: Vec<ObservationTriggeredBy> => "triggeredBy", "summary=false";
        /// Part of referenced event
        part_of: Vec<Reference> => "partOf";
        status: Option<String> => "status", "required,enum=registered|preliminary|final|amended|corrected|cancelled|entered-in-error|unknown";
        /// Classification of  type of observation
        category: Vec<CodeableConcept> => "category", "summary=false";
        /// Type of observation (code / type)
        code: Option<CodeableConcept> => "code", "required";
        /// Who and/or what the observation is about
        subject: Option<Reference> => "subject";
        /// What the observation is about, when it is not about the subject of record
        focus: Vec<Reference> => "focus";
        /// Healthcare event during which this observation is made
        encounter: Option<Reference> => "encounter";
        /// Clinically relevant time/time-period for observation
        effective: Option<ObservationEffective> => "effective";
        /// Date/Time this version was made available
        issued: Option<Instant> => "issued";
        /// Who is responsible for the observation
        performer: Vec<Reference> => "performer";
        /// Actual result
        value: Option<ObservationValue> => "value";
        /// Why the result is missing
        data_absent_reason: Option<CodeableConcept> => "dataAbsentReason", "summary=false";
        /// High, low, normal, etc
        interpretation: Vec<CodeableConcept> => "interpretation", "summary=false";
        /// Comments about the observation
        note: Vec<Annotation> => "note", "summary=false";
        /// Observed body part
        body_site: Option<CodeableConcept> => "bodySite", "summary=false";
        /// Observed body structure
        body_structure: Option<Reference> => "bodyStructure", "summary=false";
        /// How it was done
        method: Option<CodeableConcept> => "method", "summary=false";
        /// Specimen used for this observation
        specimen: Option<Reference> => "specimen", "summary=false";
        /// A reference to the device that generates the measurements or the device settings for the device
        device: Option<Reference> => "device", "summary=false";
        /// Provides guide for interpretation
        reference_range: Vec<ObservationReferenceRange> => "referenceRange", "summary=false";
        /// Related resource that belongs to the Observation group
        has_member: Vec<Reference> => "hasMember";
        /// Related resource from which the observation is made
        derived_from: Vec<Reference> => "derivedFrom";
        /// Component results
        component: Vec<ObservationComponent> => "component";
    }
}

fhir_choice! {
    /// Observation.instantiates[x]
    pub enum ObservationInstantiates {
        Canonical(String) => "Canonical",
        Reference(Reference) => "Reference",
    }
}

fhir_choice! {
    /// Observation.effective[x]
    pub enum ObservationEffective {
        DateTime(DateTime) => "DateTime",
        Period(Period) => "Period",
        Instant(Instant) => "Instant",
    }
}

fhir_choice! {
    /// Observation.value[x] and Observation.component.value[x]
    pub enum ObservationValue {
        Quantity(Quantity) => "Quantity",
        CodeableConcept(CodeableConcept) => "CodeableConcept",
        String(String) => "String",
        Boolean(bool) => "Boolean",
        Integer(i32) => "Integer",
        Range(Range) => "Range",
        Ratio(Ratio) => "Ratio",
        Time(Time) => "Time",
        DateTime(DateTime) => "DateTime",
        Period(Period) => "Period",
        Attachment(Attachment) => "Attachment",
        Reference(Reference) => "Reference",
    }
}

fhir_element! {
    /// Identifies the observation(s) that triggered the performance of this observation.
    pub struct ObservationTriggeredBy : Backbone "ObservationTriggeredBy" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Triggering observation
        observation: Option<Reference> => "observation", "required";
        r#type: Option<String> => "type", "required,enum=reflex|repeat|re-run";
        /// Reason that the observation was triggered
        reason: Option<String> => "reason";
    }
}

fhir_element! {
    /// Guidance on how to interpret the value by comparison to a normal or recommended range.
    pub struct ObservationReferenceRange : Backbone "ObservationReferenceRange" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Low Range, if relevant
        low: Option<Quantity> => "low";
        /// High Range, if relevant
        high: Option<Quantity> => "high";
        /// Normal value, if relevant
        normal_value: Option<CodeableConcept> => "normalValue";
        /// Reference range qualifier
        r#type: Option<CodeableConcept> => "type";
        /// Reference range population
        applies_to: Vec<CodeableConcept> => "appliesTo";
        /// Applicable age range, if relevant
        age: Option<Range> => "age";
        /// Text based reference range in an observation
        text: Option<String> => "text";
    }
}

fhir_element! {
    /// Some observations have multiple component observations.
    pub struct ObservationComponent : Backbone "ObservationComponent" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Type of component observation (code / type)
        code: Option<CodeableConcept> => "code", "required";
        /// Actual component result
        value: Option<ObservationValue> => "value";
        /// Why the component result is missing
        data_absent_reason: Option<CodeableConcept> => "dataAbsentReason", "summary=false";
        /// High, low, normal, etc
        interpretation: Vec<CodeableConcept> => "interpretation", "summary=false";
        /// Provides guide for interpretation of component result value
        reference_range: Vec<ObservationReferenceRange> => "referenceRange", "summary=false";
    }
}
