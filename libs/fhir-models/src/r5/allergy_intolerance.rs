use super::{Annotation, CodeableConcept, CodeableReference, Extension, Identifier, Period, Quantity, Range, Reference};
use crate::primitives::DateTime;

fhir_resource! {
    /// Allergy or Intolerance (generally: Risk of adverse reaction to a substance).
    pub struct AllergyIntolerance : DomainResource "AllergyIntolerance" {
        /// External ids for this item
        identifier: Vec<Identifier> => "identifier";
        /// active | inactive | resolved
        clinical_status: Option<CodeableConcept> => "clinicalStatus";
        /// unconfirmed | presumed | confirmed | refuted | entered-in-error
        verification_status: Option<CodeableConcept> => "verificationStatus";
        /// allergy | intolerance - Underlying mechanism (if known)
        r#type: Option<CodeableConcept> => "type";
        category: Vec<String> => "category", "enum=food|medication|environment|biologic";
        criticality: Option<String> => "criticality", "enum=low|high|unable-to-assess";
        /// Code that identifies the allergy or intolerance
        code: Option<CodeableConcept> => "code";
        /// Who the allergy or intolerance is for
        patient: Option<Reference> => "patient", "required";
        /// Encounter when the allergy or intolerance was asserted
        encounter: Option<Reference> => "encounter", "summary=false";
        /// When allergy or intolerance was identified
        onset: Option<AllergyIntoleranceOnset> => "onset", "summary=false";
        /// Date allergy or intolerance was first recorded
        recorded_date: Option<DateTime> => "recordedDate", "summary=false";
        /// Who or what participated in the activities related to the allergy or intolerance and how they were involved
        participant: Vec<AllergyIntoleranceParticipant> => "participant";
        /// Date(/time) of last known occurrence of a reaction
        last_occurrence: Option<DateTime> => "lastOccurrence", "summary=false";
        /// Additional text not captured in other fields
        note: Vec<Annotation> => "note", "summary=false";
        /// Adverse Reaction Events linked to exposure to substance
        reaction: Vec<AllergyIntoleranceReaction> => "reaction", "summary=false";
    }
}

fhir_choice! {
    /// AllergyIntolerance.onset[x]
    pub enum AllergyIntoleranceOnset {
        DateTime(DateTime) => "DateTime",
        Age(Quantity) => "Age",
        Period(Period) => "Period",
        Range(Range) => "Range",
        String(String) => "String",
    }
}

fhir_element! {
    pub struct AllergyIntoleranceParticipant : Backbone "AllergyIntoleranceParticipant" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Type of involvement
        function: Option<CodeableConcept> => "function";
        /// Who or what participated in the activities related to the allergy or intolerance
        actor: Option<Reference> => "actor", "required";
    }
}

fhir_element! {
    pub struct AllergyIntoleranceReaction : Backbone "AllergyIntoleranceReaction" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Specific substance or pharmaceutical product considered to be responsible for event
        substance: Option<CodeableConcept> => "substance";
        /// Clinical symptoms/signs associated with the Event
        manifestation: Vec<CodeableReference> => "manifestation", "cardinality=1..*";
        /// Description of the event as a whole
        description: Option<String> => "description";
        /// Date(/time) when manifestations showed
        onset: Option<DateTime> => "onset";
        severity: Option<String> => "severity", "enum=mild|moderate|severe";
        /// How the subject was exposed to the substance
        exposure_route: Option<CodeableConcept> => "exposureRoute";
        /// Text about event not captured in other fields
        note: Vec<Annotation> => "note";
    }
}
