use super::{Annotation, CodeableConcept, CodeableReference, Extension, Identifier, Period, Quantity, Range, Reference};
use crate::primitives::DateTime;

fhir_resource! {
    /// Detailed information about conditions, problems or diagnoses.
    pub struct Condition : DomainResource "Condition" {
        /// External Ids for this condition
        identifier: Vec<Identifier> => "identifier";
        /// active | recurrence | relapse | inactive | remission | resolved | unknown
        clinical_status: Option<CodeableConcept> => "clinicalStatus", "required";
        /// unconfirmed | provisional | differential | confirmed | refuted | entered-in-error
        verification_status: Option<CodeableConcept> => "verificationStatus";
        /// problem-list-item | encounter-diagnosis
        category: Vec<CodeableConcept> => "category", "summary=false";
        /// Subjective severity of condition
        severity: Option<CodeableConcept> => "severity", "summary=false";
        /// Identification of the condition, problem or diagnosis
        code: Option<CodeableConcept> => "code";
        /// Anatomical location, if relevant
        body_site: Vec<CodeableConcept> => "bodySite";
        /// Who has the condition?
        subject: Option<Reference> => "subject", "required";
        /// The Encounter during which this Condition was created
        encounter: Option<Reference> => "encounter";
        /// Estimated or actual date,  date-time, or age
        onset: Option<ConditionOnset> => "onset";
        /// When in resolution/remission
        abatement: Option<ConditionAbatement> => "abatement";
        /// Date condition was first recorded
        recorded_date: Option<DateTime> => "recordedDate";
        /// Who or what participated in the activities related to the condition and how they were involved
        participant: Vec<ConditionParticipant> => "participant", "summary=false";
        /// Stage/grade, usually assessed formally
        stage: Vec<ConditionStage> => "stage";
        /// Supporting evidence for the verification status
        evidence: Vec<CodeableReference> => "evidence";
        /// Additional information about the Condition
        note: Vec<Annotation> => "note", "summary=false";
    }
}

fhir_choice! {
    /// Condition.onset[x]
    pub enum ConditionOnset {
        DateTime(DateTime) => "DateTime",
        Age(Quantity) => "Age",
        Period(Period) => "Period",
        Range(Range) => "Range",
        String(String) => "String",
    }
}

fhir_choice! {
    /// Condition.abatement[x]
    pub enum ConditionAbatement {
        DateTime(DateTime) => "DateTime",
        Age(Quantity) => "Age",
        Period(Period) => "Period",
        Range(Range) => "Range",
        String(String) => "String",
    }
}

fhir_element! {
    pub struct ConditionParticipant : Backbone "ConditionParticipant" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Type of involvement
        function: Option<CodeableConcept> => "function";
        /// Who or what participated in the activities related to the condition
        actor: Option<Reference> => "actor", "required";
    }
}

fhir_element! {
    pub struct ConditionStage : Backbone "ConditionStage" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Simple summary (disease specific)
        summary: Option<CodeableConcept> => "summary";
        /// Formal record of assessment
        assessment: Vec<Reference> => "assessment";
        /// Kind of staging
        r#type: Option<CodeableConcept> => "type";
    }
}
